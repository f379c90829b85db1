// SPDX-License-Identifier: GPL-3.0-or-later
// src/constant.rs
//
// Application constants that should not be changed by the user.

/// Full scale of a focus coordinate (percent).
pub const PERCENT_SCALE: f64 = 100.0;

/// Default horizontal focus in percent (image center).
pub const DEFAULT_FOCUS_X: f64 = 50.0;

/// Default vertical focus in percent (image center).
pub const DEFAULT_FOCUS_Y: f64 = 50.0;

/// Config directory name below the platform config dir.
pub const CONFIG_DIR: &str = "focal";

/// Config file name.
pub const CONFIG_FILE: &str = "config.toml";

/// Default log filter when `RUST_LOG` is not set.
pub const DEFAULT_LOG_FILTER: &str = "info";
