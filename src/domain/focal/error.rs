// SPDX-License-Identifier: GPL-3.0-or-later
// src/domain/focal/error.rs
//
// Errors raised by the focal geometry engine.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum FocalError {
    /// Image bounds must be finite and strictly positive on both axes.
    #[error("invalid bounds {width}x{height}: width and height must be greater than zero")]
    InvalidBounds { width: f64, height: f64 },

    /// `begin_drag` was called while a drag session is already active.
    #[error("a drag is already in progress")]
    DragInProgress,
}
