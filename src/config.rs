// SPDX-License-Identifier: GPL-3.0-or-later
// src/config.rs
//
// Global configuration for the application, stored as TOML.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use serde::{Deserialize, Serialize};

use crate::app::model::FocalOptions;
use crate::constant::{CONFIG_DIR, CONFIG_FILE, DEFAULT_FOCUS_X, DEFAULT_FOCUS_Y};
use crate::domain::focal::FocusCoords;

/// Preview size requested at startup.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PreviewConfig {
    pub width: f64,
    pub height: f64,
}

/// Global configuration for the application.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Initial horizontal focus in percent.
    pub focus_x: f64,
    /// Initial vertical focus in percent.
    pub focus_y: f64,
    /// Preview shown when none is given on the command line.
    pub preview: Option<PreviewConfig>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            focus_x: DEFAULT_FOCUS_X,
            focus_y: DEFAULT_FOCUS_Y,
            preview: None,
        }
    }
}

impl AppConfig {
    /// `<config dir>/focal/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Load from `path`. A missing file yields the defaults.
    pub fn load(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            log::debug!("No config at {}, using defaults", path.display());
            return Ok(Self::default());
        }

        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&text).with_context(|| format!("Failed to parse config {}", path.display()))
    }

    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }
        let text = toml::to_string_pretty(self).context("Failed to serialize config")?;
        fs::write(path, text).with_context(|| format!("Failed to write config {}", path.display()))
    }

    pub fn options(&self) -> FocalOptions {
        FocalOptions {
            focus: FocusCoords::new(self.focus_x, self.focus_y),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_yields_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let config = AppConfig::load(&dir.path().join("absent.toml")).expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.options(), FocalOptions::default());
    }

    #[test]
    fn partial_file_fills_in_defaults() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "focus_x = 25.0\n[preview]\nwidth = 16.0\nheight = 9.0\n")
            .expect("write config");

        let config = AppConfig::load(&path).expect("config");
        assert_eq!(config.focus_x, 25.0);
        assert_eq!(config.focus_y, DEFAULT_FOCUS_Y);
        assert_eq!(
            config.preview,
            Some(PreviewConfig {
                width: 16.0,
                height: 9.0
            })
        );
    }

    #[test]
    fn save_then_load() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("nested").join("config.toml");
        let config = AppConfig {
            focus_x: 10.0,
            focus_y: 90.0,
            preview: None,
        };

        config.save(&path).expect("save");
        assert_eq!(AppConfig::load(&path).expect("load"), config);
    }

    #[test]
    fn malformed_file_is_an_error() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("config.toml");
        fs::write(&path, "focus_x = \"left\"\n").expect("write config");
        assert!(AppConfig::load(&path).is_err());
    }
}
