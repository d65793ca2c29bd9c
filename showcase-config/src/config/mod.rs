//! Application configuration.
//!
//! - `mod.rs` (this file): the `Config` struct, defaults and validation
//! - `persistence.rs`: YAML load/save and XDG path helpers

mod persistence;

use crate::defaults;
use crate::error::ConfigError;
use crate::types::LogLevel;
use serde::{Deserialize, Serialize};

/// Profile editor configuration loaded from `~/.config/showcase/config.yaml`
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Config {
    /// Suggested skills offered by the skill picker, in display order
    #[serde(default = "defaults::skill_catalog")]
    pub skill_catalog: Vec<String>,

    /// Avatar shown when the profile has no picture
    #[serde(default = "defaults::default_avatar_url")]
    pub default_avatar_url: String,

    /// Route opened after the profile is saved
    #[serde(default = "defaults::submit_route")]
    pub submit_route: String,

    /// Route opened when editing is cancelled
    #[serde(default = "defaults::cancel_route")]
    pub cancel_route: String,

    /// Route shown at startup
    #[serde(default = "defaults::start_route")]
    pub start_route: String,

    #[serde(default = "defaults::window_title")]
    pub window_title: String,

    /// Initial window width in logical pixels
    #[serde(default = "defaults::window_width")]
    pub window_width: u32,

    /// Initial window height in logical pixels
    #[serde(default = "defaults::window_height")]
    pub window_height: u32,

    /// Debug log verbosity (overridden by `RUST_LOG` and `--log-level`)
    #[serde(default)]
    pub log_level: LogLevel,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            skill_catalog: defaults::skill_catalog(),
            default_avatar_url: defaults::default_avatar_url(),
            submit_route: defaults::submit_route(),
            cancel_route: defaults::cancel_route(),
            start_route: defaults::start_route(),
            window_title: defaults::window_title(),
            window_width: defaults::window_width(),
            window_height: defaults::window_height(),
            log_level: LogLevel::default(),
        }
    }
}

impl Config {
    /// Check semantic constraints that serde cannot express.
    ///
    /// Catalog entries must be non-blank and unique, and every route must be
    /// absolute.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for (i, entry) in self.skill_catalog.iter().enumerate() {
            if entry.trim().is_empty() {
                return Err(ConfigError::Validation(format!(
                    "skill_catalog[{i}] is blank"
                )));
            }
            if self.skill_catalog[..i].contains(entry) {
                return Err(ConfigError::Validation(format!(
                    "skill_catalog contains '{entry}' more than once"
                )));
            }
        }

        for (name, route) in [
            ("submit_route", &self.submit_route),
            ("cancel_route", &self.cancel_route),
            ("start_route", &self.start_route),
        ] {
            if !route.starts_with('/') {
                return Err(ConfigError::Validation(format!(
                    "{name} must start with '/', got '{route}'"
                )));
            }
        }

        Ok(())
    }
}
