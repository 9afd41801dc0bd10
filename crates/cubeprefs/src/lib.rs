//! Settings for Cubekit.
//!
//! Settings are layered: the embedded defaults, then an optional user YAML
//! file, then `CUBEKIT_`-prefixed environment variables.

use std::path::Path;
use std::time::Duration;

use cubekit_core::{ConfigError, LAYER_COUNT_RANGE};
use eyre::{Context, Result};
use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};
use thiserror::Error;


const SETTINGS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
/// Default settings, as YAML.
pub const DEFAULT_SETTINGS_STR: &str = include_str!("default.yaml");
/// Prefix for environment variables that override settings.
pub const ENV_PREFIX: &str = "CUBEKIT";

/// Policy controlling how long each turn takes, based on the queue.
#[derive(
    Serialize,
    Deserialize,
    Display,
    EnumIter,
    EnumString,
    Debug,
    Default,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum AnimationStyle {
    /// Every turn takes the configured duration.
    #[default]
    Fixed,
    /// Turns speed up exponentially as the queue grows.
    Exponential,
    /// Turns complete instantly while another turn is queued.
    Next,
    /// Turns replay at the fastest cadence at which they were submitted.
    Match,
}

/// Error produced when settings are out of range.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SettingsError {
    /// Unsupported cube size
    #[error(transparent)]
    LayerCount(#[from] ConfigError),
    /// Exponential factor does not speed turns up
    #[error("exponential factor must be greater than 1; got {0}")]
    ExponentialFactor(f64),
}

/// Cubekit settings.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct Settings {
    /// Number of layers along each edge of the cube.
    pub layer_count: u8,
    /// Duration of a single turn, in milliseconds.
    pub animation_speed_ms: u64,
    /// How turn duration reacts to queued turns.
    pub animation_style: AnimationStyle,
    /// Divisor applied once per queued turn for
    /// [`AnimationStyle::Exponential`].
    pub exponential_factor: f64,
    /// Deadline for submitted commands, in milliseconds.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub command_timeout_ms: Option<u64>,
}
impl Default for Settings {
    fn default() -> Self {
        Self {
            layer_count: cubekit_core::DEFAULT_LAYER_COUNT,
            animation_speed_ms: 100,
            animation_style: AnimationStyle::Fixed,
            exponential_factor: 2.0,
            command_timeout_ms: None,
        }
    }
}
impl Settings {
    /// Returns settings that complete every turn within a single update.
    pub fn instant(layer_count: u8) -> Self {
        Self {
            layer_count,
            animation_speed_ms: 0,
            ..Default::default()
        }
    }

    /// Loads settings from the defaults, `user_file` (if any), and
    /// environment variables.
    pub fn load(user_file: Option<&Path>) -> Result<Self> {
        Self::load_with_env_prefix(user_file, ENV_PREFIX)
    }

    /// Same as [`Self::load()`], but with a custom environment variable
    /// prefix.
    pub fn load_with_env_prefix(user_file: Option<&Path>, env_prefix: &str) -> Result<Self> {
        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_SETTINGS_STR, SETTINGS_FILE_FORMAT));

        if let Some(path) = user_file {
            log::debug!("loading settings from {}", path.display());
            config = config.add_source(config::File::from(path).format(SETTINGS_FILE_FORMAT));
        }

        config = config.add_source(config::Environment::with_prefix(env_prefix).try_parsing(true));

        let settings: Self = config
            .build()
            .and_then(|c| c.try_deserialize())
            .wrap_err("error loading settings")?;
        settings.validate().wrap_err("invalid settings")?;
        Ok(settings)
    }

    /// Parses settings from a YAML string, filling in defaults for missing
    /// fields.
    pub fn from_yaml(s: &str) -> Result<Self> {
        let settings: Self = serde_norway::from_str(s).wrap_err("error parsing settings")?;
        settings.validate().wrap_err("invalid settings")?;
        Ok(settings)
    }

    /// Serializes the settings to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        serde_norway::to_string(self).wrap_err("error serializing settings")
    }

    /// Returns an error if any setting is out of range.
    pub fn validate(&self) -> Result<(), SettingsError> {
        if !LAYER_COUNT_RANGE.contains(&self.layer_count) {
            return Err(ConfigError::LayerCountOutOfRange(self.layer_count).into());
        }
        if self.exponential_factor.is_nan() || self.exponential_factor <= 1.0 {
            return Err(SettingsError::ExponentialFactor(self.exponential_factor));
        }
        Ok(())
    }

    /// Returns the duration of a single turn.
    pub fn animation_speed(&self) -> Duration {
        Duration::from_millis(self.animation_speed_ms)
    }

    /// Returns the deadline for submitted commands.
    pub fn command_timeout(&self) -> Duration {
        let ms = self
            .command_timeout_ms
            .unwrap_or_else(|| self.animation_speed_ms.saturating_mul(100).max(100));
        Duration::from_millis(ms)
    }
}
