//! Field configuration
//!
//! Loaded from JSON, validated once before a run starts.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::*;

/// Reasons a field configuration is rejected
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("field must have a non-zero size, got {width}x{height}")]
    ZeroDimension { width: u32, height: u32 },

    #[error("object size must be non-zero")]
    ZeroObjectSize,

    #[error("object size {object_size} does not fit in field width {width}")]
    ObjectTooWide { object_size: u32, width: u32 },

    #[error("object size {object_size} does not fit in field height {height}")]
    ObjectTooTall { object_size: u32, height: u32 },

    #[error("speed must be finite and non-negative, got {0}")]
    InvalidSpeed(f32),

    #[error("spawn interval must be finite and positive, got {0}")]
    InvalidSpawnInterval(f32),

    #[error("catcher baseline {0} does not keep the bucket inside the field")]
    InvalidCatcherY(f32),

    #[error("failed to read config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Play field constants, fixed for a run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldConfig {
    /// Field width
    pub width: u32,
    /// Field height
    pub height: u32,
    /// Side of the square drop and bucket sprites
    pub object_size: u32,
    /// Drop fall speed and keyboard bucket speed (units/s)
    pub speed: f32,
    /// Seconds between spawns
    pub spawn_interval_secs: f32,
    /// Fixed bottom edge of the bucket
    pub catcher_y: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            width: FIELD_WIDTH,
            height: FIELD_HEIGHT,
            object_size: OBJECT_SIZE,
            speed: MOVEMENT_SPEED,
            spawn_interval_secs: SPAWN_INTERVAL_SECS,
            catcher_y: CATCHER_Y,
        }
    }
}

impl FieldConfig {
    /// Check every constraint the simulation relies on
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width == 0 || self.height == 0 {
            return Err(ConfigError::ZeroDimension {
                width: self.width,
                height: self.height,
            });
        }
        if self.object_size == 0 {
            return Err(ConfigError::ZeroObjectSize);
        }
        if self.object_size > self.width {
            return Err(ConfigError::ObjectTooWide {
                object_size: self.object_size,
                width: self.width,
            });
        }
        if self.object_size > self.height {
            return Err(ConfigError::ObjectTooTall {
                object_size: self.object_size,
                height: self.height,
            });
        }
        if !self.speed.is_finite() || self.speed < 0.0 {
            return Err(ConfigError::InvalidSpeed(self.speed));
        }
        if self.spawn_interval_secs <= 0.0
            || Duration::try_from_secs_f32(self.spawn_interval_secs).is_err()
        {
            return Err(ConfigError::InvalidSpawnInterval(self.spawn_interval_secs));
        }
        let top = self.catcher_y + self.object_size as f32;
        if !self.catcher_y.is_finite() || self.catcher_y < 0.0 || top > self.height as f32 {
            return Err(ConfigError::InvalidCatcherY(self.catcher_y));
        }
        Ok(())
    }

    /// Parse and validate a JSON document. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path.as_ref())?;
        let config = Self::from_json(&json)?;
        log::info!("Loaded field config from {}", path.as_ref().display());
        Ok(config)
    }

    /// Like `load`, but any failure falls back to the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        match Self::load(path.as_ref()) {
            Ok(config) => config,
            Err(e) => {
                log::warn!(
                    "Using default field config ({}: {})",
                    path.as_ref().display(),
                    e
                );
                Self::default()
            }
        }
    }

    /// Largest x a drop or the bucket may take
    #[inline]
    pub fn max_x(&self) -> f32 {
        (self.width - self.object_size) as f32
    }

    #[inline]
    pub fn size(&self) -> f32 {
        self.object_size as f32
    }

    /// Spawn cadence. Intervals too large for a `Duration` saturate.
    pub fn spawn_interval(&self) -> Duration {
        Duration::try_from_secs_f32(self.spawn_interval_secs).unwrap_or(Duration::MAX)
    }
}
