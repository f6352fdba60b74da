//! Configuration for the guidance core.
//!
//! Provides loading, saving, and validation of quality thresholds, loop
//! timing, and the voice-command vocabulary. Thresholds are named
//! configuration rather than inline constants so they can be recalibrated per
//! camera resolution.

use crate::errors::GuidanceError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

/// Root configuration structure
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GuidanceConfig {
    pub quality: QualityThresholds,
    pub timing: TimingConfig,
    pub listener: ListenerConfig,
}

/// Thresholds applied by the guidance classifier.
///
/// Calibrated for small preview frames (~240 px wide); larger rasters will
/// need different values.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QualityThresholds {
    /// Laplacian-variance floor; below this the frame reads as blurred/shaken
    pub blur_min: f32,
    /// Mean gradient floor; below this the subject is too far (or too dark)
    pub edge_low: f32,
    /// Mean gradient ceiling; above this the subject is too close / clipping
    pub edge_high: f32,
}

/// Timing of the periodic guidance loop.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimingConfig {
    /// Interval between scoring passes in milliseconds
    pub tick_ms: u64,
    /// Preview frames are downsampled to this width before scoring
    pub sample_width: u32,
    /// Minimum gap between spoken advisories in milliseconds
    pub cooldown_ms: u64,
}

/// Voice-command listening parameters.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ListenerConfig {
    /// Hard deadline for one listening session in milliseconds
    pub deadline_ms: u64,
    /// Tokens meaning "open"
    pub open_tokens: Vec<String>,
    /// Tokens meaning "camera"
    pub camera_tokens: Vec<String>,
    /// Tokens meaning "cancel"
    pub cancel_tokens: Vec<String>,
}

impl Default for GuidanceConfig {
    fn default() -> Self {
        Self {
            quality: QualityThresholds {
                blur_min: 120.0,
                edge_low: 18.0,
                edge_high: 55.0,
            },
            timing: TimingConfig {
                tick_ms: 700,
                sample_width: 240,
                cooldown_ms: 1200,
            },
            listener: ListenerConfig {
                deadline_ms: 5000,
                open_tokens: vec!["abrir".to_string()],
                camera_tokens: vec!["câmera".to_string(), "camera".to_string()],
                cancel_tokens: vec!["cancelar".to_string()],
            },
        }
    }
}

impl GuidanceConfig {
    /// Load configuration from TOML file
    pub fn load_from_file<P: AsRef<Path>>(path: P) -> Result<Self, GuidanceError> {
        let path = path.as_ref();

        if !path.exists() {
            log::info!("Config file not found at {:?}, using defaults", path);
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .map_err(|e| GuidanceError::Config(format!("Failed to read config file: {}", e)))?;

        let config: GuidanceConfig = toml::from_str(&contents)
            .map_err(|e| GuidanceError::Config(format!("Failed to parse config file: {}", e)))?;

        log::info!("Loaded configuration from {:?}", path);
        Ok(config)
    }

    /// Save configuration to TOML file
    pub fn save_to_file<P: AsRef<Path>>(&self, path: P) -> Result<(), GuidanceError> {
        let path = path.as_ref();

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).map_err(|e| {
                GuidanceError::Config(format!("Failed to create config directory: {}", e))
            })?;
        }

        let toml_string = toml::to_string_pretty(self)
            .map_err(|e| GuidanceError::Config(format!("Failed to serialize config: {}", e)))?;

        fs::write(path, toml_string)
            .map_err(|e| GuidanceError::Config(format!("Failed to write config file: {}", e)))?;

        log::info!("Saved configuration to {:?}", path);
        Ok(())
    }

    /// Get default config file path
    pub fn default_path() -> PathBuf {
        PathBuf::from("aimcoach.toml")
    }

    /// Load from default location or create with defaults
    pub fn load_or_default() -> Self {
        Self::load_from_file(Self::default_path()).unwrap_or_else(|e| {
            log::warn!("Failed to load config, using defaults: {}", e);
            Self::default()
        })
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), GuidanceError> {
        if self.quality.blur_min <= 0.0 {
            return Err(GuidanceError::InvalidConfig(
                "blur_min must be positive".to_string(),
            ));
        }
        if self.quality.edge_low < 0.0 {
            return Err(GuidanceError::InvalidConfig(
                "edge_low must not be negative".to_string(),
            ));
        }
        if self.quality.edge_low >= self.quality.edge_high {
            return Err(GuidanceError::InvalidConfig(
                "edge_low must be below edge_high".to_string(),
            ));
        }

        if self.timing.tick_ms == 0 {
            return Err(GuidanceError::InvalidConfig(
                "tick_ms must be non-zero".to_string(),
            ));
        }
        if self.timing.cooldown_ms == 0 {
            return Err(GuidanceError::InvalidConfig(
                "cooldown_ms must be non-zero".to_string(),
            ));
        }
        // The scorer needs at least one interior pixel
        if self.timing.sample_width < 3 {
            return Err(GuidanceError::InvalidConfig(
                "sample_width must be at least 3".to_string(),
            ));
        }

        if self.listener.deadline_ms == 0 {
            return Err(GuidanceError::InvalidConfig(
                "deadline_ms must be non-zero".to_string(),
            ));
        }
        if self.listener.open_tokens.is_empty()
            || self.listener.camera_tokens.is_empty()
            || self.listener.cancel_tokens.is_empty()
        {
            return Err(GuidanceError::InvalidConfig(
                "command token lists must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
