use std::fs;
use std::path::{Path, PathBuf};

use glam::Vec2;
use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DEFAULT_MOVE_SPEED: f32 = 1000.0;
pub const DEFAULT_DISTANCE: f32 = 1000.0;
pub const DEFAULT_LOOK_SPEED: f32 = 0.01;
pub const DEFAULT_PITCH_LIMIT: f32 = 85.0;
/// Steepest pitch a controller may be configured with
pub const MAX_PITCH_LIMIT: f32 = 90.0;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("move speed must be finite and non-negative, got {0}")]
    InvalidMoveSpeed(f32),
    #[error("look distance must be finite and positive, got {0}")]
    InvalidDistance(f32),
    #[error("look speed must be finite and non-negative, got {0}")]
    InvalidLookSpeed(f32),
    #[error("pitch limit must lie in (0, 90] degrees, got {0}")]
    InvalidPitchLimit(f32),
    #[error("viewport must have a non-zero size, got {width}x{height}")]
    EmptyViewport { width: u32, height: u32 },
    #[error("failed to read config file {}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse controller config")]
    Parse(#[from] serde_json::Error),
}

/// Size of the rendering surface in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Reference point pointer offsets are measured from
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width as f32 / 2.0, self.height as f32 / 2.0)
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(800, 600)
    }
}

/// First-person controller settings, immutable once a controller is built.
///
/// Every field is optional in serialized form and falls back to its default:
///
/// ```json
/// { "move_speed": 250.0, "enable_vertical": true }
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// World units travelled per second while a movement intent is held
    pub move_speed: f32,
    /// Radius of the sphere the look target sits on
    pub distance: f32,
    /// Degrees of rotation per pixel of pointer offset per second
    pub look_speed: f32,
    /// Let vertical pointer offset change the pitch
    pub enable_vertical: bool,
    /// Pitch is clamped to `[-pitch_limit, pitch_limit]` degrees
    pub pitch_limit: f32,
    pub viewport: Viewport,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            move_speed: DEFAULT_MOVE_SPEED,
            distance: DEFAULT_DISTANCE,
            look_speed: DEFAULT_LOOK_SPEED,
            enable_vertical: false,
            pitch_limit: DEFAULT_PITCH_LIMIT,
            viewport: Viewport::default(),
        }
    }
}

impl ControllerConfig {
    pub fn with_move_speed(mut self, move_speed: f32) -> Self {
        self.move_speed = move_speed;
        self
    }

    pub fn with_distance(mut self, distance: f32) -> Self {
        self.distance = distance;
        self
    }

    pub fn with_look_speed(mut self, look_speed: f32) -> Self {
        self.look_speed = look_speed;
        self
    }

    pub fn with_vertical(mut self, enable_vertical: bool) -> Self {
        self.enable_vertical = enable_vertical;
        self
    }

    pub fn with_pitch_limit(mut self, pitch_limit: f32) -> Self {
        self.pitch_limit = pitch_limit;
        self
    }

    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    /// Reject out-of-range settings instead of clamping them
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !self.move_speed.is_finite() || self.move_speed < 0.0 {
            return Err(ConfigError::InvalidMoveSpeed(self.move_speed));
        }
        if !self.distance.is_finite() || self.distance <= 0.0 {
            return Err(ConfigError::InvalidDistance(self.distance));
        }
        if !self.look_speed.is_finite() || self.look_speed < 0.0 {
            return Err(ConfigError::InvalidLookSpeed(self.look_speed));
        }
        if !(self.pitch_limit > 0.0 && self.pitch_limit <= MAX_PITCH_LIMIT) {
            return Err(ConfigError::InvalidPitchLimit(self.pitch_limit));
        }
        if self.viewport.width == 0 || self.viewport.height == 0 {
            return Err(ConfigError::EmptyViewport {
                width: self.viewport.width,
                height: self.viewport.height,
            });
        }
        Ok(())
    }

    /// Parse and validate a JSON document
    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON config file
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let json = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = ControllerConfig::default();
        assert_eq!(config.move_speed, 1000.0);
        assert_eq!(config.distance, 1000.0);
        assert_eq!(config.look_speed, 0.01);
        assert!(!config.enable_vertical);
        assert_eq!(config.pitch_limit, 85.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let config =
            ControllerConfig::from_json_str(r#"{ "move_speed": 250.0, "enable_vertical": true }"#)
                .unwrap();
        assert_eq!(config.move_speed, 250.0);
        assert!(config.enable_vertical);
        assert_eq!(config.distance, DEFAULT_DISTANCE);
        assert_eq!(config.viewport, Viewport::default());
    }

    #[test]
    fn test_empty_json_is_default() {
        let config = ControllerConfig::from_json_str("{}").unwrap();
        assert_eq!(config, ControllerConfig::default());
    }

    #[test]
    fn test_malformed_json_rejected() {
        let err = ControllerConfig::from_json_str("{ move_speed: }").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_json_values_are_validated() {
        let err = ControllerConfig::from_json_str(r#"{ "distance": -5.0 }"#).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidDistance(d) if d == -5.0));
    }

    #[test]
    fn test_negative_speed_rejected() {
        let config = ControllerConfig::default().with_move_speed(-1.0);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidMoveSpeed(_))
        ));
    }

    #[test]
    fn test_zero_speed_allowed() {
        let config = ControllerConfig::default().with_move_speed(0.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_nan_look_speed_rejected() {
        let config = ControllerConfig::default().with_look_speed(f32::NAN);
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidLookSpeed(_))
        ));
    }

    #[test]
    fn test_pitch_limit_bounds() {
        for limit in [0.0, -10.0, 90.5, f32::NAN] {
            let config = ControllerConfig::default().with_pitch_limit(limit);
            assert!(config.validate().is_err(), "limit {limit} accepted");
        }
        let config = ControllerConfig::default().with_pitch_limit(90.0);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_empty_viewport_rejected() {
        let config = ControllerConfig::default().with_viewport(Viewport::new(0, 600));
        assert!(matches!(
            config.validate(),
            Err(ConfigError::EmptyViewport { width: 0, height: 600 })
        ));
    }

    #[test]
    fn test_missing_file_reports_path() {
        let err = ControllerConfig::from_path("/definitely/not/here.json").unwrap_err();
        match err {
            ConfigError::Io { path, .. } => {
                assert_eq!(path, PathBuf::from("/definitely/not/here.json"))
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_viewport_center() {
        assert_eq!(Viewport::new(800, 600).center(), Vec2::new(400.0, 300.0));
    }
}
