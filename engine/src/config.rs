//! Controller Configuration
//!
//! Tuning values for locomotion, turning, animation fades and capsule
//! sizing. `Default` returns the reference values; any subset can be
//! overridden from JSON.
//!
//! ```json
//! { "run": { "max_speed": 350.0, "acceleration": 4.0 }, "max_turn_degrees": 8.0 }
//! ```

use std::path::Path;

use serde::{Deserialize, Serialize};
use static_assertions::const_assert;

use crate::error::StrideError;

/// Reference walk top speed.
pub const WALK_MAX_SPEED: f32 = 80.0;
/// Reference run top speed.
pub const RUN_MAX_SPEED: f32 = 500.0;
/// Per-tick speed gain for walk and run.
pub const MOVE_ACCELERATION: f32 = 3.0;
/// Deceleration is this multiple of the mode's acceleration.
pub const DECELERATION_FACTOR: f32 = 2.0;
/// Animation cross-fade length (animation time units).
pub const FADE_DURATION: f32 = 0.5;
/// Maximum facing change per tick, in degrees.
pub const MAX_TURN_DEGREES: f32 = 5.0;
/// Host clocks report milliseconds.
pub const MILLIS_TO_SECONDS: f64 = 0.001;

const_assert!(WALK_MAX_SPEED < RUN_MAX_SPEED);
const_assert!(MOVE_ACCELERATION > 0.0);
const_assert!(MAX_TURN_DEGREES > 0.0);

/// Top speed and per-tick acceleration of one movement mode.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ModeParams {
    pub max_speed: f32,
    pub acceleration: f32,
}

impl ModeParams {
    pub const fn new(max_speed: f32, acceleration: f32) -> Self {
        Self {
            max_speed,
            acceleration,
        }
    }
}

/// Full controller tuning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ControllerConfig {
    /// Walk mode (movement key held)
    pub walk: ModeParams,
    /// Run mode (movement key + shift)
    pub run: ModeParams,
    /// Deceleration as a multiple of acceleration
    pub deceleration_factor: f32,
    /// Cross-fade length between movement animations
    pub fade_duration: f32,
    /// Maximum facing rotation per tick, degrees
    pub max_turn_degrees: f32,
    /// Capsule height as a multiple of the model's bounding-box height
    pub capsule_height_factor: f32,
    /// Shift the camera vertically with the character as well as on X/Z
    pub camera_follows_vertical: bool,
    /// Factor converting host frame time to seconds
    pub time_scale: f64,
}

impl Default for ControllerConfig {
    fn default() -> Self {
        Self {
            walk: ModeParams::new(WALK_MAX_SPEED, MOVE_ACCELERATION),
            run: ModeParams::new(RUN_MAX_SPEED, MOVE_ACCELERATION),
            deceleration_factor: DECELERATION_FACTOR,
            fade_duration: FADE_DURATION,
            max_turn_degrees: MAX_TURN_DEGREES,
            capsule_height_factor: crate::physics::DEFAULT_HEIGHT_FACTOR,
            camera_follows_vertical: false,
            time_scale: MILLIS_TO_SECONDS,
        }
    }
}

impl ControllerConfig {
    /// Parse and validate a JSON document. Missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self, StrideError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Load and validate a JSON config file.
    pub fn load(path: &Path) -> Result<Self, StrideError> {
        let json = std::fs::read_to_string(path)?;
        let config = Self::from_json_str(&json)?;
        tracing::info!(path = %path.display(), "loaded controller config");
        Ok(config)
    }

    /// Write this config as pretty JSON, creating parent directories.
    pub fn save(&self, path: &Path) -> Result<(), StrideError> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let json = serde_json::to_string_pretty(self)?;
        std::fs::write(path, json)?;
        Ok(())
    }

    /// Maximum facing rotation per tick in radians.
    #[inline]
    pub fn max_turn_radians(&self) -> f32 {
        self.max_turn_degrees.to_radians()
    }

    /// Reject values the controller cannot run with.
    pub fn validate(&self) -> Result<(), StrideError> {
        let scalars = [
            ("walk.max_speed", self.walk.max_speed),
            ("walk.acceleration", self.walk.acceleration),
            ("run.max_speed", self.run.max_speed),
            ("run.acceleration", self.run.acceleration),
            ("deceleration_factor", self.deceleration_factor),
            ("fade_duration", self.fade_duration),
            ("max_turn_degrees", self.max_turn_degrees),
            ("capsule_height_factor", self.capsule_height_factor),
        ];
        for (name, value) in scalars {
            if !value.is_finite() || value < 0.0 {
                return Err(StrideError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if self.capsule_height_factor == 0.0 {
            return Err(StrideError::InvalidConfig(
                "capsule_height_factor must be positive".to_string(),
            ));
        }
        if self.walk.max_speed > self.run.max_speed {
            return Err(StrideError::InvalidConfig(format!(
                "walk.max_speed ({}) exceeds run.max_speed ({})",
                self.walk.max_speed, self.run.max_speed
            )));
        }
        if !self.time_scale.is_finite() || self.time_scale <= 0.0 {
            return Err(StrideError::InvalidConfig(format!(
                "time_scale must be positive, got {}",
                self.time_scale
            )));
        }
        Ok(())
    }
}
