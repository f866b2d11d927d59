//! Locomotion Model
//!
//! Picks the movement mode from the held keys and blends the character's
//! horizontal speed toward that mode's top speed, one fixed step per tick.
//!
//! # Modes
//!
//! | Mode | Keys              | Max speed | Acceleration |
//! |------|-------------------|-----------|--------------|
//! | Idle | none              | 0         | 0            |
//! | Walk | W/A/S/D           | 80        | 3            |
//! | Run  | W/A/S/D + Shift   | 500       | 3            |
//!
//! Blending is `speed += acceleration` below the target and
//! `speed -= acceleration * deceleration_factor` otherwise. The step is not
//! scaled by frame time and the result is not clamped, so speed hovers a few
//! units around the target once reached. Entering Idle stops the character
//! outright.

use crate::config::{ControllerConfig, ModeParams};
use crate::input::MovementKeys;

/// Discrete movement intent, one animation clip each.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum MovementMode {
    #[default]
    Idle,
    Walk,
    Run,
}

impl MovementMode {
    /// Mode requested by a key snapshot.
    pub fn from_keys(keys: &MovementKeys) -> Self {
        if keys.any_direction() {
            if keys.is_running() {
                MovementMode::Run
            } else {
                MovementMode::Walk
            }
        } else {
            MovementMode::Idle
        }
    }

    /// Name of the animation clip played in this mode.
    pub fn clip_name(&self) -> &'static str {
        match self {
            MovementMode::Idle => "Idle",
            MovementMode::Walk => "Walk",
            MovementMode::Run => "Run",
        }
    }
}

/// A mode transition, emitted once per actual change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ModeChange {
    pub from: MovementMode,
    pub to: MovementMode,
}

/// Per-character locomotion values threaded through every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct LocomotionState {
    /// Current horizontal speed
    pub current_speed: f32,
    /// Yaw offset resolved this tick (radians)
    pub direction_offset: f32,
    /// Last resolved yaw offset, reused when no key is held
    pub previous_direction_offset: f32,
}

/// Mode selection and speed blending.
#[derive(Debug, Clone)]
pub struct LocomotionModel {
    mode: MovementMode,
    walk: ModeParams,
    run: ModeParams,
    deceleration_factor: f32,
}

impl Default for LocomotionModel {
    fn default() -> Self {
        Self::new(&ControllerConfig::default())
    }
}

impl LocomotionModel {
    /// Create a model in Idle using the config's walk/run parameters.
    pub fn new(config: &ControllerConfig) -> Self {
        Self {
            mode: MovementMode::Idle,
            walk: config.walk,
            run: config.run,
            deceleration_factor: config.deceleration_factor,
        }
    }

    /// Active mode.
    pub fn mode(&self) -> MovementMode {
        self.mode
    }

    /// Parameters of `mode`.
    pub fn params_for(&self, mode: MovementMode) -> ModeParams {
        match mode {
            MovementMode::Idle => ModeParams::new(0.0, 0.0),
            MovementMode::Walk => self.walk,
            MovementMode::Run => self.run,
        }
    }

    /// Parameters of the active mode.
    pub fn params(&self) -> ModeParams {
        self.params_for(self.mode)
    }

    /// Re-evaluate the mode from the held keys.
    ///
    /// Selecting Idle zeroes `current_speed`. Returns the transition if the
    /// mode changed.
    pub fn select_mode(
        &mut self,
        keys: &MovementKeys,
        state: &mut LocomotionState,
    ) -> Option<ModeChange> {
        let next = MovementMode::from_keys(keys);
        if next == MovementMode::Idle {
            state.current_speed = 0.0;
        }

        if next == self.mode {
            return None;
        }

        let change = ModeChange {
            from: self.mode,
            to: next,
        };
        self.mode = next;
        tracing::debug!(from = ?change.from, to = ?change.to, "movement mode changed");
        Some(change)
    }

    /// Advance `current_speed` one step toward the active mode's top speed.
    pub fn blend_speed(&self, state: &mut LocomotionState) -> f32 {
        let params = self.params();
        if state.current_speed < params.max_speed {
            state.current_speed += params.acceleration;
        } else {
            state.current_speed -= params.acceleration * self.deceleration_factor;
        }
        state.current_speed
    }

    /// Select the mode and blend speed in one step.
    pub fn update(
        &mut self,
        keys: &MovementKeys,
        state: &mut LocomotionState,
    ) -> (MovementMode, f32) {
        self.select_mode(keys, state);
        let speed = self.blend_speed(state);
        (self.mode, speed)
    }
}
