//! Fall Controller
//!
//! Accumulates downward speed while the character is airborne.
//!
//! The model is frame-coupled rather than physical: every airborne tick the
//! acceleration grows by one and its square is added to the falling speed,
//! so after `n` airborne ticks the speed is `1 + 4 + ... + n^2`. Touching
//! ground resets both to zero. Neither step is scaled by frame time.

/// Vertical state threaded through every tick.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct FallState {
    /// Grows by one per airborne tick
    pub falling_acceleration: f32,
    /// Downward speed magnitude (never negative)
    pub falling_speed: f32,
    /// Result of the last collision pass
    pub grounded: bool,
}

/// Stateless fall integrator over [`FallState`].
pub struct FallController;

impl FallController {
    /// Advance one tick using `state.grounded` from the previous collision
    /// pass. Returns the falling speed to use this tick.
    pub fn update(state: &mut FallState) -> f32 {
        if state.grounded {
            state.falling_acceleration = 0.0;
            state.falling_speed = 0.0;
        } else {
            state.falling_acceleration += 1.0;
            state.falling_speed += state.falling_acceleration * state.falling_acceleration;
        }
        state.falling_speed
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_three_airborne_ticks() {
        let mut state = FallState::default();
        let speeds: Vec<f32> = (0..3).map(|_| FallController::update(&mut state)).collect();

        assert_eq!(speeds, vec![1.0, 5.0, 14.0]);
        assert_eq!(state.falling_acceleration, 3.0);
        assert_eq!(state.falling_speed, 14.0);
    }

    #[test]
    fn test_landing_resets() {
        let mut state = FallState::default();
        for _ in 0..4 {
            FallController::update(&mut state);
        }
        state.grounded = true;

        assert_eq!(FallController::update(&mut state), 0.0);
        assert_eq!(state.falling_acceleration, 0.0);
        assert_eq!(state.falling_speed, 0.0);
    }

    #[test]
    fn test_speed_never_negative() {
        let mut state = FallState::default();
        for i in 0..20 {
            state.grounded = i % 3 == 0;
            assert!(FallController::update(&mut state) >= 0.0);
        }
    }
}
