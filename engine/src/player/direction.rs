//! Direction Resolver
//!
//! Turns the held W/A/S/D combination into a yaw offset relative to the
//! camera's forward direction. With nothing held the last heading persists,
//! so brief gaps between key events do not snap the character forward.

use std::f32::consts::{FRAC_PI_2, FRAC_PI_4, PI};

use crate::input::MovementKeys;

use super::locomotion::LocomotionState;

/// Stateless mapping from movement keys to a heading offset.
pub struct DirectionResolver;

impl DirectionResolver {
    /// Offset for the held keys, or `None` when no direction key is held.
    ///
    /// Priority is W > S > A > D; diagonals combine the vertical key with
    /// the first of A/D that is held.
    pub fn offset_for(keys: &MovementKeys) -> Option<f32> {
        if keys.forward {
            if keys.left {
                Some(FRAC_PI_4)
            } else if keys.right {
                Some(-FRAC_PI_4)
            } else {
                Some(0.0)
            }
        } else if keys.backward {
            if keys.left {
                Some(FRAC_PI_4 + FRAC_PI_2)
            } else if keys.right {
                Some(-FRAC_PI_4 - FRAC_PI_2)
            } else {
                Some(PI)
            }
        } else if keys.left {
            Some(FRAC_PI_2)
        } else if keys.right {
            Some(-FRAC_PI_2)
        } else {
            None
        }
    }

    /// Resolve the offset for this tick and remember it.
    ///
    /// Writes both `direction_offset` and `previous_direction_offset`, also
    /// when nothing is held (the previous value passes through unchanged).
    pub fn resolve(keys: &MovementKeys, state: &mut LocomotionState) -> f32 {
        let offset = Self::offset_for(keys).unwrap_or(state.previous_direction_offset);
        state.direction_offset = offset;
        state.previous_direction_offset = offset;
        offset
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(w: bool, a: bool, s: bool, d: bool) -> MovementKeys {
        MovementKeys {
            forward: w,
            left: a,
            backward: s,
            right: d,
            run: false,
        }
    }

    #[test]
    fn test_table() {
        let cases = [
            (keys(true, true, false, false), FRAC_PI_4),
            (keys(true, false, false, true), -FRAC_PI_4),
            (keys(true, false, false, false), 0.0),
            (keys(false, true, true, false), 3.0 * FRAC_PI_4),
            (keys(false, false, true, true), -3.0 * FRAC_PI_4),
            (keys(false, false, true, false), PI),
            (keys(false, true, false, false), FRAC_PI_2),
            (keys(false, false, false, true), -FRAC_PI_2),
        ];
        for (input, expected) in cases {
            let offset = DirectionResolver::offset_for(&input).unwrap();
            assert!((offset - expected).abs() < 1e-6, "{input:?} -> {offset}");
        }
    }

    #[test]
    fn test_priority_conflicts() {
        // W beats S, A beats D
        assert_eq!(DirectionResolver::offset_for(&keys(true, false, true, false)), Some(0.0));
        assert_eq!(
            DirectionResolver::offset_for(&keys(true, true, false, true)),
            Some(FRAC_PI_4)
        );
        assert_eq!(
            DirectionResolver::offset_for(&keys(false, true, false, true)),
            Some(FRAC_PI_2)
        );
    }

    #[test]
    fn test_nothing_held_keeps_last() {
        let mut state = LocomotionState::default();
        assert_eq!(DirectionResolver::resolve(&keys(false, false, true, false), &mut state), PI);
        assert_eq!(DirectionResolver::resolve(&MovementKeys::default(), &mut state), PI);
        assert_eq!(DirectionResolver::resolve(&MovementKeys::default(), &mut state), PI);
        assert_eq!(state.direction_offset, PI);
        assert_eq!(state.previous_direction_offset, PI);
    }

    #[test]
    fn test_initial_heading_is_forward() {
        let mut state = LocomotionState::default();
        assert_eq!(DirectionResolver::resolve(&MovementKeys::default(), &mut state), 0.0);
    }
}
