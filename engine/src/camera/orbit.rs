//! Orbit Rig
//!
//! Seam for whatever rotates and zooms the camera around its target (mouse
//! orbit controls in an interactive host). The app calls [`OrbitRig::update`]
//! once per frame before the character tick.

use glam::{Quat, Vec3};

use super::follow::CameraState;

/// Per-frame camera orbit behaviour.
pub trait OrbitRig {
    /// Adjust `camera` for a frame of length `dt` seconds.
    fn update(&mut self, camera: &mut CameraState, dt: f32);
}

/// Orbits the camera around its target at a constant yaw rate.
///
/// Used by headless runs to exercise camera-relative movement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AutoOrbit {
    /// Radians per second, positive is counter-clockwise seen from above
    pub yaw_rate: f32,
}

impl AutoOrbit {
    pub fn new(yaw_rate: f32) -> Self {
        Self { yaw_rate }
    }
}

impl OrbitRig for AutoOrbit {
    fn update(&mut self, camera: &mut CameraState, dt: f32) {
        if dt <= 0.0 || self.yaw_rate == 0.0 {
            return;
        }
        let rotation = Quat::from_rotation_y(self.yaw_rate * dt);
        let offset: Vec3 = camera.position - camera.target;
        camera.position = camera.target + rotation * offset;
    }
}
