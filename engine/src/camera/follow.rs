//! Follow Camera
//!
//! Camera position plus orbit focus point. Each tick the controller shifts
//! the camera by the character's net displacement and re-centres the focus
//! on the character, which keeps whatever offset the orbit control chose.

use glam::Vec3;

use crate::physics::FALLBACK_FORWARD;

/// Initial camera placement for centimetre-scale scenes.
pub const DEFAULT_CAMERA_POSITION: Vec3 = Vec3::new(0.0, 300.0, 800.0);

/// Initial orbit focus point.
pub const DEFAULT_CAMERA_TARGET: Vec3 = Vec3::new(0.0, 100.0, 0.0);

/// World-space camera position and the point it orbits / looks at.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CameraState {
    /// Camera eye position
    pub position: Vec3,
    /// Orbit focus point
    pub target: Vec3,
}

impl Default for CameraState {
    fn default() -> Self {
        Self::new(DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_TARGET)
    }
}

impl CameraState {
    pub fn new(position: Vec3, target: Vec3) -> Self {
        Self { position, target }
    }

    /// Unit viewing direction. Falls back to [`FALLBACK_FORWARD`] when the
    /// camera sits on its target.
    pub fn world_direction(&self) -> Vec3 {
        (self.target - self.position)
            .try_normalize()
            .unwrap_or(FALLBACK_FORWARD)
    }

    /// Horizontal offset from `point` to the camera, `(dx, dz)`.
    #[inline]
    pub fn horizontal_offset_from(&self, point: Vec3) -> (f32, f32) {
        (self.position.x - point.x, self.position.z - point.z)
    }

    /// Shift the camera by the character's motion from `previous` to
    /// `current` and focus on `current`.
    ///
    /// Only X/Z are followed unless `vertical` is set.
    pub fn follow(&mut self, previous: Vec3, current: Vec3, vertical: bool) {
        let mut delta = current - previous;
        if !vertical {
            delta.y = 0.0;
        }
        self.position += delta;
        self.target = current;
    }
}
