//! Physics type re-exports from glam
//!
//! Core mathematical types used by the capsule and collision code, plus the
//! two axis constants the controller leans on.

pub use glam::{Quat, Vec3};

/// World up axis. Yaw rotations and the vertical fall direction use it.
pub const WORLD_UP: Vec3 = Vec3::Y;

/// Heading used when a direction vector degenerates to zero length.
pub const FALLBACK_FORWARD: Vec3 = Vec3::NEG_Z;
