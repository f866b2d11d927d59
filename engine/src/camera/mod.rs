//! Camera Module
//!
//! Third-person camera state shared between the character controller and
//! the host's orbit control. The controller only translates the camera and
//! moves its focus point; orbit rotation and zoom belong to an [`OrbitRig`].
//! This module is window-system agnostic.

pub mod follow;
pub mod orbit;

pub use follow::{CameraState, DEFAULT_CAMERA_POSITION, DEFAULT_CAMERA_TARGET};
pub use orbit::{AutoOrbit, OrbitRig};
