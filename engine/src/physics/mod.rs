//! Physics module
//!
//! Capsule geometry and static-world collision for the character controller.
//! Built from scratch without an external physics library: the character is
//! the only moving body and the world never changes after load.
//!
//! # Unit System
//!
//! Whatever units the world mesh is authored in. The reference movement
//! constants (walk 80, run 500) assume centimetre-scale scenes.
//!
//! # Submodules
//!
//! - [`types`] - Core mathematical types (Vec3, Quat) re-exported from glam
//! - [`capsule`] - Character collision volume and segment helpers
//! - [`collision`] - `WorldQuery` seam and the single-pass `CollisionResolver`
//! - [`triangle_world`] - Reference static triangle index

pub mod capsule;
pub mod collision;
pub mod triangle_world;
pub mod types;

pub use capsule::{Capsule, DEFAULT_HEIGHT_FACTOR, closest_points_between_segments};
pub use collision::{CollisionResolver, CollisionResult, WorldQuery};
pub use triangle_world::{CONTACT_TOLERANCE, Triangle, TriangleWorld};
pub use types::{FALLBACK_FORWARD, Quat, Vec3, WORLD_UP};
