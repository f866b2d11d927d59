//! Player Module
//!
//! Capsule character movement driven by keyboard input and camera heading.
//!
//! # Components
//!
//! - [`DirectionResolver`] - W/A/S/D combination to yaw offset, remembering the last heading
//! - [`LocomotionModel`] - Idle / Walk / Run selection and per-tick speed blending
//! - [`FallController`] - Frame-coupled fall acceleration while airborne
//! - [`CharacterController`] - Per-frame orchestration, collision and camera re-sync
//!
//! Per-character values live in [`LocomotionState`] and [`FallState`], which
//! the controller threads through each tick.

pub mod controller;
pub mod direction;
pub mod fall;
pub mod locomotion;

pub use controller::{CharacterController, CharacterTransform, TickReport};
pub use direction::DirectionResolver;
pub use fall::{FallController, FallState};
pub use locomotion::{LocomotionModel, LocomotionState, ModeChange, MovementMode};
