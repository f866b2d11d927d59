//! Stride Engine Library
//!
//! Third-person capsule character controller: keyboard intent and camera
//! heading go in, a collision-corrected character transform and a
//! re-synchronised follow camera come out, once per frame.
//!
//! # Modules
//!
//! - [`input`] - Held-key tracking and the per-tick movement key snapshot
//! - [`player`] - Direction, locomotion, falling and the per-frame controller
//! - [`physics`] - Capsule geometry, world query seam, collision resolution
//! - [`camera`] - Follow camera state and the orbit rig seam
//! - [`animation`] - Named clip weights and cross-fades
//! - [`app`] - Frame-loop shell handling asynchronous character/world loads
//! - [`config`] - Tunable constants with JSON overrides
//! - [`logging`] - `tracing` subscriber setup
//!
//! # Example
//!
//! ```ignore
//! use stride_engine::{ControllerConfig, MovementApp, TriangleWorld};
//! use glam::Vec3;
//!
//! stride_engine::logging::init();
//!
//! let mut app = MovementApp::new(ControllerConfig::default());
//! app.character_loaded(Vec3::new(50.0, 180.0, 40.0), ["Idle", "Walk", "Run"])?;
//!
//! let mut world = TriangleWorld::new();
//! world.push_floor((-5000.0, -5000.0), (5000.0, 5000.0), 0.0);
//! app.world_loaded(world);
//!
//! // Host frame loop
//! app.key_down("w");
//! app.update(frame_time_ms);
//! ```

pub mod animation;
pub mod app;
pub mod camera;
pub mod config;
pub mod error;
pub mod input;
pub mod logging;
pub mod physics;
pub mod player;

pub use animation::{AnimationEvent, Animator};
pub use app::MovementApp;
pub use camera::{CameraState, OrbitRig};
pub use config::{ControllerConfig, ModeParams};
pub use error::StrideError;
pub use input::{InputState, KeyEvent, MovementKeys};
pub use physics::{Capsule, CollisionResolver, CollisionResult, TriangleWorld, WorldQuery};
pub use player::{CharacterController, MovementMode, TickReport};
