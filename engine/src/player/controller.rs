//! Character Controller
//!
//! Per-frame composition of direction, locomotion, falling and collision for
//! a single capsule character, plus the third-person camera re-sync.
//!
//! # Tick
//!
//! 1. Resolve the key-driven yaw offset
//! 2. Turn toward `atan2(camera - model on X/Z) + PI + offset`, at most
//!    `max_turn_degrees` per tick
//! 3. Walk direction: camera view direction with its Y replaced by 0
//!    (grounded) or -1 (airborne), normalized, rotated by the offset
//! 4. Blend horizontal speed, integrate falling speed from last tick's
//!    ground contact
//! 5. `velocity = (dir.x * speed, dir.y * falling, dir.z * speed)`,
//!    displacement `velocity * dt`, resolved against the world
//! 6. Model position from the capsule, camera shifted by the model's motion
//!
//! Mode selection is not part of the tick: hosts call
//! [`CharacterController::on_input_changed`] when held keys change, which
//! also starts the animation cross-fade.
//!
//! # Usage
//!
//! ```rust,ignore
//! use stride_engine::player::CharacterController;
//! use stride_engine::config::ControllerConfig;
//!
//! let mut character = CharacterController::from_bounding_box(
//!     model_size,
//!     ["Idle", "Walk", "Run"],
//!     ControllerConfig::default(),
//! )?;
//!
//! // On key change:
//! character.on_input_changed(&input.movement());
//!
//! // Each frame:
//! character.advance_animation(dt);
//! character.tick(&input.movement(), dt, &mut camera, Some(&world));
//! ```

use std::f32::consts::PI;

use glam::{Quat, Vec3};

use crate::animation::Animator;
use crate::camera::CameraState;
use crate::config::{ControllerConfig, ModeParams};
use crate::error::StrideError;
use crate::input::MovementKeys;
use crate::physics::{Capsule, CollisionResolver, FALLBACK_FORWARD, WORLD_UP, WorldQuery};

use super::direction::DirectionResolver;
use super::fall::{FallController, FallState};
use super::locomotion::{LocomotionModel, LocomotionState, ModeChange, MovementMode};

/// Where the character model is drawn and which way it faces.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CharacterTransform {
    pub position: Vec3,
    pub rotation: Quat,
}

impl CharacterTransform {
    /// Facing angle about the world up axis.
    pub fn yaw(&self) -> f32 {
        self.rotation.to_euler(glam::EulerRot::YXZ).0
    }
}

/// Summary of one movement tick.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TickReport {
    pub mode: MovementMode,
    /// Horizontal speed after blending
    pub speed: f32,
    /// Falling speed used this tick
    pub falling_speed: f32,
    /// Yaw offset from the held keys
    pub direction_offset: f32,
    /// Proposed displacement before collision correction
    pub displacement: Vec3,
    /// Whether the capsule touched geometry
    pub grounded: bool,
    /// Model position after the tick
    pub position: Vec3,
}

/// Rotate `from` toward `to` by at most `max_angle` radians.
fn rotate_towards(from: Quat, to: Quat, max_angle: f32) -> Quat {
    let angle = from.angle_between(to);
    if angle <= max_angle || angle == 0.0 {
        return to;
    }
    from.slerp(to, max_angle / angle).normalize()
}

/// The moving character: capsule, facing, locomotion and animation state.
#[derive(Debug, Clone)]
pub struct CharacterController {
    config: ControllerConfig,
    capsule: Capsule,
    transform: CharacterTransform,
    locomotion: LocomotionModel,
    locomotion_state: LocomotionState,
    fall_state: FallState,
    animator: Animator,
}

impl CharacterController {
    /// Create a controller for an already-built capsule.
    ///
    /// The character starts Idle, airborne until the first collision pass,
    /// with the Idle clip playing.
    pub fn new(capsule: Capsule, mut animator: Animator, config: ControllerConfig) -> Self {
        animator.play(MovementMode::Idle.clip_name());
        let transform = CharacterTransform {
            position: capsule.render_position(),
            rotation: Quat::IDENTITY,
        };
        Self {
            locomotion: LocomotionModel::new(&config),
            config,
            capsule,
            transform,
            locomotion_state: LocomotionState::default(),
            fall_state: FallState::default(),
            animator,
        }
    }

    /// Build the capsule from the model's bounding-box size and create the
    /// controller.
    pub fn from_bounding_box<I, S>(
        size: Vec3,
        clip_names: I,
        config: ControllerConfig,
    ) -> Result<Self, StrideError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let capsule = Capsule::from_bounding_box(size, config.capsule_height_factor)?;
        tracing::info!(
            radius = capsule.radius,
            height = capsule.height(),
            "character capsule created"
        );
        Ok(Self::new(capsule, Animator::new(clip_names), config))
    }

    /// Re-evaluate the movement mode after held keys changed, cross-fading
    /// the animation on an actual change.
    pub fn on_input_changed(&mut self, keys: &MovementKeys) -> Option<ModeChange> {
        let change = self.locomotion.select_mode(keys, &mut self.locomotion_state)?;
        self.animator.cross_fade(
            change.from.clip_name(),
            change.to.clip_name(),
            self.config.fade_duration,
        );
        Some(change)
    }

    /// Advance animation fades by `dt` seconds.
    pub fn advance_animation(&mut self, dt: f32) {
        self.animator.update(dt);
    }

    /// Run one movement tick.
    ///
    /// Returns `None` without touching any state when the world geometry is
    /// not available yet.
    pub fn tick<W: WorldQuery + ?Sized>(
        &mut self,
        keys: &MovementKeys,
        dt: f32,
        camera: &mut CameraState,
        world: Option<&W>,
    ) -> Option<TickReport> {
        let Some(world) = world else {
            tracing::trace!("world not loaded, skipping movement tick");
            return None;
        };

        let offset = DirectionResolver::resolve(keys, &mut self.locomotion_state);
        self.turn_toward_camera(camera, offset);

        let direction = self.walk_direction(camera, offset);
        let speed = self.locomotion.blend_speed(&mut self.locomotion_state);
        let falling_speed = FallController::update(&mut self.fall_state);

        let velocity = Vec3::new(
            direction.x * speed,
            direction.y * falling_speed,
            direction.z * speed,
        );
        let displacement = velocity * dt;

        let (capsule, grounded) =
            CollisionResolver::resolve(self.capsule, displacement, Some(world));
        self.capsule = capsule;
        self.fall_state.grounded = grounded;

        let previous = self.transform.position;
        self.transform.position = self.capsule.render_position();
        camera.follow(previous, self.transform.position, self.config.camera_follows_vertical);

        Some(TickReport {
            mode: self.locomotion.mode(),
            speed,
            falling_speed,
            direction_offset: offset,
            displacement,
            grounded,
            position: self.transform.position,
        })
    }

    fn turn_toward_camera(&mut self, camera: &CameraState, offset: f32) {
        let (dx, dz) = camera.horizontal_offset_from(self.transform.position);
        let target_yaw = dx.atan2(dz) + PI + offset;
        let target = Quat::from_axis_angle(WORLD_UP, target_yaw);
        self.transform.rotation =
            rotate_towards(self.transform.rotation, target, self.config.max_turn_radians());
    }

    fn walk_direction(&self, camera: &CameraState, offset: f32) -> Vec3 {
        let mut direction = camera.world_direction();
        direction.y = if self.fall_state.grounded { 0.0 } else { -1.0 };
        let direction = direction.try_normalize().unwrap_or(FALLBACK_FORWARD);
        Quat::from_axis_angle(WORLD_UP, offset) * direction
    }

    pub fn capsule(&self) -> &Capsule {
        &self.capsule
    }

    pub fn transform(&self) -> &CharacterTransform {
        &self.transform
    }

    pub fn mode(&self) -> MovementMode {
        self.locomotion.mode()
    }

    /// Top speed and acceleration of the active mode.
    pub fn target_params(&self) -> ModeParams {
        self.locomotion.params()
    }

    pub fn locomotion_state(&self) -> &LocomotionState {
        &self.locomotion_state
    }

    pub fn fall_state(&self) -> &FallState {
        &self.fall_state
    }

    pub fn is_grounded(&self) -> bool {
        self.fall_state.grounded
    }

    pub fn animator(&self) -> &Animator {
        &self.animator
    }

    pub fn animator_mut(&mut self) -> &mut Animator {
        &mut self.animator
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }
}
