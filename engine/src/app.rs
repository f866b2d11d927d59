//! Movement Application Shell
//!
//! Frame-loop glue between a host (window, renderer, asset loader) and the
//! character controller. The host forwards key events, reports when the
//! character model and the world geometry finish loading, and calls
//! [`MovementApp::update`] once per frame with a monotonically increasing
//! clock.
//!
//! Until the character is loaded, frames only advance the clock and the
//! orbit rig. Until the world is loaded, the character stays where it is.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_engine::app::MovementApp;
//! use stride_engine::config::ControllerConfig;
//!
//! let mut app = MovementApp::new(ControllerConfig::default());
//! app.character_loaded(model_size, ["Idle", "Walk", "Run"])?;
//! app.world_loaded(world);
//!
//! app.key_down("W");
//! app.update(16.0);
//! ```

use glam::Vec3;

use crate::camera::{CameraState, OrbitRig};
use crate::config::ControllerConfig;
use crate::error::StrideError;
use crate::input::{InputState, KeyEvent};
use crate::physics::WorldQuery;
use crate::player::{CharacterController, MovementMode, TickReport};

/// Host-facing controller shell.
pub struct MovementApp {
    config: ControllerConfig,
    input: InputState,
    camera: CameraState,
    orbit: Option<Box<dyn OrbitRig>>,
    character: Option<CharacterController>,
    world: Option<Box<dyn WorldQuery>>,
    /// Last frame time in seconds
    previous_time: Option<f64>,
    waiting_logged: bool,
}

impl MovementApp {
    /// Create an app with the default camera placement.
    pub fn new(config: ControllerConfig) -> Self {
        Self::with_camera(config, CameraState::default())
    }

    pub fn with_camera(config: ControllerConfig, camera: CameraState) -> Self {
        Self {
            config,
            input: InputState::new(),
            camera,
            orbit: None,
            character: None,
            world: None,
            previous_time: None,
            waiting_logged: false,
        }
    }

    /// Install the per-frame orbit behaviour.
    pub fn set_orbit(&mut self, orbit: Box<dyn OrbitRig>) {
        self.orbit = Some(orbit);
    }

    /// Key pressed. Identifiers are case-insensitive; unknown keys are
    /// recorded but never move the character.
    pub fn key_down(&mut self, name: &str) {
        self.set_key(name, true);
    }

    /// Key released.
    pub fn key_up(&mut self, name: &str) {
        self.set_key(name, false);
    }

    /// Apply a host key event.
    pub fn handle_key(&mut self, event: &KeyEvent) {
        self.set_key(event.key(), event.is_pressed());
    }

    fn set_key(&mut self, name: &str, pressed: bool) {
        if !self.input.set_key(name, pressed) {
            return;
        }
        if let Some(character) = self.character.as_mut() {
            character.on_input_changed(&self.input.movement());
        }
    }

    /// Release every held key, e.g. when the window loses focus.
    pub fn release_all_keys(&mut self) {
        self.input.reset();
        if let Some(character) = self.character.as_mut() {
            character.on_input_changed(&self.input.movement());
        }
    }

    /// The character model finished loading.
    ///
    /// `bounds_size` is the model's bounding-box extent; `clip_names` the
    /// animation clips it ships with. Keys already held take effect
    /// immediately.
    pub fn character_loaded<I, S>(
        &mut self,
        bounds_size: Vec3,
        clip_names: I,
    ) -> Result<(), StrideError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut character =
            CharacterController::from_bounding_box(bounds_size, clip_names, self.config.clone())?;
        for mode in [MovementMode::Idle, MovementMode::Walk, MovementMode::Run] {
            if !character.animator().has_clip(mode.clip_name()) {
                tracing::warn!(clip = mode.clip_name(), "character model has no clip for mode");
            }
        }
        character.on_input_changed(&self.input.movement());
        self.character = Some(character);
        tracing::info!("character loaded");
        Ok(())
    }

    /// The static world geometry finished loading.
    pub fn world_loaded(&mut self, world: impl WorldQuery + 'static) {
        self.world = Some(Box::new(world));
        tracing::info!("world geometry loaded");
    }

    /// Advance one frame. `time` is the host clock (milliseconds with the
    /// default `time_scale`).
    ///
    /// Returns the movement report when a movement tick actually ran.
    pub fn update(&mut self, time: f64) -> Option<TickReport> {
        let now = time * self.config.time_scale;
        let dt = match self.previous_time {
            Some(previous) => (now - previous).max(0.0) as f32,
            None => 0.0,
        };
        self.previous_time = Some(now);

        if let Some(orbit) = self.orbit.as_mut() {
            orbit.update(&mut self.camera, dt);
        }

        let character = self.character.as_mut()?;
        character.advance_animation(dt);

        let keys = self.input.movement();
        let report = character.tick(&keys, dt, &mut self.camera, self.world.as_deref());
        if report.is_none() && !self.waiting_logged {
            tracing::info!("waiting for world geometry before moving the character");
            self.waiting_logged = true;
        }
        report
    }

    pub fn config(&self) -> &ControllerConfig {
        &self.config
    }

    pub fn input(&self) -> &InputState {
        &self.input
    }

    pub fn camera(&self) -> &CameraState {
        &self.camera
    }

    pub fn camera_mut(&mut self) -> &mut CameraState {
        &mut self.camera
    }

    pub fn character(&self) -> Option<&CharacterController> {
        self.character.as_ref()
    }

    pub fn character_mut(&mut self) -> Option<&mut CharacterController> {
        self.character.as_mut()
    }

    /// Active movement mode, once the character is loaded.
    pub fn mode(&self) -> Option<MovementMode> {
        self.character.as_ref().map(CharacterController::mode)
    }

    pub fn is_world_loaded(&self) -> bool {
        self.world.is_some()
    }
}
