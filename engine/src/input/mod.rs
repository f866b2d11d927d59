//! Input Module
//!
//! Held-key tracking decoupled from any windowing system. Hosts forward
//! key-down / key-up identifiers; the controller reads a [`MovementKeys`]
//! snapshot once per tick.
//!
//! # Example
//!
//! ```rust,ignore
//! use stride_engine::input::InputState;
//!
//! let mut input = InputState::new();
//! input.set_key("W", true);
//! assert!(input.is_pressed("w"));
//! let keys = input.movement();
//! ```

pub mod keyboard;
pub mod winit_keys;

use std::collections::HashMap;

pub use keyboard::{
    KEY_BACKWARD, KEY_FORWARD, KEY_LEFT, KEY_RIGHT, KEY_RUN, KeyEvent, MovementKeys, normalize_key,
};

/// Held state of every key seen so far, keyed by lower-cased identifier.
#[derive(Debug, Clone, Default)]
pub struct InputState {
    keys: HashMap<String, bool>,
}

impl InputState {
    /// Create an input state with nothing held.
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a key transition.
    ///
    /// Returns `true` if the held state of that key actually changed.
    pub fn set_key(&mut self, name: &str, pressed: bool) -> bool {
        let previous = self.keys.insert(normalize_key(name), pressed);
        previous.unwrap_or(false) != pressed
    }

    /// Apply a host key event. Returns `true` if held state changed.
    pub fn apply(&mut self, event: &KeyEvent) -> bool {
        self.set_key(event.key(), event.is_pressed())
    }

    /// Whether `name` is currently held. Unknown keys read as released.
    pub fn is_pressed(&self, name: &str) -> bool {
        self.keys.get(&normalize_key(name)).copied().unwrap_or(false)
    }

    /// Snapshot of the movement keys.
    pub fn movement(&self) -> MovementKeys {
        MovementKeys {
            forward: self.is_pressed(KEY_FORWARD),
            backward: self.is_pressed(KEY_BACKWARD),
            left: self.is_pressed(KEY_LEFT),
            right: self.is_pressed(KEY_RIGHT),
            run: self.is_pressed(KEY_RUN),
        }
    }

    /// Release every key (focus loss).
    pub fn reset(&mut self) {
        self.keys.clear();
    }
}
