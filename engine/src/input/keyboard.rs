//! Keyboard Input Module
//!
//! Key identifiers, key events, and the per-tick snapshot of movement keys.
//! Keys are plain lower-cased strings (`"w"`, `"shift"`) so any windowing
//! layer can feed them in.

/// Forward key
pub const KEY_FORWARD: &str = "w";
/// Backward key
pub const KEY_BACKWARD: &str = "s";
/// Strafe-left key
pub const KEY_LEFT: &str = "a";
/// Strafe-right key
pub const KEY_RIGHT: &str = "d";
/// Run modifier
pub const KEY_RUN: &str = "shift";

/// Canonical form of a key identifier.
pub fn normalize_key(name: &str) -> String {
    name.to_lowercase()
}

/// A key transition delivered by the host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KeyEvent {
    KeyDown(String),
    KeyUp(String),
}

impl KeyEvent {
    /// Key identifier carried by the event (as delivered, not normalized).
    pub fn key(&self) -> &str {
        match self {
            KeyEvent::KeyDown(key) | KeyEvent::KeyUp(key) => key,
        }
    }

    /// Whether this is a key-down event.
    pub fn is_pressed(&self) -> bool {
        matches!(self, KeyEvent::KeyDown(_))
    }
}

/// Snapshot of the keys that drive the character.
///
/// Taken from [`super::InputState`] once per tick; movement code never reads
/// the live key map.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct MovementKeys {
    /// W key - move forward
    pub forward: bool,
    /// S key - move backward
    pub backward: bool,
    /// A key - move left
    pub left: bool,
    /// D key - move right
    pub right: bool,
    /// Shift - run instead of walk
    pub run: bool,
}

impl MovementKeys {
    /// Create a snapshot with all keys released.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether any of W/A/S/D is held.
    pub fn any_direction(&self) -> bool {
        self.forward || self.backward || self.left || self.right
    }

    /// Whether the run modifier is held.
    pub fn is_running(&self) -> bool {
        self.run
    }
}
