//! winit key translation
//!
//! Maps winit logical keys onto the lower-cased identifiers [`InputState`]
//! expects, so a winit event loop can forward keyboard events unchanged.
//!
//! [`InputState`]: super::InputState

use winit::keyboard::{Key, NamedKey};

use super::keyboard::normalize_key;

/// Identifier for a winit logical key, or `None` for keys with no name
/// (dead keys, unidentified native codes).
pub fn key_name(key: &Key) -> Option<String> {
    match key {
        Key::Character(text) => Some(normalize_key(text.as_str())),
        Key::Named(NamedKey::Space) => Some(" ".to_string()),
        Key::Named(named) => Some(normalize_key(&format!("{named:?}"))),
        Key::Unidentified(_) | Key::Dead(_) => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_character_lowercased() {
        assert_eq!(key_name(&Key::Character("W".into())), Some("w".to_string()));
    }

    #[test]
    fn test_named_keys() {
        assert_eq!(key_name(&Key::Named(NamedKey::Shift)), Some("shift".to_string()));
        assert_eq!(key_name(&Key::Named(NamedKey::Space)), Some(" ".to_string()));
        assert_eq!(key_name(&Key::Named(NamedKey::Escape)), Some("escape".to_string()));
    }

    #[test]
    fn test_dead_key_has_no_name() {
        assert_eq!(key_name(&Key::Dead(None)), None);
    }
}
