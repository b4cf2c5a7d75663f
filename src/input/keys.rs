//! Keyboard adapter.

use egui::Key;

use super::NavigationIntent;

/// Map a pressed key to an intent. `total` is the number of sections.
pub fn key_intent(key: Key, total: usize) -> Option<NavigationIntent> {
    match key {
        Key::ArrowDown | Key::PageDown | Key::Space => Some(NavigationIntent::Advance),
        Key::ArrowUp | Key::PageUp => Some(NavigationIntent::Retreat),
        Key::Home => Some(NavigationIntent::JumpTo(0)),
        Key::End if total > 0 => Some(NavigationIntent::JumpTo(total - 1)),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_mapping() {
        assert_eq!(key_intent(Key::Space, 9), Some(NavigationIntent::Advance));
        assert_eq!(key_intent(Key::PageUp, 9), Some(NavigationIntent::Retreat));
        assert_eq!(key_intent(Key::Home, 9), Some(NavigationIntent::JumpTo(0)));
        assert_eq!(key_intent(Key::End, 9), Some(NavigationIntent::JumpTo(8)));
        assert_eq!(key_intent(Key::End, 0), None);
        assert_eq!(key_intent(Key::A, 9), None);
    }
}
