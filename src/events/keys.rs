//! Key roles shared by the typeahead and the tag entry.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, ModifierKeyCode};

/// What a key means to the widget, independent of the terminal encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyRole {
    /// Tab: commit a suggestion, or flush the entry into tags.
    Tab,
    /// Enter: commit a suggestion, or flush the entry into tags.
    Enter,
    /// Escape: dismiss the suggestion list.
    Escape,
    /// Down arrow: next suggestion.
    Down,
    /// Up arrow: previous suggestion.
    Up,
    /// A bare modifier key (Shift, Ctrl, Alt).
    Modifier,
    /// Comma: tag separator.
    Comma,
    /// Backspace.
    Backspace,
    /// Anything else; edits the text.
    Other,
}

impl KeyRole {
    /// Classify a key event.
    pub fn of(key: &KeyEvent) -> Self {
        match key.code {
            KeyCode::Tab | KeyCode::BackTab => KeyRole::Tab,
            KeyCode::Enter => KeyRole::Enter,
            KeyCode::Esc => KeyRole::Escape,
            KeyCode::Down => KeyRole::Down,
            KeyCode::Up => KeyRole::Up,
            KeyCode::Modifier(code) if is_plain_modifier(code) => KeyRole::Modifier,
            KeyCode::Char(',') if !key.modifiers.contains(KeyModifiers::CONTROL) => KeyRole::Comma,
            KeyCode::Backspace => KeyRole::Backspace,
            _ => KeyRole::Other,
        }
    }

    /// Keys whose default action the typeahead suppresses while its list is shown.
    pub fn is_navigation(self) -> bool {
        matches!(
            self,
            KeyRole::Tab | KeyRole::Enter | KeyRole::Escape | KeyRole::Down | KeyRole::Up
        )
    }
}

fn is_plain_modifier(code: ModifierKeyCode) -> bool {
    matches!(
        code,
        ModifierKeyCode::LeftShift
            | ModifierKeyCode::RightShift
            | ModifierKeyCode::LeftControl
            | ModifierKeyCode::RightControl
            | ModifierKeyCode::LeftAlt
            | ModifierKeyCode::RightAlt
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_navigation_keys() {
        assert_eq!(KeyRole::of(&key(KeyCode::Tab)), KeyRole::Tab);
        assert_eq!(KeyRole::of(&key(KeyCode::Enter)), KeyRole::Enter);
        assert_eq!(KeyRole::of(&key(KeyCode::Esc)), KeyRole::Escape);
        assert_eq!(KeyRole::of(&key(KeyCode::Down)), KeyRole::Down);
        assert_eq!(KeyRole::of(&key(KeyCode::Up)), KeyRole::Up);
        assert!(KeyRole::Down.is_navigation());
        assert!(!KeyRole::Comma.is_navigation());
    }

    #[test]
    fn test_modifier_keys() {
        let shift = key(KeyCode::Modifier(ModifierKeyCode::LeftShift));
        assert_eq!(KeyRole::of(&shift), KeyRole::Modifier);
        let meta = key(KeyCode::Modifier(ModifierKeyCode::LeftMeta));
        assert_eq!(KeyRole::of(&meta), KeyRole::Other);
    }

    #[test]
    fn test_comma_and_backspace() {
        assert_eq!(KeyRole::of(&key(KeyCode::Char(','))), KeyRole::Comma);
        let ctrl_comma = KeyEvent::new(KeyCode::Char(','), KeyModifiers::CONTROL);
        assert_eq!(KeyRole::of(&ctrl_comma), KeyRole::Other);
        assert_eq!(KeyRole::of(&key(KeyCode::Backspace)), KeyRole::Backspace);
        assert_eq!(KeyRole::of(&key(KeyCode::Char('a'))), KeyRole::Other);
    }
}
