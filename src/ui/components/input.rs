//! Single-line text entry used as the widget's input surface.
//!
//! The cursor is tracked in characters, so multi-byte input edits cleanly.
//! Supported editing keys:
//! - Character input, Backspace and Delete
//! - Left/Right, Home/End, Ctrl+A/Ctrl+E
//! - Ctrl+U (clear) and Ctrl+W (delete previous word)

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// A text entry with a character cursor and a placeholder.
#[derive(Debug, Clone, Default)]
pub struct TextInput {
    /// The current text.
    value: String,
    /// Cursor position, in characters.
    cursor: usize,
    /// Text shown while the entry is empty.
    placeholder: String,
}

impl TextInput {
    /// Create an empty entry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an entry with an initial value and the cursor at the end.
    pub fn with_value(value: impl Into<String>) -> Self {
        let mut input = Self::new();
        input.set_value(value);
        input
    }

    /// Set the placeholder text.
    pub fn set_placeholder(&mut self, placeholder: impl Into<String>) {
        self.placeholder = placeholder.into();
    }

    /// The placeholder text.
    pub fn placeholder(&self) -> &str {
        &self.placeholder
    }

    /// The current text.
    pub fn value(&self) -> &str {
        &self.value
    }

    /// Replace the text and move the cursor to the end.
    pub fn set_value(&mut self, value: impl Into<String>) {
        self.value = value.into();
        self.cursor = self.char_len();
    }

    /// Clear the text.
    pub fn clear(&mut self) {
        self.value.clear();
        self.cursor = 0;
    }

    /// Whether the text is empty.
    pub fn is_empty(&self) -> bool {
        self.value.is_empty()
    }

    /// Cursor position in characters.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Insert a string at the cursor.
    pub fn insert_str(&mut self, text: &str) {
        let at = self.byte_index(self.cursor);
        self.value.insert_str(at, text);
        self.cursor += text.chars().count();
    }

    /// Apply an editing key.
    ///
    /// Returns true if the text changed.
    pub fn handle_input(&mut self, key: KeyEvent) -> bool {
        match (key.code, key.modifiers) {
            (KeyCode::Char('a'), KeyModifiers::CONTROL) | (KeyCode::Home, _) => {
                self.cursor = 0;
                false
            }
            (KeyCode::Char('e'), KeyModifiers::CONTROL) | (KeyCode::End, _) => {
                self.cursor = self.char_len();
                false
            }
            (KeyCode::Char('u'), KeyModifiers::CONTROL) => {
                let changed = !self.value.is_empty();
                self.clear();
                changed
            }
            (KeyCode::Char('w'), KeyModifiers::CONTROL) => self.delete_word(),
            (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
                let at = self.byte_index(self.cursor);
                self.value.insert(at, c);
                self.cursor += 1;
                true
            }
            (KeyCode::Backspace, _) => {
                if self.cursor == 0 {
                    return false;
                }
                self.cursor -= 1;
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Delete, _) => {
                if self.cursor >= self.char_len() {
                    return false;
                }
                let at = self.byte_index(self.cursor);
                self.value.remove(at);
                true
            }
            (KeyCode::Left, _) => {
                self.cursor = self.cursor.saturating_sub(1);
                false
            }
            (KeyCode::Right, _) => {
                self.cursor = (self.cursor + 1).min(self.char_len());
                false
            }
            _ => false,
        }
    }

    /// Delete the word before the cursor, along with trailing spaces.
    fn delete_word(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        let end = self.byte_index(self.cursor);
        let before = self.value[..end].trim_end();
        let start = before
            .rfind(|c: char| !c.is_alphanumeric())
            .map(|i| i + before[i..].chars().next().map_or(1, char::len_utf8))
            .unwrap_or(0);
        self.value.replace_range(start..end, "");
        self.cursor = self.value[..start].chars().count();
        true
    }

    fn char_len(&self) -> usize {
        self.value.chars().count()
    }

    fn byte_index(&self, char_pos: usize) -> usize {
        self.value
            .char_indices()
            .nth(char_pos)
            .map_or(self.value.len(), |(i, _)| i)
    }

    /// Render the entry on one line, placing the terminal cursor when focused.
    pub fn render(&self, frame: &mut Frame, area: Rect, style: Style, placeholder_style: Style, focused: bool) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        let line = if self.value.is_empty() {
            Line::from(Span::styled(self.placeholder.clone(), placeholder_style))
        } else {
            Line::from(Span::styled(self.value.clone(), style))
        };
        frame.render_widget(Paragraph::new(line), area);

        if focused {
            let offset = (self.cursor as u16).min(area.width.saturating_sub(1));
            frame.set_cursor_position(Position::new(area.x + offset, area.y));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut TextInput, code: KeyCode) -> bool {
        input.handle_input(KeyEvent::new(code, KeyModifiers::NONE))
    }

    #[test]
    fn test_new_input() {
        let input = TextInput::new();
        assert!(input.is_empty());
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_typing_and_backspace() {
        let mut input = TextInput::new();
        assert!(press(&mut input, KeyCode::Char('a')));
        assert!(press(&mut input, KeyCode::Char('b')));
        assert_eq!(input.value(), "ab");

        assert!(press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "a");
        assert_eq!(input.cursor(), 1);
    }

    #[test]
    fn test_backspace_on_empty_is_noop() {
        let mut input = TextInput::new();
        assert!(!press(&mut input, KeyCode::Backspace));
    }

    #[test]
    fn test_multibyte_editing() {
        let mut input = TextInput::with_value("héllo");
        assert_eq!(input.cursor(), 5);

        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        press(&mut input, KeyCode::Left);
        assert!(press(&mut input, KeyCode::Backspace));
        assert_eq!(input.value(), "hllo");

        press(&mut input, KeyCode::Home);
        assert!(press(&mut input, KeyCode::Delete));
        assert_eq!(input.value(), "llo");

        press(&mut input, KeyCode::End);
        assert!(press(&mut input, KeyCode::Char('ü')));
        assert_eq!(input.value(), "lloü");
    }

    #[test]
    fn test_delete_at_end_is_noop() {
        let mut input = TextInput::with_value("abc");
        assert!(!press(&mut input, KeyCode::Delete));
        assert_eq!(input.value(), "abc");
    }

    #[test]
    fn test_cursor_bounds() {
        let mut input = TextInput::with_value("ab");
        press(&mut input, KeyCode::Right);
        assert_eq!(input.cursor(), 2);
        press(&mut input, KeyCode::Home);
        press(&mut input, KeyCode::Left);
        assert_eq!(input.cursor(), 0);
    }

    #[test]
    fn test_ctrl_u_and_ctrl_w() {
        let mut input = TextInput::with_value("hello big world");
        let ctrl_w = KeyEvent::new(KeyCode::Char('w'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_w));
        assert_eq!(input.value(), "hello big ");
        assert!(input.handle_input(ctrl_w));
        assert_eq!(input.value(), "hello ");

        let ctrl_u = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        assert!(input.handle_input(ctrl_u));
        assert!(input.is_empty());
        assert!(!input.handle_input(ctrl_u));
    }

    #[test]
    fn test_insert_str_in_middle() {
        let mut input = TextInput::with_value("ac");
        press(&mut input, KeyCode::Left);
        input.insert_str("bb");
        assert_eq!(input.value(), "abbc");
        assert_eq!(input.cursor(), 3);
    }

    #[test]
    fn test_control_chars_do_not_insert() {
        let mut input = TextInput::new();
        let ctrl_x = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::CONTROL);
        assert!(!input.handle_input(ctrl_x));
        assert!(input.is_empty());
    }

    #[test]
    fn test_placeholder() {
        let mut input = TextInput::new();
        input.set_placeholder("Add a tag");
        assert_eq!(input.placeholder(), "Add a tag");
        assert!(input.is_empty());
    }
}
