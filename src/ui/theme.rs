//! Theme and styling configuration.

use ratatui::style::{Color, Modifier, Style};

/// Colors used by the tag input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Theme {
    /// Widget border.
    pub border: Color,
    /// Widget border while the entry has focus.
    pub border_focused: Color,
    /// Entry text.
    pub text: Color,
    /// Placeholder and hints.
    pub muted: Color,
    /// Badge foreground.
    pub badge_fg: Color,
    /// Badge background.
    pub badge_bg: Color,
    /// Badge background during a duplicate warning.
    pub badge_warning: Color,
    /// Badge background while marked for removal.
    pub badge_pending: Color,
    /// Background of the active suggestion.
    pub active_bg: Color,
    /// Foreground of the active suggestion.
    pub active_fg: Color,
    /// Matched part of a suggestion.
    pub emphasis: Color,
}

impl Default for Theme {
    fn default() -> Self {
        Self {
            border: Color::DarkGray,
            border_focused: Color::Cyan,
            text: Color::White,
            muted: Color::DarkGray,
            badge_fg: Color::White,
            badge_bg: Color::Blue,
            badge_warning: Color::Yellow,
            badge_pending: Color::Red,
            active_bg: Color::Cyan,
            active_fg: Color::Black,
            emphasis: Color::Yellow,
        }
    }
}

impl Theme {
    pub fn border_style(&self, focused: bool) -> Style {
        if focused {
            Style::default().fg(self.border_focused)
        } else {
            Style::default().fg(self.border)
        }
    }

    pub fn text_style(&self) -> Style {
        Style::default().fg(self.text)
    }

    pub fn muted_style(&self) -> Style {
        Style::default().fg(self.muted)
    }

    /// Badge style; pending removal wins over a warning.
    pub fn badge_style(&self, warning: bool, pending: bool) -> Style {
        let bg = if pending {
            self.badge_pending
        } else if warning {
            self.badge_warning
        } else {
            self.badge_bg
        };
        let fg = if warning && !pending {
            Color::Black
        } else {
            self.badge_fg
        };
        Style::default().fg(fg).bg(bg)
    }

    pub fn active_style(&self) -> Style {
        Style::default()
            .fg(self.active_fg)
            .bg(self.active_bg)
            .add_modifier(Modifier::BOLD)
    }

    pub fn emphasis_style(&self) -> Style {
        Style::default()
            .fg(self.emphasis)
            .add_modifier(Modifier::BOLD)
    }
}
