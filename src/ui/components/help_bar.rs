//! Key hints shown at the bottom of the screen.

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

/// Which keys currently do something.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HintContext {
    /// Typing in the entry with no suggestions shown.
    Entry,
    /// Suggestions are shown.
    Menu,
    /// The collection is full and the entry is hidden.
    Full,
}

impl HintContext {
    pub fn hints(self) -> &'static str {
        match self {
            HintContext::Entry => {
                "[Enter/Tab/,] add  [Backspace x2] remove last  [Esc] quit  [Ctrl+C] quit"
            }
            HintContext::Menu => "[↑/↓] choose  [Enter/Tab] accept  [Esc] close",
            HintContext::Full => "[Backspace x2] remove last  [Ctrl+C] quit",
        }
    }
}

/// Render the hints for `context` on one line.
pub fn render_help_bar(frame: &mut Frame, area: Rect, context: HintContext) {
    let line = Line::from(hint_spans(context.hints()));
    frame.render_widget(Paragraph::new(line), area);
}

/// Split hint text into spans; bracketed keys are highlighted.
fn hint_spans(hints: &str) -> Vec<Span<'static>> {
    let key_style = Style::default().fg(Color::Cyan);
    let text_style = Style::default().fg(Color::DarkGray);
    let mut spans = Vec::new();
    let mut rest = hints;

    while let Some(open) = rest.find('[') {
        let Some(close) = rest[open..].find(']').map(|i| open + i) else {
            break;
        };
        if open > 0 {
            spans.push(Span::styled(rest[..open].to_string(), text_style));
        }
        spans.push(Span::styled(rest[open..=close].to_string(), key_style));
        rest = &rest[close + 1..];
    }

    if !rest.is_empty() {
        spans.push(Span::styled(rest.to_string(), text_style));
    }
    spans
}
