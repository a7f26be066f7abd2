//! Badge row: accepted values laid out as wrapping chips, each with a
//! remove button.

use ratatui::{
    layout::{Position, Rect},
    style::Style,
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};

use crate::tags::Badge;
use crate::ui::theme::Theme;

/// Glyph of the remove button.
const REMOVE_GLYPH: &str = "×";

/// Where each badge landed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BadgeFlow {
    /// One slot per badge that fits, in order.
    pub slots: Vec<Rect>,
    /// First free cell after the last badge.
    pub next: Position,
}

impl BadgeFlow {
    /// Remove-button cell of each placed badge.
    pub fn remove_buttons(&self) -> Vec<Rect> {
        self.slots
            .iter()
            .map(|slot| Rect::new(slot.right().saturating_sub(1), slot.y, 1, 1))
            .collect()
    }
}

fn badge_width(text: &str) -> u16 {
    // " text ×"
    let width = Span::raw(text).width() + 3;
    u16::try_from(width).unwrap_or(u16::MAX)
}

/// Flow badges left to right, wrapping to the next row when one does not fit.
///
/// Badges wider than the area are clipped; badges past the last row are not
/// placed.
pub fn layout_badges(texts: &[String], area: Rect) -> BadgeFlow {
    let mut x = area.x;
    let mut y = area.y;
    let mut slots = Vec::with_capacity(texts.len());

    for text in texts {
        let width = badge_width(text);
        if x > area.x && x.saturating_add(width) > area.right() {
            x = area.x;
            y += 1;
        }
        if y >= area.bottom() {
            break;
        }
        let clipped = width.min(area.right() - x);
        slots.push(Rect::new(x, y, clipped, 1));
        x = x.saturating_add(width + 1).min(area.right());
    }

    BadgeFlow {
        slots,
        next: Position::new(x, y),
    }
}

/// Draw the badges placed by `flow`.
pub fn render_badges(frame: &mut Frame, flow: &BadgeFlow, texts: &[String], badges: &[Badge], theme: &Theme) {
    for (i, (slot, text)) in flow.slots.iter().zip(texts).enumerate() {
        let badge = badges.get(i).copied().unwrap_or_default();
        let style = theme.badge_style(badge.is_warning(), badge.is_pending_removal());
        let line = Line::from(vec![
            Span::styled(format!(" {} ", text), style),
            Span::styled(REMOVE_GLYPH, style),
        ]);
        frame.render_widget(Paragraph::new(line).style(Style::default()), *slot);
    }
}
