//! Screen regions of the last rendered frame, for resolving mouse events.

use ratatui::layout::{Position, Rect};

/// What a mouse position points at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Hit {
    /// Suggestion row `i`.
    MenuRow(usize),
    /// The menu border or an empty menu cell.
    Menu,
    /// The remove button of badge `i`.
    BadgeRemove(usize),
    /// Anywhere else inside the widget box.
    Widget,
    Outside,
}

/// Regions recorded while rendering the tag input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HitMap {
    pub widget: Rect,
    pub entry: Option<Rect>,
    pub menu: Option<Rect>,
    pub menu_rows: Vec<Rect>,
    /// Remove buttons, indexed like the badges.
    pub badge_removes: Vec<Rect>,
}

impl HitMap {
    /// Resolve a terminal cell. The menu is drawn on top, so it wins.
    pub fn hit(&self, column: u16, row: u16) -> Hit {
        let pos = Position::new(column, row);

        if let Some(menu) = self.menu {
            if menu.contains(pos) {
                return self
                    .menu_rows
                    .iter()
                    .position(|r| r.contains(pos))
                    .map_or(Hit::Menu, Hit::MenuRow);
            }
        }

        if let Some(i) = self.badge_removes.iter().position(|r| r.contains(pos)) {
            return Hit::BadgeRemove(i);
        }

        if self.widget.contains(pos) {
            Hit::Widget
        } else {
            Hit::Outside
        }
    }

    /// Whether the position is over the suggestion menu.
    pub fn is_over_menu(&self, column: u16, row: u16) -> bool {
        matches!(self.hit(column, row), Hit::MenuRow(_) | Hit::Menu)
    }
}
