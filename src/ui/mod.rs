//! Terminal rendering of the tag input.
//!
//! Rendering is a pure function of widget state. Each frame returns a
//! [`HitMap`] so the host can resolve mouse positions back to menu rows and
//! badge indices.

mod components;
mod hit_map;
pub mod theme;

use ratatui::{
    layout::{Position, Rect},
    widgets::{Block, Borders},
    Frame,
};

pub use components::{
    layout_badges, layout_menu, render_badges, render_help_bar, render_suggestion_menu,
    BadgeFlow, HintContext, MenuLayout, StatusEntry, StatusKind, StatusLog, TextInput,
};
pub use hit_map::{Hit, HitMap};
pub use theme::Theme;

use crate::tags::TagInput;

/// Narrowest entry kept on the badge row before it wraps.
const MIN_ENTRY_WIDTH: u16 = 12;

/// Rows the widget box needs for `badge_rows` rows of badges plus borders.
pub fn widget_height(badge_rows: u16) -> u16 {
    badge_rows.max(1) + 2
}

/// Draw the widget into `area`: badges, the entry, then the suggestion menu
/// on top of whatever lies below.
pub fn render_tag_input<T>(frame: &mut Frame, area: Rect, widget: &TagInput<T>, theme: &Theme) -> HitMap {
    let block = Block::default()
        .title(" Tags ")
        .borders(Borders::ALL)
        .border_style(theme.border_style(widget.is_focused()));
    let inner = block.inner(area);
    frame.render_widget(block, area);

    let collection = widget.collection();
    let texts: Vec<String> = (0..collection.len())
        .map(|i| collection.text_of(i).unwrap_or_default())
        .collect();

    let flow = layout_badges(&texts, inner);
    render_badges(frame, &flow, &texts, widget.badges(), theme);

    let mut hit_map = HitMap {
        widget: area,
        badge_removes: flow.remove_buttons(),
        ..HitMap::default()
    };

    if !widget.is_input_visible() {
        return hit_map;
    }

    let Some(entry) = place_entry(flow.next, inner) else {
        return hit_map;
    };
    widget.typeahead().input().render(
        frame,
        entry,
        theme.text_style(),
        theme.muted_style(),
        widget.is_focused(),
    );
    hit_map.entry = Some(entry);

    let typeahead = widget.typeahead();
    if typeahead.is_shown() {
        let items = typeahead.suggestions();
        if let Some(menu) = layout_menu(&items, entry, frame.area()) {
            render_suggestion_menu(frame, &menu, &items, typeahead.list().active_index(), theme);
            hit_map.menu = Some(menu.area);
            hit_map.menu_rows = menu.rows;
        }
    }

    hit_map
}

/// Entry rect after the badges, wrapping when the row is too narrow.
fn place_entry(next: Position, inner: Rect) -> Option<Rect> {
    let (mut x, mut y) = (next.x, next.y);
    if x > inner.x && inner.right().saturating_sub(x) < MIN_ENTRY_WIDTH {
        x = inner.x;
        y += 1;
    }
    if y >= inner.bottom() || x >= inner.right() {
        return None;
    }
    Some(Rect::new(x, y, inner.right() - x, 1))
}
