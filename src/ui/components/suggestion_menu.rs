//! Floating suggestion menu drawn under the entry.

use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, List, ListItem, ListState},
    Frame,
};

use crate::suggest::Highlighted;
use crate::ui::theme::Theme;

/// Menu geometry for a set of suggestions.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuLayout {
    /// Outer area including the border.
    pub area: Rect,
    /// One rect per visible row.
    pub rows: Vec<Rect>,
}

/// Place the menu just below `anchor`, clipped to `bounds`.
///
/// Returns `None` when there is nothing to show or no room.
pub fn layout_menu(items: &[Highlighted], anchor: Rect, bounds: Rect) -> Option<MenuLayout> {
    if items.is_empty() {
        return None;
    }

    let y = anchor.y.saturating_add(1);
    let x = anchor.x.max(bounds.x);
    if y >= bounds.bottom() || x >= bounds.right() {
        return None;
    }

    let widest = items
        .iter()
        .map(|item| Span::raw(item.text.as_str()).width())
        .max()
        .unwrap_or(0);
    let wanted_width = u16::try_from(widest + 4).unwrap_or(u16::MAX);
    let wanted_height = u16::try_from(items.len() + 2).unwrap_or(u16::MAX);

    let width = wanted_width.min(bounds.right() - x);
    let height = wanted_height.min(bounds.bottom() - y);
    if width < 3 || height < 3 {
        return None;
    }

    let area = Rect::new(x, y, width, height);
    let inner = Rect::new(x + 1, y + 1, width - 2, height - 2);
    let rows = (0..inner.height)
        .take(items.len())
        .map(|i| Rect::new(inner.x, inner.y + i, inner.width, 1))
        .collect();

    Some(MenuLayout { area, rows })
}

/// Draw the menu with query matches emphasized and the active row selected.
pub fn render_suggestion_menu(
    frame: &mut Frame,
    layout: &MenuLayout,
    items: &[Highlighted],
    active: Option<usize>,
    theme: &Theme,
) {
    frame.render_widget(Clear, layout.area);

    let list_items: Vec<ListItem> = items
        .iter()
        .map(|item| {
            let spans: Vec<Span> = item
                .segments()
                .into_iter()
                .map(|(text, emphasized)| {
                    if emphasized {
                        Span::styled(text.to_string(), theme.emphasis_style())
                    } else {
                        Span::styled(text.to_string(), theme.text_style())
                    }
                })
                .collect();
            ListItem::new(Line::from(spans))
        })
        .collect();

    let list = List::new(list_items)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.border_style(true)),
        )
        .highlight_style(theme.active_style());

    let mut state = ListState::default();
    state.select(active);
    frame.render_stateful_widget(list, layout.area, &mut state);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn items(texts: &[&str]) -> Vec<Highlighted> {
        texts.iter().map(|t| Highlighted::plain(*t)).collect()
    }

    #[test]
    fn test_menu_below_anchor() {
        let layout = layout_menu(
            &items(&["apple", "apricot"]),
            Rect::new(5, 2, 20, 1),
            Rect::new(0, 0, 80, 24),
        )
        .unwrap();
        assert_eq!(layout.area, Rect::new(5, 3, 11, 4));
        assert_eq!(layout.rows, vec![Rect::new(6, 4, 9, 1), Rect::new(6, 5, 9, 1)]);
    }

    #[test]
    fn test_menu_clipped_to_bounds() {
        let layout = layout_menu(
            &items(&["a", "b", "c", "d"]),
            Rect::new(0, 0, 10, 1),
            Rect::new(0, 0, 80, 5),
        )
        .unwrap();
        assert_eq!(layout.area.height, 4);
        assert_eq!(layout.rows.len(), 2);
    }

    #[test]
    fn test_no_menu_without_items_or_room() {
        let bounds = Rect::new(0, 0, 80, 24);
        assert!(layout_menu(&[], Rect::new(0, 0, 10, 1), bounds).is_none());
        assert!(layout_menu(&items(&["a"]), Rect::new(0, 23, 10, 1), bounds).is_none());
    }
}
