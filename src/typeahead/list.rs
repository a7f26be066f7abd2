//! The navigable suggestion list: a truncated ranked list with a cyclic
//! active index and a Hidden/Shown state.

use tracing::trace;

/// Visibility of the suggestion list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ListState {
    /// Nothing rendered.
    #[default]
    Hidden,
    /// Items rendered with an active index.
    Shown,
}

/// Suggestion list state machine.
#[derive(Debug, Clone)]
pub struct NavigableList<T> {
    /// Rendered (truncated) items.
    items: Vec<T>,
    /// Active index; `None` whenever the list is hidden.
    active: Option<usize>,
    /// Maximum number of rendered items.
    max_items: usize,
}

impl<T> NavigableList<T> {
    /// Create a hidden list rendering at most `max_items` items.
    ///
    /// A `max_items` of zero is treated as one.
    pub fn new(max_items: usize) -> Self {
        Self {
            items: Vec::new(),
            active: None,
            max_items: max_items.max(1),
        }
    }

    /// Current state.
    pub fn state(&self) -> ListState {
        if self.active.is_some() {
            ListState::Shown
        } else {
            ListState::Hidden
        }
    }

    /// Whether the list is shown.
    pub fn is_shown(&self) -> bool {
        self.state() == ListState::Shown
    }

    /// Maximum number of rendered items.
    pub fn max_items(&self) -> usize {
        self.max_items
    }

    /// Rendered items.
    pub fn items(&self) -> &[T] {
        &self.items
    }

    /// Active index, if shown.
    pub fn active_index(&self) -> Option<usize> {
        self.active
    }

    /// The active item, if shown.
    pub fn active_item(&self) -> Option<&T> {
        self.active.and_then(|i| self.items.get(i))
    }

    /// Render a ranked list.
    ///
    /// A non-empty list is truncated and shown with the first item active;
    /// an empty list hides.
    pub fn present(&mut self, mut ranked: Vec<T>) -> ListState {
        if ranked.is_empty() {
            self.hide();
            return ListState::Hidden;
        }
        ranked.truncate(self.max_items);
        trace!(count = ranked.len(), "Showing suggestions");
        self.items = ranked;
        self.active = Some(0);
        ListState::Shown
    }

    /// Hide the list and drop its items.
    pub fn hide(&mut self) {
        self.items.clear();
        self.active = None;
    }

    /// Move to the next item, wrapping to the first.
    pub fn next(&mut self) {
        if let Some(i) = self.active {
            self.active = Some((i + 1) % self.items.len());
        }
    }

    /// Move to the previous item, wrapping to the last.
    pub fn prev(&mut self) {
        if let Some(i) = self.active {
            self.active = Some(if i == 0 { self.items.len() - 1 } else { i - 1 });
        }
    }

    /// Make `index` active (mouse hover). Ignored when hidden or out of range.
    pub fn set_active(&mut self, index: usize) {
        if self.active.is_some() && index < self.items.len() {
            self.active = Some(index);
        }
    }

    /// Remove and return the active item, hiding the list.
    pub fn take_active(&mut self) -> Option<T> {
        let index = self.active?;
        let item = if index < self.items.len() {
            Some(self.items.swap_remove(index))
        } else {
            None
        };
        self.hide();
        item
    }
}
