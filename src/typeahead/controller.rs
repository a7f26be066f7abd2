//! Typeahead controller.
//!
//! Binds the input lifecycle (focus, text change, key navigation, mouse,
//! commit) to a [`NavigableList`] and a [`SuggestionEngine`]. Keys arrive in
//! two phases like a browser: `on_key_down` decides whether the input's
//! default editing happens, `on_key_up` runs lookups and commits.

use std::fmt;
use std::sync::Arc;

use crossterm::event::KeyEvent;
use tokio::sync::mpsc;
use tracing::{debug, trace};

use super::list::NavigableList;
use crate::config::WidgetSettings;
use crate::error::Result;
use crate::events::KeyRole;
use crate::suggest::{Candidate, Deliver, Delivery, EngineOptions, Highlighted, Source, SuggestionEngine};
use crate::ui::TextInput;

/// Computes the new input text from a committed item.
pub type UpdateFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Construction options for a [`TypeaheadController`].
pub struct TypeaheadOptions<T> {
    /// Where candidates come from.
    pub source: Source<T>,
    /// Matcher/sorter/highlighter/text overrides.
    pub engine: EngineOptions<T>,
    /// Turns a committed item into input text; defaults to its display text.
    pub update: Option<UpdateFn<T>>,
    /// Minimum query length in characters.
    pub min_length: usize,
    /// Maximum number of rendered suggestions.
    pub items: usize,
    /// Placeholder of the input.
    pub placeholder: String,
}

impl<T> TypeaheadOptions<T> {
    /// Options with default settings for the given source.
    pub fn new(source: Source<T>) -> Self {
        Self::from_settings(&WidgetSettings::default(), source)
    }

    /// Options taking the plain values from `settings`.
    pub fn from_settings(settings: &WidgetSettings, source: Source<T>) -> Self {
        Self {
            source,
            engine: EngineOptions::default(),
            update: None,
            min_length: settings.min_length,
            items: settings.items,
            placeholder: settings.placeholder.clone(),
        }
    }
}

/// How the host should treat a key after `on_key_down`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeyResponse {
    /// The input's default action (text editing) was suppressed.
    pub prevent_default: bool,
    /// The key should not reach other handlers.
    pub stop_propagation: bool,
}

/// Result of a commit.
#[derive(Debug, Clone, PartialEq)]
pub enum TypeaheadAction<T> {
    /// An item was selected and the input text replaced.
    Selected {
        /// The committed item.
        item: T,
        /// Text written into the input by the update hook.
        text: String,
    },
}

/// Outcome of asking the source for candidates.
enum Lookup<T> {
    Ready(Result<Vec<T>>),
    Pending,
}

/// Incremental suggestion controller over a text input.
pub struct TypeaheadController<T> {
    input: TextInput,
    engine: SuggestionEngine<T>,
    list: NavigableList<T>,
    source: Source<T>,
    update: UpdateFn<T>,
    min_length: usize,
    /// Trimmed text of the last lookup.
    query: String,
    focused: bool,
    /// Pointer is over the suggestion list; blur must not hide it.
    moused_over: bool,
    /// Incremented on every lookup and hide; deliveries for older values are stale.
    generation: u64,
    tx: mpsc::UnboundedSender<Delivery<T>>,
    rx: mpsc::UnboundedReceiver<Delivery<T>>,
}

impl<T: Candidate + 'static> TypeaheadController<T> {
    /// Create a controller, resolving all strategies once.
    pub fn new(options: TypeaheadOptions<T>) -> Self {
        let update: UpdateFn<T> = match (options.update, options.engine.item_text.clone()) {
            (Some(update), _) => update,
            (None, Some(text)) => text,
            (None, None) => Arc::new(|item: &T| item.text().into_owned()),
        };

        let mut input = TextInput::new();
        input.set_placeholder(options.placeholder);

        let (tx, rx) = mpsc::unbounded_channel();

        Self {
            input,
            engine: SuggestionEngine::new(options.engine),
            list: NavigableList::new(options.items),
            source: options.source,
            update,
            min_length: options.min_length,
            query: String::new(),
            focused: false,
            moused_over: false,
            generation: 0,
            tx,
            rx,
        }
    }
}

impl<T> TypeaheadController<T> {
    /// The input surface.
    pub fn input(&self) -> &TextInput {
        &self.input
    }

    /// Mutable access to the input surface.
    pub fn input_mut(&mut self) -> &mut TextInput {
        &mut self.input
    }

    /// Replace the input text without running a lookup.
    pub fn set_text(&mut self, text: impl Into<String>) {
        self.input.set_value(text);
    }

    /// The query of the last lookup.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// The suggestion list.
    pub fn list(&self) -> &NavigableList<T> {
        &self.list
    }

    /// The suggestion engine.
    pub fn engine(&self) -> &SuggestionEngine<T> {
        &self.engine
    }

    /// Whether the suggestion list is shown.
    pub fn is_shown(&self) -> bool {
        self.list.is_shown()
    }

    /// Whether the input has focus.
    pub fn is_focused(&self) -> bool {
        self.focused
    }

    /// Whether the pointer is over the suggestion list.
    pub fn is_moused_over(&self) -> bool {
        self.moused_over
    }

    /// Rendered suggestions with the query emphasized.
    pub fn suggestions(&self) -> Vec<Highlighted> {
        self.list
            .items()
            .iter()
            .map(|item| self.engine.highlight(item, &self.query))
            .collect()
    }

    /// Hide the list and discard any pending deferred lookup.
    pub fn hide(&mut self) {
        self.generation += 1;
        if self.list.is_shown() {
            trace!("Hiding suggestions");
            self.list.hide();
        }
    }

    /// Consume deferred deliveries, dropping stale ones.
    ///
    /// Returns true if the list was updated.
    pub fn poll(&mut self) -> bool {
        let mut updated = false;
        while let Ok(delivery) = self.rx.try_recv() {
            if delivery.generation != self.generation {
                debug!(
                    generation = delivery.generation,
                    current = self.generation,
                    "Dropping stale suggestions"
                );
                continue;
            }
            self.process(delivery.items);
            updated = true;
        }
        updated
    }

    fn process(&mut self, items: Vec<T>) {
        let ranked = self.engine.rank(items, &self.query);
        trace!(query = %self.query, count = ranked.len(), "Ranked suggestions");
        self.list.present(ranked);
    }

    /// First phase of a key press.
    ///
    /// While the list is shown, navigation keys are consumed here. Otherwise
    /// the key is applied to the input text.
    pub fn on_key_down(&mut self, key: &KeyEvent) -> KeyResponse {
        let role = KeyRole::of(key);
        let mut response = KeyResponse::default();

        if self.list.is_shown() && role.is_navigation() {
            response.prevent_default = true;
            response.stop_propagation = true;
            match role {
                KeyRole::Down => self.list.next(),
                KeyRole::Up => self.list.prev(),
                _ => {}
            }
        }

        if !response.prevent_default {
            self.input.handle_input(*key);
        }
        response
    }

    /// Commit the active suggestion.
    ///
    /// Writes the update hook's text into the input and hides the list.
    pub fn commit(&mut self) -> Option<TypeaheadAction<T>> {
        let item = self.list.take_active()?;
        self.generation += 1;
        self.moused_over = false;

        let text = (self.update)(&item);
        self.input.set_value(text.clone());
        self.query.clear();
        debug!(text = %text, "Suggestion committed");
        Some(TypeaheadAction::Selected { item, text })
    }

    /// The pointer is over suggestion `index`.
    pub fn on_mouse_enter(&mut self, index: usize) {
        self.moused_over = true;
        self.list.set_active(index);
    }

    /// The pointer left the suggestion list.
    pub fn on_mouse_leave(&mut self) {
        self.moused_over = false;
        if !self.focused {
            self.hide();
        }
    }

    /// Suggestion `index` was clicked: commit it and refocus the input.
    pub fn on_click(&mut self, index: usize) -> Option<TypeaheadAction<T>> {
        self.list.set_active(index);
        let action = self.commit();
        self.on_focus();
        action
    }

    /// The input gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
    }

    /// The input lost focus. The list stays while the pointer is over it.
    pub fn on_blur(&mut self) {
        self.focused = false;
        if !self.moused_over {
            self.hide();
        }
    }
}

impl<T: Candidate + 'static> TypeaheadController<T> {
    /// Re-read the input and look up suggestions for it.
    ///
    /// # Errors
    ///
    /// Propagates a synchronous provider failure; the list is left unchanged.
    pub fn on_text_changed(&mut self) -> Result<()> {
        self.query = self.input.value().trim().to_string();

        if self.query.is_empty() || self.query.chars().count() < self.min_length {
            self.hide();
            return Ok(());
        }

        self.generation += 1;
        let lookup = match &self.source {
            Source::Static(items) => Lookup::Ready(Ok(items.clone())),
            Source::Provider(provider) => Lookup::Ready(provider(&self.query)),
            Source::Deferred(provider) => {
                let deliver = Deliver::new(self.generation, self.query.clone(), self.tx.clone());
                provider(&self.query, deliver);
                Lookup::Pending
            }
        };

        match lookup {
            Lookup::Ready(items) => self.process(items?),
            Lookup::Pending => {
                self.poll();
            }
        }
        Ok(())
    }

    /// Second phase of a key press.
    ///
    /// # Errors
    ///
    /// Propagates provider failures from the lookup triggered by editing keys.
    pub fn on_key_up(&mut self, key: &KeyEvent) -> Result<Option<TypeaheadAction<T>>> {
        match KeyRole::of(key) {
            KeyRole::Down | KeyRole::Up | KeyRole::Modifier => Ok(None),
            KeyRole::Tab | KeyRole::Enter => {
                if self.list.is_shown() {
                    Ok(self.commit())
                } else {
                    Ok(None)
                }
            }
            KeyRole::Escape => {
                self.hide();
                Ok(None)
            }
            KeyRole::Comma | KeyRole::Backspace | KeyRole::Other => {
                self.on_text_changed()?;
                Ok(None)
            }
        }
    }
}

impl<T> fmt::Debug for TypeaheadController<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeaheadController")
            .field("query", &self.query)
            .field("shown", &self.list.is_shown())
            .field("focused", &self.focused)
            .field("moused_over", &self.moused_over)
            .field("generation", &self.generation)
            .finish_non_exhaustive()
    }
}
