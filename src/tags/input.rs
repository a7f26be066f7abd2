//! The tag input: a free-text entry with suggestions that turns accepted
//! values into removable badges.
//!
//! `TagInput` owns both a [`TagCollection`] and a [`TypeaheadController`].
//! Suggestions committed by the typeahead are routed into the collection,
//! collection events are drained into badge state and public events. Badges
//! carry no reference to their value; text is read back by index.

use std::fmt;
use std::sync::Arc;
use std::time::{Duration, Instant};

use crossterm::event::KeyEvent;
use tracing::{debug, info};

use super::collection::{AddOutcome, IdentifierFn, TagCollection, TagEvent, TagOptions};
use crate::config::WidgetSettings;
use crate::error::Result;
use crate::events::KeyRole;
use crate::suggest::{
    Candidate, EngineOptions, HighlighterFn, MatcherFn, SorterFn, Source, TextFn,
};
use crate::typeahead::{KeyResponse, TypeaheadAction, TypeaheadController, TypeaheadOptions};

/// How long a badge stays flagged after a duplicate was rejected.
pub const WARNING_PULSE: Duration = Duration::from_millis(500);

/// Builds a candidate from one token of free text.
pub type EntryFn<T> = Arc<dyn Fn(&str) -> Option<T> + Send + Sync>;

/// Construction options for a [`TagInput`].
pub struct TagInputOptions<T> {
    pub settings: WidgetSettings,
    pub source: Source<T>,
    pub item_text: Option<TextFn<T>>,
    pub identifier: Option<IdentifierFn<T>>,
    /// Parser for typed tokens; defaults to [`Candidate::from_entry`].
    pub entry: Option<EntryFn<T>>,
    /// Suggestion filter. Provider and deferred sources already answer the
    /// query, so their results pass through unless this is set; static
    /// lists use the engine default.
    pub matcher: Option<MatcherFn<T>>,
    pub sorter: Option<SorterFn<T>>,
    pub highlighter: Option<HighlighterFn<T>>,
}

impl<T> TagInputOptions<T> {
    pub fn new(settings: WidgetSettings, source: Source<T>) -> Self {
        Self {
            settings,
            source,
            item_text: None,
            identifier: None,
            entry: None,
            matcher: None,
            sorter: None,
            highlighter: None,
        }
    }
}

/// Visual state of one accepted value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Badge {
    warning_until: Option<Instant>,
    pending_removal: bool,
}

impl Badge {
    /// Flagged because a duplicate of this value was rejected.
    pub fn is_warning(&self) -> bool {
        self.warning_until.is_some()
    }

    /// Marked by a first Backspace; the next one removes it.
    pub fn is_pending_removal(&self) -> bool {
        self.pending_removal
    }
}

/// Domain events for the host.
#[derive(Debug, Clone, PartialEq)]
pub enum WidgetEvent<T> {
    /// The widget was created.
    Shown,
    Added(T),
    Removed(T),
}

/// Multi-value tag entry.
pub struct TagInput<T> {
    collection: TagCollection<T>,
    typeahead: TypeaheadController<T>,
    entry: EntryFn<T>,
    badges: Vec<Badge>,
    input_visible: bool,
    focused: bool,
    /// Set by a mouse-down on the menu so the following blur does not
    /// process the entry.
    suppress_blur: bool,
    events: Vec<WidgetEvent<T>>,
    /// Outcomes of tokens added from typed text, drained by the host.
    outcomes: Vec<AddOutcome>,
}

impl<T: Candidate + 'static> TagInput<T> {
    /// Create the widget and emit [`WidgetEvent::Shown`].
    pub fn new(options: TagInputOptions<T>) -> Self {
        let item_text: TextFn<T> = match options.item_text {
            Some(f) => f,
            None => Arc::new(|item: &T| item.text().into_owned()),
        };

        let entry: EntryFn<T> = match options.entry {
            Some(f) => f,
            None => Arc::new(|text: &str| T::from_entry(text)),
        };

        let mut tag_options = TagOptions::from_settings(&options.settings);
        tag_options.item_text = Some(Arc::clone(&item_text));
        tag_options.identifier = options.identifier;

        let matcher: Option<MatcherFn<T>> = match (options.matcher, &options.source) {
            (Some(f), _) => Some(f),
            (None, Source::Static(_)) => None,
            (None, Source::Provider(_) | Source::Deferred(_)) => {
                let pass_through: MatcherFn<T> = Arc::new(|_: &T, _: &str| true);
                Some(pass_through)
            }
        };

        let mut typeahead_options = TypeaheadOptions::from_settings(&options.settings, options.source);
        typeahead_options.engine = EngineOptions {
            matcher,
            sorter: options.sorter,
            highlighter: options.highlighter,
            item_text: Some(item_text),
        };
        typeahead_options.update = Some(Arc::new(|_: &T| String::new()));

        info!(
            max = ?options.settings.max,
            allow_duplicates = options.settings.allow_duplicates,
            "Tag input created"
        );

        Self {
            collection: TagCollection::new(tag_options),
            typeahead: TypeaheadController::new(typeahead_options),
            entry,
            badges: Vec::new(),
            input_visible: true,
            focused: false,
            suppress_blur: false,
            events: vec![WidgetEvent::Shown],
            outcomes: Vec::new(),
        }
    }

    /// First phase of a key press.
    ///
    /// # Errors
    ///
    /// Propagates [`crate::error::WidgetError::MissingIdentifier`] from
    /// tokens added by Enter, Tab or comma.
    pub fn on_key_down(&mut self, key: &KeyEvent) -> Result<KeyResponse> {
        let role = KeyRole::of(key);

        if !self.input_visible {
            if role == KeyRole::Backspace {
                self.backspace();
            }
            return Ok(KeyResponse {
                prevent_default: true,
                stop_propagation: false,
            });
        }

        match role {
            KeyRole::Enter | KeyRole::Tab | KeyRole::Comma
                if !self.entry_text().trim().is_empty() && !self.typeahead.is_shown() =>
            {
                self.process_entry()?;
                return Ok(KeyResponse {
                    prevent_default: role != KeyRole::Tab,
                    stop_propagation: false,
                });
            }
            KeyRole::Backspace if self.entry_text().is_empty() => self.backspace(),
            _ => self.clear_pending(),
        }

        Ok(self.typeahead.on_key_down(key))
    }

    /// Second phase of a key press. A committed suggestion is added.
    ///
    /// # Errors
    ///
    /// Propagates provider failures and identifier violations.
    pub fn on_key_up(&mut self, key: &KeyEvent) -> Result<Option<AddOutcome>> {
        if !self.input_visible {
            return Ok(None);
        }
        match self.typeahead.on_key_up(key)? {
            Some(TypeaheadAction::Selected { item, .. }) => self.add(item).map(Some),
            None => Ok(None),
        }
    }

    /// Insert pasted text at the cursor and refresh suggestions.
    pub fn on_paste(&mut self, text: &str) -> Result<()> {
        if !self.input_visible {
            return Ok(());
        }
        let single_line: String = text.chars().filter(|c| !c.is_control()).collect();
        self.typeahead.input_mut().insert_str(&single_line);
        self.typeahead.on_text_changed()
    }

    /// A suggestion row was clicked.
    pub fn on_click(&mut self, index: usize) -> Result<Option<AddOutcome>> {
        self.focused = true;
        match self.typeahead.on_click(index) {
            Some(TypeaheadAction::Selected { item, .. }) => self.add(item).map(Some),
            None => Ok(None),
        }
    }

    /// The entry lost focus.
    ///
    /// Unless suppressed by [`on_menu_mouse_down`](Self::on_menu_mouse_down),
    /// the typed text is added and pending marks are cleared.
    pub fn on_blur(&mut self) -> Result<()> {
        let result = if self.suppress_blur {
            debug!("Blur suppressed by menu interaction");
            Ok(())
        } else {
            self.focused = false;
            self.clear_pending();
            self.process_entry().map(|_| ())
        };
        self.suppress_blur = false;
        self.typeahead.on_blur();
        result
    }

    /// Split the entry on commas and add each non-empty token.
    ///
    /// Returns the number of accepted tokens; every outcome is also queued
    /// for [`take_outcomes`](Self::take_outcomes). On failure the entry keeps
    /// only the failing token and the ones after it.
    pub fn process_entry(&mut self) -> Result<usize> {
        let text = self.entry_text().to_string();
        let tokens: Vec<&str> = text.split(',').map(str::trim).filter(|t| !t.is_empty()).collect();
        let mut accepted = 0;

        for (i, &token) in tokens.iter().enumerate() {
            let Some(item) = (self.entry)(token) else {
                debug!(token, "Token rejected by entry parser");
                continue;
            };
            match self.add(item) {
                Ok(outcome) => {
                    if outcome.is_accepted() {
                        accepted += 1;
                    }
                    self.outcomes.push(outcome);
                }
                Err(e) => {
                    self.typeahead.set_text(tokens[i..].join(", "));
                    self.typeahead.hide();
                    return Err(e);
                }
            }
        }

        self.typeahead.input_mut().clear();
        self.typeahead.hide();
        Ok(accepted)
    }

    /// Add a value.
    pub fn add(&mut self, item: T) -> Result<AddOutcome> {
        let outcome = self.collection.add(item);
        self.sync();
        outcome
    }

    /// Add each value in order.
    pub fn set_values(&mut self, items: impl IntoIterator<Item = T>) -> Result<Vec<AddOutcome>> {
        let outcomes = self.collection.set_values(items);
        self.sync();
        outcomes
    }

    /// Remove the value at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        let removed = self.collection.remove(index);
        self.sync();
        removed
    }

    /// The remove affordance of badge `index` was activated.
    pub fn remove_badge(&mut self, index: usize) -> Option<T> {
        self.clear_pending();
        let removed = self.remove(index);
        self.on_focus();
        removed
    }

    fn backspace(&mut self) {
        let Some(last) = self.badges.len().checked_sub(1) else {
            return;
        };
        if self.badges[last].pending_removal {
            self.remove(last);
        } else {
            debug!(index = last, "Badge marked for removal");
            self.badges[last].pending_removal = true;
        }
    }

    /// Reflect drained collection events in badges and public events.
    fn sync(&mut self) {
        let now = Instant::now();
        for event in self.collection.take_events() {
            match event {
                TagEvent::Added(item) => {
                    self.badges.push(Badge::default());
                    self.events.push(WidgetEvent::Added(item));
                }
                TagEvent::Removed { index, item } => {
                    if index < self.badges.len() {
                        self.badges.remove(index);
                    }
                    self.events.push(WidgetEvent::Removed(item));
                }
                TagEvent::Duplicate { index } => {
                    if let Some(badge) = self.badges.get_mut(index) {
                        badge.warning_until = Some(now + WARNING_PULSE);
                    }
                }
                TagEvent::InputHidden => {
                    debug!("Capacity reached, hiding entry");
                    self.input_visible = false;
                    self.typeahead.hide();
                }
                TagEvent::InputShown => {
                    debug!("Capacity available, showing entry");
                    self.input_visible = true;
                }
            }
        }
    }
}

impl<T> TagInput<T> {
    /// The entry gained focus.
    pub fn on_focus(&mut self) {
        self.focused = true;
        self.typeahead.on_focus();
    }

    /// A mouse button went down on the suggestion menu.
    pub fn on_menu_mouse_down(&mut self) {
        self.suppress_blur = true;
    }

    pub fn on_mouse_enter(&mut self, index: usize) {
        self.typeahead.on_mouse_enter(index);
    }

    pub fn on_mouse_leave(&mut self) {
        self.typeahead.on_mouse_leave();
    }

    /// Apply deferred suggestion deliveries. Returns true on change.
    pub fn poll(&mut self) -> bool {
        self.typeahead.poll()
    }

    /// Expire warning pulses. Returns true if any badge changed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let mut changed = false;
        for badge in &mut self.badges {
            if badge.warning_until.is_some_and(|until| now >= until) {
                badge.warning_until = None;
                changed = true;
            }
        }
        changed
    }

    fn clear_pending(&mut self) {
        for badge in &mut self.badges {
            badge.pending_removal = false;
        }
    }

    pub fn collection(&self) -> &TagCollection<T> {
        &self.collection
    }

    pub fn typeahead(&self) -> &TypeaheadController<T> {
        &self.typeahead
    }

    /// Current text of the free-text entry.
    pub fn entry_text(&self) -> &str {
        self.typeahead.input().value()
    }

    /// Badges parallel to the accepted values.
    pub fn badges(&self) -> &[Badge] {
        &self.badges
    }

    /// Whether the entry is shown; false while the collection is full.
    pub fn is_input_visible(&self) -> bool {
        self.input_visible
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn is_blur_suppressed(&self) -> bool {
        self.suppress_blur
    }

    /// The bound value: accepted identifiers in the configured encoding.
    pub fn serialized_value(&self) -> String {
        self.collection.serialized()
    }

    /// Drain outcomes of tokens added from typed text.
    pub fn take_outcomes(&mut self) -> Vec<AddOutcome> {
        std::mem::take(&mut self.outcomes)
    }

    /// Drain pending public events.
    pub fn take_events(&mut self) -> Vec<WidgetEvent<T>> {
        std::mem::take(&mut self.events)
    }
}

impl<T: fmt::Debug> fmt::Debug for TagInput<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagInput")
            .field("collection", &self.collection)
            .field("typeahead", &self.typeahead)
            .field("badges", &self.badges)
            .field("input_visible", &self.input_visible)
            .field("focused", &self.focused)
            .field("suppress_blur", &self.suppress_blur)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyModifiers};
    use serde_json::{json, Value};

    use crate::error::WidgetError;
    use crate::suggest::Highlighted;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn fruits() -> Source<String> {
        Source::Static(
            ["apple", "apricot", "banana"]
                .iter()
                .map(|s| s.to_string())
                .collect(),
        )
    }

    fn widget(max: Option<usize>) -> TagInput<String> {
        let settings = WidgetSettings {
            max,
            ..WidgetSettings::default()
        };
        TagInput::new(TagInputOptions::new(settings, fruits()))
    }

    fn press<T: Candidate + 'static>(w: &mut TagInput<T>, code: KeyCode) -> KeyResponse {
        let response = w.on_key_down(&key(code)).unwrap();
        w.on_key_up(&key(code)).unwrap();
        response
    }

    fn type_text(w: &mut TagInput<String>, text: &str) {
        for ch in text.chars() {
            press(w, KeyCode::Char(ch));
        }
    }

    fn values(w: &TagInput<String>) -> Vec<&str> {
        w.collection().values().iter().map(String::as_str).collect()
    }

    #[test]
    fn test_new_emits_shown() {
        let mut w = widget(None);
        assert_eq!(w.take_events(), vec![WidgetEvent::Shown]);
        assert!(w.is_input_visible());
        assert!(w.take_events().is_empty());
    }

    #[test]
    fn test_suggestion_commit_adds_value_and_clears_entry() {
        let mut w = widget(None);
        w.take_events();
        type_text(&mut w, "ap");
        assert!(w.typeahead().is_shown());

        press(&mut w, KeyCode::Down);
        press(&mut w, KeyCode::Enter);

        assert_eq!(values(&w), vec!["apricot"]);
        assert_eq!(w.entry_text(), "");
        assert!(!w.typeahead().is_shown());
        assert_eq!(w.badges().len(), 1);
        assert_eq!(w.take_events(), vec![WidgetEvent::Added("apricot".to_string())]);
    }

    #[test]
    fn test_enter_with_hidden_menu_splits_entry() {
        let mut w = widget(None);
        w.on_paste("x, y,,z").unwrap();
        assert!(!w.typeahead().is_shown());

        let response = press(&mut w, KeyCode::Enter);
        assert!(response.prevent_default);
        assert_eq!(values(&w), vec!["x", "y", "z"]);
        assert_eq!(w.entry_text(), "");
        assert_eq!(w.serialized_value(), r#"["x","y","z"]"#);
    }

    #[test]
    fn test_comma_adds_entry() {
        let mut w = widget(None);
        type_text(&mut w, "zig");
        let response = press(&mut w, KeyCode::Char(','));
        assert!(response.prevent_default);
        assert_eq!(values(&w), vec!["zig"]);
        assert_eq!(w.entry_text(), "");
    }

    #[test]
    fn test_tab_adds_entry_without_preventing_default() {
        let mut w = widget(None);
        type_text(&mut w, "zig");
        let response = press(&mut w, KeyCode::Tab);
        assert!(!response.prevent_default);
        assert_eq!(values(&w), vec!["zig"]);
    }

    #[test]
    fn test_enter_with_blank_entry_is_ignored() {
        let mut w = widget(None);
        type_text(&mut w, "  ");
        press(&mut w, KeyCode::Enter);
        assert!(w.collection().is_empty());
    }

    #[test]
    fn test_duplicate_flags_badge_until_pulse_expires() {
        let mut w = widget(None);
        w.set_values(["rust".to_string(), "go".to_string()]).unwrap();

        let outcome = w.add("RUST".to_string()).unwrap();
        assert_eq!(outcome, AddOutcome::DuplicateRejected { existing: 0 });
        assert!(w.badges()[0].is_warning());
        assert!(!w.badges()[1].is_warning());

        assert!(!w.tick(Instant::now()));
        assert!(w.tick(Instant::now() + WARNING_PULSE));
        assert!(!w.badges()[0].is_warning());
    }

    #[test]
    fn test_backspace_two_step_removal() {
        let mut w = widget(None);
        w.set_values(["a".to_string(), "b".to_string()]).unwrap();
        w.take_events();

        press(&mut w, KeyCode::Backspace);
        assert!(w.badges()[1].is_pending_removal());
        assert_eq!(w.collection().len(), 2);

        press(&mut w, KeyCode::Backspace);
        assert_eq!(values(&w), vec!["a"]);
        assert_eq!(w.badges().len(), 1);
        assert!(!w.badges()[0].is_pending_removal());
        assert_eq!(w.take_events(), vec![WidgetEvent::Removed("b".to_string())]);
    }

    #[test]
    fn test_other_key_clears_pending_mark() {
        let mut w = widget(None);
        w.set_values(["a".to_string()]).unwrap();
        press(&mut w, KeyCode::Backspace);
        assert!(w.badges()[0].is_pending_removal());

        press(&mut w, KeyCode::Char('x'));
        assert!(!w.badges()[0].is_pending_removal());

        press(&mut w, KeyCode::Backspace);
        assert_eq!(w.entry_text(), "");
        assert!(!w.badges()[0].is_pending_removal());
    }

    #[test]
    fn test_capacity_hides_entry_and_backspace_restores_it() {
        let mut w = widget(Some(2));
        type_text(&mut w, "a,b,");
        assert_eq!(values(&w), vec!["a", "b"]);
        assert!(!w.is_input_visible());

        let response = w.on_key_down(&key(KeyCode::Char('c'))).unwrap();
        assert!(response.prevent_default);
        assert_eq!(w.entry_text(), "");

        press(&mut w, KeyCode::Backspace);
        press(&mut w, KeyCode::Backspace);
        assert_eq!(values(&w), vec!["a"]);
        assert!(w.is_input_visible());
    }

    #[test]
    fn test_blur_processes_entry() {
        let mut w = widget(None);
        w.on_focus();
        type_text(&mut w, "ap");
        w.on_blur().unwrap();

        assert_eq!(values(&w), vec!["ap"]);
        assert!(!w.is_focused());
        assert!(!w.typeahead().is_shown());
    }

    #[test]
    fn test_menu_mouse_down_suppresses_one_blur() {
        let mut w = widget(None);
        w.on_focus();
        type_text(&mut w, "ap");

        w.on_mouse_enter(1);
        w.on_menu_mouse_down();
        w.on_blur().unwrap();
        assert!(w.collection().is_empty());
        assert!(!w.is_blur_suppressed());
        assert!(w.typeahead().is_shown());

        let outcome = w.on_click(1).unwrap();
        assert_eq!(outcome, Some(AddOutcome::Added));
        assert_eq!(values(&w), vec!["apricot"]);
        assert_eq!(w.entry_text(), "");
        assert!(w.is_focused());
    }

    #[test]
    fn test_remove_first_badge() {
        let mut w = widget(None);
        w.set_values(["a".to_string(), "b".to_string()]).unwrap();
        assert_eq!(w.remove_badge(0), Some("a".to_string()));
        assert_eq!(values(&w), vec!["b"]);
        assert_eq!(w.badges().len(), 1);
        assert!(w.is_focused());
        assert_eq!(w.remove_badge(3), None);
    }

    #[test]
    fn test_paste_refreshes_suggestions() {
        let mut w = widget(None);
        w.on_paste("ban\n").unwrap();
        assert_eq!(w.entry_text(), "ban");
        assert!(w.typeahead().is_shown());
    }

    #[test]
    fn test_missing_identifier_from_entry_parser() {
        let mut options: TagInputOptions<Value> =
            TagInputOptions::new(WidgetSettings::default(), Source::default());
        options.entry = Some(Arc::new(|text: &str| Some(json!({ "name": text }))));
        let mut w = TagInput::new(options);

        w.on_key_down(&key(KeyCode::Char('q'))).unwrap();
        w.on_key_up(&key(KeyCode::Char('q'))).unwrap();
        let err = w.on_key_down(&key(KeyCode::Enter)).unwrap_err();
        assert!(matches!(err, WidgetError::MissingIdentifier { .. }));
        assert!(w.collection().is_empty());
        assert_eq!(w.entry_text(), "q");
    }

    #[test]
    fn test_entry_parser_can_reject_tokens() {
        let mut options = TagInputOptions::new(WidgetSettings::default(), Source::<String>::default());
        options.entry = Some(Arc::new(|text: &str| {
            text.chars().all(char::is_alphanumeric).then(|| text.to_lowercase())
        }));
        let mut w = TagInput::new(options);
        w.on_paste("Rust, c++, Go").unwrap();
        let accepted = w.process_entry().unwrap();
        assert_eq!(accepted, 2);
        assert_eq!(values(&w), vec!["rust", "go"]);
    }

    #[test]
    fn test_provider_results_pass_through_unfiltered() {
        let source = Source::provider(|q: &str| {
            if q == "rs" {
                vec!["Rust".to_string()]
            } else {
                Vec::new()
            }
        });
        let mut w = TagInput::new(TagInputOptions::new(WidgetSettings::default(), source));
        type_text(&mut w, "rs");

        assert!(w.typeahead().is_shown());
        assert_eq!(w.typeahead().list().items().to_vec(), vec!["Rust".to_string()]);
        press(&mut w, KeyCode::Enter);
        assert_eq!(values(&w), vec!["Rust"]);
    }

    #[test]
    fn test_custom_matcher_applies_to_provider() {
        let mut options = TagInputOptions::new(
            WidgetSettings::default(),
            Source::provider(|_: &str| vec!["Rust".to_string(), "Ruby".to_string()]),
        );
        options.matcher = Some(Arc::new(|item: &String, _: &str| item.ends_with('y')));
        let mut w = TagInput::new(options);
        type_text(&mut w, "r");
        assert_eq!(w.typeahead().list().items().to_vec(), vec!["Ruby".to_string()]);
    }

    #[test]
    fn test_failed_token_keeps_only_unprocessed_text() {
        let settings = WidgetSettings {
            allow_duplicates: true,
            ..WidgetSettings::default()
        };
        let mut options: TagInputOptions<Value> = TagInputOptions::new(settings, Source::default());
        options.entry = Some(Arc::new(|text: &str| {
            Some(if text == "bad" {
                json!({ "name": text })
            } else {
                json!(text)
            })
        }));
        let mut w = TagInput::new(options);

        w.on_paste("a,bad, c").unwrap();
        let err = w.process_entry().unwrap_err();
        assert!(matches!(err, WidgetError::MissingIdentifier { .. }));
        assert_eq!(w.collection().values().to_vec(), vec![json!("a")]);
        assert_eq!(w.entry_text(), "bad, c");

        let clear_line = KeyEvent::new(KeyCode::Char('u'), KeyModifiers::CONTROL);
        w.on_key_down(&clear_line).unwrap();
        w.on_key_up(&clear_line).unwrap();
        w.on_paste("c").unwrap();
        press(&mut w, KeyCode::Enter);
        assert_eq!(w.collection().values().to_vec(), vec![json!("a"), json!("c")]);
    }

    #[test]
    fn test_custom_highlighter_reaches_suggestions() {
        let mut options = TagInputOptions::new(WidgetSettings::default(), fruits());
        options.highlighter = Some(Arc::new(|item: &String, _: &str| Highlighted {
            text: item.to_uppercase(),
            emphasis: vec![0..1],
        }));
        let mut w = TagInput::new(options);
        type_text(&mut w, "ban");
        assert_eq!(
            w.typeahead().suggestions(),
            vec![Highlighted {
                text: "BANANA".to_string(),
                emphasis: vec![0..1],
            }]
        );
    }

    #[test]
    fn test_typed_tokens_queue_outcomes() {
        let mut w = widget(Some(2));
        w.add("go".to_string()).unwrap();
        w.on_paste("GO, zig, c").unwrap();
        press(&mut w, KeyCode::Enter);

        assert_eq!(values(&w), vec!["go", "zig"]);
        assert_eq!(
            w.take_outcomes(),
            vec![
                AddOutcome::DuplicateRejected { existing: 0 },
                AddOutcome::Added,
                AddOutcome::CapacityReached,
            ]
        );
        assert!(w.take_outcomes().is_empty());
    }
}
