//! Terminal host for the tag input.
//!
//! Follows The Elm Architecture: [`App::update`] folds terminal events into
//! widget operations, [`App::view`] renders the current state.

use std::time::Instant;

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use serde_json::Value;
use tracing::{debug, info, trace, warn};

use crate::error::{AppError, WidgetError};
use crate::events::Event;
use crate::suggest::Candidate;
use crate::tags::{AddOutcome, TagInput, TagInputOptions, WidgetEvent};
use crate::ui::{
    render_help_bar, render_tag_input, widget_height, Hit, HintContext, HitMap, StatusLog, Theme,
};

/// Badge rows reserved inside the widget box.
const BADGE_ROWS: u16 = 3;

/// The application state.
pub struct App {
    widget: TagInput<Value>,
    theme: Theme,
    /// Regions of the last rendered frame.
    hit_map: HitMap,
    status: StatusLog,
    should_quit: bool,
    /// Menu row under a left button that is still down.
    pressed_row: Option<usize>,
    hovering_menu: bool,
}

impl App {
    /// Create the app with a focused widget.
    pub fn new(options: TagInputOptions<Value>) -> Self {
        debug!("Creating application instance");
        let mut app = Self {
            widget: TagInput::new(options),
            theme: Theme::default(),
            hit_map: HitMap::default(),
            status: StatusLog::default(),
            should_quit: false,
            pressed_row: None,
            hovering_menu: false,
        };
        app.widget.on_focus();
        app.drain_widget_events();
        app
    }

    /// Seed accepted values.
    pub fn set_values(&mut self, values: impl IntoIterator<Item = Value>) -> Result<(), AppError> {
        let result = self.widget.set_values(values);
        self.drain_widget_events();
        result?;
        Ok(())
    }

    pub fn widget(&self) -> &TagInput<Value> {
        &self.widget
    }

    pub fn status(&self) -> &StatusLog {
        &self.status
    }

    pub fn hit_map(&self) -> &HitMap {
        &self.hit_map
    }

    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// The bound value, printed on exit.
    pub fn serialized_value(&self) -> String {
        self.widget.serialized_value()
    }

    /// Fold one event into the state.
    pub fn update(&mut self, event: Event) {
        match event {
            Event::Key(key_event) => {
                trace!(key = ?key_event.code, modifiers = ?key_event.modifiers, "Key event");
                self.handle_key_event(key_event);
            }
            Event::Mouse(mouse_event) => self.handle_mouse_event(mouse_event),
            Event::FocusGained => self.widget.on_focus(),
            Event::FocusLost => {
                let result = self.widget.on_blur();
                self.report(result);
            }
            Event::Paste(text) => {
                let result = self.widget.on_paste(&text);
                self.report(result);
            }
            Event::Resize(width, height) => {
                trace!(width, height, "Terminal resize event");
            }
            Event::Tick => self.handle_tick(),
        }
        self.drain_widget_events();
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        if key_event.kind == KeyEventKind::Release {
            return;
        }

        if key_event.code == KeyCode::Char('c') && key_event.modifiers.contains(KeyModifiers::CONTROL) {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        if key_event.code == KeyCode::Esc
            && !self.widget.typeahead().is_shown()
            && self.widget.entry_text().is_empty()
        {
            info!("Quit requested");
            self.should_quit = true;
            return;
        }

        let result = self.widget.on_key_down(&key_event);
        self.report(result);

        match self.widget.on_key_up(&key_event) {
            Ok(Some(outcome)) => self.report_outcome(outcome),
            Ok(None) => {}
            Err(e) => self.report_error(e),
        }
    }

    fn handle_mouse_event(&mut self, mouse_event: MouseEvent) {
        let hit = self.hit_map.hit(mouse_event.column, mouse_event.row);

        match mouse_event.kind {
            MouseEventKind::Moved | MouseEventKind::Drag(_) => match hit {
                Hit::MenuRow(i) => {
                    self.hovering_menu = true;
                    self.widget.on_mouse_enter(i);
                }
                Hit::Menu => {}
                _ => {
                    if self.hovering_menu {
                        self.hovering_menu = false;
                        self.widget.on_mouse_leave();
                    }
                }
            },
            MouseEventKind::Down(MouseButton::Left) => match hit {
                Hit::MenuRow(i) => {
                    // Pressing the menu takes focus from the entry until the click completes.
                    self.hovering_menu = true;
                    self.widget.on_mouse_enter(i);
                    self.widget.on_menu_mouse_down();
                    self.pressed_row = Some(i);
                    let result = self.widget.on_blur();
                    self.report(result);
                }
                Hit::Menu => {}
                Hit::BadgeRemove(i) => {
                    self.widget.remove_badge(i);
                }
                Hit::Widget => self.widget.on_focus(),
                Hit::Outside => {
                    if self.widget.is_focused() {
                        let result = self.widget.on_blur();
                        self.report(result);
                    }
                }
            },
            MouseEventKind::Up(MouseButton::Left) => {
                if let Some(row) = self.pressed_row.take() {
                    if hit == Hit::MenuRow(row) {
                        match self.widget.on_click(row) {
                            Ok(Some(outcome)) => self.report_outcome(outcome),
                            Ok(None) => {}
                            Err(e) => self.report_error(e),
                        }
                    } else {
                        self.widget.on_focus();
                    }
                }
            }
            _ => {}
        }
    }

    fn handle_tick(&mut self) {
        let now = Instant::now();
        self.widget.tick(now);
        if self.widget.poll() {
            trace!("Deferred suggestions applied");
        }
        self.status.tick(now);
    }

    fn drain_widget_events(&mut self) {
        for event in self.widget.take_events() {
            match event {
                WidgetEvent::Shown => {
                    info!("Tag input shown");
                    self.status.info("Type to see suggestions");
                }
                WidgetEvent::Added(item) => {
                    info!(item = %item.text(), "Tag added");
                    self.status.success(format!("Added {}", item.text()));
                }
                WidgetEvent::Removed(item) => {
                    info!(item = %item.text(), "Tag removed");
                    self.status.info(format!("Removed {}", item.text()));
                }
            }
        }
        for outcome in self.widget.take_outcomes() {
            self.report_outcome(outcome);
        }
    }

    fn report<T>(&mut self, result: Result<T, WidgetError>) {
        if let Err(e) = result {
            self.report_error(e);
        }
    }

    fn report_error(&mut self, error: WidgetError) {
        let error = AppError::from(error);
        warn!(error = %error, "Widget operation failed");
        self.status.error(error.user_message());
        if let Some(action) = error.suggested_action() {
            self.status.info(action);
        }
    }

    fn report_outcome(&mut self, outcome: AddOutcome) {
        match outcome {
            AddOutcome::Added => {}
            AddOutcome::DuplicateRejected { .. } => self.status.warning("Already added"),
            AddOutcome::CapacityReached => self.status.warning("Tag limit reached"),
        }
    }

    /// Render the application.
    pub fn view(&mut self, frame: &mut Frame) {
        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(widget_height(BADGE_ROWS)),
                Constraint::Length(1),
                Constraint::Min(3),
                Constraint::Length(1),
            ])
            .split(frame.area());

        self.render_header(frame, chunks[0]);
        self.render_value(frame, chunks[2]);
        self.status.render(frame, chunks[3]);
        render_help_bar(frame, chunks[4], self.hint_context());

        // Last, so the suggestion menu floats over the panels below.
        self.hit_map = render_tag_input(frame, chunks[1], &self.widget, &self.theme);
    }

    fn hint_context(&self) -> HintContext {
        if !self.widget.is_input_visible() {
            HintContext::Full
        } else if self.widget.typeahead().is_shown() {
            HintContext::Menu
        } else {
            HintContext::Entry
        }
    }

    fn render_header(&self, frame: &mut Frame, area: Rect) {
        let collection = self.widget.collection();
        let count = match collection.max() {
            Some(max) => format!("{}/{}", collection.len(), max),
            None => collection.len().to_string(),
        };
        let line = Line::from(vec![
            Span::styled(
                "taginput",
                Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD),
            ),
            Span::styled(format!("  {} tags", count), Style::default().fg(Color::DarkGray)),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }

    fn render_value(&self, frame: &mut Frame, area: Rect) {
        let line = Line::from(vec![
            Span::styled("value: ", Style::default().fg(Color::DarkGray)),
            Span::raw(self.widget.serialized_value()),
        ]);
        frame.render_widget(Paragraph::new(line), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::WidgetSettings;
    use crate::suggest::Source;
    use crate::ui::StatusKind;
    use ratatui::{backend::TestBackend, Terminal};
    use serde_json::json;
    use std::sync::Arc;

    fn app() -> App {
        let source = Source::Static(vec![json!("apple"), json!("apricot"), json!("banana")]);
        App::new(TagInputOptions::new(WidgetSettings::default(), source))
    }

    fn key(code: KeyCode) -> Event {
        Event::Key(KeyEvent::new(code, KeyModifiers::NONE))
    }

    fn mouse(kind: MouseEventKind, column: u16, row: u16) -> Event {
        Event::Mouse(MouseEvent {
            kind,
            column,
            row,
            modifiers: KeyModifiers::NONE,
        })
    }

    fn type_text(app: &mut App, text: &str) {
        for ch in text.chars() {
            app.update(key(KeyCode::Char(ch)));
        }
    }

    fn draw(app: &mut App) {
        let mut terminal = Terminal::new(TestBackend::new(60, 20)).unwrap();
        terminal.draw(|frame| app.view(frame)).unwrap();
    }

    #[test]
    fn test_app_new() {
        let app = app();
        assert!(!app.should_quit());
        assert!(app.widget().is_focused());
        assert_eq!(app.status().len(), 1);
        assert_eq!(app.serialized_value(), "[]");
    }

    #[test]
    fn test_quit_on_ctrl_c() {
        let mut app = app();
        app.update(Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)));
        assert!(app.should_quit());
    }

    #[test]
    fn test_escape_closes_menu_before_quitting() {
        let mut app = app();
        type_text(&mut app, "ap");
        assert!(app.widget().typeahead().is_shown());

        app.update(key(KeyCode::Esc));
        assert!(!app.should_quit());
        assert!(!app.widget().typeahead().is_shown());

        app.update(key(KeyCode::Backspace));
        app.update(key(KeyCode::Backspace));
        app.update(key(KeyCode::Esc));
        assert!(app.should_quit());
    }

    #[test]
    fn test_typing_and_enter_adds_tag() {
        let mut app = app();
        type_text(&mut app, "ban");
        app.update(key(KeyCode::Enter));
        assert_eq!(app.serialized_value(), r#"["banana"]"#);
        assert!(app
            .status()
            .entries()
            .any(|e| e.kind == StatusKind::Success && e.message == "Added banana"));
    }

    #[test]
    fn test_release_events_ignored() {
        let mut app = app();
        let mut release = KeyEvent::new(KeyCode::Char('x'), KeyModifiers::NONE);
        release.kind = KeyEventKind::Release;
        app.update(Event::Key(release));
        assert_eq!(app.widget().entry_text(), "");
    }

    #[test]
    fn test_mouse_click_on_suggestion() {
        let mut app = app();
        type_text(&mut app, "ap");
        draw(&mut app);

        let row = app.hit_map().menu_rows[1];
        app.update(mouse(MouseEventKind::Moved, row.x, row.y));
        app.update(mouse(MouseEventKind::Down(MouseButton::Left), row.x, row.y));
        assert!(app.widget().collection().is_empty());
        assert!(app.widget().typeahead().is_shown());

        app.update(mouse(MouseEventKind::Up(MouseButton::Left), row.x, row.y));
        assert_eq!(app.serialized_value(), r#"["apricot"]"#);
        assert!(app.widget().is_focused());
    }

    #[test]
    fn test_badge_remove_button() {
        let mut app = app();
        app.set_values(vec![json!("go"), json!("zig")]).unwrap();
        draw(&mut app);

        let button = app.hit_map().badge_removes[0];
        app.update(mouse(MouseEventKind::Down(MouseButton::Left), button.x, button.y));
        assert_eq!(app.serialized_value(), r#"["zig"]"#);
    }

    #[test]
    fn test_focus_lost_processes_entry() {
        let mut app = app();
        type_text(&mut app, "kiwi");
        app.update(Event::FocusLost);
        assert_eq!(app.serialized_value(), r#"["kiwi"]"#);
        assert!(!app.widget().is_focused());
    }

    #[test]
    fn test_widget_error_reported() {
        let mut options = TagInputOptions::new(WidgetSettings::default(), Source::default());
        options.entry = Some(Arc::new(|text: &str| Some(json!({ "name": text }))));
        let mut app = App::new(options);

        type_text(&mut app, "q");
        app.update(key(KeyCode::Enter));
        assert!(app.widget().collection().is_empty());
        assert!(app.status().entries().any(|e| e.kind == StatusKind::Error));
        assert!(!app.should_quit());
    }

    #[test]
    fn test_duplicate_outcome_reported() {
        let mut app = app();
        app.set_values(vec![json!("apple")]).unwrap();
        type_text(&mut app, "app");
        app.update(key(KeyCode::Enter));
        assert!(app.widget().badges()[0].is_warning());
        assert!(app
            .status()
            .entries()
            .any(|e| e.kind == StatusKind::Warning));
    }

    #[test]
    fn test_typed_duplicate_and_limit_reported() {
        let settings = WidgetSettings {
            max: Some(2),
            ..WidgetSettings::default()
        };
        let mut app = App::new(TagInputOptions::new(settings, Source::default()));
        app.set_values(vec![json!("go")]).unwrap();

        app.update(Event::Paste("GO, zig, c".to_string()));
        app.update(key(KeyCode::Enter));

        assert_eq!(app.serialized_value(), r#"["go","zig"]"#);
        let warnings: Vec<&str> = app
            .status()
            .entries()
            .filter(|e| e.kind == StatusKind::Warning)
            .map(|e| e.message.as_str())
            .collect();
        assert_eq!(warnings, vec!["Already added", "Tag limit reached"]);
    }
}
