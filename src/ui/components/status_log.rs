//! Status log shown under the widget: recent widget events and errors.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use ratatui::{
    layout::Rect,
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Severity of a status entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusKind {
    Info,
    Success,
    Warning,
    Error,
}

impl StatusKind {
    pub fn icon(&self) -> &'static str {
        match self {
            StatusKind::Info => "ℹ",
            StatusKind::Success => "✓",
            StatusKind::Warning => "⚠",
            StatusKind::Error => "✗",
        }
    }

    pub fn color(&self) -> Color {
        match self {
            StatusKind::Info => Color::Blue,
            StatusKind::Success => Color::Green,
            StatusKind::Warning => Color::Yellow,
            StatusKind::Error => Color::Red,
        }
    }

    /// How long an entry of this kind stays visible.
    fn lifetime(&self) -> Duration {
        match self {
            StatusKind::Info | StatusKind::Success => Duration::from_secs(4),
            StatusKind::Warning | StatusKind::Error => Duration::from_secs(8),
        }
    }
}

/// A single status message.
#[derive(Debug, Clone)]
pub struct StatusEntry {
    pub message: String,
    pub kind: StatusKind,
    pub created_at: Instant,
}

impl StatusEntry {
    fn is_expired(&self, now: Instant) -> bool {
        now.duration_since(self.created_at) > self.kind.lifetime()
    }
}

/// Bounded, expiring list of status messages; newest last.
#[derive(Debug)]
pub struct StatusLog {
    entries: VecDeque<StatusEntry>,
    capacity: usize,
}

impl Default for StatusLog {
    fn default() -> Self {
        Self::with_capacity(5)
    }
}

impl StatusLog {
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            entries: VecDeque::new(),
            capacity: capacity.max(1),
        }
    }

    pub fn push(&mut self, kind: StatusKind, message: impl Into<String>) {
        self.entries.push_back(StatusEntry {
            message: message.into(),
            kind,
            created_at: Instant::now(),
        });
        while self.entries.len() > self.capacity {
            self.entries.pop_front();
        }
    }

    pub fn info(&mut self, message: impl Into<String>) {
        self.push(StatusKind::Info, message);
    }

    pub fn success(&mut self, message: impl Into<String>) {
        self.push(StatusKind::Success, message);
    }

    pub fn warning(&mut self, message: impl Into<String>) {
        self.push(StatusKind::Warning, message);
    }

    pub fn error(&mut self, message: impl Into<String>) {
        self.push(StatusKind::Error, message);
    }

    /// Drop expired entries. Returns true if anything was removed.
    pub fn tick(&mut self, now: Instant) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| !e.is_expired(now));
        self.entries.len() != before
    }

    pub fn entries(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn render(&self, frame: &mut Frame, area: Rect) {
        let lines: Vec<Line> = self
            .entries
            .iter()
            .map(|entry| {
                let style = Style::default().fg(entry.kind.color());
                Line::from(vec![
                    Span::styled(format!("{} ", entry.kind.icon()), style),
                    Span::styled(entry.message.clone(), style),
                ])
            })
            .collect();

        let block = Block::default()
            .title(" Events ")
            .borders(Borders::ALL)
            .border_style(Style::default().fg(Color::DarkGray));
        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_capacity_drops_oldest() {
        let mut log = StatusLog::with_capacity(2);
        log.info("one");
        log.success("two");
        log.error("three");
        let messages: Vec<&str> = log.entries().map(|e| e.message.as_str()).collect();
        assert_eq!(messages, vec!["two", "three"]);
    }

    #[test]
    fn test_tick_expires_by_kind() {
        let mut log = StatusLog::default();
        log.info("added");
        log.warning("duplicate");
        assert!(!log.tick(Instant::now()));

        assert!(log.tick(Instant::now() + Duration::from_secs(5)));
        assert_eq!(log.len(), 1);
        assert_eq!(log.entries().next().map(|e| e.kind), Some(StatusKind::Warning));

        log.tick(Instant::now() + Duration::from_secs(9));
        assert!(log.is_empty());
    }

    #[test]
    fn test_kind_icons() {
        assert_eq!(StatusKind::Error.icon(), "✗");
        assert_eq!(StatusKind::Success.color(), Color::Green);
    }
}
