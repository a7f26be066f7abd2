//! Blocking crossterm source for the host loop.

use std::io;
use std::time::Duration;

use crossterm::event::{self, Event as CrosstermEvent};

use super::Event;

/// Short enough to expire badge warnings and apply deferred suggestions
/// without visible lag.
const DEFAULT_TICK: Duration = Duration::from_millis(50);

/// Waits for terminal input, yielding [`Event::Tick`] when none arrives.
#[derive(Debug, Clone, Copy)]
pub struct EventHandler {
    tick: Duration,
}

impl EventHandler {
    pub fn new() -> Self {
        Self::with_tick(DEFAULT_TICK)
    }

    pub fn with_tick(tick: Duration) -> Self {
        Self { tick }
    }

    pub fn tick(&self) -> Duration {
        self.tick
    }

    /// Block for at most one tick.
    pub fn next(&self) -> io::Result<Event> {
        if !event::poll(self.tick)? {
            return Ok(Event::Tick);
        }
        Ok(translate(event::read()?))
    }
}

impl Default for EventHandler {
    fn default() -> Self {
        Self::new()
    }
}

fn translate(event: CrosstermEvent) -> Event {
    match event {
        CrosstermEvent::Key(key) => Event::Key(key),
        CrosstermEvent::Mouse(mouse) => Event::Mouse(mouse),
        CrosstermEvent::Paste(text) => Event::Paste(text),
        CrosstermEvent::FocusGained => Event::FocusGained,
        CrosstermEvent::FocusLost => Event::FocusLost,
        CrosstermEvent::Resize(width, height) => Event::Resize(width, height),
    }
}
