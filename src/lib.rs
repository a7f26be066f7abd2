//! taginput - a typeahead tag input widget.
//!
//! The widget core ([`suggest`], [`typeahead`], [`tags`]) is independent of
//! any terminal; [`ui`], [`events`] and [`app`] host it in a ratatui
//! application.

pub mod app;
pub mod candidates;
pub mod config;
pub mod error;
pub mod events;
pub mod logging;
pub mod suggest;
pub mod tags;
pub mod typeahead;
pub mod ui;

pub use error::{AppError, Result, WidgetError};
pub use suggest::{Candidate, Source, SuggestionEngine};
pub use tags::{AddOutcome, TagCollection, TagInput, TagInputOptions, WidgetEvent};
pub use typeahead::{TypeaheadController, TypeaheadOptions};
