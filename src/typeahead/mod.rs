//! Incremental suggestions over a text input.

mod controller;
mod list;

pub use controller::{KeyResponse, TypeaheadAction, TypeaheadController, TypeaheadOptions, UpdateFn};
pub use list::{ListState, NavigableList};
