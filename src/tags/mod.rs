//! Tag collection and the composed tag input widget.

mod collection;
mod input;

pub use collection::{AddOutcome, IdentifierFn, TagCollection, TagEvent, TagOptions};
pub use input::{Badge, EntryFn, TagInput, TagInputOptions, WidgetEvent, WARNING_PULSE};
