//! The `Candidate` trait: how the widget reads caller-defined items.

use std::borrow::Cow;
use std::fmt;

use serde_json::Value;

/// Members of a keyed record consulted, in order, for its display text.
const TEXT_FIELDS: &[&str] = &["text", "name", "label"];

/// An item that can be suggested and accepted as a tag.
///
/// Every projection can also be replaced by an injected function in the
/// widget options; these are the defaults.
pub trait Candidate: Clone + PartialEq + fmt::Debug {
    /// Text shown in the suggestion list and on badges.
    fn text(&self) -> Cow<'_, str>;

    /// Identifier written into the serialized value.
    ///
    /// Returns `None` when the item has no such field.
    fn identifier(&self, id_field: &str) -> Option<String>;

    /// Build a candidate from free text typed into the tag entry.
    fn from_entry(text: &str) -> Option<Self>;
}

impl Candidate for String {
    fn text(&self) -> Cow<'_, str> {
        Cow::Borrowed(self.as_str())
    }

    /// Plain strings are their own identifier.
    fn identifier(&self, _id_field: &str) -> Option<String> {
        Some(self.clone())
    }

    fn from_entry(text: &str) -> Option<Self> {
        Some(text.to_string())
    }
}

impl Candidate for Value {
    fn text(&self) -> Cow<'_, str> {
        match self {
            Value::String(s) => Cow::Borrowed(s.as_str()),
            Value::Object(map) => TEXT_FIELDS
                .iter()
                .find_map(|field| map.get(*field).and_then(Value::as_str))
                .map(Cow::Borrowed)
                .unwrap_or_else(|| Cow::Owned(self.to_string())),
            other => Cow::Owned(other.to_string()),
        }
    }

    fn identifier(&self, id_field: &str) -> Option<String> {
        match self {
            Value::Null => None,
            Value::String(s) => Some(s.clone()),
            Value::Object(map) => match map.get(id_field)? {
                Value::Null => None,
                Value::String(s) => Some(s.clone()),
                other => Some(other.to_string()),
            },
            other => Some(other.to_string()),
        }
    }

    fn from_entry(text: &str) -> Option<Self> {
        Some(Value::String(text.to_string()))
    }
}
