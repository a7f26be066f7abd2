//! Accepted values with duplicate and capacity rules.

use std::fmt;
use std::sync::Arc;

use tracing::debug;

use crate::config::{ValueEncoding, WidgetSettings};
use crate::error::{Result, WidgetError};
use crate::suggest::{Candidate, TextFn};

/// Extracts the serialized identifier of an item.
pub type IdentifierFn<T> = Arc<dyn Fn(&T) -> Option<String> + Send + Sync>;

/// Construction options for a [`TagCollection`].
pub struct TagOptions<T> {
    /// Whether the same value may be accepted more than once.
    pub allow_duplicates: bool,
    /// Whether duplicates are also detected by display text ignoring case.
    pub case_insensitive: bool,
    /// Maximum number of accepted values.
    pub max: Option<usize>,
    /// Field the default identifier projection reads.
    pub id_field: String,
    /// Encoding of [`TagCollection::serialized`].
    pub value_encoding: ValueEncoding,
    /// Display-text override.
    pub item_text: Option<TextFn<T>>,
    /// Identifier override.
    pub identifier: Option<IdentifierFn<T>>,
}

impl<T> TagOptions<T> {
    /// Options taking the plain values from `settings`.
    pub fn from_settings(settings: &WidgetSettings) -> Self {
        Self {
            allow_duplicates: settings.allow_duplicates,
            case_insensitive: settings.case_insensitive,
            max: settings.max,
            id_field: settings.id_field.clone(),
            value_encoding: settings.value_encoding,
            item_text: None,
            identifier: None,
        }
    }
}

impl<T> Default for TagOptions<T> {
    fn default() -> Self {
        Self::from_settings(&WidgetSettings::default())
    }
}

/// Result of [`TagCollection::add`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AddOutcome {
    /// The item was appended.
    Added,
    /// The item equals the value at `existing`.
    DuplicateRejected {
        /// Index of the value it duplicates.
        existing: usize,
    },
    /// The collection already holds `max` values.
    CapacityReached,
}

impl AddOutcome {
    /// Whether the item was accepted.
    pub fn is_accepted(&self) -> bool {
        matches!(self, AddOutcome::Added)
    }
}

/// Changes the host has to reflect.
#[derive(Debug, Clone, PartialEq)]
pub enum TagEvent<T> {
    /// A value was appended.
    Added(T),
    /// The value at `index` was removed.
    Removed { index: usize, item: T },
    /// An add was rejected as a duplicate of the value at `index`.
    Duplicate { index: usize },
    /// The collection became full; the entry should hide.
    InputHidden,
    /// The collection has room again; the entry should show.
    InputShown,
}

/// Ordered accepted values and their identifiers.
///
/// `values` and `value_ids` always have the same length.
pub struct TagCollection<T> {
    values: Vec<T>,
    value_ids: Vec<String>,
    allow_duplicates: bool,
    case_insensitive: bool,
    max: Option<usize>,
    id_field: String,
    value_encoding: ValueEncoding,
    item_text: TextFn<T>,
    identifier: IdentifierFn<T>,
    events: Vec<TagEvent<T>>,
}

impl<T: Candidate + 'static> TagCollection<T> {
    /// Create an empty collection.
    pub fn new(options: TagOptions<T>) -> Self {
        let item_text: TextFn<T> = match options.item_text {
            Some(f) => f,
            None => Arc::new(|item: &T| item.text().into_owned()),
        };

        let identifier: IdentifierFn<T> = match options.identifier {
            Some(f) => f,
            None => {
                let field = options.id_field.clone();
                Arc::new(move |item: &T| item.identifier(&field))
            }
        };

        Self {
            values: Vec::new(),
            value_ids: Vec::new(),
            allow_duplicates: options.allow_duplicates,
            case_insensitive: options.case_insensitive,
            max: options.max,
            id_field: options.id_field,
            value_encoding: options.value_encoding,
            item_text,
            identifier,
            events: Vec::new(),
        }
    }
}

impl<T: Clone + PartialEq> TagCollection<T> {
    /// Try to accept `item`.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::MissingIdentifier`] when the item has no
    /// identifier. The collection is left unchanged.
    pub fn add(&mut self, item: T) -> Result<AddOutcome> {
        if !self.allow_duplicates {
            if let Some(existing) = self.position_of(&item) {
                debug!(existing, "Duplicate value rejected");
                self.events.push(TagEvent::Duplicate { index: existing });
                return Ok(AddOutcome::DuplicateRejected { existing });
            }
        }

        if self.is_full() {
            debug!(max = ?self.max, "Capacity reached");
            return Ok(AddOutcome::CapacityReached);
        }

        let id = (self.identifier)(&item).ok_or_else(|| WidgetError::MissingIdentifier {
            field: self.id_field.clone(),
            item: (self.item_text)(&item),
        })?;

        debug!(id = %id, "Value added");
        self.values.push(item.clone());
        self.value_ids.push(id);
        self.events.push(TagEvent::Added(item));

        if self.is_full() {
            self.events.push(TagEvent::InputHidden);
        }
        Ok(AddOutcome::Added)
    }

    /// Remove the value at `index`.
    pub fn remove(&mut self, index: usize) -> Option<T> {
        if index >= self.values.len() {
            return None;
        }

        let was_full = self.is_full();
        let item = self.values.remove(index);
        let id = self.value_ids.remove(index);
        debug!(index, id = %id, "Value removed");
        self.events.push(TagEvent::Removed {
            index,
            item: item.clone(),
        });

        if was_full && !self.is_full() {
            self.events.push(TagEvent::InputShown);
        }
        Some(item)
    }

    /// Add each item in order, stopping at the first error.
    pub fn set_values(&mut self, items: impl IntoIterator<Item = T>) -> Result<Vec<AddOutcome>> {
        items.into_iter().map(|item| self.add(item)).collect()
    }

    /// Index of an accepted value equal to `item`.
    ///
    /// With case-insensitive comparison on, equal display text ignoring case
    /// also counts.
    pub fn position_of(&self, item: &T) -> Option<usize> {
        let folded = self
            .case_insensitive
            .then(|| (self.item_text)(item).to_lowercase());

        self.values.iter().position(|value| {
            value == item
                || folded
                    .as_ref()
                    .is_some_and(|text| (self.item_text)(value).to_lowercase() == *text)
        })
    }
}

impl<T> TagCollection<T> {
    /// Accepted values in order.
    pub fn values(&self) -> &[T] {
        &self.values
    }

    /// Identifiers parallel to [`values`](Self::values).
    pub fn value_ids(&self) -> &[String] {
        &self.value_ids
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Whether no more values can be accepted.
    pub fn is_full(&self) -> bool {
        self.max.is_some_and(|max| self.values.len() >= max)
    }

    pub fn max(&self) -> Option<usize> {
        self.max
    }

    pub fn get(&self, index: usize) -> Option<&T> {
        self.values.get(index)
    }

    /// Display text of the value at `index`.
    pub fn text_of(&self, index: usize) -> Option<String> {
        self.values.get(index).map(|item| (self.item_text)(item))
    }

    /// The bound value: identifiers in the configured encoding.
    pub fn serialized(&self) -> String {
        self.value_encoding.encode(&self.value_ids)
    }

    /// Drain pending events.
    pub fn take_events(&mut self) -> Vec<TagEvent<T>> {
        std::mem::take(&mut self.events)
    }
}

impl<T: fmt::Debug> fmt::Debug for TagCollection<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TagCollection")
            .field("values", &self.values)
            .field("value_ids", &self.value_ids)
            .field("max", &self.max)
            .finish_non_exhaustive()
    }
}
