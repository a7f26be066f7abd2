//! Candidate sources: static lists, synchronous providers and deferred
//! (callback-style) providers.
//!
//! Deferred providers receive a [`Deliver`] handle which may be moved into a
//! background task. Results travel back over a tokio channel and are consumed
//! by the typeahead when it polls, so the widget itself never blocks.

use std::fmt;
use std::sync::Arc;

use tokio::sync::mpsc;
use tracing::trace;

use crate::error::Result;

/// Synchronous provider: `(query) -> candidates`.
pub type ProviderFn<T> = Arc<dyn Fn(&str) -> Result<Vec<T>> + Send + Sync>;

/// Deferred provider: `(query, deliver)`; calls `deliver` at most once.
pub type DeferredFn<T> = Arc<dyn Fn(&str, Deliver<T>) + Send + Sync>;

/// Where suggestions come from.
pub enum Source<T> {
    /// A fixed, ordered candidate list.
    Static(Vec<T>),
    /// Candidates computed from the query on demand.
    Provider(ProviderFn<T>),
    /// Candidates delivered later through a callback handle.
    Deferred(DeferredFn<T>),
}

impl<T> Source<T> {
    /// Wrap an infallible synchronous provider.
    pub fn provider<F>(f: F) -> Self
    where
        F: Fn(&str) -> Vec<T> + Send + Sync + 'static,
    {
        Source::Provider(Arc::new(move |query| Ok(f(query))))
    }

    /// Wrap a synchronous provider whose failures propagate to the caller.
    pub fn fallible<F>(f: F) -> Self
    where
        F: Fn(&str) -> Result<Vec<T>> + Send + Sync + 'static,
    {
        Source::Provider(Arc::new(f))
    }

    /// Wrap a callback-style provider.
    pub fn deferred<F>(f: F) -> Self
    where
        F: Fn(&str, Deliver<T>) + Send + Sync + 'static,
    {
        Source::Deferred(Arc::new(f))
    }
}

impl<T> Default for Source<T> {
    fn default() -> Self {
        Source::Static(Vec::new())
    }
}

impl<T: Clone> Clone for Source<T> {
    fn clone(&self) -> Self {
        match self {
            Source::Static(items) => Source::Static(items.clone()),
            Source::Provider(f) => Source::Provider(Arc::clone(f)),
            Source::Deferred(f) => Source::Deferred(Arc::clone(f)),
        }
    }
}

impl<T> fmt::Debug for Source<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Source::Static(items) => f.debug_tuple("Static").field(&items.len()).finish(),
            Source::Provider(_) => f.write_str("Provider(..)"),
            Source::Deferred(_) => f.write_str("Deferred(..)"),
        }
    }
}

/// Result of a deferred lookup, tagged with the lookup it answers.
#[derive(Debug)]
pub struct Delivery<T> {
    pub(crate) generation: u64,
    pub(crate) items: Vec<T>,
}

/// One-shot handle passed to a deferred provider.
pub struct Deliver<T> {
    generation: u64,
    query: String,
    tx: mpsc::UnboundedSender<Delivery<T>>,
}

impl<T> Deliver<T> {
    pub(crate) fn new(
        generation: u64,
        query: impl Into<String>,
        tx: mpsc::UnboundedSender<Delivery<T>>,
    ) -> Self {
        Self {
            generation,
            query: query.into(),
            tx,
        }
    }

    /// The query this handle answers.
    pub fn query(&self) -> &str {
        &self.query
    }

    /// Hand the candidates back to the widget.
    ///
    /// Delivering after the widget has been dropped is a no-op.
    pub fn deliver(self, items: Vec<T>) {
        trace!(
            generation = self.generation,
            query = %self.query,
            count = items.len(),
            "Deferred candidates delivered"
        );
        let _ = self.tx.send(Delivery {
            generation: self.generation,
            items,
        });
    }
}

impl<T> fmt::Debug for Deliver<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Deliver")
            .field("generation", &self.generation)
            .field("query", &self.query)
            .finish()
    }
}
