//! The suggestion engine: candidates, sources, ranking and highlighting.

mod candidate;
mod engine;
mod highlight;
mod source;

pub use candidate::Candidate;
pub use engine::{
    classify, sort_by_tier, EngineOptions, HighlighterFn, MatchTier,
    MatcherFn, SorterFn, SuggestionEngine, TextFn,
};
pub use highlight::{contains_ignore_case, highlight, starts_with_ignore_case, Highlighted};
pub use source::{DeferredFn, Deliver, Delivery, ProviderFn, Source};
