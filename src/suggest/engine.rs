//! Matching, ranking and highlighting of candidates against a query.

use std::fmt;
use std::sync::Arc;

use super::candidate::Candidate;
use super::highlight::{contains_ignore_case, highlight, starts_with_ignore_case, Highlighted};

/// Decides whether a candidate is eligible for the query.
pub type MatcherFn<T> = Arc<dyn Fn(&T, &str) -> bool + Send + Sync>;
/// Orders the eligible candidates for the query.
pub type SorterFn<T> = Arc<dyn Fn(Vec<T>, &str) -> Vec<T> + Send + Sync>;
/// Produces the emphasized display text of a candidate.
pub type HighlighterFn<T> = Arc<dyn Fn(&T, &str) -> Highlighted + Send + Sync>;
/// Projects a candidate to its display text.
pub type TextFn<T> = Arc<dyn Fn(&T) -> String + Send + Sync>;

/// Ranking tier of a candidate, best first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchTier {
    /// Text starts with the query, ignoring case.
    Prefix,
    /// Text contains the query elsewhere, with matching case.
    Substring,
    /// Anything else the matcher let through.
    Other,
}

/// Classify `text` against `query`.
pub fn classify(text: &str, query: &str) -> MatchTier {
    if starts_with_ignore_case(text, query) {
        MatchTier::Prefix
    } else if text.contains(query) {
        MatchTier::Substring
    } else {
        MatchTier::Other
    }
}

/// Stable three-way bucket sort by [`MatchTier`].
///
/// Consumes `items` in a single pass; relative order inside each tier is kept.
pub fn sort_by_tier<T, F>(items: Vec<T>, query: &str, text: F) -> Vec<T>
where
    F: Fn(&T) -> String,
{
    let mut prefix = Vec::new();
    let mut substring = Vec::new();
    let mut other = Vec::new();

    for item in items {
        match classify(&text(&item), query) {
            MatchTier::Prefix => prefix.push(item),
            MatchTier::Substring => substring.push(item),
            MatchTier::Other => other.push(item),
        }
    }

    prefix.extend(substring);
    prefix.extend(other);
    prefix
}

/// Strategy overrides for a [`SuggestionEngine`]; `None` keeps the default.
pub struct EngineOptions<T> {
    /// Custom matcher.
    pub matcher: Option<MatcherFn<T>>,
    /// Custom sorter.
    pub sorter: Option<SorterFn<T>>,
    /// Custom highlighter.
    pub highlighter: Option<HighlighterFn<T>>,
    /// Custom display-text projection.
    pub item_text: Option<TextFn<T>>,
}

impl<T> Default for EngineOptions<T> {
    fn default() -> Self {
        Self {
            matcher: None,
            sorter: None,
            highlighter: None,
            item_text: None,
        }
    }
}

impl<T> Clone for EngineOptions<T> {
    fn clone(&self) -> Self {
        Self {
            matcher: self.matcher.clone(),
            sorter: self.sorter.clone(),
            highlighter: self.highlighter.clone(),
            item_text: self.item_text.clone(),
        }
    }
}

/// Matches, ranks and highlights candidates.
///
/// All strategies are resolved once at construction; the engine itself holds
/// no query state.
pub struct SuggestionEngine<T> {
    matcher: MatcherFn<T>,
    sorter: SorterFn<T>,
    highlighter: HighlighterFn<T>,
    item_text: TextFn<T>,
}

impl<T: Candidate + 'static> SuggestionEngine<T> {
    /// Create an engine, filling unset strategies with the defaults.
    pub fn new(options: EngineOptions<T>) -> Self {
        let item_text: TextFn<T> = match options.item_text {
            Some(f) => f,
            None => Arc::new(|item: &T| item.text().into_owned()),
        };

        let matcher: MatcherFn<T> = match options.matcher {
            Some(f) => f,
            None => {
                let text = Arc::clone(&item_text);
                Arc::new(move |item: &T, query: &str| contains_ignore_case(&text(item), query))
            }
        };

        let sorter: SorterFn<T> = match options.sorter {
            Some(f) => f,
            None => {
                let text = Arc::clone(&item_text);
                Arc::new(move |items: Vec<T>, query: &str| {
                    sort_by_tier(items, query, |item: &T| text(item))
                })
            }
        };

        let highlighter: HighlighterFn<T> = match options.highlighter {
            Some(f) => f,
            None => {
                let text = Arc::clone(&item_text);
                Arc::new(move |item: &T, query: &str| highlight(&text(item), query))
            }
        };

        Self {
            matcher,
            sorter,
            highlighter,
            item_text,
        }
    }
}

impl<T> SuggestionEngine<T> {
    /// Whether `item` is eligible for `query`.
    pub fn matches(&self, item: &T, query: &str) -> bool {
        (self.matcher)(item, query)
    }

    /// Filter with the matcher, then order with the sorter.
    pub fn rank(&self, candidates: Vec<T>, query: &str) -> Vec<T> {
        let eligible: Vec<T> = candidates
            .into_iter()
            .filter(|item| self.matches(item, query))
            .collect();
        (self.sorter)(eligible, query)
    }

    /// Emphasized display text of `item` for `query`.
    pub fn highlight(&self, item: &T, query: &str) -> Highlighted {
        (self.highlighter)(item, query)
    }

    /// Display text of `item`.
    pub fn text(&self, item: &T) -> String {
        (self.item_text)(item)
    }
}

impl<T> fmt::Debug for SuggestionEngine<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuggestionEngine").finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::{json, Value};

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(|s| s.to_string()).collect()
    }

    fn engine() -> SuggestionEngine<String> {
        SuggestionEngine::new(EngineOptions::default())
    }

    #[test]
    fn test_rank_prefix_tier_excludes_non_matches() {
        let ranked = engine().rank(strings(&["apple", "apricot", "banana"]), "ap");
        assert_eq!(ranked, strings(&["apple", "apricot"]));
    }

    #[test]
    fn test_rank_orders_tiers_and_keeps_relative_order() {
        let input = strings(&["grape", "xAPx", "Apple", "snap", "apex", "MAP"]);
        let ranked = engine().rank(input, "ap");
        // prefix: Apple, apex; case-sensitive substring: grape, snap; rest: xAPx, MAP
        assert_eq!(
            ranked,
            strings(&["Apple", "apex", "grape", "snap", "xAPx", "MAP"])
        );
    }

    #[test]
    fn test_rank_result_is_exactly_the_matching_elements() {
        let input = strings(&["one", "two", "three", "four", "bone", "toNE"]);
        let e = engine();
        let ranked = e.rank(input.clone(), "ne");

        let mut expected: Vec<String> = input
            .iter()
            .filter(|i| e.matches(i, "ne"))
            .cloned()
            .collect();
        let mut actual = ranked.clone();
        expected.sort();
        actual.sort();
        assert_eq!(actual, expected);

        let tiers: Vec<MatchTier> = ranked.iter().map(|i| classify(i, "ne")).collect();
        let mut sorted = tiers.clone();
        sorted.sort();
        assert_eq!(tiers, sorted);
    }

    #[test]
    fn test_sort_by_tier_keeps_non_matches_last() {
        let sorted = sort_by_tier(strings(&["zzz", "bab", "bar"]), "ba", |s| s.clone());
        assert_eq!(sorted, strings(&["bab", "bar", "zzz"]));
    }

    #[test]
    fn test_classify() {
        assert_eq!(classify("Apple", "ap"), MatchTier::Prefix);
        assert_eq!(classify("grape", "ap"), MatchTier::Substring);
        assert_eq!(classify("GRAPE", "ap"), MatchTier::Other);
    }

    #[test]
    fn test_custom_matcher_and_sorter() {
        let e = SuggestionEngine::new(EngineOptions {
            matcher: Some(Arc::new(|item: &String, _q: &str| item.len() > 3)),
            sorter: Some(Arc::new(|mut items: Vec<String>, _q: &str| {
                items.reverse();
                items
            })),
            ..Default::default()
        });
        let ranked = e.rank(strings(&["a", "long", "longer"]), "x");
        assert_eq!(ranked, strings(&["longer", "long"]));
    }

    #[test]
    fn test_custom_item_text_drives_defaults() {
        let e: SuggestionEngine<Value> = SuggestionEngine::new(EngineOptions {
            item_text: Some(Arc::new(|item: &Value| {
                item["code"].as_str().unwrap_or_default().to_string()
            })),
            ..Default::default()
        });
        let items = vec![json!({"code": "zeta"}), json!({"code": "alpha"})];
        let ranked = e.rank(items, "al");
        assert_eq!(ranked, vec![json!({"code": "alpha"})]);
        assert_eq!(e.highlight(&ranked[0], "AL").emphasis, vec![0..2]);
    }

    #[test]
    fn test_matched_candidates_are_always_emphasized() {
        let e = engine();
        let query = "i\u{307}";
        let ranked = e.rank(strings(&["İzmir", "i\u{307}stanbul", "Oslo"]), query);
        assert_eq!(ranked, strings(&["i\u{307}stanbul"]));
        for item in &ranked {
            assert!(!e.highlight(item, query).emphasis.is_empty());
        }
    }

    #[test]
    fn test_default_highlight_uses_display_text() {
        let e: SuggestionEngine<Value> = SuggestionEngine::new(EngineOptions::default());
        let item = json!({"id": 1, "name": "Backend"});
        let h = e.highlight(&item, "end");
        assert_eq!(h.text, "Backend");
        assert_eq!(h.emphasis, vec![4..7]);
    }
}
