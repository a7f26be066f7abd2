//! Case-insensitive literal highlighting of a query inside display text.

use std::ops::Range;

/// Display text with emphasized ranges.
///
/// Ranges are byte offsets into `text`, sorted and non-overlapping, and always
/// fall on character boundaries.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Highlighted {
    /// The full display text.
    pub text: String,
    /// Emphasized byte ranges.
    pub emphasis: Vec<Range<usize>>,
}

impl Highlighted {
    /// Text with no emphasis.
    pub fn plain(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            emphasis: Vec::new(),
        }
    }

    /// Split the text into `(segment, emphasized)` pieces, in order.
    pub fn segments(&self) -> Vec<(&str, bool)> {
        let mut segments = Vec::with_capacity(self.emphasis.len() * 2 + 1);
        let mut last_end = 0;
        for range in &self.emphasis {
            if range.start > last_end {
                segments.push((&self.text[last_end..range.start], false));
            }
            segments.push((&self.text[range.clone()], true));
            last_end = range.end;
        }
        if last_end < self.text.len() {
            segments.push((&self.text[last_end..], false));
        }
        segments
    }
}

/// Emphasize every case-insensitive occurrence of `query` in `text`.
///
/// The query is matched literally; characters such as `.` or `(` have no
/// special meaning.
pub fn highlight(text: &str, query: &str) -> Highlighted {
    if query.is_empty() {
        return Highlighted::plain(text);
    }

    let mut emphasis = Vec::new();
    let mut pos = 0;
    while pos < text.len() {
        if let Some(len) = match_len_at(&text[pos..], query) {
            emphasis.push(pos..pos + len);
            pos += len;
        } else {
            // Advance by one character.
            pos += text[pos..].chars().next().map_or(1, char::len_utf8);
        }
    }

    Highlighted {
        text: text.to_string(),
        emphasis,
    }
}

/// Whether `text` starts with `query`, ignoring case.
///
/// Case is folded one character at a time, the same rule [`highlight`]
/// uses, so a prefix match always has an emphasized range at 0.
pub fn starts_with_ignore_case(text: &str, query: &str) -> bool {
    query.is_empty() || match_len_at(text, query).is_some()
}

/// Whether `text` contains `query`, ignoring case.
///
/// Returns true exactly when [`highlight`] finds at least one range.
pub fn contains_ignore_case(text: &str, query: &str) -> bool {
    query.is_empty()
        || text
            .char_indices()
            .any(|(i, _)| match_len_at(&text[i..], query).is_some())
}

/// Byte length of the prefix of `text` that equals `query` ignoring case.
fn match_len_at(text: &str, query: &str) -> Option<usize> {
    let mut chars = text.char_indices();
    for qc in query.chars() {
        let (_, tc) = chars.next()?;
        if !chars_eq_ignore_case(tc, qc) {
            return None;
        }
    }
    Some(chars.next().map_or(text.len(), |(i, _)| i))
}

fn chars_eq_ignore_case(a: char, b: char) -> bool {
    a == b || a.to_lowercase().eq(b.to_lowercase())
}
