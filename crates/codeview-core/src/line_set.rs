//! Highlight-line specifications.
//!
//! A host asks for some rows to be emphasized either with an explicit list (`[3, 5]`) or a
//! compact string (`"2,4-6"`). Both resolve to a [`HighlightLineSet`].

use serde::{Deserialize, Serialize};
use std::ops::RangeInclusive;

/// A set of 1-based line numbers.
///
/// Stored as sorted, non-overlapping, non-adjacent inclusive spans, so a spec like `"1-1000000"`
/// costs a single entry. Two sets compare equal iff they contain the same lines.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HighlightLineSet {
    spans: Vec<RangeInclusive<usize>>,
}

impl HighlightLineSet {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a comma-separated list of line numbers and inclusive `a-b` spans.
    ///
    /// Tokens are trimmed. A span with `a > b` contributes nothing; tokens that are not numeric
    /// are skipped. Never fails.
    pub fn parse(spec: &str) -> Self {
        let mut spans = Vec::new();
        for part in spec.split(',') {
            let part = part.trim();
            if part.contains('-') {
                let mut bounds = part.split('-').map(|b| b.trim().parse::<usize>());
                if let (Some(Ok(a)), Some(Ok(b))) = (bounds.next(), bounds.next())
                    && a <= b
                {
                    spans.push(a..=b);
                }
            } else if let Ok(n) = part.parse::<usize>() {
                spans.push(n..=n);
            }
        }
        Self::from_spans(spans)
    }

    /// Build a set from an explicit list of line numbers. Duplicates collapse.
    pub fn from_lines(lines: impl IntoIterator<Item = usize>) -> Self {
        Self::from_spans(lines.into_iter().map(|n| n..=n).collect())
    }

    fn from_spans(mut spans: Vec<RangeInclusive<usize>>) -> Self {
        spans.sort_by_key(|span| *span.start());
        let mut merged: Vec<RangeInclusive<usize>> = Vec::with_capacity(spans.len());
        for span in spans {
            if let Some(last) = merged.last_mut()
                && *span.start() <= last.end().saturating_add(1)
            {
                if span.end() > last.end() {
                    *last = *last.start()..=*span.end();
                }
                continue;
            }
            merged.push(span);
        }
        Self { spans: merged }
    }

    /// Add a single line.
    pub fn insert(&mut self, line: usize) {
        if self.contains(line) {
            return;
        }
        let mut spans = std::mem::take(&mut self.spans);
        spans.push(line..=line);
        *self = Self::from_spans(spans);
    }

    /// Whether `line` is in the set.
    pub fn contains(&self, line: usize) -> bool {
        let idx = self.spans.partition_point(|span| *span.end() < line);
        self.spans
            .get(idx)
            .is_some_and(|span| span.contains(&line))
    }

    /// Number of lines in the set.
    pub fn len(&self) -> usize {
        self.spans.iter().fold(0usize, |acc, span| {
            acc.saturating_add((span.end() - span.start()).saturating_add(1))
        })
    }

    /// Returns `true` if the set is empty.
    pub fn is_empty(&self) -> bool {
        self.spans.is_empty()
    }

    /// Lines in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = usize> + '_ {
        self.spans.iter().flat_map(|span| span.clone())
    }

    /// The merged spans in ascending order.
    pub fn spans(&self) -> &[RangeInclusive<usize>] {
        &self.spans
    }
}

impl FromIterator<usize> for HighlightLineSet {
    fn from_iter<I: IntoIterator<Item = usize>>(iter: I) -> Self {
        Self::from_lines(iter)
    }
}

/// A highlight-line specification as received from a host or config file.
///
/// Deserializes untagged, so both `[3, 5]` and `"2,4-6"` are accepted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum HighlightSpec {
    /// Explicit line numbers, used as-is.
    Lines(Vec<usize>),
    /// Compact textual form, see [`HighlightLineSet::parse`].
    Text(String),
}

impl HighlightSpec {
    /// Resolve into a concrete set.
    pub fn resolve(&self) -> HighlightLineSet {
        match self {
            Self::Lines(lines) => HighlightLineSet::from_lines(lines.iter().copied()),
            Self::Text(text) => HighlightLineSet::parse(text),
        }
    }

    /// Resolve an optional specification; `None` gives an empty set.
    pub fn resolve_optional(spec: Option<&HighlightSpec>) -> HighlightLineSet {
        spec.map(Self::resolve).unwrap_or_default()
    }
}

impl From<&str> for HighlightSpec {
    fn from(text: &str) -> Self {
        Self::Text(text.to_string())
    }
}

impl From<Vec<usize>> for HighlightSpec {
    fn from(lines: Vec<usize>) -> Self {
        Self::Lines(lines)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lines(set: &HighlightLineSet) -> Vec<usize> {
        set.iter().collect()
    }

    #[test]
    fn test_parse_list_and_ranges() {
        assert_eq!(lines(&HighlightLineSet::parse("2,4-6")), vec![2, 4, 5, 6]);
        assert_eq!(lines(&HighlightLineSet::parse("1-1")), vec![1]);
        assert_eq!(lines(&HighlightLineSet::parse(" 3 , 1 - 2 ")), vec![1, 2, 3]);
    }

    #[test]
    fn test_parse_empty_and_malformed() {
        assert!(HighlightLineSet::parse("").is_empty());
        assert_eq!(lines(&HighlightLineSet::parse("x,2,a-b,7-")), vec![2]);
        assert!(HighlightLineSet::parse("6-4").is_empty());
    }

    #[test]
    fn test_extra_bounds_are_ignored() {
        assert_eq!(lines(&HighlightLineSet::parse("4-6-8")), vec![4, 5, 6]);
    }

    #[test]
    fn test_list_form_dedups() {
        let set = HighlightLineSet::from_lines([3, 3, 5]);
        assert_eq!(lines(&set), vec![3, 5]);
        assert_eq!(set.len(), 2);
    }

    #[test]
    fn test_spans_merge() {
        let set = HighlightLineSet::parse("1-3,4,6-8,7-10");
        assert_eq!(set.spans(), &[1..=4, 6..=10]);
        assert_eq!(set.len(), 9);
        assert!(set.contains(4));
        assert!(!set.contains(5));
        assert!(set.contains(10));
        assert!(!set.contains(11));
    }

    #[test]
    fn test_huge_span_is_cheap() {
        let set = HighlightLineSet::parse("1-1000000000");
        assert_eq!(set.spans().len(), 1);
        assert!(set.contains(999_999_999));
    }

    #[test]
    fn test_insert() {
        let mut set = HighlightLineSet::parse("1,3");
        set.insert(2);
        assert_eq!(set.spans(), &[1..=3]);
    }

    #[test]
    fn test_equality_is_set_equality() {
        assert_eq!(
            HighlightLineSet::parse("1-3"),
            HighlightLineSet::from_lines([3, 1, 2])
        );
    }

    #[test]
    fn test_spec_deserializes_untagged() {
        let spec: HighlightSpec = serde_json::from_str("[3,3,5]").unwrap();
        assert_eq!(lines(&spec.resolve()), vec![3, 5]);

        let spec: HighlightSpec = serde_json::from_str("\"2,4-6\"").unwrap();
        assert_eq!(lines(&spec.resolve()), vec![2, 4, 5, 6]);

        assert!(HighlightSpec::resolve_optional(None).is_empty());
    }
}
