//! Brace-based code folding.
//!
//! [`fold_ranges`] scans a document for brace-delimited blocks. [`FoldState`] is the
//! caller-owned collapse state that decides which lines a renderer shows.

use codeview_lang::Language;
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;
use std::str::Chars;

use crate::text::split_lines_preserve_trailing;

/// A collapsible block.
///
/// Both lines are 1-based. `start` is the line ending in the opening brace and `end` the line
/// holding the matching closing brace. Both stay visible when collapsed; only the interior
/// lines fold. Always `end > start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct FoldRange {
    /// Opening line (1-based).
    pub start: usize,
    /// Closing line (1-based).
    pub end: usize,
}

impl FoldRange {
    /// Create a fold range.
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    /// Check if `line` is hidden when this range is collapsed.
    pub fn folds_line(&self, line: usize) -> bool {
        line > self.start && line < self.end
    }

    /// Number of lines hidden when collapsed.
    pub fn folded_line_count(&self) -> usize {
        self.end.saturating_sub(self.start + 1)
    }
}

/// Compute fold ranges for `code` in the language named by `language`.
///
/// The tag is matched ignoring case. Languages outside the brace-block allow-list (and unknown
/// tags) yield no ranges.
pub fn fold_ranges(code: &str, language: &str) -> Vec<FoldRange> {
    match Language::from_tag_ignore_case(language) {
        Some(lang) => fold_ranges_for(code, lang),
        None => Vec::new(),
    }
}

/// Compute fold ranges for `code` in an already resolved language.
pub fn fold_ranges_for(code: &str, language: Language) -> Vec<FoldRange> {
    if !language.is_foldable() {
        return Vec::new();
    }
    brace_fold_ranges(code)
}

/// Compute fold ranges for `code`, assuming brace-block semantics.
///
/// For every line whose trimmed content ends with `{`, depth is tracked from the start of that
/// line onwards; the first line at whose end the depth is back to zero closes the block. An
/// opener that never closes produces no range. Nested ranges are all reported.
pub fn brace_fold_ranges(code: &str) -> Vec<FoldRange> {
    let lines = split_lines_preserve_trailing(code);
    let deltas: Vec<isize> = lines.iter().map(|line| brace_delta(line)).collect();
    let mut ranges = Vec::new();

    for (open, line) in lines.iter().enumerate() {
        if !line.trim().ends_with('{') {
            continue;
        }

        let mut depth = 0isize;
        let close = (open..lines.len()).find(|&idx| {
            depth += deltas[idx];
            depth == 0
        });

        match close {
            Some(close) if close > open => ranges.push(FoldRange::new(open + 1, close + 1)),
            Some(_) => {}
            None => tracing::trace!(line = open + 1, "fold opener never closes"),
        }
    }

    ranges
}

/// Net brace depth change of one line, ignoring braces inside quoted strings.
///
/// Quotes are `"`, `'` and `` ` ``; a backslash escapes the following character. A quote left
/// open runs to the end of the line.
pub fn brace_delta(line: &str) -> isize {
    let mut depth = 0;
    let mut chars = line.chars();
    while let Some(c) = chars.next() {
        match c {
            '"' | '\'' | '`' => skip_quoted(&mut chars, c),
            '{' => depth += 1,
            '}' => depth -= 1,
            _ => {}
        }
    }
    depth
}

fn skip_quoted(chars: &mut Chars<'_>, quote: char) {
    while let Some(c) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return;
        }
    }
}

/// Collapse state for a set of fold ranges, keyed by [`FoldRange::start`].
///
/// The analyzer never owns this; hosts keep one per rendered block and toggle it on user input.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FoldState {
    collapsed: BTreeSet<usize>,
}

impl FoldState {
    /// Create a state with nothing collapsed.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether the range starting at `start` is collapsed.
    pub fn is_collapsed(&self, start: usize) -> bool {
        self.collapsed.contains(&start)
    }

    /// Collapse the range starting at `start`. Returns `false` if it already was.
    pub fn collapse(&mut self, start: usize) -> bool {
        self.collapsed.insert(start)
    }

    /// Expand the range starting at `start`. Returns `false` if it was not collapsed.
    pub fn expand(&mut self, start: usize) -> bool {
        self.collapsed.remove(&start)
    }

    /// Toggle the range starting at `start`, returning the new collapsed state.
    pub fn toggle(&mut self, start: usize) -> bool {
        if self.collapsed.remove(&start) {
            false
        } else {
            self.collapsed.insert(start);
            true
        }
    }

    /// Collapse every range.
    pub fn collapse_all(&mut self, ranges: &[FoldRange]) {
        self.collapsed.extend(ranges.iter().map(|r| r.start));
    }

    /// Expand all folds.
    pub fn expand_all(&mut self) {
        self.collapsed.clear();
    }

    /// Forget collapsed keys that no longer start any range (e.g. after the code changed).
    pub fn retain_existing(&mut self, ranges: &[FoldRange]) {
        self.collapsed
            .retain(|start| ranges.iter().any(|r| r.start == *start));
    }

    /// Collapsed start lines in ascending order.
    pub fn collapsed_starts(&self) -> impl Iterator<Item = usize> + '_ {
        self.collapsed.iter().copied()
    }

    /// Whether `line` (1-based) is visible given `ranges`.
    pub fn is_line_visible(&self, line: usize, ranges: &[FoldRange]) -> bool {
        !ranges
            .iter()
            .any(|r| self.is_collapsed(r.start) && r.folds_line(line))
    }

    /// All visible 1-based line numbers of a document with `line_count` lines.
    pub fn visible_lines(&self, line_count: usize, ranges: &[FoldRange]) -> Vec<usize> {
        (1..=line_count)
            .filter(|&line| self.is_line_visible(line, ranges))
            .collect()
    }
}
