//! Headless render snapshot.
//!
//! [`CodeView`] composes tokens, fold ranges, highlight lines and diffs into a list of visible
//! rows that a host can paint without knowing anything about scanning.

use codeview_core::{
    DiffKind, DiffStats, FoldRange, FoldState, HighlightLineSet, Token, TokenKind, diff,
    diff_stats, fold_ranges, push_token, split_lines_preserve_trailing,
};
use serde::Serialize;

use crate::dispatch::scanner_for;

/// Fold affordance on a row that starts a fold range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FoldMarker {
    /// Whether the range is currently collapsed.
    pub collapsed: bool,
    /// Number of interior lines the range hides when collapsed.
    pub hidden_lines: usize,
}

/// One visible row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotRow {
    /// 1-based logical line number (diff rows: the 1-based row index).
    pub line: usize,
    /// Number shown in the gutter, if line numbers are on.
    pub display_number: Option<usize>,
    /// Tokens of the row.
    pub tokens: Vec<Token>,
    /// The line is in the highlight set.
    pub highlighted: bool,
    /// The line is the active line.
    pub active: bool,
    /// Present when the line starts a fold range.
    pub fold: Option<FoldMarker>,
    /// Present in diff mode.
    pub diff: Option<DiffKind>,
}

impl SnapshotRow {
    /// The row text.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}

/// Result of [`CodeView::render`] or [`CodeView::render_diff`].
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CodeSnapshot {
    /// Language tag the snapshot was rendered with.
    pub language: String,
    /// Visible rows, in order.
    pub rows: Vec<SnapshotRow>,
    /// Fold ranges of the document (empty when folding is off or in diff mode).
    pub fold_ranges: Vec<FoldRange>,
    /// Total number of logical lines (or diff lines).
    pub line_count: usize,
    /// Whether rows carry display numbers.
    pub show_line_numbers: bool,
    /// Diff summary, in diff mode.
    pub diff_stats: Option<DiffStats>,
}

impl CodeSnapshot {
    /// Number of lines hidden by collapsed folds.
    pub fn hidden_line_count(&self) -> usize {
        self.line_count.saturating_sub(self.rows.len())
    }

    /// Widest display number, in decimal digits. `0` when line numbers are off.
    pub fn gutter_width(&self) -> usize {
        self.rows
            .iter()
            .filter_map(|row| row.display_number)
            .max()
            .map_or(0, |n| n.to_string().len())
    }
}

/// Render options for a code block.
#[derive(Debug, Clone)]
pub struct CodeView {
    language: String,
    show_line_numbers: bool,
    start_line_number: usize,
    highlight_lines: HighlightLineSet,
    active_line: Option<usize>,
    code_folding: bool,
}

impl CodeView {
    /// Create a view for a language tag, with every option off.
    pub fn new(language: impl Into<String>) -> Self {
        Self {
            language: language.into(),
            show_line_numbers: false,
            start_line_number: 1,
            highlight_lines: HighlightLineSet::default(),
            active_line: None,
            code_folding: false,
        }
    }

    /// Show gutter numbers.
    pub fn show_line_numbers(mut self, show: bool) -> Self {
        self.show_line_numbers = show;
        self
    }

    /// Number shown for the first line.
    pub fn start_line_number(mut self, start: usize) -> Self {
        self.start_line_number = start;
        self
    }

    /// Lines to highlight (1-based logical numbers).
    pub fn highlight_lines(mut self, lines: HighlightLineSet) -> Self {
        self.highlight_lines = lines;
        self
    }

    /// The active line (1-based logical number).
    pub fn active_line(mut self, line: Option<usize>) -> Self {
        self.active_line = line;
        self
    }

    /// Enable brace folding.
    pub fn code_folding(mut self, enabled: bool) -> Self {
        self.code_folding = enabled;
        self
    }

    /// The language tag.
    pub fn language(&self) -> &str {
        &self.language
    }

    /// Fold ranges for `code`, or none when folding is off.
    pub fn fold_ranges(&self, code: &str) -> Vec<FoldRange> {
        if self.code_folding {
            fold_ranges(code, &self.language)
        } else {
            Vec::new()
        }
    }

    /// Render `code` with the given fold state.
    pub fn render(&self, code: &str, folds: &FoldState) -> CodeSnapshot {
        let scanner = scanner_for(&self.language);
        let ranges = self.fold_ranges(code);
        let lines = if code.is_empty() {
            Vec::new()
        } else {
            split_lines_preserve_trailing(code)
        };

        let rows = lines
            .iter()
            .enumerate()
            .map(|(index, text)| (index + 1, text))
            .filter(|&(line, _)| folds.is_line_visible(line, &ranges))
            .map(|(line, text)| {
                let fold = ranges
                    .iter()
                    .find(|range| range.start == line)
                    .map(|range| FoldMarker {
                        collapsed: folds.is_collapsed(line),
                        hidden_lines: range.folded_line_count(),
                    });
                SnapshotRow {
                    line,
                    display_number: self.display_number(line),
                    tokens: scanner.scan_line(text),
                    highlighted: self.highlight_lines.contains(line),
                    active: self.active_line == Some(line),
                    fold,
                    diff: None,
                }
            })
            .collect();

        CodeSnapshot {
            language: self.language.clone(),
            rows,
            fold_ranges: ranges,
            line_count: lines.len(),
            show_line_numbers: self.show_line_numbers,
            diff_stats: None,
        }
    }

    /// Render the line diff from `old` to `new`.
    ///
    /// Rows carry plain text tokens and the diff kind. Folding does not apply.
    pub fn render_diff(&self, old: &str, new: &str) -> CodeSnapshot {
        let lines = diff(old, new);
        let stats = diff_stats(&lines);
        let line_count = lines.len();

        let rows = lines
            .into_iter()
            .enumerate()
            .map(|(index, diff_line)| {
                let line = index + 1;
                let mut tokens = Vec::new();
                push_token(&mut tokens, TokenKind::Text, &diff_line.text);
                SnapshotRow {
                    line,
                    display_number: self.display_number(line),
                    tokens,
                    highlighted: self.highlight_lines.contains(line),
                    active: self.active_line == Some(line),
                    fold: None,
                    diff: Some(diff_line.kind),
                }
            })
            .collect();

        CodeSnapshot {
            language: self.language.clone(),
            rows,
            fold_ranges: Vec::new(),
            line_count,
            show_line_numbers: self.show_line_numbers,
            diff_stats: Some(stats),
        }
    }

    fn display_number(&self, line: usize) -> Option<usize> {
        self.show_line_numbers
            .then(|| self.start_line_number.saturating_add(line - 1))
    }
}
