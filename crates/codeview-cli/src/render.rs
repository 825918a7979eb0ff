//! Paints a [`CodeSnapshot`] onto a terminal.

use std::borrow::Cow;
use std::io::{self, Write};

use codeview_core::DiffKind;
use codeview_highlight::{CodeSnapshot, SnapshotRow};
use crossterm::queue;
use crossterm::style::{Color, Print, ResetColor, SetBackgroundColor, SetForegroundColor};
use unicode_width::UnicodeWidthStr;

use crate::theme::Palette;

const TAB: &str = "    ";

/// Writes snapshots as (optionally colored) text, one terminal line per row.
#[derive(Debug, Clone)]
pub struct Renderer {
    palette: Palette,
    color: bool,
    line_end: &'static str,
}

impl Renderer {
    pub fn new(palette: Palette, color: bool) -> Self {
        Self {
            palette,
            color,
            line_end: "\n",
        }
    }

    /// Terminate rows with `\r\n`, as needed while the terminal is in raw mode.
    pub fn raw_mode(mut self, raw: bool) -> Self {
        self.line_end = if raw { "\r\n" } else { "\n" };
        self
    }

    /// Write every row of `snapshot`. Returns the number of lines written.
    pub fn write_snapshot<W: Write>(
        &self,
        out: &mut W,
        snapshot: &CodeSnapshot,
    ) -> io::Result<usize> {
        let layout = Layout::measure(snapshot);
        for row in &snapshot.rows {
            self.write_row(out, &layout, row)?;
        }
        out.flush()?;
        Ok(snapshot.rows.len())
    }

    fn write_row<W: Write>(
        &self,
        out: &mut W,
        layout: &Layout,
        row: &SnapshotRow,
    ) -> io::Result<()> {
        let background = self.row_background(row);

        if let Some(number) = row.display_number {
            let gutter = format!("{number:>width$} │ ", width = layout.gutter);
            self.paint(out, &gutter, self.palette.gutter, background)?;
        }
        if layout.fold_column {
            let marker = match row.fold {
                Some(fold) if fold.collapsed => "▸ ",
                Some(_) => "▾ ",
                None => "  ",
            };
            self.paint(out, marker, self.palette.gutter, background)?;
        }
        if layout.diff_column {
            let (marker, color) = match row.diff {
                Some(DiffKind::Add) => ("+ ", self.palette.string),
                Some(DiffKind::Remove) => ("− ", self.palette.keyword),
                _ => ("  ", self.palette.gutter),
            };
            self.paint(out, marker, color, background)?;
        }

        for token in &row.tokens {
            let text = display_text(&token.text);
            self.paint(out, &text, self.palette.token(token.kind), background)?;
        }
        let suffix = collapsed_suffix(row);
        if !suffix.is_empty() {
            self.paint(out, &suffix, self.palette.comment, background)?;
        }

        let padding = layout.content.saturating_sub(content_width(row)) + 1;
        self.paint(out, &" ".repeat(padding), self.palette.foreground, background)?;
        queue!(out, Print(self.line_end))
    }

    fn row_background(&self, row: &SnapshotRow) -> Color {
        match row.diff {
            Some(DiffKind::Add) => return self.palette.added_line,
            Some(DiffKind::Remove) => return self.palette.removed_line,
            _ => {}
        }
        if row.active {
            self.palette.active_line
        } else if row.highlighted {
            self.palette.highlight_line
        } else {
            self.palette.background
        }
    }

    fn paint<W: Write>(&self, out: &mut W, text: &str, fg: Color, bg: Color) -> io::Result<()> {
        if self.color {
            queue!(
                out,
                SetForegroundColor(fg),
                SetBackgroundColor(bg),
                Print(text),
                ResetColor
            )
        } else {
            queue!(out, Print(text))
        }
    }
}

/// Column widths shared by every row of a snapshot.
struct Layout {
    gutter: usize,
    fold_column: bool,
    diff_column: bool,
    content: usize,
}

impl Layout {
    fn measure(snapshot: &CodeSnapshot) -> Self {
        Self {
            gutter: snapshot.gutter_width(),
            fold_column: !snapshot.fold_ranges.is_empty(),
            diff_column: snapshot.diff_stats.is_some(),
            content: snapshot.rows.iter().map(content_width).max().unwrap_or(0),
        }
    }
}

/// Token text as painted: tabs expanded, carriage returns dropped.
fn display_text(text: &str) -> Cow<'_, str> {
    if text.contains(['\t', '\r']) {
        Cow::Owned(text.replace('\r', "").replace('\t', TAB))
    } else {
        Cow::Borrowed(text)
    }
}

fn collapsed_suffix(row: &SnapshotRow) -> String {
    match row.fold {
        Some(fold) if fold.collapsed => {
            let noun = if fold.hidden_lines == 1 { "line" } else { "lines" };
            format!(" ⋯ {} {noun}", fold.hidden_lines)
        }
        _ => String::new(),
    }
}

fn content_width(row: &SnapshotRow) -> usize {
    let text: usize = row
        .tokens
        .iter()
        .map(|token| display_text(&token.text).width())
        .sum();
    text + collapsed_suffix(row).width()
}
