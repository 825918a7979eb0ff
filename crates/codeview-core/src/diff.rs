//! Line-level diff between two versions of a document.
//!
//! This is a greedy nearest-match aligner, not a minimal (LCS) diff. On adversarial inputs it
//! can emit a longer edit script than necessary; it is kept because it is simple, fast and its
//! output is stable for display purposes.

use serde::{Deserialize, Serialize};

use crate::text::split_lines_preserve_trailing;

/// How a line relates the old and new documents.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiffKind {
    /// Present in both.
    Same,
    /// Only in the new document.
    Add,
    /// Only in the old document.
    Remove,
}

/// One aligned line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffLine {
    /// Classification.
    pub kind: DiffKind,
    /// Line content.
    pub text: String,
    /// 1-based line number in the old document (`None` for added lines).
    pub old_line: Option<usize>,
    /// 1-based line number in the new document (`None` for removed lines).
    pub new_line: Option<usize>,
}

impl DiffLine {
    /// Whether this line belongs to the old document.
    pub fn in_old(&self) -> bool {
        matches!(self.kind, DiffKind::Same | DiffKind::Remove)
    }

    /// Whether this line belongs to the new document.
    pub fn in_new(&self) -> bool {
        matches!(self.kind, DiffKind::Same | DiffKind::Add)
    }
}

/// Line counts of a diff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiffStats {
    /// Unchanged lines.
    pub same: usize,
    /// Added lines.
    pub added: usize,
    /// Removed lines.
    pub removed: usize,
}

impl DiffStats {
    /// Returns `true` if nothing was added or removed.
    pub fn is_unchanged(&self) -> bool {
        self.added == 0 && self.removed == 0
    }
}

/// Summarize a diff.
pub fn diff_stats(lines: &[DiffLine]) -> DiffStats {
    let mut stats = DiffStats::default();
    for line in lines {
        match line.kind {
            DiffKind::Same => stats.same += 1,
            DiffKind::Add => stats.added += 1,
            DiffKind::Remove => stats.removed += 1,
        }
    }
    stats
}

/// Diff two documents line by line.
pub fn diff(old_code: &str, new_code: &str) -> Vec<DiffLine> {
    let old = split_lines_preserve_trailing(old_code);
    let new = split_lines_preserve_trailing(new_code);
    diff_lines(&old, &new)
}

/// Diff two pre-split line sequences.
pub fn diff_lines(old: &[&str], new: &[&str]) -> Vec<DiffLine> {
    let mut aligner = Aligner {
        old,
        new,
        i: 0,
        j: 0,
        out: Vec::with_capacity(old.len().max(new.len())),
    };
    aligner.run();
    aligner.out
}

struct Aligner<'a> {
    old: &'a [&'a str],
    new: &'a [&'a str],
    i: usize,
    j: usize,
    out: Vec<DiffLine>,
}

impl Aligner<'_> {
    fn run(&mut self) {
        while self.i < self.old.len() || self.j < self.new.len() {
            let old_line = self.old.get(self.i).copied();
            let new_line = self.new.get(self.j).copied();
            let (old_line, new_line) = match (old_line, new_line) {
                (Some(a), Some(b)) => (a, b),
                (Some(_), None) => {
                    self.remove();
                    continue;
                }
                (None, Some(_)) => {
                    self.add();
                    continue;
                }
                (None, None) => break,
            };

            if old_line == new_line {
                self.same();
                continue;
            }

            // Forward offset of the old line in the remaining new lines, and vice versa.
            let catch_up_new = self.new[self.j..].iter().position(|l| *l == old_line);
            let catch_up_old = self.old[self.i..].iter().position(|l| *l == new_line);

            match (catch_up_new, catch_up_old) {
                (None, _) => self.remove(),
                (Some(_), None) => self.add(),
                (Some(dj), Some(di)) if dj < di => (0..dj).for_each(|_| self.add()),
                (Some(dj), Some(di)) if di < dj => (0..di).for_each(|_| self.remove()),
                (Some(_), Some(_)) => {
                    tracing::trace!(old = self.i + 1, new = self.j + 1, "diff tie; replacing line");
                    self.remove();
                    self.add();
                }
            }
        }
    }

    fn same(&mut self) {
        self.out.push(DiffLine {
            kind: DiffKind::Same,
            text: self.old[self.i].to_string(),
            old_line: Some(self.i + 1),
            new_line: Some(self.j + 1),
        });
        self.i += 1;
        self.j += 1;
    }

    fn add(&mut self) {
        self.out.push(DiffLine {
            kind: DiffKind::Add,
            text: self.new[self.j].to_string(),
            old_line: None,
            new_line: Some(self.j + 1),
        });
        self.j += 1;
    }

    fn remove(&mut self) {
        self.out.push(DiffLine {
            kind: DiffKind::Remove,
            text: self.old[self.i].to_string(),
            old_line: Some(self.i + 1),
            new_line: None,
        });
        self.i += 1;
    }
}
