#![warn(missing_docs)]
//! Codeview Core - Headless Code-Display Kernel
//!
//! # Overview
//!
//! `codeview-core` holds the pure, render-agnostic half of a code block widget. It consumes a
//! `(code, language)` pair and produces structured data that a presentation layer turns into
//! pixels, terminal cells or HTML:
//!
//! - a per-line token model ([`Token`], [`TokenKind`], [`HighlightedLine`])
//! - brace-delimited fold ranges ([`fold_ranges`]) plus caller-owned collapse state ([`FoldState`])
//! - a greedy line diff ([`diff`])
//! - highlight-line specifications ([`HighlightLineSet`])
//! - typewriter reveal frames ([`Typewriter`])
//!
//! The language scanners live in `codeview-highlight`; they plug in through the
//! [`LineScanner`] trait defined here.
//!
//! # Architecture Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//! │  Snapshot (CodeView, codeview-highlight)    │  ← Rendering Data
//! ├─────────────────────────────────────────────┤
//! │  Scanners & Dispatcher (codeview-highlight) │  ← Tokenization
//! ├─────────────────────────────────────────────┤
//! │  Folding · Diff · Line sets · Reveal        │  ← Document Analysis
//! ├─────────────────────────────────────────────┤
//! │  Token model · Line splitting               │  ← Data Model
//! └─────────────────────────────────────────────┘
//! ```
//!
//! # Quick Start
//!
//! ```rust
//! use codeview_core::{DiffKind, FoldRange, HighlightLineSet, diff, fold_ranges};
//!
//! let code = "function f() {\n  return 1;\n}";
//! assert_eq!(fold_ranges(code, "javascript"), vec![FoldRange::new(1, 3)]);
//!
//! let lines = diff("a\nb", "a\nc");
//! assert_eq!(lines[0].kind, DiffKind::Same);
//!
//! let set = HighlightLineSet::parse("2,4-6");
//! assert_eq!(set.iter().collect::<Vec<_>>(), vec![2, 4, 5, 6]);
//! ```
//!
//! # Error Handling
//!
//! Every operation is total: unknown languages, unterminated strings, unclosed braces and
//! malformed specifications degrade to a safe default instead of returning an error.

pub mod diff;
pub mod folding;
pub mod line_set;
pub mod reveal;
pub mod scanner;
pub mod text;
pub mod token;

pub use diff::{DiffKind, DiffLine, DiffStats, diff, diff_lines, diff_stats};
pub use folding::{
    FoldRange, FoldState, brace_delta, brace_fold_ranges, fold_ranges, fold_ranges_for,
};
pub use line_set::{HighlightLineSet, HighlightSpec};
pub use reveal::Typewriter;
pub use scanner::{LineScanner, PlainScanner};
pub use text::split_lines_preserve_trailing;
pub use token::{HighlightedLine, Token, TokenKind, push_token};

pub use codeview_lang::Language;
