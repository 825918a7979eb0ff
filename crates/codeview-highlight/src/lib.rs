#![warn(missing_docs)]
//! `codeview-highlight` - rule-chain syntax scanners for `codeview`.
//!
//! Three scanner families cover the supported languages:
//!
//! - a C-like/JS scanner ([`clike_scanner`]),
//! - a tag-aware variant for script with embedded markup ([`tag_aware_scanner`]),
//! - a generic scanner with one rule table per language ([`generic_scanner`]).
//!
//! All of them are [`RuleScanner`]s: ordered [`Rule`] lists evaluated first-match-wins at each
//! offset. [`highlight`] routes a language tag to the right scanner, and [`CodeView`] composes
//! the tokens with folds, highlight lines and diffs into a headless [`CodeSnapshot`].
//!
//! ```rust
//! use codeview_highlight::{TokenKind, highlight};
//!
//! let lines = highlight("const x = 1;", "javascript");
//! assert_eq!(lines[0].tokens[0].kind, TokenKind::Keyword);
//! assert_eq!(lines[0].tokens[0].text, "const");
//! ```

pub mod clike;
pub mod dispatch;
pub mod generic;
pub mod rule;
pub mod scanner;
pub mod snapshot;

pub use clike::{clike_scanner, clike_scanner_with_keywords, tag_aware_scanner};
pub use dispatch::{highlight, highlight_line, scanner_for};
pub use generic::{generic_scanner, generic_scanner_for};
pub use rule::{Anchor, Matcher, RegexMatcher, Rule};
pub use scanner::RuleScanner;
pub use snapshot::{CodeSnapshot, CodeView, FoldMarker, SnapshotRow};

pub use codeview_core::{HighlightedLine, LineScanner, Token, TokenKind};
