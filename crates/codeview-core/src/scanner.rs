//! The scanner seam.
//!
//! Language scanners (see `codeview-highlight`) implement [`LineScanner`]. The core only knows
//! how to drive one over a whole document and provides the pass-through [`PlainScanner`] used
//! for unknown languages.

use crate::text::split_lines_preserve_trailing;
use crate::token::{HighlightedLine, Token};

/// A deterministic function from one line of text to its token sequence.
///
/// Implementations must be total: every character of the line ends up in exactly one token,
/// so concatenating the token texts rebuilds the line.
pub trait LineScanner {
    /// Tokenize a single line (without its line terminator).
    fn scan_line(&self, line: &str) -> Vec<Token>;

    /// Tokenize a whole document, one entry per line.
    ///
    /// Empty input yields an empty result.
    fn scan_document(&self, code: &str) -> Vec<HighlightedLine> {
        if code.is_empty() {
            return Vec::new();
        }
        split_lines_preserve_trailing(code)
            .into_iter()
            .enumerate()
            .map(|(idx, line)| HighlightedLine::new(idx + 1, self.scan_line(line)))
            .collect()
    }
}

/// Emits each non-empty line as a single text token.
#[derive(Debug, Clone, Copy, Default)]
pub struct PlainScanner;

impl LineScanner for PlainScanner {
    fn scan_line(&self, line: &str) -> Vec<Token> {
        if line.is_empty() {
            Vec::new()
        } else {
            vec![Token::text(line)]
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_scanner_document() {
        let lines = PlainScanner.scan_document("a b\n\nc");
        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0].tokens, vec![Token::text("a b")]);
        assert!(lines[1].tokens.is_empty());
        assert_eq!(lines[2].number, 3);
    }

    #[test]
    fn test_empty_document() {
        assert!(PlainScanner.scan_document("").is_empty());
    }
}
