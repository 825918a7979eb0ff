//! Language tag → scanner routing.

use std::collections::HashMap;

use codeview_core::{HighlightedLine, LineScanner, PlainScanner, Token};
use codeview_lang::{Language, ScannerFamily};
use once_cell::sync::Lazy;

use crate::clike::{clike_scanner, tag_aware_scanner};
use crate::generic::generic_scanner_for;
use crate::scanner::RuleScanner;

static PLAIN: PlainScanner = PlainScanner;

/// Every built-in scanner, compiled once.
struct ScannerTable {
    clike: RuleScanner,
    tag_aware: RuleScanner,
    generic: HashMap<Language, RuleScanner>,
}

impl ScannerTable {
    fn build() -> Result<Self, regex::Error> {
        let mut generic = HashMap::new();
        for language in Language::ALL {
            if language.scanner_family() == Some(ScannerFamily::Generic) {
                generic.insert(language, generic_scanner_for(Some(language))?);
            }
        }
        Ok(Self {
            clike: clike_scanner()?,
            tag_aware: tag_aware_scanner()?,
            generic,
        })
    }

    fn get(&self, language: Language) -> Option<&RuleScanner> {
        match language.scanner_family()? {
            ScannerFamily::CLike => Some(&self.clike),
            ScannerFamily::TagAware => Some(&self.tag_aware),
            ScannerFamily::Generic => self.generic.get(&language),
        }
    }
}

static TABLE: Lazy<Result<ScannerTable, regex::Error>> = Lazy::new(ScannerTable::build);

/// The scanner that handles `language`.
///
/// Tags are matched case-sensitively. Unknown and fold-only tags get the plain pass-through
/// scanner.
pub fn scanner_for(language: &str) -> &'static dyn LineScanner {
    let table = match &*TABLE {
        Ok(table) => table,
        Err(err) => {
            tracing::error!(%err, "scanner table failed to build; falling back to plain text");
            return &PLAIN;
        }
    };
    if let Some(scanner) = Language::from_tag(language).and_then(|lang| table.get(lang)) {
        return scanner;
    }
    tracing::debug!(language, "no scanner for language; rendering as plain text");
    &PLAIN
}

/// Highlight a whole document, one [`HighlightedLine`] per line.
///
/// `highlight("", _)` is empty.
pub fn highlight(code: &str, language: &str) -> Vec<HighlightedLine> {
    scanner_for(language).scan_document(code)
}

/// Highlight a single line.
pub fn highlight_line(line: &str, language: &str) -> Vec<Token> {
    scanner_for(language).scan_line(line)
}
