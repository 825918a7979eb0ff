//! Per-language rule tables for the generic scanner family.
//!
//! Every table has the same shape: an optional comment rule, the language's own classifiers,
//! its keyword list, then numbers. An unknown tag only gets strings and numbers.

use codeview_core::TokenKind;
use codeview_lang::{CommentConfig, KeywordList, Language, SQL_KEYWORDS};

use crate::rule::{Anchor, Matcher, Rule};
use crate::scanner::RuleScanner;

const GENERIC_QUOTES: [char; 2] = ['"', '\''];

/// Build the generic scanner for a tag.
///
/// Tags outside the generic family (including unknown ones) get the string and number rules
/// only.
pub fn generic_scanner(tag: &str) -> Result<RuleScanner, regex::Error> {
    generic_scanner_for(Language::from_tag(tag))
}

/// Build the generic scanner for a resolved language.
pub fn generic_scanner_for(language: Option<Language>) -> Result<RuleScanner, regex::Error> {
    let Some(language) = language else {
        return Ok(RuleScanner::new(vec![string(), number()]));
    };
    let config = language.config();

    let mut rules = comment_rules(&config.comment);
    rules.extend(classifiers(language)?);
    if !config.keywords.is_empty() {
        rules.push(Rule::new(
            Matcher::Keywords(config.keywords),
            TokenKind::Keyword,
        ));
    }
    rules.push(number());
    Ok(RuleScanner::new(rules))
}

fn comment_rules(comment: &CommentConfig) -> Vec<Rule> {
    let mut rules = Vec::new();
    if let (true, Some(open), Some(close)) = (
        comment.has_block(),
        comment.block_start.as_ref(),
        comment.block_end.as_ref(),
    ) {
        rules.push(Rule::new(
            Matcher::BlockComment {
                open: open.clone(),
                close: close.clone(),
            },
            TokenKind::Comment,
        ));
    }
    if let Some(line) = comment.line.as_ref().filter(|_| comment.has_line()) {
        rules.push(Rule::new(
            Matcher::LineComment(line.clone()),
            TokenKind::Comment,
        ));
    }
    rules
}

fn string() -> Rule {
    Rule::new(Matcher::Quoted(GENERIC_QUOTES.to_vec()), TokenKind::String)
}

fn number() -> Rule {
    Rule::new(Matcher::Number, TokenKind::Number)
}

fn classifiers(language: Language) -> Result<Vec<Rule>, regex::Error> {
    let rules = match language {
        Language::Html => vec![
            string(),
            Rule::pattern(r"</?[a-zA-Z][a-zA-Z0-9]*", TokenKind::Tag)?,
            Rule::pattern(r"([a-zA-Z-]+)\s*=", TokenKind::AttrName)?
                .with_capture_group(1)
                .anchored(Anchor::WordStart),
        ],
        Language::Css => vec![
            string(),
            // A `{` later on the line means `name:` is a pseudo-class selector.
            Rule::pattern(r"([a-zA-Z-]+)\s*:[^{]*$", TokenKind::Property)?
                .with_capture_group(1)
                .anchored(Anchor::WordStart),
            Rule::pattern(r"@[a-zA-Z-]+", TokenKind::Keyword)?,
            Rule::pattern(r"[.#]?[a-zA-Z][a-zA-Z0-9-]*", TokenKind::Selector)?
                .anchored(Anchor::WordStart),
        ],
        Language::Json => vec![
            Rule::pattern(r#"("[^"]*")\s*:"#, TokenKind::Property)?.with_capture_group(1),
            string(),
        ],
        Language::Yaml => vec![
            string(),
            Rule::pattern(r"([a-zA-Z_][a-zA-Z0-9_-]*)\s*:", TokenKind::Property)?
                .with_capture_group(1)
                .anchored(Anchor::WordStart),
        ],
        Language::Sql => vec![
            string(),
            Rule::pattern(r"([a-zA-Z_][a-zA-Z0-9_]*)\s*(?:[,()\s]|$)", TokenKind::Identifier)?
                .with_capture_group(1)
                .except_words(KeywordList::case_insensitive(SQL_KEYWORDS))
                .anchored(Anchor::WordStart),
        ],
        Language::Bash | Language::Shell => vec![
            string(),
            Rule::pattern(r"\$[a-zA-Z_][a-zA-Z0-9_]*|\$\{[^}]+\}", TokenKind::Variable)?,
        ],
        Language::Markdown => vec![
            Rule::pattern(r"(#{1,6})\s", TokenKind::Header)?
                .with_capture_group(1)
                .anchored(Anchor::LineStart),
            Rule::pattern(r"\[[^\]]+\]\([^)]+\)", TokenKind::Link)?,
            Rule::pattern(r"`[^`]+`", TokenKind::Code)?,
        ],
        // Python, and languages the generic family does not own, only add strings.
        _ => vec![string()],
    };
    Ok(rules)
}
