//! C-like/JS scanner and the tag-aware (JSX/TSX) variant.

use codeview_core::TokenKind;
use codeview_lang::{JS_KEYWORDS, JSX_KEYWORDS, KeywordList};

use crate::rule::{Matcher, Rule};
use crate::scanner::RuleScanner;

/// Quote characters shared by every script-like scanner.
pub const QUOTES: [char; 3] = ['"', '\'', '`'];

/// Single-character operators and punctuation.
pub const OPERATORS: &str = "+-*/%=<>!&|^~?:;,.[]{}()";

/// Build the C-like/JS scanner.
///
/// Priority: line comment, string, keyword, number, class name, function name, variable,
/// operator, then the one-character fallback.
pub fn clike_scanner() -> Result<RuleScanner, regex::Error> {
    clike_scanner_with_keywords(KeywordList::case_sensitive(JS_KEYWORDS))
}

/// Build a C-like scanner with a custom keyword list.
pub fn clike_scanner_with_keywords(keywords: KeywordList) -> Result<RuleScanner, regex::Error> {
    let mut rules = vec![
        line_comment(),
        Rule::new(Matcher::Quoted(QUOTES.to_vec()), TokenKind::String),
        Rule::new(Matcher::Keywords(keywords), TokenKind::Keyword),
    ];
    rules.extend(identifier_rules()?);
    Ok(RuleScanner::new(rules))
}

/// Build the tag-aware scanner for script with embedded markup.
///
/// Same discipline as [`clike_scanner`], with tag and attribute-name rules ahead of strings and
/// identifiers, and the smaller JSX keyword list.
pub fn tag_aware_scanner() -> Result<RuleScanner, regex::Error> {
    let mut rules = vec![
        line_comment(),
        Rule::pattern(r"</?[A-Za-z][A-Za-z0-9]*", TokenKind::Tag)?,
        Rule::pattern(r"([A-Za-z-]+)\s*=", TokenKind::AttrName)?.with_capture_group(1),
        Rule::new(Matcher::Quoted(QUOTES.to_vec()), TokenKind::String),
        Rule::new(
            Matcher::Keywords(KeywordList::case_sensitive(JSX_KEYWORDS)),
            TokenKind::Keyword,
        ),
    ];
    rules.extend(identifier_rules()?);
    Ok(RuleScanner::new(rules))
}

fn line_comment() -> Rule {
    Rule::new(Matcher::LineComment("//".into()), TokenKind::Comment)
}

// number, class name, function, variable, operator
fn identifier_rules() -> Result<Vec<Rule>, regex::Error> {
    Ok(vec![
        Rule::new(Matcher::Number, TokenKind::Number),
        Rule::pattern(r"[A-Z][A-Za-z0-9]*", TokenKind::ClassName)?,
        Rule::pattern(r"([A-Za-z_$][A-Za-z0-9_$]*)\s*\(", TokenKind::Function)?
            .with_capture_group(1),
        Rule::pattern(r"[A-Za-z_$][A-Za-z0-9_$]*", TokenKind::Variable)?,
        Rule::new(Matcher::OneOf(OPERATORS.into()), TokenKind::Operator),
    ])
}

#[cfg(test)]
mod tests {
    use super::*;
    use codeview_core::{LineScanner, Token};
    use pretty_assertions::assert_eq;

    fn tok(kind: TokenKind, text: &str) -> Token {
        Token::new(kind, text)
    }

    #[test]
    fn test_keyword_priority() {
        let scanner = clike_scanner().unwrap();
        assert_eq!(
            scanner.scan_line("const Foo = require("),
            vec![
                tok(TokenKind::Keyword, "const"),
                Token::text(" "),
                tok(TokenKind::ClassName, "Foo"),
                Token::text(" "),
                tok(TokenKind::Operator, "="),
                Token::text(" "),
                tok(TokenKind::Function, "require"),
                tok(TokenKind::Operator, "("),
            ]
        );
    }

    #[test]
    fn test_strings_and_comments() {
        let scanner = clike_scanner().unwrap();
        assert_eq!(
            scanner.scan_line(r#"let s = 'it\'s'; // Done"#),
            vec![
                tok(TokenKind::Keyword, "let"),
                Token::text(" "),
                tok(TokenKind::Variable, "s"),
                Token::text(" "),
                tok(TokenKind::Operator, "="),
                Token::text(" "),
                tok(TokenKind::String, r"'it\'s'"),
                tok(TokenKind::Operator, ";"),
                Token::text(" "),
                tok(TokenKind::Comment, "// Done"),
            ]
        );
    }

    #[test]
    fn test_unterminated_string_runs_to_end() {
        let scanner = clike_scanner().unwrap();
        assert_eq!(
            scanner.scan_line("x = `abc"),
            vec![
                tok(TokenKind::Variable, "x"),
                Token::text(" "),
                tok(TokenKind::Operator, "="),
                Token::text(" "),
                tok(TokenKind::String, "`abc"),
            ]
        );
    }

    #[test]
    fn test_keyword_needs_boundary() {
        let scanner = clike_scanner().unwrap();
        assert_eq!(
            scanner.scan_line("constant"),
            vec![tok(TokenKind::Variable, "constant")]
        );
    }

    #[test]
    fn test_function_with_space_before_paren() {
        let scanner = clike_scanner().unwrap();
        assert_eq!(
            scanner.scan_line("run (1.5)"),
            vec![
                tok(TokenKind::Function, "run"),
                Token::text(" "),
                tok(TokenKind::Operator, "("),
                tok(TokenKind::Number, "1.5"),
                tok(TokenKind::Operator, ")"),
            ]
        );
    }

    #[test]
    fn test_capitalized_call_is_class_name() {
        // Class-name wins over call position by priority.
        let scanner = clike_scanner().unwrap();
        assert_eq!(
            scanner.scan_line("Date()"),
            vec![
                tok(TokenKind::ClassName, "Date"),
                tok(TokenKind::Operator, "("),
                tok(TokenKind::Operator, ")"),
            ]
        );
    }

    #[test]
    fn test_tag_aware_line() {
        let scanner = tag_aware_scanner().unwrap();
        assert_eq!(
            scanner.scan_line(r#"<Button onClick={go}>Hi</Button>"#),
            vec![
                tok(TokenKind::Tag, "<Button"),
                Token::text(" "),
                tok(TokenKind::AttrName, "onClick"),
                tok(TokenKind::Operator, "="),
                tok(TokenKind::Operator, "{"),
                tok(TokenKind::Variable, "go"),
                tok(TokenKind::Operator, "}"),
                tok(TokenKind::Operator, ">"),
                tok(TokenKind::ClassName, "Hi"),
                tok(TokenKind::Tag, "</Button"),
                tok(TokenKind::Operator, ">"),
            ]
        );
    }

    #[test]
    fn test_tag_aware_keywords() {
        let scanner = tag_aware_scanner().unwrap();
        let tokens = scanner.scan_line("export default App;");
        assert_eq!(tokens[0], tok(TokenKind::Keyword, "export"));
        assert_eq!(tokens[2], tok(TokenKind::Keyword, "default"));
        assert_eq!(tokens[4], tok(TokenKind::ClassName, "App"));

        // `type` is a TS keyword but not part of the JSX list.
        let tokens = scanner.scan_line("type");
        assert_eq!(tokens, vec![tok(TokenKind::Variable, "type")]);
    }
}
