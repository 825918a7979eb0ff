use codeview_highlight::{
    LineScanner, Matcher, Rule, RuleScanner, Token, TokenKind, generic_scanner, highlight,
    highlight_line,
};
use codeview_lang::Language;
use pretty_assertions::assert_eq;
use proptest::prelude::*;

fn tok(kind: TokenKind, text: &str) -> Token {
    Token::new(kind, text)
}

fn all_tags() -> Vec<&'static str> {
    Language::ALL
        .iter()
        .map(|lang| lang.tag())
        .chain(["", "unknown", "JavaScript"])
        .collect()
}

#[test]
fn test_keyword_before_identifier_and_call() {
    assert_eq!(
        highlight_line("const Foo = require(", "javascript"),
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
fn test_typescript_shares_clike_scanner() {
    assert_eq!(
        highlight_line("interface A", "typescript"),
        vec![
            tok(TokenKind::Keyword, "interface"),
            Token::text(" "),
            tok(TokenKind::ClassName, "A"),
        ]
    );
}

#[test]
fn test_jsx_component_line() {
    let tokens = highlight_line(r#"return <div className="x">{n}</div>;"#, "jsx");
    let kinds: Vec<_> = tokens.iter().map(|t| (t.kind, t.text.as_str())).collect();
    assert_eq!(
        kinds,
        vec![
            (TokenKind::Keyword, "return"),
            (TokenKind::Text, " "),
            (TokenKind::Tag, "<div"),
            (TokenKind::Text, " "),
            (TokenKind::AttrName, "className"),
            (TokenKind::Operator, "="),
            (TokenKind::String, "\"x\""),
            (TokenKind::Operator, ">"),
            (TokenKind::Operator, "{"),
            (TokenKind::Variable, "n"),
            (TokenKind::Operator, "}"),
            (TokenKind::Tag, "</div"),
            (TokenKind::Operator, ">"),
            (TokenKind::Operator, ";"),
        ]
    );
}

#[test]
fn test_fold_only_languages_are_plain() {
    for tag in ["java", "c", "cpp", "csharp", "go", "rust", "php"] {
        assert_eq!(
            highlight_line("int x = 1; // c", tag),
            vec![Token::text("int x = 1; // c")],
            "{tag}"
        );
    }
}

#[test]
fn test_document_line_numbers_and_blank_lines() {
    let lines = highlight("# h\n\nx = 1\n", "python");
    assert_eq!(lines.len(), 4);
    assert_eq!(lines[0].tokens, vec![tok(TokenKind::Comment, "# h")]);
    assert!(lines[1].tokens.is_empty());
    assert_eq!(lines[2].number, 3);
    assert!(lines[3].tokens.is_empty());
}

#[test]
fn test_crlf_lines_rebuild_exactly() {
    let code = "let a;\r\nlet b;";
    let lines = highlight(code, "javascript");
    assert_eq!(lines.len(), 2);
    assert_eq!(
        lines[0].tokens,
        vec![
            tok(TokenKind::Keyword, "let"),
            Token::text(" "),
            tok(TokenKind::Variable, "a"),
            tok(TokenKind::Operator, ";"),
            Token::text("\r"),
        ]
    );
    let rebuilt: Vec<String> = lines
        .iter()
        .map(|line| line.tokens.iter().map(|t| t.text.as_str()).collect())
        .collect();
    assert_eq!(rebuilt.join("\n"), code);
}

#[test]
fn test_nasty_inputs_terminate() {
    for tag in all_tags() {
        for line in ["\\", "\"", "'\\", "/*", "<!--", "`", "{{{{", "$", "${", "#"] {
            let text: String = highlight_line(line, tag)
                .iter()
                .map(|t| t.text.as_str())
                .collect();
            assert_eq!(text, line, "{tag}: {line:?}");
        }
    }
}

#[test]
fn test_custom_rule_chain() {
    let mut scanner = generic_scanner("python").unwrap();
    scanner.push_rule(Rule::pattern(r"@[a-z]+", TokenKind::Function).unwrap());
    assert_eq!(
        scanner.scan_line("@cache"),
        vec![tok(TokenKind::Function, "@cache")]
    );

    let scanner = RuleScanner::new(vec![Rule::new(
        Matcher::OneOf("<>".into()),
        TokenKind::Operator,
    )]);
    assert_eq!(
        scanner.scan_line("a<b"),
        vec![
            Token::text("a"),
            tok(TokenKind::Operator, "<"),
            Token::text("b")
        ]
    );
}

#[test]
fn test_invalid_custom_pattern_is_an_error() {
    assert!(Rule::pattern("(", TokenKind::Text).is_err());
}

proptest! {
    #[test]
    fn prop_tokens_rebuild_line(line in "[ -~\t\u{e9}\u{4e2d}]{0,60}") {
        for tag in all_tags() {
            let tokens = highlight_line(&line, tag);
            let rebuilt: String = tokens.iter().map(|t| t.text.as_str()).collect();
            prop_assert_eq!(&rebuilt, &line);
            prop_assert!(tokens.iter().all(|t| !t.text.is_empty()));
            let no_adjacent_text = tokens.windows(2).all(|w| {
                !(w[0].kind == TokenKind::Text && w[1].kind == TokenKind::Text)
            });
            prop_assert!(no_adjacent_text);
        }
    }

    #[test]
    fn prop_scanning_is_deterministic(code in "[ -~\n]{0,120}") {
        for tag in all_tags() {
            prop_assert_eq!(highlight(&code, tag), highlight(&code, tag));
        }
    }
}
