//! Token data model.

use serde::{Deserialize, Serialize};

/// Classification of a token.
///
/// The serialized (and [`TokenKind::as_str`]) names are the kebab-case class names a renderer
/// typically maps to theme colors, e.g. `class-name` or `attr-name`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TokenKind {
    /// Line or block comment.
    Comment,
    /// Quoted string or template literal.
    String,
    /// Reserved word.
    Keyword,
    /// Numeric literal.
    Number,
    /// Capitalized identifier (type/class heuristic).
    ClassName,
    /// Identifier in call position.
    Function,
    /// Any other identifier, or a shell variable reference.
    Variable,
    /// Single-character operator or punctuation.
    Operator,
    /// Markup tag opener (`<div`, `</div`).
    Tag,
    /// Markup attribute name.
    AttrName,
    /// CSS selector.
    Selector,
    /// CSS property, JSON/YAML key.
    Property,
    /// SQL bare identifier.
    Identifier,
    /// Markdown header marker.
    Header,
    /// Markdown link.
    Link,
    /// Markdown inline code.
    Code,
    /// Unclassified text.
    Text,
}

impl TokenKind {
    /// Every token kind.
    pub const ALL: [TokenKind; 17] = [
        TokenKind::Comment,
        TokenKind::String,
        TokenKind::Keyword,
        TokenKind::Number,
        TokenKind::ClassName,
        TokenKind::Function,
        TokenKind::Variable,
        TokenKind::Operator,
        TokenKind::Tag,
        TokenKind::AttrName,
        TokenKind::Selector,
        TokenKind::Property,
        TokenKind::Identifier,
        TokenKind::Header,
        TokenKind::Link,
        TokenKind::Code,
        TokenKind::Text,
    ];

    /// The kebab-case name of this kind.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Comment => "comment",
            Self::String => "string",
            Self::Keyword => "keyword",
            Self::Number => "number",
            Self::ClassName => "class-name",
            Self::Function => "function",
            Self::Variable => "variable",
            Self::Operator => "operator",
            Self::Tag => "tag",
            Self::AttrName => "attr-name",
            Self::Selector => "selector",
            Self::Property => "property",
            Self::Identifier => "identifier",
            Self::Header => "header",
            Self::Link => "link",
            Self::Code => "code",
            Self::Text => "text",
        }
    }
}

/// A classified, non-empty slice of a single line.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Token {
    /// Classification.
    pub kind: TokenKind,
    /// The exact source text.
    pub text: String,
}

impl Token {
    /// Create a token.
    pub fn new(kind: TokenKind, text: impl Into<String>) -> Self {
        Self {
            kind,
            text: text.into(),
        }
    }

    /// Shorthand for a [`TokenKind::Text`] token.
    pub fn text(text: impl Into<String>) -> Self {
        Self::new(TokenKind::Text, text)
    }
}

/// Append a token, merging runs of [`TokenKind::Text`] into a single token.
///
/// Empty slices are dropped.
pub fn push_token(tokens: &mut Vec<Token>, kind: TokenKind, text: &str) {
    if text.is_empty() {
        return;
    }
    if kind == TokenKind::Text
        && let Some(last) = tokens.last_mut()
        && last.kind == TokenKind::Text
    {
        last.text.push_str(text);
        return;
    }
    tokens.push(Token::new(kind, text));
}

/// The token sequence of one document line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HighlightedLine {
    /// 1-based line number.
    pub number: usize,
    /// Tokens in left-to-right order. Empty for an empty line.
    pub tokens: Vec<Token>,
}

impl HighlightedLine {
    /// Create a highlighted line.
    pub fn new(number: usize, tokens: Vec<Token>) -> Self {
        Self { number, tokens }
    }

    /// Rebuild the source line by concatenating every token.
    pub fn text(&self) -> String {
        self.tokens.iter().map(|t| t.text.as_str()).collect()
    }
}
