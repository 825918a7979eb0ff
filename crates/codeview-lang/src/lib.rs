#![warn(missing_docs)]
//! `codeview-lang` - data-driven language configuration for `codeview`.
//!
//! This crate intentionally stays lightweight and does **not** depend on any scanning or
//! highlighting machinery. It maps language tags to the scanner family that handles them and
//! provides the small per-language tables (comment tokens, keyword lists, fold support) that the
//! scanners are built from.

use std::fmt;

/// A language from the fixed supported set.
///
/// Tags are matched case-sensitively by [`Language::from_tag`]. Anything outside this set is
/// "unknown" and is rendered as plain text by the dispatcher.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Language {
    /// `javascript`
    JavaScript,
    /// `typescript`
    TypeScript,
    /// `jsx`
    Jsx,
    /// `tsx`
    Tsx,
    /// `html`
    Html,
    /// `css`
    Css,
    /// `python`
    Python,
    /// `json`
    Json,
    /// `yaml`
    Yaml,
    /// `sql`
    Sql,
    /// `bash`
    Bash,
    /// `shell` (shares the `bash` tables)
    Shell,
    /// `markdown`
    Markdown,
    /// `java` (folding only)
    Java,
    /// `c` (folding only)
    C,
    /// `cpp` (folding only)
    Cpp,
    /// `csharp` (folding only)
    CSharp,
    /// `go` (folding only)
    Go,
    /// `rust` (folding only)
    Rust,
    /// `php` (folding only)
    Php,
}

impl Language {
    /// Every supported language, in declaration order.
    pub const ALL: [Language; 20] = [
        Language::JavaScript,
        Language::TypeScript,
        Language::Jsx,
        Language::Tsx,
        Language::Html,
        Language::Css,
        Language::Python,
        Language::Json,
        Language::Yaml,
        Language::Sql,
        Language::Bash,
        Language::Shell,
        Language::Markdown,
        Language::Java,
        Language::C,
        Language::Cpp,
        Language::CSharp,
        Language::Go,
        Language::Rust,
        Language::Php,
    ];

    /// Resolve a tag exactly (case-sensitive).
    pub fn from_tag(tag: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|lang| lang.tag() == tag)
    }

    /// Resolve a tag ignoring ASCII case.
    ///
    /// Used by the fold allow-list, which historically accepted `JavaScript`, `Rust`, etc.
    pub fn from_tag_ignore_case(tag: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|lang| lang.tag().eq_ignore_ascii_case(tag))
    }

    /// Guess a language from a file extension (without the leading dot).
    pub fn from_extension(ext: &str) -> Option<Self> {
        let lang = match ext.to_ascii_lowercase().as_str() {
            "js" | "mjs" | "cjs" => Self::JavaScript,
            "ts" | "mts" | "cts" => Self::TypeScript,
            "jsx" => Self::Jsx,
            "tsx" => Self::Tsx,
            "html" | "htm" => Self::Html,
            "css" => Self::Css,
            "py" | "pyi" => Self::Python,
            "json" => Self::Json,
            "yaml" | "yml" => Self::Yaml,
            "sql" => Self::Sql,
            "bash" => Self::Bash,
            "sh" | "zsh" => Self::Shell,
            "md" | "markdown" => Self::Markdown,
            "java" => Self::Java,
            "c" | "h" => Self::C,
            "cpp" | "cc" | "cxx" | "hpp" | "hh" => Self::Cpp,
            "cs" => Self::CSharp,
            "go" => Self::Go,
            "rs" => Self::Rust,
            "php" => Self::Php,
            _ => return None,
        };
        Some(lang)
    }

    /// The canonical tag for this language.
    pub fn tag(self) -> &'static str {
        match self {
            Self::JavaScript => "javascript",
            Self::TypeScript => "typescript",
            Self::Jsx => "jsx",
            Self::Tsx => "tsx",
            Self::Html => "html",
            Self::Css => "css",
            Self::Python => "python",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Sql => "sql",
            Self::Bash => "bash",
            Self::Shell => "shell",
            Self::Markdown => "markdown",
            Self::Java => "java",
            Self::C => "c",
            Self::Cpp => "cpp",
            Self::CSharp => "csharp",
            Self::Go => "go",
            Self::Rust => "rust",
            Self::Php => "php",
        }
    }

    /// Which scanner family highlights this language.
    ///
    /// `None` means the language is known (e.g. for folding) but has no scanner, so it is rendered
    /// as plain text.
    pub fn scanner_family(self) -> Option<ScannerFamily> {
        match self {
            Self::JavaScript | Self::TypeScript => Some(ScannerFamily::CLike),
            Self::Jsx | Self::Tsx => Some(ScannerFamily::TagAware),
            Self::Html
            | Self::Css
            | Self::Python
            | Self::Json
            | Self::Yaml
            | Self::Sql
            | Self::Bash
            | Self::Shell
            | Self::Markdown => Some(ScannerFamily::Generic),
            Self::Java
            | Self::C
            | Self::Cpp
            | Self::CSharp
            | Self::Go
            | Self::Rust
            | Self::Php => None,
        }
    }

    /// Whether the brace-based fold analyzer applies to this language.
    pub fn is_foldable(self) -> bool {
        matches!(
            self,
            Self::JavaScript
                | Self::TypeScript
                | Self::Jsx
                | Self::Tsx
                | Self::Java
                | Self::C
                | Self::Cpp
                | Self::CSharp
                | Self::Go
                | Self::Rust
                | Self::Php
        )
    }

    /// Comment tokens and keywords for this language.
    pub fn config(self) -> LanguageConfig {
        match self {
            Self::JavaScript | Self::TypeScript => LanguageConfig::new(
                CommentConfig::line_and_block("//", "/*", "*/"),
                KeywordList::case_sensitive(JS_KEYWORDS),
            ),
            Self::Jsx | Self::Tsx => LanguageConfig::new(
                CommentConfig::line_and_block("//", "/*", "*/"),
                KeywordList::case_sensitive(JSX_KEYWORDS),
            ),
            Self::Html => LanguageConfig::new(
                CommentConfig::block("<!--", "-->"),
                KeywordList::case_insensitive(HTML_KEYWORDS),
            ),
            Self::Css => LanguageConfig::new(
                CommentConfig::block("/*", "*/"),
                KeywordList::case_insensitive(CSS_KEYWORDS),
            ),
            Self::Python => LanguageConfig::new(
                CommentConfig::line("#"),
                KeywordList::case_sensitive(PYTHON_KEYWORDS),
            ),
            Self::Json => LanguageConfig::new(
                CommentConfig::line("//"),
                KeywordList::case_sensitive(JSON_KEYWORDS),
            ),
            Self::Yaml => LanguageConfig::new(
                CommentConfig::line("#"),
                KeywordList::case_sensitive(YAML_KEYWORDS),
            ),
            Self::Sql => LanguageConfig::new(
                CommentConfig::line("--"),
                KeywordList::case_insensitive(SQL_KEYWORDS),
            ),
            Self::Bash | Self::Shell => LanguageConfig::new(
                CommentConfig::line("#"),
                KeywordList::case_sensitive(BASH_KEYWORDS),
            ),
            Self::Markdown => LanguageConfig::new(
                CommentConfig::block("<!--", "-->"),
                KeywordList::default(),
            ),
            Self::Java
            | Self::C
            | Self::Cpp
            | Self::CSharp
            | Self::Go
            | Self::Rust
            | Self::Php => LanguageConfig::new(
                CommentConfig::line_and_block("//", "/*", "*/"),
                KeywordList::default(),
            ),
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// The three scanner families.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScannerFamily {
    /// Script-like languages with C-family syntax.
    CLike,
    /// Script with embedded markup tags (JSX/TSX).
    TagAware,
    /// Markup, styling, data, shell and query languages, each with its own rule table.
    Generic,
}

/// Comment tokens/config for a given language.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct CommentConfig {
    /// Line comment token (e.g. `//`, `#`).
    pub line: Option<String>,
    /// Block comment start token (e.g. `/*`).
    pub block_start: Option<String>,
    /// Block comment end token (e.g. `*/`).
    pub block_end: Option<String>,
}

impl CommentConfig {
    /// Create a config that supports only line comments.
    pub fn line(token: impl Into<String>) -> Self {
        Self {
            line: Some(token.into()),
            block_start: None,
            block_end: None,
        }
    }

    /// Create a config that supports only block comments.
    pub fn block(start: impl Into<String>, end: impl Into<String>) -> Self {
        Self {
            line: None,
            block_start: Some(start.into()),
            block_end: Some(end.into()),
        }
    }

    /// Create a config that supports both line and block comments.
    pub fn line_and_block(
        line: impl Into<String>,
        block_start: impl Into<String>,
        block_end: impl Into<String>,
    ) -> Self {
        Self {
            line: Some(line.into()),
            block_start: Some(block_start.into()),
            block_end: Some(block_end.into()),
        }
    }

    /// Returns `true` if a line comment token is configured.
    pub fn has_line(&self) -> bool {
        self.line.as_deref().is_some_and(|s| !s.is_empty())
    }

    /// Returns `true` if both block comment tokens are configured.
    pub fn has_block(&self) -> bool {
        self.block_start.as_deref().is_some_and(|s| !s.is_empty())
            && self.block_end.as_deref().is_some_and(|s| !s.is_empty())
    }
}

/// A fixed keyword list plus its case convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct KeywordList {
    /// The reserved words.
    pub words: &'static [&'static str],
    /// Whether matching ignores ASCII case (HTML, CSS, SQL).
    pub case_insensitive: bool,
}

impl KeywordList {
    /// A list matched exactly.
    pub const fn case_sensitive(words: &'static [&'static str]) -> Self {
        Self {
            words,
            case_insensitive: false,
        }
    }

    /// A list matched ignoring ASCII case.
    pub const fn case_insensitive(words: &'static [&'static str]) -> Self {
        Self {
            words,
            case_insensitive: true,
        }
    }

    /// Returns `true` if the list has no words.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }

    /// Returns `true` if `word` is in the list, honoring the case convention.
    pub fn contains(&self, word: &str) -> bool {
        if self.case_insensitive {
            self.words.iter().any(|w| w.eq_ignore_ascii_case(word))
        } else {
            self.words.contains(&word)
        }
    }
}

/// Per-language configuration used to build a scanner.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LanguageConfig {
    /// Comment tokens.
    pub comment: CommentConfig,
    /// Reserved words.
    pub keywords: KeywordList,
}

impl LanguageConfig {
    /// Create a config from its parts.
    pub fn new(comment: CommentConfig, keywords: KeywordList) -> Self {
        Self { comment, keywords }
    }
}

/// JavaScript/TypeScript reserved words (including TS type keywords).
pub const JS_KEYWORDS: &[&str] = &[
    "function",
    "const",
    "let",
    "var",
    "if",
    "else",
    "for",
    "while",
    "return",
    "class",
    "interface",
    "type",
    "enum",
    "import",
    "export",
    "from",
    "async",
    "await",
    "try",
    "catch",
    "throw",
    "new",
    "this",
    "super",
    "extends",
    "implements",
    "public",
    "private",
    "protected",
    "static",
    "readonly",
    "abstract",
    "namespace",
    "declare",
    "module",
    "as",
    "is",
    "in",
    "of",
    "typeof",
    "instanceof",
    "void",
    "never",
    "unknown",
    "any",
    "boolean",
    "string",
    "number",
    "object",
    "symbol",
    "bigint",
];

/// JSX/TSX reserved words: the markup-relevant subset.
pub const JSX_KEYWORDS: &[&str] = &[
    "function",
    "const",
    "let",
    "var",
    "if",
    "else",
    "for",
    "while",
    "return",
    "class",
    "interface",
    "import",
    "export",
    "from",
    "async",
    "await",
    "try",
    "catch",
    "throw",
    "new",
    "this",
    "super",
    "extends",
    "implements",
    "public",
    "private",
    "protected",
    "static",
    "readonly",
    "default",
];

/// HTML element names and the doctype marker.
pub const HTML_KEYWORDS: &[&str] = &[
    "<!DOCTYPE", "html", "head", "body", "title", "meta", "link", "script", "style", "div", "span",
    "p", "h1", "h2", "h3", "h4", "h5", "h6", "ul", "ol", "li", "a", "img", "button", "input",
    "form", "table", "tr", "td", "th",
];

/// Common CSS property names.
pub const CSS_KEYWORDS: &[&str] = &[
    "display", "position", "width", "height", "margin", "padding", "color", "background",
    "border", "font", "text", "flex", "grid", "float", "clear", "overflow", "z-index",
];

/// Python reserved words and singletons.
pub const PYTHON_KEYWORDS: &[&str] = &[
    "def", "class", "import", "from", "if", "else", "elif", "for", "while", "try", "except",
    "finally", "with", "as", "return", "yield", "lambda", "and", "or", "not", "in", "is", "None",
    "True", "False",
];

/// SQL reserved words (matched case-insensitively).
pub const SQL_KEYWORDS: &[&str] = &[
    "SELECT", "FROM", "WHERE", "INSERT", "UPDATE", "DELETE", "CREATE", "DROP", "ALTER", "TABLE",
    "INDEX", "JOIN", "INNER", "LEFT", "RIGHT", "OUTER", "ON", "GROUP", "ORDER", "BY", "HAVING",
    "LIMIT", "UNION", "DISTINCT",
];

/// Shell reserved words and common builtins/commands.
pub const BASH_KEYWORDS: &[&str] = &[
    "if", "then", "else", "fi", "for", "while", "do", "done", "case", "esac", "function", "echo",
    "cd", "ls", "mkdir", "rm", "cp", "mv", "grep", "awk", "sed", "chmod", "sudo", "export",
    "source",
];

/// JSON literals.
pub const JSON_KEYWORDS: &[&str] = &["true", "false", "null"];

/// YAML scalar literals.
pub const YAML_KEYWORDS: &[&str] = &["true", "false", "null", "yes", "no", "on", "off"];
