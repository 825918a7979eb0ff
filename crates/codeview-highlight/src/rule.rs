//! Matchers and rules: the building blocks of a scanner.
//!
//! A [`Rule`] pairs a [`Matcher`] with the [`TokenKind`] it produces. Scanners evaluate their
//! rules in order at each offset and take the first one that matches.

use codeview_core::TokenKind;
use codeview_lang::KeywordList;
use regex::Regex;

/// Where a rule is allowed to fire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Anchor {
    /// At any offset.
    #[default]
    Anywhere,
    /// Only when the previous character is not a word character.
    WordStart,
    /// Only when everything before the offset is whitespace.
    LineStart,
}

/// A regex matcher, anchored at the scan offset.
#[derive(Debug, Clone)]
pub struct RegexMatcher {
    regex: Regex,
    capture_group: Option<usize>,
    except: Option<KeywordList>,
}

impl RegexMatcher {
    /// Compile `pattern`; it is implicitly anchored at the scan offset.
    pub fn new(pattern: &str) -> Result<Self, regex::Error> {
        Ok(Self {
            regex: Regex::new(&format!("^(?:{pattern})"))?,
            capture_group: None,
            except: None,
        })
    }

    fn match_len(&self, rest: &str) -> Option<usize> {
        let len = match self.capture_group {
            Some(group) => {
                let caps = self.regex.captures(rest)?;
                let m = caps.get(group)?;
                if m.start() != 0 {
                    return None;
                }
                m.end()
            }
            None => self.regex.find(rest)?.end(),
        };
        if let Some(except) = &self.except
            && except.contains(&rest[..len])
        {
            return None;
        }
        Some(len)
    }
}

/// How a rule recognizes its token at the current offset.
#[derive(Debug, Clone)]
pub enum Matcher {
    /// A token that runs to end of line (e.g. `//`, `#`, `--`).
    LineComment(String),
    /// A delimited comment. If it does not close on this line it runs to end of line.
    BlockComment {
        /// Opening delimiter.
        open: String,
        /// Closing delimiter.
        close: String,
    },
    /// A quoted string. A backslash escapes the next character; an unterminated string runs to
    /// end of line.
    Quoted(Vec<char>),
    /// A reserved word with word boundaries on both sides.
    Keywords(KeywordList),
    /// Digits with an optional single fractional part, not glued to a preceding word.
    Number,
    /// Exactly one character out of a set.
    OneOf(String),
    /// A regular expression.
    Regex(RegexMatcher),
}

impl Matcher {
    /// Length in bytes of the token that starts at `pos`, if this matcher applies there.
    pub fn match_len(&self, line: &str, pos: usize) -> Option<usize> {
        let rest = &line[pos..];
        match self {
            Self::LineComment(token) => {
                (!token.is_empty() && rest.starts_with(token.as_str())).then_some(rest.len())
            }
            Self::BlockComment { open, close } => {
                if open.is_empty() || !rest.starts_with(open.as_str()) {
                    return None;
                }
                let body = &rest[open.len()..];
                Some(match body.find(close.as_str()) {
                    Some(idx) if !close.is_empty() => open.len() + idx + close.len(),
                    _ => rest.len(),
                })
            }
            Self::Quoted(delimiters) => quoted_len(rest, delimiters),
            Self::Keywords(list) => keyword_len(line, pos, list),
            Self::Number => {
                if prev_char(line, pos).is_some_and(is_word_char) {
                    return None;
                }
                number_len(rest)
            }
            Self::OneOf(set) => {
                let c = rest.chars().next()?;
                set.contains(c).then_some(c.len_utf8())
            }
            Self::Regex(matcher) => matcher.match_len(rest),
        }
    }
}

/// A matcher paired with the kind of token it produces.
#[derive(Debug, Clone)]
pub struct Rule {
    matcher: Matcher,
    kind: TokenKind,
    anchor: Anchor,
}

impl Rule {
    /// Create a rule from a matcher.
    pub fn new(matcher: Matcher, kind: TokenKind) -> Self {
        Self {
            matcher,
            kind,
            anchor: Anchor::Anywhere,
        }
    }

    /// Create a regex rule.
    pub fn pattern(pattern: &str, kind: TokenKind) -> Result<Self, regex::Error> {
        Ok(Self::new(Matcher::Regex(RegexMatcher::new(pattern)?), kind))
    }

    /// Highlight only a capture group of each match.
    ///
    /// The group must start at the scan offset. Example (attribute name):
    /// - pattern: `([A-Za-z-]+)\s*=`
    /// - capture_group: `1` (the name, without `=`)
    ///
    /// Has no effect on non-regex rules.
    pub fn with_capture_group(mut self, group: usize) -> Self {
        if let Matcher::Regex(m) = &mut self.matcher {
            m.capture_group = Some(group);
        }
        self
    }

    /// Reject matches whose text is one of `words`.
    ///
    /// Has no effect on non-regex rules.
    pub fn except_words(mut self, words: KeywordList) -> Self {
        if let Matcher::Regex(m) = &mut self.matcher {
            m.except = Some(words);
        }
        self
    }

    /// Restrict where the rule may fire.
    pub fn anchored(mut self, anchor: Anchor) -> Self {
        self.anchor = anchor;
        self
    }

    /// The token kind this rule produces.
    pub fn kind(&self) -> TokenKind {
        self.kind
    }

    /// The matcher.
    pub fn matcher(&self) -> &Matcher {
        &self.matcher
    }

    /// Length in bytes of this rule's token at `pos`, or `None` if it does not apply.
    ///
    /// Never returns `Some(0)`.
    pub fn match_at(&self, line: &str, pos: usize) -> Option<usize> {
        let anchored = match self.anchor {
            Anchor::Anywhere => true,
            Anchor::WordStart => !prev_char(line, pos).is_some_and(is_word_char),
            Anchor::LineStart => line[..pos].chars().all(char::is_whitespace),
        };
        if !anchored {
            return None;
        }
        self.matcher.match_len(line, pos).filter(|&len| len > 0)
    }
}

/// The `[A-Za-z0-9_]` class that identifier patterns are built from.
fn is_word_char(c: char) -> bool {
    c.is_ascii_alphanumeric() || c == '_'
}

fn prev_char(line: &str, pos: usize) -> Option<char> {
    line[..pos].chars().next_back()
}

fn quoted_len(rest: &str, delimiters: &[char]) -> Option<usize> {
    let mut chars = rest.char_indices();
    let (_, quote) = chars.next()?;
    if !delimiters.contains(&quote) {
        return None;
    }
    while let Some((idx, c)) = chars.next() {
        if c == '\\' {
            chars.next();
        } else if c == quote {
            return Some(idx + c.len_utf8());
        }
    }
    Some(rest.len())
}

fn keyword_len(line: &str, pos: usize, list: &KeywordList) -> Option<usize> {
    let rest = &line[pos..];
    let prev_is_word = prev_char(line, pos).is_some_and(is_word_char);

    list.words
        .iter()
        .filter_map(|word| {
            let candidate = rest.get(..word.len())?;
            let same = if list.case_insensitive {
                candidate.eq_ignore_ascii_case(word)
            } else {
                candidate == *word
            };
            if !same {
                return None;
            }
            let first = word.chars().next()?;
            let last = word.chars().next_back()?;
            if is_word_char(first) && prev_is_word {
                return None;
            }
            let next = rest[word.len()..].chars().next();
            if is_word_char(last) && next.is_some_and(is_word_char) {
                return None;
            }
            Some(word.len())
        })
        .max()
}

fn number_len(rest: &str) -> Option<usize> {
    let bytes = rest.as_bytes();
    let int = bytes.iter().take_while(|b| b.is_ascii_digit()).count();
    if int == 0 {
        return None;
    }
    if bytes.get(int) == Some(&b'.') {
        let frac = bytes[int + 1..]
            .iter()
            .take_while(|b| b.is_ascii_digit())
            .count();
        if frac > 0 {
            return Some(int + 1 + frac);
        }
    }
    Some(int)
}
