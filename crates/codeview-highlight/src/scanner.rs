//! The priority-ordered rule-chain scanner.

use codeview_core::{LineScanner, Token, TokenKind, push_token};

use crate::rule::Rule;

/// A maximal-munch scanner driven by an ordered rule list.
///
/// At every offset the rules are tried in order and the first one that matches consumes its
/// token. If none matches, exactly one character is emitted as [`TokenKind::Text`]. The scanner
/// always terminates at end of line and never fails.
#[derive(Debug, Clone, Default)]
pub struct RuleScanner {
    rules: Vec<Rule>,
}

impl RuleScanner {
    /// Create a scanner from rules in priority order.
    pub fn new(rules: Vec<Rule>) -> Self {
        Self { rules }
    }

    /// The rules in priority order.
    pub fn rules(&self) -> &[Rule] {
        &self.rules
    }

    /// Append a lowest-priority rule.
    pub fn push_rule(&mut self, rule: Rule) {
        self.rules.push(rule);
    }

    fn classify(&self, line: &str, pos: usize) -> (TokenKind, usize) {
        self.rules
            .iter()
            .find_map(|rule| rule.match_at(line, pos).map(|len| (rule.kind(), len)))
            .unwrap_or_else(|| {
                let len = line[pos..].chars().next().map_or(1, char::len_utf8);
                (TokenKind::Text, len)
            })
    }
}

impl LineScanner for RuleScanner {
    fn scan_line(&self, line: &str) -> Vec<Token> {
        let mut tokens = Vec::new();
        let mut pos = 0;
        while pos < line.len() {
            let (kind, len) = self.classify(line, pos);
            push_token(&mut tokens, kind, &line[pos..pos + len]);
            pos += len;
        }
        tokens
    }
}
