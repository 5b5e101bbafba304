use std::sync::LazyLock;

use minic_core::Location;
use regex::{CaptureMatches, Captures, Regex};

use crate::token::{KEYWORDS, LiteralKind, Token, TokenKind};

// Alternation order is the classification priority: keywords win over identifiers.
static TOKEN_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = format!(
        concat!(
            r"\b(?P<keyword>{})\b",
            r"|\b(?P<identifier>[a-zA-Z_][a-zA-Z0-9_]*)\b",
            r"|(?P<operator>[+\-*/=<>!&|])",
            r"|(?P<separator>[;(){{}}])",
            r#"|(?P<literal>\b[0-9]+\.[0-9]+\b|\b[0-9]+\b|"[^"]*")"#,
        ),
        KEYWORDS.join("|")
    );
    Regex::new(&pattern).expect("token pattern is a valid regex")
});

/// Lazily scans source text into tokens, left to right.
///
/// Text between matches that is not ASCII whitespace is remembered as an unrecognized run, see
/// [`Lexer::unrecognized`]. The runs are only complete once the iterator is exhausted.
pub struct Lexer<'lex> {
    matches: CaptureMatches<'static, 'lex>,
    content: &'lex str,
    consumed: usize,
    unrecognized: Vec<Location>,
    finished: bool,
}

impl<'lex> Lexer<'lex> {
    pub fn new(content: &'lex str) -> Self {
        Self {
            matches: TOKEN_PATTERN.captures_iter(content),
            content,
            consumed: 0,
            unrecognized: Vec::new(),
            finished: false,
        }
    }

    /// ASCII-whitespace-trimmed runs of text no token rule consumed, in source order.
    pub fn unrecognized(&self) -> &[Location] {
        &self.unrecognized
    }

    fn next_token(&mut self) -> Option<Token<'lex>> {
        let Some(captures) = self.matches.next() else {
            if !self.finished {
                self.finished = true;
                self.record_gap(self.content.len());
            }
            return None;
        };

        let whole = captures.get(0)?;
        self.record_gap(whole.start());
        self.consumed = whole.end();

        let kind = classify(&captures, whole.as_str());
        tracing::trace!(?kind, lexeme = whole.as_str(), "token");
        Some(Token::new(kind, whole.as_str(), whole.range().into()))
    }

    fn record_gap(&mut self, end_byte: usize) {
        let gap = &self.content[self.consumed..end_byte];
        let trimmed = gap.trim_ascii_start();
        let start_byte = self.consumed + (gap.len() - trimmed.len());
        let trimmed = trimmed.trim_ascii_end();

        if !trimmed.is_empty() {
            self.unrecognized
                .push(Location::new(start_byte, start_byte + trimmed.len()));
        }
    }
}

fn classify(captures: &Captures<'_>, lexeme: &str) -> TokenKind {
    if captures.name("keyword").is_some() {
        TokenKind::Keyword
    } else if captures.name("identifier").is_some() {
        TokenKind::Identifier
    } else if captures.name("operator").is_some() {
        TokenKind::Operator
    } else if captures.name("separator").is_some() {
        TokenKind::Separator
    } else {
        TokenKind::Literal(LiteralKind::of(lexeme))
    }
}

impl<'lex> Iterator for Lexer<'lex> {
    type Item = Token<'lex>;

    fn next(&mut self) -> Option<Self::Item> {
        self.next_token()
    }
}
