use minic_core::Location;
use serde::Serialize;

/// Words the tokenizer classifies as keywords rather than identifiers.
pub const KEYWORDS: [&str; 8] = ["int", "float", "String", "double", "if", "else", "while", "return"];

#[derive(Debug, Clone, Serialize, Copy, PartialEq, Eq, Hash)]
pub enum TokenKind {
    Keyword,
    Identifier,
    Operator,
    Separator,
    Literal(LiteralKind),
}

#[derive(Debug, Clone, Serialize, Copy, PartialEq, Eq, Hash)]
pub enum LiteralKind {
    Integer,
    Float,
    String,
}

impl LiteralKind {
    pub fn of(lexeme: &str) -> Self {
        if lexeme.starts_with('"') {
            LiteralKind::String
        } else if lexeme.contains('.') {
            LiteralKind::Float
        } else {
            LiteralKind::Integer
        }
    }
}

#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
pub struct Token<'src> {
    pub kind: TokenKind,
    pub lexeme: &'src str,
    pub location: Location,
}

impl<'src> Token<'src> {
    pub fn new(kind: TokenKind, lexeme: &'src str, location: Location) -> Self {
        Self {
            kind,
            lexeme,
            location,
        }
    }
}

impl std::fmt::Display for Token<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.lexeme)
    }
}
