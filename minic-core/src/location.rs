use std::ops::Range;

use serde::Serialize;

#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Location {
    pub start_byte: usize,
    pub end_byte: usize,
}

/// Zero-based line and column (in chars) of a byte offset.
#[derive(Debug, Default, Serialize, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    pub line: usize,
    pub column: usize,
}

impl Location {
    pub fn new(start: usize, end: usize) -> Self {
        Self {
            start_byte: start,
            end_byte: end,
        }
    }

    pub fn to_range(&self) -> Range<usize> {
        self.start_byte..self.end_byte
    }

    pub fn is_empty(&self) -> bool {
        self.start_byte >= self.end_byte
    }

    /// Moves the location forward by `offset` bytes, used to lift a location relative to a line
    /// into one relative to the whole source.
    pub fn shift(&self, offset: usize) -> Location {
        Location::new(self.start_byte + offset, self.end_byte + offset)
    }

    pub fn text<'src>(&self, content: &'src str) -> &'src str {
        content.get(self.to_range()).unwrap_or_default()
    }

    pub fn position(&self, content: &str) -> Position {
        let mut position = Position::default();

        for (byte, ch) in content.char_indices() {
            if byte >= self.start_byte {
                break;
            }

            if ch == '\n' {
                position.line += 1;
                position.column = 0;
            } else {
                position.column += 1;
            }
        }

        position
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.line + 1, self.column + 1)
    }
}

impl From<Range<usize>> for Location {
    fn from(range: Range<usize>) -> Self {
        Location::new(range.start, range.end)
    }
}
