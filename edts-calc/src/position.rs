//! Source positions and the cursor that tracks them while lexing.

use std::fmt;

/// A 1-based line/column position in source text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Position {
    /// 1-based line number.
    pub line: usize,
    /// 1-based column number (character position in the line).
    pub column: usize,
}

impl Position {
    /// Creates a new `Position`.
    #[inline]
    pub const fn new(line: usize, column: usize) -> Self {
        Self { line, column }
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(1, 1)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}", self.line, self.column)
    }
}

/// Tracks the current byte offset and line/column while consuming input.
#[derive(Debug, Clone, Default)]
pub struct LexerCursor {
    /// Byte offset of the next unread character.
    pub pos: usize,
    /// Position of the next unread character.
    pub at: Position,
}

impl LexerCursor {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance past a single character.
    pub fn advance(&mut self, ch: char) {
        if ch == '\n' {
            self.at.line += 1;
            self.at.column = 1;
        } else {
            self.at.column += 1;
        }
        self.pos += ch.len_utf8();
    }

    /// Advance past every character of `s`.
    pub fn advance_str(&mut self, s: &str) {
        for ch in s.chars() {
            self.advance(ch);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cursor_starts_at_one_one() {
        let c = LexerCursor::new();
        assert_eq!(c.pos, 0);
        assert_eq!(c.at, Position::new(1, 1));
    }

    #[test]
    fn newline_resets_column() {
        let mut c = LexerCursor::new();
        c.advance_str("ab\ncd");
        assert_eq!(c.at, Position::new(2, 3));
        assert_eq!(c.pos, 5);
    }

    #[test]
    fn columns_count_characters_not_bytes() {
        let mut c = LexerCursor::new();
        c.advance_str("éx");
        assert_eq!(c.at, Position::new(1, 3));
        assert_eq!(c.pos, 3);
    }

    #[test]
    fn positions_order_by_line_then_column() {
        assert!(Position::new(1, 9) < Position::new(2, 1));
        assert_eq!(Position::new(3, 4).to_string(), "3:4");
    }
}
