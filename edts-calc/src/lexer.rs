//! # Calculator Lexer
//!
//! Converts raw text into a finite stream of [`CalcToken`]s terminated by a
//! single [`TokenID::End`]. At each position, after skipping spaces and tabs,
//! the lexer tries in order:
//!
//! 1. one of the six operator/parenthesis characters `+ - * / ( )`,
//! 2. a number: digits, optionally followed by `.` and more digits,
//! 3. an identifier: a letter or underscore, then letters, digits or underscores.
//!
//! Anything else, newlines included, is a fatal [`CalcError::Lex`].

use crate::error::CalcError;
use crate::position::LexerCursor;
use crate::token::{CalcToken, TokenID};
use once_cell::sync::Lazy;
use regex::Regex;

static WHITESPACE_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[ \t]+").unwrap());

static NUMBER_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[0-9]+(?:\.[0-9]+)?").unwrap());

static IDENT_RE: Lazy<Regex> = Lazy::new(|| Regex::new(r"^[A-Za-z_][A-Za-z0-9_]*").unwrap());

/// The calculator lexer.
///
/// # Example
///
/// ```rust
/// # use edts_calc::{CalcLexer, TokenID};
/// let toks = CalcLexer::new("x + 12.5").try_collect().unwrap();
/// let ids: Vec<_> = toks.iter().map(|t| t.token_id).collect();
/// assert_eq!(ids, vec![TokenID::Ident, TokenID::Plus, TokenID::Number, TokenID::End]);
/// ```
pub struct CalcLexer<'a> {
    src: &'a str,
    cursor: LexerCursor,
    done: bool,
}

impl<'a> CalcLexer<'a> {
    pub fn new(src: &'a str) -> Self {
        Self {
            src,
            cursor: LexerCursor::new(),
            done: false,
        }
    }

    /// Returns the next token, or `None` once the `End` token has been produced.
    ///
    /// # Errors
    /// [`CalcError::Lex`] on a character that starts no token.
    pub fn try_next(&mut self) -> Result<Option<CalcToken>, CalcError> {
        if self.done {
            return Ok(None);
        }

        if let Some(m) = WHITESPACE_RE.find(self.rest()) {
            self.cursor.advance_str(m.as_str());
        }

        let pos = self.cursor.at;
        let rest = self.rest();
        let Some(ch) = rest.chars().next() else {
            self.done = true;
            log::trace!("End at {}", pos);
            return Ok(Some(CalcToken::end(pos)));
        };

        let (token_id, len) = if let Some(token_id) = TokenID::from_char(ch) {
            (token_id, ch.len_utf8())
        } else if let Some(m) = NUMBER_RE.find(rest) {
            (TokenID::Number, m.end())
        } else if let Some(m) = IDENT_RE.find(rest) {
            (TokenID::Ident, m.end())
        } else {
            return Err(CalcError::Lex { character: ch, pos });
        };

        let lexeme = &rest[..len];
        let token = CalcToken::new(token_id, lexeme, pos);
        self.cursor.advance_str(lexeme);
        log::trace!("{:?} {:?} at {}", token_id, lexeme, pos);
        Ok(Some(token))
    }

    /// Drains the lexer into a vector ending with the `End` token.
    pub fn try_collect(mut self) -> Result<Vec<CalcToken>, CalcError> {
        let mut toks = Vec::new();
        while let Some(tok) = self.try_next()? {
            toks.push(tok);
        }
        Ok(toks)
    }

    fn rest(&self) -> &'a str {
        &self.src[self.cursor.pos..]
    }
}

/// Tokenizes `text` in one go.
///
/// # Errors
/// [`CalcError::Lex`] at the first unrecognized character.
pub fn tokenize(text: &str) -> Result<Vec<CalcToken>, CalcError> {
    CalcLexer::new(text).try_collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::position::Position;

    fn ids(text: &str) -> Vec<TokenID> {
        tokenize(text).unwrap().iter().map(|t| t.token_id).collect()
    }

    #[test]
    fn empty_input_yields_only_end() {
        let toks = tokenize("").unwrap();
        assert_eq!(toks.len(), 1);
        assert_eq!(toks[0], CalcToken::end(Position::new(1, 1)));
    }

    #[test]
    fn trailing_whitespace_before_end() {
        let toks = tokenize("7 \t ").unwrap();
        assert_eq!(toks.len(), 2);
        assert_eq!(toks[1].token_id, TokenID::End);
        assert_eq!(toks[1].pos, Position::new(1, 5));
    }

    #[test]
    fn operators_and_parens() {
        use TokenID::*;
        assert_eq!(
            ids("(a+b)-c*d/e"),
            vec![
                LeftParen, Ident, Plus, Ident, RightParen, Minus, Ident, Asterisk, Ident, Slash,
                Ident, End
            ]
        );
    }

    #[test]
    fn numbers_with_optional_fraction() {
        let toks = tokenize("12 3.25 007").unwrap();
        let lexemes: Vec<_> = toks.iter().map(|t| t.lexeme.as_str()).collect();
        assert_eq!(lexemes, vec!["12", "3.25", "007", ""]);
        assert!(toks[..3].iter().all(|t| t.token_id == TokenID::Number));
    }

    #[test]
    fn identifiers_allow_underscores_and_digits() {
        let toks = tokenize("_x1 rate_2").unwrap();
        assert_eq!(toks[0].lexeme.as_str(), "_x1");
        assert_eq!(toks[1].lexeme.as_str(), "rate_2");
        assert_eq!(toks[1].pos, Position::new(1, 5));
    }

    #[test]
    fn number_then_identifier_without_space() {
        use TokenID::*;
        assert_eq!(ids("2x"), vec![Number, Ident, End]);
    }

    #[test]
    fn positions_are_one_based_columns() {
        let toks = tokenize("  2 *  y").unwrap();
        let pos: Vec<_> = toks.iter().map(|t| t.pos).collect();
        assert_eq!(
            pos,
            vec![
                Position::new(1, 3),
                Position::new(1, 5),
                Position::new(1, 8),
                Position::new(1, 9),
            ]
        );
    }

    #[test]
    fn unknown_character_is_fatal() {
        let err = tokenize("2@3").unwrap_err();
        let CalcError::Lex { character, pos } = err else {
            panic!("expected lex error, got {err:?}");
        };
        assert_eq!(character, '@');
        assert_eq!(pos, Position::new(1, 2));
    }

    #[test]
    fn dangling_decimal_point_is_fatal() {
        let err = tokenize("1.").unwrap_err();
        assert!(matches!(err, CalcError::Lex { character: '.', pos } if pos == Position::new(1, 2)));
    }

    #[test]
    fn newline_is_not_whitespace() {
        let err = tokenize("1 +\n2").unwrap_err();
        assert!(matches!(err, CalcError::Lex { character: '\n', pos } if pos == Position::new(1, 4)));
    }

    #[test]
    fn lexer_stops_after_end() {
        let mut lexer = CalcLexer::new("1");
        assert!(lexer.try_next().unwrap().is_some());
        assert_eq!(lexer.try_next().unwrap().map(|t| t.token_id), Some(TokenID::End));
        assert!(lexer.try_next().unwrap().is_none());
        assert!(lexer.try_next().unwrap().is_none());
    }
}
