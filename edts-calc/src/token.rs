//! # Calculator Tokens
//!
//! This module defines the token kinds recognized by the calculator lexer and
//! the concrete token type handed to the parser:
//!
//! - [`TokenID`]: the token kind, one per terminal of the arithmetic grammar,
//! - [`CalcToken`]: a kind paired with its lexeme and source [`Position`].
//!
//! Tokens are immutable once produced. A token stream always ends with
//! exactly one [`TokenID::End`].
use crate::position::Position;
use smartstring::alias::String;
use std::fmt;

/// The kind of a lexical token.
///
/// Each variant corresponds to one terminal of the arithmetic grammar; see
/// [`TokenID::terminal`] for the grammar name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum TokenID {
    Plus,
    Minus,
    Asterisk,
    Slash,
    LeftParen,
    RightParen,
    Number,
    Ident,
    /// End of input.
    End,
}

impl TokenID {
    /// Every token kind, in grammar terminal order.
    pub const ALL: [TokenID; 9] = [
        TokenID::Plus,
        TokenID::Minus,
        TokenID::Asterisk,
        TokenID::Slash,
        TokenID::LeftParen,
        TokenID::RightParen,
        TokenID::Number,
        TokenID::Ident,
        TokenID::End,
    ];

    /// Name of the grammar terminal this token kind stands for.
    pub fn terminal(self) -> &'static str {
        match self {
            TokenID::Plus => "+",
            TokenID::Minus => "-",
            TokenID::Asterisk => "*",
            TokenID::Slash => "/",
            TokenID::LeftParen => "(",
            TokenID::RightParen => ")",
            TokenID::Number => "num",
            TokenID::Ident => "id",
            TokenID::End => "$",
        }
    }

    /// Maps a single operator or parenthesis character to its token kind.
    pub fn from_char(ch: char) -> Option<TokenID> {
        match ch {
            '+' => Some(TokenID::Plus),
            '-' => Some(TokenID::Minus),
            '*' => Some(TokenID::Asterisk),
            '/' => Some(TokenID::Slash),
            '(' => Some(TokenID::LeftParen),
            ')' => Some(TokenID::RightParen),
            _ => None,
        }
    }
}

impl fmt::Display for TokenID {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.terminal())
    }
}

/// A concrete lexical token for the calculator frontend.
///
/// # Example
/// ```rust
/// # use edts_calc::{CalcToken, Position, TokenID};
/// let tok = CalcToken::new(TokenID::Number, "42", Position::new(1, 3));
/// assert_eq!(tok.token_id, TokenID::Number);
/// assert_eq!(tok.lexeme.as_str(), "42");
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct CalcToken {
    /// The token's kind.
    pub token_id: TokenID,
    /// The matched source text; empty for [`TokenID::End`].
    pub lexeme: String,
    /// Position of the token's first character.
    pub pos: Position,
}

impl CalcToken {
    pub fn new(token_id: TokenID, lexeme: &str, pos: Position) -> Self {
        Self {
            token_id,
            lexeme: String::from(lexeme),
            pos,
        }
    }

    /// The end-of-input token at `pos`.
    pub fn end(pos: Position) -> Self {
        Self::new(TokenID::End, "", pos)
    }
}
