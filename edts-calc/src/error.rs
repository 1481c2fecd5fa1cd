//! # Calculator Error Type
//!
//! This module defines [`CalcError`], the unified error enum for the
//! lexer → parser → evaluator pipeline. Every variant is fatal: the run stops
//! and no partial result is produced. Each carries enough context (kind,
//! offending text, line, column) for a precise diagnostic.
//!
//! Malformed values typed at a resolver prompt are *not* errors; resolvers
//! retry locally and only surface [`CalcError::Input`] when no further input
//! can be obtained.
use crate::position::Position;
use crate::token::TokenID;
use smartstring::alias::String;
use thiserror::Error;

/// Represents all possible errors that can occur within the calculator.
#[derive(Debug, Error)]
pub enum CalcError {
    /// A character that starts no token.
    #[error("unexpected character {character:?} at {pos}")]
    Lex {
        /// The offending character.
        character: char,
        /// Where it was found.
        pos: Position,
    },

    /// The lookahead token does not fit the current grammar position.
    #[error("expected {} but found `{found}` {lexeme:?} at {pos}", one_of(.expected))]
    Syntax {
        /// Token kinds acceptable at this point.
        expected: Vec<TokenID>,
        /// Kind of the lookahead token.
        found: TokenID,
        /// Text of the lookahead token.
        lexeme: String,
        /// Position of the lookahead token.
        pos: Position,
    },

    /// The right operand of `/` evaluated to zero.
    #[error("division by zero at {pos}")]
    DivisionByZero {
        /// Position of the `/` operator.
        pos: Position,
    },

    /// A numeric literal too large to hold as a finite number.
    #[error("number {lexeme} out of range at {pos}")]
    NumberOutOfRange {
        lexeme: String,
        pos: Position,
    },

    /// Operators or parentheses nest deeper than the parser allows.
    #[error("expression nested deeper than {limit} levels at {pos}")]
    TooDeep {
        limit: usize,
        /// Position of the token where the limit was crossed.
        pos: Position,
    },

    /// A numeric literal could not be converted to a number.
    ///
    /// Typically originates from [`std::num::ParseFloatError`].
    #[error("unable to parse {0:?}")]
    ParseFloat(#[from] std::num::ParseFloatError),

    /// A value resolver could not obtain any more input.
    #[error("unable to read variable value: {0}")]
    Input(#[from] std::io::Error),
}

fn one_of(ids: &[TokenID]) -> std::string::String {
    let names: Vec<_> = ids.iter().map(|id| format!("`{id}`")).collect();
    match names.len() {
        1 => names[0].clone(),
        _ => format!("one of {}", names.join(", ")),
    }
}
