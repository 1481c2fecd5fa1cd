//! # edts-calc
//!
//! An arithmetic calculator driven by an attribute-directed translation
//! scheme (EDTS) over an LL(1) grammar. One recursive descent both builds a
//! decorated syntax tree and evaluates the expression, threading inherited
//! and synthesized attributes through the right-recursive grammar.
//!
//! ## Overview
//!
//! - [`lexer`]: turns source text into [`CalcToken`]s ending with
//!   [`TokenID::End`].
//! - [`parser`]: the [`CalcParser`] producing a [`Parsed`] result: the
//!   [`Ast`], the value, and the [`SymTab`].
//! - [`symtab`]: free variables, their values and every occurrence.
//! - [`resolver`]: the [`ValueResolver`] capability consulted for variables
//!   without a value, plus interactive and scripted implementations.
//! - [`ast`], [`token`], [`position`], [`error`]: shared types.
//!
//! The grammar itself and its FIRST/FOLLOW/PREDICT sets live in `edts-gen`.
//!
//! ## Example
//!
//! ```rust
//! use edts_calc::{ScriptedResolver, evaluate};
//!
//! let mut resolver = ScriptedResolver::new(["5"]);
//! let parsed = evaluate("x + x * 2", &mut resolver).unwrap();
//! assert_eq!(parsed.value, 15.0);
//! assert_eq!(resolver.asked().len(), 1);
//! assert_eq!(parsed.symtab.get("x").unwrap().occurrences.len(), 2);
//! ```
pub mod ast;
pub mod error;
pub mod lexer;
pub mod parser;
pub mod position;
pub mod resolver;
pub mod symtab;
pub mod token;

#[cfg(test)]
mod prop_tests;

pub use ast::{Ast, Tag};
pub use error::CalcError;
pub use lexer::{CalcLexer, tokenize};
pub use parser::{CalcParser, MAX_DEPTH, Parsed, evaluate};
pub use position::Position;
pub use resolver::{FnResolver, PromptResolver, ScriptedResolver, ValueResolver, parse_value};
pub use symtab::{SymTab, Symbol, SymbolKind};
pub use token::{CalcToken, TokenID};
