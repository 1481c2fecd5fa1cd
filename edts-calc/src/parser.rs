//! # Calculator Parser
//!
//! A recursive-descent LL(1) parser that builds the [`Ast`] and evaluates the
//! expression in the same descent. It implements
//!
//! ```text
//! E  → T E'
//! E' → + T E' | - T E' | ε
//! T  → F T'
//! T' → * F T' | / F T' | ε
//! F  → ( E ) | num | id
//! ```
//!
//! `E'` and `T'` are right-recursive helpers that replace the left-recursive
//! `E → E + T`. To keep `+ - * /` left-associative, each tail function takes
//! the (node, value) accumulated so far as an *inherited* argument, folds the
//! next operand into it, and hands the result to the recursive call. Whatever
//! the innermost `ε` case returns is the *synthesized* result of the whole
//! chain.
//!
//! Each nonterminal is one method; attributes travel only through arguments
//! and return values. The mutable state of a parse is the read position, the
//! [`SymTab`] and the [`ValueResolver`], all owned by one [`CalcParser`].
//!
//! Any lexical, syntactic or arithmetic error is fatal; no partial tree is
//! returned.

use crate::ast::{Ast, Tag};
use crate::error::CalcError;
use crate::lexer::tokenize;
use crate::resolver::ValueResolver;
use crate::symtab::SymTab;
use crate::token::{CalcToken, TokenID};

/// The pair of synthesized attributes every nonterminal returns.
type Synth = (Ast, f64);

/// Bound on nested `E`, `T`, `E'` and `T'` activations.
///
/// Every operator of a chain and every parenthesis adds a level, and the
/// resulting tree is as deep as the nesting.
pub const MAX_DEPTH: usize = 500;

/// Result of a successful parse.
#[derive(Debug, Clone)]
pub struct Parsed {
    /// Root of the decorated tree.
    pub ast: Ast,
    /// Value of the whole expression.
    pub value: f64,
    /// Every variable referenced, with its value and occurrences.
    pub symtab: SymTab,
}

/// The calculator parser over a complete token stream.
///
/// # Example
/// ```rust
/// # use edts_calc::{CalcParser, ScriptedResolver, tokenize};
/// let tokens = tokenize("(a + 1) * 3").unwrap();
/// let parsed = CalcParser::new(tokens, ScriptedResolver::new(["4"])).parse().unwrap();
/// assert_eq!(parsed.value, 15.0);
/// assert_eq!(parsed.ast.to_string(), "mul(add(id(a), num(1)), num(3))");
/// ```
pub struct CalcParser<R> {
    tokens: Vec<CalcToken>,
    k: usize,
    depth: usize,
    symtab: SymTab,
    resolver: R,
}

impl<R> CalcParser<R>
where
    R: ValueResolver,
{
    /// Creates a parser over `tokens`.
    ///
    /// A missing trailing `End` token is supplied.
    pub fn new(mut tokens: Vec<CalcToken>, resolver: R) -> Self {
        if tokens.last().map(|t| t.token_id) != Some(TokenID::End) {
            let pos = tokens.last().map(|t| t.pos).unwrap_or_default();
            tokens.push(CalcToken::end(pos));
        }
        Self {
            tokens,
            k: 0,
            depth: 0,
            symtab: SymTab::new(),
            resolver,
        }
    }

    /// Parses and evaluates the whole stream.
    ///
    /// # Errors
    /// [`CalcError::Syntax`] on an unexpected token, including trailing input
    /// after a complete expression; [`CalcError::DivisionByZero`] when a
    /// divisor evaluates to zero; [`CalcError::TooDeep`] past [`MAX_DEPTH`]
    /// levels of nesting; [`CalcError::Input`] when the resolver gives up.
    pub fn parse(mut self) -> Result<Parsed, CalcError> {
        let (ast, value) = self.expr()?;
        self.eat(TokenID::End)?;
        log::debug!("parsed {} = {}", ast, value);
        Ok(Parsed {
            ast,
            value,
            symtab: self.symtab,
        })
    }

    fn lookahead(&self) -> &CalcToken {
        &self.tokens[self.k.min(self.tokens.len() - 1)]
    }

    fn eat(&mut self, expected: TokenID) -> Result<CalcToken, CalcError> {
        let tok = self.lookahead().clone();
        if tok.token_id != expected {
            return Err(unexpected(&[expected], tok));
        }
        log::trace!("eat {:?} at {}", expected, tok.pos);
        self.k += 1;
        Ok(tok)
    }

    fn enter(&mut self) -> Result<(), CalcError> {
        self.depth += 1;
        if self.depth > MAX_DEPTH {
            return Err(CalcError::TooDeep {
                limit: MAX_DEPTH,
                pos: self.lookahead().pos,
            });
        }
        Ok(())
    }

    fn leave(&mut self, synth: Synth) -> Synth {
        self.depth -= 1;
        synth
    }

    // E → T E'
    fn expr(&mut self) -> Result<Synth, CalcError> {
        self.enter()?;
        let (node, value) = self.term()?;
        let synth = self.expr_tail(node, value)?;
        Ok(self.leave(synth))
    }

    // E' → + T E' | - T E' | ε
    fn expr_tail(&mut self, inh_node: Ast, inh_value: f64) -> Result<Synth, CalcError> {
        self.enter()?;
        let (tag, op) = match self.lookahead().token_id {
            TokenID::Plus => (Tag::Add, TokenID::Plus),
            TokenID::Minus => (Tag::Sub, TokenID::Minus),
            _ => {
                log::trace!("E' -> ε with {}", inh_value);
                return Ok(self.leave((inh_node, inh_value)));
            }
        };
        self.eat(op)?;
        let (node, value) = self.term()?;
        let value = match tag {
            Tag::Add => inh_value + value,
            _ => inh_value - value,
        };
        let synth = self.expr_tail(Ast::binary(tag, inh_node, node, value), value)?;
        Ok(self.leave(synth))
    }

    // T → F T'
    fn term(&mut self) -> Result<Synth, CalcError> {
        self.enter()?;
        let (node, value) = self.factor()?;
        let synth = self.term_tail(node, value)?;
        Ok(self.leave(synth))
    }

    // T' → * F T' | / F T' | ε
    fn term_tail(&mut self, inh_node: Ast, inh_value: f64) -> Result<Synth, CalcError> {
        self.enter()?;
        let (tag, op) = match self.lookahead().token_id {
            TokenID::Asterisk => (Tag::Mul, TokenID::Asterisk),
            TokenID::Slash => (Tag::Div, TokenID::Slash),
            _ => {
                log::trace!("T' -> ε with {}", inh_value);
                return Ok(self.leave((inh_node, inh_value)));
            }
        };
        let op_tok = self.eat(op)?;
        let (node, value) = self.factor()?;
        let value = match tag {
            Tag::Mul => inh_value * value,
            _ => {
                if value == 0.0 {
                    return Err(CalcError::DivisionByZero { pos: op_tok.pos });
                }
                inh_value / value
            }
        };
        let synth = self.term_tail(Ast::binary(tag, inh_node, node, value), value)?;
        Ok(self.leave(synth))
    }

    // F → ( E ) | num | id
    fn factor(&mut self) -> Result<Synth, CalcError> {
        match self.lookahead().token_id {
            TokenID::LeftParen => {
                self.eat(TokenID::LeftParen)?;
                let synth = self.expr()?;
                self.eat(TokenID::RightParen)?;
                Ok(synth)
            }
            TokenID::Number => {
                let tok = self.eat(TokenID::Number)?;
                let value = tok.lexeme.parse::<f64>()?;
                if !value.is_finite() {
                    return Err(CalcError::NumberOutOfRange {
                        lexeme: tok.lexeme,
                        pos: tok.pos,
                    });
                }
                Ok((Ast::num(value, tok.pos), value))
            }
            TokenID::Ident => {
                let tok = self.eat(TokenID::Ident)?;
                let name = tok.lexeme.as_str();
                let stored = self.symtab.touch(name, tok.pos).value;
                let value = match stored {
                    Some(value) => value,
                    None => {
                        log::debug!("resolving {} at {}", name, tok.pos);
                        let value = self.resolver.resolve(name)?;
                        self.symtab.set_value(name, value);
                        value
                    }
                };
                Ok((Ast::id(name, value, tok.pos), value))
            }
            _ => Err(unexpected(
                &[TokenID::LeftParen, TokenID::Number, TokenID::Ident],
                self.lookahead().clone(),
            )),
        }
    }
}

fn unexpected(expected: &[TokenID], found: CalcToken) -> CalcError {
    CalcError::Syntax {
        expected: expected.to_vec(),
        found: found.token_id,
        lexeme: found.lexeme,
        pos: found.pos,
    }
}

/// Tokenizes, parses and evaluates `source` in one call.
///
/// # Errors
/// Any [`CalcError`]; lexical errors abort before parsing starts.
pub fn evaluate<R: ValueResolver>(source: &str, resolver: R) -> Result<Parsed, CalcError> {
    let tokens = tokenize(source)?;
    CalcParser::new(tokens, resolver).parse()
}
