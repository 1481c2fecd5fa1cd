//! Immutable description of an LL(1) grammar.
//!
//! A [`GrammarSpec`] is assembled from named rules. Left-hand sides become
//! nonterminals, every other name becomes a terminal, [`EPSILON`] denotes the
//! empty alternative and [`END_MARKER`] is appended as the final terminal.
//! Symbols are then referred to by dense indices, in the same spirit as the
//! integer-encoded productions used by table-driven generators.

use super::names::Names;
use anyhow::{Result, bail};
use once_cell::sync::Lazy;

/// Name of the empty-sequence marker.
pub const EPSILON: &str = "ε";

/// Name of the end-of-input terminal.
pub const END_MARKER: &str = "$";

/// A grammar symbol as it appears on a right-hand side or in a set.
///
/// The empty marker is only ever the sole symbol of an alternative, or a
/// member of a FIRST set.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Symbol {
    /// Index into the grammar's nonterminals.
    NonTerm(usize),
    /// Index into the grammar's terminals.
    Term(usize),
    /// The empty-sequence marker `ε`.
    Empty,
}

/// All alternatives of a single nonterminal.
#[derive(Debug, Clone, PartialEq)]
pub struct Production {
    /// Index of the left-hand nonterminal.
    pub lhs: usize,
    /// Ordered right-hand sides; at least one.
    pub alts: Vec<Vec<Symbol>>,
}

/// The fixed arithmetic expression grammar, built on first use.
pub static ARITH: Lazy<GrammarSpec> = Lazy::new(|| {
    GrammarSpec::try_new(
        &[
            ("E", vec![vec!["T", "E'"]]),
            (
                "E'",
                vec![vec!["+", "T", "E'"], vec!["-", "T", "E'"], vec![EPSILON]],
            ),
            ("T", vec![vec!["F", "T'"]]),
            (
                "T'",
                vec![vec!["*", "F", "T'"], vec!["/", "F", "T'"], vec![EPSILON]],
            ),
            ("F", vec![vec!["(", "E", ")"], vec!["num"], vec!["id"]]),
        ],
        "E",
    )
    .unwrap()
});

/// Nonterminals, terminals, productions and start symbol of a grammar.
///
/// Productions are stored in nonterminal order, so `prods()[a].lhs == a`.
#[derive(Debug, Clone)]
pub struct GrammarSpec {
    nonterms: Names,
    terms: Names,
    prods: Vec<Production>,
    start: usize,
}

impl GrammarSpec {
    /// Builds a grammar from `(lhs, alternatives)` rules.
    ///
    /// # Errors
    /// Fails when a left-hand side repeats, a nonterminal has no alternatives,
    /// an alternative is empty, `ε` shares an alternative with other symbols,
    /// the end marker is used in a rule, or `start` is not a nonterminal.
    pub fn try_new(rules: &[(&str, Vec<Vec<&str>>)], start: &str) -> Result<Self> {
        let mut nonterms = Names::default();
        for (lhs, _) in rules {
            if !nonterms.intern(lhs).1 {
                bail!("duplicate rule for nonterminal {:?}", lhs);
            }
        }

        let mut terms = Names::default();
        let mut prods = Vec::with_capacity(rules.len());
        for (lhs, alts) in rules {
            if alts.is_empty() {
                bail!("nonterminal {:?} has no alternatives", lhs);
            }
            let mut coded = Vec::with_capacity(alts.len());
            for alt in alts {
                if alt.is_empty() {
                    bail!("empty alternative for {:?}; write {:?} instead", lhs, EPSILON);
                }
                if alt.len() > 1 && alt.contains(&EPSILON) {
                    bail!("{:?} must be the only symbol of its alternative in {:?}", EPSILON, lhs);
                }
                let mut rhs = Vec::with_capacity(alt.len());
                for &name in alt {
                    let sym = if name == EPSILON {
                        Symbol::Empty
                    } else if name == END_MARKER {
                        bail!("end marker {:?} used in rule for {:?}", END_MARKER, lhs);
                    } else if let Some(a) = nonterms.index_of(name) {
                        Symbol::NonTerm(a)
                    } else {
                        Symbol::Term(terms.intern(name).0)
                    };
                    rhs.push(sym);
                }
                coded.push(rhs);
            }
            prods.push(Production {
                lhs: nonterms.index_of(lhs).unwrap_or_default(),
                alts: coded,
            });
        }
        terms.intern(END_MARKER);

        let Some(start) = nonterms.index_of(start) else {
            bail!("start symbol {:?} is not a nonterminal", start);
        };

        log::debug!(
            "grammar with {} nonterminals, {} terminals, start {:?}",
            nonterms.len(),
            terms.len(),
            nonterms.name(start)
        );

        Ok(Self {
            nonterms,
            terms,
            prods,
            start,
        })
    }

    pub fn prods(&self) -> &[Production] {
        &self.prods
    }

    pub fn start(&self) -> usize {
        self.start
    }

    /// The end-of-input terminal, always the last terminal.
    pub fn end(&self) -> Symbol {
        Symbol::Term(self.terms.len() - 1)
    }

    pub fn n_nonterms(&self) -> usize {
        self.nonterms.len()
    }

    pub fn n_terms(&self) -> usize {
        self.terms.len()
    }

    pub fn nonterm(&self, name: &str) -> Option<usize> {
        self.nonterms.index_of(name)
    }

    pub fn term(&self, name: &str) -> Option<usize> {
        self.terms.index_of(name)
    }

    pub fn nonterm_name(&self, a: usize) -> &str {
        self.nonterms.name(a).unwrap_or("?")
    }

    pub fn term_name(&self, t: usize) -> &str {
        self.terms.name(t).unwrap_or("?")
    }

    /// Iterates terminal names in index order, end marker last.
    pub fn term_names(&self) -> impl Iterator<Item = &str> {
        self.terms.iter()
    }

    pub fn symbol_name(&self, sym: Symbol) -> &str {
        match sym {
            Symbol::NonTerm(a) => self.nonterm_name(a),
            Symbol::Term(t) => self.term_name(t),
            Symbol::Empty => EPSILON,
        }
    }

    /// Renders an alternative as space-separated symbol names.
    pub fn alt_text(&self, alt: &[Symbol]) -> String {
        alt.iter()
            .map(|&s| self.symbol_name(s))
            .collect::<Vec<_>>()
            .join(" ")
    }
}
