// FIRST/FOLLOW/PREDICT computation over a `GrammarSpec`.
//
// FIRST and FOLLOW are least fixed points. Each is computed by a pure round
// function that maps the previous state to a new candidate; the driver stops
// as soon as a round reproduces its input.

use super::grammar::{GrammarSpec, Symbol};
use std::collections::{BTreeMap, BTreeSet};

/// A set of terminals, possibly including [`Symbol::Empty`] (FIRST only).
pub type SymbolSet = BTreeSet<Symbol>;

/// FIRST set of every nonterminal, indexed by nonterminal.
pub type FirstSets = Vec<SymbolSet>;

/// FOLLOW set of every nonterminal, indexed by nonterminal.
pub type FollowSets = Vec<SymbolSet>;

/// PREDICT set of every alternative, keyed by `(nonterminal, alternative index)`.
pub type PredictSets = BTreeMap<(usize, usize), SymbolSet>;

/// Computes FIRST of a symbol sequence.
///
/// Scans left to right adding the non-empty FIRST entries of each symbol and
/// stops at the first symbol that is not nullable. If every symbol is
/// nullable, or the sequence is the empty marker, [`Symbol::Empty`] is added.
///
/// # Parameters
/// - `seq`: The symbols to scan.
/// - `first`: Current FIRST sets of the nonterminals.
pub fn first_of_seq(seq: &[Symbol], first: &[SymbolSet]) -> SymbolSet {
    let mut out = SymbolSet::new();
    for &sym in seq {
        match sym {
            Symbol::Empty => break,
            Symbol::Term(_) => {
                out.insert(sym);
                return out;
            }
            Symbol::NonTerm(a) => {
                out.extend(first[a].iter().copied().filter(|&s| s != Symbol::Empty));
                if !first[a].contains(&Symbol::Empty) {
                    return out;
                }
            }
        }
    }
    out.insert(Symbol::Empty);
    out
}

/// Performs one FIRST round starting from `prev`.
///
/// Every set in the result is a superset of the corresponding set in `prev`.
pub fn first_round(grammar: &GrammarSpec, prev: &[SymbolSet]) -> FirstSets {
    let mut next = prev.to_vec();
    for prod in grammar.prods() {
        for alt in &prod.alts {
            next[prod.lhs].extend(first_of_seq(alt, prev));
        }
    }
    next
}

/// Computes the FIRST sets of all nonterminals.
pub fn first_sets(grammar: &GrammarSpec) -> FirstSets {
    let mut first = vec![SymbolSet::new(); grammar.n_nonterms()];
    let mut rounds = 0;
    loop {
        rounds += 1;
        let next = first_round(grammar, &first);
        if next == first {
            break;
        }
        first = next;
    }
    log::debug!("FIRST converged after {} rounds", rounds);
    first
}

/// Performs one FOLLOW round starting from `prev`.
///
/// For every occurrence of a nonterminal `X` in `A → α X β`, adds
/// FIRST(β) without `ε` to FOLLOW(X), and FOLLOW(A) when β is empty or
/// nullable. The end marker is always present in FOLLOW of the start symbol.
pub fn follow_round(grammar: &GrammarSpec, first: &[SymbolSet], prev: &[SymbolSet]) -> FollowSets {
    let mut next = prev.to_vec();
    next[grammar.start()].insert(grammar.end());
    for prod in grammar.prods() {
        for alt in &prod.alts {
            for (i, &sym) in alt.iter().enumerate() {
                let Symbol::NonTerm(x) = sym else {
                    continue;
                };
                let beta = &alt[i + 1..];
                let mut beta_nullable = beta.is_empty();
                if !beta_nullable {
                    let first_beta = first_of_seq(beta, first);
                    beta_nullable = first_beta.contains(&Symbol::Empty);
                    next[x].extend(first_beta.into_iter().filter(|&s| s != Symbol::Empty));
                }
                if beta_nullable {
                    next[x].extend(prev[prod.lhs].iter().copied());
                }
            }
        }
    }
    next
}

/// Computes the FOLLOW sets of all nonterminals.
///
/// # Parameters
/// - `grammar`: The grammar; its start symbol receives the end marker.
/// - `first`: FIRST sets as returned by [`first_sets`].
pub fn follow_sets(grammar: &GrammarSpec, first: &[SymbolSet]) -> FollowSets {
    let mut follow = vec![SymbolSet::new(); grammar.n_nonterms()];
    let mut rounds = 0;
    loop {
        rounds += 1;
        let next = follow_round(grammar, first, &follow);
        if next == follow {
            break;
        }
        follow = next;
    }
    log::debug!("FOLLOW converged after {} rounds", rounds);
    follow
}

/// Computes the PREDICT set of every alternative.
///
/// For `A → ε` this is FOLLOW(A). Otherwise it is FIRST of the alternative,
/// with `ε` replaced by FOLLOW(A) when the alternative is nullable.
pub fn predict_sets(grammar: &GrammarSpec, first: &[SymbolSet], follow: &[SymbolSet]) -> PredictSets {
    let mut predict = PredictSets::new();
    for prod in grammar.prods() {
        for (j, alt) in prod.alts.iter().enumerate() {
            let set = if alt.as_slice() == [Symbol::Empty] {
                follow[prod.lhs].clone()
            } else {
                let mut set = first_of_seq(alt, first);
                if set.remove(&Symbol::Empty) {
                    set.extend(follow[prod.lhs].iter().copied());
                }
                set
            };
            predict.insert((prod.lhs, j), set);
        }
    }
    predict
}

/// Two alternatives of one nonterminal whose PREDICT sets overlap.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Conflict {
    pub nonterm: usize,
    pub alts: (usize, usize),
    pub overlap: SymbolSet,
}

/// Lists every LL(1) conflict in `predict`. Empty for an LL(1) grammar.
pub fn conflicts(grammar: &GrammarSpec, predict: &PredictSets) -> Vec<Conflict> {
    let mut out = Vec::new();
    for prod in grammar.prods() {
        let n = prod.alts.len();
        for i in 0..n {
            for j in i + 1..n {
                let (Some(a), Some(b)) = (predict.get(&(prod.lhs, i)), predict.get(&(prod.lhs, j)))
                else {
                    continue;
                };
                let overlap: SymbolSet = a.intersection(b).copied().collect();
                if !overlap.is_empty() {
                    out.push(Conflict {
                        nonterm: prod.lhs,
                        alts: (i, j),
                        overlap,
                    });
                }
            }
        }
    }
    out
}

/// FIRST, FOLLOW and PREDICT sets of one grammar.
#[derive(Debug, Clone, PartialEq)]
pub struct Ll1Sets {
    pub first: FirstSets,
    pub follow: FollowSets,
    pub predict: PredictSets,
}

impl Ll1Sets {
    pub fn compute(grammar: &GrammarSpec) -> Self {
        let first = first_sets(grammar);
        let follow = follow_sets(grammar, &first);
        let predict = predict_sets(grammar, &first, &follow);
        Self {
            first,
            follow,
            predict,
        }
    }
}
