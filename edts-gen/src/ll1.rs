//! LL(1) grammar description, set computation and text reports.
//!
//! [`grammar`] holds the immutable [`GrammarSpec`], [`sets`] computes
//! FIRST/FOLLOW/PREDICT over it, and [`report`] renders both for humans.

pub mod grammar;
pub mod report;
pub mod sets;
mod names;

pub use grammar::{ARITH, END_MARKER, EPSILON, GrammarSpec, Production, Symbol};
pub use sets::{
    Conflict, FirstSets, FollowSets, Ll1Sets, PredictSets, SymbolSet, conflicts, first_of_seq,
    first_round, first_sets, follow_round, follow_sets, predict_sets,
};
