//! Copyright (c) 2005–2025 IKH Software, Inc.
//!
//! Released under the terms of the GNU Lesser General Public License, version 3.0
//! or (at your option) any later version (LGPL-3.0-or-later).
//!
//! Grammar analysis for the EDTS arithmetic calculator.
//!
//! `edts-gen` describes the fixed LL(1) arithmetic grammar
//!
//! ```text
//! E  → T E'
//! E' → + T E' | - T E' | ε
//! T  → F T'
//! T' → * F T' | / F T' | ε
//! F  → ( E ) | num | id
//! ```
//!
//! and computes its FIRST, FOLLOW and PREDICT sets by fixed-point iteration.
//! The sets are documentation for the hand-written parser in `edts-calc`;
//! the parser never consults them at runtime.

pub mod ll1;

pub use ll1::{ARITH, GrammarSpec, Ll1Sets, Production, Symbol, SymbolSet};
