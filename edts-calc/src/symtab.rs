//! # symtab
//!
//! The table of free variables seen during a single parse, built on
//! [`indexmap::IndexMap`].
//!
//! A [`Symbol`] is created the first time its name is referenced. Every
//! reference appends its position to the symbol's occurrence list, in source
//! order. The value is set once, when the variable is first resolved.
//!
//! ## Example
//! ```rust
//! # use edts_calc::{Position, SymTab};
//! let mut st = SymTab::new();
//! st.touch("rate", Position::new(1, 1));
//! assert_eq!(st.get_value("rate"), None);
//! st.set_value("rate", 0.5);
//! st.touch("rate", Position::new(1, 8));
//! assert_eq!(st.get_value("rate"), Some(0.5));
//! assert_eq!(st.get("rate").unwrap().occurrences.len(), 2);
//! ```

use crate::position::Position;
use indexmap::IndexMap;
use smartstring::alias::String;
use std::fmt;

/// Kind of value a symbol holds. Only numbers exist in this language.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SymbolKind {
    #[default]
    Number,
}

impl fmt::Display for SymbolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SymbolKind::Number => f.write_str("num"),
        }
    }
}

/// A free variable and everything known about it.
#[derive(Debug, Clone, PartialEq)]
pub struct Symbol {
    pub name: String,
    pub kind: SymbolKind,
    /// Resolved value, once known.
    pub value: Option<f64>,
    /// Every reference, in order of appearance.
    pub occurrences: Vec<Position>,
}

impl Symbol {
    fn new(name: &str) -> Self {
        Self {
            name: String::from(name),
            kind: SymbolKind::Number,
            value: None,
            occurrences: Vec::new(),
        }
    }
}

/// A symbol table mapping variable names to [`Symbol`]s.
///
/// Storage keeps insertion order; [`SymTab::iter_sorted`] and the
/// [`Display`](fmt::Display) listing order entries by name.
#[derive(Debug, Default, Clone)]
pub struct SymTab {
    tab: IndexMap<String, Symbol>,
}

impl SymTab {
    /// Creates a new, empty symbol table.
    pub fn new() -> Self {
        Self {
            tab: IndexMap::new(),
        }
    }

    /// Returns the number of distinct symbols.
    pub fn len(&self) -> usize {
        self.tab.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tab.is_empty()
    }

    /// Records a reference to `name` at `pos`, creating the symbol on first use.
    pub fn touch(&mut self, name: &str, pos: Position) -> &Symbol {
        let sym = self
            .tab
            .entry(String::from(name))
            .or_insert_with(|| Symbol::new(name));
        sym.occurrences.push(pos);
        sym
    }

    /// Sets the value of `name`, creating the symbol if needed.
    ///
    /// A second call overwrites the first; the parser never makes one because
    /// it checks [`get_value`](Self::get_value) before resolving.
    pub fn set_value(&mut self, name: &str, value: f64) {
        self.tab
            .entry(String::from(name))
            .or_insert_with(|| Symbol::new(name))
            .value = Some(value);
    }

    /// Returns the value of `name`, if the symbol exists and has been resolved.
    pub fn get_value(&self, name: &str) -> Option<f64> {
        self.tab.get(name).and_then(|sym| sym.value)
    }

    pub fn get(&self, name: &str) -> Option<&Symbol> {
        self.tab.get(name)
    }

    /// Iterates symbols ordered by name.
    pub fn iter_sorted(&self) -> impl Iterator<Item = &Symbol> {
        let mut syms: Vec<_> = self.tab.values().collect();
        syms.sort_by(|a, b| a.name.cmp(&b.name));
        syms.into_iter()
    }
}

/// Listing with one symbol per line, sorted by name.
impl fmt::Display for SymTab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "== Symbol table ==")?;
        for sym in self.iter_sorted() {
            let value = match sym.value {
                Some(v) => v.to_string(),
                None => "-".to_owned(),
            };
            let occ: Vec<_> = sym
                .occurrences
                .iter()
                .map(|p| format!("({},{})", p.line, p.column))
                .collect();
            writeln!(
                f,
                "{:<12} kind={} value={} occurrences=[{}]",
                sym.name.as_str(),
                sym.kind,
                value,
                occ.join(", ")
            )?;
        }
        Ok(())
    }
}
