//! Human-readable reports for a grammar and its LL(1) sets.
//!
//! The writers follow the same shape as table dumps in parser generators:
//! a header line followed by one entry per line, written into any
//! [`std::io::Write`].

use super::grammar::{GrammarSpec, Symbol};
use super::sets::{Ll1Sets, SymbolSet};
use std::io::{self, Write};

/// Attribute grammar of the arithmetic evaluator.
///
/// Every nonterminal synthesizes `val` and `node`; the tail nonterminals
/// `E'` and `T'` additionally inherit `inh_val` and `inh_node`.
pub const ATTRIBUTE_GRAMMAR: &str = "\
== Attribute grammar ==
Attributes: X.val and X.node are synthesized for X in {E, E', T, T', F}.
E' and T' also inherit inh_val and inh_node from their left context.

E  → T E'        { E'.inh_val = T.val; E'.inh_node = T.node; E.val = E'.val; E.node = E'.node }
E' → + T E'1     { E'1.inh_val = E'.inh_val + T.val; E'1.inh_node = add(E'.inh_node, T.node); E'.val = E'1.val; E'.node = E'1.node }
E' → - T E'1     { E'1.inh_val = E'.inh_val - T.val; E'1.inh_node = sub(E'.inh_node, T.node); E'.val = E'1.val; E'.node = E'1.node }
E' → ε           { E'.val = E'.inh_val; E'.node = E'.inh_node }
T  → F T'        { T'.inh_val = F.val; T'.inh_node = F.node; T.val = T'.val; T.node = T'.node }
T' → * F T'1     { T'1.inh_val = T'.inh_val * F.val; T'1.inh_node = mul(T'.inh_node, F.node); T'.val = T'1.val; T'.node = T'1.node }
T' → / F T'1     { T'1.inh_val = T'.inh_val / F.val; T'1.inh_node = div(T'.inh_node, F.node); T'.val = T'1.val; T'.node = T'1.node }
T' → ε           { T'.val = T'.inh_val; T'.node = T'.inh_node }
F  → ( E )       { F.val = E.val; F.node = E.node }
F  → num         { F.val = num.lexval; F.node = num(num.lexval) }
F  → id          { if table[id] is unset: ask; F.val = table[id]; F.node = id(id.name, F.val) }
";

/// Translation scheme with actions embedded at the points they run.
pub const EDTS_SCHEME: &str = "\
== EDTS scheme ==
E  → T { E'.inh_val = T.val; E'.inh_node = T.node } E' { E.val = E'.val; E.node = E'.node }
E' → + T { n = add(E'.inh_node, T.node); E'1.inh_val = E'.inh_val + T.val; E'1.inh_node = n } E'1 { E'.val = E'1.val; E'.node = E'1.node }
E' → - T { n = sub(E'.inh_node, T.node); E'1.inh_val = E'.inh_val - T.val; E'1.inh_node = n } E'1 { E'.val = E'1.val; E'.node = E'1.node }
E' → ε { E'.val = E'.inh_val; E'.node = E'.inh_node }
T  → F { T'.inh_val = F.val; T'.inh_node = F.node } T' { T.val = T'.val; T.node = T'.node }
T' → * F { n = mul(T'.inh_node, F.node); T'1.inh_val = T'.inh_val * F.val; T'1.inh_node = n } T'1 { T'.val = T'1.val; T'.node = T'1.node }
T' → / F { if F.val = 0: fail; n = div(T'.inh_node, F.node); T'1.inh_val = T'.inh_val / F.val; T'1.inh_node = n } T'1 { T'.val = T'1.val; T'.node = T'1.node }
T' → ε { T'.val = T'.inh_val; T'.node = T'.inh_node }
F  → ( E ) { F.val = E.val; F.node = E.node }
F  → num { F.val = num.lexval; F.node = num(num.lexval) }
F  → id { if table[id] is unset: ask; F.val = table[id]; F.node = id(id.name, F.val) }
";

/// Formats a set as `{a, b, c}`, listing `ε` first.
pub fn set_text(grammar: &GrammarSpec, set: &SymbolSet) -> String {
    let empty = set.contains(&Symbol::Empty).then_some(Symbol::Empty);
    let names: Vec<_> = empty
        .into_iter()
        .chain(set.iter().copied().filter(|&s| s != Symbol::Empty))
        .map(|s| grammar.symbol_name(s))
        .collect();
    format!("{{{}}}", names.join(", "))
}

/// Writes the grammar productions, one nonterminal per line.
///
/// # Output Format
/// ```text
/// == Grammar (LL(1)) ==
/// Start: E
///
/// E → T E'
/// E' → + T E' | - T E' | ε
/// ```
pub fn write_grammar<W: Write>(out: &mut W, grammar: &GrammarSpec) -> io::Result<()> {
    writeln!(out, "== Grammar (LL(1)) ==")?;
    writeln!(out, "Start: {}", grammar.nonterm_name(grammar.start()))?;
    writeln!(out)?;
    for prod in grammar.prods() {
        let alts: Vec<_> = prod.alts.iter().map(|alt| grammar.alt_text(alt)).collect();
        writeln!(out, "{} → {}", grammar.nonterm_name(prod.lhs), alts.join(" | "))?;
    }
    Ok(())
}

/// Writes FIRST, FOLLOW and PREDICT sets in three sections.
pub fn write_sets<W: Write>(out: &mut W, grammar: &GrammarSpec, sets: &Ll1Sets) -> io::Result<()> {
    writeln!(out, "== FIRST sets ==")?;
    for (a, set) in sets.first.iter().enumerate() {
        writeln!(out, "FIRST({}) = {}", grammar.nonterm_name(a), set_text(grammar, set))?;
    }
    writeln!(out)?;
    writeln!(out, "== FOLLOW sets ==")?;
    for (a, set) in sets.follow.iter().enumerate() {
        writeln!(out, "FOLLOW({}) = {}", grammar.nonterm_name(a), set_text(grammar, set))?;
    }
    writeln!(out)?;
    writeln!(out, "== PREDICT sets ==")?;
    for (&(a, j), set) in &sets.predict {
        writeln!(
            out,
            "PREDICT({} → {}) = {}",
            grammar.nonterm_name(a),
            grammar.alt_text(&grammar.prods()[a].alts[j]),
            set_text(grammar, set)
        )?;
    }
    Ok(())
}
