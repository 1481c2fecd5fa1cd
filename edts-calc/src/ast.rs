//! Decorated syntax tree produced by the parser.
//!
//! Nodes are built bottom-up during parsing and carry their synthesized value
//! from the moment they are constructed. Binary nodes own exactly two
//! children; leaves own none.

use crate::position::Position;
use smartstring::alias::String;
use std::fmt;

/// Node kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Tag {
    Add,
    Sub,
    Mul,
    Div,
    Num,
    Id,
}

impl Tag {
    pub fn as_str(self) -> &'static str {
        match self {
            Tag::Add => "add",
            Tag::Sub => "sub",
            Tag::Mul => "mul",
            Tag::Div => "div",
            Tag::Num => "num",
            Tag::Id => "id",
        }
    }

    pub fn is_binary(self) -> bool {
        matches!(self, Tag::Add | Tag::Sub | Tag::Mul | Tag::Div)
    }
}

/// A syntax tree node.
#[derive(Debug, Clone, PartialEq)]
pub struct Ast {
    pub tag: Tag,
    /// Synthesized value.
    pub value: Option<f64>,
    /// Variable name, `id` leaves only.
    pub name: Option<String>,
    pub children: Vec<Ast>,
    /// Source position, leaves only.
    pub pos: Option<Position>,
}

impl Ast {
    /// A numeric literal leaf.
    pub fn num(value: f64, pos: Position) -> Self {
        Self {
            tag: Tag::Num,
            value: Some(value),
            name: None,
            children: Vec::new(),
            pos: Some(pos),
        }
    }

    /// A variable leaf carrying its resolved value.
    pub fn id(name: &str, value: f64, pos: Position) -> Self {
        Self {
            tag: Tag::Id,
            value: Some(value),
            name: Some(String::from(name)),
            children: Vec::new(),
            pos: Some(pos),
        }
    }

    /// A binary operator node over `lhs` and `rhs` whose value is `value`.
    pub fn binary(tag: Tag, lhs: Ast, rhs: Ast, value: f64) -> Self {
        debug_assert!(tag.is_binary());
        Self {
            tag,
            value: Some(value),
            name: None,
            children: vec![lhs, rhs],
            pos: None,
        }
    }

    /// Renders the decorated tree, one node per line, two spaces per level.
    ///
    /// ```text
    /// add(val=14)
    ///   num(val=2, @1:1)
    ///   mul(val=12)
    /// ```
    pub fn pretty(&self) -> std::string::String {
        let mut out = std::string::String::new();
        self.write_pretty(&mut out, 0);
        out
    }

    fn write_pretty(&self, out: &mut std::string::String, depth: usize) {
        if depth > 0 {
            out.push('\n');
        }
        let mut meta = Vec::new();
        if let Some(name) = &self.name {
            meta.push(format!("name={name}"));
        }
        if let Some(value) = self.value {
            meta.push(format!("val={value}"));
        }
        if let Some(pos) = self.pos {
            meta.push(format!("@{pos}"));
        }
        out.push_str(&"  ".repeat(depth));
        out.push_str(self.tag.as_str());
        if !meta.is_empty() {
            out.push('(');
            out.push_str(&meta.join(", "));
            out.push(')');
        }
        for child in &self.children {
            child.write_pretty(out, depth + 1);
        }
    }
}

/// Compact s-expression form, e.g. `add(num(2), mul(num(3), id(x)))`.
impl fmt::Display for Ast {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tag {
            Tag::Num => write!(f, "num({})", self.value.unwrap_or(f64::NAN)),
            Tag::Id => write!(f, "id({})", self.name.as_deref().unwrap_or("?")),
            tag => {
                write!(f, "{}(", tag.as_str())?;
                for (i, child) in self.children.iter().enumerate() {
                    if i > 0 {
                        write!(f, ", ")?;
                    }
                    write!(f, "{child}")?;
                }
                write!(f, ")")
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Ast {
        // 2 + 3 * x  with x = 4
        let mul = Ast::binary(
            Tag::Mul,
            Ast::num(3.0, Position::new(1, 3)),
            Ast::id("x", 4.0, Position::new(1, 5)),
            12.0,
        );
        Ast::binary(Tag::Add, Ast::num(2.0, Position::new(1, 1)), mul, 14.0)
    }

    #[test]
    fn display_is_s_expression() {
        assert_eq!(sample().to_string(), "add(num(2), mul(num(3), id(x)))");
    }

    #[test]
    fn pretty_prints_decorations() {
        let text = sample().pretty();
        let lines: Vec<_> = text.lines().collect();
        assert_eq!(
            lines,
            vec![
                "add(val=14)",
                "  num(val=2, @1:1)",
                "  mul(val=12)",
                "    num(val=3, @1:3)",
                "    id(name=x, val=4, @1:5)",
            ]
        );
    }

    #[test]
    fn fractional_values_render_exactly() {
        let leaf = Ast::num(2.5, Position::new(1, 1));
        assert_eq!(leaf.to_string(), "num(2.5)");
        assert_eq!(leaf.pretty(), "num(val=2.5, @1:1)");
    }

    #[test]
    fn binary_nodes_own_two_children() {
        let tree = sample();
        assert!(tree.tag.is_binary());
        assert_eq!(tree.children.len(), 2);
        assert!(tree.children[0].children.is_empty());
        assert_eq!(tree.children[1].children.len(), 2);
    }
}
