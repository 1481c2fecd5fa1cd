//! Property tests for the parser/evaluator using proptest.
//!
//! 1. A fully parenthesized random expression evaluates exactly like a
//!    direct tree walk, or fails with division by zero when the walk does.
//! 2. Every variable is resolved at most once per parse.
//! 3. Unparenthesized chains of `+`/`-` and of `*`/`/` fold left to right.

use proptest::prelude::*;

use crate::{CalcError, FnResolver, Tag, evaluate};

const VARS: [(&str, f64); 3] = [("a", 1.5), ("b", -2.0), ("c", 4.0)];

#[derive(Debug, Clone, Copy)]
enum Op {
    Add,
    Sub,
    Mul,
    Div,
}

impl Op {
    fn symbol(self) -> char {
        match self {
            Op::Add => '+',
            Op::Sub => '-',
            Op::Mul => '*',
            Op::Div => '/',
        }
    }

    fn tag(self) -> Tag {
        match self {
            Op::Add => Tag::Add,
            Op::Sub => Tag::Sub,
            Op::Mul => Tag::Mul,
            Op::Div => Tag::Div,
        }
    }

    fn apply(self, l: f64, r: f64) -> Option<f64> {
        match self {
            Op::Add => Some(l + r),
            Op::Sub => Some(l - r),
            Op::Mul => Some(l * r),
            Op::Div if r == 0.0 => None,
            Op::Div => Some(l / r),
        }
    }
}

#[derive(Debug, Clone)]
enum Expr {
    Num(u32),
    Var(usize),
    Bin(Op, Box<Expr>, Box<Expr>),
}

impl Expr {
    fn render(&self) -> String {
        match self {
            Expr::Num(n) => n.to_string(),
            Expr::Var(i) => VARS[*i].0.to_owned(),
            Expr::Bin(op, l, r) => format!("({} {} {})", l.render(), op.symbol(), r.render()),
        }
    }

    /// Reference evaluation; `None` when some divisor is zero.
    fn eval(&self) -> Option<f64> {
        match self {
            Expr::Num(n) => Some(f64::from(*n)),
            Expr::Var(i) => Some(VARS[*i].1),
            Expr::Bin(op, l, r) => {
                let l = l.eval()?;
                let r = r.eval()?;
                op.apply(l, r)
            }
        }
    }

    fn root_tag(&self) -> Tag {
        match self {
            Expr::Num(_) => Tag::Num,
            Expr::Var(_) => Tag::Id,
            Expr::Bin(op, _, _) => op.tag(),
        }
    }
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![Just(Op::Add), Just(Op::Sub), Just(Op::Mul), Just(Op::Div)]
}

fn expr_strategy() -> impl Strategy<Value = Expr> {
    let leaf = prop_oneof![
        (0u32..20).prop_map(Expr::Num),
        (0usize..VARS.len()).prop_map(Expr::Var),
    ];
    leaf.prop_recursive(5, 48, 2, |inner| {
        (op_strategy(), inner.clone(), inner)
            .prop_map(|(op, l, r)| Expr::Bin(op, Box::new(l), Box::new(r)))
    })
}

fn lookup(name: &str) -> Result<f64, CalcError> {
    Ok(VARS
        .iter()
        .find(|(n, _)| *n == name)
        .map(|(_, v)| *v)
        .unwrap_or(f64::NAN))
}

proptest! {
    #[test]
    fn evaluation_matches_reference(expr in expr_strategy()) {
        let source = expr.render();
        let mut asked: Vec<String> = Vec::new();
        let result = evaluate(&source, FnResolver(|name: &str| {
            asked.push(name.to_owned());
            lookup(name)
        }));
        match (expr.eval(), result) {
            (Some(expected), Ok(parsed)) => {
                prop_assert_eq!(parsed.value, expected);
                prop_assert_eq!(parsed.ast.value, Some(expected));
                prop_assert_eq!(parsed.ast.tag, expr.root_tag());
            }
            (None, Err(CalcError::DivisionByZero { .. })) => {}
            (expected, got) => prop_assert!(false, "{}: expected {:?}, got {:?}", source, expected, got),
        }
        let mut unique = asked.clone();
        unique.sort();
        unique.dedup();
        prop_assert_eq!(unique.len(), asked.len());
    }

    #[test]
    fn additive_chain_folds_left(
        first in 0u32..1000,
        rest in prop::collection::vec((prop::bool::ANY, 0u32..1000), 0..12),
    ) {
        let mut source = first.to_string();
        let mut expected = f64::from(first);
        for (plus, n) in &rest {
            source.push_str(if *plus { " + " } else { " - " });
            source.push_str(&n.to_string());
            expected = if *plus { expected + f64::from(*n) } else { expected - f64::from(*n) };
        }
        let parsed = evaluate(&source, FnResolver(lookup)).unwrap();
        prop_assert_eq!(parsed.value, expected);
    }

    #[test]
    fn multiplicative_chain_folds_left(
        first in 1u32..100,
        rest in prop::collection::vec((prop::bool::ANY, 1u32..100), 0..8),
    ) {
        let mut source = first.to_string();
        let mut expected = f64::from(first);
        for (mul, n) in &rest {
            source.push_str(if *mul { "*" } else { "/" });
            source.push_str(&n.to_string());
            expected = if *mul { expected * f64::from(*n) } else { expected / f64::from(*n) };
        }
        let parsed = evaluate(&source, FnResolver(lookup)).unwrap();
        prop_assert_eq!(parsed.value, expected);
    }
}
