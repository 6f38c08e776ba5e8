//! The capability set every expression node kind answers.

use crate::error::Result;
use crate::expr::{Expr, ExprKind};
use crate::{eval, invert, render};

/// Binding strength of a node, lowest first. A child is parenthesised
/// when it binds looser than its parent.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Priority {
    Sum,
    Product,
    Power,
    /// Atomic: never parenthesised.
    Leaf,
}

/// Hooks the generic tree machinery dispatches to.
///
/// Every node kind implements every hook; kinds that cannot answer one
/// return an explicit error instead of leaving it out.
pub trait ExprNode {
    fn priority(&self) -> Priority;

    /// Node-kind discriminator used by the canonical ordering of
    /// commutative operands. Unique per kind.
    fn sort_name(&self) -> &'static str;

    fn children(&self) -> Vec<Expr>;

    /// `None` when the node is already its own simplified form.
    fn inner_simplify(&self) -> Option<Expr>;

    /// `None` when the node evaluates to itself.
    fn inner_eval(&self) -> Option<Expr>;

    /// The same node with every child passed through `f`. `None` for
    /// nodes without children.
    fn rebuild(&self, f: &mut dyn FnMut(&Expr) -> Expr) -> Option<Expr>;

    fn stringize(&self) -> String;

    fn latexise(&self) -> String;

    fn to_sympy(&self) -> Result<String>;

    /// Solutions for `x` of `self = value`.
    fn invert_node(&self, value: &Expr, x: &Expr) -> Result<Vec<Expr>>;
}

impl ExprNode for ExprKind {
    fn priority(&self) -> Priority {
        match self {
            ExprKind::Integer(n) if *n < 0 => Priority::Sum,
            ExprKind::Integer(_) | ExprKind::Symbol(_) => Priority::Leaf,
            ExprKind::Sum(_) => Priority::Sum,
            ExprKind::Product(_) => Priority::Product,
            ExprKind::Power(..) => Priority::Power,
            ExprKind::Multivector(mv) => mv.priority(),
        }
    }

    fn sort_name(&self) -> &'static str {
        match self {
            ExprKind::Integer(_) => "integer_",
            ExprKind::Symbol(_) => "symbol_",
            ExprKind::Sum(_) => "sum_",
            ExprKind::Product(_) => "product_",
            ExprKind::Power(..) => "power_",
            ExprKind::Multivector(mv) => mv.sort_name(),
        }
    }

    fn children(&self) -> Vec<Expr> {
        match self {
            ExprKind::Integer(_) | ExprKind::Symbol(_) => Vec::new(),
            ExprKind::Sum(terms) | ExprKind::Product(terms) => terms.clone(),
            ExprKind::Power(base, exp) => vec![base.clone(), exp.clone()],
            ExprKind::Multivector(mv) => mv.children(),
        }
    }

    fn inner_simplify(&self) -> Option<Expr> {
        match self {
            ExprKind::Integer(_) | ExprKind::Symbol(_) => None,
            ExprKind::Sum(terms) => Some(eval::simplify_sum(terms)),
            ExprKind::Product(factors) => Some(eval::simplify_product(factors)),
            ExprKind::Power(base, exp) => Some(eval::simplify_power(base, exp)),
            ExprKind::Multivector(mv) => mv.inner_simplify(),
        }
    }

    fn inner_eval(&self) -> Option<Expr> {
        match self {
            ExprKind::Integer(_) | ExprKind::Symbol(_) => None,
            ExprKind::Sum(terms) => Some(eval::eval_sum(terms)),
            ExprKind::Product(factors) => Some(eval::eval_product(factors)),
            ExprKind::Power(base, exp) => Some(eval::eval_power(base, exp)),
            ExprKind::Multivector(mv) => mv.inner_eval(),
        }
    }

    fn rebuild(&self, f: &mut dyn FnMut(&Expr) -> Expr) -> Option<Expr> {
        match self {
            ExprKind::Integer(_) | ExprKind::Symbol(_) => None,
            ExprKind::Sum(terms) => Some(Expr::sum(terms.iter().map(|t| f(t)).collect())),
            ExprKind::Product(factors) => Some(Expr::product(factors.iter().map(|t| f(t)).collect())),
            ExprKind::Power(base, exp) => {
                let base = f(base);
                Some(Expr::pow(base, f(exp)))
            }
            ExprKind::Multivector(mv) => mv.rebuild(f),
        }
    }

    fn stringize(&self) -> String {
        match self {
            ExprKind::Integer(n) => n.to_string(),
            ExprKind::Symbol(name) => name.clone(),
            ExprKind::Sum(terms) => render::join(terms, " + ", Priority::Sum, Expr::stringize),
            ExprKind::Product(factors) => render::join(factors, " * ", Priority::Product, Expr::stringize),
            ExprKind::Power(base, exp) => render::power(base, exp, Expr::stringize),
            ExprKind::Multivector(mv) => mv.stringize(),
        }
    }

    fn latexise(&self) -> String {
        match self {
            ExprKind::Integer(n) => n.to_string(),
            ExprKind::Symbol(name) => name.clone(),
            ExprKind::Sum(terms) => render::join_latex(terms, " + ", Priority::Sum),
            ExprKind::Product(factors) => render::join_latex(factors, " \\cdot ", Priority::Product),
            ExprKind::Power(base, exp) => render::power_latex(base, exp),
            ExprKind::Multivector(mv) => mv.latexise(),
        }
    }

    fn to_sympy(&self) -> Result<String> {
        match self {
            ExprKind::Integer(n) => Ok(n.to_string()),
            ExprKind::Symbol(name) => Ok(name.clone()),
            ExprKind::Sum(terms) => render::join_sympy(terms, " + ", Priority::Sum),
            ExprKind::Product(factors) => render::join_sympy(factors, " * ", Priority::Product),
            ExprKind::Power(base, exp) => render::power_sympy(base, exp),
            ExprKind::Multivector(mv) => mv.to_sympy(),
        }
    }

    fn invert_node(&self, value: &Expr, x: &Expr) -> Result<Vec<Expr>> {
        match self {
            ExprKind::Integer(_) => Ok(Vec::new()),
            ExprKind::Symbol(name) => Ok(invert::symbol(name, value, x)),
            ExprKind::Sum(terms) => invert::sum(terms, value, x),
            ExprKind::Product(factors) => invert::product(factors, value, x),
            ExprKind::Power(base, exp) => invert::power(base, exp, x),
            ExprKind::Multivector(mv) => mv.invert_node(value, x),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_priority_order() {
        assert!(Priority::Sum < Priority::Product);
        assert!(Priority::Product < Priority::Power);
        assert!(Priority::Power < Priority::Leaf);
    }

    #[test]
    fn test_sort_names_unique() {
        use std::collections::HashSet;
        use kore_clifford::BladeMask;

        let x = Expr::symbol("x");
        let kinds = [
            Expr::int(1),
            x.clone(),
            x.clone() + x.clone(),
            x.clone() * x.clone(),
            Expr::pow(x.clone(), Expr::int(2)),
            Expr::multivector([(BladeMask::new(1), x)]),
        ];
        let names: HashSet<&str> = kinds.iter().map(Expr::sort_name).collect();
        assert_eq!(names.len(), kinds.len());
    }

    #[test]
    fn test_leaf_kinds_have_no_children() {
        assert!(Expr::int(4).children().is_empty());
        assert!(Expr::symbol("q").children().is_empty());
        assert_eq!(Expr::pow(Expr::symbol("q"), Expr::int(2)).children().len(), 2);
    }
}
