//! Multivectors as expression-tree leaves.
//!
//! A multivector node is atomic for printing and ordering purposes, but
//! exposes its coefficients as children so substitution and traversal
//! reach inside it. Blades are never rewritten here: simplify and eval
//! return the node unchanged, and replace only rebuilds coefficients.

use kore_clifford::Multivector;

use crate::error::{Result, SymbolicError};
use crate::expr::Expr;
use crate::node::{ExprNode, Priority};

/// A multivector whose coefficients are symbolic expressions.
pub type MultivectorEntity = Multivector<Expr>;

impl ExprNode for Multivector<Expr> {
    fn priority(&self) -> Priority {
        Priority::Leaf
    }

    fn sort_name(&self) -> &'static str {
        "multivector_"
    }

    fn children(&self) -> Vec<Expr> {
        self.coefficients().cloned().collect()
    }

    fn inner_simplify(&self) -> Option<Expr> {
        None
    }

    fn inner_eval(&self) -> Option<Expr> {
        None
    }

    fn rebuild(&self, f: &mut dyn FnMut(&Expr) -> Expr) -> Option<Expr> {
        Some(Expr::from(self.map_coefficients(|coeff| f(coeff))))
    }

    // <coef>e<mask> + ...; coefficients are not parenthesised.
    fn stringize(&self) -> String {
        self.to_string()
    }

    fn latexise(&self) -> String {
        self.stringize()
    }

    fn to_sympy(&self) -> Result<String> {
        tracing::debug!(terms = self.len(), "SymPy conversion requested for a multivector");
        Err(SymbolicError::future_release("SymPy conversion"))
    }

    fn invert_node(&self, _value: &Expr, _x: &Expr) -> Result<Vec<Expr>> {
        tracing::debug!(terms = self.len(), "inversion requested for a multivector");
        Err(SymbolicError::unsupported("invert", "geometric algebra inversion not supported"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kore_clifford::BladeMask;

    fn blade(v: u64) -> BladeMask {
        BladeMask::new(v)
    }

    #[test]
    fn test_combine_same_blades() {
        let mv = MultivectorEntity::from_terms([
            (blade(1), Expr::int(1)),
            (blade(1), Expr::int(2)),
            (blade(2), Expr::int(3)),
        ]);
        assert_eq!(mv.len(), 2);
        assert_eq!(mv[blade(1)].eval().as_integer(), Some(3));
    }

    #[test]
    fn test_grades_ordered() {
        let mv = MultivectorEntity::from_terms([(blade(3), Expr::int(1)), (blade(4), Expr::int(2))]);
        assert_eq!(mv.grades(), vec![1, 2]);
    }

    #[test]
    fn test_merge_is_symbolic() {
        let a = Expr::symbol("a");
        let b = Expr::symbol("b");
        let mv = MultivectorEntity::from_terms([(blade(1), a.clone()), (blade(1), b.clone())]);
        assert_eq!(mv[blade(1)], a + b);
    }

    #[test]
    fn test_children_are_coefficients() {
        let e = Expr::multivector([(blade(2), Expr::symbol("y")), (blade(1), Expr::symbol("x"))]);
        let children: Vec<String> = e.children().iter().map(Expr::stringize).collect();
        assert_eq!(children, vec!["y", "x"]);
    }

    #[test]
    fn test_simplify_and_eval_are_identity() {
        let e = Expr::multivector([(blade(1), Expr::int(1) + Expr::int(2))]);
        assert!(e.simplify().ptr_eq(&e));
        assert!(e.eval().ptr_eq(&e));
        // The coefficient itself is left unevaluated.
        assert_eq!(e.stringize(), "1 + 2e1");
    }

    #[test]
    fn test_render() {
        let e = Expr::multivector([
            (blade(1), Expr::symbol("a")),
            (blade(6), Expr::int(3)),
            (blade(1), Expr::symbol("b")),
        ]);
        assert_eq!(e.stringize(), "a + be1 + 3e6");
        assert_eq!(e.latexise(), e.stringize());
        assert_eq!(e.stringize(), e.stringize());
        assert_eq!(Expr::multivector(Vec::<(BladeMask, Expr)>::new()).stringize(), "");
    }

    #[test]
    fn test_leaf_priority_and_sort_name() {
        let e = Expr::multivector([(blade(1), Expr::int(1)), (blade(2), Expr::int(2))]);
        assert_eq!(e.priority(), Priority::Leaf);
        assert_eq!(e.sort_name(), "multivector_");
        // Never parenthesised inside a product or power.
        assert_eq!((Expr::symbol("k") * e.clone()).stringize(), "k * 1e1 + 2e2");
        assert_eq!(Expr::pow(e, Expr::int(2)).stringize(), "1e1 + 2e2^2");
    }

    #[test]
    fn test_invert_unsupported() {
        let e = Expr::multivector([(blade(1), Expr::symbol("x"))]);
        let err = e.invert(&Expr::int(0), &Expr::symbol("x")).unwrap_err();
        assert!(err.is_unsupported());
        assert_eq!(
            err,
            SymbolicError::unsupported("invert", "geometric algebra inversion not supported")
        );
    }

    #[test]
    fn test_sympy_future_release() {
        let e = Expr::multivector([(blade(1), Expr::int(1))]);
        let err = e.to_sympy().unwrap_err();
        assert!(err.is_future_release());
        assert_eq!(err, SymbolicError::future_release("SymPy conversion"));

        // Propagates through enclosing nodes.
        let err = (Expr::symbol("x") + e).to_sympy().unwrap_err();
        assert!(err.is_future_release());
    }
}
