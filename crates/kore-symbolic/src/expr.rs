//! Expression trees.
//!
//! `Expr` is an immutable, reference-counted handle; cloning it is cheap
//! and sub-trees are freely shared between expressions. Every operation
//! that changes a tree builds new nodes.

use std::fmt;
use std::ops::{Add, Mul, Neg, Sub};
use std::sync::Arc;

use kore_clifford::{BladeMask, Multivector};

use crate::error::Result;
use crate::node::{ExprNode, Priority};

/// Node kinds of the expression tree.
#[derive(Debug, Clone, PartialEq)]
pub enum ExprKind {
    Integer(i64),
    Symbol(String),
    Sum(Vec<Expr>),
    Product(Vec<Expr>),
    Power(Expr, Expr),
    /// Geometric-algebra multivector with symbolic coefficients. Behaves
    /// as an atomic leaf; its coefficients are its children.
    Multivector(Multivector<Expr>),
}

/// A symbolic expression.
#[derive(Debug, Clone)]
pub struct Expr(Arc<ExprKind>);

impl Expr {
    pub fn new(kind: ExprKind) -> Self {
        Self(Arc::new(kind))
    }

    pub fn kind(&self) -> &ExprKind {
        &self.0
    }

    pub fn int(value: i64) -> Self {
        Self::new(ExprKind::Integer(value))
    }

    pub fn symbol(name: impl Into<String>) -> Self {
        Self::new(ExprKind::Symbol(name.into()))
    }

    /// Unevaluated sum of `terms`.
    pub fn sum(terms: Vec<Expr>) -> Self {
        Self::new(ExprKind::Sum(terms))
    }

    /// Unevaluated product of `factors`.
    pub fn product(factors: Vec<Expr>) -> Self {
        Self::new(ExprKind::Product(factors))
    }

    pub fn pow(base: Expr, exponent: Expr) -> Self {
        Self::new(ExprKind::Power(base, exponent))
    }

    /// Multivector node from `(blade, coefficient)` pairs. Coefficients of
    /// repeated blades are added symbolically, left to right.
    pub fn multivector(terms: impl IntoIterator<Item = (BladeMask, Expr)>) -> Self {
        Self::from(Multivector::from_terms(terms))
    }

    /// Whether both handles point at the same node.
    pub fn ptr_eq(&self, other: &Expr) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }

    pub fn as_integer(&self) -> Option<i64> {
        match self.kind() {
            ExprKind::Integer(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_symbol(&self) -> Option<&str> {
        match self.kind() {
            ExprKind::Symbol(name) => Some(name),
            _ => None,
        }
    }

    pub fn as_multivector(&self) -> Option<&Multivector<Expr>> {
        match self.kind() {
            ExprKind::Multivector(mv) => Some(mv),
            _ => None,
        }
    }

    pub fn priority(&self) -> Priority {
        self.0.priority()
    }

    pub fn sort_name(&self) -> &'static str {
        self.0.sort_name()
    }

    /// Direct sub-expressions.
    pub fn children(&self) -> Vec<Expr> {
        self.0.children()
    }

    /// All nodes of the tree, pre-order.
    pub fn nodes(&self) -> Vec<Expr> {
        let mut out = Vec::new();
        let mut stack = vec![self.clone()];
        while let Some(node) = stack.pop() {
            let children = node.children();
            out.push(node);
            stack.extend(children.into_iter().rev());
        }
        out
    }

    /// Whether `needle` occurs anywhere in the tree.
    pub fn contains(&self, needle: &Expr) -> bool {
        self == needle || self.children().iter().any(|c| c.contains(needle))
    }

    pub fn simplify(&self) -> Expr {
        self.0.inner_simplify().unwrap_or_else(|| self.clone())
    }

    /// Fold integer constants bottom-up.
    pub fn eval(&self) -> Expr {
        self.0.inner_eval().unwrap_or_else(|| self.clone())
    }

    /// Post-order structural replacement: children are replaced first, then
    /// `f` is applied to the rebuilt node itself. Leaves go straight to `f`.
    pub fn replace(&self, mut f: impl FnMut(&Expr) -> Expr) -> Expr {
        self.replace_with(&mut f)
    }

    fn replace_with(&self, f: &mut dyn FnMut(&Expr) -> Expr) -> Expr {
        let rebuilt = self
            .0
            .rebuild(&mut |child: &Expr| child.replace_with(&mut *f))
            .unwrap_or_else(|| self.clone());
        f(&rebuilt)
    }

    /// Replace every occurrence of `from` with `to`.
    pub fn substitute(&self, from: &Expr, to: &Expr) -> Expr {
        self.replace(|e| if e == from { to.clone() } else { e.clone() })
    }

    pub fn stringize(&self) -> String {
        self.0.stringize()
    }

    pub fn latexise(&self) -> String {
        self.0.latexise()
    }

    /// Render in SymPy syntax.
    pub fn to_sympy(&self) -> Result<String> {
        self.0.to_sympy()
    }

    /// Solve `self = value` for `x`.
    pub fn invert(&self, value: &Expr, x: &Expr) -> Result<Vec<Expr>> {
        self.0.invert_node(value, x)
    }
}

impl PartialEq for Expr {
    fn eq(&self, other: &Self) -> bool {
        self.ptr_eq(other) || self.0 == other.0
    }
}

impl fmt::Display for Expr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.stringize())
    }
}

impl From<i64> for Expr {
    fn from(value: i64) -> Self {
        Expr::int(value)
    }
}

impl From<&str> for Expr {
    fn from(name: &str) -> Self {
        Expr::symbol(name)
    }
}

impl From<Multivector<Expr>> for Expr {
    fn from(mv: Multivector<Expr>) -> Self {
        Expr::new(ExprKind::Multivector(mv))
    }
}

impl Expr {
    /// Operands of `self` if it is a sum, otherwise `[self]`. The list of
    /// an unshared sum is taken over instead of copied.
    fn into_terms(self) -> Vec<Expr> {
        match Arc::try_unwrap(self.0) {
            Ok(ExprKind::Sum(terms)) => terms,
            Ok(kind) => vec![Expr::new(kind)],
            Err(shared) => match &*shared {
                ExprKind::Sum(terms) => terms.clone(),
                _ => vec![Expr(shared)],
            },
        }
    }

    fn into_factors(self) -> Vec<Expr> {
        match Arc::try_unwrap(self.0) {
            Ok(ExprKind::Product(factors)) => factors,
            Ok(kind) => vec![Expr::new(kind)],
            Err(shared) => match &*shared {
                ExprKind::Product(factors) => factors.clone(),
                _ => vec![Expr(shared)],
            },
        }
    }
}

// Arithmetic builds nodes; nothing is folded until simplify/eval.
// Chains grow one flat operand list: (a + b) + c is Sum([a, b, c]).
impl Add for Expr {
    type Output = Expr;
    fn add(self, rhs: Expr) -> Expr {
        let mut terms = self.into_terms();
        terms.push(rhs);
        Expr::sum(terms)
    }
}

impl Sub for Expr {
    type Output = Expr;
    fn sub(self, rhs: Expr) -> Expr {
        self + -rhs
    }
}

impl Mul for Expr {
    type Output = Expr;
    fn mul(self, rhs: Expr) -> Expr {
        let mut factors = self.into_factors();
        factors.push(rhs);
        Expr::product(factors)
    }
}

impl Neg for Expr {
    type Output = Expr;
    fn neg(self) -> Expr {
        Expr::product(vec![Expr::int(-1), self])
    }
}
