//! Constant folding and simplification of the host node kinds.
//!
//! Integer arithmetic is checked: an operation that would overflow leaves
//! its operands symbolic instead of wrapping.

use crate::expr::{Expr, ExprKind};
use crate::sort::canonical_order;

pub(crate) fn eval_sum(terms: &[Expr]) -> Expr {
    collapse_sum(fold_sum(flatten_sum(terms, Expr::eval)))
}

pub(crate) fn eval_product(factors: &[Expr]) -> Expr {
    collapse_product(fold_product(flatten_product(factors, Expr::eval)))
}

pub(crate) fn eval_power(base: &Expr, exp: &Expr) -> Expr {
    fold_power(base.eval(), exp.eval())
}

/// Flatten nested sums, fold constants and put the operands in canonical order.
pub(crate) fn simplify_sum(terms: &[Expr]) -> Expr {
    let mut folded = fold_sum(flatten_sum(terms, Expr::simplify));
    canonical_order(&mut folded);
    collapse_sum(folded)
}

/// Flatten nested products and fold constants. Factor order is kept.
pub(crate) fn simplify_product(factors: &[Expr]) -> Expr {
    collapse_product(fold_product(flatten_product(factors, Expr::simplify)))
}

pub(crate) fn simplify_power(base: &Expr, exp: &Expr) -> Expr {
    let base = base.simplify();
    let exp = exp.simplify();
    match exp.as_integer() {
        Some(0) => Expr::int(1),
        Some(1) => base,
        _ => fold_power(base, exp),
    }
}

/// Apply `step` to every term and splice nested sums into one list.
fn flatten_sum(terms: &[Expr], step: fn(&Expr) -> Expr) -> Vec<Expr> {
    let mut flat = Vec::with_capacity(terms.len());
    for term in terms {
        let term = step(term);
        match term.kind() {
            ExprKind::Sum(inner) => flat.extend(inner.iter().cloned()),
            _ => flat.push(term),
        }
    }
    flat
}

fn flatten_product(factors: &[Expr], step: fn(&Expr) -> Expr) -> Vec<Expr> {
    let mut flat = Vec::with_capacity(factors.len());
    for factor in factors {
        let factor = step(factor);
        match factor.kind() {
            ExprKind::Product(inner) => flat.extend(inner.iter().cloned()),
            _ => flat.push(factor),
        }
    }
    flat
}

/// Non-constant terms in order, followed by the folded constant if it is
/// not zero.
fn fold_sum(terms: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    let mut constant = 0i64;
    let mut rest = Vec::new();
    for term in terms {
        match term.as_integer() {
            Some(n) => match constant.checked_add(n) {
                Some(c) => constant = c,
                None => {
                    tracing::trace!(lhs = constant, rhs = n, "sum overflows i64; keeping term symbolic");
                    rest.push(Expr::int(constant));
                    constant = n;
                }
            },
            None => rest.push(term),
        }
    }
    if constant != 0 || rest.is_empty() {
        rest.push(Expr::int(constant));
    }
    rest
}

/// Folded constant first (omitted when it is one), then the remaining
/// factors in order. A zero constant absorbs everything.
fn fold_product(factors: impl IntoIterator<Item = Expr>) -> Vec<Expr> {
    let mut constant = 1i64;
    let mut rest = Vec::new();
    for factor in factors {
        match factor.as_integer() {
            Some(n) => match constant.checked_mul(n) {
                Some(c) => constant = c,
                None => {
                    tracing::trace!(lhs = constant, rhs = n, "product overflows i64; keeping factor symbolic");
                    rest.push(Expr::int(constant));
                    constant = n;
                }
            },
            None => rest.push(factor),
        }
    }
    if constant == 0 {
        return vec![Expr::int(0)];
    }
    if constant != 1 || rest.is_empty() {
        rest.insert(0, Expr::int(constant));
    }
    rest
}

fn fold_power(base: Expr, exp: Expr) -> Expr {
    if let (Some(b), Some(e)) = (base.as_integer(), exp.as_integer()) {
        if let Ok(e) = u32::try_from(e) {
            match b.checked_pow(e) {
                Some(v) => return Expr::int(v),
                None => tracing::trace!(base = b, exp = e, "power overflows i64; keeping it symbolic"),
            }
        }
    }
    Expr::pow(base, exp)
}

fn collapse_sum(mut terms: Vec<Expr>) -> Expr {
    if terms.len() == 1 {
        terms.swap_remove(0)
    } else {
        Expr::sum(terms)
    }
}

fn collapse_product(mut factors: Vec<Expr>) -> Expr {
    if factors.len() == 1 {
        factors.swap_remove(0)
    } else {
        Expr::product(factors)
    }
}
