//! Inversion of host node kinds for equation solving.
//!
//! `e.invert(value, x)` solves `e = value` for `x` by peeling off the
//! operands that do not contain `x`. Only linear isolation is attempted.

use crate::error::{Result, SymbolicError};
use crate::expr::Expr;

pub(crate) fn symbol(name: &str, value: &Expr, x: &Expr) -> Vec<Expr> {
    if x.as_symbol() == Some(name) {
        vec![value.clone()]
    } else {
        Vec::new()
    }
}

/// The single operand containing `x` and the remaining operands.
fn isolate<'a>(operands: &'a [Expr], x: &Expr, kind: &str) -> Result<Option<(&'a Expr, Vec<Expr>)>> {
    let mut target = None;
    let mut rest = Vec::with_capacity(operands.len());
    for op in operands {
        if op.contains(x) {
            if target.is_some() {
                return Err(SymbolicError::unsupported(
                    "invert",
                    format!("{} occurs in more than one operand of a {}", x, kind),
                ));
            }
            target = Some(op);
        } else {
            rest.push(op.clone());
        }
    }
    Ok(target.map(|t| (t, rest)))
}

/// `operands` combined with `build`; the lone operand itself, or
/// `identity` when there is none.
fn single_or(mut operands: Vec<Expr>, build: fn(Vec<Expr>) -> Expr, identity: i64) -> Expr {
    match operands.len() {
        0 => Expr::int(identity),
        1 => operands.swap_remove(0),
        _ => build(operands),
    }
}

pub(crate) fn sum(terms: &[Expr], value: &Expr, x: &Expr) -> Result<Vec<Expr>> {
    match isolate(terms, x, "sum")? {
        None => Ok(Vec::new()),
        Some((target, rest)) => target.invert(&(value.clone() - single_or(rest, Expr::sum, 0)), x),
    }
}

pub(crate) fn product(factors: &[Expr], value: &Expr, x: &Expr) -> Result<Vec<Expr>> {
    match isolate(factors, x, "product")? {
        None => Ok(Vec::new()),
        Some((target, rest)) => {
            let divided = value.clone() * Expr::pow(single_or(rest, Expr::product, 1), Expr::int(-1));
            target.invert(&divided, x)
        }
    }
}

pub(crate) fn power(base: &Expr, exp: &Expr, x: &Expr) -> Result<Vec<Expr>> {
    if base.contains(x) || exp.contains(x) {
        Err(SymbolicError::unsupported("invert", "inverting powers is not supported"))
    } else {
        Ok(Vec::new())
    }
}
