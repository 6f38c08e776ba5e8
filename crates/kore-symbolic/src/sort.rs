//! Canonical ordering of commutative operands.
//!
//! Operands are ordered by node kind first (the kind's `sort_name`), then
//! by rendered form, so the same sum always prints the same way.

use crate::expr::Expr;

pub fn sort_key(expr: &Expr) -> (&'static str, String) {
    (expr.sort_name(), expr.stringize())
}

pub fn canonical_order(terms: &mut [Expr]) {
    terms.sort_by_cached_key(sort_key);
}
