//! Plain-text, LaTeX and SymPy rendering of the host node kinds.

use crate::error::Result;
use crate::expr::Expr;
use crate::node::Priority;

fn wrap(child: &Expr, parent: Priority, text: String) -> String {
    if child.priority() < parent {
        format!("({})", text)
    } else {
        text
    }
}

fn wrap_latex(child: &Expr, parent: Priority, text: String) -> String {
    if child.priority() < parent {
        format!("\\left({}\\right)", text)
    } else {
        text
    }
}

pub(crate) fn join(items: &[Expr], sep: &str, parent: Priority, render: fn(&Expr) -> String) -> String {
    items
        .iter()
        .map(|item| wrap(item, parent, render(item)))
        .collect::<Vec<_>>()
        .join(sep)
}

/// `base^exp`; the base is wrapped unless it is atomic.
pub(crate) fn power(base: &Expr, exp: &Expr, render: fn(&Expr) -> String) -> String {
    let b = if base.priority() <= Priority::Power {
        format!("({})", render(base))
    } else {
        render(base)
    };
    format!("{}^{}", b, wrap(exp, Priority::Power, render(exp)))
}

pub(crate) fn join_latex(items: &[Expr], sep: &str, parent: Priority) -> String {
    items
        .iter()
        .map(|item| wrap_latex(item, parent, item.latexise()))
        .collect::<Vec<_>>()
        .join(sep)
}

pub(crate) fn power_latex(base: &Expr, exp: &Expr) -> String {
    let b = if base.priority() <= Priority::Power {
        format!("\\left({}\\right)", base.latexise())
    } else {
        base.latexise()
    };
    format!("{{{}}}^{{{}}}", b, exp.latexise())
}

pub(crate) fn join_sympy(items: &[Expr], sep: &str, parent: Priority) -> Result<String> {
    let parts = items
        .iter()
        .map(|item| -> Result<String> { Ok(wrap(item, parent, item.to_sympy()?)) })
        .collect::<Result<Vec<_>>>()?;
    Ok(parts.join(sep))
}

pub(crate) fn power_sympy(base: &Expr, exp: &Expr) -> Result<String> {
    let b = base.to_sympy()?;
    let b = if base.priority() <= Priority::Power { format!("({})", b) } else { b };
    Ok(format!("{}**{}", b, wrap(exp, Priority::Power, exp.to_sympy()?)))
}
