//! # kore-symbolic
//!
//! Symbolic expression engine for Kore.
//!
//! Provides:
//! - Immutable, shareable expression trees (`Expr` / `ExprKind`)
//! - The `ExprNode` hook set every node kind answers
//! - Constant folding, simplification with canonical operand ordering
//! - Plain-text, LaTeX and SymPy rendering
//! - Linear isolation for equation solving
//! - Geometric-algebra multivectors as atomic leaves with symbolic coefficients
//!
//! ```
//! use kore_symbolic::{BladeMask, Expr};
//!
//! let mv = Expr::multivector([
//!     (BladeMask::new(0b01), Expr::symbol("a")),
//!     (BladeMask::new(0b10), Expr::int(2)),
//! ]);
//! let x = mv.substitute(&Expr::symbol("a"), &Expr::int(5));
//! assert_eq!(x.stringize(), "5e1 + 2e2");
//! ```

pub mod error;
mod eval;
pub mod expr;
mod invert;
pub mod multivector;
pub mod node;
mod render;
pub mod sort;

pub use error::{Result, SymbolicError};
pub use expr::{Expr, ExprKind};
pub use multivector::MultivectorEntity;
pub use node::{ExprNode, Priority};

pub use kore_clifford::{AlgebraDescriptor, BladeMask, Multivector, CGA3D, PGA3D};
