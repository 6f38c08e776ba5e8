//! # kore-clifford
//!
//! Geometric algebra representation layer for Kore.
//!
//! Provides:
//! - Algebra descriptors (dimension, metric signature, basis names)
//! - Predefined PGA3D and CGA3D algebras
//! - Bitmask blade identifiers with derived grade
//! - Sparse multivectors with merge-on-construct over any coefficient type

pub mod algebra;
pub mod blade;
pub mod error;
pub mod multivector;

pub use algebra::{AlgebraDescriptor, OffDiagonalEntry, CGA3D, PGA3D};
pub use blade::BladeMask;
pub use error::{CliffordError, Result};
pub use multivector::Multivector;
