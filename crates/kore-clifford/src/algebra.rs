//! Algebra descriptors: dimension, metric signature and basis naming.
//!
//! A descriptor is pure metadata. Blades and multivectors never consult it;
//! algebra-aware operators layered on top read the metric from here.
//!
//! The descriptor is permissive: it stores whatever it is given and only
//! checks lengths and symmetry when [`AlgebraDescriptor::check_consistency`]
//! is called explicitly.

use std::borrow::Cow;
use std::collections::HashSet;

use crate::blade::BladeMask;
use crate::error::{CliffordError, Result};

/// An ordered basis pair `(i, j)` with its inner product `e_i · e_j`.
pub type OffDiagonalEntry = ((usize, usize), i32);

/// Describes a geometric algebra by its dimension, metric signature and
/// basis names.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AlgebraDescriptor {
    /// Number of basis vectors.
    dimension: usize,
    /// Diagonal metric entries e_i · e_i.
    signature: Cow<'static, [i32]>,
    /// Display name of each basis vector; index i names bit i.
    basis_names: Cow<'static, [Cow<'static, str>]>,
    /// Inner products of non-orthogonal basis pairs, in insertion order.
    #[cfg_attr(feature = "serde", serde(default))]
    off_diagonal: Cow<'static, [OffDiagonalEntry]>,
}

/// Projective geometric algebra for 3D: e1, e2, e3 square to +1, eInf to 0.
pub static PGA3D: AlgebraDescriptor = AlgebraDescriptor {
    dimension: 4,
    signature: Cow::Borrowed(&[1, 1, 1, 0]),
    basis_names: Cow::Borrowed(&[
        Cow::Borrowed("e1"),
        Cow::Borrowed("e2"),
        Cow::Borrowed("e3"),
        Cow::Borrowed("eInf"),
    ]),
    off_diagonal: Cow::Borrowed(&[]),
};

/// Conformal geometric algebra for 3D. The two null vectors ePlus and
/// eMinus pair with each other: ePlus · eMinus = 1.
pub static CGA3D: AlgebraDescriptor = AlgebraDescriptor {
    dimension: 5,
    signature: Cow::Borrowed(&[1, 1, 1, 0, 0]),
    basis_names: Cow::Borrowed(&[
        Cow::Borrowed("e1"),
        Cow::Borrowed("e2"),
        Cow::Borrowed("e3"),
        Cow::Borrowed("ePlus"),
        Cow::Borrowed("eMinus"),
    ]),
    off_diagonal: Cow::Borrowed(&[((3, 4), 1), ((4, 3), 1)]),
};

impl AlgebraDescriptor {
    /// Create a descriptor with an orthogonal metric (no off-diagonal entries).
    ///
    /// Nothing is validated: mismatched lengths are stored as given.
    pub fn new<S>(dimension: usize, signature: Vec<i32>, basis_names: impl IntoIterator<Item = S>) -> Self
    where
        S: Into<String>,
    {
        let basis_names: Vec<Cow<'static, str>> =
            basis_names.into_iter().map(|s| Cow::Owned(s.into())).collect();
        Self {
            dimension,
            signature: Cow::Owned(signature),
            basis_names: Cow::Owned(basis_names),
            off_diagonal: Cow::Borrowed(&[]),
        }
    }

    /// Add off-diagonal metric entries. A pair supplied twice keeps its
    /// first position and the last value.
    pub fn with_off_diagonal(mut self, entries: impl IntoIterator<Item = OffDiagonalEntry>) -> Self {
        let table = self.off_diagonal.to_mut();
        for (pair, value) in entries {
            match table.iter_mut().find(|(p, _)| *p == pair) {
                Some(slot) => slot.1 = value,
                None => table.push((pair, value)),
            }
        }
        self
    }

    pub fn dimension(&self) -> usize {
        self.dimension
    }

    pub fn signature(&self) -> &[i32] {
        &self.signature
    }

    pub fn basis_names(&self) -> impl ExactSizeIterator<Item = &str> + '_ {
        self.basis_names.iter().map(|s| s.as_ref())
    }

    pub fn basis_name(&self, index: usize) -> Option<&str> {
        self.basis_names.get(index).map(|s| s.as_ref())
    }

    pub fn off_diagonal(&self) -> &[OffDiagonalEntry] {
        &self.off_diagonal
    }

    /// Exact lookup of a supplied off-diagonal pair. `(j, i)` is not
    /// consulted when `(i, j)` is missing.
    pub fn off_diagonal_entry(&self, i: usize, j: usize) -> Option<i32> {
        self.off_diagonal
            .iter()
            .find(|(pair, _)| *pair == (i, j))
            .map(|&(_, v)| v)
    }

    /// Inner product `e_i · e_j`.
    ///
    /// Diagonal entries come from the signature (`None` past its end);
    /// pairs without an off-diagonal entry are orthogonal.
    pub fn inner_product(&self, i: usize, j: usize) -> Option<i32> {
        if i == j {
            self.signature.get(i).copied()
        } else {
            Some(self.off_diagonal_entry(i, j).unwrap_or(0))
        }
    }

    /// Display name of a basis blade.
    ///
    /// e.g., for PGA3D: 0b0000 → "1", 0b0011 → "e1e2", 0b1001 → "e1eInf".
    pub fn blade_name(&self, blade: BladeMask) -> String {
        if blade.is_scalar() {
            return "1".to_string();
        }
        let mut parts = Vec::new();
        for i in blade.indices() {
            match self.basis_name(i) {
                Some(name) => parts.push(name.to_string()),
                None => parts.push(format!("e{}", i)),
            }
        }
        parts.join("")
    }

    /// Check the invariants construction leaves unenforced. Reports the
    /// first violation found.
    pub fn check_consistency(&self) -> Result<()> {
        if self.signature.len() != self.dimension {
            return Err(CliffordError::Inconsistent(format!(
                "signature has {} entries, dimension is {}",
                self.signature.len(),
                self.dimension
            )));
        }
        if self.basis_names.len() != self.dimension {
            return Err(CliffordError::Inconsistent(format!(
                "{} basis names for dimension {}",
                self.basis_names.len(),
                self.dimension
            )));
        }
        if self.dimension > BladeMask::MAX_BASIS {
            return Err(CliffordError::Inconsistent(format!(
                "dimension {} exceeds the {} basis vectors a blade mask can address",
                self.dimension,
                BladeMask::MAX_BASIS
            )));
        }

        let mut seen = HashSet::new();
        for name in self.basis_names.iter() {
            if !seen.insert(name.as_ref()) {
                return Err(CliffordError::Inconsistent(format!("duplicate basis name '{}'", name)));
            }
        }

        for &((i, j), value) in self.off_diagonal.iter() {
            if i == j {
                return Err(CliffordError::Inconsistent(format!(
                    "off-diagonal entry ({}, {}) lies on the diagonal",
                    i, j
                )));
            }
            if i >= self.dimension || j >= self.dimension {
                return Err(CliffordError::Inconsistent(format!(
                    "off-diagonal entry ({}, {}) out of range for dimension {}",
                    i, j, self.dimension
                )));
            }
            if let Some(mirror) = self.off_diagonal_entry(j, i) {
                if mirror != value {
                    return Err(CliffordError::Inconsistent(format!(
                        "asymmetric metric: ({}, {}) = {} but ({}, {}) = {}",
                        i, j, value, j, i, mirror
                    )));
                }
            }
        }

        Ok(())
    }
}

#[cfg(feature = "serde")]
impl AlgebraDescriptor {
    /// Load a descriptor from JSON.
    ///
    /// ```json
    /// {"dimension": 2, "signature": [1, -1], "basis_names": ["ex", "et"]}
    /// ```
    ///
    /// `off_diagonal` is optional and written as `[[[i, j], value], ...]`.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json).map_err(|e| CliffordError::Config(e.to_string()))
    }

    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|e| CliffordError::Config(e.to_string()))
    }
}
