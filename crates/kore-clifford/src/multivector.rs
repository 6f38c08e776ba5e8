//! Sparse multivectors over an arbitrary coefficient type.
//!
//! A multivector is a formal sum of basis blades:
//! M = c₁·e_{m₁} + c₂·e_{m₂} + ...
//!
//! Only blades that were supplied are stored. Coefficients can be numbers
//! or whole symbolic expressions; the container only needs `+` to fold
//! repeated blades together.

use std::collections::HashMap;
use std::fmt;
use std::ops::{Add, Index};

use smallvec::SmallVec;

use crate::blade::BladeMask;

/// A multivector stored as blade → coefficient terms.
///
/// Term order is the order in which each distinct blade was first
/// supplied, so iteration and rendering are deterministic.
#[derive(Debug, Clone)]
pub struct Multivector<C> {
    /// Terms in first-insertion order; every mask appears once.
    terms: Vec<(BladeMask, C)>,
    /// Position of each mask in `terms`.
    index: HashMap<BladeMask, usize>,
}

impl<C> Multivector<C> {
    /// The multivector with no terms.
    pub fn empty() -> Self {
        Self {
            terms: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Build from `(blade, coefficient)` pairs, folding the coefficients of
    /// repeated blades left to right: `[(m, a), (m, b), (m, c)]` stores
    /// `(a + b) + c` under `m`.
    pub fn from_terms<I>(terms: I) -> Self
    where
        I: IntoIterator<Item = (BladeMask, C)>,
        C: Add<Output = C>,
    {
        // Group first, then fold each group, so no coefficient has to be
        // moved out of the table mid-merge.
        let mut groups: Vec<(BladeMask, Vec<C>)> = Vec::new();
        let mut index: HashMap<BladeMask, usize> = HashMap::new();
        for (mask, coeff) in terms {
            match index.get(&mask) {
                Some(&slot) => {
                    tracing::trace!(blade = mask.value(), "folding coefficient into existing blade");
                    groups[slot].1.push(coeff);
                }
                None => {
                    index.insert(mask, groups.len());
                    groups.push((mask, vec![coeff]));
                }
            }
        }

        let terms = groups
            .into_iter()
            .filter_map(|(mask, coeffs)| coeffs.into_iter().reduce(|acc, c| acc + c).map(|sum| (mask, sum)))
            .collect();
        Self { terms, index }
    }

    /// Number of distinct blades.
    pub fn len(&self) -> usize {
        self.terms.len()
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }

    /// Coefficient of `mask`, if the blade is present.
    pub fn get(&self, mask: BladeMask) -> Option<&C> {
        self.index.get(&mask).map(|&slot| &self.terms[slot].1)
    }

    pub fn contains(&self, mask: BladeMask) -> bool {
        self.index.contains_key(&mask)
    }

    /// Terms in insertion order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (BladeMask, &C)> + '_ {
        self.terms.iter().map(|(mask, coeff)| (*mask, coeff))
    }

    pub fn masks(&self) -> impl ExactSizeIterator<Item = BladeMask> + '_ {
        self.terms.iter().map(|(mask, _)| *mask)
    }

    pub fn coefficients(&self) -> impl ExactSizeIterator<Item = &C> + '_ {
        self.terms.iter().map(|(_, coeff)| coeff)
    }

    /// Distinct grades of the present blades, ascending.
    pub fn grades(&self) -> Vec<u32> {
        let mut grades: SmallVec<[u32; 8]> = self.terms.iter().map(|(mask, _)| mask.grade()).collect();
        grades.sort_unstable();
        grades.dedup();
        grades.into_vec()
    }

    /// Rebuild every coefficient, keeping blades and their order.
    pub fn map_coefficients<D>(&self, mut f: impl FnMut(&C) -> D) -> Multivector<D> {
        Multivector {
            terms: self.terms.iter().map(|(mask, coeff)| (*mask, f(coeff))).collect(),
            index: self.index.clone(),
        }
    }

    /// Fallible [`map_coefficients`](Self::map_coefficients); stops at the first error.
    pub fn try_map_coefficients<D, E>(
        &self,
        mut f: impl FnMut(&C) -> Result<D, E>,
    ) -> Result<Multivector<D>, E> {
        let terms = self
            .terms
            .iter()
            .map(|(mask, coeff)| f(coeff).map(|d| (*mask, d)))
            .collect::<Result<Vec<_>, E>>()?;
        Ok(Multivector {
            terms,
            index: self.index.clone(),
        })
    }
}

impl<C> Default for Multivector<C> {
    fn default() -> Self {
        Self::empty()
    }
}

/// Equality over the ordered term list.
impl<C: PartialEq> PartialEq for Multivector<C> {
    fn eq(&self, other: &Self) -> bool {
        self.terms == other.terms
    }
}

impl<C: Eq> Eq for Multivector<C> {}

impl<C> Index<BladeMask> for Multivector<C> {
    type Output = C;

    fn index(&self, mask: BladeMask) -> &C {
        match self.get(mask) {
            Some(coeff) => coeff,
            None => panic!("blade {} not present in multivector", mask),
        }
    }
}

impl<C: Add<Output = C>> FromIterator<(BladeMask, C)> for Multivector<C> {
    fn from_iter<I: IntoIterator<Item = (BladeMask, C)>>(iter: I) -> Self {
        Self::from_terms(iter)
    }
}

impl<C> IntoIterator for Multivector<C> {
    type Item = (BladeMask, C);
    type IntoIter = std::vec::IntoIter<(BladeMask, C)>;

    fn into_iter(self) -> Self::IntoIter {
        self.terms.into_iter()
    }
}

/// Renders `c₁e<m₁> + c₂e<m₂> + ...` in term order; empty renders as "".
impl<C: fmt::Display> fmt::Display for Multivector<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, (mask, coeff)) in self.terms.iter().enumerate() {
            if i > 0 {
                write!(f, " + ")?;
            }
            write!(f, "{}{}", coeff, mask)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn mv(terms: &[(u64, i64)]) -> Multivector<i64> {
        Multivector::from_terms(terms.iter().map(|&(m, c)| (BladeMask::new(m), c)))
    }

    #[test]
    fn test_empty() {
        let m: Multivector<i64> = Multivector::empty();
        assert!(m.is_empty());
        assert_eq!(m.len(), 0);
        assert!(m.grades().is_empty());
        assert_eq!(m.to_string(), "");
    }

    #[test]
    fn test_merge_same_blades() {
        let m = mv(&[(1, 1), (1, 2), (2, 3)]);
        assert_eq!(m.len(), 2);
        assert_eq!(m[BladeMask::new(1)], 3);
        assert_eq!(m[BladeMask::new(2)], 3);
    }

    #[test]
    fn test_merge_three() {
        let m = mv(&[(5, 1), (5, 2), (5, 3)]);
        assert_eq!(m.len(), 1);
        assert_eq!(m.get(BladeMask::new(5)), Some(&6));
    }

    /// Concatenating coefficient, exposes the fold order.
    #[derive(Debug, Clone, PartialEq)]
    struct Trace(String);

    impl Add for Trace {
        type Output = Trace;
        fn add(self, rhs: Trace) -> Trace {
            Trace(format!("({}+{})", self.0, rhs.0))
        }
    }

    #[test]
    fn test_merge_is_left_to_right() {
        let t = |s: &str| Trace(s.to_string());
        let m = Multivector::from_terms([
            (BladeMask::new(1), t("a")),
            (BladeMask::new(2), t("x")),
            (BladeMask::new(1), t("b")),
            (BladeMask::new(1), t("c")),
        ]);
        assert_eq!(m.get(BladeMask::new(1)), Some(&t("((a+b)+c)")));
        assert_eq!(m.get(BladeMask::new(2)), Some(&t("x")));
    }

    #[test]
    fn test_first_insertion_order() {
        let m = mv(&[(4, 1), (1, 2), (4, 3), (2, 4)]);
        let masks: Vec<u64> = m.masks().map(BladeMask::value).collect();
        assert_eq!(masks, vec![4, 1, 2]);
        assert_eq!(m.to_string(), "4e4 + 2e1 + 4e2");
    }

    #[test]
    fn test_distinct_masks_kept() {
        let m = mv(&[(0, 1), (1, 1), (2, 1), (3, 1), (7, 1)]);
        assert_eq!(m.len(), 5);
    }

    #[test]
    fn test_grades_sorted_unique() {
        let m = mv(&[(3, 1), (4, 2)]);
        assert_eq!(m.grades(), vec![1, 2]);

        let m = mv(&[(0b111, 1), (0b1, 1), (0b10, 1), (0, 1), (0b11, 1)]);
        assert_eq!(m.grades(), vec![0, 1, 2, 3]);
    }

    #[test]
    fn test_get_missing() {
        let m = mv(&[(1, 1)]);
        assert_eq!(m.get(BladeMask::new(2)), None);
        assert!(!m.contains(BladeMask::new(2)));
        assert!(m.contains(BladeMask::new(1)));
    }

    #[test]
    fn test_map_coefficients() {
        let m = mv(&[(2, 1), (1, 2)]);
        let doubled = m.map_coefficients(|c| c * 2);
        assert_eq!(doubled.to_string(), "2e2 + 4e1");
        assert_eq!(doubled.grades(), m.grades());
        // Original untouched.
        assert_eq!(m.to_string(), "1e2 + 2e1");
    }

    #[test]
    fn test_try_map_coefficients() {
        let m = mv(&[(1, 1), (2, -1)]);
        let ok: Result<Multivector<u32>, String> = m.try_map_coefficients(|&c| Ok(c.unsigned_abs() as u32));
        assert_eq!(ok.unwrap().get(BladeMask::new(2)), Some(&1));

        let err = m.try_map_coefficients(|&c| u32::try_from(c).map_err(|_| format!("negative {c}")));
        assert_eq!(err.unwrap_err(), "negative -1");
    }

    #[test]
    fn test_collect_and_into_iter() {
        let m: Multivector<i64> = [(BladeMask::new(1), 1), (BladeMask::new(1), 1)].into_iter().collect();
        let terms: Vec<_> = m.into_iter().collect();
        assert_eq!(terms, vec![(BladeMask::new(1), 2)]);
    }

    #[test]
    fn test_equality_follows_term_order() {
        assert_eq!(mv(&[(1, 1), (2, 2)]), mv(&[(1, 1), (2, 2)]));
        assert_ne!(mv(&[(1, 1), (2, 2)]), mv(&[(2, 2), (1, 1)]));
    }

    #[test]
    #[should_panic(expected = "not present")]
    fn test_index_missing_panics() {
        let m = mv(&[(1, 1)]);
        let _coeff: i64 = m[BladeMask::new(9)];
    }
}
