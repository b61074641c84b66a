//! Dependency-set tracking for bounded LTL analysis.
//!
//! A [`DepSet`] maps an atomic proposition name to the set of time indices at
//! which it may influence a formula's truth value. The dependency analyzer
//! (`ltlmeasure-kernel::deps`) attaches a `DepSet` to every AST node; the
//! measure evaluator (`ltlmeasure-measure::eval`) queries disjointness and
//! time-independence to decide whether a closed-form combinator applies.
//!
//! This crate has no knowledge of the LTL AST itself — only of the
//! (AP, time index) pairs formulas mention.

use std::collections::{BTreeMap, BTreeSet};

/// A mapping from atomic proposition name to the set of time indices at
/// which it is referenced.
///
/// Invariant: a key never maps to an empty set. Mutators that would leave a
/// key with an empty set remove the key instead.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DepSet {
    literals: BTreeMap<String, BTreeSet<u32>>,
}

impl DepSet {
    /// The empty dependency set (constants `True`/`False`).
    pub fn empty() -> Self {
        Self::default()
    }

    /// A single atomic proposition tracked at a single time index.
    ///
    /// `Literal p` at time 0 is `{p -> {0}}`.
    pub fn literal(name: impl Into<String>, index: u32) -> Self {
        let mut set = Self::default();
        set.insert(name.into(), std::iter::once(index).collect());
        set
    }

    fn insert(&mut self, name: String, indices: BTreeSet<u32>) {
        if indices.is_empty() {
            self.literals.remove(&name);
        } else {
            self.literals.insert(name, indices);
        }
    }

    /// Key-wise union of two dependency sets.
    pub fn union(&self, other: &DepSet) -> DepSet {
        let mut result = self.clone();
        for (name, indices) in &other.literals {
            result
                .literals
                .entry(name.clone())
                .and_modify(|existing| existing.extend(indices.iter().copied()))
                .or_insert_with(|| indices.clone());
        }
        result
    }

    /// True iff the sets of APs (keys) are disjoint. Index overlap is not
    /// considered — this is the contract fixed by the spec (see Open
    /// Question "disjointness semantics").
    pub fn is_disjoint(&self, other: &DepSet) -> bool {
        let (smaller, larger) = if self.literals.len() <= other.literals.len() {
            (&self.literals, &other.literals)
        } else {
            (&other.literals, &self.literals)
        };
        smaller.keys().all(|k| !larger.contains_key(k))
    }

    /// Every index `t` becomes `t + k`; indices that would exceed `bound` are
    /// dropped.
    pub fn shift(&self, k: u32, bound: u32) -> DepSet {
        let mut result = DepSet::default();
        for (name, indices) in &self.literals {
            let shifted: BTreeSet<u32> = indices
                .iter()
                .filter_map(|t| {
                    let shifted = t + k;
                    (shifted <= bound).then_some(shifted)
                })
                .collect();
            result.insert(name.clone(), shifted);
        }
        result
    }

    /// For each AP, replace its index set with `{min(indices), ..., bound}`.
    pub fn saturate(&self, bound: u32) -> DepSet {
        let mut result = DepSet::default();
        for (name, indices) in &self.literals {
            if let Some(&min) = indices.iter().next() {
                let range = if min <= bound {
                    (min..=bound).collect()
                } else {
                    BTreeSet::new()
                };
                result.insert(name.clone(), range);
            }
        }
        result
    }

    /// True iff every AP maps to a set of size <= 1.
    pub fn time_independent(&self) -> bool {
        self.literals.values().all(|v| v.len() <= 1)
    }

    /// Total number of (AP, index) pairs.
    pub fn count(&self) -> usize {
        self.literals.values().map(|v| v.len()).sum()
    }

    /// True iff no AP is tracked (constants).
    pub fn is_empty(&self) -> bool {
        self.literals.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn literal_is_single_pair() {
        let d = DepSet::literal("p", 0);
        assert_eq!(d.count(), 1);
        assert!(!d.is_empty());
    }

    #[test]
    fn empty_has_no_pairs() {
        assert!(DepSet::empty().is_empty());
        assert_eq!(DepSet::empty().count(), 0);
    }

    #[test]
    fn union_is_commutative() {
        let a = DepSet::literal("p", 0);
        let b = DepSet::literal("q", 1);
        assert_eq!(a.union(&b), b.union(&a));
    }

    #[test]
    fn union_is_associative() {
        let a = DepSet::literal("p", 0);
        let b = DepSet::literal("q", 1);
        let c = DepSet::literal("r", 2);
        assert_eq!(a.union(&b).union(&c), a.union(&b.union(&c)));
    }

    #[test]
    fn union_keeps_keys_unique_to_one_side() {
        let a = DepSet::literal("p", 0);
        let b = DepSet::literal("q", 1);
        let u = a.union(&b);
        assert_eq!(u.count(), 2);
    }

    #[test]
    fn shift_composes_up_to_truncation() {
        let a = DepSet::literal("p", 0);
        let shifted_twice = a.shift(1, 10).shift(2, 10);
        let shifted_once = a.shift(3, 10);
        assert_eq!(shifted_twice, shifted_once);
    }

    #[test]
    fn shift_drops_indices_past_bound() {
        let a = DepSet::literal("p", 3);
        let shifted = a.shift(5, 5);
        assert!(shifted.is_empty());
    }

    #[test]
    fn saturate_default_bound_fills_range() {
        let a = DepSet::literal("p", 1);
        let saturated = a.saturate(3);
        assert_eq!(saturated.count(), 3); // {1,2,3}
    }

    #[test]
    fn is_disjoint_ignores_time_indices() {
        let a = DepSet::literal("p", 0);
        let b = DepSet::literal("p", 5);
        assert!(!a.is_disjoint(&b), "same AP at different indices is NOT disjoint");
    }

    #[test]
    fn is_disjoint_true_for_distinct_aps() {
        let a = DepSet::literal("p", 0);
        let b = DepSet::literal("q", 0);
        assert!(a.is_disjoint(&b));
    }

    #[test]
    fn time_independent_true_when_each_ap_has_one_index() {
        let a = DepSet::literal("p", 0).union(&DepSet::literal("q", 1));
        assert!(a.time_independent());
    }

    #[test]
    fn time_independent_false_when_saturated() {
        let a = DepSet::literal("p", 0).saturate(3);
        assert!(!a.time_independent());
    }
}
