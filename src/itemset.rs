//! The itemset value type.
//!
//! An [`Itemset`] keeps its items sorted and deduplicated, so two itemsets
//! holding the same items compare and hash equal no matter how they were
//! built. That makes them usable directly as keys of the per-level tables.

use std::borrow::Borrow;
use std::cmp::Ordering;
use std::fmt::{Display, Formatter, Result as FmtResult};

use itertools::Itertools;
use serde::Serialize;

use crate::types::ItemId;

#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct Itemset<T = ItemId>(Vec<T>);

impl<T: Ord> Itemset<T> {
    /// Build an itemset from any items; duplicates collapse.
    pub fn new<I: IntoIterator<Item = T>>(items: I) -> Self {
        let mut items: Vec<T> = items.into_iter().collect();
        items.sort_unstable();
        items.dedup();
        Self(items)
    }

    pub fn singleton(item: T) -> Self {
        Self(vec![item])
    }

    /// Wrap an already sorted, duplicate-free vector.
    pub(crate) fn from_sorted(items: Vec<T>) -> Self {
        debug_assert!(items.windows(2).all(|w| w[0] < w[1]));
        Self(items)
    }

    /// Whether every item of `self` occurs in the sorted slice `transaction`.
    ///
    /// Walks both sequences once; bails out early when the itemset is
    /// larger than the transaction or an item is passed over.
    pub fn is_subset_of(&self, transaction: &[T]) -> bool {
        if self.0.len() > transaction.len() {
            return false;
        }

        let mut rest = transaction.iter();
        'items: for item in &self.0 {
            for other in rest.by_ref() {
                match other.cmp(item) {
                    Ordering::Less => continue,
                    Ordering::Equal => continue 'items,
                    Ordering::Greater => return false,
                }
            }
            return false;
        }
        true
    }

    /// Union of two itemsets, merged in order.
    pub fn union(&self, other: &Self) -> Self
    where
        T: Clone,
    {
        Self(
            self.0
                .iter()
                .merge(other.0.iter())
                .dedup()
                .cloned()
                .collect(),
        )
    }

    /// All subsets with exactly one item removed, in order of the removed
    /// item.
    pub fn subsets_minus_one(&self) -> impl Iterator<Item = Itemset<T>> + '_
    where
        T: Clone,
    {
        (0..self.0.len()).map(move |skip| {
            Self::from_sorted(
                self.0
                    .iter()
                    .enumerate()
                    .filter(|&(i, _)| i != skip)
                    .map(|(_, item)| item.clone())
                    .collect(),
            )
        })
    }

    /// Display order: smaller itemsets first, then lexicographic on the
    /// sorted items.
    pub fn display_cmp(&self, other: &Self) -> Ordering {
        self.0
            .len()
            .cmp(&other.0.len())
            .then_with(|| self.0.cmp(&other.0))
    }

    /// Re-key the items, restoring the sorted invariant for the new type.
    pub fn map<U: Ord, F: FnMut(&T) -> U>(&self, f: F) -> Itemset<U> {
        Itemset::new(self.0.iter().map(f))
    }
}

impl<T> Itemset<T> {
    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn items(&self) -> &[T] {
        &self.0
    }

    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.0.iter()
    }

    pub fn into_vec(self) -> Vec<T> {
        self.0
    }
}

impl<T: Ord> FromIterator<T> for Itemset<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        Self::new(iter)
    }
}

impl<T: Ord> From<Vec<T>> for Itemset<T> {
    fn from(items: Vec<T>) -> Self {
        Self::new(items)
    }
}

impl<T> Borrow<[T]> for Itemset<T> {
    fn borrow(&self) -> &[T] {
        &self.0
    }
}

impl<'a, T> IntoIterator for &'a Itemset<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl<T: Display> Display for Itemset<T> {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        write!(f, "{{ {} }}", self.0.iter().join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn construction_is_order_independent() {
        let a = Itemset::new(vec![3, 1, 2]);
        let b = Itemset::new(vec![2, 3, 1, 3]);
        assert_eq!(a, b);
        assert_eq!(a.items(), &[1, 2, 3]);

        let set: HashSet<_> = vec![a, b].into_iter().collect();
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn borrowed_lookup_matches_owned() {
        let set: HashSet<Itemset> = vec![Itemset::new(vec![1, 4]), Itemset::new(vec![2, 3])]
            .into_iter()
            .collect();
        assert!(set.contains(&[1usize, 4][..]));
        assert!(!set.contains(&[4usize, 1][..]));
    }

    #[test]
    fn subset_of_sorted_transaction() {
        let itemset = Itemset::new(vec![2, 5]);
        assert!(itemset.is_subset_of(&[1, 2, 3, 5]));
        assert!(itemset.is_subset_of(&[2, 5]));
        assert!(!itemset.is_subset_of(&[1, 2, 3, 4]));
        assert!(!itemset.is_subset_of(&[5]));
        assert!(!itemset.is_subset_of(&[]));
        assert!(Itemset::<usize>::new(vec![]).is_subset_of(&[1]));
    }

    #[test]
    fn subsets_minus_one() {
        let itemset = Itemset::new(vec![1, 2, 3]);
        let subsets: Vec<_> = itemset.subsets_minus_one().collect();
        assert_eq!(
            subsets,
            vec![
                Itemset::new(vec![2, 3]),
                Itemset::new(vec![1, 3]),
                Itemset::new(vec![1, 2]),
            ]
        );
    }

    #[test]
    fn union_merges() {
        let a = Itemset::new(vec![1, 3]);
        let b = Itemset::new(vec![3, 4]);
        assert_eq!(a.union(&b).items(), &[1, 3, 4]);
    }

    #[test]
    fn display_order_and_format() {
        let mut itemsets = vec![
            Itemset::new(vec![1, 2]),
            Itemset::new(vec![3]),
            Itemset::new(vec![1]),
        ];
        itemsets.sort_by(Itemset::display_cmp);
        assert_eq!(
            itemsets.iter().map(|i| i.to_string()).collect::<Vec<_>>(),
            vec!["{ 1 }", "{ 3 }", "{ 1, 2 }"]
        );
    }
}
