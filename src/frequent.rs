use std::collections::HashSet;
use std::hash::Hash;

use crate::{
    inventory::Inventory,
    itemset::Itemset,
    types::{ItemId, ItemsetCounts, ItemsetLength, SupportCount},
};

/// Every frequent itemset found by a run, grouped by size, with its support.
///
/// `levels[k - 1]` holds the frequent k-itemsets. Levels are only ever
/// appended, and never empty.
#[derive(Debug, Clone)]
pub struct FrequentItemsets<T = ItemId> {
    levels: Vec<ItemsetCounts<T>>,
    min_support: SupportCount,
    num_transactions: usize,
}

impl<T: Eq + Hash> FrequentItemsets<T> {
    pub(crate) fn new(min_support: SupportCount, num_transactions: usize) -> Self {
        Self {
            levels: vec![],
            min_support,
            num_transactions,
        }
    }

    pub(crate) fn push_level(&mut self, level: ItemsetCounts<T>) {
        debug_assert!(!level.is_empty());
        self.levels.push(level);
    }

    pub(crate) fn last_level(&self) -> Option<&ItemsetCounts<T>> {
        self.levels.last()
    }

    pub fn min_support(&self) -> SupportCount {
        self.min_support
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Total number of frequent itemsets across all sizes.
    pub fn len(&self) -> usize {
        self.levels.iter().map(|level| level.len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.levels.is_empty()
    }

    /// Size of the largest frequent itemset, 0 if there is none.
    pub fn max_len(&self) -> ItemsetLength {
        self.levels.len()
    }

    /// Frequent itemsets of exactly `size` items.
    pub fn level(&self, size: ItemsetLength) -> Option<&ItemsetCounts<T>> {
        size.checked_sub(1).and_then(|i| self.levels.get(i))
    }

    pub fn contains(&self, itemset: &Itemset<T>) -> bool {
        self.support(itemset).is_some()
    }

    pub fn support(&self, itemset: &Itemset<T>) -> Option<SupportCount> {
        self.level(itemset.len())
            .and_then(|level| level.get(itemset))
            .copied()
    }

    /// All itemsets with their support, smallest size first.
    pub fn iter(&self) -> impl Iterator<Item = (&Itemset<T>, SupportCount)> + '_ {
        self.levels
            .iter()
            .flat_map(|level| level.iter().map(|(itemset, &count)| (itemset, count)))
    }

    pub fn into_itemsets(self) -> HashSet<Itemset<T>> {
        self.levels
            .into_iter()
            .flat_map(|level| level.into_keys())
            .collect()
    }

    /// Itemsets in display order: by size, then lexicographically.
    pub fn sorted(&self) -> Vec<(&Itemset<T>, SupportCount)>
    where
        T: Ord,
    {
        let mut itemsets: Vec<_> = self.iter().collect();
        itemsets.sort_by(|(a, _), (b, _)| a.display_cmp(b));
        itemsets
    }
}

impl FrequentItemsets<ItemId> {
    /// Translate item ids back into the caller's items.
    pub(crate) fn decode<T>(self, inventory: &Inventory<T>) -> FrequentItemsets<T>
    where
        T: Eq + Hash + Ord + Clone,
    {
        let levels = self
            .levels
            .into_iter()
            .map(|level| {
                level
                    .into_iter()
                    .map(|(itemset, count)| (inventory.decode(&itemset), count))
                    .collect()
            })
            .collect();

        FrequentItemsets {
            levels,
            min_support: self.min_support,
            num_transactions: self.num_transactions,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use maplit::hashmap;

    fn sample() -> FrequentItemsets<u32> {
        let mut frequent = FrequentItemsets::new(2, 4);
        frequent.push_level(hashmap! {
            Itemset::new(vec![1]) => 3,
            Itemset::new(vec![2]) => 3,
            Itemset::new(vec![3]) => 2,
        });
        frequent.push_level(hashmap! {
            Itemset::new(vec![1, 2]) => 2,
        });
        frequent
    }

    #[test]
    fn lookups() {
        let frequent = sample();

        assert_eq!(frequent.len(), 4);
        assert_eq!(frequent.max_len(), 2);
        assert_eq!(frequent.support(&Itemset::new(vec![2, 1])), Some(2));
        assert_eq!(frequent.support(&Itemset::new(vec![1, 3])), None);
        assert!(frequent.contains(&Itemset::new(vec![3])));
        assert!(frequent.level(0).is_none());
        assert_eq!(frequent.level(1).map(|level| level.len()), Some(3));
        assert!(frequent.level(3).is_none());
    }

    #[test]
    fn sorted_is_display_order() {
        let frequent = sample();
        let sorted: Vec<_> = frequent
            .sorted()
            .into_iter()
            .map(|(itemset, count)| (itemset.items().to_vec(), count))
            .collect();

        assert_eq!(
            sorted,
            vec![(vec![1], 3), (vec![2], 3), (vec![3], 2), (vec![1, 2], 2)]
        );
    }

    #[test]
    fn into_itemsets_drops_counts() {
        let itemsets = sample().into_itemsets();
        assert_eq!(itemsets.len(), 4);
        assert!(itemsets.contains(&Itemset::new(vec![1, 2])));
    }

    #[test]
    fn decode_through_inventory() {
        let (inventory, _) = Inventory::encode(vec![vec!["milk", "bread"]]);
        let mut frequent: FrequentItemsets = FrequentItemsets::new(1, 1);
        frequent.push_level(hashmap! {
            Itemset::new(vec![0]) => 1,
            Itemset::new(vec![1]) => 1,
        });
        frequent.push_level(hashmap! { Itemset::new(vec![0, 1]) => 1 });

        let decoded = frequent.decode(&inventory);
        assert_eq!(decoded.support(&Itemset::new(vec!["bread", "milk"])), Some(1));
        assert_eq!(decoded.min_support(), 1);
        assert!(decoded.contains(&Itemset::new(vec!["milk"])));
    }
}
