use std::collections::{HashMap, HashSet};

use itertools::Itertools;

use crate::{
    itemset::Itemset,
    types::{ItemId, ItemsetLength},
};

/// Join step: every union of two frequent itemsets that has exactly
/// `target_size` items.
///
/// Two (k-1)-itemsets union to k items exactly when they share k-2 of
/// them. Each input itemset is filed under every (k-2)-item core it
/// contains, keyed to the item left over, and all pairs within one core are
/// joined. Itemsets of any other size are ignored. A union reachable from
/// several pairs is emitted once; the output is sorted.
pub fn generate_candidates<'a, I>(frequent: I, target_size: ItemsetLength) -> Vec<Itemset>
where
    I: IntoIterator<Item = &'a Itemset>,
{
    if target_size < 2 {
        return vec![];
    }

    let mut cores: HashMap<Vec<ItemId>, Vec<ItemId>> = HashMap::new();
    for itemset in frequent
        .into_iter()
        .filter(|itemset| itemset.len() == target_size - 1)
    {
        let items = itemset.items();
        for (skip, &tail) in items.iter().enumerate() {
            let core: Vec<ItemId> = items[..skip]
                .iter()
                .chain(&items[skip + 1..])
                .copied()
                .collect();
            cores.entry(core).or_default().push(tail);
        }
    }

    let mut candidates: HashSet<Itemset> = HashSet::new();
    for (core, tails) in &cores {
        for (&a, &b) in tails.iter().tuple_combinations() {
            candidates.insert(Itemset::new(core.iter().copied().chain([a, b])));
        }
    }

    let mut candidates: Vec<Itemset> = candidates.into_iter().collect();
    candidates.sort_unstable();
    candidates
}

#[cfg(test)]
mod test {
    use super::*;

    fn itemsets(raw: Vec<Vec<ItemId>>) -> Vec<Itemset> {
        raw.into_iter().map(Itemset::new).collect()
    }

    #[test]
    fn test_join_step() {
        let frequent = itemsets(vec![
            vec![1, 2, 3],
            vec![1, 2, 4],
            vec![1, 3, 4],
            vec![1, 3, 5],
            vec![2, 3, 4],
        ]);
        let y = generate_candidates(&frequent, 4);

        // {1,2,3,5} and the like are joined too; pruning removes them later.
        assert!(y.contains(&Itemset::new(vec![1, 2, 3, 4])));
        assert!(y.contains(&Itemset::new(vec![1, 3, 4, 5])));
        assert!(y.contains(&Itemset::new(vec![1, 2, 3, 5])));
        assert!(y.iter().all(|candidate| candidate.len() == 4));
    }

    #[test]
    fn test_join_step_dedup() {
        // {1,2,3,4} is reachable from six different pairs.
        let frequent = itemsets(vec![vec![1, 2, 3], vec![1, 2, 4], vec![1, 3, 4], vec![2, 3, 4]]);
        let y = generate_candidates(&frequent, 4);
        assert_eq!(y, itemsets(vec![vec![1, 2, 3, 4]]));
    }

    #[test]
    fn test_join_step_pairs() {
        let frequent = itemsets(vec![vec![1, 2], vec![2, 3], vec![1, 3], vec![1, 4], vec![3, 4]]);
        let y = generate_candidates(&frequent, 3);
        assert_eq!(
            y,
            itemsets(vec![
                vec![1, 2, 3],
                vec![1, 2, 4],
                vec![1, 3, 4],
                vec![2, 3, 4],
            ])
        );
    }

    #[test]
    fn singletons_join_into_all_pairs() {
        let frequent = itemsets(vec![vec![10], vec![13], vec![14]]);
        let y = generate_candidates(&frequent, 2);
        assert_eq!(y, itemsets(vec![vec![10, 13], vec![10, 14], vec![13, 14]]));
    }

    #[test]
    fn disjoint_itemsets_do_not_join() {
        let frequent = itemsets(vec![vec![10, 11], vec![13, 14]]);
        assert!(generate_candidates(&frequent, 3).is_empty());
    }

    #[test]
    fn other_sizes_are_ignored() {
        let frequent = itemsets(vec![vec![1], vec![2], vec![1, 3]]);
        assert_eq!(generate_candidates(&frequent, 2), itemsets(vec![vec![1, 2]]));
    }

    #[test]
    fn empty_input() {
        assert!(generate_candidates(&Vec::<Itemset>::new(), 2).is_empty());
        assert!(generate_candidates(&itemsets(vec![vec![1]]), 2).is_empty());
    }
}
