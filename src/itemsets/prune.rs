use std::collections::{HashMap, HashSet};

use rayon::prelude::*;

use crate::{itemset::Itemset, types::ItemId};

/// Membership test against the frequent itemsets of the previous level.
pub trait FrequentLookup: Sync {
    fn is_frequent(&self, items: &[ItemId]) -> bool;
}

impl FrequentLookup for HashSet<Itemset> {
    fn is_frequent(&self, items: &[ItemId]) -> bool {
        self.contains(items)
    }
}

impl<V: Sync> FrequentLookup for HashMap<Itemset, V> {
    fn is_frequent(&self, items: &[ItemId]) -> bool {
        self.contains_key(items)
    }
}

/// True if some subset of `candidate` one item smaller is not in
/// `frequent_prior`. Stops at the first missing subset.
pub fn is_prunable<F>(candidate: &Itemset, frequent_prior: &F) -> bool
where
    F: FrequentLookup + ?Sized,
{
    let items = candidate.items();
    if items.len() < 2 {
        return false;
    }

    let mut subset = Vec::with_capacity(items.len() - 1);
    (0..items.len()).any(|skip| {
        subset.clear();
        subset.extend_from_slice(&items[..skip]);
        subset.extend_from_slice(&items[skip + 1..]);
        !frequent_prior.is_frequent(&subset)
    })
}

/// Keep only candidates whose every (k-1)-subset is frequent.
pub fn prune<F>(candidates: Vec<Itemset>, frequent_prior: &F) -> Vec<Itemset>
where
    F: FrequentLookup + ?Sized,
{
    candidates
        .into_par_iter()
        .filter(|candidate| !is_prunable(candidate, frequent_prior))
        .collect()
}
