use std::collections::HashMap;

use bitvec::prelude::*;
use itertools::Itertools;
use rayon::prelude::*;

use crate::{
    config::CountingStrategy,
    itemset::Itemset,
    types::{ItemCounts, ItemId, ItemsetLength, SupportCount, Transaction},
};

/// Counts the support of one level's candidates.
///
/// Every implementation answers a whole batch of same-size candidates at
/// once, so a level costs one pass over the data rather than one per
/// candidate.
pub trait SupportCounter: Send + Sync {
    /// Called before counting candidates of `size` items.
    fn start_level(&mut self, _size: ItemsetLength) {}

    /// Support of each candidate, in input order.
    fn count(&self, candidates: &[Itemset]) -> Vec<SupportCount>;
}

pub fn support_counter(
    strategy: CountingStrategy,
    transactions: Vec<Transaction>,
    num_items: usize,
) -> Box<dyn SupportCounter> {
    match strategy {
        CountingStrategy::Horizontal => Box::new(HorizontalCounter::new(transactions)),
        CountingStrategy::Vertical => Box::new(VerticalCounter::new(&transactions, num_items)),
    }
}

/// Support of a single candidate: the number of transactions containing it.
pub fn support(candidate: &Itemset, transactions: &[Transaction]) -> SupportCount {
    transactions
        .par_iter()
        .filter(|transaction| candidate.is_subset_of(transaction))
        .count() as SupportCount
}

/// 1-itemset counts, indexed by item id.
pub fn count_items(transactions: &[Transaction], num_items: usize) -> ItemCounts {
    transactions
        .par_iter()
        .fold(
            || vec![0; num_items],
            |mut counts: ItemCounts, transaction| {
                for &item in transaction {
                    counts[item] += 1;
                }
                counts
            },
        )
        .reduce(|| vec![0; num_items], add_counts)
}

fn add_counts(mut acc: Vec<SupportCount>, other: Vec<SupportCount>) -> Vec<SupportCount> {
    for (count, other) in acc.iter_mut().zip(other) {
        *count += other;
    }
    acc
}

/// n choose k, saturating. Only used to pick a counting path.
fn binomial(n: usize, k: usize) -> usize {
    if k > n {
        return 0;
    }
    let k = k.min(n - k);
    (0..k).fold(1_usize, |acc, i| acc.saturating_mul(n - i) / (i + 1))
}

/// Row-wise counting: one parallel scan over the transactions per level.
///
/// Each transaction either enumerates its own k-subsets against a hashed
/// index of the candidates, or tests every candidate against itself,
/// whichever touches fewer itemsets.
#[derive(Debug, Clone)]
pub struct HorizontalCounter {
    transactions: Vec<Transaction>,
}

impl HorizontalCounter {
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self { transactions }
    }

    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }
}

impl SupportCounter for HorizontalCounter {
    fn start_level(&mut self, size: ItemsetLength) {
        let before = self.transactions.len();
        self.transactions
            .retain(|transaction| transaction.len() >= size);
        log::trace!(
            "Dropped {} transactions shorter than {}",
            before - self.transactions.len(),
            size
        );
    }

    fn count(&self, candidates: &[Itemset]) -> Vec<SupportCount> {
        let Some(size) = candidates.first().map(Itemset::len) else {
            return vec![];
        };
        debug_assert!(candidates.iter().all(|candidate| candidate.len() == size));

        let num_candidates = candidates.len();
        let index: HashMap<&[ItemId], usize> = candidates
            .iter()
            .enumerate()
            .map(|(i, candidate)| (candidate.items(), i))
            .collect();

        self.transactions
            .par_iter()
            .fold(
                || vec![0; num_candidates],
                |mut counts: Vec<SupportCount>, transaction| {
                    if transaction.len() < size {
                        return counts;
                    }

                    if binomial(transaction.len(), size) <= num_candidates {
                        for combi in transaction.iter().copied().combinations(size) {
                            if let Some(&i) = index.get(combi.as_slice()) {
                                counts[i] += 1;
                            }
                        }
                    } else {
                        for (i, candidate) in candidates.iter().enumerate() {
                            if candidate.is_subset_of(transaction) {
                                counts[i] += 1;
                            }
                        }
                    }
                    counts
                },
            )
            .reduce(|| vec![0; num_candidates], add_counts)
    }
}

/// Column-wise counting over an item -> transaction bitset index.
///
/// The index is built once, with a bitset only for items that occur in the
/// transactions it is given; after projection those are the frequent items.
/// A candidate's support is the size of the intersection of its items'
/// bitsets, walked from the rarest item.
#[derive(Debug, Clone)]
pub struct VerticalCounter {
    tidsets: Vec<Option<BitVec>>,
    supports: ItemCounts,
}

impl VerticalCounter {
    pub fn new(transactions: &[Transaction], num_items: usize) -> Self {
        let mut tidsets: Vec<Option<BitVec>> = vec![None; num_items];
        for (tid, transaction) in transactions.iter().enumerate() {
            for &item in transaction {
                tidsets[item]
                    .get_or_insert_with(|| bitvec![0; transactions.len()])
                    .set(tid, true);
            }
        }
        let supports = tidsets
            .iter()
            .map(|tidset| {
                tidset
                    .as_ref()
                    .map_or(0, |tidset| tidset.count_ones() as SupportCount)
            })
            .collect();

        Self { tidsets, supports }
    }

    fn support_of(&self, candidate: &Itemset) -> SupportCount {
        let Some(&rarest) = candidate.iter().min_by_key(|&&item| self.supports[item]) else {
            return 0;
        };
        // An item without a bitset has support 0, so it is always the rarest.
        let Some(rarest_tids) = &self.tidsets[rarest] else {
            return 0;
        };

        rarest_tids
            .iter_ones()
            .filter(|&tid| {
                candidate.iter().all(|&item| {
                    self.tidsets[item]
                        .as_ref()
                        .is_some_and(|tidset| tidset[tid])
                })
            })
            .count() as SupportCount
    }
}

impl SupportCounter for VerticalCounter {
    fn count(&self, candidates: &[Itemset]) -> Vec<SupportCount> {
        candidates
            .par_iter()
            .map(|candidate| self.support_of(candidate))
            .collect()
    }
}
