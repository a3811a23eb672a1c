//! The level-wise mining loop.
//!
//! Level 1 counts items directly. Every later level joins the previous
//! level's frequent itemsets into candidates, drops candidates with an
//! infrequent subset, and batch-counts the survivors. The loop stops at the
//! first empty level, or at `max_len`.

use std::hash::Hash;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use log::{debug, info, trace};

use crate::{
    config::MinerConfig,
    error::{AprioriError, Result},
    frequent::FrequentItemsets,
    inventory::Inventory,
    itemset::Itemset,
    itemsets::{count::count_items, generate_candidates, prune, support_counter},
    types::{ItemCounts, ItemsetCounts, ItemsetLength, SupportCount, Transaction},
};

/// Shared flag for stopping a run from another thread.
///
/// The miner only looks at it between levels, so a cancelled run never
/// leaves a level half counted.
#[derive(Debug, Clone, Default)]
pub struct CancellationToken(Arc<AtomicBool>);

impl CancellationToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

#[derive(Debug, Clone, Default)]
pub struct Miner {
    config: MinerConfig,
    cancellation: Option<CancellationToken>,
}

impl Miner {
    pub fn new(config: MinerConfig) -> Self {
        Self {
            config,
            cancellation: None,
        }
    }

    pub fn with_cancellation(mut self, token: CancellationToken) -> Self {
        self.cancellation = Some(token);
        self
    }

    pub fn config(&self) -> &MinerConfig {
        &self.config
    }

    /// Mine all frequent itemsets of `transactions`.
    ///
    /// The config is validated before the transactions are touched.
    /// Repeated items inside a transaction count once.
    pub fn run<T, I, J>(&self, transactions: I) -> Result<FrequentItemsets<T>>
    where
        T: Eq + Hash + Ord + Clone,
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        self.config.validate()?;

        let (inventory, transactions) = Inventory::encode(transactions);
        let num_items = inventory.len();

        let frequent = match self.config.num_threads {
            Some(num_threads) => rayon::ThreadPoolBuilder::new()
                .num_threads(num_threads)
                .build()?
                .install(|| self.mine_encoded(transactions, num_items, &mut |_| {}))?,
            None => self.mine_encoded(transactions, num_items, &mut |_| {})?,
        };

        Ok(frequent.decode(&inventory))
    }

    fn check_cancelled(&self, completed_level: ItemsetLength) -> Result<()> {
        match &self.cancellation {
            Some(token) if token.is_cancelled() => {
                info!("Cancelled after level {}", completed_level);
                Err(AprioriError::Cancelled {
                    level: completed_level,
                })
            }
            _ => Ok(()),
        }
    }

    /// `on_level` sees the size of every level as soon as it is complete.
    fn mine_encoded(
        &self,
        transactions: Vec<Transaction>,
        num_items: usize,
        on_level: &mut dyn FnMut(ItemsetLength),
    ) -> Result<FrequentItemsets> {
        let min_support = self.config.min_support;
        let max_len = self.config.max_len.unwrap_or(usize::MAX);
        let mut frequent = FrequentItemsets::new(min_support, transactions.len());

        info!(
            "Mining {} transactions over {} items, min_support {}",
            transactions.len(),
            num_items,
            min_support
        );

        self.check_cancelled(0)?;

        // 1-itemset
        let item_counts = count_items(&transactions, num_items);
        let frequent_1_itemsets: ItemsetCounts = item_counts
            .iter()
            .enumerate()
            .filter(|&(_, &count)| count >= min_support)
            .map(|(item, &count)| (Itemset::singleton(item), count))
            .collect();
        debug!(
            "Level 1: {} of {} items frequent",
            frequent_1_itemsets.len(),
            num_items
        );
        if frequent_1_itemsets.is_empty() {
            return Ok(frequent);
        }
        frequent.push_level(frequent_1_itemsets);
        on_level(1);

        let transactions = project_onto_frequent(transactions, &item_counts, min_support);
        let mut counter = support_counter(self.config.counting, transactions, num_items);

        // k-itemset, k >= 2
        let mut size = 2;
        while size <= max_len {
            self.check_cancelled(size - 1)?;

            let Some(prior) = frequent.last_level() else {
                break;
            };
            let candidates = generate_candidates(prior.keys(), size);
            let num_generated = candidates.len();
            let candidates = prune(candidates, prior);
            let num_survivors = candidates.len();

            counter.start_level(size);
            let counts = counter.count(&candidates);
            let level: ItemsetCounts = candidates
                .into_iter()
                .zip(counts)
                .filter(|&(_, count)| count >= min_support)
                .collect();

            debug!(
                "Level {}: {} candidates, {} after pruning, {} frequent",
                size,
                num_generated,
                num_survivors,
                level.len()
            );

            if level.is_empty() {
                break;
            }
            frequent.push_level(level);
            on_level(size);
            size += 1;
        }

        info!(
            "Found {} frequent itemsets, largest of size {}",
            frequent.len(),
            frequent.max_len()
        );
        Ok(frequent)
    }
}

/// Drop infrequent items from every transaction, then transactions left
/// with fewer than two items. Neither can support a candidate of size 2+.
fn project_onto_frequent(
    transactions: Vec<Transaction>,
    item_counts: &ItemCounts,
    min_support: SupportCount,
) -> Vec<Transaction> {
    let before = transactions.len();
    let transactions: Vec<Transaction> = transactions
        .into_iter()
        .map(|mut transaction| {
            transaction.retain(|&item| item_counts[item] >= min_support);
            transaction
        })
        .filter(|transaction| transaction.len() >= 2)
        .collect();
    trace!(
        "Projected transactions onto frequent items, {} of {} kept",
        transactions.len(),
        before
    );
    transactions
}
