//! Frequent itemset mining with the level-wise Apriori algorithm.
//!
//! ```
//! use apriori::{mine, Itemset};
//!
//! let transactions = vec![vec![1, 2], vec![1, 2, 3], vec![2, 3]];
//! let frequent = mine(transactions, 2).unwrap();
//!
//! assert!(frequent.contains(&Itemset::new(vec![1, 2])));
//! assert!(!frequent.contains(&Itemset::new(vec![1, 2, 3])));
//! ```

use std::hash::Hash;

pub mod config;
pub mod error;
pub mod frequent;
pub mod inventory;
pub mod itemset;
pub mod itemsets;
pub mod loader;
pub mod miner;
pub mod report;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use config::{min_support_from_int, parse_min_support, CountingStrategy, MinerConfig};
pub use error::{AprioriError, Result};
pub use frequent::FrequentItemsets;
pub use inventory::Inventory;
pub use itemset::Itemset;
pub use miner::{CancellationToken, Miner};
pub use report::{OutputFormat, Report};

/// Every itemset contained in at least `min_support` transactions.
///
/// `min_support` is an absolute transaction count and must be at least 1.
/// An empty transaction list gives an empty result.
pub fn mine<T, I, J>(transactions: I, min_support: u32) -> Result<FrequentItemsets<T>>
where
    T: Eq + Hash + Ord + Clone,
    I: IntoIterator<Item = J>,
    J: IntoIterator<Item = T>,
{
    Miner::new(MinerConfig::new(min_support)).run(transactions)
}
