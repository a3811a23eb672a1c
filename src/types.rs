use std::collections::HashMap;

use crate::itemset::Itemset;

pub type ItemId = usize;
pub type SupportCount = u32;

/// Sorted, deduplicated item ids of one transaction.
pub type Transaction = Vec<ItemId>;

pub type ItemCounts = Vec<SupportCount>;
pub type ItemsetCounts<T = ItemId> = HashMap<Itemset<T>, SupportCount>;

pub type ItemsetLength = usize;
