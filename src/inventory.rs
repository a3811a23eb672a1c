use std::collections::HashMap;
use std::hash::Hash;

use crate::{
    itemset::Itemset,
    types::{ItemId, Transaction},
};

const APPROX_NUM_UNIQUE_ITEMS: usize = 1024; // arbitrary
const APPROX_NUM_ITEMS_IN_1_TRANSACTION: usize = 16; // arbitrary

/// Dense encoding of caller items into [`ItemId`]s.
///
/// Ids are handed out in order of first appearance, so they index straight
/// into per-item count vectors and bitsets.
#[derive(Debug, Clone)]
pub struct Inventory<T> {
    reverse_lookup: HashMap<T, ItemId>,
    items: Vec<T>,
}

impl<T: Eq + Hash + Clone> Default for Inventory<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Eq + Hash + Clone> Inventory<T> {
    pub fn new() -> Self {
        Self {
            reverse_lookup: HashMap::with_capacity(APPROX_NUM_UNIQUE_ITEMS),
            items: Vec::with_capacity(APPROX_NUM_UNIQUE_ITEMS),
        }
    }

    /// Encode raw transactions, collapsing repeated items within a
    /// transaction. Each returned transaction is sorted by id.
    pub fn encode<I, J>(raw_transactions: I) -> (Self, Vec<Transaction>)
    where
        I: IntoIterator<Item = J>,
        J: IntoIterator<Item = T>,
    {
        let mut inventory = Self::new();
        let mut items = Vec::with_capacity(APPROX_NUM_ITEMS_IN_1_TRANSACTION);

        let transactions = raw_transactions
            .into_iter()
            .map(|raw_transaction| {
                items.clear();
                items.extend(raw_transaction.into_iter().map(|item| inventory.intern(item)));
                items.sort_unstable();
                items.dedup();
                items.to_owned()
            })
            .collect();

        (inventory, transactions)
    }

    /// Id of `item`, assigning the next free one on first sight.
    pub fn intern(&mut self, item: T) -> ItemId {
        if let Some(&item_id) = self.reverse_lookup.get(&item) {
            return item_id;
        }

        let item_id = self.items.len();
        self.reverse_lookup.insert(item.clone(), item_id);
        self.items.push(item);
        item_id
    }

    pub fn id(&self, item: &T) -> Option<ItemId> {
        self.reverse_lookup.get(item).copied()
    }

    pub fn item(&self, item_id: ItemId) -> Option<&T> {
        self.items.get(item_id)
    }

    /// Number of distinct items seen.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Translate an id itemset back into caller items. Every id must have
    /// been issued by this inventory.
    pub(crate) fn decode(&self, itemset: &Itemset<ItemId>) -> Itemset<T>
    where
        T: Ord,
    {
        itemset.map(|&item_id| self.items[item_id].clone())
    }
}
