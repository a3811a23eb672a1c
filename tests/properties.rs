//! Properties of `mine` checked against exhaustive enumeration on small
//! universes.

use std::collections::HashSet;

use apriori::{mine, CountingStrategy, Itemset, Miner, MinerConfig};
use proptest::prelude::*;

const UNIVERSE: u8 = 7;

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<u8>>> {
    prop::collection::vec(prop::collection::vec(0..UNIVERSE, 0..6), 0..24)
}

fn support(itemset: &Itemset<u8>, transactions: &[Vec<u8>]) -> u32 {
    transactions
        .iter()
        .filter(|transaction| itemset.iter().all(|item| transaction.contains(item)))
        .count() as u32
}

/// Every non-empty subset of the universe with support >= `min_support`.
fn brute_force(transactions: &[Vec<u8>], min_support: u32) -> HashSet<Itemset<u8>> {
    (1u32..(1 << UNIVERSE))
        .map(|mask| Itemset::new((0..UNIVERSE).filter(|&item| mask & (1 << item) != 0)))
        .filter(|itemset| support(itemset, transactions) >= min_support)
        .collect()
}

proptest! {
    #[test]
    fn matches_exhaustive_enumeration(
        transactions in transactions_strategy(),
        min_support in 1u32..5,
    ) {
        let frequent = mine(transactions.clone(), min_support).unwrap();
        prop_assert_eq!(frequent.into_itemsets(), brute_force(&transactions, min_support));
    }

    #[test]
    fn supports_are_exact_and_meet_threshold(
        transactions in transactions_strategy(),
        min_support in 1u32..5,
    ) {
        let frequent = mine(transactions.clone(), min_support).unwrap();
        for (itemset, count) in frequent.iter() {
            prop_assert_eq!(count, support(itemset, &transactions));
            prop_assert!(count >= min_support);
        }
    }

    #[test]
    fn closed_under_subsets(
        transactions in transactions_strategy(),
        min_support in 1u32..5,
    ) {
        let frequent = mine(transactions, min_support).unwrap();
        for (itemset, _) in frequent.iter().filter(|(itemset, _)| itemset.len() >= 2) {
            for subset in itemset.subsets_minus_one() {
                prop_assert!(frequent.contains(&subset));
            }
        }
    }

    #[test]
    fn deterministic_and_deduplicated(
        transactions in transactions_strategy(),
        min_support in 1u32..5,
    ) {
        let first = mine(transactions.clone(), min_support).unwrap();
        let second = mine(transactions, min_support).unwrap();

        let listed: Vec<_> = first.iter().map(|(itemset, _)| itemset.clone()).collect();
        let unique: HashSet<_> = listed.iter().cloned().collect();
        prop_assert_eq!(listed.len(), unique.len());
        prop_assert_eq!(first.into_itemsets(), second.into_itemsets());
    }

    #[test]
    fn raising_threshold_never_grows_result(
        transactions in transactions_strategy(),
        min_support in 1u32..5,
    ) {
        let lower = mine(transactions.clone(), min_support).unwrap().into_itemsets();
        let higher = mine(transactions, min_support + 1).unwrap().into_itemsets();
        prop_assert!(higher.len() <= lower.len());
        prop_assert!(higher.is_subset(&lower));
    }

    #[test]
    fn counting_strategies_agree(
        transactions in transactions_strategy(),
        min_support in 1u32..4,
    ) {
        let horizontal = Miner::new(MinerConfig::new(min_support))
            .run(transactions.clone())
            .unwrap();
        let vertical = Miner::new(
            MinerConfig::new(min_support).with_counting(CountingStrategy::Vertical),
        )
        .run(transactions)
        .unwrap();

        let horizontal: Vec<_> = horizontal.sorted().into_iter().map(|(i, c)| (i.clone(), c)).collect();
        let vertical: Vec<_> = vertical.sorted().into_iter().map(|(i, c)| (i.clone(), c)).collect();
        prop_assert_eq!(horizontal, vertical);
    }
}
