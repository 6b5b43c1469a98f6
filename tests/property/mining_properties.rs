//! Property tests pinning the mining invariants: reported supports match a
//! horizontal re-scan, output is duplicate free and anti-monotone, and every
//! execution strategy produces the same records.

use std::collections::HashSet;

use itertools::Itertools;
use ndarray::Array2;
use proptest::prelude::*;

use eclat::{ItemsetMiner, TransactionStore};

const NUM_ITEMS: usize = 8;

fn transactions_strategy() -> impl Strategy<Value = Vec<Vec<usize>>> {
    prop::collection::vec(prop::collection::vec(0..NUM_ITEMS, 0..5), 0..12)
}

fn min_support_strategy() -> impl Strategy<Value = f32> {
    (1..=100u32).prop_map(|percent| percent as f32 / 100.0)
}

/// Support of an itemset by brute force over the horizontal transactions.
fn horizontal_count(transactions: &[Vec<usize>], items: &[usize]) -> usize {
    transactions
        .iter()
        .filter(|transaction| items.iter().all(|item| transaction.contains(item)))
        .count()
}

fn to_matrix(transactions: &[Vec<usize>]) -> Array2<i32> {
    let mut matrix = Array2::zeros((transactions.len(), NUM_ITEMS));
    for (tid, transaction) in transactions.iter().enumerate() {
        for &item in transaction {
            matrix[[tid, item]] = 1;
        }
    }
    matrix
}

proptest! {
    #[test]
    fn reported_supports_match_a_horizontal_scan(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let store = TransactionStore::from_transactions(&transactions, min_support).unwrap();
        let records = ItemsetMiner::new().mine(&store);

        for record in &records {
            prop_assert_eq!(record.count, horizontal_count(&transactions, &record.items));
            prop_assert!(record.count >= store.min_support_count());
        }
    }

    #[test]
    fn no_itemset_is_emitted_twice(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let store = TransactionStore::from_transactions(&transactions, min_support).unwrap();
        let records = ItemsetMiner::new().mine(&store);

        let unique: HashSet<&[usize]> =
            records.iter().map(|record| record.items.as_slice()).collect();
        prop_assert_eq!(unique.len(), records.len());
    }

    #[test]
    fn itemsets_are_sorted_and_duplicate_free(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let store = TransactionStore::from_transactions(&transactions, min_support).unwrap();

        for record in ItemsetMiner::new().mine(&store) {
            let sorted: Vec<_> = record.items.iter().copied().unique().sorted().collect();
            prop_assert_eq!(&record.items, &sorted);
        }
    }

    #[test]
    fn every_sub_itemset_of_a_record_is_also_a_record(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let store = TransactionStore::from_transactions(&transactions, min_support).unwrap();
        let records = ItemsetMiner::new().mine(&store);

        let found: HashSet<Vec<usize>> =
            records.iter().map(|record| record.items.clone()).collect();
        for record in &records {
            if record.items.len() < 2 {
                continue;
            }
            for subset in record
                .items
                .iter()
                .copied()
                .combinations(record.items.len() - 1)
            {
                prop_assert!(found.contains(&subset));
            }
        }
    }

    #[test]
    fn lowering_the_threshold_loses_no_itemsets(
        transactions in transactions_strategy(),
        (a, b) in (min_support_strategy(), min_support_strategy()),
    ) {
        let (lo, hi) = if a <= b { (a, b) } else { (b, a) };

        let lo_store = TransactionStore::from_transactions(&transactions, lo).unwrap();
        let hi_store = TransactionStore::from_transactions(&transactions, hi).unwrap();
        let miner = ItemsetMiner::new();

        let lo_found: HashSet<Vec<usize>> = miner
            .mine(&lo_store)
            .into_iter()
            .map(|record| record.items)
            .collect();
        for record in miner.mine(&hi_store) {
            prop_assert!(lo_found.contains(&record.items));
        }
    }

    #[test]
    fn mining_is_deterministic(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let miner = ItemsetMiner::new();
        let first = TransactionStore::from_transactions(&transactions, min_support).unwrap();
        let second = TransactionStore::from_transactions(&transactions, min_support).unwrap();

        prop_assert_eq!(miner.mine(&first), miner.mine(&second));
    }

    #[test]
    fn parallel_mining_matches_sequential(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let store = TransactionStore::from_transactions(&transactions, min_support).unwrap();
        let miner = ItemsetMiner::new();

        prop_assert_eq!(miner.mine_parallel(&store), miner.mine(&store));
    }

    #[test]
    fn dense_input_matches_id_transactions(
        transactions in transactions_strategy(),
        min_support in min_support_strategy(),
    ) {
        let matrix = to_matrix(&transactions);

        let from_dense = TransactionStore::from_dense(matrix.view(), min_support).unwrap();
        let from_tx = TransactionStore::from_transactions(&transactions, min_support).unwrap();
        let miner = ItemsetMiner::new();

        prop_assert_eq!(miner.mine(&from_dense), miner.mine(&from_tx));
    }
}
