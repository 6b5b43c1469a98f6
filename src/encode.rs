use itertools::Itertools;

use crate::types::{Inventory, ItemName, Itemset, RawTransaction, ReverseLookup, Transaction};

/// Intern item labels as dense ids and re-encode every transaction.
///
/// Ids are handed out in ascending label order, so ascending-id order and
/// ascending-label order coincide everywhere downstream. Encoded transactions
/// are sorted and deduplicated; empty transactions stay in place so tids keep
/// their meaning.
pub fn encode_transactions<'l>(
    transactions: &[RawTransaction<'l>],
) -> (Vec<Transaction>, Inventory<'l>) {
    let inventory: Inventory = transactions
        .iter()
        .flat_map(|transaction| transaction.iter().copied())
        .unique()
        .sorted()
        .collect();

    let lookup: ReverseLookup = inventory
        .iter()
        .enumerate()
        .map(|(id, &name)| (name, id))
        .collect();

    let encoded = transactions
        .iter()
        .map(|transaction| {
            let mut items: Transaction = transaction.iter().map(|name| lookup[name]).collect();
            items.sort_unstable();
            items.dedup();
            items
        })
        .collect();

    (encoded, inventory)
}

/// Map an id itemset back to its labels.
pub fn decode_itemset<'l>(itemset: &Itemset, inventory: &Inventory<'l>) -> Vec<ItemName<'l>> {
    itemset.iter().map(|&item| inventory[item]).collect()
}
