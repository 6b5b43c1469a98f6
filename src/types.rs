use std::collections::HashMap;

pub type ItemId = usize;
pub type ItemName<'l> = &'l str;
pub type Itemset = Vec<ItemId>;

/// Index of a transaction in the order it was handed to the store.
pub type Tid = usize;

pub type RawTransaction<'l> = Vec<ItemName<'l>>;
pub type Transaction = Vec<ItemId>;

pub type ReverseLookup<'l> = HashMap<ItemName<'l>, ItemId>;
/// Decode table; the position of a name is its `ItemId`.
pub type Inventory<'l> = Vec<ItemName<'l>>;
