use std::fmt::{self, Display, Formatter};

use itertools::Itertools;
use rayon::prelude::*;
use tracing::debug;

use crate::store::TransactionStore;
use crate::tidset::TidSet;
use crate::types::Itemset;

/// A frequent itemset together with its support.
#[derive(Debug, Clone, PartialEq)]
pub struct FrequentItemset {
    /// Item ids in ascending order.
    pub items: Itemset,
    /// Number of transactions containing every item of the set.
    pub count: usize,
    /// `count` relative to the total transaction count.
    pub support: f32,
}

impl Display for FrequentItemset {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{{}}} support={:.4}",
            self.items.iter().join(", "),
            self.support
        )
    }
}

/// Search options. The defaults report every frequent itemset.
#[derive(Debug, Clone)]
pub struct MinerConfig {
    /// Largest itemset size to grow to; `None` leaves growth unbounded.
    pub max_len: Option<usize>,
    /// Smallest itemset size to report. Growth is unaffected, only output.
    pub min_len: usize,
}

impl Default for MinerConfig {
    fn default() -> Self {
        Self {
            max_len: None,
            min_len: 1,
        }
    }
}

/// Depth-first search over prefix equivalence classes of a vertical index.
///
/// Candidates are only ever formed by extending an itemset with a larger
/// item id from its own class, so every itemset is visited at most once and
/// the tid set of each candidate is one intersection away from its parents.
#[derive(Debug, Clone, Default)]
pub struct ItemsetMiner {
    config: MinerConfig,
}

/// A discovered itemset and its tid set. The arena only ever grows and no
/// entry is touched after it is pushed, so arena indices stay valid for the
/// whole search.
struct Node {
    items: Itemset,
    tids: TidSet,
}

/// Pending equivalence class: arena indices of itemsets sharing all but their
/// last item, with a cursor over the next member to expand.
struct Group {
    members: Vec<usize>,
    cursor: usize,
}

impl ItemsetMiner {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_config(config: MinerConfig) -> Self {
        Self { config }
    }

    /// Mine every frequent itemset reachable from the store's seeds.
    ///
    /// Records are in discovery order: a seed singleton, then everything
    /// grown from it depth first, then the next seed. Two runs over the same
    /// store produce identical output.
    pub fn mine(&self, store: &TransactionStore) -> Vec<FrequentItemset> {
        let records: Vec<FrequentItemset> = (0..store.num_seed_items())
            .flat_map(|seed| self.mine_subtree(store, seed))
            .collect();
        debug!(records = records.len(), "eclat search finished");
        records
    }

    /// Same output as [`mine`](Self::mine), with each seed subtree running on
    /// a rayon worker.
    ///
    /// Subtrees of distinct seeds never share candidates and only read the
    /// store, so workers need no coordination; stitching the per-seed results
    /// back together in seed order restores the sequential record order.
    pub fn mine_parallel(&self, store: &TransactionStore) -> Vec<FrequentItemset> {
        let per_seed: Vec<Vec<FrequentItemset>> = (0..store.num_seed_items())
            .into_par_iter()
            .map(|seed| self.mine_subtree(store, seed))
            .collect();
        let records: Vec<FrequentItemset> = per_seed.into_iter().flatten().collect();
        debug!(records = records.len(), "parallel eclat search finished");
        records
    }

    /// One seed's subtree: the singleton itself, then the class formed by
    /// pairing it with every later seed, expanded depth first.
    fn mine_subtree(&self, store: &TransactionStore, seed: usize) -> Vec<FrequentItemset> {
        let seeds = store.seeds();
        let min_count = store.min_support_count();
        let num_transactions = store.num_transactions();

        let (item, tids) = &seeds[seed];
        let mut records = Vec::new();
        self.emit(&mut records, vec![*item], tids.support_count(), num_transactions);

        if self.config.max_len.map_or(false, |cap| cap <= 1) {
            return records;
        }

        let mut arena: Vec<Node> = Vec::new();
        let mut members: Vec<usize> = Vec::new();
        for (other, other_tids) in &seeds[seed + 1..] {
            let joined = tids.intersect(other_tids);
            if joined.support_count() >= min_count {
                arena.push(Node {
                    items: vec![*item, *other],
                    tids: joined,
                });
                members.push(arena.len() - 1);
            }
        }
        if members.is_empty() {
            return records;
        }

        let mut stack = vec![Group { members, cursor: 0 }];
        while let Some(group) = stack.last_mut() {
            if group.cursor >= group.members.len() {
                stack.pop();
                continue;
            }
            let current = group.members[group.cursor];
            group.cursor += 1;

            self.emit(
                &mut records,
                arena[current].items.clone(),
                arena[current].tids.support_count(),
                num_transactions,
            );

            let len = arena[current].items.len();
            if self.config.max_len.map_or(false, |cap| len >= cap) {
                continue;
            }

            // Extend by the tail of every later member of the same class.
            // Members are in ascending tail order, so candidates stay sorted
            // and no itemset can be formed twice.
            let mut children: Vec<usize> = Vec::new();
            for &partner in &group.members[group.cursor..] {
                let joined = arena[current].tids.intersect(&arena[partner].tids);
                if joined.support_count() >= min_count {
                    let mut items = arena[current].items.clone();
                    items.extend_from_slice(&arena[partner].items[len - 1..]);
                    arena.push(Node {
                        items,
                        tids: joined,
                    });
                    children.push(arena.len() - 1);
                }
            }
            if !children.is_empty() {
                stack.push(Group {
                    members: children,
                    cursor: 0,
                });
            }
        }

        records
    }

    fn emit(
        &self,
        records: &mut Vec<FrequentItemset>,
        items: Itemset,
        count: usize,
        num_transactions: usize,
    ) {
        if items.len() >= self.config.min_len {
            records.push(FrequentItemset {
                support: count as f32 / num_transactions as f32,
                items,
                count,
            });
        }
    }
}
