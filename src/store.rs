use std::collections::HashMap;

use ndarray::ArrayView2;
use tracing::debug;

use crate::error::EclatError;
use crate::tidset::TidSet;
use crate::types::{ItemId, Transaction};

/// Vertical transaction index: every item that clears the support threshold,
/// paired with the set of transaction ids containing it, in ascending item
/// order.
///
/// The absolute threshold is computed once here and carried along so the
/// miner prunes with exactly the count the seeds were filtered with.
#[derive(Debug, Clone)]
pub struct TransactionStore {
    seeds: Vec<(ItemId, TidSet)>,
    num_transactions: usize,
    min_support_count: usize,
}

impl TransactionStore {
    /// Build the index from id-encoded transactions.
    ///
    /// Every transaction counts toward the total, including empty ones; they
    /// just contribute no memberships. Items seen in fewer than
    /// `ceil(min_support * n)` transactions are dropped.
    pub fn from_transactions(
        transactions: &[Transaction],
        min_support: f32,
    ) -> Result<Self, EclatError> {
        validate_min_support(min_support)?;

        let num_transactions = transactions.len();
        let min_support_count = support_count_threshold(min_support, num_transactions);

        let mut tidsets: HashMap<ItemId, TidSet> = HashMap::new();
        for (tid, transaction) in transactions.iter().enumerate() {
            for &item in transaction {
                tidsets
                    .entry(item)
                    .or_insert_with(|| TidSet::empty(num_transactions))
                    .insert(tid);
            }
        }

        let num_items = tidsets.len();
        let mut seeds: Vec<(ItemId, TidSet)> = tidsets
            .into_iter()
            .filter(|(_, tids)| tids.support_count() >= min_support_count)
            .collect();
        seeds.sort_unstable_by_key(|&(item, _)| item);

        debug!(
            num_transactions,
            num_items,
            frequent_items = seeds.len(),
            min_support_count,
            "built vertical index"
        );

        Ok(Self {
            seeds,
            num_transactions,
            min_support_count,
        })
    }

    /// Build the index from a 0/1 matrix with one row per transaction and one
    /// column per item; the column index is the item id. Any non-zero cell
    /// counts as membership.
    pub fn from_dense(matrix: ArrayView2<i32>, min_support: f32) -> Result<Self, EclatError> {
        validate_min_support(min_support)?;

        let num_transactions = matrix.nrows();
        let min_support_count = support_count_threshold(min_support, num_transactions);

        // With zero rows the count threshold is zero and every column would
        // qualify as a seed; return the empty index instead.
        if num_transactions == 0 {
            return Ok(Self {
                seeds: Vec::new(),
                num_transactions,
                min_support_count,
            });
        }

        let mut tidsets: Vec<TidSet> = (0..matrix.ncols())
            .map(|_| TidSet::empty(num_transactions))
            .collect();
        for (tid, row) in matrix.rows().into_iter().enumerate() {
            for (item, &value) in row.iter().enumerate() {
                if value != 0 {
                    tidsets[item].insert(tid);
                }
            }
        }

        let num_items = tidsets.len();
        let seeds: Vec<(ItemId, TidSet)> = tidsets
            .into_iter()
            .enumerate()
            .filter(|(_, tids)| tids.support_count() >= min_support_count)
            .collect();

        debug!(
            num_transactions,
            num_items,
            frequent_items = seeds.len(),
            min_support_count,
            "built vertical index"
        );

        Ok(Self {
            seeds,
            num_transactions,
            min_support_count,
        })
    }

    /// Frequent singletons in ascending item order.
    pub fn seeds(&self) -> &[(ItemId, TidSet)] {
        &self.seeds
    }

    pub fn num_seed_items(&self) -> usize {
        self.seeds.len()
    }

    pub fn num_transactions(&self) -> usize {
        self.num_transactions
    }

    /// Absolute support threshold the seeds were filtered with.
    pub fn min_support_count(&self) -> usize {
        self.min_support_count
    }

    pub fn is_empty(&self) -> bool {
        self.seeds.is_empty()
    }
}

fn validate_min_support(min_support: f32) -> Result<(), EclatError> {
    if min_support > 0.0 && min_support <= 1.0 {
        Ok(())
    } else {
        Err(EclatError::InvalidMinSupport(min_support))
    }
}

/// Ceiling conversion of the support fraction to an absolute count.
fn support_count_threshold(min_support: f32, num_transactions: usize) -> usize {
    (min_support * num_transactions as f32).ceil() as usize
}
