use bitvec::prelude::*;

use crate::types::Tid;

/// Set of transaction ids over a fixed universe `0..num_transactions`.
///
/// One `TidSet` per candidate itemset is the whole vertical representation:
/// its cardinality is the itemset's absolute support, and the tid set of a
/// union of itemsets is the intersection of their tid sets.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TidSet {
    bits: BitVec,
}

impl TidSet {
    /// Empty set over a universe of `num_transactions` ids.
    pub fn empty(num_transactions: usize) -> Self {
        Self {
            bits: BitVec::repeat(false, num_transactions),
        }
    }

    /// Set holding the given ids. Ids must lie inside the universe.
    pub fn from_tids<I>(num_transactions: usize, tids: I) -> Self
    where
        I: IntoIterator<Item = Tid>,
    {
        let mut set = Self::empty(num_transactions);
        for tid in tids {
            set.insert(tid);
        }
        set
    }

    pub fn insert(&mut self, tid: Tid) {
        self.bits.set(tid, true);
    }

    pub fn contains(&self, tid: Tid) -> bool {
        self.bits.get(tid).map_or(false, |bit| *bit)
    }

    /// Absolute support: the number of transactions in the set.
    pub fn support_count(&self) -> usize {
        self.bits.count_ones()
    }

    pub fn is_empty(&self) -> bool {
        self.bits.not_any()
    }

    /// Ids present in both sets. Both operands must share one universe.
    pub fn intersect(&self, other: &TidSet) -> TidSet {
        let mut bits = self.bits.clone();
        bits &= other.bits.as_bitslice();
        TidSet { bits }
    }

    /// Transaction ids in ascending order.
    pub fn iter(&self) -> impl Iterator<Item = Tid> + '_ {
        self.bits.iter_ones()
    }
}
