//! ECLAT frequent-itemset mining over vertical transaction-id sets.
//!
//! Transactions are converted once into an item to tid-set index
//! ([`TransactionStore`]); from then on the support of any candidate is the
//! cardinality of a tid-set intersection and the transactions are never
//! scanned again ([`ItemsetMiner`]).
//!
//! ```
//! use eclat::{decode_itemset, mine_frequent_itemsets};
//!
//! let transactions = vec![
//!     vec!["bread", "milk"],
//!     vec!["bread", "milk", "cereal"],
//!     vec!["bread"],
//!     vec!["milk", "cereal"],
//! ];
//! let (records, inventory) = mine_frequent_itemsets(&transactions, 0.5).unwrap();
//!
//! let decoded: Vec<_> = records
//!     .iter()
//!     .map(|record| (decode_itemset(&record.items, &inventory), record.count))
//!     .collect();
//! assert!(decoded.contains(&(vec!["bread", "milk"], 2)));
//! ```

pub mod encode;
pub mod error;
pub mod miner;
pub mod store;
pub mod tidset;
pub mod types;
#[cfg(feature = "python")]
mod wrapper;

pub use encode::{decode_itemset, encode_transactions};
pub use error::EclatError;
pub use miner::{FrequentItemset, ItemsetMiner, MinerConfig};
pub use store::TransactionStore;
pub use tidset::TidSet;

use ndarray::ArrayView2;
use types::{Inventory, RawTransaction};

/// Mine every frequent itemset from labeled transactions.
///
/// Records come back in discovery order together with the [`Inventory`]
/// mapping item ids back to labels.
pub fn mine_frequent_itemsets<'l>(
    transactions: &[RawTransaction<'l>],
    min_support: f32,
) -> Result<(Vec<FrequentItemset>, Inventory<'l>), EclatError> {
    let (encoded, inventory) = encode_transactions(transactions);
    let store = TransactionStore::from_transactions(&encoded, min_support)?;
    Ok((ItemsetMiner::new().mine(&store), inventory))
}

/// Mine every frequent itemset from a 0/1 matrix with one row per transaction
/// and one column per item. Itemsets are reported as column indices.
pub fn mine_frequent_itemsets_dense(
    matrix: ArrayView2<i32>,
    min_support: f32,
) -> Result<Vec<FrequentItemset>, EclatError> {
    let store = TransactionStore::from_dense(matrix, min_support)?;
    Ok(ItemsetMiner::new().mine(&store))
}
