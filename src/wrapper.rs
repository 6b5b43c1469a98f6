use numpy::PyReadonlyArray2;
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::encode::decode_itemset;
use crate::error::EclatError;
use crate::types::RawTransaction;

impl From<EclatError> for PyErr {
    fn from(err: EclatError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

/// Mine labeled transactions. Returns `(items, count, support)` tuples in
/// discovery order, with items decoded back to their labels.
#[pyfunction]
fn mine(
    transactions: Vec<Vec<String>>,
    min_support: f32,
) -> PyResult<Vec<(Vec<String>, usize, f32)>> {
    let views: Vec<RawTransaction> = transactions
        .iter()
        .map(|transaction| transaction.iter().map(String::as_str).collect())
        .collect();

    let (records, inventory) = crate::mine_frequent_itemsets(&views, min_support)?;

    Ok(records
        .into_iter()
        .map(|record| {
            let labels = decode_itemset(&record.items, &inventory)
                .into_iter()
                .map(str::to_owned)
                .collect();
            (labels, record.count, record.support)
        })
        .collect())
}

/// Mine a 0/1 transaction matrix, one row per transaction and one column per
/// item. Returns `(column_indices, count, support)` tuples.
#[pyfunction]
fn mine_dense(
    matrix: PyReadonlyArray2<i32>,
    min_support: f32,
) -> PyResult<Vec<(Vec<usize>, usize, f32)>> {
    let records = crate::mine_frequent_itemsets_dense(matrix.as_array(), min_support)?;

    Ok(records
        .into_iter()
        .map(|record| (record.items, record.count, record.support))
        .collect())
}

#[pymodule]
fn eclat(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(mine, m)?)?;
    m.add_function(wrap_pyfunction!(mine_dense, m)?)?;
    Ok(())
}
