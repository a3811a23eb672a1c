use pyo3::prelude::*;
use pyo3::types::{PyDict, PyFrozenSet};

use crate::{min_support_from_int, Miner, MinerConfig};

/// Apriori frequent itemset mining.
///
/// Returns a dict mapping each frequent itemset, as a frozenset, to the
/// number of transactions that contain it. A `min_support` below 1 raises
/// `ValueError`.
#[pyfunction]
#[pyo3(signature = (transactions, min_support, max_len = None))]
pub fn apriori(
    py: Python<'_>,
    transactions: Vec<Vec<String>>,
    min_support: i64,
    max_len: Option<usize>,
) -> PyResult<Py<PyDict>> {
    let mut config = MinerConfig::new(min_support_from_int(min_support)?);
    if let Some(max_len) = max_len {
        config = config.with_max_len(max_len);
    }

    let frequent = py.allow_threads(|| Miner::new(config).run(transactions))?;

    let itemset_counts = PyDict::new_bound(py);
    for (itemset, count) in frequent.iter() {
        let key = PyFrozenSet::new_bound(py, itemset.iter())?;
        itemset_counts.set_item(key, count)?;
    }
    Ok(itemset_counts.unbind())
}

#[pymodule]
#[pyo3(name = "apriori")]
fn apriori_module(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_function(wrap_pyfunction!(apriori, m)?)?;
    Ok(())
}
