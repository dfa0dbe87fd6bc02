use std::fs;
use std::path::Path;

use anyhow::{bail, Context};
use serde::de::DeserializeOwned;
use tracing::{info, warn};

use crate::models::{Customer, Order, Refund, Transaction};
use crate::store::Store;

/// Rows imported per collection, logged once the load finishes.
#[derive(Debug, Clone, Copy)]
pub struct LoadReport {
    pub customers: usize,
    pub orders: usize,
    pub transactions: usize,
    pub refunds: usize,
}

/// Read the four JSON collections from `data_dir` and build the indexed store.
///
/// Fails fast on a missing directory or file, malformed JSON, or a duplicate
/// natural key; the process must not come up over a partial dataset. Called
/// exactly once per process lifetime, so a restart rebuilds from source.
pub fn load_store(data_dir: &Path) -> anyhow::Result<(Store, LoadReport)> {
    if !data_dir.is_dir() {
        bail!("data directory not found: {}", data_dir.display());
    }

    let customers: Vec<Customer> = read_collection(data_dir, "customers.json")?;
    let orders: Vec<Order> = read_collection(data_dir, "orders.json")?;
    let transactions: Vec<Transaction> = read_collection(data_dir, "transactions.json")?;
    let refunds: Vec<Refund> = read_collection(data_dir, "refunds.json")?;

    let report = LoadReport {
        customers: customers.len(),
        orders: orders.len(),
        transactions: transactions.len(),
        refunds: refunds.len(),
    };

    let store = Store::new(customers, orders, transactions, refunds)
        .context("building indexes over loaded collections")?;

    info!(
        customers = report.customers,
        orders = report.orders,
        transactions = report.transactions,
        refunds = report.refunds,
        "Data load complete"
    );

    Ok((store, report))
}

/// Parse one collection file as a JSON array of records.
fn read_collection<T: DeserializeOwned>(data_dir: &Path, file_name: &str) -> anyhow::Result<Vec<T>> {
    let path = data_dir.join(file_name);
    let contents = fs::read_to_string(&path)
        .with_context(|| format!("reading data file {}", path.display()))?;
    let records: Vec<T> = serde_json::from_str(&contents)
        .with_context(|| format!("parsing data file {}", path.display()))?;

    if records.is_empty() {
        warn!(file = file_name, "Collection file is empty");
    } else {
        info!(file = file_name, rows = records.len(), "Imported collection");
    }

    Ok(records)
}
