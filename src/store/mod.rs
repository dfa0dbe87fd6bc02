use indexmap::IndexMap;
use thiserror::Error;

use crate::error::{AppError, AppResult};
use crate::models::{Customer, Order, Refund, Transaction};

/// Raised while building the store; any occurrence aborts startup.
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("duplicate {entity} key '{key}'")]
    DuplicateKey { entity: &'static str, key: String },
}

/// Indexed, read-only store over the four loaded collections.
///
/// Built once at startup and shared behind an `Arc`; every lookup is a single
/// keyed fetch against an index populated at build time. Records keep their
/// source-file order, which only matters for diagnostics.
#[derive(Debug, Default)]
pub struct Store {
    customers: Vec<Customer>,
    transactions: Vec<Transaction>,
    orders: IndexMap<String, Order>,
    refunds_by_order: IndexMap<String, Refund>,
    customer_by_email: IndexMap<String, usize>,
    customer_by_id: IndexMap<String, usize>,
    transaction_by_id: IndexMap<String, usize>,
    transaction_by_order: IndexMap<String, usize>,
}

fn index_unique(
    index: &mut IndexMap<String, usize>,
    entity: &'static str,
    key: &str,
    slot: usize,
) -> Result<(), StoreError> {
    if index.insert(key.to_string(), slot).is_some() {
        return Err(StoreError::DuplicateKey {
            entity,
            key: key.to_string(),
        });
    }
    Ok(())
}

impl Store {
    /// Build the indexes, rejecting any duplicate natural key.
    pub fn new(
        customers: Vec<Customer>,
        orders: Vec<Order>,
        transactions: Vec<Transaction>,
        refunds: Vec<Refund>,
    ) -> Result<Self, StoreError> {
        let mut store = Store::default();

        for (slot, customer) in customers.iter().enumerate() {
            index_unique(
                &mut store.customer_by_email,
                "customer email",
                &customer.email,
                slot,
            )?;
            index_unique(
                &mut store.customer_by_id,
                "customer id",
                &customer.customer_id,
                slot,
            )?;
        }
        store.customers = customers;

        for order in orders {
            if let Some(previous) = store.orders.insert(order.order_no.clone(), order) {
                return Err(StoreError::DuplicateKey {
                    entity: "order number",
                    key: previous.order_no,
                });
            }
        }

        for (slot, txn) in transactions.iter().enumerate() {
            index_unique(
                &mut store.transaction_by_id,
                "transaction id",
                &txn.transaction_id,
                slot,
            )?;
            index_unique(
                &mut store.transaction_by_order,
                "transaction order number",
                &txn.order_no,
                slot,
            )?;
        }
        store.transactions = transactions;

        for refund in refunds {
            if let Some(previous) = store.refunds_by_order.insert(refund.order_no.clone(), refund)
            {
                return Err(StoreError::DuplicateKey {
                    entity: "refund order number",
                    key: previous.order_no,
                });
            }
        }

        Ok(store)
    }

    // ── Lookups ───────────────────────────────────────────────────────────────

    /// Find a customer by email or customer id. When both keys are supplied the
    /// customer id is consulted first and the email is the fallback, so either
    /// key alone is enough for a hit.
    pub fn find_customer(
        &self,
        email: Option<&str>,
        customer_id: Option<&str>,
    ) -> AppResult<&Customer> {
        if email.is_none() && customer_id.is_none() {
            return Err(AppError::BadRequest(
                "either email or customer_id must be provided".to_string(),
            ));
        }

        customer_id
            .and_then(|id| self.customer_by_id.get(id))
            .or_else(|| email.and_then(|email| self.customer_by_email.get(email)))
            .map(|&slot| &self.customers[slot])
            .ok_or_else(|| AppError::NotFound("Customer not found".to_string()))
    }

    pub fn find_order(&self, order_no: &str) -> AppResult<&Order> {
        self.orders
            .get(order_no)
            .ok_or_else(|| AppError::NotFound(format!("Order {} not found", order_no)))
    }

    pub fn find_transaction(&self, transaction_id: &str) -> AppResult<&Transaction> {
        self.transaction_by_id
            .get(transaction_id)
            .map(|&slot| &self.transactions[slot])
            .ok_or_else(|| {
                AppError::NotFound(format!("Transaction {} not found", transaction_id))
            })
    }

    /// A miss here means the order carries no transaction; the order itself may
    /// well exist in the orders collection.
    pub fn find_transaction_for_order(&self, order_no: &str) -> AppResult<&Transaction> {
        self.transaction_by_order
            .get(order_no)
            .map(|&slot| &self.transactions[slot])
            .ok_or_else(|| {
                AppError::NotFound(format!("No transaction found for order {}", order_no))
            })
    }

    pub fn find_refund_for_order(&self, order_no: &str) -> AppResult<&Refund> {
        self.refunds_by_order
            .get(order_no)
            .ok_or_else(|| AppError::NotFound(format!("No refund found for order {}", order_no)))
    }

    // ── Counts (health endpoint and the startup report) ───────────────────────

    pub fn customer_count(&self) -> usize {
        self.customers.len()
    }

    pub fn order_count(&self) -> usize {
        self.orders.len()
    }

    pub fn transaction_count(&self) -> usize {
        self.transactions.len()
    }

    pub fn refund_count(&self) -> usize {
        self.refunds_by_order.len()
    }
}
