//! Sales ledger core.
//!
//! The crate groups transactions by product, computes totals, validates new
//! writes and persists the log through a [`Store`]. [`Ledger`] ties these
//! together for the HTTP server and the admin CLI.

use std::{path::PathBuf, sync::Arc};

use tokio::sync::Mutex;

pub use aggregate::{
    Grouped, Totals, amounts_for_product, grand_total, group_by_product, totals_by_product,
};
pub use error::{EngineError, StoreWriteError, ValidationError};
pub use store::{DEFAULT_STORE_PATH, JsonFileStore, MemoryStore, Store};
pub use transactions::{Record, Transaction, TransactionCandidate};
pub use validate::validate;

mod aggregate;
mod error;
mod store;
mod transactions;
mod validate;

type ResultEngine<T> = Result<T, EngineError>;

/// Entry point over a transaction store.
///
/// Every read loads the store again, so results are never stale. Writes
/// issued through the same `Ledger` are serialized.
pub struct Ledger {
    store: Arc<dyn Store>,
    write_lock: Mutex<()>,
}

impl Ledger {
    /// Return a builder for `Ledger`. Help to build the struct.
    pub fn builder() -> LedgerBuilder {
        LedgerBuilder::default()
    }

    /// Ledger over the JSON file at `path`.
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self::builder().store(JsonFileStore::new(path)).build()
    }

    pub fn records(&self) -> Vec<Record> {
        self.store.load()
    }

    pub fn totals(&self) -> Totals {
        totals_by_product(&self.store.load())
    }

    pub fn grouped(&self) -> Grouped {
        group_by_product(&self.store.load())
    }

    /// Total for one product, `None` when the product has no usable record.
    pub fn product_total(&self, product_id: &str) -> Option<f64> {
        self.totals().get(product_id).copied()
    }

    pub fn product_amounts(&self, product_id: &str) -> Vec<f64> {
        amounts_for_product(&self.store.load(), product_id)
    }

    pub fn grand_total(&self) -> f64 {
        grand_total(&self.store.load())
    }

    /// Validates `candidate` and appends it to the store.
    pub async fn add(&self, candidate: &TransactionCandidate) -> ResultEngine<Transaction> {
        let tx = validate(candidate)?;

        let _guard = self.write_lock.lock().await;
        let records = self.store.append(Record::from(&tx))?;
        tracing::info!(
            "added transaction for product {} ({} records)",
            tx.product_id,
            records.len()
        );
        Ok(tx)
    }
}

impl std::fmt::Debug for Ledger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Ledger").finish_non_exhaustive()
    }
}

#[derive(Default)]
pub struct LedgerBuilder {
    store: Option<Arc<dyn Store>>,
}

impl LedgerBuilder {
    /// Pass the store backing the ledger
    pub fn store(mut self, store: impl Store) -> LedgerBuilder {
        self.store = Some(Arc::new(store));
        self
    }

    /// Construct `Ledger`, falling back to the default JSON file store
    pub fn build(self) -> Ledger {
        let store = self
            .store
            .unwrap_or_else(|| Arc::new(JsonFileStore::default()));
        Ledger {
            store,
            write_lock: Mutex::new(()),
        }
    }
}
