//! Storage boundary for transfer rows.
//!
//! The dashboard keeps its rows in a hosted backend; this crate only needs
//! the transfers slice of it, so that's all the trait asks for. The app
//! shell supplies the remote implementation, [`MemoryStore`] covers tests
//! and offline drafting.

use std::sync::atomic::{AtomicU64, Ordering};

use thiserror::Error;
use tokio::sync::Mutex;

use crate::models::{NewTransfer, Transfer};

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("backend request failed: {0}")]
    Backend(String),
    #[error("transfer {0} not found")]
    NotFound(String),
}

/// Transfer persistence, scoped by tournament on reads. Row ids are
/// assigned by the store on insert.
#[async_trait::async_trait]
pub trait TransferStore: Send + Sync {
    async fn list(&self, tournament_id: &str) -> Result<Vec<Transfer>, StoreError>;
    async fn insert(&self, transfer: NewTransfer) -> Result<Transfer, StoreError>;
    async fn update(&self, transfer: Transfer) -> Result<Transfer, StoreError>;
    async fn delete(&self, id: &str) -> Result<(), StoreError>;
}

/// Vec-backed store with counter ids
#[derive(Debug, Default)]
pub struct MemoryStore {
    rows: Mutex<Vec<Transfer>>,
    next_id: AtomicU64,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with existing rows, e.g. transfers entered by hand
    pub fn with_rows(rows: Vec<Transfer>) -> Self {
        Self {
            rows: Mutex::new(rows),
            next_id: AtomicU64::new(0),
        }
    }
}

#[async_trait::async_trait]
impl TransferStore for MemoryStore {
    async fn list(&self, tournament_id: &str) -> Result<Vec<Transfer>, StoreError> {
        let rows = self.rows.lock().await;
        Ok(rows
            .iter()
            .filter(|t| t.tournament_id == tournament_id)
            .cloned()
            .collect())
    }

    async fn insert(&self, transfer: NewTransfer) -> Result<Transfer, StoreError> {
        let id = format!("m-{}", self.next_id.fetch_add(1, Ordering::Relaxed) + 1);
        let row = transfer.with_id(id);
        self.rows.lock().await.push(row.clone());
        Ok(row)
    }

    async fn update(&self, transfer: Transfer) -> Result<Transfer, StoreError> {
        let mut rows = self.rows.lock().await;
        match rows.iter_mut().find(|t| t.id == transfer.id) {
            Some(slot) => {
                *slot = transfer.clone();
                Ok(transfer)
            }
            None => Err(StoreError::NotFound(transfer.id)),
        }
    }

    async fn delete(&self, id: &str) -> Result<(), StoreError> {
        let mut rows = self.rows.lock().await;
        let len_before = rows.len();
        rows.retain(|t| t.id != id);
        if rows.len() == len_before {
            return Err(StoreError::NotFound(id.to_string()));
        }
        Ok(())
    }
}
