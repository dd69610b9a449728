#![cfg(test)]
use async_trait::async_trait;
use tokio::sync::Mutex;

use crate::errors::ServiceError;
use crate::records::domain::{Collection, NewRecord, Shift};
use crate::storage::RecordStore;

/// In-memory store for service tests.
#[derive(Default)]
pub struct MemoryStore {
    inner: Mutex<Collection>,
}

impl MemoryStore {
    pub fn with(collection: Collection) -> Self {
        Self { inner: Mutex::new(collection) }
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn load(&self) -> Result<Collection, ServiceError> {
        Ok(self.inner.lock().await.clone())
    }

    async fn save(&self, collection: &Collection) -> Result<(), ServiceError> {
        *self.inner.lock().await = collection.clone();
        Ok(())
    }
}

/// Store whose medium is always unavailable.
pub struct FailingStore;

#[async_trait]
impl RecordStore for FailingStore {
    async fn load(&self) -> Result<Collection, ServiceError> {
        Err(ServiceError::Storage("disk unavailable".into()))
    }

    async fn save(&self, _collection: &Collection) -> Result<(), ServiceError> {
        Err(ServiceError::Storage("disk unavailable".into()))
    }
}

pub fn new_record(phone: &str, quantity: f64, amount: f64, shift: Shift) -> NewRecord {
    NewRecord {
        shift,
        name: format!("customer-{phone}"),
        phone: phone.to_string(),
        quantity,
        amount,
    }
}
