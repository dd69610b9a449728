use async_trait::async_trait;

use crate::errors::ServiceError;
use crate::records::domain::Collection;

/// Durable home of the record collection, loaded and saved as one unit.
/// Implementations can be file-backed, in-memory, or remote.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Current collection; initializes an empty one when nothing was persisted yet.
    async fn load(&self) -> Result<Collection, ServiceError>;
    /// Replace the whole persisted collection.
    async fn save(&self, collection: &Collection) -> Result<(), ServiceError>;
}
