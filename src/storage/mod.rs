use std::sync::Arc;

use async_trait::async_trait;

use crate::errors::Result;

pub mod backend;
pub mod models;

pub use backend::{SeaOrmStorage, infer_backend_from_url};
pub use models::TrackingEvent;

/// Append-only event log keyed by tracking id.
///
/// The store is the only shared resource between request handlers; a single
/// handle must be safe for concurrent appends. Implementations persist each
/// event durably before returning and never expose partial rows to readers.
#[async_trait]
pub trait EventStore: Send + Sync {
    /// Persist one event. The event's `tracking_id` must be non-empty.
    /// At-most-once: no retry is attempted on failure.
    async fn append(&self, event: TrackingEvent) -> Result<()>;

    /// All events for `tracking_id`, ordered by capture time ascending.
    /// An id with zero events yields an empty vec, not an error.
    async fn list_by_id(&self, tracking_id: &str) -> Result<Vec<TrackingEvent>>;

    /// Total number of stored events (health probe)
    async fn count(&self) -> Result<u64>;
}

pub struct StorageFactory;

impl StorageFactory {
    pub async fn create() -> Result<Arc<SeaOrmStorage>> {
        let config = crate::config::get_config();
        let database_url = &config.database.database_url;

        // Infer the database type from the URL
        let backend_type = backend::infer_backend_from_url(database_url)?;

        let storage = backend::SeaOrmStorage::new(database_url, &backend_type).await?;
        Ok(Arc::new(storage))
    }
}
