//! EventStore implementation for SeaOrmStorage
//!
//! The hit log is strictly append-only: single-row inserts, no updates,
//! no deletes. Each insert is atomic at the engine level, so a reader
//! never observes a partially written row. Writes are attempted exactly
//! once; a failed insert is reported to the caller and not retried.

use async_trait::async_trait;
use sea_orm::{ColumnTrait, EntityTrait, PaginatorTrait, QueryFilter, QueryOrder};
use tracing::debug;

use super::converters::{event_to_active_model, model_to_event};
use super::SeaOrmStorage;
use crate::errors::{PixeltrackError, Result};
use crate::storage::models::TrackingEvent;
use crate::storage::EventStore;

use migration::entities::tracking_event;

#[async_trait]
impl EventStore for SeaOrmStorage {
    async fn append(&self, event: TrackingEvent) -> Result<()> {
        if event.tracking_id.is_empty() {
            return Err(PixeltrackError::validation(
                "Refusing to store event with empty tracking id",
            ));
        }

        let model = event_to_active_model(&event);
        tracking_event::Entity::insert(model)
            .exec(&self.db)
            .await
            .map_err(|e| {
                PixeltrackError::database_operation(format!(
                    "Failed to insert tracking event: {}",
                    e
                ))
            })?;

        debug!(
            "Tracking event stored for {} ({} database)",
            event.tracking_id,
            self.backend_name.to_uppercase()
        );
        Ok(())
    }

    async fn list_by_id(&self, tracking_id: &str) -> Result<Vec<TrackingEvent>> {
        // The composite (tracking_id, captured_at) index makes this an
        // ordered range scan; no separate sort step is needed in memory.
        let models = tracking_event::Entity::find()
            .filter(tracking_event::Column::TrackingId.eq(tracking_id))
            .order_by_asc(tracking_event::Column::CapturedAt)
            .all(&self.db)
            .await
            .map_err(|e| {
                PixeltrackError::database_operation(format!(
                    "Failed to list tracking events: {}",
                    e
                ))
            })?;

        Ok(models.into_iter().map(model_to_event).collect())
    }

    async fn count(&self) -> Result<u64> {
        tracking_event::Entity::find()
            .count(&self.db)
            .await
            .map_err(|e| {
                PixeltrackError::database_operation(format!(
                    "Failed to count tracking events: {}",
                    e
                ))
            })
    }
}
