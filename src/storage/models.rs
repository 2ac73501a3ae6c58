use serde::{Deserialize, Serialize};

/// One observed fetch of a tracked pixel.
///
/// Events are append-only: once stored they are never updated or deleted.
/// Many events may share the same `tracking_id`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingEvent {
    /// Tracking id in canonical UUID text form, minted by the caller
    pub tracking_id: String,
    /// Capture time, assigned by the store at insertion
    pub captured_at: chrono::DateTime<chrono::Utc>,
    /// Best-effort caller address (may be proxy-forwarded, trusted as-is)
    pub client_ip: String,
    pub user_agent: Option<String>,
    /// Raw request headers serialized as a JSON object, order-preserving
    pub headers: String,
}
