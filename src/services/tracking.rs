//! Tracking service
//!
//! Bridges inbound pixel fetches and listing requests to the event store.
//! The service is stateless between calls; all state lives in the store,
//! which is constructor-injected so tests can swap in their own instance.

use std::sync::Arc;

use actix_web::HttpRequest;
use tracing::trace;

use crate::errors::{PixeltrackError, Result};
use crate::storage::{EventStore, TrackingEvent};
use crate::utils::ip::extract_forwarded_ip_from_headers;
use crate::utils::is_valid_tracking_id;

/// Client metadata captured from one inbound request.
#[derive(Debug, Clone, Default)]
pub struct RequestContext {
    /// First X-Forwarded-For entry (or X-Real-IP), if the request carried one
    pub forwarded_ip: Option<String>,
    /// Direct connection peer address
    pub peer_addr: Option<String>,
    pub user_agent: Option<String>,
    /// Full header set, name/value as received, order preserved
    pub headers: Vec<(String, String)>,
}

impl RequestContext {
    /// Capture metadata from an actix request.
    ///
    /// Header values that are not valid UTF-8 are recorded lossily rather
    /// than dropped; the header blob is an audit trail, not parsed further.
    pub fn from_request(req: &HttpRequest) -> Self {
        let headers = req
            .headers()
            .iter()
            .map(|(name, value)| {
                (
                    name.as_str().to_string(),
                    String::from_utf8_lossy(value.as_bytes()).into_owned(),
                )
            })
            .collect();

        RequestContext {
            forwarded_ip: extract_forwarded_ip_from_headers(req.headers()),
            peer_addr: req.peer_addr().map(|addr| addr.ip().to_string()),
            user_agent: req
                .headers()
                .get("user-agent")
                .and_then(|h| h.to_str().ok())
                .map(String::from),
            headers,
        }
    }

    /// Best-effort caller address: forwarded header first, then peer address
    fn client_ip(&self) -> String {
        self.forwarded_ip
            .clone()
            .or_else(|| self.peer_addr.clone())
            .unwrap_or_else(|| "unknown".to_string())
    }

    /// Serialize the header snapshot as a JSON object (order-preserving)
    fn headers_json(&self) -> Result<String> {
        let mut map = serde_json::Map::with_capacity(self.headers.len());
        for (name, value) in &self.headers {
            map.insert(name.clone(), serde_json::Value::String(value.clone()));
        }
        Ok(serde_json::to_string(&serde_json::Value::Object(map))?)
    }
}

/// Tracking Service
pub struct TrackingService {
    store: Arc<dyn EventStore>,
}

impl TrackingService {
    pub fn new(store: Arc<dyn EventStore>) -> Self {
        TrackingService { store }
    }

    fn validate_id(tracking_id: &str) -> Result<()> {
        if !is_valid_tracking_id(tracking_id) {
            return Err(PixeltrackError::invalid_tracking_id(format!(
                "Not a canonical UUID: '{}'",
                tracking_id
            )));
        }
        Ok(())
    }

    /// Construct and persist one event for `tracking_id`.
    ///
    /// The id is re-validated here even though the HTTP layer rejects
    /// malformed ids before routing reaches the service. Storage failures
    /// propagate to the caller, which decides whether they are fatal (the
    /// pixel path serves the image regardless).
    pub async fn record_hit(&self, tracking_id: &str, ctx: RequestContext) -> Result<()> {
        Self::validate_id(tracking_id)?;

        let event = TrackingEvent {
            tracking_id: tracking_id.to_string(),
            captured_at: chrono::Utc::now(),
            client_ip: ctx.client_ip(),
            user_agent: ctx.user_agent.clone(),
            headers: ctx.headers_json()?,
        };

        trace!("Recording hit for {}", tracking_id);
        self.store.append(event).await
    }

    /// All events for `tracking_id`, capture-time ascending.
    ///
    /// An id with zero hits is a normal state (freshly minted, never
    /// fetched) and yields an empty vec.
    pub async fn list_hits(&self, tracking_id: &str) -> Result<Vec<TrackingEvent>> {
        Self::validate_id(tracking_id)?;
        self.store.list_by_id(tracking_id).await
    }
}
