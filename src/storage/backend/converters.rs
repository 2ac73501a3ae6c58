//! Conversions between the SeaORM entity model and the domain event type

use sea_orm::ActiveValue::Set;

use crate::storage::models::TrackingEvent;
use migration::entities::tracking_event;

pub fn model_to_event(model: tracking_event::Model) -> TrackingEvent {
    TrackingEvent {
        tracking_id: model.tracking_id,
        captured_at: model.captured_at,
        client_ip: model.client_ip,
        user_agent: model.user_agent,
        headers: model.headers,
    }
}

pub fn event_to_active_model(event: &TrackingEvent) -> tracking_event::ActiveModel {
    tracking_event::ActiveModel {
        tracking_id: Set(event.tracking_id.clone()),
        captured_at: Set(event.captured_at),
        client_ip: Set(event.client_ip.clone()),
        user_agent: Set(event.user_agent.clone()),
        headers: Set(event.headers.clone()),
        ..Default::default()
    }
}
