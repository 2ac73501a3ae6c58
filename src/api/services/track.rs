//! Track listing service
//!
//! Returns the recorded events for a tracking id as JSON, ordered by
//! capture time ascending. An id with zero hits yields an empty list.

use actix_web::http::StatusCode;
use actix_web::{HttpResponse, Responder, web};
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, error};

use crate::errors::PixeltrackError;
use crate::services::TrackingService;
use crate::storage::TrackingEvent;

/// 业务错误码
#[derive(Copy, Clone, Debug)]
pub enum ErrorCode {
    Success = 0,
    BadRequest = 1000,
    InternalServerError = 1005,
    ServiceUnavailable = 1030,
}

#[derive(Serialize, Clone, Debug)]
pub struct ApiResponse<T> {
    pub code: i32,
    pub message: String,
    pub data: Option<T>,
}

pub struct TrackService {}

impl TrackService {
    pub async fn list_hits(
        path: web::Path<String>,
        service: web::Data<Arc<TrackingService>>,
    ) -> impl Responder {
        let tracking_id = path.into_inner();

        match service.list_hits(&tracking_id).await {
            Ok(events) => {
                debug!("Listed {} events for {}", events.len(), &tracking_id);
                HttpResponse::Ok().json(ApiResponse {
                    code: ErrorCode::Success as i32,
                    message: "OK".to_string(),
                    data: Some(events),
                })
            }
            Err(e) => Self::error_response(&tracking_id, e),
        }
    }

    fn error_response(tracking_id: &str, e: PixeltrackError) -> HttpResponse {
        if e.is_client_error() {
            debug!("Rejected listing for malformed id: {}", tracking_id);
            return HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY).json(ApiResponse::<
                Vec<TrackingEvent>,
            > {
                code: ErrorCode::BadRequest as i32,
                message: e.format_simple(),
                data: None,
            });
        }

        error!("Failed to list events for {}: {}", tracking_id, e);
        HttpResponse::InternalServerError().json(ApiResponse::<Vec<TrackingEvent>> {
            code: ErrorCode::InternalServerError as i32,
            message: "Internal Server Error".to_string(),
            data: None,
        })
    }
}

/// Track 路由配置
pub fn track_routes() -> actix_web::Scope {
    web::scope("/track").route("/{id}", web::get().to(TrackService::list_hits))
}
