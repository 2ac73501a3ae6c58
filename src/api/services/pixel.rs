//! Pixel service
//!
//! Serves the 1x1 tracking image and records one event per fetch.
//! Delivering the image is the primary contract: a storage failure is
//! logged and swallowed so the pixel still returns successfully.

use actix_web::http::StatusCode;
use actix_web::{HttpRequest, HttpResponse, Responder, web};
use std::sync::Arc;
use tracing::{error, trace};

use crate::services::{RequestContext, TrackingService};
use crate::utils::is_valid_tracking_id;

/// 1x1 transparent PNG, embedded at build time
pub const PIXEL_PNG: &[u8] = include_bytes!("../../../assets/pixel.png");

pub struct PixelService {}

impl PixelService {
    pub async fn serve_pixel(
        req: HttpRequest,
        path: web::Path<String>,
        service: web::Data<Arc<TrackingService>>,
    ) -> impl Responder {
        let tracking_id = path.into_inner();

        // Reject malformed ids before touching the service; nothing may be
        // stored under a malformed key.
        if !is_valid_tracking_id(&tracking_id) {
            trace!("Invalid tracking id rejected: {}", &tracking_id);
            return Self::invalid_id_response();
        }

        let ctx = RequestContext::from_request(&req);

        // At-most-once write attempt. Losing an event is acceptable;
        // losing the pixel response is not.
        if let Err(e) = service.record_hit(&tracking_id, ctx).await {
            error!("Failed to record hit for {}: {}", &tracking_id, e);
        }

        Self::pixel_response()
    }

    #[inline]
    fn pixel_response() -> HttpResponse {
        HttpResponse::Ok()
            .insert_header(("Content-Type", "image/png"))
            // Caching would suppress repeat hits on the same pixel
            .insert_header(("Cache-Control", "no-store, max-age=0"))
            .body(PIXEL_PNG)
    }

    #[inline]
    fn invalid_id_response() -> HttpResponse {
        HttpResponse::build(StatusCode::UNPROCESSABLE_ENTITY)
            .insert_header(("Content-Type", "text/plain; charset=utf-8"))
            .body("Invalid tracking id")
    }
}

/// Pixel 路由配置
pub fn pixel_routes() -> actix_web::Scope {
    web::scope("/image")
        .route("/{id}", web::get().to(PixelService::serve_pixel))
        .route("/{id}", web::head().to(PixelService::serve_pixel))
}
