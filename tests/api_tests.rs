//! HTTP surface tests
//!
//! End-to-end tests for the pixel, track listing and health routes using
//! the actix test harness over a temporary SQLite database.

use actix_web::{App, test, web};
use pixeltrack::api::services::pixel::PIXEL_PNG;
use pixeltrack::api::services::{AppStartTime, health_routes, pixel_routes, track_routes};
use pixeltrack::config::init_config;
use pixeltrack::errors::{PixeltrackError, Result};
use pixeltrack::services::TrackingService;
use pixeltrack::storage::{EventStore, SeaOrmStorage, TrackingEvent};
use std::sync::Arc;
use std::sync::Once;
use tempfile::TempDir;

static INIT: Once = Once::new();

fn init_test_config() {
    INIT.call_once(|| {
        init_config();
    });
}

async fn create_test_state() -> (Arc<SeaOrmStorage>, Arc<TrackingService>, TempDir) {
    init_test_config();

    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let db_path = temp_dir.path().join("test.db");
    let db_url = format!("sqlite://{}?mode=rwc", db_path.display());

    let storage = Arc::new(
        SeaOrmStorage::new(&db_url, "sqlite")
            .await
            .expect("Failed to create storage"),
    );
    let service = Arc::new(TrackingService::new(storage.clone() as Arc<dyn EventStore>));

    (storage, service, temp_dir)
}

// =============================================================================
// Pixel 路由
// =============================================================================

#[actix_rt::test]
async fn test_pixel_fetch_serves_image_and_records_event() {
    let (storage, service, _tmp) = create_test_state().await;
    let id = "5446e98c-6efa-4295-b92f-cd62867f7f26";

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(pixel_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/image/{}", id))
        .peer_addr("127.0.0.1:40000".parse().unwrap())
        .insert_header(("user-agent", "curl/8.5.0"))
        .to_request();
    let resp = test::call_service(&app, req).await;

    assert!(resp.status().is_success());
    assert_eq!(
        resp.headers().get("content-type").unwrap(),
        "image/png"
    );
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], PIXEL_PNG);

    let events = storage.list_by_id(id).await.expect("list failed");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].client_ip, "127.0.0.1");
    assert_eq!(events[0].user_agent.as_deref(), Some("curl/8.5.0"));
}

#[actix_rt::test]
async fn test_pixel_fetch_uses_forwarded_for_header() {
    let (storage, service, _tmp) = create_test_state().await;
    let id = "7c2f98c4-6efa-4295-b92f-cd62867f7f26";

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(pixel_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri(&format!("/image/{}", id))
        .peer_addr("10.0.0.1:40000".parse().unwrap())
        .insert_header(("x-forwarded-for", "203.0.113.7, 10.0.0.1"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let events = storage.list_by_id(id).await.expect("list failed");
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].client_ip, "203.0.113.7");

    // The header snapshot carries the raw forwarded header for audit
    let headers: serde_json::Value = serde_json::from_str(&events[0].headers).unwrap();
    assert_eq!(headers["x-forwarded-for"], "203.0.113.7, 10.0.0.1");
}

#[actix_rt::test]
async fn test_pixel_fetch_with_malformed_id_is_client_error() {
    let (storage, service, _tmp) = create_test_state().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(pixel_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/image/test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);

    // Nothing may be stored under any key
    assert_eq!(storage.count().await.unwrap(), 0);
}

struct FailingStore;

#[async_trait::async_trait]
impl EventStore for FailingStore {
    async fn append(&self, _event: TrackingEvent) -> Result<()> {
        Err(PixeltrackError::database_operation("disk full"))
    }

    async fn list_by_id(&self, _tracking_id: &str) -> Result<Vec<TrackingEvent>> {
        Err(PixeltrackError::database_operation("disk full"))
    }

    async fn count(&self) -> Result<u64> {
        Err(PixeltrackError::database_operation("disk full"))
    }
}

#[actix_rt::test]
async fn test_pixel_is_served_even_when_storage_fails() {
    init_test_config();
    let service = Arc::new(TrackingService::new(
        Arc::new(FailingStore) as Arc<dyn EventStore>
    ));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .service(pixel_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/image/5446e98c-6efa-4295-b92f-cd62867f7f26")
        .to_request();
    let resp = test::call_service(&app, req).await;

    // Availability over completeness: losing the event is acceptable,
    // losing the pixel response is not.
    assert!(resp.status().is_success());
    let body = test::read_body(resp).await;
    assert_eq!(&body[..], PIXEL_PNG);
}

// =============================================================================
// Track 路由
// =============================================================================

#[actix_rt::test]
async fn test_track_listing_returns_events_as_json() {
    let (_storage, service, _tmp) = create_test_state().await;
    let id = "11111111-2222-4333-8444-555555555555";

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(pixel_routes())
            .service(track_routes()),
    )
    .await;

    for _ in 0..2 {
        let req = test::TestRequest::get()
            .uri(&format!("/image/{}", id))
            .peer_addr("127.0.0.1:40000".parse().unwrap())
            .to_request();
        let resp = test::call_service(&app, req).await;
        assert!(resp.status().is_success());
    }

    let req = test::TestRequest::get()
        .uri(&format!("/track/{}", id))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    let data = body["data"].as_array().expect("data is not an array");
    assert_eq!(data.len(), 2);
    assert_eq!(data[0]["tracking_id"], id);
    assert_eq!(data[0]["client_ip"], "127.0.0.1");
}

#[actix_rt::test]
async fn test_track_listing_for_unknown_id_is_empty() {
    let (_storage, service, _tmp) = create_test_state().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(track_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/track/5446e98c-6efa-4595-b92f-cd62867f7f26")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["code"], 0);
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
}

#[actix_rt::test]
async fn test_track_listing_rejects_malformed_id() {
    let (_storage, service, _tmp) = create_test_state().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service.clone()))
            .service(track_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/track/test").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 422);
}

#[actix_rt::test]
async fn test_track_listing_storage_failure_is_server_error() {
    init_test_config();
    let service = Arc::new(TrackingService::new(
        Arc::new(FailingStore) as Arc<dyn EventStore>
    ));

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(service))
            .service(track_routes()),
    )
    .await;

    let req = test::TestRequest::get()
        .uri("/track/5446e98c-6efa-4295-b92f-cd62867f7f26")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 500);
}

// =============================================================================
// Health 路由
// =============================================================================

#[actix_rt::test]
async fn test_health_check_reports_healthy_storage() {
    let (storage, _service, _tmp) = create_test_state().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(AppStartTime {
                start_datetime: chrono::Utc::now(),
            }))
            .service(health_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/health").to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body: serde_json::Value = test::read_body_json(resp).await;
    assert_eq!(body["data"]["status"], "healthy");
    assert_eq!(body["data"]["storage"]["backend"], "sqlite");
}

#[actix_rt::test]
async fn test_readiness_and_liveness_probes() {
    let (storage, _service, _tmp) = create_test_state().await;

    let app = test::init_service(
        App::new()
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(AppStartTime {
                start_datetime: chrono::Utc::now(),
            }))
            .service(health_routes()),
    )
    .await;

    let req = test::TestRequest::get().uri("/health/ready").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 200);

    let req = test::TestRequest::get().uri("/health/live").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status().as_u16(), 204);
}
