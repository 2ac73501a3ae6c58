use actix_web::{App, HttpServer, middleware::Compress, web};
use std::sync::Arc;
use tracing::warn;

use pixeltrack::api::services::{AppStartTime, health_routes, pixel_routes, track_routes};
use pixeltrack::config::{get_config, init_config};
use pixeltrack::services::TrackingService;
use pixeltrack::storage::{EventStore, StorageFactory};
use pixeltrack::system::init_logging;

#[actix_web::main]
async fn main() -> anyhow::Result<()> {
    let app_start_time = AppStartTime {
        start_datetime: chrono::Utc::now(),
    };

    dotenvy::dotenv().ok();
    init_config();
    let config = get_config();

    // Guard must stay alive so buffered log writes are flushed on exit
    let _log_guard = init_logging(config);

    // Storage is constructed once and injected; handlers share the pooled
    // connection handle across workers.
    let storage = StorageFactory::create().await.map_err(|e| {
        tracing::error!("Storage initialization failed: {}", e);
        anyhow::anyhow!(e)
    })?;
    let tracking_service = Arc::new(TrackingService::new(
        storage.clone() as Arc<dyn EventStore>
    ));

    let cpu_count = config.server.cpu_count.min(32);
    let bind_address = format!("{}:{}", config.server.host, config.server.port);
    warn!("Starting server at http://{}", bind_address);

    HttpServer::new(move || {
        App::new()
            .wrap(Compress::default())
            .app_data(web::Data::new(storage.clone()))
            .app_data(web::Data::new(tracking_service.clone()))
            .app_data(web::Data::new(app_start_time.clone()))
            .service(health_routes())
            .service(track_routes())
            .service(pixel_routes())
    })
    .keep_alive(std::time::Duration::from_secs(30))
    .client_request_timeout(std::time::Duration::from_millis(5000))
    .workers(cpu_count)
    .bind(bind_address)?
    .run()
    .await?;

    Ok(())
}
