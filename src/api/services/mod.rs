pub mod health;
pub mod pixel;
pub mod track;

pub use health::{AppStartTime, HealthService, health_routes};
pub use pixel::{PixelService, pixel_routes};
pub use track::{ApiResponse, ErrorCode, TrackService, track_routes};
