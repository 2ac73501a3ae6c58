pub mod tracking;

pub use tracking::{RequestContext, TrackingService};
