pub mod tracking_event;
