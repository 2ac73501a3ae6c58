//! Pixeltrack - A tracking-pixel service
//!
//! This library provides the core functionality for the Pixeltrack service:
//! a 1x1 image is served per externally minted tracking id, and every fetch
//! is logged with its client metadata for later retrieval.
//!
//! # Architecture
//! - `storage`: append-only event store (SeaORM: SQLite/MySQL/PostgreSQL)
//! - `services`: tracking service (hit recording and listing)
//! - `api`: HTTP services (pixel, track listing, health)
//! - `config`: configuration management
//! - `system`: logging initialization
//! - `utils`: id validation and client IP extraction

pub mod api;
pub mod config;
pub mod errors;
pub mod services;
pub mod storage;
pub mod system;
pub mod utils;
