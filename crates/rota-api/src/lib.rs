//! HTTP client for the rota planning backend.
//!
//! Covers the two endpoints the render pipeline consumes: the station
//! directory and route expansion.

pub mod client;
pub mod error;

pub use client::{PlannerClient, StationScope};
pub use error::ApiError;
