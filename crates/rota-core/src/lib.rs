//! Core data models and map geometry for the rota delivery planner.

pub mod bounds;
pub mod models;
pub mod polyline;

pub use bounds::{fit_bounds, Bounds, DEFAULT_REGION};
pub use models::{Polyline, RouteInput, Station};
pub use polyline::{build_polyline, route_color, PALETTE};
