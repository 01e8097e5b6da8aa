//! Data models shared across the render pipeline.

use serde::{Deserialize, Serialize};

/// A cargo station known to the planning backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Station {
    pub id: i64,
    pub name: String,
    pub lat: f64,
    pub lon: f64,
    pub is_active: bool,
}

/// One vehicle route out of a planning result: a display label and the
/// ordered stops the optimizer assigned to it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RouteInput {
    pub label: String,
    pub stop_ids: Vec<i64>,
}

/// A drawable, colored path on the map.
///
/// `points` are `[lat, lon]` pairs in travel order and must never be
/// reordered.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Polyline {
    pub id: String,
    pub color: String,
    pub points: Vec<[f64; 2]>,
}
