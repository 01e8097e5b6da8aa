//! Viewport fitting for the rendered map.

use serde::{Deserialize, Serialize};

use crate::models::{Polyline, Station};

/// Region shown when neither polylines nor stations are known. Covers the
/// whole service area; never treated as meaningful data.
pub const DEFAULT_REGION: Bounds = Bounds {
    min_lat: 36.0,
    min_lon: 26.0,
    max_lat: 42.0,
    max_lon: 45.0,
};

/// Margin in degrees around the single-station fallback.
const STATION_MARGIN_DEG: f64 = 0.05;

/// A rectangular map viewport.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Bounds {
    pub min_lat: f64,
    pub min_lon: f64,
    pub max_lat: f64,
    pub max_lon: f64,
}

impl Bounds {
    fn around(lat: f64, lon: f64, margin: f64) -> Self {
        Self {
            min_lat: lat - margin,
            min_lon: lon - margin,
            max_lat: lat + margin,
            max_lon: lon + margin,
        }
    }

    fn extend(&mut self, point: [f64; 2]) {
        self.min_lat = self.min_lat.min(point[0]);
        self.max_lat = self.max_lat.max(point[0]);
        self.min_lon = self.min_lon.min(point[1]);
        self.max_lon = self.max_lon.max(point[1]);
    }

    pub fn center(&self) -> [f64; 2] {
        [
            (self.min_lat + self.max_lat) / 2.0,
            (self.min_lon + self.max_lon) / 2.0,
        ]
    }

    pub fn contains(&self, point: [f64; 2]) -> bool {
        point[0] >= self.min_lat
            && point[0] <= self.max_lat
            && point[1] >= self.min_lon
            && point[1] <= self.max_lon
    }
}

fn valid_coords(lat: f64, lon: f64) -> bool {
    lat.is_finite() && lon.is_finite() && lat.abs() <= 90.0 && lon.abs() <= 180.0
}

/// Compute the smallest rectangle covering every rendered point.
///
/// Falls back to a small box around the first active station with valid
/// coordinates when nothing is drawn, and to [`DEFAULT_REGION`] when no
/// station is known either.
pub fn fit_bounds(polylines: &[Polyline], stations: &[Station]) -> Bounds {
    let mut points = polylines.iter().flat_map(|line| line.points.iter());

    if let Some(first) = points.next() {
        let mut bounds = Bounds::around(first[0], first[1], 0.0);
        for point in points {
            bounds.extend(*point);
        }
        return bounds;
    }

    if let Some(station) = stations
        .iter()
        .find(|s| s.is_active && valid_coords(s.lat, s.lon))
    {
        return Bounds::around(station.lat, station.lon, STATION_MARGIN_DEG);
    }

    DEFAULT_REGION
}
