//! Conversion of expanded station sequences into drawable polylines.

use std::collections::HashMap;

use crate::models::{Polyline, Station};

/// Fixed route color palette, cycled by route index.
pub const PALETTE: [&str; 8] = [
    "#e6194b", "#3cb44b", "#4363d8", "#f58231", "#911eb4", "#46f0f0", "#f032e6", "#9a6324",
];

/// Color for the route at `index` (input order, attempted routes only).
pub fn route_color(index: usize) -> &'static str {
    PALETTE[index % PALETTE.len()]
}

/// Build the drawable polyline for one expanded route.
///
/// Station ids missing from the directory are skipped; consecutive points
/// with identical coordinates collapse to one so no zero-length segments
/// are drawn. Returns `None` when fewer than 2 points remain, in which
/// case the route is simply not drawn.
pub fn build_polyline(
    index: usize,
    label: &str,
    station_ids: &[i64],
    directory: &HashMap<i64, Station>,
) -> Option<Polyline> {
    let mut points: Vec<[f64; 2]> = Vec::with_capacity(station_ids.len());
    for id in station_ids {
        let Some(station) = directory.get(id) else {
            continue;
        };
        let point = [station.lat, station.lon];
        if points.last() == Some(&point) {
            continue;
        }
        points.push(point);
    }

    if points.len() < 2 {
        return None;
    }

    Some(Polyline {
        id: label.to_string(),
        color: route_color(index).to_string(),
        points,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn station(id: i64, lat: f64, lon: f64) -> Station {
        Station {
            id,
            name: format!("S{id}"),
            lat,
            lon,
            is_active: true,
        }
    }

    fn directory(stations: &[Station]) -> HashMap<i64, Station> {
        stations.iter().map(|s| (s.id, s.clone())).collect()
    }

    #[test]
    fn points_follow_expansion_order() {
        let dir = directory(&[
            station(10, 39.0, 32.0),
            station(15, 39.5, 32.5),
            station(20, 40.0, 33.0),
        ]);

        let line = build_polyline(0, "V1", &[10, 15, 20], &dir).expect("polyline");
        assert_eq!(line.id, "V1");
        assert_eq!(line.color, PALETTE[0]);
        assert_eq!(
            line.points,
            vec![[39.0, 32.0], [39.5, 32.5], [40.0, 33.0]]
        );
    }

    #[test]
    fn unknown_ids_are_skipped_silently() {
        let dir = directory(&[station(10, 39.0, 32.0), station(20, 40.0, 33.0)]);

        let line = build_polyline(0, "V1", &[10, 999, 20], &dir).expect("polyline");
        assert_eq!(line.points.len(), 2);
    }

    #[test]
    fn consecutive_duplicate_coordinates_collapse() {
        // Two distinct stations sharing coordinates still produce one point.
        let dir = directory(&[
            station(10, 39.0, 32.0),
            station(11, 39.0, 32.0),
            station(20, 40.0, 33.0),
        ]);

        let line = build_polyline(0, "V1", &[10, 11, 20], &dir).expect("polyline");
        assert_eq!(line.points, vec![[39.0, 32.0], [40.0, 33.0]]);
    }

    #[test]
    fn fewer_than_two_points_yields_no_polyline() {
        let dir = directory(&[station(10, 39.0, 32.0)]);

        assert!(build_polyline(0, "V1", &[10], &dir).is_none());
        assert!(build_polyline(0, "V1", &[], &dir).is_none());
        // All ids unknown
        assert!(build_polyline(0, "V1", &[1, 2, 3], &dir).is_none());
        // Same station repeated collapses below the threshold
        assert!(build_polyline(0, "V1", &[10, 10, 10], &dir).is_none());
    }

    #[test]
    fn palette_cycles_by_route_index() {
        assert_eq!(route_color(0), PALETTE[0]);
        assert_eq!(route_color(7), PALETTE[7]);
        assert_eq!(route_color(8), PALETTE[0]);
        assert_eq!(route_color(11), PALETTE[3]);
    }
}
