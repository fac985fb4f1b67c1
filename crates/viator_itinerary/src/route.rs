use geojson::Value::LineString;
use geojson::{Feature, GeoJson, Geometry};
use serde::Serialize;
use viator_tour::{location::Location, meters::Meters};

/// The derived path for polyline rendering: the itinerary's fixed points in
/// visiting order plus the summed leg distances. Recomputed on demand,
/// never stored.
#[derive(Debug, Clone)]
pub struct Route {
    points: Vec<Location>,
    total_distance: Meters,
}

impl Route {
    pub(crate) fn new(points: Vec<Location>) -> Self {
        let total_distance = points
            .windows(2)
            .map(|leg| leg[0].haversine_distance(&leg[1]))
            .sum();

        Route {
            points,
            total_distance,
        }
    }

    pub fn points(&self) -> &[Location] {
        &self.points
    }

    pub fn total_distance(&self) -> Meters {
        self.total_distance
    }

    /// A GeoJSON `LineString` feature. Coordinates are `[lon, lat]` pairs,
    /// the order map renderers expect.
    pub fn to_geojson(&self) -> Feature {
        let points: Vec<Vec<f64>> = self
            .points
            .iter()
            .map(|point| vec![point.lon(), point.lat()])
            .collect();

        Feature {
            bbox: None,
            properties: None,
            foreign_members: None,
            id: None,
            geometry: Some(Geometry::new(LineString(points))),
        }
    }
}

/// Serialized envelope handed to the presentation layer.
#[derive(Serialize)]
pub struct JsonRoute {
    pub distance: Meters,
    pub path: GeoJson,
}

impl From<&Route> for JsonRoute {
    fn from(route: &Route) -> Self {
        JsonRoute {
            distance: route.total_distance(),
            path: GeoJson::Feature(route.to_geojson()),
        }
    }
}

#[cfg(test)]
mod tests {

    use super::*;

    fn route() -> Route {
        Route::new(vec![
            Location::from_lat_lon(12.90, 77.60),
            Location::from_lat_lon(12.95, 77.55),
            Location::from_lat_lon(13.00, 77.50),
        ])
    }

    #[test]
    fn test_total_distance_sums_legs() {
        let route = route();

        let first = route.points()[0].haversine_distance(&route.points()[1]);
        let second = route.points()[1].haversine_distance(&route.points()[2]);

        assert_eq!(route.total_distance(), first + second);
    }

    #[test]
    fn test_geojson_linestring_is_lon_lat() {
        let feature = route().to_geojson();

        let geometry = feature.geometry.expect("Expected a geometry");
        match geometry.value {
            LineString(points) => {
                assert_eq!(points.len(), 3);
                assert_eq!(points[0], vec![77.60, 12.90]);
                assert_eq!(points[2], vec![77.50, 13.00]);
            }
            other => panic!("expected a line string, got {other:?}"),
        }
    }

    #[test]
    fn test_json_route_serializes() {
        let json = serde_json::to_value(JsonRoute::from(&route())).unwrap();

        assert!(json["distance"].is_number());
        assert_eq!(json["path"]["geometry"]["type"], "LineString");
    }
}
