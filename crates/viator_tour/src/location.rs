use geo::{Distance, Haversine};

use crate::meters::Meters;

/// A geocoded point. Latitude and longitude are degrees; callers are
/// responsible for keeping them inside [-90, 90] and [-180, 180].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Location {
    point: geo::Point,
}

impl Location {
    pub fn from_lat_lon(lat: f64, lon: f64) -> Self {
        Self {
            point: geo::Point::new(lon, lat),
        }
    }

    pub fn lon(&self) -> f64 {
        self.point.x()
    }

    pub fn lat(&self) -> f64 {
        self.point.y()
    }

    /// Geocoding providers deliver (0, 0) when they could not resolve a
    /// position. Such points never enter distance computations or drawn
    /// paths.
    pub fn has_fix(&self) -> bool {
        self.lat() != 0.0 || self.lon() != 0.0
    }

    pub fn haversine_distance(&self, to: &Location) -> Meters {
        let haversine = Haversine;

        Meters::new(haversine.distance(self.point, to.point))
    }
}
