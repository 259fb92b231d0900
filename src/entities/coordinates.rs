use geo_types::Point;
use serde::{Deserialize, Serialize};

/// Decimal places kept for every coordinate we return, cache or persist.
/// Six places is roughly 0.11 m at the equator.
pub const COORDINATE_PRECISION: i32 = 6;

/// Rounds to [`COORDINATE_PRECISION`] decimal places.
///
/// Anchor computation and cache key derivation both go through this so the
/// two never disagree. Negative zero is folded into zero to keep keys stable.
pub fn round_coordinate(value: f64) -> f64 {
    let scale = 10f64.powi(COORDINATE_PRECISION);
    (value * scale).round() / scale + 0.0
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinates {
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    pub fn rounded(&self) -> Self {
        Self {
            lat: round_coordinate(self.lat),
            lng: round_coordinate(self.lng),
        }
    }

    pub fn is_valid(&self) -> bool {
        (-90.0..=90.0).contains(&self.lat) && (-180.0..=180.0).contains(&self.lng)
    }
}

impl From<Coordinates> for Point<f64> {
    fn from(coordinates: Coordinates) -> Self {
        Point::new(coordinates.lng, coordinates.lat)
    }
}

impl From<Point<f64>> for Coordinates {
    fn from(point: Point<f64>) -> Self {
        Self {
            lat: point.y(),
            lng: point.x(),
        }
    }
}
