use crate::core::geo::{LatLng, LatLngBounds, METERS_PER_DEGREE_LAT};
use serde::{Deserialize, Serialize};

/// Side length in meters of the square region used when the map follows the
/// device position.
pub const FOLLOW_SPAN_METERS: f64 = 2000.0;

/// A map viewport region: a center coordinate plus a metric extent.
///
/// Spans are kept in meters rather than degrees so a "2 km square around the
/// user" stays 2 km regardless of latitude.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub center: LatLng,
    /// North-south extent in meters
    pub lat_span_m: f64,
    /// East-west extent in meters
    pub lng_span_m: f64,
}

impl Region {
    /// Creates a region of the given metric extent centered on a coordinate
    pub fn with_distance(center: LatLng, lat_span_m: f64, lng_span_m: f64) -> Self {
        Self {
            center,
            lat_span_m,
            lng_span_m,
        }
    }

    /// Creates the region covering a bounding box
    pub fn from_bounds(bounds: &LatLngBounds) -> Self {
        let center = bounds.center();
        let span = bounds.span();
        let lat_span_m = span.lat * METERS_PER_DEGREE_LAT;
        let lng_span_m = span.lng * METERS_PER_DEGREE_LAT * center.lat.to_radians().cos();

        Self {
            center,
            lat_span_m,
            lng_span_m,
        }
    }

    /// Converts the region back to geographic bounds
    pub fn bounds(&self) -> LatLngBounds {
        let half_lat = self.lat_span_m / 2.0;
        let half_lng = self.lng_span_m / 2.0;

        LatLngBounds::new(
            self.center.offset_by(-half_lat, -half_lng),
            self.center.offset_by(half_lat, half_lng),
        )
    }
}
