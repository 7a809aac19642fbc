use serde::{Deserialize, Serialize};

/// Mean earth radius used for spherical-earth math, in meters.
pub const EARTH_RADIUS: f64 = 6378137.0;

/// Meters covered by one degree of latitude on the spherical earth.
pub const METERS_PER_DEGREE_LAT: f64 = EARTH_RADIUS * std::f64::consts::PI / 180.0;

/// Represents a geographical coordinate with latitude and longitude
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

impl LatLng {
    /// Creates a new LatLng coordinate
    pub fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }

    /// Validates that the coordinates are within valid ranges
    pub fn is_valid(&self) -> bool {
        self.lat >= -90.0 && self.lat <= 90.0 && self.lng >= -180.0 && self.lng <= 180.0
    }

    /// Calculates the distance to another LatLng in meters using the
    /// Haversine formula
    pub fn distance_to(&self, other: &LatLng) -> f64 {
        let lat1_rad = self.lat.to_radians();
        let lat2_rad = other.lat.to_radians();
        let delta_lat = (other.lat - self.lat).to_radians();
        let delta_lng = (other.lng - self.lng).to_radians();

        let a = (delta_lat / 2.0).sin().powi(2)
            + lat1_rad.cos() * lat2_rad.cos() * (delta_lng / 2.0).sin().powi(2);
        let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

        EARTH_RADIUS * c
    }

    /// Returns the coordinate displaced by the given metric offsets.
    ///
    /// Positive `north_m` moves toward the north pole, positive `east_m`
    /// toward increasing longitude. Longitude displacement is scaled by the
    /// cosine of the latitude, so accuracy degrades near the poles.
    pub fn offset_by(&self, north_m: f64, east_m: f64) -> LatLng {
        let lat = self.lat + north_m / METERS_PER_DEGREE_LAT;
        let lng = self.lng + east_m / (METERS_PER_DEGREE_LAT * self.lat.to_radians().cos());
        LatLng::new(lat, lng)
    }
}

impl Default for LatLng {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}

impl std::fmt::Display for LatLng {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({:.6}, {:.6})", self.lat, self.lng)
    }
}

/// Represents a bounding box of geographical coordinates
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LatLngBounds {
    pub south_west: LatLng,
    pub north_east: LatLng,
}

impl LatLngBounds {
    pub fn new(south_west: LatLng, north_east: LatLng) -> Self {
        Self {
            south_west,
            north_east,
        }
    }

    /// Creates bounds from individual coordinates
    pub fn from_coords(south: f64, west: f64, north: f64, east: f64) -> Self {
        Self::new(LatLng::new(south, west), LatLng::new(north, east))
    }

    /// Creates bounds from a top-left / bottom-right corner pair, the corner
    /// convention park descriptor files use
    pub fn from_corners(top_left: LatLng, bottom_right: LatLng) -> Self {
        Self::new(
            LatLng::new(bottom_right.lat, top_left.lng),
            LatLng::new(top_left.lat, bottom_right.lng),
        )
    }

    /// Checks if the bounds contain a point
    pub fn contains(&self, point: &LatLng) -> bool {
        point.lat >= self.south_west.lat
            && point.lat <= self.north_east.lat
            && point.lng >= self.south_west.lng
            && point.lng <= self.north_east.lng
    }

    /// Gets the center point of the bounds
    pub fn center(&self) -> LatLng {
        LatLng::new(
            (self.south_west.lat + self.north_east.lat) / 2.0,
            (self.south_west.lng + self.north_east.lng) / 2.0,
        )
    }

    /// Gets the span of the bounds in degrees
    pub fn span(&self) -> LatLng {
        LatLng::new(
            self.north_east.lat - self.south_west.lat,
            self.north_east.lng - self.south_west.lng,
        )
    }

    /// Checks that both corners are valid coordinates in the right order
    pub fn is_valid(&self) -> bool {
        self.south_west.is_valid()
            && self.north_east.is_valid()
            && self.south_west.lat <= self.north_east.lat
            && self.south_west.lng <= self.north_east.lng
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lat_lng_creation() {
        let coord = LatLng::new(40.0274, -105.2389);
        assert_eq!(coord.lat, 40.0274);
        assert_eq!(coord.lng, -105.2389);
        assert!(coord.is_valid());
    }

    #[test]
    fn test_lat_lng_distance() {
        let nyc = LatLng::new(40.7128, -74.0060);
        let la = LatLng::new(34.0522, -118.2437);
        let distance = nyc.distance_to(&la);

        // Distance should be approximately 3944 km
        assert!((distance - 3944000.0).abs() < 10000.0);
    }

    #[test]
    fn test_offset_round_trips_through_distance() {
        let origin = LatLng::new(40.0274, -105.2389);
        let north = origin.offset_by(1000.0, 0.0);
        let east = origin.offset_by(0.0, 1000.0);

        assert!((origin.distance_to(&north) - 1000.0).abs() < 5.0);
        assert!((origin.distance_to(&east) - 1000.0).abs() < 5.0);
    }

    #[test]
    fn test_bounds_contains() {
        let bounds = LatLngBounds::from_coords(40.0, -106.0, 41.0, -105.0);
        let point_inside = LatLng::new(40.5, -105.5);
        let point_outside = LatLng::new(42.0, -105.5);

        assert!(bounds.contains(&point_inside));
        assert!(!bounds.contains(&point_outside));
    }

    #[test]
    fn test_bounds_from_corners() {
        let bounds = LatLngBounds::from_corners(
            LatLng::new(41.0, -106.0), // top-left
            LatLng::new(40.0, -105.0), // bottom-right
        );

        assert_eq!(bounds.south_west, LatLng::new(40.0, -106.0));
        assert_eq!(bounds.north_east, LatLng::new(41.0, -105.0));
        assert!(bounds.is_valid());
    }

    #[test]
    fn test_bounds_center() {
        let bounds = LatLngBounds::from_coords(40.0, -106.0, 41.0, -105.0);
        assert_eq!(bounds.center(), LatLng::new(40.5, -105.5));
    }
}
