//! Park descriptors and the fixed recording boundary.

use crate::core::geo::{LatLng, LatLngBounds};
use crate::{DognetError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// The fixed 4-vertex boundary polygon drawn when recording starts.
///
/// Corners of the off-leash area at Valmont Dog Park, Boulder CO, listed
/// counterclockwise from the northwest corner.
pub const PARK_BOUNDARY: [LatLng; 4] = [
    LatLng {
        lat: 40.028280,
        lng: -105.240673,
    },
    LatLng {
        lat: 40.026823,
        lng: -105.240694,
    },
    LatLng {
        lat: 40.026827,
        lng: -105.237095,
    },
    LatLng {
        lat: 40.028290,
        lng: -105.237112,
    },
];

/// A named park region with a geographic bounding box.
///
/// Loaded from a JSON descriptor file; treated as an opaque value by the
/// screen, which only ever reads the bounds and midpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ParkDescriptor {
    name: String,
    bounds: LatLngBounds,
}

/// On-disk shape of a park descriptor: a name plus the top-left and
/// bottom-right corners of its bounding box.
#[derive(Debug, Serialize, Deserialize)]
struct ParkFile {
    name: String,
    top_left: LatLng,
    bottom_right: LatLng,
}

impl ParkDescriptor {
    pub fn new(name: impl Into<String>, bounds: LatLngBounds) -> Self {
        Self {
            name: name.into(),
            bounds,
        }
    }

    /// Loads a descriptor from a JSON file.
    ///
    /// Fails if the file is unreadable, is not valid JSON, or describes an
    /// out-of-range or inverted bounding box.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        let file: ParkFile = serde_json::from_str(&raw)?;
        let bounds = LatLngBounds::from_corners(file.top_left, file.bottom_right);

        if !bounds.is_valid() {
            return Err(DognetError::InvalidCoordinates(format!(
                "park '{}' has invalid bounds {:?}",
                file.name, bounds
            )));
        }

        Ok(Self {
            name: file.name,
            bounds,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn bounds(&self) -> &LatLngBounds {
        &self.bounds
    }

    /// The center of the park's bounding box
    pub fn midpoint(&self) -> LatLng {
        self.bounds.center()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn valmont() -> ParkDescriptor {
        ParkDescriptor::new(
            "Valmont Dog Park",
            LatLngBounds::from_corners(
                LatLng::new(40.028290, -105.240694),
                LatLng::new(40.026823, -105.237095),
            ),
        )
    }

    #[test]
    fn test_boundary_is_closed_quad_inside_park() {
        let park = valmont();
        assert_eq!(PARK_BOUNDARY.len(), 4);
        for vertex in &PARK_BOUNDARY {
            assert!(vertex.is_valid());
            assert!(park.bounds().contains(vertex) || {
                // Vertices may sit on the fence line just outside the box
                park.midpoint().distance_to(vertex) < 500.0
            });
        }
    }

    #[test]
    fn test_midpoint_is_bounds_center() {
        let park = valmont();
        assert_eq!(park.midpoint(), park.bounds().center());
    }

    #[test]
    fn test_from_file_parses_corners() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Valmont Dog Park",
                "top_left": {{ "lat": 40.028290, "lng": -105.240694 }},
                "bottom_right": {{ "lat": 40.026823, "lng": -105.237095 }}
            }}"#
        )
        .unwrap();

        let park = ParkDescriptor::from_file(file.path()).unwrap();
        assert_eq!(park.name(), "Valmont Dog Park");
        assert_eq!(park.bounds().north_east.lat, 40.028290);
        assert_eq!(park.bounds().south_west.lng, -105.240694);
    }

    #[test]
    fn test_from_file_rejects_inverted_bounds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{
                "name": "Upside Down",
                "top_left": {{ "lat": 40.0, "lng": -105.0 }},
                "bottom_right": {{ "lat": 41.0, "lng": -106.0 }}
            }}"#
        )
        .unwrap();

        let err = ParkDescriptor::from_file(file.path()).unwrap_err();
        assert!(matches!(err, DognetError::InvalidCoordinates(_)));
    }

    #[test]
    fn test_from_file_missing_file_is_io_error() {
        let err = ParkDescriptor::from_file("/nonexistent/park.json").unwrap_err();
        assert!(matches!(err, DognetError::Io(_)));
    }
}
