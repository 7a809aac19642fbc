//! The seam between the screen and the platform map view.

use crate::core::region::Region;
use crate::overlay::Overlay;
use serde::{Deserialize, Serialize};

/// Base imagery rendered by the map surface
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum MapType {
    #[default]
    Standard,
    Satellite,
    Hybrid,
}

/// The platform map view as seen by the screen.
///
/// The screen pushes viewport and overlay state through this trait; rendering
/// itself is entirely the platform's concern.
pub trait MapSurface {
    /// Moves the visible region, optionally animating the transition
    fn set_region(&mut self, region: &Region, animated: bool);

    /// Shows or hides the device-position marker
    fn set_shows_user_marker(&mut self, visible: bool);

    /// Switches the base imagery
    fn set_map_type(&mut self, map_type: MapType);

    /// Adds a shape to be drawn on top of the map
    fn add_overlay(&mut self, overlay: Overlay);
}

/// A [`MapSurface`] that records every call instead of rendering.
///
/// Used as the test double throughout the crate, and usable headless by
/// embedders that want to observe what the screen would have drawn.
#[derive(Debug, Default)]
pub struct RecordingSurface {
    regions: Vec<(Region, bool)>,
    marker_visible: bool,
    map_type: MapType,
    overlays: Vec<Overlay>,
}

impl RecordingSurface {
    pub fn new() -> Self {
        Self::default()
    }

    /// All region changes requested so far, oldest first, with their
    /// animation flag
    pub fn regions(&self) -> &[(Region, bool)] {
        &self.regions
    }

    /// The most recently requested region, if any
    pub fn current_region(&self) -> Option<&Region> {
        self.regions.last().map(|(region, _)| region)
    }

    pub fn marker_visible(&self) -> bool {
        self.marker_visible
    }

    pub fn map_type(&self) -> MapType {
        self.map_type
    }

    pub fn overlays(&self) -> &[Overlay] {
        &self.overlays
    }
}

impl MapSurface for RecordingSurface {
    fn set_region(&mut self, region: &Region, animated: bool) {
        self.regions.push((*region, animated));
    }

    fn set_shows_user_marker(&mut self, visible: bool) {
        self.marker_visible = visible;
    }

    fn set_map_type(&mut self, map_type: MapType) {
        self.map_type = map_type;
    }

    fn add_overlay(&mut self, overlay: Overlay) {
        self.overlays.push(overlay);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::geo::LatLng;

    #[test]
    fn test_recording_surface_tracks_calls() {
        let mut surface = RecordingSurface::new();
        assert!(surface.current_region().is_none());

        let region = Region::with_distance(LatLng::new(40.0, -105.0), 2000.0, 2000.0);
        surface.set_region(&region, true);
        surface.set_shows_user_marker(true);
        surface.set_map_type(MapType::Satellite);

        assert_eq!(surface.regions(), &[(region, true)]);
        assert_eq!(surface.current_region(), Some(&region));
        assert!(surface.marker_visible());
        assert_eq!(surface.map_type(), MapType::Satellite);
        assert!(surface.overlays().is_empty());
    }
}
