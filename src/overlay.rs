//! Drawable shapes and the styling the screen hands back to the map surface.

use crate::core::geo::LatLng;
use serde::{Deserialize, Serialize};

/// RGBA color for overlay styling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Color {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }
}

/// Stroke style for overlay outlines
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct StrokeStyle {
    pub color: Color,
    /// Stroke width in display points
    pub width: f32,
    /// Opacity (0.0 to 1.0)
    pub opacity: f32,
}

impl Default for StrokeStyle {
    fn default() -> Self {
        Self {
            color: Color::rgb(0, 0, 255),
            width: 2.0,
            opacity: 1.0,
        }
    }
}

/// A drawable shape rendered on top of the map surface
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Overlay {
    /// A closed polygon described by its exterior vertices
    Polygon { vertices: Vec<LatLng> },
    /// An open path
    Polyline { points: Vec<LatLng> },
    /// A circle of metric radius around a center
    Circle { center: LatLng, radius_m: f64 },
}

impl Overlay {
    pub fn is_polygon(&self) -> bool {
        matches!(self, Overlay::Polygon { .. })
    }
}

/// Picks a rendering style for overlays submitted by the screen.
///
/// Only polygons get a style; the map surface is expected to skip any
/// overlay the renderer declines.
#[derive(Debug, Clone)]
pub struct OverlayRenderer {
    polygon_stroke: StrokeStyle,
}

impl OverlayRenderer {
    pub fn new() -> Self {
        Self {
            // Purple boundary outline, matching the recording debug overlay
            polygon_stroke: StrokeStyle {
                color: Color::rgb(128, 0, 128),
                ..StrokeStyle::default()
            },
        }
    }

    /// Returns the stroke style for polygon overlays, `None` for any other
    /// shape
    pub fn for_overlay(&self, overlay: &Overlay) -> Option<StrokeStyle> {
        if overlay.is_polygon() {
            Some(self.polygon_stroke)
        } else {
            None
        }
    }
}

impl Default for OverlayRenderer {
    fn default() -> Self {
        Self::new()
    }
}
