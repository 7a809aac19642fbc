//! # Dognet
//!
//! Controller logic for a single-screen "record my park visit" map
//! application, decoupled from any concrete platform.
//!
//! The screen requests location permission, keeps the map centered on the
//! device position, and maintains a two-state recording toggle that draws a
//! fixed park-boundary polygon when recording starts. Platform services are
//! modeled as traits ([`location::LocationProvider`], [`surface::MapSurface`])
//! injected into the screen, so the whole state machine can be exercised
//! headless with test doubles.

pub mod core;
pub mod location;
pub mod overlay;
pub mod park;
pub mod prelude;
pub mod screen;
pub mod surface;

// Re-export public API
pub use crate::core::{
    geo::{LatLng, LatLngBounds},
    region::Region,
};

pub use location::{
    Accuracy, AuthorizationState, DistanceFilter, LocationError, LocationEventSink,
    LocationProvider, UpdateOptions,
};

pub use overlay::{Color, Overlay, OverlayRenderer, StrokeStyle};

pub use park::ParkDescriptor;

pub use screen::{ControlState, RecordAction, RecordScreen, RecordingState};

pub use surface::{MapSurface, MapType, RecordingSurface};

/// Result type used throughout the library
pub type Result<T> = std::result::Result<T, DognetError>;

/// Common error types
#[derive(Debug, thiserror::Error)]
pub enum DognetError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Invalid coordinates: {0}")]
    InvalidCoordinates(String),

    #[error("Location error: {0}")]
    Location(#[from] location::LocationError),
}

/// Error type alias for convenience
pub type Error = DognetError;
