//! Prelude module for common dognet types and traits
//!
//! Re-exports the most commonly used types and traits for easy importing
//! with `use dognet::prelude::*;`

pub use crate::core::{
    geo::{LatLng, LatLngBounds},
    region::{Region, FOLLOW_SPAN_METERS},
};

pub use crate::location::{
    Accuracy, AuthorizationState, DistanceFilter, LocationError, LocationEventSink,
    LocationProvider, UpdateOptions,
};

pub use crate::overlay::{Color, Overlay, OverlayRenderer, StrokeStyle};

pub use crate::park::{ParkDescriptor, PARK_BOUNDARY};

pub use crate::screen::{ControlState, RecordAction, RecordScreen, RecordingState};

pub use crate::surface::{MapSurface, MapType, RecordingSurface};

pub use crate::{DognetError, Result};
