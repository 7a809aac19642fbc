//! The record screen controller: authorization handling, position
//! following, and the two-state recording toggle.

use crate::core::region::{Region, FOLLOW_SPAN_METERS};
use crate::location::{
    AuthorizationState, LocationError, LocationEventSink, LocationProvider, UpdateOptions,
};
use crate::overlay::{Overlay, OverlayRenderer, StrokeStyle};
use crate::park::{ParkDescriptor, PARK_BOUNDARY};
use crate::surface::{MapSurface, MapType};
use crate::{core::geo::LatLng, Result};

/// Whether a park visit is currently being recorded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RecordingState {
    #[default]
    Idle,
    Recording,
}

/// Explicit identity of the pressed recording control.
///
/// The original UI branched on the button's label text; callers here pass
/// the action itself, with [`RecordAction::from_label`] kept for embedders
/// still wired to label strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecordAction {
    Start,
    Stop,
}

impl RecordAction {
    /// Legacy mapping from button label text: labels containing "Stop" mean
    /// [`RecordAction::Stop`], anything else starts a recording.
    pub fn from_label(label: &str) -> Self {
        if label.contains("Stop") {
            RecordAction::Stop
        } else {
            RecordAction::Start
        }
    }
}

/// Enabled/disabled state of the two recording buttons.
///
/// Exactly one of the two is enabled at any time; this is recomputed
/// synchronously from [`RecordingState`] after every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ControlState {
    pub start_enabled: bool,
    pub stop_enabled: bool,
}

impl ControlState {
    /// The control configuration matching a recording state
    pub fn for_state(state: RecordingState) -> Self {
        match state {
            RecordingState::Idle => Self {
                start_enabled: true,
                stop_enabled: false,
            },
            RecordingState::Recording => Self {
                start_enabled: false,
                stop_enabled: true,
            },
        }
    }
}

/// The location-recording map screen.
///
/// Owns the recording state machine and pushes viewport and overlay updates
/// to the injected [`MapSurface`]. Location events arrive through the
/// [`LocationEventSink`] impl; the platform is expected to deliver them
/// serially on one context.
pub struct RecordScreen<S: MapSurface> {
    surface: S,
    park: ParkDescriptor,
    renderer: OverlayRenderer,
    recording: RecordingState,
    controls: ControlState,
}

impl<S: MapSurface> RecordScreen<S> {
    /// Creates the screen over a map surface, framed on the given park
    pub fn new(surface: S, park: ParkDescriptor) -> Self {
        let recording = RecordingState::default();
        Self {
            surface,
            park,
            renderer: OverlayRenderer::new(),
            recording,
            controls: ControlState::for_state(recording),
        }
    }

    /// Screen-load hook.
    ///
    /// Requests permission, starts position updates at the default accuracy
    /// (best, every delta), switches the map to satellite imagery, and
    /// frames the park bounds as the initial region. Permission denial is
    /// not an error here; it arrives later through
    /// [`LocationEventSink::authorization_changed`].
    pub fn on_load(&mut self, provider: &mut dyn LocationProvider) -> Result<()> {
        provider.request_permission();
        provider.start_updates(&UpdateOptions::default())?;

        self.surface.set_map_type(MapType::Satellite);

        let initial = Region::from_bounds(self.park.bounds());
        self.surface.set_region(&initial, false);

        log::info!("record screen loaded, framing {}", self.park.name());
        Ok(())
    }

    /// Applies a recording control press.
    ///
    /// Starting a recording also submits the fixed park boundary polygon to
    /// the surface, once per press. Both branches recompute the control
    /// state so exactly one button stays enabled.
    pub fn handle_action(&mut self, action: RecordAction) {
        match action {
            RecordAction::Start => {
                self.recording = RecordingState::Recording;
                self.surface.add_overlay(Overlay::Polygon {
                    vertices: PARK_BOUNDARY.to_vec(),
                });
                log::info!("recording started at {}", self.park.name());
            }
            RecordAction::Stop => {
                self.recording = RecordingState::Idle;
                log::info!("recording stopped");
            }
        }
        self.controls = ControlState::for_state(self.recording);
    }

    /// Style callback for overlays previously submitted to the surface
    pub fn renderer_for(&self, overlay: &Overlay) -> Option<StrokeStyle> {
        self.renderer.for_overlay(overlay)
    }

    pub fn recording_state(&self) -> RecordingState {
        self.recording
    }

    pub fn controls(&self) -> ControlState {
        self.controls
    }

    pub fn park(&self) -> &ParkDescriptor {
        &self.park
    }

    /// The underlying map surface, for inspection by embedders and tests
    pub fn surface(&self) -> &S {
        &self.surface
    }
}

impl<S: MapSurface> LocationEventSink for RecordScreen<S> {
    fn authorization_changed(&mut self, state: AuthorizationState) {
        // The marker follows when-in-use grants only; everything else,
        // including always-authorized, leaves it hidden.
        self.surface
            .set_shows_user_marker(state == AuthorizationState::AuthorizedWhenInUse);
        log::info!("location authorization changed to {state}");
    }

    fn positions_updated(&mut self, positions: &[LatLng]) {
        // Only the first sample of a batch matters; the rest are stale by
        // the time the region animation lands.
        let Some(position) = positions.first() else {
            return;
        };

        let region = Region::with_distance(*position, FOLLOW_SPAN_METERS, FOLLOW_SPAN_METERS);
        self.surface.set_region(&region, true);
    }

    fn location_error(&mut self, error: &LocationError) {
        log::error!("location provider failed: {error}");
    }
}
