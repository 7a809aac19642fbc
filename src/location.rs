//! The seam between the screen and the platform location subsystem.
//!
//! The platform side implements [`LocationProvider`] and drives a
//! [`LocationEventSink`] with authorization, position, and error events.
//! Delivery is assumed serial on one context; the sink never blocks and
//! never spawns work of its own.

use crate::core::geo::LatLng;

/// Platform-reported permission level for location access
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AuthorizationState {
    NotDetermined,
    AuthorizedAlways,
    AuthorizedWhenInUse,
    Denied,
    Restricted,
}

impl AuthorizationState {
    /// Whether the app may receive position updates at all
    pub fn is_authorized(&self) -> bool {
        matches!(
            self,
            AuthorizationState::AuthorizedAlways | AuthorizationState::AuthorizedWhenInUse
        )
    }
}

impl std::fmt::Display for AuthorizationState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let name = match self {
            AuthorizationState::NotDetermined => "NotDetermined",
            AuthorizationState::AuthorizedAlways => "AuthorizedAlways",
            AuthorizationState::AuthorizedWhenInUse => "AuthorizedWhenInUse",
            AuthorizationState::Denied => "Denied",
            AuthorizationState::Restricted => "Restricted",
        };
        f.write_str(name)
    }
}

/// Desired accuracy hint passed to the provider
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Accuracy {
    #[default]
    Best,
    NearestTenMeters,
    HundredMeters,
    Kilometer,
}

/// Minimum movement before the provider reports a new position
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum DistanceFilter {
    /// Report every change in position
    #[default]
    None,
    /// Report only after moving at least this many meters
    Meters(f64),
}

/// Update subscription configuration.
///
/// The default asks for the best available accuracy with no distance
/// filter, i.e. every position delta the platform can deliver.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct UpdateOptions {
    pub accuracy: Accuracy,
    pub distance_filter: DistanceFilter,
}

/// Errors surfaced by the location provider's error callback
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LocationError {
    #[error("location services unavailable")]
    Unavailable,

    #[error("location permission denied")]
    PermissionDenied,

    #[error("platform location failure: {0}")]
    Platform(String),
}

/// The platform location subsystem as seen by the screen
pub trait LocationProvider {
    /// Asks the platform for location permission.
    ///
    /// Non-blocking: the user's answer arrives later through
    /// [`LocationEventSink::authorization_changed`].
    fn request_permission(&mut self);

    /// Starts the position subscription with the given options
    fn start_updates(&mut self, options: &UpdateOptions) -> Result<(), LocationError>;

    /// Stops the position subscription
    fn stop_updates(&mut self);
}

/// Callback surface the platform drives with location events
pub trait LocationEventSink {
    /// The user's permission level changed (including the initial grant)
    fn authorization_changed(&mut self, state: AuthorizationState);

    /// One or more new position samples arrived, oldest first.
    /// An empty batch is legal and must be ignored.
    fn positions_updated(&mut self, positions: &[LatLng]);

    /// The provider failed; diagnostic only, no recovery is expected
    fn location_error(&mut self, error: &LocationError);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_authorization_display_names() {
        let cases = [
            (AuthorizationState::NotDetermined, "NotDetermined"),
            (AuthorizationState::AuthorizedAlways, "AuthorizedAlways"),
            (AuthorizationState::AuthorizedWhenInUse, "AuthorizedWhenInUse"),
            (AuthorizationState::Denied, "Denied"),
            (AuthorizationState::Restricted, "Restricted"),
        ];

        for (state, name) in cases {
            assert_eq!(state.to_string(), name);
        }
    }

    #[test]
    fn test_is_authorized() {
        assert!(AuthorizationState::AuthorizedAlways.is_authorized());
        assert!(AuthorizationState::AuthorizedWhenInUse.is_authorized());
        assert!(!AuthorizationState::NotDetermined.is_authorized());
        assert!(!AuthorizationState::Denied.is_authorized());
        assert!(!AuthorizationState::Restricted.is_authorized());
    }

    #[test]
    fn test_default_options_take_every_delta() {
        let options = UpdateOptions::default();
        assert_eq!(options.accuracy, Accuracy::Best);
        assert_eq!(options.distance_filter, DistanceFilter::None);
    }
}
