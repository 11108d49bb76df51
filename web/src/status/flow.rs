use chrono::{DateTime, Local};
use shared_types::{LatLong, Location, MapBounds, StatusKind};

use crate::{
    error::StatusError,
    status::{marker::MarkerSpec, provider::MapProvider},
};

pub const DEFAULT_CENTER: LatLong = LatLong {
    lat: 37.7749,
    long: -122.4194,
};
pub const DEFAULT_ZOOM: f64 = 12.0;
pub const FOCUS_ZOOM: f64 = 15.0;

/// One result from the address search box.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlaceCandidate {
    pub position: Option<LatLong>,
    pub formatted_address: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    MapReady,
    MapLoadFailed,
    StatusSelected(StatusKind),
    PlacesChanged(Vec<PlaceCandidate>),
    BoundsChanged(MapBounds),
}

/// Where the user is in the select-status / find-address flow.
///
/// Selecting a status and placing a marker are transient and never observed
/// between events.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LocationPending(StatusKind),
    LocationResolved,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UiState {
    pub loading: bool,
    pub error: Option<StatusError>,
    pub selected_location: Option<Location>,
    pub selected_status: Option<StatusKind>,
}

impl Default for UiState {
    fn default() -> Self {
        Self {
            loading: true,
            error: None,
            selected_location: None,
            selected_status: None,
        }
    }
}

impl UiState {
    pub fn phase(&self) -> Phase {
        match (self.selected_status, &self.selected_location) {
            (Some(status), None) => Phase::LocationPending(status),
            (None, Some(_)) => Phase::LocationResolved,
            // Both set only survives a failed placement; the user retries by
            // clicking a status again.
            (Some(_), Some(_)) => Phase::LocationResolved,
            (None, None) => Phase::Idle,
        }
    }

    pub fn prompt(&self) -> String {
        match self.phase() {
            Phase::Idle => "Choose your status, then search for your address.".to_string(),
            Phase::LocationPending(status) => {
                format!("Now enter the address to mark as \"{}\".", status.title())
            }
            Phase::LocationResolved => "Address found. Choose a status to place your marker.".to_string(),
        }
    }

    /// Applies one event. Returns whether anything observable changed.
    pub fn update<P: MapProvider>(
        &mut self,
        msg: Message,
        map: Option<&P>,
        now: impl FnOnce() -> DateTime<Local>,
    ) -> bool {
        match msg {
            Message::MapReady => {
                self.loading = false;
                if self.error == Some(StatusError::MapLoadFailed) {
                    self.error = None;
                }
                true
            }
            Message::MapLoadFailed => {
                if !self.loading {
                    return false;
                }
                self.error = Some(StatusError::MapLoadFailed);
                true
            }
            Message::StatusSelected(status) => {
                self.selected_status = Some(status);
                let Some(map) = map else {
                    self.error = Some(StatusError::MapNotReady);
                    return true;
                };

                match self.selected_location.clone() {
                    Some(location) => self.place(map, &location, status, now),
                    None => {
                        self.error = None;
                        map.focus_search_input();
                    }
                }
                true
            }
            Message::PlacesChanged(candidates) => {
                let Some(first) = candidates.into_iter().next() else {
                    self.error = Some(StatusError::NoResultsFound);
                    return true;
                };
                let Some(position) = first.position else {
                    self.error = Some(StatusError::IncompleteLocation);
                    return true;
                };

                self.error = None;
                let location = Location {
                    lat: position.lat,
                    long: position.long,
                    address: first.formatted_address,
                };
                self.selected_location = Some(location.clone());

                if let Some(map) = map {
                    map.recenter(position, FOCUS_ZOOM);
                    if let Some(status) = self.selected_status {
                        self.place(map, &location, status, now);
                    }
                }
                true
            }
            Message::BoundsChanged(bounds) => {
                if let Some(map) = map {
                    map.bias_search(bounds);
                }
                false
            }
        }
    }

    fn place<P: MapProvider>(
        &mut self,
        map: &P,
        location: &Location,
        status: StatusKind,
        now: impl FnOnce() -> DateTime<Local>,
    ) {
        let spec = MarkerSpec::new(location, status, now());
        match map.place_marker(&spec) {
            Ok(()) => {
                leptos::logging::log!(
                    "Placed {:?} marker at ({}, {})",
                    status,
                    spec.position.lat,
                    spec.position.long
                );
                map.clear_search_input();
                self.selected_location = None;
                self.selected_status = None;
                self.error = None;
            }
            Err(e) => {
                leptos::logging::error!("Failed to place marker: {}", e);
                self.error = Some(StatusError::MarkerPlacementFailed);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::MapError;
    use chrono::TimeZone;
    use std::cell::{Cell, RefCell};

    #[derive(Default)]
    struct FakeMap {
        markers: RefCell<Vec<MarkerSpec>>,
        recenters: RefCell<Vec<(LatLong, f64)>>,
        biases: RefCell<Vec<MapBounds>>,
        input_clears: Cell<usize>,
        input_focuses: Cell<usize>,
        fail_placement: Cell<bool>,
    }

    impl MapProvider for FakeMap {
        fn recenter(&self, at: LatLong, zoom: f64) {
            self.recenters.borrow_mut().push((at, zoom));
        }

        fn place_marker(&self, spec: &MarkerSpec) -> Result<(), MapError> {
            if self.fail_placement.get() {
                return Err(MapError::PopupAttach("info window rejected".to_string()));
            }
            self.markers.borrow_mut().push(spec.clone());
            Ok(())
        }

        fn clear_search_input(&self) {
            self.input_clears.set(self.input_clears.get() + 1);
        }

        fn focus_search_input(&self) {
            self.input_focuses.set(self.input_focuses.get() + 1);
        }

        fn bias_search(&self, bounds: MapBounds) {
            self.biases.borrow_mut().push(bounds);
        }
    }

    fn at(hour: u32, minute: u32) -> DateTime<Local> {
        Local.with_ymd_and_hms(2024, 3, 1, hour, minute, 0).unwrap()
    }

    fn candidate(lat: f64, long: f64, address: &str) -> PlaceCandidate {
        PlaceCandidate {
            position: Some(LatLong { lat, long }),
            formatted_address: Some(address.to_string()),
        }
    }

    fn ready_state(map: &FakeMap) -> UiState {
        let mut state = UiState::default();
        state.update(Message::MapReady, Some(map), || at(9, 0));
        state
    }

    #[test]
    fn test_status_with_resolved_location_places_one_marker() {
        for status in StatusKind::ALL {
            let map = FakeMap::default();
            let mut state = ready_state(&map);

            state.update(
                Message::PlacesChanged(vec![candidate(37.8, -122.4, "1 Main St")]),
                Some(&map),
                || at(9, 1),
            );
            assert_eq!(state.phase(), Phase::LocationResolved);

            state.update(Message::StatusSelected(status), Some(&map), || at(9, 2));

            let markers = map.markers.borrow();
            assert_eq!(markers.len(), 1);
            assert_eq!(markers[0].status, status);
            assert_eq!(markers[0].popup.title, status.title());
            assert!(markers[0].badge_style().contains(status.color()));
            assert_eq!(state.selected_status, None);
            assert_eq!(state.selected_location, None);
            assert_eq!(state.error, None);
            assert_eq!(state.phase(), Phase::Idle);
        }
    }

    #[test]
    fn test_status_before_map_ready_is_rejected() {
        let map = FakeMap::default();
        let mut state = UiState::default();

        state.update(
            Message::StatusSelected(StatusKind::NeedHelp),
            None::<&FakeMap>,
            || at(9, 0),
        );

        assert!(state.loading);
        assert_eq!(state.error, Some(StatusError::MapNotReady));
        assert_eq!(state.selected_status, Some(StatusKind::NeedHelp));

        // Readiness arriving later does not resume the earlier click.
        state.update(Message::MapReady, Some(&map), || at(9, 1));
        assert!(!state.loading);
        assert!(map.markers.borrow().is_empty());
        assert_eq!(map.input_focuses.get(), 0);
    }

    #[test]
    fn test_zero_results_keeps_previous_selection() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);
        state.update(
            Message::StatusSelected(StatusKind::OfferHelp),
            Some(&map),
            || at(9, 0),
        );
        let before = state.clone();

        state.update(Message::PlacesChanged(vec![]), Some(&map), || at(9, 1));

        assert_eq!(state.error, Some(StatusError::NoResultsFound));
        assert_eq!(state.selected_status, before.selected_status);
        assert_eq!(state.selected_location, before.selected_location);
        assert!(map.recenters.borrow().is_empty());
        assert!(map.markers.borrow().is_empty());
    }

    #[test]
    fn test_zero_results_keeps_resolved_location() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);
        state.update(
            Message::PlacesChanged(vec![candidate(40.7128, -74.006, "New York, NY")]),
            Some(&map),
            || at(9, 0),
        );
        assert_eq!(state.phase(), Phase::LocationResolved);
        let before = state.clone();

        state.update(Message::PlacesChanged(vec![]), Some(&map), || at(9, 1));

        assert_eq!(state.error, Some(StatusError::NoResultsFound));
        assert_eq!(state.selected_location, before.selected_location);
        assert_eq!(state.selected_status, None);
        assert_eq!(state.phase(), Phase::LocationResolved);
        assert_eq!(map.recenters.borrow().len(), 1);
        assert!(map.markers.borrow().is_empty());
    }

    #[test]
    fn test_candidate_without_geometry_is_rejected() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);
        state.update(
            Message::PlacesChanged(vec![candidate(1.0, 2.0, "Old Place")]),
            Some(&map),
            || at(9, 0),
        );

        state.update(
            Message::PlacesChanged(vec![PlaceCandidate {
                position: None,
                formatted_address: Some("Somewhere vague".to_string()),
            }]),
            Some(&map),
            || at(9, 1),
        );

        assert_eq!(state.error, Some(StatusError::IncompleteLocation));
        let location = state.selected_location.as_ref().unwrap();
        assert_eq!(location.address.as_deref(), Some("Old Place"));
        assert_eq!(map.recenters.borrow().len(), 1);
    }

    #[test]
    fn test_location_resolved_while_pending_places_immediately() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);

        state.update(Message::StatusSelected(StatusKind::Safe), Some(&map), || {
            at(9, 0)
        });
        assert_eq!(state.phase(), Phase::LocationPending(StatusKind::Safe));
        assert_eq!(map.input_focuses.get(), 1);
        assert!(state.prompt().contains("Safe"));

        state.update(
            Message::PlacesChanged(vec![candidate(37.78, -122.41, "500 Howard St")]),
            Some(&map),
            || at(9, 5),
        );

        assert_eq!(map.markers.borrow().len(), 1);
        assert_eq!(map.input_clears.get(), 1);
        assert_eq!(
            map.recenters.borrow()[0],
            (LatLong { lat: 37.78, long: -122.41 }, FOCUS_ZOOM)
        );
        assert_eq!(state.phase(), Phase::Idle);
    }

    #[test]
    fn test_reselecting_overwrites_pending_status() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);

        state.update(
            Message::StatusSelected(StatusKind::NeedHelp),
            Some(&map),
            || at(9, 0),
        );
        state.update(
            Message::StatusSelected(StatusKind::OfferHelp),
            Some(&map),
            || at(9, 0),
        );
        state.update(
            Message::PlacesChanged(vec![candidate(10.0, 20.0, "Elm St")]),
            Some(&map),
            || at(9, 1),
        );

        let markers = map.markers.borrow();
        assert_eq!(markers.len(), 1);
        assert_eq!(markers[0].status, StatusKind::OfferHelp);
    }

    #[test]
    fn test_two_markers_keep_their_own_payloads() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);

        state.update(
            Message::StatusSelected(StatusKind::NeedHelp),
            Some(&map),
            || at(9, 0),
        );
        state.update(
            Message::PlacesChanged(vec![candidate(1.0, 1.0, "First Ave")]),
            Some(&map),
            || at(10, 15),
        );
        state.update(
            Message::PlacesChanged(vec![candidate(2.0, 2.0, "Second Ave")]),
            Some(&map),
            || at(11, 30),
        );
        state.update(Message::StatusSelected(StatusKind::Safe), Some(&map), || {
            at(11, 45)
        });
        state.update(Message::PlacesChanged(vec![]), Some(&map), || at(12, 0));

        let markers = map.markers.borrow();
        assert_eq!(markers.len(), 2);
        assert_eq!(markers[0].status, StatusKind::NeedHelp);
        assert_eq!(markers[0].popup.address.as_deref(), Some("First Ave"));
        assert_eq!(markers[0].popup.placed_at, at(10, 15));
        assert_eq!(markers[1].status, StatusKind::Safe);
        assert_eq!(markers[1].popup.address.as_deref(), Some("Second Ave"));
        assert_eq!(markers[1].popup.placed_at, at(11, 45));
    }

    #[test]
    fn test_failed_placement_keeps_selection_for_retry() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);
        state.update(
            Message::PlacesChanged(vec![candidate(3.0, 4.0, "Pine St")]),
            Some(&map),
            || at(9, 0),
        );

        map.fail_placement.set(true);
        state.update(
            Message::StatusSelected(StatusKind::NeedHelp),
            Some(&map),
            || at(9, 1),
        );

        assert_eq!(state.error, Some(StatusError::MarkerPlacementFailed));
        assert!(map.markers.borrow().is_empty());
        assert_eq!(map.input_clears.get(), 0);
        assert!(state.selected_location.is_some());

        map.fail_placement.set(false);
        state.update(
            Message::StatusSelected(StatusKind::NeedHelp),
            Some(&map),
            || at(9, 2),
        );
        assert_eq!(map.markers.borrow().len(), 1);
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_load_failure_is_cleared_by_late_ready() {
        let map = FakeMap::default();
        let mut state = UiState::default();

        assert!(state.update(Message::MapLoadFailed, None::<&FakeMap>, || at(9, 0)));
        assert!(state.loading);
        assert_eq!(state.error, Some(StatusError::MapLoadFailed));

        state.update(Message::MapReady, Some(&map), || at(9, 1));
        assert!(!state.loading);
        assert_eq!(state.error, None);

        assert!(!state.update(Message::MapLoadFailed, Some(&map), || at(9, 2)));
        assert_eq!(state.error, None);
    }

    #[test]
    fn test_bounds_change_biases_search_without_state_change() {
        let map = FakeMap::default();
        let mut state = ready_state(&map);
        let before = state.clone();
        let bounds = MapBounds {
            north_east: LatLong { lat: 38.0, long: -122.0 },
            south_west: LatLong { lat: 37.0, long: -123.0 },
        };

        let changed = state.update(Message::BoundsChanged(bounds), Some(&map), || at(9, 0));

        assert!(!changed);
        assert_eq!(state, before);
        assert_eq!(map.biases.borrow().as_slice(), &[bounds]);
    }
}
