use shared_types::{LatLong, MapBounds};

use crate::{error::MapError, status::marker::MarkerSpec};

/// The slice of the mapping SDK the status flow depends on.
///
/// The browser implementation lives in `crate::maps`; tests drive the flow
/// with an in-memory fake.
pub trait MapProvider {
    fn recenter(&self, at: LatLong, zoom: f64);

    /// Draws the pin and wires its popup. On error nothing may remain on the
    /// map.
    fn place_marker(&self, spec: &MarkerSpec) -> Result<(), MapError>;

    fn clear_search_input(&self);

    fn focus_search_input(&self);

    /// Biases address suggestions towards the visible viewport.
    fn bias_search(&self, bounds: MapBounds);
}
