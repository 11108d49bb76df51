pub mod flow;
pub mod marker;
pub mod provider;

pub use flow::{Message, Phase, PlaceCandidate, UiState};
pub use marker::MarkerSpec;
pub use provider::MapProvider;
