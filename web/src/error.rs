use thiserror::Error;

/// Every failure the user can see. Each one replaces whatever banner was
/// showing before and none of them are retried automatically.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StatusError {
    #[error("No results found for that address. Please try a different search.")]
    NoResultsFound,
    #[error("That place has no usable location. Please pick another result.")]
    IncompleteLocation,
    #[error("The map is still loading. Please wait a moment and try again.")]
    MapNotReady,
    #[error("Could not place your marker. Please try again.")]
    MarkerPlacementFailed,
    #[error("The map failed to load. Check your connection and reload the page.")]
    MapLoadFailed,
}

/// Failures raised inside the mapping SDK boundary.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MapError {
    #[error("mapping SDK is not available on window.google")]
    SdkUnavailable,
    #[error("failed to build marker content: {0}")]
    MarkerContent(String),
    #[error("failed to attach popup: {0}")]
    PopupAttach(String),
    #[error("script load failed: {0}")]
    ScriptLoad(String),
    #[error("failed to construct {what}: {detail}")]
    Construction { what: &'static str, detail: String },
}
