pub mod error;
pub mod loading;
pub mod status_legend;

pub use error::ErrorBanner;
pub use loading::MapLoadingOverlay;
pub use status_legend::StatusLegend;
