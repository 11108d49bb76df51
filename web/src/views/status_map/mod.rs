pub mod status_buttons;
pub mod status_map;

pub use status_map::StatusMapPage;
