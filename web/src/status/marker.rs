use chrono::{DateTime, Local};
use shared_types::{LatLong, Location, StatusKind};

pub const BADGE_SIZE_PX: u32 = 34;

/// Everything the map needs to draw one pin and its popup.
#[derive(Debug, Clone, PartialEq)]
pub struct MarkerSpec {
    pub position: LatLong,
    pub status: StatusKind,
    pub popup: PopupContent,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PopupContent {
    pub title: String,
    pub address: Option<String>,
    pub placed_at: DateTime<Local>,
}

impl PopupContent {
    pub fn placed_at_label(&self) -> String {
        format!("Placed at {}", self.placed_at.format("%-I:%M:%S %p"))
    }
}

impl MarkerSpec {
    pub fn new(location: &Location, status: StatusKind, placed_at: DateTime<Local>) -> Self {
        Self {
            position: location.position(),
            status,
            popup: PopupContent {
                title: status.title().to_string(),
                address: location.address.clone(),
                placed_at,
            },
        }
    }

    /// Inline style for the circular badge used as the pin's content node.
    pub fn badge_style(&self) -> String {
        format!(
            "width: {size}px; height: {size}px; border-radius: 50%; background: {color}; \
             border: 2px solid #ffffff; color: #ffffff; display: flex; align-items: center; \
             justify-content: center; font-size: 16px; font-weight: 700; \
             box-shadow: 0 2px 6px rgba(0, 0, 0, 0.35); cursor: pointer;",
            size = BADGE_SIZE_PX,
            color = self.status.color(),
        )
    }

    pub fn badge_glyph(&self) -> &'static str {
        self.status.icon()
    }
}
