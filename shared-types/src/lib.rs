use serde::{Deserialize, Serialize};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct LatLong {
    pub lat: f64,
    pub long: f64,
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Default)]
pub struct MapBounds {
    pub north_east: LatLong,
    pub south_west: LatLong,
}

/// A geocoded point, held only until a marker is placed on it.
#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct Location {
    pub lat: f64,
    pub long: f64,
    pub address: Option<String>,
}

impl Location {
    pub fn position(&self) -> LatLong {
        LatLong {
            lat: self.lat,
            long: self.long,
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "camelCase")]
pub enum StatusKind {
    NeedHelp,
    OfferHelp,
    Safe,
}

impl StatusKind {
    pub const ALL: [StatusKind; 3] = [StatusKind::NeedHelp, StatusKind::OfferHelp, StatusKind::Safe];

    pub fn color(self) -> &'static str {
        match self {
            StatusKind::NeedHelp => "#dc2626",
            StatusKind::OfferHelp => "#2563eb",
            StatusKind::Safe => "#16a34a",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            StatusKind::NeedHelp => "!",
            StatusKind::OfferHelp => "+",
            StatusKind::Safe => "✓",
        }
    }

    pub fn title(self) -> &'static str {
        match self {
            StatusKind::NeedHelp => "Need Help",
            StatusKind::OfferHelp => "Offering Help",
            StatusKind::Safe => "Safe",
        }
    }
}
