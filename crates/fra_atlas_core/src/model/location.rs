//! Map locations and the layer categories they belong to.
//!
//! # Invariants
//! - Every location belongs to exactly one `LayerType`.
//! - Coordinates are WGS84 degrees as given by the seed data.

use serde::{Deserialize, Serialize};

/// Togglable category of map markers.
///
/// Ordered so sets of layers iterate deterministically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum LayerType {
    Water,
    Pmkisan,
    Population,
    Infrastructure,
}

impl LayerType {
    /// Layers in layer-control display order.
    pub const ALL: [LayerType; 4] = [
        Self::Water,
        Self::Pmkisan,
        Self::Population,
        Self::Infrastructure,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Water => "water",
            Self::Pmkisan => "pmkisan",
            Self::Population => "population",
            Self::Infrastructure => "infrastructure",
        }
    }

    /// Human label shown next to the layer switch.
    pub fn label(self) -> &'static str {
        match self {
            Self::Water => "Water Resources",
            Self::Pmkisan => "PM-KISAN Coverage",
            Self::Population => "Population Density",
            Self::Infrastructure => "Infrastructure",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LocationItem {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(rename = "type")]
    pub layer: LayerType,
}

/// Latitude/longitude pair handed to the map surface.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    pub lat: f64,
    pub lng: f64,
}

/// Point marker derived from one visible location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapMarker {
    pub id: String,
    pub title: String,
    pub position: LatLng,
    pub layer: LayerType,
}

impl From<&LocationItem> for MapMarker {
    fn from(location: &LocationItem) -> Self {
        Self {
            id: location.id.clone(),
            title: location.name.clone(),
            position: LatLng {
                lat: location.lat,
                lng: location.lng,
            },
            layer: location.layer,
        }
    }
}
