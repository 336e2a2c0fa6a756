use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Basemap tile style. Passed through to the renderer unchanged.
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum MapStyle {
    #[default]
    CartoPositron,
    CartoDarkmatter,
    OpenStreetMap,
}

impl MapStyle {
    pub const ALL: [MapStyle; 3] = [
        MapStyle::CartoPositron,
        MapStyle::CartoDarkmatter,
        MapStyle::OpenStreetMap,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            MapStyle::CartoPositron => "carto-positron",
            MapStyle::CartoDarkmatter => "carto-darkmatter",
            MapStyle::OpenStreetMap => "open-street-map",
        }
    }

    /// Label for the style picker.
    pub fn label(&self) -> &'static str {
        match self {
            MapStyle::CartoPositron => "Carto Positron (default)",
            MapStyle::CartoDarkmatter => "Carto Darkmatter",
            MapStyle::OpenStreetMap => "Open Street Map",
        }
    }
}

impl fmt::Display for MapStyle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for MapStyle {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        MapStyle::ALL
            .into_iter()
            .find(|m| m.as_str() == key)
            .ok_or_else(|| ValidationError::UnknownMapStyle(key.to_string()))
    }
}
