use crate::error::ValidationError;
use serde::{de, Deserialize, Deserializer, Serialize};
use std::{fmt, str::FromStr};

/// Valid station identifiers for the station selector, ordered from the
/// head of the estuary (36) seaward, followed by the south bay stations.
pub const STATION_IDS: [&str; 38] = [
    "36", "35", "34", "33", "32", "31", "30", "29.5", "29", "28", "27", "26", "25", "24", "23",
    "22", "21", "20", "18", "17", "16", "15", "14", "13", "12", "11", "10", "9", "8", "7", "6",
    "5", "4", "3", "2", "649", "653", "657",
];

/// Identifier of a fixed sampling station.
///
/// Station ids are numeric in the source data (`36`, `36.0`, `29.5`) and are
/// normalised to their shortest decimal text so that `36.0` and `36` compare
/// equal.
#[derive(Debug, PartialEq, Eq, Clone, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Normalise raw text into a station id. Numeric text is reformatted,
    /// anything else is kept trimmed. Empty text yields `None`.
    pub fn parse(raw: &str) -> Option<StationId> {
        let raw = raw.trim();
        if raw.is_empty() {
            return None;
        }
        match raw.parse::<f64>() {
            Ok(n) if n.is_finite() => Some(StationId::from_number(n)),
            Ok(_) => None,
            Err(_) => Some(StationId(raw.to_string())),
        }
    }

    pub fn from_number(n: f64) -> StationId {
        StationId(format!("{}", n))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Whether this id is part of [`STATION_IDS`].
    pub fn is_known(&self) -> bool {
        STATION_IDS.contains(&self.0.as_str())
    }

    /// All valid station ids in selector order.
    pub fn all() -> Vec<StationId> {
        STATION_IDS.iter().map(|s| StationId((*s).to_string())).collect()
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(&self.0)
    }
}

/// Parses and checks membership in [`STATION_IDS`].
impl FromStr for StationId {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match StationId::parse(s) {
            Some(id) if id.is_known() => Ok(id),
            _ => Err(ValidationError::UnknownStation(s.trim().to_string())),
        }
    }
}

struct StationIdVisitor;

impl de::Visitor<'_> for StationIdVisitor {
    type Value = StationId;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str("a numeric or textual station id")
    }

    fn visit_u64<E: de::Error>(self, v: u64) -> Result<StationId, E> {
        Ok(StationId(v.to_string()))
    }

    fn visit_i64<E: de::Error>(self, v: i64) -> Result<StationId, E> {
        Ok(StationId(v.to_string()))
    }

    fn visit_f64<E: de::Error>(self, v: f64) -> Result<StationId, E> {
        if v.is_finite() {
            Ok(StationId::from_number(v))
        } else {
            Err(E::invalid_value(de::Unexpected::Float(v), &self))
        }
    }

    fn visit_str<E: de::Error>(self, v: &str) -> Result<StationId, E> {
        StationId::parse(v).ok_or_else(|| E::invalid_value(de::Unexpected::Str(v), &self))
    }
}

impl<'de> Deserialize<'de> for StationId {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(StationIdVisitor)
    }
}

/// A fixed sampling station. Loaded once and never filtered.
#[derive(Debug, PartialEq, Clone, Serialize, Deserialize)]
pub struct Station {
    pub station_id: StationId,
    /// Latitude in decimal degrees
    #[serde(alias = "lat")]
    pub latitude: f64,
    /// Longitude in decimal degrees
    #[serde(alias = "lon")]
    pub longitude: f64,
}
