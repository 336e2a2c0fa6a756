use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// A measured water-quality parameter that can be plotted.
///
/// The serialized form is the dataset column key (`"chlor"`, `"water_temp"`).
#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash, Serialize, Deserialize)]
pub enum Parameter {
    #[serde(rename = "chlor")]
    Chlorophyll,
    #[serde(rename = "salinity")]
    Salinity,
    #[serde(rename = "turbidity")]
    Turbidity,
    #[serde(rename = "depth")]
    Depth,
    #[serde(rename = "water_temp")]
    WaterTemp,
    #[serde(rename = "air_temp")]
    AirTemp,
}

impl Parameter {
    /// Registry order. Also the subplot order of the statistics grid.
    pub const ALL: [Parameter; 6] = [
        Parameter::Chlorophyll,
        Parameter::Salinity,
        Parameter::Turbidity,
        Parameter::Depth,
        Parameter::WaterTemp,
        Parameter::AirTemp,
    ];

    /// Dataset column key.
    pub fn key(&self) -> &'static str {
        match self {
            Parameter::Chlorophyll => "chlor",
            Parameter::Salinity => "salinity",
            Parameter::Turbidity => "turbidity",
            Parameter::Depth => "depth",
            Parameter::WaterTemp => "water_temp",
            Parameter::AirTemp => "air_temp",
        }
    }

    /// Human-readable name.
    pub fn name(&self) -> &'static str {
        match self {
            Parameter::Chlorophyll => "Chlorophyll",
            Parameter::Salinity => "Salinity",
            Parameter::Turbidity => "Turbidity",
            Parameter::Depth => "Depth",
            Parameter::WaterTemp => "Water Temperature",
            Parameter::AirTemp => "Air Temperature",
        }
    }

    pub fn unit(&self) -> &'static str {
        match self {
            Parameter::Chlorophyll => "ug/l",
            Parameter::Salinity => "ppt",
            Parameter::Turbidity => "NTU",
            Parameter::Depth => "m",
            Parameter::WaterTemp | Parameter::AirTemp => "deg C",
        }
    }

    /// Axis and colorbar label, e.g. "Salinity (ppt)".
    pub fn label(&self) -> String {
        format!("{} ({})", self.name(), self.unit())
    }
}

impl fmt::Display for Parameter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

impl FromStr for Parameter {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let key = s.trim();
        Parameter::ALL
            .into_iter()
            .find(|p| p.key() == key)
            .ok_or_else(|| ValidationError::UnknownParameter(key.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_registry_labels() {
        assert_eq!(Parameter::Salinity.label(), "Salinity (ppt)");
        assert_eq!(Parameter::Chlorophyll.label(), "Chlorophyll (ug/l)");
        assert_eq!(Parameter::WaterTemp.label(), "Water Temperature (deg C)");
    }

    #[test]
    fn test_parse_known_and_unknown_keys() {
        for p in Parameter::ALL {
            assert_eq!(p.key().parse::<Parameter>().unwrap(), p);
        }
        assert_eq!(
            "oxygen".parse::<Parameter>(),
            Err(ValidationError::UnknownParameter("oxygen".to_string()))
        );
    }

    #[test]
    fn test_serializes_as_column_key() {
        let json = serde_json::to_string(&Parameter::WaterTemp).unwrap();
        assert_eq!(json, "\"water_temp\"");
        let back: Parameter = serde_json::from_str("\"chlor\"").unwrap();
        assert_eq!(back, Parameter::Chlorophyll);
    }
}
