use crate::error::{LoadError, Result};
use crate::parameter::Parameter;
use crate::station::StationId;
use chrono::{NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// One flow-through observation recorded along a transect.
#[derive(Debug, PartialEq, Clone, Serialize)]
pub struct Measurement {
    /// Latitude in decimal degrees, null when the GPS fix was lost
    pub latitude: Option<f64>,
    /// Longitude in decimal degrees
    pub longitude: Option<f64>,
    /// Observation time, timezone-naive. Null for a blank timestamp cell.
    pub datetime: Option<NaiveDateTime>,
    /// Source transect file
    pub file: String,
    pub dataset: Option<String>,
    /// Nearest fixed station, when the boat was on station
    pub station_id: Option<StationId>,
    /// Distance travelled from station 36
    pub distance: Option<f64>,
    pub chlor: Option<f64>,
    pub salinity: Option<f64>,
    pub turbidity: Option<f64>,
    pub depth: Option<f64>,
    /// Primary sensor, with the bow sensor filled in where the primary is missing
    pub water_temp: Option<f64>,
    pub air_temp: Option<f64>,
    pub bow_temp: Option<f64>,
}

impl Measurement {
    /// Value of a registry parameter for this row.
    pub fn value(&self, parameter: Parameter) -> Option<f64> {
        match parameter {
            Parameter::Chlorophyll => self.chlor,
            Parameter::Salinity => self.salinity,
            Parameter::Turbidity => self.turbidity,
            Parameter::Depth => self.depth,
            Parameter::WaterTemp => self.water_temp,
            Parameter::AirTemp => self.air_temp,
        }
    }

    /// Calendar date of the observation.
    pub fn date(&self) -> Option<NaiveDate> {
        self.datetime.map(|t| t.date())
    }

    /// `(latitude, longitude)` when both are present.
    pub fn position(&self) -> Option<(f64, f64)> {
        self.latitude.zip(self.longitude)
    }
}

/// A measurement row as it appears in a dataset file.
#[derive(Debug, Deserialize)]
pub(crate) struct RawMeasurement {
    #[serde(alias = "lat", default)]
    latitude: Option<f64>,
    #[serde(alias = "lon", default)]
    longitude: Option<f64>,
    #[serde(default)]
    datetime: Option<String>,
    #[serde(default)]
    file: Option<String>,
    #[serde(default)]
    dataset: Option<String>,
    #[serde(default)]
    station_id: Option<StationId>,
    #[serde(default)]
    distance: Option<f64>,
    #[serde(default)]
    chlor: Option<f64>,
    #[serde(default)]
    salinity: Option<f64>,
    #[serde(default)]
    turbidity: Option<f64>,
    #[serde(default)]
    depth: Option<f64>,
    #[serde(default)]
    water_temp: Option<f64>,
    #[serde(default)]
    air_temp: Option<f64>,
    #[serde(default)]
    bow_temp: Option<f64>,
}

/// NaN cells count as missing.
fn present(v: Option<f64>) -> Option<f64> {
    v.filter(|x| !x.is_nan())
}

fn non_empty(v: Option<String>) -> Option<String> {
    v.map(|s| s.trim().to_string()).filter(|s| !s.is_empty())
}

impl RawMeasurement {
    /// Normalise a raw row. `row` is the 1-based data row used in errors.
    ///
    /// Every row is kept. A missing position or a blank timestamp becomes
    /// null; only a timestamp in no recognised layout is rejected.
    pub(crate) fn normalize(self, row: usize) -> Result<Measurement> {
        let datetime = match non_empty(self.datetime) {
            Some(text) => match sfb_utils::dates::parse_timestamp(&text) {
                Some(t) => Some(t),
                None => return Err(LoadError::InvalidTimestamp { row, value: text }),
            },
            None => None,
        };
        let bow_temp = present(self.bow_temp);
        Ok(Measurement {
            latitude: present(self.latitude),
            longitude: present(self.longitude),
            datetime,
            file: non_empty(self.file).unwrap_or_default(),
            dataset: non_empty(self.dataset),
            station_id: self.station_id,
            distance: present(self.distance),
            chlor: present(self.chlor),
            salinity: present(self.salinity),
            turbidity: present(self.turbidity),
            depth: present(self.depth),
            water_temp: present(self.water_temp).or(bow_temp),
            air_temp: present(self.air_temp),
            bow_temp,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn raw(json: &str) -> RawMeasurement {
        serde_json::from_str(json).unwrap()
    }

    #[test]
    fn test_water_temp_falls_back_to_bow_sensor() {
        let m = raw(r#"{"lat": 37.9, "lon": -122.4, "datetime": "2019-06-15 10:00:00",
                        "file": "a.txt", "water_temp": null, "bow_temp": 17.25}"#)
        .normalize(1)
        .unwrap();
        assert_eq!(m.water_temp, Some(17.25));
        assert_eq!(m.value(Parameter::WaterTemp), Some(17.25));
    }

    #[test]
    fn test_primary_water_temp_wins() {
        let m = raw(r#"{"lat": 37.9, "lon": -122.4, "datetime": "2019-06-15 10:00:00",
                        "file": "a.txt", "water_temp": 16.0, "bow_temp": 17.25}"#)
        .normalize(1)
        .unwrap();
        assert_eq!(m.water_temp, Some(16.0));
        assert_eq!(m.bow_temp, Some(17.25));
    }

    #[test]
    fn test_row_without_position_is_kept() {
        let m = raw(r#"{"datetime": "2019-06-15 10:00:00", "file": "a.txt", "salinity": 3.5}"#)
            .normalize(1)
            .unwrap();
        assert_eq!(m.position(), None);
        assert_eq!(m.salinity, Some(3.5));
        assert_eq!(m.date(), NaiveDate::from_ymd_opt(2019, 6, 15));
    }

    #[test]
    fn test_blank_timestamp_is_null() {
        let m = raw(r#"{"lat": 1.0, "lon": 2.0, "datetime": "  "}"#).normalize(3).unwrap();
        assert_eq!(m.datetime, None);
        assert_eq!(m.date(), None);
        assert_eq!(m.position(), Some((1.0, 2.0)));
    }

    #[test]
    fn test_bad_timestamp_names_row() {
        let err = raw(r#"{"lat": 1.0, "lon": 2.0, "datetime": "yesterday"}"#)
            .normalize(7)
            .unwrap_err();
        match err {
            LoadError::InvalidTimestamp { row, value } => {
                assert_eq!(row, 7);
                assert_eq!(value, "yesterday");
            }
            other => panic!("unexpected error: {other}"),
        }
    }
}
