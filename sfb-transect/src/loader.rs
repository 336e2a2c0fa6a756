//! Dataset loading.
//!
//! Every table is read whole into memory once at startup. The file
//! extension selects the reader:
//!
//! - `.csv` - headed CSV
//! - `.csv.gz` - gzip-compressed headed CSV
//! - `.json` - array of row objects
//!
//! # Measurement columns
//!
//! `latitude` (`lat`), `longitude` (`lon`), `datetime`, `file`, `dataset`,
//! `station_id`, `distance`, `chlor`, `salinity`, `turbidity`, `depth`,
//! `water_temp`, `air_temp`, `bow_temp`. Missing columns and blank cells
//! load as null. Rows without a position are kept; they are left off the
//! map but still count everywhere else.
//!
//! # Station columns
//!
//! `station_id`, `latitude` (`lat`), `longitude` (`lon`).

use crate::error::{LoadError, Result};
use crate::measurement::{Measurement, RawMeasurement};
use crate::station::Station;
use flate2::read::GzDecoder;
use serde::de::DeserializeOwned;
use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

/// On-disk table format, chosen by file extension.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum DatasetFormat {
    Csv,
    CsvGz,
    Json,
}

impl DatasetFormat {
    /// Detect the format of `path`, rejecting unknown extensions.
    pub fn from_path(path: &Path) -> Result<DatasetFormat> {
        let name = path
            .file_name()
            .map(|n| n.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        if name.ends_with(".csv.gz") {
            Ok(DatasetFormat::CsvGz)
        } else if name.ends_with(".csv") {
            Ok(DatasetFormat::Csv)
        } else if name.ends_with(".json") {
            Ok(DatasetFormat::Json)
        } else {
            Err(LoadError::UnsupportedFormat {
                path: path.to_path_buf(),
            })
        }
    }
}

fn rows_from_csv<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut rows = Vec::new();
    for result in rdr.deserialize() {
        rows.push(result?);
    }
    Ok(rows)
}

fn rows_from_json<T: DeserializeOwned, R: Read>(reader: R) -> Result<Vec<T>> {
    Ok(serde_json::from_reader(reader)?)
}

/// Read every row of a table file.
fn read_rows<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let format = DatasetFormat::from_path(path)?;
    let file = BufReader::new(File::open(path)?);
    match format {
        DatasetFormat::Csv => rows_from_csv(file),
        DatasetFormat::CsvGz => rows_from_csv(GzDecoder::new(file)),
        DatasetFormat::Json => rows_from_json(file),
    }
}

fn normalize_all(raw: Vec<RawMeasurement>, source: &str) -> Result<Vec<Measurement>> {
    let measurements = raw
        .into_iter()
        .enumerate()
        .map(|(i, row)| row.normalize(i + 1))
        .collect::<Result<Vec<_>>>()?;
    let unplaced = measurements.iter().filter(|m| m.position().is_none()).count();
    log::info!(
        "[SFB] loader: Loaded {} measurements from {}, {} without position",
        measurements.len(),
        source,
        unplaced
    );
    Ok(measurements)
}

/// Load measurement records from a dataset file.
///
/// Water temperature is merged with the bow sensor here, once.
pub fn load_measurements(path: &Path) -> Result<Vec<Measurement>> {
    let raw: Vec<RawMeasurement> = read_rows(path)?;
    normalize_all(raw, &path.display().to_string())
}

/// Load the station location table.
pub fn load_stations(path: &Path) -> Result<Vec<Station>> {
    let stations: Vec<Station> = read_rows(path)?;
    log::info!(
        "[SFB] loader: Loaded {} stations from {}",
        stations.len(),
        path.display()
    );
    Ok(stations)
}

/// Parse measurement records from an in-memory CSV string.
///
/// # Example CSV
/// ```text
/// latitude,longitude,datetime,file,station_id,distance,salinity
/// 38.0,-121.8,2019-06-15 08:00:00,14322dat.txt,36,0.0,0.1
/// ```
pub fn parse_measurements_csv(csv_data: &str) -> Result<Vec<Measurement>> {
    let raw: Vec<RawMeasurement> = rows_from_csv(csv_data.as_bytes())?;
    normalize_all(raw, "embedded csv")
}

/// Parse a station table from an in-memory CSV string.
pub fn parse_stations_csv(csv_data: &str) -> Result<Vec<Station>> {
    rows_from_csv(csv_data.as_bytes())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::Parameter;
    use flate2::write::GzEncoder;
    use flate2::Compression;
    use std::io::Write;

    const CSV_DATA: &str = "\
latitude,longitude,datetime,file,dataset,station_id,distance,chlor,salinity,turbidity,depth,water_temp,air_temp,bow_temp
38.05,-121.90,2019-06-15 08:00:00,14322dat.txt,peterson,36.0,0.0,3.2,0.1,12,9.5,21.4,18.0,21.3
38.04,-121.95,2019-06-15 08:05:00,14322dat.txt,peterson,,1.2,3.0,0.4,,9.1,,18.1,21.0
,,2019-06-15 08:10:00,14322dat.txt,peterson,,2.4,,,,,,,
";

    #[test]
    fn test_parse_measurements_csv() {
        let rows = parse_measurements_csv(CSV_DATA).unwrap();
        assert_eq!(rows.len(), 3, "Row without a position should be kept");
        assert_eq!(rows[2].position(), None);
        assert_eq!(rows[2].distance, Some(2.4));
        assert_eq!(rows[0].station_id.as_ref().unwrap().as_str(), "36");
        assert_eq!(rows[0].value(Parameter::Salinity), Some(0.1));
        assert_eq!(rows[1].station_id, None);
        assert_eq!(rows[1].turbidity, None);
        assert_eq!(rows[1].water_temp, Some(21.0), "Bow sensor should fill water temp");
        assert_eq!(rows[1].dataset.as_deref(), Some("peterson"));
    }

    #[test]
    fn test_parse_with_short_column_names() {
        let csv_data = "lat,lon,datetime,file\n37.5,-122.1,2019-06-15T09:00:00,a.txt\n";
        let rows = parse_measurements_csv(csv_data).unwrap();
        assert_eq!(rows.len(), 1);
        assert_eq!(rows[0].position(), Some((37.5, -122.1)));
        assert_eq!(rows[0].salinity, None);
    }

    #[test]
    fn test_parse_stations_csv() {
        let csv_data = "station_id,latitude,longitude\n36,38.06,-121.80\n29.5,38.03,-122.07\n";
        let stations = parse_stations_csv(csv_data).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[1].station_id.as_str(), "29.5");
        assert!((stations[0].longitude - (-121.80)).abs() < f64::EPSILON);
    }

    #[test]
    fn test_format_detection() {
        assert_eq!(
            DatasetFormat::from_path(Path::new("data/PETERSON.CSV")).unwrap(),
            DatasetFormat::Csv
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("data/peterson.csv.gz")).unwrap(),
            DatasetFormat::CsvGz
        );
        assert_eq!(
            DatasetFormat::from_path(Path::new("stations.json")).unwrap(),
            DatasetFormat::Json
        );
        let err = DatasetFormat::from_path(Path::new("peterson.xlsx")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
        assert!(err.to_string().contains("Unsupported format"));
    }

    #[test]
    fn test_unsupported_extension_is_rejected_before_reading() {
        let err = load_measurements(Path::new("does/not/exist.parquet")).unwrap_err();
        assert!(matches!(err, LoadError::UnsupportedFormat { .. }));
    }

    #[test]
    fn test_missing_file_is_io_error() {
        let err = load_measurements(Path::new("does/not/exist.csv")).unwrap_err();
        assert!(matches!(err, LoadError::Io(_)));
    }

    #[test]
    fn test_load_gzip_csv() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("transects.csv.gz");
        let mut encoder = GzEncoder::new(File::create(&path).unwrap(), Compression::default());
        encoder.write_all(CSV_DATA.as_bytes()).unwrap();
        encoder.finish().unwrap();

        let rows = load_measurements(&path).unwrap();
        assert_eq!(rows.len(), 3);
    }

    #[test]
    fn test_load_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("stations.json");
        std::fs::write(
            &path,
            r#"[{"station_id": 36, "lat": 38.06, "lon": -121.80},
                {"station_id": "649", "latitude": 37.5, "longitude": -122.1}]"#,
        )
        .unwrap();
        let stations = load_stations(&path).unwrap();
        assert_eq!(stations.len(), 2);
        assert_eq!(stations[0].station_id.as_str(), "36");
        assert_eq!(stations[1].station_id.as_str(), "649");
    }

    #[test]
    fn test_nan_or_blank_cells_load_as_null() {
        let csv_data = "\
lat,lon,datetime,file,salinity
NaN,-122.1,2019-06-15 09:00:00,a.txt,4.0
37.5,-122.1,,a.txt,NaN
";
        let rows = parse_measurements_csv(csv_data).unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].latitude, None);
        assert_eq!(rows[0].salinity, Some(4.0));
        assert_eq!(rows[1].datetime, None);
        assert_eq!(rows[1].salinity, None);
    }

    #[test]
    fn test_bad_timestamp_aborts_load() {
        let csv_data = "lat,lon,datetime\n37.5,-122.1,2019-06-15 09:00:00\n37.5,-122.1,not a date\n";
        let err = parse_measurements_csv(csv_data).unwrap_err();
        assert!(matches!(err, LoadError::InvalidTimestamp { row: 2, .. }));
    }
}
