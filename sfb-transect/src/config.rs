//! Canonical dashboard defaults.
//!
//! The reset action restores exactly these values.

use crate::{MapStyle, Parameter};

/// Parameter shown on first load and after a reset.
pub const DEFAULT_PARAMETER: Parameter = Parameter::Salinity;

/// Rows drawn when neither a date nor a station is selected.
pub const DEFAULT_SAMPLE_SIZE: usize = 10_000;

/// Seed for the default random sample.
pub const DEFAULT_SAMPLE_SEED: u64 = 12_345;

/// Largest accepted sample seed.
pub const MAX_SAMPLE_SEED: u64 = 999_999_999;

/// Tile style shown on first load.
pub const DEFAULT_MAP_STYLE: MapStyle = MapStyle::CartoPositron;

/// Map centre (latitude, longitude) over the northern estuary.
pub const MAP_CENTER: (f64, f64) = (37.8, -122.3);

/// Default map zoom.
pub const MAP_ZOOM: f64 = 8.5;

/// Source file of the transect used as the reference overlay.
pub const REFERENCE_FILE: &str = "14322dat.txt";

/// Label attached to every reference-line point.
pub const REFERENCE_LABEL: &str = "REFERENCE LINE";

/// X-axis title shared by every subplot of the statistics grid.
pub const DISTANCE_AXIS_LABEL: &str = "distance from station 36";

/// Maximum number of subplot columns in the statistics grid.
pub const STATS_GRID_MAX_COLUMNS: usize = 3;

/// Default dataset location, relative to the workspace root.
pub const DEFAULT_DATASET_PATH: &str = "fixtures/transects.csv";

/// Default station table location, relative to the workspace root.
pub const DEFAULT_STATIONS_PATH: &str = "fixtures/stationlocations.csv";
