//! The immutable, load-once data context shared by the filter engine and
//! every builder.

use crate::config::{REFERENCE_FILE, REFERENCE_LABEL};
use crate::error::Result;
use crate::loader;
use crate::measurement::Measurement;
use crate::station::Station;
use chrono::NaiveDate;
use serde::Serialize;
use std::collections::BTreeMap;
use std::path::Path;
use std::sync::Arc;

/// The designated baseline transect drawn as an overlay.
#[derive(Debug, Clone, Serialize)]
pub struct ReferenceLine {
    pub label: String,
    pub points: Vec<Measurement>,
}

impl ReferenceLine {
    fn from_records(records: &[Measurement]) -> ReferenceLine {
        let points: Vec<Measurement> = records
            .iter()
            .filter(|m| m.file == REFERENCE_FILE)
            .cloned()
            .collect();
        if points.is_empty() {
            log::warn!(
                "[SFB] context: No rows from reference file {}, overlay will be empty",
                REFERENCE_FILE
            );
        }
        ReferenceLine {
            label: REFERENCE_LABEL.to_string(),
            points,
        }
    }
}

/// Everything loaded at startup. Never mutated afterwards.
#[derive(Debug, Clone)]
pub struct DataContext {
    records: Arc<[Measurement]>,
    stations: Arc<[Station]>,
    reference_line: Arc<ReferenceLine>,
    transect_dates: Vec<NaiveDate>,
}

impl DataContext {
    /// Build a context from already normalised records.
    pub fn new(records: Vec<Measurement>, stations: Vec<Station>) -> DataContext {
        let reference_line = ReferenceLine::from_records(&records);
        let transect_dates = transect_dates(&records);
        log::info!(
            "[SFB] context: {} measurements, {} stations, {} reference points, {} transects",
            records.len(),
            stations.len(),
            reference_line.points.len(),
            transect_dates.len()
        );
        DataContext {
            records: records.into(),
            stations: stations.into(),
            reference_line: Arc::new(reference_line),
            transect_dates,
        }
    }

    /// Load the dataset and station table from disk.
    ///
    /// Any failure aborts: no partial context is ever returned.
    pub fn load(dataset_path: &Path, stations_path: &Path) -> Result<DataContext> {
        let records = loader::load_measurements(dataset_path)?;
        let stations = loader::load_stations(stations_path)?;
        Ok(DataContext::new(records, stations))
    }

    /// Shared handle to the full record table.
    pub fn records(&self) -> &Arc<[Measurement]> {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn stations(&self) -> &[Station] {
        &self.stations
    }

    pub fn reference_line(&self) -> &ReferenceLine {
        &self.reference_line
    }

    /// Date-selector options: the start date of every transect, sorted.
    pub fn transect_dates(&self) -> &[NaiveDate] {
        &self.transect_dates
    }
}

/// Earliest calendar date per source file, de-duplicated and sorted.
fn transect_dates(records: &[Measurement]) -> Vec<NaiveDate> {
    let mut first_seen: BTreeMap<&str, chrono::NaiveDateTime> = BTreeMap::new();
    for m in records {
        let Some(datetime) = m.datetime else {
            continue;
        };
        first_seen
            .entry(m.file.as_str())
            .and_modify(|t| {
                if datetime < *t {
                    *t = datetime;
                }
            })
            .or_insert(datetime);
    }
    let mut dates: Vec<NaiveDate> = first_seen.values().map(|t| t.date()).collect();
    dates.sort();
    dates.dedup();
    dates
}
