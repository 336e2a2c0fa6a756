//! The filter engine.
//!
//! A [`FilterParams`] value maps to exactly one [`Selection`] policy:
//!
//! 1. no station, no date: seeded random sample of `sample_size` rows
//! 2. date only: every row observed on that calendar date
//! 3. station only: every row whose station id is in the selector
//! 4. both: rows matching the date and the station selector
//!
//! An empty result is valid and is returned as an empty [`Subset`].

use crate::subset::Subset;
use chrono::NaiveDate;
use rand::{seq::index, Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};
use sfb_transect::config::{
    DEFAULT_MAP_STYLE, DEFAULT_PARAMETER, DEFAULT_SAMPLE_SEED, DEFAULT_SAMPLE_SIZE,
    MAX_SAMPLE_SEED,
};
use sfb_transect::{DataContext, MapStyle, Measurement, Parameter, StationId, ValidationError};
use std::collections::BTreeSet;

/// Every user-selectable dashboard input, as one immutable value.
///
/// Keys missing from a deserialized set take the [`Default`] values, which
/// do not know the dataset size. Callers holding a [`DataContext`] merge
/// partial input over [`FilterParams::defaults_for`] instead.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FilterParams {
    /// Parameter to colour the map by
    pub parameter: Parameter,
    pub sample_size: usize,
    pub sample_seed: u64,
    /// Station selector; empty means no station filter
    pub stations: Vec<StationId>,
    /// Date selector
    pub date: Option<NaiveDate>,
    pub map_style: MapStyle,
    pub show_stations: bool,
    pub show_reference_line: bool,
    /// Accepted and passed through; has no effect on the map yet
    pub coerce_to_reference: bool,
}

impl Default for FilterParams {
    fn default() -> Self {
        FilterParams {
            parameter: DEFAULT_PARAMETER,
            sample_size: DEFAULT_SAMPLE_SIZE,
            sample_seed: DEFAULT_SAMPLE_SEED,
            stations: Vec::new(),
            date: None,
            map_style: DEFAULT_MAP_STYLE,
            show_stations: false,
            show_reference_line: false,
            coerce_to_reference: false,
        }
    }
}

/// The data-affecting part of a [`FilterParams`].
///
/// Two parameter sets with equal selections produce identical subsets, so
/// this doubles as the cache fingerprint.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Selection {
    Sample { size: usize, seed: u64 },
    Date(NaiveDate),
    Stations(BTreeSet<StationId>),
    StationsOnDate {
        stations: BTreeSet<StationId>,
        date: NaiveDate,
    },
}

impl FilterParams {
    /// The default set, with the sample size capped at the dataset size so
    /// that it always validates against `ctx`.
    pub fn defaults_for(ctx: &DataContext) -> FilterParams {
        FilterParams {
            sample_size: DEFAULT_SAMPLE_SIZE.min(ctx.len()).max(1),
            ..FilterParams::default()
        }
    }

    /// Sample size and seed only apply when no date and no station is set.
    pub fn sampling_enabled(&self) -> bool {
        self.date.is_none() && self.stations.is_empty()
    }

    pub fn selection(&self) -> Selection {
        let stations: BTreeSet<StationId> = self.stations.iter().cloned().collect();
        match (stations.is_empty(), self.date) {
            (true, None) => Selection::Sample {
                size: self.sample_size,
                seed: self.sample_seed,
            },
            (true, Some(date)) => Selection::Date(date),
            (false, None) => Selection::Stations(stations),
            (false, Some(date)) => Selection::StationsOnDate { stations, date },
        }
    }

    /// Check the parameter set against a dataset of `row_count` rows.
    pub fn validate(&self, row_count: usize) -> Result<(), ValidationError> {
        if let Some(unknown) = self.stations.iter().find(|s| !s.is_known()) {
            return Err(ValidationError::UnknownStation(unknown.to_string()));
        }
        if self.sampling_enabled() {
            if self.sample_size < 1 || self.sample_size > row_count {
                return Err(ValidationError::SampleSizeOutOfRange {
                    requested: self.sample_size,
                    max: row_count,
                });
            }
            if self.sample_seed > MAX_SAMPLE_SEED {
                return Err(ValidationError::SampleSeedOutOfRange {
                    requested: self.sample_seed,
                    max: MAX_SAMPLE_SEED,
                });
            }
        }
        Ok(())
    }
}

/// Parse a date selector in "YYYY-MM-DD" form.
pub fn parse_date_selector(s: &str) -> Result<NaiveDate, ValidationError> {
    sfb_utils::dates::parse_date(s).map_err(|_| ValidationError::InvalidDate(s.trim().to_string()))
}

/// Select the subset described by `params`, seeding the sampler from
/// `params.sample_seed`.
pub fn select_subset(ctx: &DataContext, params: &FilterParams) -> Result<Subset, ValidationError> {
    let mut rng = ChaCha8Rng::seed_from_u64(params.sample_seed);
    select_subset_with_rng(ctx, params, &mut rng)
}

/// Select the subset described by `params`, drawing any random sample from
/// `rng`. Validation happens before any row is touched.
pub fn select_subset_with_rng<R: Rng + ?Sized>(
    ctx: &DataContext,
    params: &FilterParams,
    rng: &mut R,
) -> Result<Subset, ValidationError> {
    params.validate(ctx.len())?;
    let selection = params.selection();
    let records = ctx.records();
    let rows: Vec<usize> = match &selection {
        Selection::Sample { size, .. } => {
            let mut rows = index::sample(rng, records.len(), *size).into_vec();
            rows.sort_unstable();
            rows
        }
        Selection::Date(date) => matching_rows(records, |m| m.date() == Some(*date)),
        Selection::Stations(stations) => matching_rows(records, |m| on_station(m, stations)),
        Selection::StationsOnDate { stations, date } => matching_rows(records, |m| {
            m.date() == Some(*date) && on_station(m, stations)
        }),
    };
    log::debug!(
        "[SFB] filter: {:?} selected {} of {} rows",
        selection,
        rows.len(),
        records.len()
    );
    Ok(Subset::new(records.clone(), rows))
}

fn on_station(m: &Measurement, stations: &BTreeSet<StationId>) -> bool {
    m.station_id.as_ref().is_some_and(|id| stations.contains(id))
}

fn matching_rows(records: &[Measurement], keep: impl Fn(&Measurement) -> bool) -> Vec<usize> {
    records
        .iter()
        .enumerate()
        .filter(|(_, m)| keep(m))
        .map(|(i, _)| i)
        .collect()
}
