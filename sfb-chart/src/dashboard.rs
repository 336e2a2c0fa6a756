//! One dashboard session.
//!
//! A [`Dashboard`] holds the current filter parameters for a loaded
//! [`DataContext`] and turns each [`FilterEvent`] into a fresh
//! [`DashboardPayload`]. Parameters are validated before they are
//! committed, so a rejected event never changes what is on screen.

use crate::map::{build_map, MapOptions};
use crate::models::{MapPayload, StatsGridPayload};
use crate::stats_grid::build_stats_grid;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use sfb_data::{summarize, FilterParams, MetadataTable, Subset, SubsetCache};
use sfb_transect::{DataContext, MapStyle, Parameter, StationId, ValidationError};
use std::sync::Arc;

/// A single user input change.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "event", content = "value", rename_all = "snake_case")]
pub enum FilterEvent {
    Parameter(Parameter),
    SampleSize(usize),
    SampleSeed(u64),
    /// Replace the station selector; empty clears it.
    Stations(Vec<StationId>),
    /// Replace the date selector; null clears it.
    Date(Option<NaiveDate>),
    MapStyle(MapStyle),
    ShowStations(bool),
    ShowReferenceLine(bool),
    CoerceToReference(bool),
    /// Restore the default filter set.
    Reset,
}

impl FilterEvent {
    /// The parameter set that results from applying this event to
    /// `current`. `defaults` is used by [`FilterEvent::Reset`].
    pub fn apply_to(&self, current: &FilterParams, defaults: &FilterParams) -> FilterParams {
        let mut next = current.clone();
        match self {
            FilterEvent::Parameter(p) => next.parameter = *p,
            FilterEvent::SampleSize(n) => next.sample_size = *n,
            FilterEvent::SampleSeed(s) => next.sample_seed = *s,
            FilterEvent::Stations(stations) => next.stations = stations.clone(),
            FilterEvent::Date(date) => next.date = *date,
            FilterEvent::MapStyle(style) => next.map_style = *style,
            FilterEvent::ShowStations(b) => next.show_stations = *b,
            FilterEvent::ShowReferenceLine(b) => next.show_reference_line = *b,
            FilterEvent::CoerceToReference(b) => next.coerce_to_reference = *b,
            FilterEvent::Reset => next = defaults.clone(),
        }
        next
    }
}

/// Everything the renderer needs for one frame.
#[derive(Debug, Clone, Serialize)]
pub struct DashboardPayload {
    pub map: MapPayload,
    /// Metadata of the whole dataset, fixed for the session.
    pub dataset_metadata: MetadataTable,
    /// Metadata of the current subset.
    pub sample_metadata: MetadataTable,
    pub stats_grid: StatsGridPayload,
    /// Whether sample size and seed currently apply.
    pub sampling_enabled: bool,
}

pub struct Dashboard {
    ctx: Arc<DataContext>,
    params: FilterParams,
    defaults: FilterParams,
    cache: SubsetCache,
    dataset_metadata: MetadataTable,
}

impl Dashboard {
    /// Start a session on the default filter set.
    pub fn new(ctx: Arc<DataContext>) -> Dashboard {
        let defaults = FilterParams::defaults_for(&ctx);
        let dataset_metadata = summarize(&Subset::all(ctx.records().clone()));
        log::info!(
            "[SFB] dashboard: session over {} rows, {} transect dates",
            ctx.len(),
            ctx.transect_dates().len()
        );
        Dashboard {
            ctx,
            params: defaults.clone(),
            defaults,
            cache: SubsetCache::new(),
            dataset_metadata,
        }
    }

    /// Start a session on `params` instead of the defaults.
    pub fn with_params(
        ctx: Arc<DataContext>,
        params: FilterParams,
    ) -> Result<Dashboard, ValidationError> {
        params.validate(ctx.len())?;
        let mut dashboard = Dashboard::new(ctx);
        dashboard.params = params;
        Ok(dashboard)
    }

    pub fn context(&self) -> &DataContext {
        &self.ctx
    }

    pub fn params(&self) -> &FilterParams {
        &self.params
    }

    pub fn defaults(&self) -> &FilterParams {
        &self.defaults
    }

    pub fn cache(&self) -> &SubsetCache {
        &self.cache
    }

    pub fn dataset_metadata(&self) -> &MetadataTable {
        &self.dataset_metadata
    }

    /// Apply one event and render. On a validation error the previous
    /// parameters stay in place.
    pub fn apply(&mut self, event: FilterEvent) -> Result<DashboardPayload, ValidationError> {
        log::debug!("[SFB] dashboard: event {:?}", event);
        let next = event.apply_to(&self.params, &self.defaults);
        self.set_params(next)
    }

    /// Replace the whole parameter set and render.
    pub fn set_params(
        &mut self,
        params: FilterParams,
    ) -> Result<DashboardPayload, ValidationError> {
        if let Err(err) = params.validate(self.ctx.len()) {
            log::warn!("[SFB] dashboard: rejected filter change: {}", err);
            return Err(err);
        }
        self.params = params;
        self.render()
    }

    pub fn reset(&mut self) -> Result<DashboardPayload, ValidationError> {
        self.apply(FilterEvent::Reset)
    }

    /// Filter once, then build the map, the subset metadata and the
    /// statistics grid side by side.
    pub fn render(&mut self) -> Result<DashboardPayload, ValidationError> {
        let subset = self.cache.get_or_select(&self.ctx, &self.params)?;
        let options = MapOptions::from(&self.params);
        let ctx = &self.ctx;
        let (map, (sample_metadata, stats_grid)) = rayon::join(
            || build_map(&subset, ctx.stations(), ctx.reference_line(), &options),
            || rayon::join(|| summarize(&subset), || build_stats_grid(&subset)),
        );
        log::info!(
            "[SFB] dashboard: rendered {} of {} rows",
            subset.len(),
            self.ctx.len()
        );
        Ok(DashboardPayload {
            map,
            dataset_metadata: self.dataset_metadata.clone(),
            sample_metadata,
            stats_grid,
            sampling_enabled: self.params.sampling_enabled(),
        })
    }
}
