use anyhow::{bail, Context, Result};
use chrono::NaiveDate;
use clap::Args;
use serde::Serialize;
use serde_json::Value;
use sfb_data::filter::parse_date_selector;
use sfb_data::FilterParams;
use sfb_transect::config::{DEFAULT_DATASET_PATH, DEFAULT_STATIONS_PATH};
use sfb_transect::{DataContext, MapStyle, Parameter, StationId};
use std::io::Write;
use std::path::PathBuf;

/// Where the dataset and the station table are read from.
#[derive(Args, Debug, Clone)]
pub struct DataArgs {
    /// Transect measurements (.csv, .csv.gz or .json)
    #[arg(long, value_name = "DATASET_FILE", default_value = DEFAULT_DATASET_PATH)]
    pub dataset: PathBuf,
    /// Station locations (.csv)
    #[arg(long, value_name = "STATIONS_FILE", default_value = DEFAULT_STATIONS_PATH)]
    pub stations: PathBuf,
}

impl DataArgs {
    pub fn load(&self) -> Result<DataContext> {
        DataContext::load(&self.dataset, &self.stations).with_context(|| {
            format!(
                "loading {} with stations from {}",
                self.dataset.display(),
                self.stations.display()
            )
        })
    }
}

/// Filter flags. Anything left unset keeps its default, or the value from
/// `--params` when given.
#[derive(Args, Debug, Clone, Default)]
pub struct FilterArgs {
    /// JSON file holding a full or partial filter parameter set; keys it
    /// leaves out keep the defaults for the loaded dataset
    #[arg(long, value_name = "PARAMS_JSON")]
    pub params: Option<PathBuf>,
    /// Parameter to colour the map by, e.g. salinity or water_temp
    #[arg(long)]
    pub parameter: Option<Parameter>,
    #[arg(long, value_name = "N")]
    pub sample_size: Option<usize>,
    #[arg(long, value_name = "SEED")]
    pub sample_seed: Option<u64>,
    /// Station selector; repeat or separate with commas
    #[arg(long = "station", value_name = "STATION_ID", value_delimiter = ',')]
    pub station: Vec<StationId>,
    #[arg(long, value_name = "YYYY-MM-DD", value_parser = parse_date_selector)]
    pub date: Option<NaiveDate>,
    /// carto-positron, carto-darkmatter or open-street-map
    #[arg(long)]
    pub map_style: Option<MapStyle>,
    #[arg(long)]
    pub show_stations: bool,
    #[arg(long)]
    pub show_reference_line: bool,
    #[arg(long)]
    pub coerce_to_reference: bool,
}

/// Overlay the keys of a JSON object onto the defaults for `ctx`.
fn merge_params(ctx: &DataContext, overrides: Value) -> Result<FilterParams> {
    let Value::Object(overrides) = overrides else {
        bail!("filter parameters must be a JSON object");
    };
    let mut merged = serde_json::to_value(FilterParams::defaults_for(ctx))?;
    if let Value::Object(base) = &mut merged {
        base.extend(overrides);
    }
    Ok(serde_json::from_value(merged)?)
}

impl FilterArgs {
    /// Merge the flags over the base parameter set for `ctx`: the defaults,
    /// with the `--params` file laid over them.
    pub fn to_params(&self, ctx: &DataContext) -> Result<FilterParams> {
        let mut params = match &self.params {
            Some(path) => {
                let text = std::fs::read_to_string(path)
                    .with_context(|| format!("reading {}", path.display()))?;
                serde_json::from_str::<Value>(&text)
                    .map_err(anyhow::Error::from)
                    .and_then(|overrides| merge_params(ctx, overrides))
                    .with_context(|| format!("parsing filter parameters in {}", path.display()))?
            }
            None => FilterParams::defaults_for(ctx),
        };
        if let Some(parameter) = self.parameter {
            params.parameter = parameter;
        }
        if let Some(n) = self.sample_size {
            params.sample_size = n;
        }
        if let Some(seed) = self.sample_seed {
            params.sample_seed = seed;
        }
        if !self.station.is_empty() {
            params.stations = self.station.clone();
        }
        if self.date.is_some() {
            params.date = self.date;
        }
        if let Some(style) = self.map_style {
            params.map_style = style;
        }
        params.show_stations |= self.show_stations;
        params.show_reference_line |= self.show_reference_line;
        params.coerce_to_reference |= self.coerce_to_reference;
        Ok(params)
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct OutputArgs {
    /// Write to this file instead of stdout
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,
    /// Pretty-print JSON output
    #[arg(long)]
    pub pretty: bool,
}

impl OutputArgs {
    pub fn write(&self, text: &str) -> Result<()> {
        match &self.output {
            Some(path) => {
                std::fs::write(path, text).with_context(|| format!("writing {}", path.display()))?;
                log::info!("[SFB] wrote {} bytes to {}", text.len(), path.display());
            }
            None => {
                let mut stdout = std::io::stdout().lock();
                stdout.write_all(text.as_bytes()).context("writing to stdout")?;
            }
        }
        Ok(())
    }

    pub fn to_json<T: Serialize>(&self, value: &T) -> Result<String> {
        let json = if self.pretty {
            serde_json::to_string_pretty(value)?
        } else {
            serde_json::to_string(value)?
        };
        Ok(json)
    }

    pub fn write_json<T: Serialize>(&self, value: &T) -> Result<()> {
        let mut json = self.to_json(value)?;
        json.push('\n');
        self.write(&json)
    }
}
