//! Compact descriptive statistics for a subset.
//!
//! One row per tracked column, in a fixed order, each with the count of
//! non-missing values and the minimum, maximum and median rounded to three
//! decimals. The timestamp row reports calendar dates only.

use crate::subset::Subset;
use chrono::{NaiveDate, NaiveDateTime};
use serde::Serialize;
use sfb_transect::Parameter;
use sfb_utils::{dates, labels, numbers};

/// A column summarised in the metadata table.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum TrackedColumn {
    Parameter(Parameter),
    Datetime,
}

impl TrackedColumn {
    pub fn key(&self) -> &'static str {
        match self {
            TrackedColumn::Parameter(p) => p.key(),
            TrackedColumn::Datetime => "datetime",
        }
    }

    /// Row label: the column key title-cased ("water_temp" -> "Water Temp").
    pub fn label(&self) -> String {
        labels::title_case(self.key())
    }
}

/// Columns in table order.
pub const TRACKED_COLUMNS: [TrackedColumn; 6] = [
    TrackedColumn::Parameter(Parameter::Chlorophyll),
    TrackedColumn::Parameter(Parameter::Salinity),
    TrackedColumn::Parameter(Parameter::Turbidity),
    TrackedColumn::Parameter(Parameter::Depth),
    TrackedColumn::Parameter(Parameter::WaterTemp),
    TrackedColumn::Datetime,
];

/// One statistic. Serializes as a number, a "YYYY-MM-DD" string, or null.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Stat {
    Number(f64),
    Date(NaiveDate),
    NoData,
}

impl Stat {
    pub fn is_no_data(&self) -> bool {
        matches!(self, Stat::NoData)
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataRow {
    pub label: String,
    pub count: u64,
    pub min: Stat,
    pub max: Stat,
    pub median: Stat,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MetadataTable {
    pub rows: Vec<MetadataRow>,
}

impl MetadataTable {
    pub fn row(&self, label: &str) -> Option<&MetadataRow> {
        self.rows.iter().find(|r| r.label == label)
    }
}

fn no_data(label: String) -> MetadataRow {
    MetadataRow {
        label,
        count: 0,
        min: Stat::NoData,
        max: Stat::NoData,
        median: Stat::NoData,
    }
}

fn numeric_row(label: String, mut values: Vec<f64>) -> MetadataRow {
    if values.is_empty() {
        return no_data(label);
    }
    values.sort_by(f64::total_cmp);
    let median = numbers::sorted_median(&values)
        .map_or(Stat::NoData, |m| Stat::Number(numbers::round3(m)));
    MetadataRow {
        label,
        count: values.len() as u64,
        min: Stat::Number(numbers::round3(values[0])),
        max: Stat::Number(numbers::round3(values[values.len() - 1])),
        median,
    }
}

fn datetime_row(label: String, mut values: Vec<NaiveDateTime>) -> MetadataRow {
    if values.is_empty() {
        return no_data(label);
    }
    values.sort();
    let n = values.len();
    let median = if n % 2 == 1 {
        values[n / 2]
    } else {
        dates::midpoint(&values[n / 2 - 1], &values[n / 2])
    };
    MetadataRow {
        label,
        count: n as u64,
        min: Stat::Date(values[0].date()),
        max: Stat::Date(values[n - 1].date()),
        median: Stat::Date(median.date()),
    }
}

/// Summarise a subset. Never fails: columns without values report
/// `count = 0` and [`Stat::NoData`].
pub fn summarize(subset: &Subset) -> MetadataTable {
    let rows = TRACKED_COLUMNS
        .iter()
        .map(|column| match column {
            TrackedColumn::Parameter(p) => {
                numeric_row(column.label(), subset.iter().filter_map(|m| m.value(*p)).collect())
            }
            TrackedColumn::Datetime => {
                datetime_row(column.label(), subset.iter().filter_map(|m| m.datetime).collect())
            }
        })
        .collect();
    MetadataTable { rows }
}
