use crate::args::{DataArgs, FilterArgs, OutputArgs};
use crate::run::Run;
use anyhow::{Context, Result};
use serde::Serialize;
use sfb_data::{summarize, MetadataTable, Stat, SubsetCache};
use sfb_utils::dates::format_date;

const HEADERS: [&str; 5] = ["column", "count", "min", "max", "median"];

pub struct Summary {
    pub data: DataArgs,
    pub filter: FilterArgs,
    pub json: bool,
    pub output: OutputArgs,
}

#[derive(Serialize)]
struct SummaryJson<'a> {
    rows: usize,
    total_rows: usize,
    metadata: &'a MetadataTable,
}

fn stat_text(stat: &Stat) -> String {
    match stat {
        Stat::Number(v) => v.to_string(),
        Stat::Date(d) => format_date(d),
        Stat::NoData => "no data".to_string(),
    }
}

/// Render a metadata table as left-aligned labels and right-aligned
/// statistics, one line per tracked column.
pub fn format_table(table: &MetadataTable) -> String {
    let cells: Vec<[String; 5]> = table
        .rows
        .iter()
        .map(|row| {
            [
                row.label.clone(),
                row.count.to_string(),
                stat_text(&row.min),
                stat_text(&row.max),
                stat_text(&row.median),
            ]
        })
        .collect();
    let mut widths = HEADERS.map(str::len);
    for row in &cells {
        for (w, cell) in widths.iter_mut().zip(row) {
            *w = (*w).max(cell.len());
        }
    }

    let mut out = String::new();
    let header = HEADERS.map(String::from);
    for row in std::iter::once(&header).chain(&cells) {
        let mut line = format!("{:<w$}", row[0], w = widths[0]);
        for (cell, w) in row.iter().zip(widths).skip(1) {
            line.push_str(&format!("  {:>w$}", cell, w = w));
        }
        out.push_str(&line);
        out.push('\n');
    }
    out
}

impl Run for Summary {
    fn run(self) -> Result<()> {
        let ctx = self.data.load()?;
        let params = self.filter.to_params(&ctx)?;
        let subset = SubsetCache::new()
            .get_or_select(&ctx, &params)
            .context("invalid filter parameters")?;
        let table = summarize(&subset);
        log::info!("[SFB] summary: {} of {} rows", subset.len(), ctx.len());
        if self.json {
            self.output.write_json(&SummaryJson {
                rows: subset.len(),
                total_rows: ctx.len(),
                metadata: &table,
            })
        } else {
            let mut text = format!("Sample Metadata ({} of {} rows)\n", subset.len(), ctx.len());
            text.push_str(&format_table(&table));
            self.output.write(&text)
        }
    }
}
