//! Data processing for transect measurements.
//!
//! This crate holds the filter engine that turns a set of filter parameters
//! into a [`Subset`] of the loaded dataset, a single-entry cache for that
//! subset, and the metadata summarizer run over each subset.

pub mod cache;
pub mod filter;
pub mod subset;
pub mod summary;

pub use cache::SubsetCache;
pub use filter::{select_subset, select_subset_with_rng, FilterParams, Selection};
pub use subset::Subset;
pub use summary::{summarize, MetadataRow, MetadataTable, Stat};

#[cfg(test)]
pub(crate) mod test_data {
    use sfb_transect::loader::parse_measurements_csv;
    use sfb_transect::DataContext;
    use std::fmt::Write;

    /// `n` rows spread over ten transects on consecutive days. Every tenth
    /// row (index 0, 10, 20, ...) is on station 5, index 1, 11, ... on 36.
    pub fn dataset(n: usize) -> DataContext {
        let mut csv_data = String::from("lat,lon,datetime,file,station_id,distance,salinity,chlor\n");
        for i in 0..n {
            let station = match i % 10 {
                0 => "5",
                1 => "36",
                _ => "",
            };
            let day = 1 + (i % 10);
            writeln!(
                csv_data,
                "{},{},2019-06-{:02} {:02}:{:02}:00,{}dat.txt,{},{},{},",
                37.5 + i as f64 * 0.001,
                -122.0 - i as f64 * 0.001,
                day,
                (i / 60) % 24,
                i % 60,
                14000 + day,
                station,
                i as f64 * 0.5,
                i as f64 / 10.0,
            )
            .unwrap();
        }
        let records = parse_measurements_csv(&csv_data).unwrap();
        DataContext::new(records, Vec::new())
    }
}
