//! Chart payloads for the SFB dashboard.
//!
//! The builders here are pure functions from a [`sfb_data::Subset`] (plus the
//! static station and reference-line tables) to serializable payloads that
//! an external renderer draws as-is:
//!
//! - [`map::build_map`] - points on a basemap coloured by one parameter
//! - [`stats_grid::build_stats_grid`] - per-parameter scatter plots against
//!   distance travelled
//!
//! [`dashboard::Dashboard`] wires a stream of filter changes through the
//! filter engine and fans the resulting subset out to every builder.

pub mod color_ramp;
pub mod dashboard;
pub mod map;
pub mod models;
pub mod stats_grid;

pub use dashboard::{Dashboard, DashboardPayload, FilterEvent};
pub use map::{build_map, MapOptions};
pub use models::{MapPayload, StatsGridPayload};
pub use stats_grid::build_stats_grid;
