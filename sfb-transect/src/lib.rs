//! Core types for the SF Bay flow-through transect dashboard.
//!
//! A transect is one boat survey pass recorded to a single source file. This
//! crate owns the measurement record, the station table, the static
//! parameter registry and the loader that reads everything into an
//! immutable [`context::DataContext`] once at startup.

pub mod config;
pub mod context;
pub mod error;
pub mod loader;
pub mod map_style;
pub mod measurement;
pub mod parameter;
pub mod station;

pub use context::{DataContext, ReferenceLine};
pub use error::{LoadError, ValidationError};
pub use map_style::MapStyle;
pub use measurement::Measurement;
pub use parameter::Parameter;
pub use station::{Station, StationId};
