//! Payload structs handed to the renderer.
//!
//! All structs derive `Serialize` so they can be emitted as JSON and drawn
//! by any plotting front end without further processing.

use serde::Serialize;
use sfb_transect::{MapStyle, Parameter};

#[derive(Debug, Clone, Copy, Serialize, PartialEq)]
pub struct LatLon {
    pub lat: f64,
    pub lon: f64,
}

/// One subset row on the map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapPoint {
    /// Index of the row in the full dataset.
    pub row_id: usize,
    pub lat: f64,
    pub lon: f64,
    /// Value of the plotted parameter, null when not measured.
    pub value: Option<f64>,
    /// Fill color from the continuous scale, null when `value` is null.
    pub color: Option<String>,
}

/// Colorbar legend for the continuous scale.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ColorBar {
    /// Parameter name and unit, e.g. "Salinity (ppt)".
    pub title: String,
    pub scale: String,
    /// Lowest plotted value, null when no row carries a value.
    pub min: Option<f64>,
    pub max: Option<f64>,
}

/// A fixed point drawn by an overlay.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverlayPoint {
    pub lat: f64,
    pub lon: f64,
    pub hover: Option<String>,
}

/// A fixed-color marker layer drawn above the subset points.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct OverlayLayer {
    pub name: String,
    pub color: String,
    pub marker_size: f64,
    pub points: Vec<OverlayPoint>,
}

/// Everything needed to draw the transect map.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct MapPayload {
    pub style: MapStyle,
    pub center: LatLon,
    pub zoom: f64,
    pub parameter: Parameter,
    pub marker_size: f64,
    pub colorbar: ColorBar,
    pub points: Vec<MapPoint>,
    /// Present only when the reference-line toggle is on.
    pub reference_line: Option<OverlayLayer>,
    /// Present only when the station toggle is on.
    pub stations: Option<OverlayLayer>,
    /// Echo of the coerce toggle. Does not change any other field.
    pub coerce_to_reference: bool,
}

/// Axis styling shared by every subplot.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct AxisStyle {
    pub title: Option<String>,
    /// Draw a border line along the axis (mirrored on the opposite side).
    pub show_line: bool,
    pub mirror: bool,
    pub line_color: String,
    pub show_grid: bool,
    pub grid_color: String,
}

/// One scatter subplot: distance travelled against a parameter.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct Subplot {
    /// Zero-based grid position.
    pub row: usize,
    pub col: usize,
    pub parameter: Parameter,
    pub title: String,
    /// Distance from station 36, one entry per subset row.
    pub x: Vec<Option<f64>>,
    /// Parameter value, aligned with `x`.
    pub y: Vec<Option<f64>>,
    pub marker_size: f64,
    pub marker_color: String,
}

/// Grid of per-parameter scatter plots.
#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct StatsGridPayload {
    pub rows: usize,
    pub columns: usize,
    pub subplots: Vec<Subplot>,
    pub x_axis: AxisStyle,
    pub y_axis: AxisStyle,
    pub show_legend: bool,
}
