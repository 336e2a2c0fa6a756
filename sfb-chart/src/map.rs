use crate::color_ramp::VIRIDIS;
use crate::models::{ColorBar, LatLon, MapPayload, MapPoint, OverlayLayer, OverlayPoint};
use sfb_data::{FilterParams, Subset};
use sfb_transect::config::{MAP_CENTER, MAP_ZOOM};
use sfb_transect::{MapStyle, Parameter, ReferenceLine, Station};

/// Size of the subset markers.
pub const POINT_MARKER_SIZE: f64 = 7.0;
/// Reference-line overlay: small fixed-color markers.
pub const REFERENCE_COLOR: &str = "#d62728";
pub const REFERENCE_MARKER_SIZE: f64 = 4.0;
/// Station overlay: larger fixed-color markers.
pub const STATION_COLOR: &str = "#000000";
pub const STATION_MARKER_SIZE: f64 = 12.0;
pub const STATION_LAYER_NAME: &str = "Stations";

/// Display inputs of the map builder.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct MapOptions {
    pub parameter: Parameter,
    pub style: MapStyle,
    pub show_stations: bool,
    pub show_reference_line: bool,
    pub coerce_to_reference: bool,
}

impl From<&FilterParams> for MapOptions {
    fn from(params: &FilterParams) -> Self {
        MapOptions {
            parameter: params.parameter,
            style: params.map_style,
            show_stations: params.show_stations,
            show_reference_line: params.show_reference_line,
            coerce_to_reference: params.coerce_to_reference,
        }
    }
}

fn value_range(values: impl Iterator<Item = f64>) -> Option<(f64, f64)> {
    values.fold(None, |range, v| match range {
        None => Some((v, v)),
        Some((lo, hi)) => Some((lo.min(v), hi.max(v))),
    })
}

fn reference_layer(reference_line: &ReferenceLine) -> OverlayLayer {
    OverlayLayer {
        name: reference_line.label.clone(),
        color: REFERENCE_COLOR.to_string(),
        marker_size: REFERENCE_MARKER_SIZE,
        points: reference_line
            .points
            .iter()
            .filter_map(|m| {
                let (lat, lon) = m.position()?;
                Some(OverlayPoint {
                    lat,
                    lon,
                    hover: Some(reference_line.label.clone()),
                })
            })
            .collect(),
    }
}

fn station_layer(stations: &[Station]) -> OverlayLayer {
    OverlayLayer {
        name: STATION_LAYER_NAME.to_string(),
        color: STATION_COLOR.to_string(),
        marker_size: STATION_MARKER_SIZE,
        points: stations
            .iter()
            .map(|s| OverlayPoint {
                lat: s.latitude,
                lon: s.longitude,
                hover: Some(format!("Station {}", s.station_id)),
            })
            .collect(),
    }
}

/// Build the map payload for a subset.
///
/// One point per subset row with a position, colored on a viridis scale
/// spanning the parameter's range within the whole subset. Rows without a
/// position are left off the map only. Overlays are added only when their
/// toggle is on. `coerce_to_reference` is carried through to the payload
/// and has no other effect.
pub fn build_map(
    subset: &Subset,
    stations: &[Station],
    reference_line: &ReferenceLine,
    options: &MapOptions,
) -> MapPayload {
    let parameter = options.parameter;
    let range = value_range(subset.iter().filter_map(|m| m.value(parameter)));
    let points = subset
        .row_ids()
        .iter()
        .zip(subset.iter())
        .filter_map(|(&row_id, m)| {
            let (lat, lon) = m.position()?;
            let value = m.value(parameter);
            let color = match (value, range) {
                (Some(v), Some((lo, hi))) => Some(VIRIDIS.color_for(v, lo, hi)),
                _ => None,
            };
            Some(MapPoint {
                row_id,
                lat,
                lon,
                value,
                color,
            })
        })
        .collect::<Vec<_>>();
    log::debug!(
        "[SFB] map: {} points of {} rows colored by {}, range {:?}",
        points.len(),
        subset.len(),
        parameter,
        range
    );

    MapPayload {
        style: options.style,
        center: LatLon {
            lat: MAP_CENTER.0,
            lon: MAP_CENTER.1,
        },
        zoom: MAP_ZOOM,
        parameter,
        marker_size: POINT_MARKER_SIZE,
        colorbar: ColorBar {
            title: parameter.label(),
            scale: VIRIDIS.name.to_string(),
            min: range.map(|r| r.0),
            max: range.map(|r| r.1),
        },
        points,
        reference_line: options
            .show_reference_line
            .then(|| reference_layer(reference_line)),
        stations: options.show_stations.then(|| station_layer(stations)),
        coerce_to_reference: options.coerce_to_reference,
    }
}
