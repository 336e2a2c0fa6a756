use crate::models::{AxisStyle, StatsGridPayload, Subplot};
use sfb_data::Subset;
use sfb_transect::config::{DISTANCE_AXIS_LABEL, STATS_GRID_MAX_COLUMNS};
use sfb_transect::Parameter;

pub const SUBPLOT_MARKER_SIZE: f64 = 4.0;
pub const SUBPLOT_MARKER_COLOR: &str = "#1f77b4";
const AXIS_LINE_COLOR: &str = "#000000";
const GRID_COLOR: &str = "#d3d3d3";

fn axis(title: Option<&str>) -> AxisStyle {
    AxisStyle {
        title: title.map(str::to_string),
        show_line: true,
        mirror: true,
        line_color: AXIS_LINE_COLOR.to_string(),
        show_grid: true,
        grid_color: GRID_COLOR.to_string(),
    }
}

/// Rows and columns of a grid holding `n` subplots, at most
/// `STATS_GRID_MAX_COLUMNS` wide.
pub fn grid_shape(n: usize) -> (usize, usize) {
    if n == 0 {
        return (0, 0);
    }
    let columns = n.min(STATS_GRID_MAX_COLUMNS);
    (n.div_ceil(columns), columns)
}

/// Scatter of distance against each parameter, laid out row-major.
pub fn build_stats_grid(subset: &Subset) -> StatsGridPayload {
    let parameters = Parameter::ALL;
    let (rows, columns) = grid_shape(parameters.len());
    let x: Vec<Option<f64>> = subset.iter().map(|m| m.distance).collect();
    let subplots = parameters
        .iter()
        .enumerate()
        .map(|(i, &parameter)| Subplot {
            row: i / columns,
            col: i % columns,
            parameter,
            title: parameter.label(),
            x: x.clone(),
            y: subset.iter().map(|m| m.value(parameter)).collect(),
            marker_size: SUBPLOT_MARKER_SIZE,
            marker_color: SUBPLOT_MARKER_COLOR.to_string(),
        })
        .collect::<Vec<_>>();
    log::debug!(
        "[SFB] stats grid: {} subplots in {}x{} over {} rows",
        subplots.len(),
        rows,
        columns,
        subset.len()
    );

    StatsGridPayload {
        rows,
        columns,
        subplots,
        x_axis: axis(Some(DISTANCE_AXIS_LABEL)),
        y_axis: axis(None),
        show_legend: false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data;

    #[test]
    fn test_grid_shape() {
        assert_eq!(grid_shape(0), (0, 0));
        assert_eq!(grid_shape(1), (1, 1));
        assert_eq!(grid_shape(3), (1, 3));
        assert_eq!(grid_shape(4), (2, 3));
        assert_eq!(grid_shape(6), (2, 3));
        assert_eq!(grid_shape(7), (3, 3));
    }

    #[test]
    fn test_one_subplot_per_parameter() {
        let ctx = test_data::context();
        let grid = build_stats_grid(&Subset::all(ctx.records().clone()));
        assert_eq!(grid.subplots.len(), Parameter::ALL.len());
        assert_eq!((grid.rows, grid.columns), (2, 3));
        assert!(!grid.show_legend);
        assert_eq!(grid.x_axis.title.as_deref(), Some("distance from station 36"));
        assert!(grid.y_axis.title.is_none());

        let last = &grid.subplots[5];
        assert_eq!((last.row, last.col), (1, 2));
        assert_eq!(last.parameter, Parameter::AirTemp);
        assert_eq!(grid.subplots[1].title, "Salinity (ppt)");
    }

    #[test]
    fn test_series_follow_subset_rows() {
        let ctx = test_data::context();
        let grid = build_stats_grid(&Subset::all(ctx.records().clone()));
        let chlor = grid
            .subplots
            .iter()
            .find(|s| s.parameter == Parameter::Chlorophyll)
            .unwrap();
        assert_eq!(chlor.x.len(), 6);
        assert_eq!(chlor.x[3], Some(31.5));
        assert_eq!(chlor.y[3], Some(6.2));
        assert_eq!(chlor.y[4], None);
        for subplot in &grid.subplots {
            assert_eq!(subplot.x, chlor.x);
            assert_eq!(subplot.x.len(), subplot.y.len());
        }
    }

    #[test]
    fn test_empty_subset_keeps_layout() {
        let ctx = test_data::context();
        let empty = Subset::all(ctx.records()[..0].into());
        let grid = build_stats_grid(&empty);
        assert_eq!(grid.subplots.len(), 6);
        assert!(grid.subplots.iter().all(|s| s.x.is_empty() && s.y.is_empty()));
    }
}
