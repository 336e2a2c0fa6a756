//! Subcommands of the SFB transect dashboard tool.
//!
//! Every command loads the dataset once, runs the same filter pipeline the
//! dashboard uses and writes its result to stdout or `--output`.

pub mod args;
pub mod dates;
pub mod render;
pub mod replay;
pub mod run;
pub mod stations;
pub mod summary;

use args::{DataArgs, FilterArgs, OutputArgs};
use clap::Subcommand;
use run::Run;
use std::path::PathBuf;

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Filter the dataset once and print the dashboard payload as JSON
    Render {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        filter: FilterArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Print the metadata table of a filtered subset
    Summary {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        filter: FilterArgs,
        /// Print JSON instead of an aligned text table
        #[arg(long)]
        json: bool,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List the transect dates available to the date selector
    Dates {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// List valid station ids and the loaded station locations
    Stations {
        #[command(flatten)]
        data: DataArgs,
        #[command(flatten)]
        output: OutputArgs,
    },
    /// Apply newline-delimited JSON filter events to one dashboard session
    Replay {
        #[command(flatten)]
        data: DataArgs,
        // one FilterEvent object per line
        #[arg(long, value_name = "EVENTS_FILE")]
        events: PathBuf,
        #[command(flatten)]
        output: OutputArgs,
    },
}

pub fn run(command: Command) -> anyhow::Result<()> {
    match command {
        Command::Render {
            data,
            filter,
            output,
        } => render::Render {
            data,
            filter,
            output,
        }
        .run(),
        Command::Summary {
            data,
            filter,
            json,
            output,
        } => summary::Summary {
            data,
            filter,
            json,
            output,
        }
        .run(),
        Command::Dates { data, output } => dates::Dates { data, output }.run(),
        Command::Stations { data, output } => stations::Stations { data, output }.run(),
        Command::Replay {
            data,
            events,
            output,
        } => replay::Replay {
            data,
            events,
            output,
        }
        .run(),
    }
}

#[cfg(test)]
pub(crate) mod test_data {
    use sfb_transect::loader::{parse_measurements_csv, parse_stations_csv};
    use sfb_transect::DataContext;

    pub const TRANSECTS_CSV: &str = include_str!("../../fixtures/transects.csv");
    pub const STATIONS_CSV: &str = include_str!("../../fixtures/stationlocations.csv");

    /// The bundled fixture: 36 rows over three transects of 12 rows each,
    /// stations 36, 33, 30 and 28 visited once per transect.
    pub fn context() -> DataContext {
        DataContext::new(
            parse_measurements_csv(TRANSECTS_CSV).unwrap(),
            parse_stations_csv(STATIONS_CSV).unwrap(),
        )
    }
}
