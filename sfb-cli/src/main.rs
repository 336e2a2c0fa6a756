//! SFB CLI - filter SF Bay transect data and emit dashboard payloads.

use clap::Parser;
use log::LevelFilter;

#[derive(Parser)]
#[command(
    name = "sfb-cli",
    version,
    about = "SF Bay water quality transect dashboard toolkit"
)]
struct Cli {
    /// More logging; repeat for debug output
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,

    #[command(subcommand)]
    command: sfb_cmd::Command,
}

/// Level forced by `-v`, or the quiet default when `RUST_LOG` is unset.
/// `None` leaves the `RUST_LOG` filters in charge.
fn log_level(verbose: u8, rust_log_set: bool) -> Option<LevelFilter> {
    match verbose {
        0 if rust_log_set => None,
        0 => Some(LevelFilter::Warn),
        1 => Some(LevelFilter::Info),
        _ => Some(LevelFilter::Debug),
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let mut builder = env_logger::Builder::from_default_env();
    let rust_log_set = std::env::var_os(env_logger::DEFAULT_FILTER_ENV).is_some();
    if let Some(level) = log_level(cli.verbose, rust_log_set) {
        builder.filter_level(level);
    }
    builder.init();
    sfb_cmd::run(cli.command)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rust_log_wins_without_verbose() {
        assert_eq!(log_level(0, true), None);
        assert_eq!(log_level(0, false), Some(LevelFilter::Warn));
    }

    #[test]
    fn test_verbose_sets_level() {
        assert_eq!(log_level(1, true), Some(LevelFilter::Info));
        assert_eq!(log_level(2, false), Some(LevelFilter::Debug));
        assert_eq!(log_level(5, true), Some(LevelFilter::Debug));
    }

    #[test]
    fn test_verbose_flag_counts() {
        let cli = Cli::try_parse_from(["sfb-cli", "-vv", "dates"]).unwrap();
        assert_eq!(cli.verbose, 2);
    }
}
