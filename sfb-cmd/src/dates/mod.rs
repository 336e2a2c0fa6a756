use crate::args::{DataArgs, OutputArgs};
use crate::run::Run;
use anyhow::Result;
use chrono::NaiveDate;
use sfb_utils::dates::format_date;

pub struct Dates {
    pub data: DataArgs,
    pub output: OutputArgs,
}

/// One "YYYY-MM-DD" line per transect date.
pub fn date_lines(dates: &[NaiveDate]) -> String {
    dates.iter().map(|d| format_date(d) + "\n").collect()
}

impl Run for Dates {
    fn run(self) -> Result<()> {
        let ctx = self.data.load()?;
        log::info!("[SFB] dates: {} transect dates", ctx.transect_dates().len());
        self.output.write(&date_lines(ctx.transect_dates()))
    }
}
