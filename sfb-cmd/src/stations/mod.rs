use crate::args::{DataArgs, OutputArgs};
use crate::run::Run;
use anyhow::Result;
use sfb_transect::station::STATION_IDS;
use sfb_transect::Station;

pub struct Stations {
    pub data: DataArgs,
    pub output: OutputArgs,
}

/// The selectable ids on one line, then one line per loaded location.
pub fn station_listing(stations: &[Station]) -> String {
    let mut out = format!("valid station ids: {}\n", STATION_IDS.join(", "));
    out.push_str(&format!(
        "{:>8}  {:>9}  {:>10}\n",
        "station", "latitude", "longitude"
    ));
    for s in stations {
        out.push_str(&format!(
            "{:>8}  {:>9.4}  {:>10.4}\n",
            s.station_id, s.latitude, s.longitude
        ));
    }
    out
}

impl Run for Stations {
    fn run(self) -> Result<()> {
        let ctx = self.data.load()?;
        let unknown = ctx.stations().iter().filter(|s| !s.station_id.is_known()).count();
        if unknown > 0 {
            log::warn!("[SFB] stations: {} locations have ids outside the selector", unknown);
        }
        self.output.write(&station_listing(ctx.stations()))
    }
}
