use crate::args::{DataArgs, FilterArgs, OutputArgs};
use crate::run::Run;
use anyhow::{Context, Result};
use sfb_chart::Dashboard;
use std::sync::Arc;

pub struct Render {
    pub data: DataArgs,
    pub filter: FilterArgs,
    pub output: OutputArgs,
}

impl Run for Render {
    fn run(self) -> Result<()> {
        let ctx = Arc::new(self.data.load()?);
        let params = self.filter.to_params(&ctx)?;
        log::info!("[SFB] render: {:?}", params.selection());
        let mut dashboard =
            Dashboard::with_params(ctx, params).context("invalid filter parameters")?;
        let payload = dashboard.render()?;
        self.output.write_json(&payload)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn data() -> DataArgs {
        let root = PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("..");
        DataArgs {
            dataset: root.join("fixtures/transects.csv"),
            stations: root.join("fixtures/stationlocations.csv"),
        }
    }

    #[test]
    fn test_render_writes_payload_file() {
        let dir = tempfile::tempdir().unwrap();
        let out = dir.path().join("payload.json");
        let render = Render {
            data: data(),
            filter: FilterArgs {
                sample_size: Some(10),
                show_stations: true,
                ..FilterArgs::default()
            },
            output: OutputArgs {
                output: Some(out.clone()),
                pretty: true,
            },
        };
        render.run().unwrap();

        let json: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(&out).unwrap()).unwrap();
        assert_eq!(json["map"]["points"].as_array().unwrap().len(), 10);
        assert_eq!(json["map"]["stations"]["points"].as_array().unwrap().len(), 38);
        assert_eq!(json["sampling_enabled"], true);
    }

    #[test]
    fn test_render_rejects_oversized_sample() {
        let render = Render {
            data: data(),
            filter: FilterArgs {
                sample_size: Some(37),
                ..FilterArgs::default()
            },
            output: OutputArgs::default(),
        };
        let err = render.run().unwrap_err();
        assert!(format!("{:#}", err).contains("Sample size 37 is outside 1..=36"));
    }
}
