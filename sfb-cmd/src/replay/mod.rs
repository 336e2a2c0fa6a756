use crate::args::{DataArgs, OutputArgs};
use crate::run::Run;
use anyhow::{Context, Result};
use sfb_chart::{Dashboard, FilterEvent};
use std::path::PathBuf;
use std::sync::Arc;

pub struct Replay {
    pub data: DataArgs,
    pub events: PathBuf,
    pub output: OutputArgs,
}

/// Apply each non-blank line of `input` as a [`FilterEvent`] and collect
/// one JSON document per event. Rejected events produce an error document
/// and leave the session as it was. Malformed lines abort the replay.
pub fn replay_events(
    dashboard: &mut Dashboard,
    input: &str,
    output: &OutputArgs,
) -> Result<Vec<String>> {
    let mut documents = Vec::new();
    for (i, line) in input.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }
        let line_no = i + 1;
        let event: FilterEvent = serde_json::from_str(line)
            .with_context(|| format!("parsing filter event on line {}", line_no))?;
        let document = match dashboard.apply(event) {
            Ok(payload) => output.to_json(&payload)?,
            Err(err) => {
                log::warn!("[SFB] replay: line {} rejected: {}", line_no, err);
                output.to_json(&serde_json::json!({
                    "line": line_no,
                    "error": err.to_string(),
                }))?
            }
        };
        documents.push(document);
    }
    Ok(documents)
}

impl Run for Replay {
    fn run(self) -> Result<()> {
        let input = std::fs::read_to_string(&self.events)
            .with_context(|| format!("reading {}", self.events.display()))?;
        let ctx = Arc::new(self.data.load()?);
        let mut dashboard = Dashboard::new(ctx);
        let documents = replay_events(&mut dashboard, &input, &self.output)?;
        log::info!(
            "[SFB] replay: {} events, cache hits {} misses {}",
            documents.len(),
            dashboard.cache().hits(),
            dashboard.cache().misses()
        );
        let mut text = documents.join("\n");
        text.push('\n');
        self.output.write(&text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_data;
    use serde_json::Value;

    fn dashboard() -> Dashboard {
        Dashboard::new(Arc::new(test_data::context()))
    }

    #[test]
    fn test_one_document_per_event() {
        let input = r#"
{"event":"date","value":"2019-07-02"}
{"event":"sample_size","value":500}

{"event":"stations","value":[36]}
{"event":"show_stations","value":true}
{"event":"reset"}
"#;
        let mut dashboard = dashboard();
        let docs = replay_events(&mut dashboard, input, &OutputArgs::default()).unwrap();
        assert_eq!(docs.len(), 5);

        let parsed: Vec<Value> = docs.iter().map(|d| serde_json::from_str(d).unwrap()).collect();
        assert_eq!(parsed[0]["map"]["points"].as_array().unwrap().len(), 12);
        // size is ignored while a date is selected
        assert_eq!(parsed[1]["sampling_enabled"], false);
        assert_eq!(parsed[2]["map"]["points"].as_array().unwrap().len(), 1);
        assert_eq!(parsed[3]["map"]["stations"]["points"].as_array().unwrap().len(), 38);
        assert_eq!(parsed[4]["sampling_enabled"], true);
        assert_eq!(parsed[4]["map"]["points"].as_array().unwrap().len(), 36);
    }

    #[test]
    fn test_rejected_event_is_reported_and_session_continues() {
        let input = concat!(
            r#"{"event":"sample_size","value":100}"#,
            "\n",
            r#"{"event":"sample_size","value":5}"#,
        );
        let mut dashboard = dashboard();
        let docs = replay_events(&mut dashboard, input, &OutputArgs::default()).unwrap();
        let first: Value = serde_json::from_str(&docs[0]).unwrap();
        assert_eq!(first["line"], 1);
        assert_eq!(first["error"], "Sample size 100 is outside 1..=36");
        let second: Value = serde_json::from_str(&docs[1]).unwrap();
        assert_eq!(second["map"]["points"].as_array().unwrap().len(), 5);
    }

    #[test]
    fn test_malformed_line_aborts() {
        let mut dashboard = dashboard();
        let err = replay_events(&mut dashboard, "{\"event\":\"zoom\"}", &OutputArgs::default())
            .unwrap_err();
        assert!(err.to_string().contains("line 1"));
    }
}
