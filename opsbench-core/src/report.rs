//! Per-scenario result records and run persistence.
//!
//! Each benchmark run gets a timestamped directory under a base dir, with
//! one sanitized subdirectory per scenario holding a pretty-printed
//! `results.json`.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::Utc;
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::error::ReportError;
use crate::types::{ComparisonScores, Diagnosis};

/// Everything recorded about one scenario evaluation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScenarioReport {
    /// Unique id for this evaluation record.
    pub report_id: uuid::Uuid,
    pub scenario_id: String,
    pub agent: String,
    /// UTC timestamp of when the evaluation finished.
    pub evaluated_at: chrono::DateTime<Utc>,
    /// Comparison scores; absent when ground truth was unavailable or the
    /// agent failed.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scores: Option<ComparisonScores>,
    /// Agent wall-clock latency in seconds (simulated MTTR).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub latency_secs: Option<f64>,
    /// The diagnosis the agent produced, kept for offline inspection.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub agent_output: Option<Diagnosis>,
    /// Failure description when the agent or comparison could not run.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Writes scenario reports into a timestamped run directory.
#[derive(Debug, Clone)]
pub struct RunWriter {
    run_dir: PathBuf,
}

impl RunWriter {
    /// Create a fresh `<base_dir>/<YYYYmmdd_HHMMSS>` run directory.
    pub fn create(base_dir: impl AsRef<Path>) -> Result<Self, ReportError> {
        let timestamp = Utc::now().format("%Y%m%d_%H%M%S").to_string();
        let run_dir = base_dir.as_ref().join(timestamp);
        fs::create_dir_all(&run_dir).map_err(|source| ReportError::RunDirCreation {
            path: run_dir.clone(),
            source,
        })?;
        info!(run_dir = %run_dir.display(), "created benchmark run directory");
        Ok(Self { run_dir })
    }

    pub fn run_dir(&self) -> &Path {
        &self.run_dir
    }

    /// Write `results.json` for one scenario into its own subdirectory.
    pub fn write_report(&self, report: &ScenarioReport) -> Result<PathBuf, ReportError> {
        let scenario_dir = self.run_dir.join(sanitize_name(&report.scenario_id)?);
        fs::create_dir_all(&scenario_dir).map_err(|source| ReportError::RunDirCreation {
            path: scenario_dir.clone(),
            source,
        })?;

        let results_path = scenario_dir.join("results.json");
        let payload =
            serde_json::to_string_pretty(report).map_err(|source| ReportError::SerializeFailed {
                scenario: report.scenario_id.clone(),
                source,
            })?;
        fs::write(&results_path, payload).map_err(|source| ReportError::WriteFailed {
            path: results_path.clone(),
            source,
        })?;
        Ok(results_path)
    }
}

/// Replace characters outside `[A-Za-z0-9_-]` with `_`; empty names are
/// rejected rather than silently mapped to a directory name.
fn sanitize_name(name: &str) -> Result<String, ReportError> {
    if name.is_empty() {
        return Err(ReportError::EmptyScenarioName);
    }
    Ok(name
        .chars()
        .map(|c| {
            if c.is_ascii_alphanumeric() || c == '-' || c == '_' {
                c
            } else {
                '_'
            }
        })
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::ComparisonScores;

    fn report(id: &str) -> ScenarioReport {
        ScenarioReport {
            report_id: uuid::Uuid::new_v4(),
            scenario_id: id.to_string(),
            agent: "scripted".to_string(),
            evaluated_at: Utc::now(),
            scores: Some(ComparisonScores {
                rca_root_cause_score: 0.5,
                rca_causal_graph_score: 1.0,
                resolution_correctness_score: 0.3,
            }),
            latency_secs: Some(1.25),
            agent_output: None,
            error: None,
        }
    }

    #[test]
    fn test_sanitize_name() {
        assert_eq!(sanitize_name("scenario_cpu_limit_001").unwrap(), "scenario_cpu_limit_001");
        assert_eq!(sanitize_name("weird/../name!").unwrap(), "weird____name_");
        assert!(matches!(sanitize_name(""), Err(ReportError::EmptyScenarioName)));
    }

    #[test]
    fn test_write_report_round_trip() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = RunWriter::create(tmp.path()).unwrap();
        let path = writer.write_report(&report("scenario_auth_001")).unwrap();
        assert!(path.ends_with("scenario_auth_001/results.json"));

        let raw = std::fs::read_to_string(&path).unwrap();
        let back: ScenarioReport = serde_json::from_str(&raw).unwrap();
        assert_eq!(back.scenario_id, "scenario_auth_001");
        assert_eq!(back.scores.unwrap().rca_causal_graph_score, 1.0);
    }

    #[test]
    fn test_run_dir_under_base() {
        let tmp = tempfile::tempdir().unwrap();
        let writer = RunWriter::create(tmp.path()).unwrap();
        assert!(writer.run_dir().starts_with(tmp.path()));
    }
}
