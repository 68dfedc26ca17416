//! Scenario fixture loading.
//!
//! A scenario is a directory of fixture files describing one synthetic
//! incident: a markdown description, captured system state (logs, events,
//! metrics, topology, configuration), and the ground-truth outcome the
//! agent's diagnosis is scored against. Every fixture file is optional; a
//! missing scenario directory is an error.

use std::fs;
use std::path::{Path, PathBuf};

use serde_json::Value;
use tracing::{debug, warn};

use crate::error::ScenarioError;
use crate::types::Diagnosis;

/// Parsed contents of one scenario directory.
#[derive(Debug, Clone, Default)]
pub struct ScenarioData {
    pub id: String,
    /// Incident description shown to the agent, from `description.md`.
    pub description: Option<String>,
    /// Captured system state at incident time, from `state/`.
    pub state: ScenarioState,
    /// Reference-correct outcome, from `ground_truth/`. Absent when the
    /// scenario ships without ground truth (comparison is then skipped).
    pub ground_truth: Option<GroundTruth>,
}

/// System state fixtures presented to the agent.
#[derive(Debug, Clone, Default)]
pub struct ScenarioState {
    pub logs: Vec<Value>,
    pub events: Vec<Value>,
    pub metrics: Option<Value>,
    pub topology: Option<Value>,
    pub configuration: Option<Value>,
}

/// Ground truth for one scenario.
#[derive(Debug, Clone, Default)]
pub struct GroundTruth {
    pub diagnosis: Diagnosis,
    pub metadata: Option<Value>,
}

/// Locates and reads the raw data files for scenarios under a base
/// directory, parsing each format into structured data.
#[derive(Debug, Clone)]
pub struct ScenarioLoader {
    base_path: PathBuf,
}

impl ScenarioLoader {
    pub fn new(base_path: impl Into<PathBuf>) -> Self {
        Self {
            base_path: base_path.into(),
        }
    }

    /// Enumerate available scenario ids: the names of subdirectories of the
    /// base path, sorted.
    pub fn list(&self) -> Result<Vec<String>, ScenarioError> {
        let entries = fs::read_dir(&self.base_path).map_err(|source| ScenarioError::ListFailed {
            path: self.base_path.clone(),
            source,
        })?;
        let mut ids: Vec<String> = entries
            .filter_map(|e| e.ok())
            .filter(|e| e.path().is_dir())
            .map(|e| e.file_name().to_string_lossy().into_owned())
            .collect();
        ids.sort();
        Ok(ids)
    }

    /// Load and parse all fixtures for a scenario id.
    pub fn load(&self, scenario_id: &str) -> Result<ScenarioData, ScenarioError> {
        let scenario_path = self.base_path.join(scenario_id);
        if !scenario_path.exists() {
            return Err(ScenarioError::NotFound {
                id: scenario_id.to_string(),
                path: scenario_path,
            });
        }
        debug!(scenario = scenario_id, path = %scenario_path.display(), "loading scenario");

        let description = read_text(&scenario_path.join("description.md"))?;

        let state_path = scenario_path.join("state");
        let state = ScenarioState {
            logs: read_jsonl(&state_path.join("logs.jsonl"))?,
            events: read_jsonl(&state_path.join("events.jsonl"))?,
            metrics: read_json(&state_path.join("metrics.json"))?,
            topology: read_json(&state_path.join("topology.json"))?,
            configuration: read_yaml(&state_path.join("configuration.yaml"))?,
        };

        let truth_path = scenario_path.join("ground_truth");
        let ground_truth = if truth_path.is_dir() {
            Some(load_ground_truth(&truth_path)?)
        } else {
            warn!(scenario = scenario_id, "scenario has no ground_truth directory");
            None
        };

        Ok(ScenarioData {
            id: scenario_id.to_string(),
            description,
            state,
            ground_truth,
        })
    }
}

fn load_ground_truth(truth_path: &Path) -> Result<GroundTruth, ScenarioError> {
    let mut diagnosis = Diagnosis::default();
    if let Some(value) = read_json(&truth_path.join("root_cause.json"))? {
        diagnosis.root_cause = serde_json::from_value(value).ok();
    }
    if let Some(value) = read_json(&truth_path.join("causal_graph.json"))? {
        diagnosis.causal_graph = serde_json::from_value(value).ok();
    }
    if let Some(value) = read_json(&truth_path.join("resolution.json"))? {
        diagnosis.resolution = serde_json::from_value(value).ok();
    }
    let metadata = read_json(&truth_path.join("metadata.json"))?;
    Ok(GroundTruth {
        diagnosis,
        metadata,
    })
}

/// Read a UTF-8 text file, `None` if it does not exist.
fn read_text(path: &Path) -> Result<Option<String>, ScenarioError> {
    if !path.exists() {
        return Ok(None);
    }
    fs::read_to_string(path)
        .map(Some)
        .map_err(|source| ScenarioError::FixtureRead {
            path: path.to_path_buf(),
            source,
        })
}

/// Read a JSON file, `None` if it does not exist.
fn read_json(path: &Path) -> Result<Option<Value>, ScenarioError> {
    let Some(raw) = read_text(path)? else {
        return Ok(None);
    };
    serde_json::from_str(&raw)
        .map(Some)
        .map_err(|e| ScenarioError::FixtureParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}

/// Read a JSONL file line by line, skipping blank lines. An absent file
/// yields an empty list.
fn read_jsonl(path: &Path) -> Result<Vec<Value>, ScenarioError> {
    let Some(raw) = read_text(path)? else {
        return Ok(Vec::new());
    };
    raw.lines()
        .filter(|line| !line.trim().is_empty())
        .map(|line| {
            serde_json::from_str(line).map_err(|e| ScenarioError::FixtureParse {
                path: path.to_path_buf(),
                message: e.to_string(),
            })
        })
        .collect()
}

/// Read a YAML file into a JSON value, `None` if it does not exist.
fn read_yaml(path: &Path) -> Result<Option<Value>, ScenarioError> {
    let Some(raw) = read_text(path)? else {
        return Ok(None);
    };
    serde_yaml::from_str(&raw)
        .map(Some)
        .map_err(|e| ScenarioError::FixtureParse {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
}
