//! Configuration for the benchmark harness.
//!
//! Uses `figment` for layered configuration: defaults -> `opsbench.toml` ->
//! `OPSBENCH_*` environment variables (nested keys separated by `__`, e.g.
//! `OPSBENCH_SCENARIOS__BASE_PATH`).

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

use crate::error::ConfigError;

/// Top-level configuration for a benchmark run.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct BenchConfig {
    pub scenarios: ScenariosConfig,
    pub results: ResultsConfig,
    pub agent: AgentConfig,
}

/// Where scenario fixture directories live.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ScenariosConfig {
    pub base_path: PathBuf,
}

impl Default for ScenariosConfig {
    fn default() -> Self {
        Self {
            base_path: PathBuf::from("./scenarios"),
        }
    }
}

/// Where run results are written.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ResultsConfig {
    pub base_dir: PathBuf,
}

impl Default for ResultsConfig {
    fn default() -> Self {
        Self {
            base_dir: PathBuf::from("./bench_runs"),
        }
    }
}

/// Agent adapter selection and limits.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct AgentConfig {
    /// Adapter name; "scripted" is the built-in canned-response agent.
    pub adapter: String,
    /// Per-scenario diagnosis timeout in seconds.
    pub timeout_secs: u64,
}

impl Default for AgentConfig {
    fn default() -> Self {
        Self {
            adapter: "scripted".to_string(),
            timeout_secs: 300,
        }
    }
}

/// Load configuration: defaults, then an optional TOML file (falling back
/// to `./opsbench.toml` when present), then environment variables.
pub fn load_config(config_path: Option<&Path>) -> Result<BenchConfig, ConfigError> {
    let mut figment = Figment::from(Serialized::defaults(BenchConfig::default()));

    match config_path {
        Some(path) => figment = figment.merge(Toml::file(path)),
        None => {
            let default_path = Path::new("opsbench.toml");
            if default_path.exists() {
                figment = figment.merge(Toml::file(default_path));
            }
        }
    }

    figment
        .merge(Env::prefixed("OPSBENCH_").split("__"))
        .extract()
        .map_err(|e| ConfigError::LoadFailed {
            message: e.to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = BenchConfig::default();
        assert_eq!(config.scenarios.base_path, PathBuf::from("./scenarios"));
        assert_eq!(config.results.base_dir, PathBuf::from("./bench_runs"));
        assert_eq!(config.agent.adapter, "scripted");
        assert_eq!(config.agent.timeout_secs, 300);
    }

    #[test]
    fn test_load_from_toml_file() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("opsbench.toml");
        std::fs::write(
            &path,
            "[scenarios]\nbase_path = \"/data/scenarios\"\n\n[agent]\ntimeout_secs = 60\n",
        )
        .unwrap();

        let config = load_config(Some(&path)).unwrap();
        assert_eq!(config.scenarios.base_path, PathBuf::from("/data/scenarios"));
        assert_eq!(config.agent.timeout_secs, 60);
        // Untouched sections keep their defaults.
        assert_eq!(config.results.base_dir, PathBuf::from("./bench_runs"));
    }
}
