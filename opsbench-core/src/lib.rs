//! # Opsbench Core
//!
//! Core library for the Opsbench benchmark harness: evaluates AI "Site
//! Reliability Engineer" agents against synthetic incident scenarios.
//! Provides scenario fixture loading, the agent adapter boundary, the
//! scoring subsystem, latency timing, result persistence, and per-scenario
//! orchestration.

pub mod agent;
pub mod config;
pub mod efficiency;
pub mod error;
pub mod orchestrator;
pub mod report;
pub mod scenario;
pub mod scoring;
pub mod types;

// Re-export commonly used types at the crate root.
pub use agent::{ScriptedAgent, SreAgent};
pub use config::{BenchConfig, load_config};
pub use efficiency::EfficiencyTimer;
pub use error::{OpsbenchError, Result};
pub use orchestrator::ScenarioEvaluator;
pub use report::{RunWriter, ScenarioReport};
pub use scenario::{ScenarioData, ScenarioLoader};
pub use scoring::ResultComparator;
pub use types::{
    CausalEdge, CausalGraph, CausalNode, ComparisonScores, ComponentRef, Diagnosis, Resolution,
    RootCause,
};
