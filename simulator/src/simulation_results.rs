//! Results of simulation runs and their JSON output.

use chrono::Local;
use montyhall::{utils::logging, MontyHallExperiment, SimulationReport};
use serde::Serialize;
use std::fs;
use std::path::Path;

use crate::config::ConfigError;

/// Outcome of running one strategy on one experiment
#[derive(Debug, Clone, Serialize)]
pub struct SimulationResults {
    pub strategy: String,
    pub door_count: usize,
    pub door_probabilities: Vec<f64>,
    pub trials: usize,
    pub successes: usize,
    pub success_ratio: f64,
    pub elapsed_seconds: f64,
    pub seed: Option<u64>,
    pub finished_at: String,
}

impl SimulationResults {
    pub fn new(
        strategy: &str,
        experiment: &MontyHallExperiment,
        report: &SimulationReport,
        seed: Option<u64>,
    ) -> Self {
        Self {
            strategy: strategy.to_string(),
            door_count: experiment.doors().len(),
            door_probabilities: experiment.doors().iter().map(|d| d.probability()).collect(),
            trials: report.trials,
            successes: report.successes,
            success_ratio: report.success_ratio,
            elapsed_seconds: report.elapsed.as_secs_f64(),
            seed,
            finished_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
        }
    }

    /// Logs a one-line summary of the run
    pub fn log_summary(&self) {
        logging::log("SIMULATOR", &format!(
            "{} on {} doors: {} of {} trials succeeded ({:.4}) in {:.3}s",
            self.strategy,
            self.door_count,
            self.successes,
            self.trials,
            self.success_ratio,
            self.elapsed_seconds
        ));
    }
}

/// Writes `results` as pretty JSON under `{results_dir}/data/{file_name}`
pub fn save_results(
    results_dir: &str,
    file_name: &str,
    results: &serde_json::Value,
) -> Result<String, ConfigError> {
    let data_dir = Path::new(results_dir).join("data");
    fs::create_dir_all(&data_dir)?;

    let path = data_dir.join(file_name);
    fs::write(&path, serde_json::to_string_pretty(results)?)?;

    let path = path.display().to_string();
    logging::log("SIMULATOR", &format!("Saved simulation results to {}", path));
    Ok(path)
}
