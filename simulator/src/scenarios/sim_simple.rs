use chrono::Local;
use montyhall::utils::logging;

use crate::config::{Config, ConfigError};
use crate::scenarios::utils::{results_dir, setup_logging};
use crate::simulation_results::{save_results, SimulationResults};

/// Runs the simple simulation from the default config file
pub fn run_simple_simulation() -> Result<Vec<SimulationResults>, ConfigError> {
    run_simple_simulation_with(&Config::load()?)
}

/// Runs every configured strategy on the configured doors and saves the results
pub fn run_simple_simulation_with(config: &Config) -> Result<Vec<SimulationResults>, ConfigError> {
    let results_dir = results_dir("sim_simple")?;

    setup_logging();

    let experiment = config.experiment.build()?;
    let options = config.simulation.options();

    // Log configuration
    logging::log("SIMULATOR", "=== Simulation Configuration ===");
    logging::log("SIMULATOR", &format!("Start Time: {}", Local::now().format("%Y-%m-%d %H:%M:%S")));
    for door in experiment.doors().iter() {
        logging::log("SIMULATOR", &door.to_string());
    }
    logging::log("SIMULATOR", &format!("Strategies: {:?}", config.simulation.strategies));
    logging::log("SIMULATOR", &format!("Trials per strategy: {}", options.trials));
    logging::log("SIMULATOR", &format!("Workers: {:?}", options.max_workers));
    logging::log("SIMULATOR", "=============================");

    let mut all_results = Vec::new();
    for (name, strategy) in config.simulation.resolve_strategies()? {
        let report = experiment.run_simulations_with(strategy, &options)?;
        let results = SimulationResults::new(&name, &experiment, &report, options.seed);
        results.log_summary();
        println!("{}: success ratio {:.4} over {} trials", name, results.success_ratio, results.trials);
        all_results.push(results);
    }

    let stats = serde_json::json!({
        "parameters": {
            "door_probabilities": experiment.doors().iter().map(|d| d.probability()).collect::<Vec<_>>(),
            "num_trials": options.trials,
            "batch_size": options.batch_size,
            "seed": options.seed,
        },
        "results": all_results,
    });
    save_results(&results_dir, "simulation_stats.json", &stats)?;

    Ok(all_results)
}
