use montyhall::utils::logging;
use std::env;
use std::fs;

/// Root directory for scenario output
pub const RESULTS_ROOT: &str = "simulator/results";

/// Returns the results directory of a scenario, creating it if needed
pub fn results_dir(scenario: &str) -> Result<String, crate::config::ConfigError> {
    let dir = format!("{}/{}", RESULTS_ROOT, scenario);
    fs::create_dir_all(format!("{}/data", dir))?;
    Ok(dir)
}

/// Sets up logging if ENABLE_LOGS environment variable is set
pub fn setup_logging() {
    if env::var("ENABLE_LOGS").is_ok() {
        env::set_var("MONTYHALL_LOGGING", "true");
        logging::init_logging();
    }
}
