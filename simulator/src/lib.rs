pub mod config;
pub mod interface;
pub mod scenarios;
pub mod simulation_results;

pub use config::{Config, ConfigError};
pub use interface::SimulationType;
pub use simulation_results::SimulationResults;
