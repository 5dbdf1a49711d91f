pub mod types;
pub mod door;
pub mod sampler;
pub mod strategy;
pub mod experiment;
pub mod utils;

pub use door::{DoorError, DoorSet, DoorSpec, LabelSequence};
pub use experiment::{
    MontyHallExperiment, SimulationError, SimulationOptions, SimulationReport, CLASSICAL_MONTY_HALL,
};
pub use sampler::CorrectDoorSampler;
pub use strategy::{always_swap, never_swap, Strategy};
pub use types::{Door, DoorLabel, TrialOutcome};
