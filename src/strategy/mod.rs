//! Contestant strategies.
//!
//! A strategy receives the doors still in play and the contestant's past
//! selections (oldest first) and returns the next selection. Strategies are
//! plain function pointers so they carry no state and can be shared by every
//! worker of a simulation.

use crate::experiment::SimulationError;
use crate::types::Door;

/// Decision function of the contestant
pub type Strategy = fn(&[Door], &[Door]) -> Door;

/// Names accepted by `resolve`
pub const STRATEGY_NAMES: [&str; 2] = ["always_swap", "never_swap"];

/// Always swaps away from the most recent selection when given the chance.
///
/// This is the optimum strategy for the classical problem.
pub fn always_swap(doors: &[Door], past_selections: &[Door]) -> Door {
    let current = &past_selections[past_selections.len() - 1];
    doors
        .iter()
        .find(|door| *door != current)
        .unwrap_or(current)
        .clone()
}

/// Sticks with the most recent selection.
pub fn never_swap(_doors: &[Door], past_selections: &[Door]) -> Door {
    past_selections[past_selections.len() - 1].clone()
}

/// Looks up a built-in strategy by name
pub fn resolve(name: &str) -> Result<Strategy, SimulationError> {
    match name.trim() {
        "always_swap" => Ok(always_swap as Strategy),
        "never_swap" => Ok(never_swap as Strategy),
        other => Err(SimulationError::UnknownStrategy(other.to_string())),
    }
}
