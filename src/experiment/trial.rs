//! Single-trial state machine.
//!
//! A trial starts with a uniformly random selection. While more than two
//! doors remain, the host opens a door that is neither the correct door nor
//! the current selection, and the contestant's strategy picks again. With two
//! doors left the trial is decided.

use rand::seq::SliceRandom;
use rand::{Rng, RngCore};

use super::SimulationError;
use crate::door::DoorSet;
use crate::strategy::Strategy;
use crate::types::{Door, TrialOutcome};

/// Host choice among the indices of the doors that may be opened
pub type EliminationChoice = fn(&[usize], &mut dyn RngCore) -> Option<usize>;

/// Opens one of the candidate doors uniformly at random
pub fn random_choice(candidates: &[usize], rng: &mut dyn RngCore) -> Option<usize> {
    candidates.choose(rng).copied()
}

/// Phases a trial moves through
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TrialPhase {
    /// No selection made yet
    Initial,
    /// The host opens a door, then the contestant selects again
    EliminationReselect,
    /// Two doors remain and the outcome is fixed
    Terminal,
}

impl TrialPhase {
    fn after_selection(remaining: usize) -> Self {
        if remaining > 2 {
            TrialPhase::EliminationReselect
        } else {
            TrialPhase::Terminal
        }
    }
}

/// Plays one trial to completion
pub fn run_trial<R: Rng>(
    doors: &DoorSet,
    strategy: Strategy,
    choice: EliminationChoice,
    correct: &Door,
    rng: &mut R,
) -> Result<TrialOutcome, SimulationError> {
    let mut remaining: Vec<usize> = (0..doors.len()).collect();
    let mut selections: Vec<Door> = Vec::with_capacity(doors.len().saturating_sub(1));
    let mut eliminated: Vec<Door> = Vec::with_capacity(doors.len().saturating_sub(2));
    let mut phase = TrialPhase::Initial;

    loop {
        match phase {
            TrialPhase::Initial => {
                let first = rng.gen_range(0..doors.len());
                selections.push(doors[first].clone());
                phase = TrialPhase::after_selection(remaining.len());
            }
            TrialPhase::EliminationReselect => {
                let current = &selections[selections.len() - 1];
                let candidates: Vec<usize> = remaining
                    .iter()
                    .copied()
                    .filter(|&i| doors[i] != *correct && doors[i] != *current)
                    .collect();

                let opened = choice(&candidates, &mut *rng)
                    .filter(|i| candidates.contains(i))
                    .ok_or(SimulationError::NoEliminationCandidate {
                        remaining: remaining.len(),
                    })?;
                remaining.retain(|&i| i != opened);
                eliminated.push(doors[opened].clone());
                tracing::debug!(opened = %doors[opened].label(), remaining = remaining.len(), "host opened door");

                let in_play: Vec<Door> = remaining.iter().map(|&i| doors[i].clone()).collect();
                let next = strategy(&in_play, &selections);
                if !in_play.contains(&next) {
                    return Err(SimulationError::StrategyViolation {
                        selected: next.label().clone(),
                        remaining: in_play.len(),
                    });
                }
                selections.push(next);
                phase = TrialPhase::after_selection(remaining.len());
            }
            TrialPhase::Terminal => break,
        }
    }

    let success = selections.last() == Some(correct);
    Ok(TrialOutcome {
        success,
        correct: correct.clone(),
        selections,
        eliminated,
    })
}
