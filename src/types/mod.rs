use serde::{Deserialize, Serialize};
use std::fmt;
use std::hash::{Hash, Hasher};

use crate::door::DoorError;

pub mod constants;

/// A unique identifier for a door
#[derive(Debug, Clone, Hash, Eq, PartialEq, Serialize, Deserialize)]
pub struct DoorLabel(pub String);

/// A door carrying the prior probability of hiding the prize.
///
/// Two doors are equal when their labels match, whatever their weights.
/// The weight is fixed at construction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Door {
    label: DoorLabel,
    probability: f64,
}

impl Door {
    /// Creates a door, rejecting any probability outside the open interval (0, 1)
    pub fn new(label: DoorLabel, probability: f64) -> Result<Self, DoorError> {
        if !(probability > 0.0 && probability < 1.0) {
            return Err(DoorError::Validation { label, probability });
        }
        Ok(Self { label, probability })
    }

    pub fn label(&self) -> &DoorLabel {
        &self.label
    }

    pub fn probability(&self) -> f64 {
        self.probability
    }
}

impl PartialEq for Door {
    fn eq(&self, other: &Self) -> bool {
        self.label == other.label
    }
}

impl Eq for Door {}

impl Hash for Door {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.label.hash(state);
    }
}

/// The result of a single trial
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrialOutcome {
    /// Whether the final selection was the correct door
    pub success: bool,
    /// The door hiding the prize in this trial
    pub correct: Door,
    /// Every selection made by the contestant, oldest first
    pub selections: Vec<Door>,
    /// Doors opened by the host, in the order they were removed
    pub eliminated: Vec<Door>,
}

impl TrialOutcome {
    /// Number of host eliminations that took place
    pub fn eliminations(&self) -> usize {
        self.eliminated.len()
    }

    /// The contestant's last selection
    pub fn final_selection(&self) -> Option<&Door> {
        self.selections.last()
    }
}

impl fmt::Display for DoorLabel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for DoorLabel {
    fn from(label: &str) -> Self {
        DoorLabel(label.to_string())
    }
}

impl From<String> for DoorLabel {
    fn from(label: String) -> Self {
        DoorLabel(label)
    }
}

impl fmt::Display for Door {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Door {} with probability {}", self.label, self.probability)
    }
}
