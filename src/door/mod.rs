//! Door set construction and weight validation.
//!
//! Doors may be given an explicit probability or left unweighted. Unweighted
//! doors share whatever probability mass the explicit doors leave over.

use std::collections::HashSet;
use thiserror::Error;

use crate::types::constants::{MIN_DOORS, WEIGHT_TOLERANCE};
use crate::types::{Door, DoorLabel};

#[derive(Debug, Error, PartialEq)]
pub enum DoorError {
    #[error("Invalid door configuration: {0}")]
    Configuration(String),
    #[error("Probability of door {label} must be between 0 and 1, got {probability}")]
    Validation { label: DoorLabel, probability: f64 },
}

// ------------------------------------------------------------------------------------------------
// Door Specifications
// ------------------------------------------------------------------------------------------------

/// Construction input for a single door
#[derive(Debug, Clone, Default, PartialEq)]
pub struct DoorSpec {
    /// Label of the door, assigned from a `LabelSequence` when absent
    pub label: Option<DoorLabel>,
    /// Prior probability of the door, filled from the remaining mass when absent
    pub probability: Option<f64>,
}

impl DoorSpec {
    pub fn new(probability: Option<f64>) -> Self {
        Self { label: None, probability }
    }

    pub fn labelled(label: impl Into<DoorLabel>, probability: Option<f64>) -> Self {
        Self { label: Some(label.into()), probability }
    }

    pub fn unweighted() -> Self {
        Self::default()
    }
}

/// Hands out sequential door labels ("0", "1", ...) to unlabelled doors.
#[derive(Debug, Clone, Default)]
pub struct LabelSequence {
    next: u64,
}

impl LabelSequence {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }

    pub fn next_label(&mut self) -> DoorLabel {
        let label = DoorLabel(self.next.to_string());
        self.next += 1;
        label
    }
}

// ------------------------------------------------------------------------------------------------
// Door Set
// ------------------------------------------------------------------------------------------------

/// An ordered, immutable set of doors whose weights sum to one
#[derive(Debug, Clone)]
pub struct DoorSet {
    doors: Vec<Door>,
}

impl DoorSet {
    /// Builds a door set from specifications.
    ///
    /// Explicit weights are validated first. The mass left after the explicit
    /// weights is split equally between the unweighted doors.
    pub fn build(specs: Vec<DoorSpec>, labels: &mut LabelSequence) -> Result<Self, DoorError> {
        if specs.len() < MIN_DOORS {
            return Err(DoorError::Configuration(format!(
                "at least {} doors are required, got {}",
                MIN_DOORS,
                specs.len()
            )));
        }

        let labelled: Vec<(DoorLabel, Option<f64>)> = specs
            .into_iter()
            .map(|spec| (spec.label.unwrap_or_else(|| labels.next_label()), spec.probability))
            .collect();

        let mut explicit = 0.0;
        let mut unassigned = 0usize;
        for (label, probability) in &labelled {
            match probability {
                Some(p) => {
                    if !(*p > 0.0 && *p < 1.0) {
                        return Err(DoorError::Validation {
                            label: label.clone(),
                            probability: *p,
                        });
                    }
                    explicit += p;
                }
                None => unassigned += 1,
            }
        }

        if explicit > 1.0 + WEIGHT_TOLERANCE {
            return Err(DoorError::Configuration(format!(
                "explicit probabilities sum to {}, which is more than 1",
                explicit
            )));
        }

        let fill = if unassigned > 0 {
            let remaining = 1.0 - explicit;
            let fill = remaining / unassigned as f64;
            if remaining <= WEIGHT_TOLERANCE || !(fill > 0.0 && fill < 1.0) {
                return Err(DoorError::Configuration(format!(
                    "no probability left for {} unweighted doors",
                    unassigned
                )));
            }
            fill
        } else {
            0.0
        };

        let doors = labelled
            .into_iter()
            .map(|(label, probability)| Door::new(label, probability.unwrap_or(fill)))
            .collect::<Result<Vec<_>, _>>()?;

        Self::from_doors(doors)
    }

    /// Builds `count` doors of equal weight
    pub fn uniform(count: usize, labels: &mut LabelSequence) -> Result<Self, DoorError> {
        if count < MIN_DOORS {
            return Err(DoorError::Configuration(format!(
                "at least {} doors are required, got {}",
                MIN_DOORS, count
            )));
        }
        let probability = 1.0 / count as f64;
        Self::build(vec![DoorSpec::new(Some(probability)); count], labels)
    }

    /// Wraps already-constructed doors after checking labels and total weight
    pub fn from_doors(doors: Vec<Door>) -> Result<Self, DoorError> {
        if doors.len() < MIN_DOORS {
            return Err(DoorError::Configuration(format!(
                "at least {} doors are required, got {}",
                MIN_DOORS,
                doors.len()
            )));
        }

        let mut seen = HashSet::new();
        for door in &doors {
            if !seen.insert(door.label()) {
                return Err(DoorError::Configuration(format!(
                    "door label {} is used more than once",
                    door.label()
                )));
            }
        }

        let total: f64 = doors.iter().map(Door::probability).sum();
        if (total - 1.0).abs() > WEIGHT_TOLERANCE {
            return Err(DoorError::Configuration(format!(
                "door probabilities sum to {}, expected 1",
                total
            )));
        }

        Ok(Self { doors })
    }

    pub fn doors(&self) -> &[Door] {
        &self.doors
    }

    pub fn len(&self) -> usize {
        self.doors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.doors.is_empty()
    }

    pub fn total_probability(&self) -> f64 {
        self.doors.iter().map(Door::probability).sum()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Door> {
        self.doors.iter()
    }
}

impl std::ops::Index<usize> for DoorSet {
    type Output = Door;

    fn index(&self, index: usize) -> &Door {
        &self.doors[index]
    }
}
