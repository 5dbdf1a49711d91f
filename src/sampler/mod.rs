//! Weighted selection of the correct door.
//!
//! Implements inverse-CDF sampling over the door weights.

use rand::Rng;
use rand_distr::{Distribution, Uniform};

use crate::door::DoorSet;

// ------------------------------------------------------------------------------------------------
// Data Structures
// ------------------------------------------------------------------------------------------------

/// Selects correct doors according to the weight of each door
#[derive(Debug, Clone)]
pub struct CorrectDoorSampler {
    cumulative: Vec<f64>,
    unit: Uniform<f64>,
}

// ------------------------------------------------------------------------------------------------
// Implementations
// ------------------------------------------------------------------------------------------------

impl CorrectDoorSampler {
    /// Creates a sampler from the cumulative weights of the door set
    pub fn new(doors: &DoorSet) -> Self {
        let cumulative = doors
            .iter()
            .scan(0.0, |total, door| {
                *total += door.probability();
                Some(*total)
            })
            .collect();
        Self {
            cumulative,
            unit: Uniform::new(0.0, 1.0),
        }
    }

    /// Returns the cumulative weights, in door order
    pub fn cumulative_weights(&self) -> &[f64] {
        &self.cumulative
    }

    /// Maps a draw in [0, 1) to a door index.
    ///
    /// Picks the first door whose cumulative weight is strictly greater than
    /// the draw. A draw at or above the final cumulative weight, which rounding
    /// can produce, picks the last door.
    pub fn index_for(&self, draw: f64) -> usize {
        self.cumulative
            .iter()
            .position(|&weight| draw < weight)
            .unwrap_or(self.cumulative.len().saturating_sub(1))
    }

    /// Draws a single correct door index
    pub fn sample<R: Rng + ?Sized>(&self, rng: &mut R) -> usize {
        self.index_for(self.unit.sample(rng))
    }

    /// Lazily draws exactly `number` correct door indices
    pub fn correct_doors<'a, R: Rng + ?Sized>(
        &'a self,
        number: usize,
        rng: &'a mut R,
    ) -> impl Iterator<Item = usize> + 'a {
        (0..number).map(move |_| self.sample(&mut *rng))
    }
}
