//! # Population
//!
//! The flagged result of one cycle, in generation order. Front membership is a flag on each
//! solution, never a separate ordering. A renderer reads `points()` for every solution and
//! `front_points()` for the highlighted subset.

use crate::{
    error::{ParetoError, Result},
    solution::Solution,
};

/// An ordered collection of solutions produced by a single cycle.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Population {
    solutions: Vec<Solution>,
}

impl Population {
    /// Wraps solutions whose flags were already set by [`crate::pareto::ParetoEngine::flag`].
    pub(crate) fn from_flagged(solutions: Vec<Solution>) -> Self {
        Self { solutions }
    }

    /// Builds a population from unflagged solutions and an externally computed front mask.
    ///
    /// The mask is trusted as given: no dominance check is made, so a mask that disagrees
    /// with [`crate::pareto::ParetoEngine::front_mask`] yields flags that contradict
    /// dominance. Use [`crate::pareto::ParetoEngine::flag`] when the flags must be derived.
    ///
    /// # Errors
    ///
    /// Returns `ParetoError::PopulationMismatch` if `mask` and `solutions` differ in length.
    pub fn from_mask(solutions: Vec<Solution>, mask: &[bool]) -> Result<Self> {
        if solutions.len() != mask.len() {
            return Err(ParetoError::PopulationMismatch {
                expected: solutions.len(),
                actual: mask.len(),
            });
        }

        Ok(Self::from_flagged(
            solutions
                .into_iter()
                .zip(mask)
                .map(|(solution, &on_front)| solution.with_pareto_flag(on_front))
                .collect(),
        ))
    }

    pub fn len(&self) -> usize {
        self.solutions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.solutions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Solution> {
        self.solutions.get(index)
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Solution> {
        self.solutions.iter()
    }

    pub fn as_slice(&self) -> &[Solution] {
        &self.solutions
    }

    pub fn into_inner(self) -> Vec<Solution> {
        self.solutions
    }

    /// Solutions flagged as Pareto-optimal, in generation order.
    pub fn front(&self) -> impl Iterator<Item = &Solution> {
        self.solutions.iter().filter(|s| s.is_pareto_optimal())
    }

    pub fn front_len(&self) -> usize {
        self.front().count()
    }

    /// Indices of the flagged solutions.
    pub fn front_indices(&self) -> Vec<usize> {
        self.solutions
            .iter()
            .enumerate()
            .filter_map(|(index, s)| s.is_pareto_optimal().then_some(index))
            .collect()
    }

    /// `(total_time, total_cost)` of every solution.
    pub fn points(&self) -> Vec<(f64, f64)> {
        self.solutions.iter().map(Solution::objectives).collect()
    }

    /// `(total_time, total_cost)` of the front.
    pub fn front_points(&self) -> Vec<(f64, f64)> {
        self.front().map(Solution::objectives).collect()
    }

    /// Lowest total time in the population, `None` when empty.
    pub fn best_time(&self) -> Option<f64> {
        self.solutions
            .iter()
            .map(Solution::total_time)
            .min_by(|a, b| a.total_cmp(b))
    }

    /// Lowest total cost in the population, `None` when empty.
    pub fn best_cost(&self) -> Option<f64> {
        self.solutions
            .iter()
            .map(Solution::total_cost)
            .min_by(|a, b| a.total_cmp(b))
    }
}

impl<'a> IntoIterator for &'a Population {
    type Item = &'a Solution;
    type IntoIter = std::slice::Iter<'a, Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.iter()
    }
}

impl IntoIterator for Population {
    type Item = Solution;
    type IntoIter = std::vec::IntoIter<Solution>;

    fn into_iter(self) -> Self::IntoIter {
        self.solutions.into_iter()
    }
}
