//! # Pareto Front Extraction
//!
//! `ParetoEngine` decides which solutions of a population are non-dominated. A solution is
//! dominated iff some *other* solution of the same population, other by position and not by
//! value, is strictly faster and strictly cheaper. Everything else is on the front.
//!
//! Two strategies are available and always flag exactly the same set:
//!
//! - [`FrontStrategy::BruteForce`] scans the whole population for every solution, O(n²).
//!   Each check only reads the population, so the scan runs on rayon's pool once the
//!   population reaches the engine's parallel threshold.
//! - [`FrontStrategy::SortAndSweep`] sorts by time and sweeps with the lowest cost seen among
//!   strictly faster solutions, O(n log n). Solutions with equal time are resolved as a group
//!   so ties never dominate each other.
//!
//! The engine never mutates a shared solution: [`ParetoEngine::identify`] returns the indices
//! of the front and [`ParetoEngine::flag`] consumes a population and returns it flagged, in
//! the original order.
//!
//! ## Example
//!
//! ```rust
//! use paretoroute::pareto::{FrontStrategy, ParetoEngine};
//! use paretoroute::solution::Solution;
//! use paretoroute::waypoint::Route;
//!
//! let population: Vec<Solution> = [(1.0, 5.0), (2.0, 3.0), (3.0, 1.0), (4.0, 6.0)]
//!     .iter()
//!     .map(|&(t, c)| Solution::new(Route::default(), t, c))
//!     .collect();
//!
//! let engine = ParetoEngine::new(FrontStrategy::SortAndSweep);
//! assert_eq!(engine.identify(&population), vec![0, 1, 2]);
//! ```

use std::cmp::Ordering;

use rayon::prelude::*;
use tracing::debug;

use crate::solution::Solution;

/// Default population size from which the brute-force scan goes parallel.
pub const DEFAULT_PARALLEL_THRESHOLD: usize = 1000;

/// How the non-dominated subset is computed.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FrontStrategy {
    /// Pairwise scan of the full population.
    #[default]
    BruteForce,
    /// Sort by time, sweep keeping the best cost among strictly faster solutions.
    SortAndSweep,
}

/// Returns true if any solution other than `population[index]` dominates it.
///
/// # Panics
///
/// Panics if `index` is out of bounds for `population`.
pub fn is_dominated(population: &[Solution], index: usize) -> bool {
    let candidate = &population[index];
    population
        .iter()
        .enumerate()
        .any(|(other, solution)| other != index && solution.dominates(candidate))
}

/// Computes the Pareto front of a population.
#[derive(Debug, Clone)]
pub struct ParetoEngine {
    strategy: FrontStrategy,
    parallel_threshold: usize,
}

impl ParetoEngine {
    pub fn new(strategy: FrontStrategy) -> Self {
        Self {
            strategy,
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
        }
    }

    /// Sets the population size from which the brute-force scan runs in parallel.
    ///
    /// A threshold of 0 behaves like 1: every non-empty population is scanned in parallel.
    pub fn with_parallel_threshold(mut self, parallel_threshold: usize) -> Self {
        self.parallel_threshold = parallel_threshold;
        self
    }

    pub fn strategy(&self) -> FrontStrategy {
        self.strategy
    }

    pub fn parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    /// Returns one flag per solution, `true` for members of the front.
    pub fn front_mask(&self, population: &[Solution]) -> Vec<bool> {
        match self.strategy {
            FrontStrategy::BruteForce if population.len() >= self.parallel_threshold.max(1) => {
                debug!(size = population.len(), "Parallel brute-force front scan");
                (0..population.len())
                    .into_par_iter()
                    .map(|index| !is_dominated(population, index))
                    .collect()
            }
            FrontStrategy::BruteForce => {
                debug!(size = population.len(), "Sequential brute-force front scan");
                (0..population.len())
                    .map(|index| !is_dominated(population, index))
                    .collect()
            }
            FrontStrategy::SortAndSweep => {
                debug!(size = population.len(), "Sort-and-sweep front scan");
                sweep_front(population)
            }
        }
    }

    /// Returns the indices of the non-dominated solutions, in ascending order.
    pub fn identify(&self, population: &[Solution]) -> Vec<usize> {
        self.front_mask(population)
            .into_iter()
            .enumerate()
            .filter_map(|(index, on_front)| on_front.then_some(index))
            .collect()
    }

    /// Consumes a population and returns it with the front flagged. Order is preserved.
    pub fn flag(&self, population: Vec<Solution>) -> Vec<Solution> {
        let mask = self.front_mask(&population);
        population
            .into_iter()
            .zip(mask)
            .map(|(solution, on_front)| solution.with_pareto_flag(on_front))
            .collect()
    }
}

impl Default for ParetoEngine {
    fn default() -> Self {
        Self::new(FrontStrategy::default())
    }
}

fn sweep_front(population: &[Solution]) -> Vec<bool> {
    let mut mask = vec![false; population.len()];

    // A NaN objective makes every comparison false: such a solution neither dominates nor
    // is dominated, so it sits on the front and stays out of the sweep.
    let mut order: Vec<usize> = Vec::with_capacity(population.len());
    for (index, solution) in population.iter().enumerate() {
        if solution.total_time().is_nan() || solution.total_cost().is_nan() {
            mask[index] = true;
        } else {
            order.push(index);
        }
    }

    order.sort_by(|&a, &b| {
        population[a]
            .total_time()
            .partial_cmp(&population[b].total_time())
            .unwrap_or(Ordering::Equal)
    });

    // Lowest cost among solutions strictly faster than the current group
    let mut best_cost = f64::INFINITY;
    let mut start = 0;
    while start < order.len() {
        let time = population[order[start]].total_time();
        let end = order[start..]
            .iter()
            .position(|&index| population[index].total_time() != time)
            .map_or(order.len(), |offset| start + offset);

        let group = &order[start..end];
        for &index in group {
            mask[index] = !(best_cost < population[index].total_cost());
        }
        for &index in group {
            best_cost = best_cost.min(population[index].total_cost());
        }

        start = end;
    }

    mask
}
