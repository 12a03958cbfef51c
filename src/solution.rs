//! # Solution
//!
//! A `Solution` bundles a route with its evaluated objectives and its Pareto flag. The flag
//! starts out `false` and is only ever raised by the front extraction in
//! [`crate::pareto::ParetoEngine`], which consumes the population and hands back a flagged one.
//!
//! Dominance is strict on both objectives: `a` dominates `b` iff `a` is faster *and* cheaper.
//! Equal values on either objective mean neither dominates, so ties never dominate.

use crate::waypoint::Route;

/// Outcome of comparing two solutions under Pareto dominance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ParetoCompare {
    ADominatesB,
    BDominatesA,
    NonDominated,
}

/// An evaluated route.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase"))]
#[derive(Debug, Clone, PartialEq)]
pub struct Solution {
    route: Route,
    total_time: f64,
    total_cost: f64,
    is_pareto_optimal: bool,
}

impl Solution {
    /// Creates an unflagged solution.
    pub fn new(route: Route, total_time: f64, total_cost: f64) -> Self {
        Self {
            route,
            total_time,
            total_cost,
            is_pareto_optimal: false,
        }
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    pub fn total_time(&self) -> f64 {
        self.total_time
    }

    pub fn total_cost(&self) -> f64 {
        self.total_cost
    }

    /// `(total_time, total_cost)`, the point a renderer plots.
    pub fn objectives(&self) -> (f64, f64) {
        (self.total_time, self.total_cost)
    }

    pub fn is_pareto_optimal(&self) -> bool {
        self.is_pareto_optimal
    }

    /// Returns true if `self` is strictly better than `other` on both objectives.
    ///
    /// Irreflexive and asymmetric. Any comparison involving NaN is false.
    pub fn dominates(&self, other: &Solution) -> bool {
        self.total_time < other.total_time && self.total_cost < other.total_cost
    }

    pub fn pareto_compare(&self, other: &Solution) -> ParetoCompare {
        if self.dominates(other) {
            ParetoCompare::ADominatesB
        } else if other.dominates(self) {
            ParetoCompare::BDominatesA
        } else {
            ParetoCompare::NonDominated
        }
    }

    pub(crate) fn with_pareto_flag(mut self, is_pareto_optimal: bool) -> Self {
        self.is_pareto_optimal = is_pareto_optimal;
        self
    }
}
