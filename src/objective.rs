//! # Objectives
//!
//! An `Objective` turns a route into one scalar to be minimized. Both stock objectives,
//! `TravelTime` and `TravelCost`, sum the same segment metric over consecutive stops:
//!
//! ```text
//! distance(a, b) = sqrt(|a.x - b.x| * |a.y - b.y|)
//! ```
//!
//! This is not the Euclidean distance. A segment that is flat on either axis has length 0,
//! whatever the other delta. Time and cost share the formula, so the two objectives are
//! perfectly correlated; keep it that way, the flagged front depends on it.
//!
//! ## Example
//!
//! ```rust
//! use paretoroute::objective::{segment_distance, RouteEvaluator};
//! use paretoroute::waypoint::{Route, Waypoint, WaypointSet};
//!
//! let d = segment_distance(&Waypoint::new(10, 20), &Waypoint::new(30, 50));
//! assert!((d - 600f64.sqrt()).abs() < 1e-12);
//!
//! let set = WaypointSet::from_coords(&[(10, 20), (30, 50)]);
//! let (time, cost) = RouteEvaluator::travel().evaluate(&Route::new(vec![0, 1]), &set);
//! assert_eq!(time, cost);
//! ```

use crate::waypoint::{Route, Waypoint, WaypointSet};

/// A scalar, lower-is-better measure of a route.
pub trait Objective {
    fn evaluate(&self, route: &Route, waypoints: &WaypointSet) -> f64;

    /// Short label used in logs and error messages.
    fn name(&self) -> &'static str {
        "objective"
    }
}

/// Square root of the product of the absolute coordinate deltas between `a` and `b`.
pub fn segment_distance(a: &Waypoint, b: &Waypoint) -> f64 {
    // i32 deltas need 33 bits; their product fits in u64
    let dx = (i64::from(a.x) - i64::from(b.x)).unsigned_abs();
    let dy = (i64::from(a.y) - i64::from(b.y)).unsigned_abs();
    ((dx * dy) as f64).sqrt()
}

/// Sum of `segment_distance` over consecutive stops. Zero for routes shorter than two.
pub fn route_length(route: &Route, waypoints: &WaypointSet) -> f64 {
    let stops: Vec<&Waypoint> = route.resolve(waypoints).collect();
    stops
        .windows(2)
        .map(|pair| segment_distance(pair[0], pair[1]))
        .sum()
}

/// Total travel time, linear in the segment metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelTime;

impl Objective for TravelTime {
    fn evaluate(&self, route: &Route, waypoints: &WaypointSet) -> f64 {
        route_length(route, waypoints)
    }

    fn name(&self) -> &'static str {
        "time"
    }
}

/// Total travel cost, linear in the segment metric.
#[derive(Debug, Clone, Copy, Default)]
pub struct TravelCost;

impl Objective for TravelCost {
    fn evaluate(&self, route: &Route, waypoints: &WaypointSet) -> f64 {
        route_length(route, waypoints)
    }

    fn name(&self) -> &'static str {
        "cost"
    }
}

/// Evaluates the time and cost objectives of a route.
#[derive(Debug, Clone)]
pub struct RouteEvaluator<T = TravelTime, C = TravelCost>
where
    T: Objective,
    C: Objective,
{
    time: T,
    cost: C,
}

impl<T, C> RouteEvaluator<T, C>
where
    T: Objective,
    C: Objective,
{
    pub fn new(time: T, cost: C) -> Self {
        Self { time, cost }
    }

    pub fn evaluate_time(&self, route: &Route, waypoints: &WaypointSet) -> f64 {
        self.time.evaluate(route, waypoints)
    }

    pub fn evaluate_cost(&self, route: &Route, waypoints: &WaypointSet) -> f64 {
        self.cost.evaluate(route, waypoints)
    }

    /// Returns `(total_time, total_cost)`.
    pub fn evaluate(&self, route: &Route, waypoints: &WaypointSet) -> (f64, f64) {
        (
            self.evaluate_time(route, waypoints),
            self.evaluate_cost(route, waypoints),
        )
    }

    pub fn time_objective(&self) -> &T {
        &self.time
    }

    pub fn cost_objective(&self) -> &C {
        &self.cost
    }
}

impl RouteEvaluator {
    /// The stock evaluator: `TravelTime` and `TravelCost`.
    pub fn travel() -> Self {
        Self::new(TravelTime, TravelCost)
    }
}

impl Default for RouteEvaluator {
    fn default() -> Self {
        Self::travel()
    }
}
