//! # RouteGenerator
//!
//! The `RouteGenerator` trait defines how candidate routes are produced from a waypoint set.
//! `ShuffleGenerator` is the stock implementation: an unbiased Fisher–Yates shuffle of the
//! set's indices, so every ordering is equally likely.
//!
//! ## Example
//!
//! ```rust
//! use paretoroute::generator::{RouteGenerator, ShuffleGenerator};
//! use paretoroute::rng::RandomNumberGenerator;
//! use paretoroute::waypoint::WaypointSet;
//!
//! let set = WaypointSet::from_coords(&[(10, 20), (30, 50), (50, 30)]);
//! let mut rng = RandomNumberGenerator::from_seed(1);
//!
//! let route = ShuffleGenerator.generate(&set, &mut rng);
//! assert!(route.is_permutation_of(&set));
//! ```

use std::fmt::Debug;

use crate::{
    rng::RandomNumberGenerator,
    waypoint::{Route, WaypointSet},
};

/// Produces candidate routes over a fixed waypoint set.
pub trait RouteGenerator
where
    Self: Debug + Clone + Send + Sync,
{
    /// Generates one route visiting every waypoint of `waypoints` exactly once.
    ///
    /// An empty set yields an empty route.
    fn generate(&self, waypoints: &WaypointSet, rng: &mut RandomNumberGenerator) -> Route;
}

/// Generates uniformly random permutations with a Fisher–Yates shuffle.
#[derive(Debug, Clone, Copy, Default)]
pub struct ShuffleGenerator;

impl ShuffleGenerator {
    pub fn new() -> Self {
        Self
    }

    /// Shuffles `items` in place.
    ///
    /// For `n` from `len` down to 2, a uniform `k` in `[0, n - 1]` is drawn and positions
    /// `k` and `n - 1` are swapped.
    pub fn shuffle<T>(items: &mut [T], rng: &mut RandomNumberGenerator) {
        let mut n = items.len();
        while n > 1 {
            n -= 1;
            let k = rng.gen_index(n);
            items.swap(k, n);
        }
    }
}

impl RouteGenerator for ShuffleGenerator {
    fn generate(&self, waypoints: &WaypointSet, rng: &mut RandomNumberGenerator) -> Route {
        let mut order: Vec<usize> = (0..waypoints.len()).collect();
        Self::shuffle(&mut order, rng);
        Route::new(order)
    }
}
