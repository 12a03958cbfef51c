//! Random route enumeration over a fixed waypoint set, scored on travel time and travel cost,
//! with extraction of the non-dominated (Pareto-optimal) subset.
//!
//! ```rust
//! use paretoroute::{CycleOptions, ParetoLauncher};
//!
//! let options = CycleOptions::builder().population_size(50).seed(7).build();
//! let population = ParetoLauncher::travel().run(&options).unwrap();
//!
//! assert_eq!(population.len(), 50);
//! for (time, cost) in population.front_points() {
//!     assert!(time >= 0.0 && cost >= 0.0);
//! }
//! ```

pub mod cycle;
pub mod error;
pub mod generator;
pub mod objective;
pub mod pareto;
pub mod population;
pub mod rng;
pub mod solution;
pub mod waypoint;

// Re-export commonly used types for convenience
pub use cycle::{CycleOptions, ParetoLauncher};
pub use error::{ParetoError, Result, ResultExt};
pub use pareto::{FrontStrategy, ParetoEngine};
pub use population::Population;
pub use solution::Solution;
pub use waypoint::{Route, Waypoint, WaypointSet};
