//! # CycleOptions
//!
//! The `CycleOptions` struct is the configuration of one generate-evaluate-filter cycle:
//! the waypoint set, how many solutions to generate, how the front is extracted, and an
//! optional seed for reproducible runs.
//!
//! ## Example
//!
//! ```rust
//! use paretoroute::cycle::CycleOptions;
//! use paretoroute::pareto::FrontStrategy;
//! use paretoroute::waypoint::WaypointSet;
//!
//! // The stock configuration: five waypoints, 100 solutions
//! let default_options = CycleOptions::default();
//! assert_eq!(default_options.get_population_size(), 100);
//!
//! let custom_options = CycleOptions::builder()
//!     .waypoints(WaypointSet::from_coords(&[(0, 0), (3, 7), (9, 2)]))
//!     .population_size(50)
//!     .front_strategy(FrontStrategy::SortAndSweep)
//!     .seed(42)
//!     .build();
//! assert_eq!(custom_options.get_waypoints().len(), 3);
//! ```
//!
//! With the `serde` feature, options can also be read from JSON. Keys are `waypointSet`,
//! `populationSize`, `frontStrategy`, `parallelThreshold` and `seed`; missing keys fall back
//! to the defaults.

use crate::{
    error::{ParetoError, Result},
    pareto::{FrontStrategy, DEFAULT_PARALLEL_THRESHOLD},
    waypoint::WaypointSet,
};

/// Number of solutions generated per cycle unless configured otherwise.
pub const DEFAULT_POPULATION_SIZE: usize = 100;

/// The waypoints used when none are configured.
pub fn default_waypoints() -> WaypointSet {
    WaypointSet::from_coords(&[(10, 20), (30, 50), (50, 30), (70, 10), (90, 70)])
}

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "camelCase", default))]
#[derive(Debug, Clone, PartialEq)]
pub struct CycleOptions {
    #[cfg_attr(feature = "serde", serde(rename = "waypointSet"))]
    waypoints: WaypointSet,
    population_size: usize,
    front_strategy: FrontStrategy,
    /// Minimum population size for the parallel dominance scan
    parallel_threshold: usize,
    seed: Option<u64>,
}

impl CycleOptions {
    pub fn new(waypoints: WaypointSet, population_size: usize) -> Self {
        Self {
            waypoints,
            population_size,
            ..Self::default()
        }
    }

    pub fn get_waypoints(&self) -> &WaypointSet {
        &self.waypoints
    }

    pub fn get_population_size(&self) -> usize {
        self.population_size
    }

    pub fn get_front_strategy(&self) -> FrontStrategy {
        self.front_strategy
    }

    /// Returns the minimum population size for the parallel dominance scan.
    pub fn get_parallel_threshold(&self) -> usize {
        self.parallel_threshold
    }

    pub fn get_seed(&self) -> Option<u64> {
        self.seed
    }

    /// Sets the waypoint set.
    pub fn set_waypoints(&mut self, waypoints: WaypointSet) {
        self.waypoints = waypoints;
    }

    /// Sets the population size.
    pub fn set_population_size(&mut self, population_size: usize) {
        self.population_size = population_size;
    }

    /// Sets the front extraction strategy.
    pub fn set_front_strategy(&mut self, front_strategy: FrontStrategy) {
        self.front_strategy = front_strategy;
    }

    /// Sets the parallel threshold.
    pub fn set_parallel_threshold(&mut self, threshold: usize) {
        self.parallel_threshold = threshold;
    }

    /// Sets or clears the seed.
    pub fn set_seed(&mut self, seed: Option<u64>) {
        self.seed = seed;
    }

    /// Checks the options before a cycle runs.
    ///
    /// An empty waypoint set and a zero population size are valid: they produce degenerate
    /// but well-defined populations.
    ///
    /// # Errors
    ///
    /// Returns `ParetoError::Configuration` if the parallel threshold is zero.
    pub fn validate(&self) -> Result<()> {
        if self.parallel_threshold == 0 {
            return Err(ParetoError::Configuration(
                "Parallel threshold must be at least 1".to_string(),
            ));
        }
        Ok(())
    }

    /// Returns a builder for creating a `CycleOptions` instance.
    pub fn builder() -> CycleOptionsBuilder {
        CycleOptionsBuilder::default()
    }
}

#[cfg(feature = "serde")]
impl CycleOptions {
    /// Parses options from a JSON document.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn from_json_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        use crate::error::ResultExt;

        let path = path.as_ref();
        let json = std::fs::read_to_string(path)
            .context(format!("Failed to read cycle options from {}", path.display()))?;
        Self::from_json_str(&json)
    }

    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}

impl Default for CycleOptions {
    fn default() -> Self {
        Self {
            waypoints: default_waypoints(),
            population_size: DEFAULT_POPULATION_SIZE,
            front_strategy: FrontStrategy::default(),
            parallel_threshold: DEFAULT_PARALLEL_THRESHOLD,
            seed: None,
        }
    }
}

/// Builder for `CycleOptions`.
#[derive(Debug, Clone, Default)]
pub struct CycleOptionsBuilder {
    waypoints: Option<WaypointSet>,
    population_size: Option<usize>,
    front_strategy: Option<FrontStrategy>,
    parallel_threshold: Option<usize>,
    seed: Option<u64>,
}

impl CycleOptionsBuilder {
    /// Sets the waypoint set.
    pub fn waypoints(mut self, value: WaypointSet) -> Self {
        self.waypoints = Some(value);
        self
    }

    /// Sets the population size.
    pub fn population_size(mut self, value: usize) -> Self {
        self.population_size = Some(value);
        self
    }

    /// Sets the front extraction strategy.
    pub fn front_strategy(mut self, value: FrontStrategy) -> Self {
        self.front_strategy = Some(value);
        self
    }

    /// Sets the parallel threshold.
    pub fn parallel_threshold(mut self, value: usize) -> Self {
        self.parallel_threshold = Some(value);
        self
    }

    /// Seeds the generator used by `ParetoLauncher::run`.
    pub fn seed(mut self, value: u64) -> Self {
        self.seed = Some(value);
        self
    }

    /// Builds the `CycleOptions` instance.
    pub fn build(self) -> CycleOptions {
        let default = CycleOptions::default();
        CycleOptions {
            waypoints: self.waypoints.unwrap_or(default.waypoints),
            population_size: self.population_size.unwrap_or(default.population_size),
            front_strategy: self.front_strategy.unwrap_or(default.front_strategy),
            parallel_threshold: self.parallel_threshold.unwrap_or(default.parallel_threshold),
            seed: self.seed,
        }
    }
}
