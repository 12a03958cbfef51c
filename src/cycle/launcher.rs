use tracing::{debug, info, trace};

use super::options::CycleOptions;
use crate::{
    error::{ParetoError, Result},
    generator::{RouteGenerator, ShuffleGenerator},
    objective::{Objective, RouteEvaluator, TravelCost, TravelTime},
    pareto::ParetoEngine,
    population::Population,
    rng::RandomNumberGenerator,
    solution::Solution,
};

/// Runs generate-evaluate-filter cycles with a route generator and a pair of objectives.
#[derive(Debug, Clone)]
pub struct ParetoLauncher<G = ShuffleGenerator, T = TravelTime, C = TravelCost>
where
    G: RouteGenerator,
    T: Objective,
    C: Objective,
{
    generator: G,
    evaluator: RouteEvaluator<T, C>,
}

impl<G, T, C> ParetoLauncher<G, T, C>
where
    G: RouteGenerator,
    T: Objective,
    C: Objective,
{
    /// Creates a new `ParetoLauncher` instance.
    ///
    /// # Arguments
    ///
    /// * `generator` - Produces the candidate routes.
    /// * `evaluator` - Computes the time and cost of each route.
    pub fn new(generator: G, evaluator: RouteEvaluator<T, C>) -> Self {
        Self {
            generator,
            evaluator,
        }
    }

    /// Runs one full cycle and returns a freshly built population.
    ///
    /// Exactly `options.get_population_size()` routes are generated and evaluated, then the
    /// front is extracted once over the whole population. The population keeps generation
    /// order; front membership is a flag on each solution. Nothing from a previous cycle is
    /// carried over.
    ///
    /// # Arguments
    ///
    /// * `options` - Cycle options: waypoints, population size, front strategy.
    /// * `rng` - The random source for route generation.
    ///
    /// # Errors
    ///
    /// This method will return an error if:
    /// - The options fail validation
    /// - The generator returns a route that is not a permutation of the waypoint set
    /// - An objective returns NaN or infinity for some route
    ///
    /// The stock objectives always return finite values.
    pub fn run_cycle(
        &self,
        options: &CycleOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Population> {
        options.validate()?;

        let waypoints = options.get_waypoints();
        let population_size = options.get_population_size();
        info!(
            waypoints = waypoints.len(),
            population_size,
            strategy = ?options.get_front_strategy(),
            "Starting route cycle"
        );

        let mut solutions = Vec::with_capacity(population_size);
        for index in 0..population_size {
            let route = self.generator.generate(waypoints, rng);
            if !route.is_permutation_of(waypoints) {
                return Err(ParetoError::InvalidRoute(format!(
                    "Route {} visits {:?}, not a permutation of {} waypoints",
                    index,
                    route.order(),
                    waypoints.len()
                )));
            }
            let (total_time, total_cost) = self.evaluator.evaluate(&route, waypoints);

            if !total_time.is_finite() {
                return Err(non_finite(
                    self.evaluator.time_objective().name(),
                    total_time,
                    index,
                ));
            }
            if !total_cost.is_finite() {
                return Err(non_finite(
                    self.evaluator.cost_objective().name(),
                    total_cost,
                    index,
                ));
            }

            trace!(index, total_time, total_cost, "Evaluated route");
            solutions.push(Solution::new(route, total_time, total_cost));
        }

        let engine = ParetoEngine::new(options.get_front_strategy())
            .with_parallel_threshold(options.get_parallel_threshold());
        let population = Population::from_flagged(engine.flag(solutions));

        info!(
            population_size = population.len(),
            front_size = population.front_len(),
            "Route cycle complete"
        );
        Ok(population)
    }

    /// Runs one cycle with a generator seeded from `options`, or from entropy if unseeded.
    pub fn run(&self, options: &CycleOptions) -> Result<Population> {
        let mut rng = match options.get_seed() {
            Some(seed) => {
                debug!(seed, "Seeding route generator");
                RandomNumberGenerator::from_seed(seed)
            }
            None => RandomNumberGenerator::new(),
        };
        self.run_cycle(options, &mut rng)
    }

    pub fn generator(&self) -> &G {
        &self.generator
    }

    pub fn evaluator(&self) -> &RouteEvaluator<T, C> {
        &self.evaluator
    }
}

impl ParetoLauncher {
    /// Shuffled routes scored by travel time and travel cost.
    pub fn travel() -> Self {
        Self::new(ShuffleGenerator, RouteEvaluator::travel())
    }
}

impl Default for ParetoLauncher {
    fn default() -> Self {
        Self::travel()
    }
}

fn non_finite(objective: &str, value: f64, index: usize) -> ParetoError {
    ParetoError::InvalidNumericValue(format!(
        "Objective '{}' returned {} for route {}",
        objective, value, index
    ))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        cycle::options::default_waypoints,
        pareto::FrontStrategy,
        waypoint::{Route, WaypointSet},
    };

    #[test]
    fn test_run_cycle_default_options() {
        let launcher = ParetoLauncher::travel();
        let mut rng = RandomNumberGenerator::from_seed(1);

        let population = launcher
            .run_cycle(&CycleOptions::default(), &mut rng)
            .unwrap();

        assert_eq!(population.len(), 100);
        assert!(population.front_len() >= 1);
        let waypoints = default_waypoints();
        for solution in &population {
            assert!(solution.route().is_permutation_of(&waypoints));
        }
    }

    #[test]
    fn test_zero_population() {
        let launcher = ParetoLauncher::travel();
        let options = CycleOptions::builder().population_size(0).build();

        let population = launcher.run(&options).unwrap();
        assert!(population.is_empty());
    }

    #[test]
    fn test_empty_waypoints_degenerate() {
        let launcher = ParetoLauncher::travel();
        let options = CycleOptions::new(WaypointSet::default(), 8);

        let population = launcher.run(&options).unwrap();

        assert_eq!(population.len(), 8);
        assert_eq!(population.front_len(), 8);
        assert!(population.iter().all(|s| s.objectives() == (0.0, 0.0)));
    }

    #[test]
    fn test_invalid_options() {
        let launcher = ParetoLauncher::travel();
        let options = CycleOptions::builder().parallel_threshold(0).build();

        assert!(matches!(
            launcher.run(&options),
            Err(ParetoError::Configuration(_))
        ));
    }

    #[test]
    fn test_non_finite_objective_is_rejected() {
        #[derive(Debug, Clone)]
        struct Broken;

        impl Objective for Broken {
            fn evaluate(&self, _route: &Route, _waypoints: &WaypointSet) -> f64 {
                f64::NAN
            }

            fn name(&self) -> &'static str {
                "broken"
            }
        }

        let launcher =
            ParetoLauncher::new(ShuffleGenerator, RouteEvaluator::new(TravelTime, Broken));
        let result = launcher.run(&CycleOptions::default());

        match result {
            Err(ParetoError::InvalidNumericValue(msg)) => assert!(msg.contains("broken")),
            _ => panic!("Expected InvalidNumericValue error"),
        }
    }

    #[test]
    fn test_invalid_generated_route_is_rejected() {
        // Points past the end of the set
        #[derive(Debug, Clone)]
        struct OutOfRange;

        impl RouteGenerator for OutOfRange {
            fn generate(
                &self,
                waypoints: &WaypointSet,
                _rng: &mut RandomNumberGenerator,
            ) -> Route {
                Route::new(vec![waypoints.len(), 0])
            }
        }

        let launcher = ParetoLauncher::new(OutOfRange, RouteEvaluator::travel());
        let options = CycleOptions::new(WaypointSet::from_coords(&[(0, 0), (3, 4)]), 5);

        match launcher.run(&options) {
            Err(ParetoError::InvalidRoute(msg)) => assert!(msg.contains("Route 0")),
            _ => panic!("Expected InvalidRoute error"),
        }
    }

    #[test]
    fn test_repeated_stop_is_rejected() {
        #[derive(Debug, Clone)]
        struct Repeats;

        impl RouteGenerator for Repeats {
            fn generate(
                &self,
                waypoints: &WaypointSet,
                _rng: &mut RandomNumberGenerator,
            ) -> Route {
                Route::new(vec![0; waypoints.len()])
            }
        }

        let launcher = ParetoLauncher::new(Repeats, RouteEvaluator::travel());

        assert!(matches!(
            launcher.run(&CycleOptions::default()),
            Err(ParetoError::InvalidRoute(_))
        ));
    }

    #[test]
    fn test_seeded_runs_are_reproducible() {
        let launcher = ParetoLauncher::travel();
        let options = CycleOptions::builder()
            .seed(1234)
            .front_strategy(FrontStrategy::SortAndSweep)
            .build();

        let first = launcher.run(&options).unwrap();
        let second = launcher.run(&options).unwrap();

        assert_eq!(first, second);
    }
}
