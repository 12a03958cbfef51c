use paretoroute::{
    cycle::{default_waypoints, CycleOptions, ParetoLauncher},
    generator::RouteGenerator,
    objective::RouteEvaluator,
    pareto::FrontStrategy,
    rng::RandomNumberGenerator,
    waypoint::{Route, WaypointSet},
};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing::Level::DEBUG)
        .try_init();
}

#[test]
fn test_default_cycle() {
    init_tracing();
    let mut rng = RandomNumberGenerator::from_seed(100);
    let launcher = ParetoLauncher::travel();

    let population = launcher
        .run_cycle(&CycleOptions::default(), &mut rng)
        .unwrap();

    assert_eq!(population.len(), 100);
    let waypoints = default_waypoints();
    for solution in &population {
        assert!(solution.route().is_permutation_of(&waypoints));
        // Time and cost share one formula
        assert_eq!(solution.total_time(), solution.total_cost());
    }

    // With perfectly correlated objectives, the front is exactly the routes of minimal length
    let best = population.best_time().unwrap();
    for solution in &population {
        assert_eq!(solution.is_pareto_optimal(), solution.total_time() == best);
    }
}

#[test]
fn test_cycles_do_not_accumulate() {
    let launcher = ParetoLauncher::travel();
    let options = CycleOptions::builder().population_size(30).build();
    let mut rng = RandomNumberGenerator::from_seed(4);

    let first = launcher.run_cycle(&options, &mut rng).unwrap();
    let second = launcher.run_cycle(&options, &mut rng).unwrap();

    assert_eq!(first.len(), 30);
    assert_eq!(second.len(), 30);
}

#[test]
fn test_single_waypoint_population() {
    init_tracing();
    let launcher = ParetoLauncher::travel();
    let options = CycleOptions::new(WaypointSet::from_coords(&[(42, 17)]), 20);

    let population = launcher.run(&options).unwrap();

    assert_eq!(population.len(), 20);
    assert_eq!(population.front_len(), 20);
    assert!(population.iter().all(|s| s.objectives() == (0.0, 0.0)));
}

#[test]
fn test_empty_waypoint_set_population() {
    let launcher = ParetoLauncher::travel();
    let options = CycleOptions::new(WaypointSet::default(), 5);

    let population = launcher.run(&options).unwrap();

    assert_eq!(population.len(), 5);
    assert!(population.iter().all(|s| s.route().is_empty()));
    assert!(population.iter().all(|s| s.is_pareto_optimal()));
}

#[test]
fn test_zero_population_size() {
    let launcher = ParetoLauncher::travel();
    let options = CycleOptions::builder().population_size(0).seed(1).build();

    assert!(launcher.run(&options).unwrap().is_empty());
}

#[test]
fn test_strategies_flag_the_same_solutions() {
    let launcher = ParetoLauncher::travel();
    let waypoints = WaypointSet::from_coords(&[
        (3, 91),
        (14, 7),
        (28, 55),
        (40, 40),
        (61, 12),
        (77, 80),
        (95, 33),
    ]);

    let brute = CycleOptions::builder()
        .waypoints(waypoints.clone())
        .population_size(300)
        .seed(9)
        .build();
    let mut sweep = brute.clone();
    sweep.set_front_strategy(FrontStrategy::SortAndSweep);
    let mut parallel = brute.clone();
    parallel.set_parallel_threshold(1);

    let expected = launcher.run(&brute).unwrap();
    assert_eq!(launcher.run(&sweep).unwrap(), expected);
    assert_eq!(launcher.run(&parallel).unwrap(), expected);
}

#[test]
fn test_custom_generator() {
    // Always visits the waypoints in set order
    #[derive(Debug, Clone)]
    struct InOrder;

    impl RouteGenerator for InOrder {
        fn generate(&self, waypoints: &WaypointSet, _rng: &mut RandomNumberGenerator) -> Route {
            Route::new((0..waypoints.len()).collect())
        }
    }

    let launcher = ParetoLauncher::new(InOrder, RouteEvaluator::travel());
    let population = launcher.run(&CycleOptions::default()).unwrap();

    // Identical routes tie everywhere, so all of them are on the front
    assert_eq!(population.front_len(), population.len());
    let (time, _) = population.points()[0];
    assert!(time > 0.0);
}
