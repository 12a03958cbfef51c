pub mod launcher;
pub mod options;

pub use launcher::ParetoLauncher;
pub use options::{default_waypoints, CycleOptions, CycleOptionsBuilder, DEFAULT_POPULATION_SIZE};
