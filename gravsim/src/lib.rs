pub mod simulation;
pub mod configuration;
pub mod visualization;
pub mod benchmark;
pub mod error;

pub use simulation::states::{Body, BodyId, System, NVec2, Rgb};
pub use simulation::params::Parameters;
pub use simulation::engine::Engine;
pub use simulation::forces::{PairForce, GravityField, NewtonianGravity};
pub use simulation::integrator::{apply_force, update_position};
pub use simulation::simulator::{Simulator, BodyView};
pub use simulation::scenario::{Scenario, generate_bodies};

pub use configuration::config::{EngineConfig, ParametersConfig, GeneratorConfig, BodyConfig, ScenarioConfig};
pub use error::ConfigError;

pub use visualization::vis2d::run_2d;

pub use benchmark::benchmark::bench_tick;
