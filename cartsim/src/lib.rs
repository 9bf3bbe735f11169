pub mod simulation;
pub mod configuration;
pub mod export;
pub mod benchmark;
pub mod error;

pub use simulation::params::{Parameters, Track};
pub use simulation::states::{SimulationState, Sample};
pub use simulation::forces::{ForceTerm, ForceSet, BodyForces, LaunchSpring, CoulombFriction};
pub use simulation::collision::{CollisionResolver, CollisionReport};
pub use simulation::energy::Energies;
pub use simulation::integrator::{physics_step, FixedStepIntegrator, RunState};
pub use simulation::series::TimeSeriesBuffer;
pub use simulation::engine::Engine;
pub use simulation::scenario::{Scenario, RunSummary};
pub use configuration::config::{EngineConfig, ParametersConfig, OutputConfig, ScenarioConfig};
pub use export::csv_export::{to_csv, write_csv, write_csv_file};
pub use benchmark::benchmark::{bench_step, bench_tick};
pub use error::CartsimError;
