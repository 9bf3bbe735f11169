pub mod params;
pub mod states;
pub mod forces;
pub mod collision;
pub mod energy;
pub mod integrator;
pub mod series;
pub mod engine;
pub mod scenario;
