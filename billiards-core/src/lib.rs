pub mod collision;
pub mod color;
pub mod config;
pub mod driver;
pub mod engine;
pub mod error;
pub mod input;
pub mod integrator;
pub mod runtime;

pub use color::Color;
pub use config::{load_table, parse_table, BodyConfig, TableConfig};
pub use driver::{run_frames, FrameDriver};
pub use engine::{Body, PhysicsParams, Surface};
pub use error::ConfigError;
pub use runtime::{
    run_table, run_table_source, BodyState, Simulation, SimulationResult, StepReport,
};
