//! Simulation system
//!
//! Rule engines, the engine that owns a run's state, run statistics,
//! termination detection and the tick scheduler.

pub mod detector;
pub mod engine;
pub mod manager;
pub mod rules;
pub mod stats;
pub mod traits;

pub use detector::RunState;
pub use engine::{Engine, RunSummary, Status, StepReport};
pub use manager::{ManagerEvent, SimulationManager};
pub use rules::RuleKind;
pub use stats::Statistics;
pub use traits::Simulation;
