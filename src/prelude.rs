//! # Pocketlife Prelude
//!
//! Commonly used types in one import.
//!
//! ```no_run
//! use pocketlife::prelude::*;
//!
//! let mut engine = Engine::new(EngineConfig::new().with_rng_seed(1));
//! engine.seed(RuleKind::Conway, Generator::Preset(Preset::RPentomino));
//! while !engine.status().run_state.is_terminal() {
//!     engine.step();
//! }
//! println!("{:?}", engine.termination());
//! ```

pub use crate::config::{EngineConfig, SpeedLevel};
pub use crate::error::EngineError;
pub use crate::grid::{Board, CellPlane, HEIGHT, WIDTH};
pub use crate::patterns::{Generator, Preset, SizeClass, Symmetry};
pub use crate::simulation::rules::{Ant, CellState, Heading, LifeRule, RuleKind};
pub use crate::simulation::{
    Engine, ManagerEvent, RunState, RunSummary, Simulation, SimulationManager, Statistics, Status,
    StepReport,
};
