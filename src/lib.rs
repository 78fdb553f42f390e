// src/lib.rs
//! Pocketlife
//!
//! A handheld cellular automaton engine: a bit-packed 64x32 toroidal board,
//! Conway's Life, Day & Night, Seeds, Brian's Brain and Langton's Ant, seed
//! pattern generators, and detection of runs that die out, settle or repeat.

pub mod config;
pub mod error;
pub mod grid;
pub mod patterns;
pub mod prelude;
pub mod simulation;

// Re-export main types for convenience
pub use config::{EngineConfig, SpeedLevel};
pub use error::{EngineError, Result};
pub use grid::Board;
pub use simulation::Engine;

/// Creates an engine with the default configuration
pub fn default() -> Engine {
    Engine::default()
}
