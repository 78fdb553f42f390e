//! Core simulation trait
//!
//! The interface the scheduler drives: one tick per call, a minimum
//! interval between ticks, and a status read after each tick.

use crate::config::SpeedLevel;
use crate::grid::Board;
use crate::simulation::engine::{Status, StepReport};
use std::time::Duration;

/// A tickable automaton run.
///
/// The [`SimulationManager`](super::SimulationManager) owns the clock and
/// calls these methods; implementors only compute generations.
pub trait Simulation {
    /// Get simulation name for display
    fn name(&self) -> &str;

    /// Advance by exactly one generation
    ///
    /// Called by the scheduler once the tick interval has elapsed. Never
    /// blocks or sleeps.
    ///
    /// # Returns
    /// The population after the step and the number of generations advanced.
    fn tick(&mut self) -> StepReport;

    /// Minimum time between two ticks
    ///
    /// # Arguments
    /// * `speed` - Speed level selected on the scheduler
    fn tick_interval(&self, speed: SpeedLevel) -> Duration;

    /// Counters and run classification after the latest tick
    fn status(&self) -> Status;

    /// Current board, for rendering. Read-only.
    fn board(&self) -> &Board;

    /// Whether simulation is currently running
    fn is_running(&self) -> bool;

    /// Start/pause simulation
    fn set_running(&mut self, running: bool);

    /// Reset simulation to initial state
    ///
    /// Discards the current run and reseeds it with the same rule and
    /// generator. Statistics start over.
    fn reset(&mut self);
}
