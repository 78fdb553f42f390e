//! Simulation manager
//!
//! Paces an attached simulation: elapsed time accumulates until the active
//! tick interval is reached, then exactly one tick runs. When a run
//! terminates the manager pauses and hands back the final status.

use super::engine::{Status, StepReport};
use super::traits::Simulation;
use crate::config::SpeedLevel;
use crate::grid::Board;
use log::debug;
use std::time::Duration;

/// What a manager update produced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ManagerEvent {
    /// One generation was computed.
    Stepped(StepReport),
    /// The run reached a terminal state; the manager is now paused.
    Finished(Status),
}

/// Drives one simulation at a chosen speed level
pub struct SimulationManager {
    simulation: Option<Box<dyn Simulation>>,
    is_paused: bool,
    speed: SpeedLevel,
    accumulated_time: Duration,
}

impl SimulationManager {
    /// Create a new simulation manager
    ///
    /// # Arguments
    /// * `speed` - Speed level whose frame delay paces generations
    pub fn new(speed: SpeedLevel) -> Self {
        Self {
            simulation: None,
            is_paused: false,
            speed,
            accumulated_time: Duration::ZERO,
        }
    }

    /// Attach a simulation, replacing any previous one
    ///
    /// The manager starts unpaused with an empty time accumulator.
    ///
    /// # Arguments
    /// * `simulation` - Boxed simulation implementing the Simulation trait
    pub fn attach_simulation(&mut self, simulation: Box<dyn Simulation>) {
        self.simulation = Some(simulation);
        self.is_paused = false;
        self.accumulated_time = Duration::ZERO;
    }

    /// Remove the current simulation, returning it
    pub fn detach_simulation(&mut self) -> Option<Box<dyn Simulation>> {
        self.simulation.take()
    }

    /// Update simulation (called every frame)
    ///
    /// Runs at most one tick. Returns `None` when paused, when no
    /// simulation is attached, or when the tick interval has not elapsed.
    ///
    /// # Arguments
    /// * `delta_time` - Wall-clock time elapsed since the last update
    pub fn update(&mut self, delta_time: Duration) -> Option<ManagerEvent> {
        if self.is_paused {
            return None;
        }
        let simulation = self.simulation.as_mut()?;

        let interval = simulation.tick_interval(self.speed);
        self.accumulated_time += delta_time;
        if self.accumulated_time < interval {
            return None;
        }
        // Carry at most one interval so a stall does not cause a burst.
        self.accumulated_time = (self.accumulated_time - interval).min(interval);

        let report = simulation.tick();
        let status = simulation.status();
        if status.run_state.is_terminal() {
            debug!(
                "{} finished, pausing: {:?} after {} generations",
                simulation.name(),
                status.run_state,
                status.generation
            );
            self.is_paused = true;
            simulation.set_running(false);
            return Some(ManagerEvent::Finished(status));
        }
        Some(ManagerEvent::Stepped(report))
    }

    /// Reseed the current simulation and resume
    pub fn reset(&mut self) {
        if let Some(simulation) = &mut self.simulation {
            simulation.reset();
            simulation.set_running(true);
        }
        self.is_paused = false;
        self.accumulated_time = Duration::ZERO;
    }

    /// Get current simulation name
    pub fn current_simulation_name(&self) -> Option<&str> {
        self.simulation.as_ref().map(|s| s.name())
    }

    /// Status of the attached simulation
    pub fn status(&self) -> Option<Status> {
        self.simulation.as_ref().map(|s| s.status())
    }

    /// Board of the attached simulation
    pub fn board(&self) -> Option<&Board> {
        self.simulation.as_ref().map(|s| s.board())
    }

    /// Check if simulation is running
    pub fn is_running(&self) -> bool {
        !self.is_paused && self.simulation.is_some()
    }

    /// Check if updates are currently suppressed
    pub fn is_paused(&self) -> bool {
        self.is_paused
    }

    /// Set pause state
    ///
    /// # Arguments
    /// * `paused` - `true` to stop ticking, `false` to resume
    pub fn set_paused(&mut self, paused: bool) {
        self.is_paused = paused;
        if let Some(simulation) = &mut self.simulation {
            simulation.set_running(!paused);
        }
    }

    /// Current speed level
    pub fn speed(&self) -> SpeedLevel {
        self.speed
    }

    /// Change the speed level
    ///
    /// # Arguments
    /// * `speed` - New level; takes effect on the next update
    pub fn set_speed(&mut self, speed: SpeedLevel) {
        self.speed = speed;
    }

    /// Step one speed level up, saturating at the fastest
    pub fn faster(&mut self) {
        self.speed = self.speed.faster();
    }

    /// Step one speed level down, saturating at the slowest
    pub fn slower(&mut self) {
        self.speed = self.speed.slower();
    }

    /// Check if a simulation is currently attached
    pub fn has_simulation(&self) -> bool {
        self.simulation.is_some()
    }
}

impl Default for SimulationManager {
    fn default() -> Self {
        Self::new(SpeedLevel::default())
    }
}
