//! Engine configuration
//!
//! Speed levels for the tick scheduler and builder-style engine settings
//! (Langton's Ant pacing, RNG seeding and the small-class seed floor).
//! The speed level itself belongs to the scheduler, see
//! [`SimulationManager`](crate::simulation::SimulationManager).

use crate::error::{EngineError, Result};
use std::time::Duration;

/// Frame delay per speed level, slowest first.
const FRAME_DELAYS_MS: [u64; 12] = [1000, 750, 500, 350, 250, 180, 120, 80, 50, 30, 15, 0];

/// One of twelve discrete simulation speeds.
///
/// Level 0 is the slowest (one generation per second), level 11 runs a
/// generation on every scheduler update.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SpeedLevel(u8);

impl SpeedLevel {
    /// Highest valid level.
    pub const MAX: u8 = 11;

    /// Create a speed level, rejecting anything above [`SpeedLevel::MAX`].
    pub fn new(level: u8) -> Result<Self> {
        if level > Self::MAX {
            return Err(EngineError::InvalidSpeedLevel(level));
        }
        Ok(Self(level))
    }

    pub fn level(self) -> u8 {
        self.0
    }

    /// Minimum wall-clock time between two generations at this level.
    pub fn frame_delay(self) -> Duration {
        Duration::from_millis(FRAME_DELAYS_MS[self.0 as usize])
    }

    /// Next faster level, saturating at the top.
    pub fn faster(self) -> Self {
        Self((self.0 + 1).min(Self::MAX))
    }

    /// Next slower level, saturating at zero.
    pub fn slower(self) -> Self {
        Self(self.0.saturating_sub(1))
    }
}

impl Default for SpeedLevel {
    fn default() -> Self {
        Self(6)
    }
}

/// Engine configuration
#[derive(Clone, Debug)]
pub struct EngineConfig {
    /// Fixed RNG seed for reproducible generators; `None` draws from entropy.
    pub rng_seed: Option<u64>,
    /// Minimum interval between two Langton's Ant steps.
    pub ant_interval: Duration,
    /// Live-cell floor for small symmetric seeds.
    pub small_min_seeds: u32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rng_seed: None,
            ant_interval: Duration::from_millis(10),
            small_min_seeds: 12,
        }
    }
}

impl EngineConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    pub fn with_ant_interval(mut self, interval: Duration) -> Self {
        self.ant_interval = interval;
        self
    }

    pub fn with_small_min_seeds(mut self, count: u32) -> Self {
        self.small_min_seeds = count;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_speed_level_bounds() {
        assert!(SpeedLevel::new(0).is_ok());
        assert!(SpeedLevel::new(11).is_ok());
        assert_eq!(
            SpeedLevel::new(12),
            Err(EngineError::InvalidSpeedLevel(12))
        );
    }

    #[test]
    fn test_speed_level_saturates() {
        let top = SpeedLevel::new(11).unwrap();
        assert_eq!(top.faster(), top);
        let bottom = SpeedLevel::new(0).unwrap();
        assert_eq!(bottom.slower(), bottom);
        assert_eq!(bottom.faster().level(), 1);
    }

    #[test]
    fn test_frame_delay_decreases_with_level() {
        let delays: Vec<Duration> = (0..=SpeedLevel::MAX)
            .map(|l| SpeedLevel::new(l).unwrap().frame_delay())
            .collect();
        assert!(delays.windows(2).all(|w| w[0] > w[1]));
        assert_eq!(delays[11], Duration::ZERO);
    }

    #[test]
    fn test_builder() {
        let config = EngineConfig::new()
            .with_rng_seed(7)
            .with_small_min_seeds(20);
        assert_eq!(config.rng_seed, Some(7));
        assert_eq!(config.small_min_seeds, 20);
        assert_eq!(config.ant_interval, Duration::from_millis(10));
    }
}
