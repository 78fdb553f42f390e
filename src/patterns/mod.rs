//! Pattern generators
//!
//! Everything that produces a starting board: named presets, density-tuned
//! random fill and symmetric random fill.

pub mod presets;
pub mod random;
pub mod symmetric;

pub use presets::Preset;
pub use random::random_fill;
pub use symmetric::{symmetric_fill, SizeClass, Symmetry};

use crate::grid::Board;
use crate::simulation::rules::RuleKind;
use rand::Rng;
use std::fmt;

/// How to build a starting board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Generator {
    /// All cells dead.
    Empty,
    Preset(Preset),
    /// Per-column random words ANDed `draws` times.
    Random { draws: u32 },
    Symmetric { symmetry: Symmetry, size: SizeClass },
}

impl Generator {
    /// Random fill at the density tuned for `rule`.
    pub fn random_for(rule: RuleKind) -> Self {
        Generator::Random {
            draws: rule.default_fill_draws(),
        }
    }

    /// Overwrite `board` with a fresh pattern.
    ///
    /// `min_seeds` is the population floor applied to small symmetric seeds.
    pub fn generate<R: Rng + ?Sized>(&self, board: &mut Board, rng: &mut R, min_seeds: u32) {
        match *self {
            Generator::Empty => board.clear_all(),
            Generator::Preset(preset) => preset.place(board),
            Generator::Random { draws } => random_fill(board, rng, draws),
            Generator::Symmetric { symmetry, size } => {
                symmetric_fill(board, rng, symmetry, size, min_seeds)
            }
        }
    }
}

impl fmt::Display for Generator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Generator::Empty => f.write_str("empty"),
            Generator::Preset(preset) => write!(f, "preset {preset}"),
            Generator::Random { draws } => write!(f, "random ({draws} draws)"),
            Generator::Symmetric { symmetry, size } => write!(f, "{size} {symmetry} symmetric"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_every_generator_overwrites_board() {
        let generators = [
            Generator::Empty,
            Generator::Preset(Preset::Blinker),
            Generator::Random { draws: 0 },
            Generator::Symmetric {
                symmetry: Symmetry::Rotational,
                size: SizeClass::Small,
            },
        ];
        for generator in generators {
            let mut board = Board::from_cells([(0, 0)]);
            generator.generate(&mut board, &mut StdRng::seed_from_u64(5), 12);
            assert!(!board.get(0, 0), "{generator}");
        }
    }

    #[test]
    fn test_random_for_rule() {
        assert_eq!(
            Generator::random_for(RuleKind::DayAndNight),
            Generator::Random { draws: 1 }
        );
    }
}
