//! Automaton rule engines
//!
//! [`RuleKind`] selects which update function advances the board.

pub mod brians_brain;
pub mod langtons_ant;
pub mod life_like;

pub use brians_brain::CellState;
pub use langtons_ant::{Ant, Heading};
pub use life_like::LifeRule;

use crate::error::EngineError;
use std::fmt;
use std::str::FromStr;

/// The five supported automata.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RuleKind {
    Conway,
    BriansBrain,
    DayAndNight,
    Seeds,
    LangtonsAnt,
}

impl RuleKind {
    pub const ALL: [RuleKind; 5] = [
        RuleKind::Conway,
        RuleKind::BriansBrain,
        RuleKind::DayAndNight,
        RuleKind::Seeds,
        RuleKind::LangtonsAnt,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleKind::Conway => "Conway's Life",
            RuleKind::BriansBrain => "Brian's Brain",
            RuleKind::DayAndNight => "Day & Night",
            RuleKind::Seeds => "Seeds",
            RuleKind::LangtonsAnt => "Langton's Ant",
        }
    }

    /// Random draws ANDed per column when randomly seeding this automaton.
    /// Zero means the automaton starts from an empty board.
    pub fn default_fill_draws(&self) -> u32 {
        match self {
            RuleKind::Conway | RuleKind::BriansBrain => 2,
            RuleKind::DayAndNight => 1,
            RuleKind::Seeds => 3,
            RuleKind::LangtonsAnt => 0,
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleKind {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "conway" | "life" => Ok(RuleKind::Conway),
            "brians-brain" | "brain" => Ok(RuleKind::BriansBrain),
            "day-and-night" | "daynight" => Ok(RuleKind::DayAndNight),
            "seeds" => Ok(RuleKind::Seeds),
            "langtons-ant" | "ant" => Ok(RuleKind::LangtonsAnt),
            _ => Err(EngineError::UnknownRule(s.to_string())),
        }
    }
}
