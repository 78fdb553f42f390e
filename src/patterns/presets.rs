//! Named starting patterns
//!
//! Each preset is a static cell list whose bounding box is centred on the
//! board when loaded.

use crate::error::EngineError;
use crate::grid::{Board, HEIGHT, WIDTH};
use std::fmt;
use std::str::FromStr;

/// Classic Game of Life patterns
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Preset {
    Glider,
    Blinker,
    RPentomino,
    LightweightSpaceship,
    GosperGliderGun,
}

const GLIDER: &[(i32, i32)] = &[(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];

const BLINKER: &[(i32, i32)] = &[(0, 0), (1, 0), (2, 0)];

const R_PENTOMINO: &[(i32, i32)] = &[(1, 0), (2, 0), (0, 1), (1, 1), (1, 2)];

const LIGHTWEIGHT_SPACESHIP: &[(i32, i32)] = &[
    (1, 0),
    (4, 0),
    (0, 1),
    (0, 2),
    (4, 2),
    (0, 3),
    (1, 3),
    (2, 3),
    (3, 3),
];

const GOSPER_GLIDER_GUN: &[(i32, i32)] = &[
    (24, 0),
    (22, 1),
    (24, 1),
    (12, 2),
    (13, 2),
    (20, 2),
    (21, 2),
    (34, 2),
    (35, 2),
    (11, 3),
    (15, 3),
    (20, 3),
    (21, 3),
    (34, 3),
    (35, 3),
    (0, 4),
    (1, 4),
    (10, 4),
    (16, 4),
    (20, 4),
    (21, 4),
    (0, 5),
    (1, 5),
    (10, 5),
    (14, 5),
    (16, 5),
    (17, 5),
    (22, 5),
    (24, 5),
    (10, 6),
    (16, 6),
    (24, 6),
    (11, 7),
    (15, 7),
    (12, 8),
    (13, 8),
];

impl Preset {
    pub const ALL: [Preset; 5] = [
        Preset::Glider,
        Preset::Blinker,
        Preset::RPentomino,
        Preset::LightweightSpaceship,
        Preset::GosperGliderGun,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Preset::Glider => "Glider",
            Preset::Blinker => "Blinker",
            Preset::RPentomino => "R-pentomino",
            Preset::LightweightSpaceship => "Lightweight spaceship",
            Preset::GosperGliderGun => "Gosper glider gun",
        }
    }

    /// Cell offsets relative to the pattern's top-left corner.
    pub fn cells(&self) -> &'static [(i32, i32)] {
        match self {
            Preset::Glider => GLIDER,
            Preset::Blinker => BLINKER,
            Preset::RPentomino => R_PENTOMINO,
            Preset::LightweightSpaceship => LIGHTWEIGHT_SPACESHIP,
            Preset::GosperGliderGun => GOSPER_GLIDER_GUN,
        }
    }

    /// Width and height of the bounding box.
    pub fn extent(&self) -> (i32, i32) {
        let cells = self.cells();
        let w = cells.iter().map(|&(x, _)| x).max().unwrap_or(0) + 1;
        let h = cells.iter().map(|&(_, y)| y).max().unwrap_or(0) + 1;
        (w, h)
    }

    /// Clear `board` and place the pattern at its centre.
    pub fn place(&self, board: &mut Board) {
        board.clear_all();
        let (w, h) = self.extent();
        let left = (WIDTH as i32 - w) / 2;
        let top = (HEIGHT as i32 - h) / 2;
        for &(dx, dy) in self.cells() {
            board.set(left + dx, top + dy);
        }
    }
}

impl fmt::Display for Preset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Preset {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "glider" => Ok(Preset::Glider),
            "blinker" => Ok(Preset::Blinker),
            "r-pentomino" | "rpentomino" => Ok(Preset::RPentomino),
            "lwss" | "lightweight-spaceship" => Ok(Preset::LightweightSpaceship),
            "gosper" | "gosper-gun" | "gosper-glider-gun" => Ok(Preset::GosperGliderGun),
            _ => Err(EngineError::UnknownPreset(s.to_string())),
        }
    }
}
