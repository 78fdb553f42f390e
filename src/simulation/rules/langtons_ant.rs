//! Langton's Ant
//!
//! A single agent walking over a [`CellPlane`]: on a live cell it turns
//! right and clears it, on a dead cell it turns left and sets it, then it
//! moves one cell forward.

use crate::grid::{CellPlane, HEIGHT, WIDTH};
use log::trace;

/// Compass heading. North is towards row 0.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Heading {
    North,
    East,
    South,
    West,
}

impl Heading {
    /// Quarter turn clockwise.
    pub fn turn_right(self) -> Self {
        match self {
            Heading::North => Heading::East,
            Heading::East => Heading::South,
            Heading::South => Heading::West,
            Heading::West => Heading::North,
        }
    }

    /// Quarter turn counter-clockwise.
    pub fn turn_left(self) -> Self {
        match self {
            Heading::North => Heading::West,
            Heading::East => Heading::North,
            Heading::South => Heading::East,
            Heading::West => Heading::South,
        }
    }

    pub fn offset(self) -> (i32, i32) {
        match self {
            Heading::North => (0, -1),
            Heading::East => (1, 0),
            Heading::South => (0, 1),
            Heading::West => (-1, 0),
        }
    }
}

/// The ant: a position and a heading.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Ant {
    x: i32,
    y: i32,
    heading: Heading,
}

impl Ant {
    pub fn new(x: i32, y: i32, heading: Heading) -> Self {
        Self { x, y, heading }
    }

    /// Ant at the board centre facing north.
    pub fn centered() -> Self {
        Self::new(WIDTH as i32 / 2, HEIGHT as i32 / 2, Heading::North)
    }

    pub fn position(&self) -> (i32, i32) {
        (self.x, self.y)
    }

    pub fn heading(&self) -> Heading {
        self.heading
    }

    /// Take one step. Returns the new state of the cell that was flipped.
    pub fn step<P: CellPlane>(&mut self, plane: &mut P) -> bool {
        let on = plane.is_alive(self.x, self.y);
        self.heading = if on {
            self.heading.turn_right()
        } else {
            self.heading.turn_left()
        };
        plane.set_alive(self.x, self.y, !on);

        let (dx, dy) = self.heading.offset();
        let (x, y) = plane.wrap(self.x.wrapping_add(dx), self.y.wrapping_add(dy));
        self.x = x;
        self.y = y;
        trace!("ant at ({}, {}) heading {:?}", x, y, self.heading);
        !on
    }
}
