//! Life-like rules over the Moore neighbourhood
//!
//! Conway's Life runs on the block-population shortcut: with `total` the
//! live count of the 3x3 block including the centre, a cell is alive next
//! generation iff `total == 3`, or `total == 4` and it is alive now.
//! Day & Night and Seeds use the explicit neighbour count with their
//! birth/survival tables.
//!
//! Every step writes a fresh board and swaps it in.

use crate::grid::{Board, HEIGHT, WIDTH};

/// Birth and survival conditions as neighbour-count bitmasks.
///
/// Bit `n` of `birth` set means a dead cell with `n` live neighbours is
/// born; bit `n` of `survive` set means a live cell with `n` neighbours
/// survives.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct LifeRule {
    pub birth: u16,
    pub survive: u16,
}

const fn mask(counts: &[u8]) -> u16 {
    let mut mask = 0u16;
    let mut i = 0;
    while i < counts.len() {
        mask |= 1 << counts[i];
        i += 1;
    }
    mask
}

impl LifeRule {
    /// B3/S23
    pub const CONWAY: Self = Self::new(&[3], &[2, 3]);
    /// B3678/S34678
    pub const DAY_AND_NIGHT: Self = Self::new(&[3, 6, 7, 8], &[3, 4, 6, 7, 8]);
    /// B2/S
    pub const SEEDS: Self = Self::new(&[2], &[]);

    pub const fn new(birth: &[u8], survive: &[u8]) -> Self {
        Self {
            birth: mask(birth),
            survive: mask(survive),
        }
    }

    /// Next state of a cell given its state and live neighbour count.
    pub fn next_state(&self, alive: bool, neighbors: u8) -> bool {
        let table = if alive { self.survive } else { self.birth };
        table >> neighbors & 1 == 1
    }
}

/// Advance one Conway generation. Returns the new population.
pub fn step_conway(board: &mut Board) -> u32 {
    let mut next = Board::new();
    for x in 0..WIDTH {
        let totals = board.column_block_populations(x);
        let center = board.column(x as i32);
        let mut word = 0u32;
        for (y, &total) in totals.iter().enumerate() {
            let alive = center >> y & 1 == 1;
            if total == 3 || (total == 4 && alive) {
                word |= 1 << y;
            }
        }
        next.fill_column(x as i32, word);
    }
    *board = next;
    board.count_live()
}

/// Advance one generation of `rule` using explicit neighbour counts.
/// Returns the new population.
pub fn step_moore(board: &mut Board, rule: &LifeRule) -> u32 {
    let mut next = Board::new();
    for x in 0..WIDTH as i32 {
        for y in 0..HEIGHT as i32 {
            let neighbors = board.moore_count(x, y);
            if rule.next_state(board.get(x, y), neighbors) {
                next.set(x, y);
            }
        }
    }
    *board = next;
    board.count_live()
}
