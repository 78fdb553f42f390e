//! Bit-packed toroidal grid
//!
//! The board is 64 columns by 32 rows, stored as one `u32` per column where
//! bit `y` of word `x` is the state of cell `(x, y)`. Every coordinate is
//! wrapped on both axes, so callers may pass any `i32`.
//!
//! Because a column holds exactly [`HEIGHT`] bits, vertical wraparound in
//! [`Board::block_population`] is a bit rotation. Changing the height means
//! dropping that path in favour of [`Board::block_population_modular`].

use std::fmt;

/// Number of columns.
pub const WIDTH: usize = 64;
/// Number of rows. Must equal the column word width.
pub const HEIGHT: usize = 32;

const _: () = assert!(HEIGHT == u32::BITS as usize);

/// Population of each 3-bit window value.
const POP3: [u8; 8] = [0, 1, 1, 2, 1, 2, 2, 3];

/// Moore neighbourhood offsets.
pub const NEIGHBOR_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// A plane of boolean cells an agent can walk on.
///
/// [`Board`] wraps toroidally; other implementations may be unbounded.
pub trait CellPlane {
    /// Map a coordinate onto the plane.
    fn wrap(&self, x: i32, y: i32) -> (i32, i32);

    fn is_alive(&self, x: i32, y: i32) -> bool;

    fn set_alive(&mut self, x: i32, y: i32, alive: bool);
}

/// Fixed-size toroidal bit field.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Board {
    columns: [u32; WIDTH],
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[inline]
fn wrap_x(x: i32) -> usize {
    x.rem_euclid(WIDTH as i32) as usize
}

#[inline]
fn wrap_y(y: i32) -> usize {
    y.rem_euclid(HEIGHT as i32) as usize
}

/// Rows `y - 1`, `y`, `y + 1` of a column as a 3-bit value.
#[inline]
fn window(word: u32, y: usize) -> usize {
    let shift = (y + HEIGHT - 1) % HEIGHT;
    (word.rotate_right(shift as u32) & 0b111) as usize
}

impl Board {
    /// Create an all-dead board.
    pub const fn new() -> Self {
        Self {
            columns: [0; WIDTH],
        }
    }

    /// Create a board with the given cells alive.
    pub fn from_cells<I: IntoIterator<Item = (i32, i32)>>(cells: I) -> Self {
        let mut board = Self::new();
        for (x, y) in cells {
            board.set(x, y);
        }
        board
    }

    pub fn get(&self, x: i32, y: i32) -> bool {
        self.columns[wrap_x(x)] >> wrap_y(y) & 1 == 1
    }

    pub fn set(&mut self, x: i32, y: i32) {
        self.columns[wrap_x(x)] |= 1 << wrap_y(y);
    }

    pub fn clear(&mut self, x: i32, y: i32) {
        self.columns[wrap_x(x)] &= !(1 << wrap_y(y));
    }

    pub fn toggle(&mut self, x: i32, y: i32) {
        self.columns[wrap_x(x)] ^= 1 << wrap_y(y);
    }

    /// Set or clear a cell.
    pub fn put(&mut self, x: i32, y: i32, alive: bool) {
        if alive {
            self.set(x, y);
        } else {
            self.clear(x, y);
        }
    }

    pub fn clear_all(&mut self) {
        self.columns = [0; WIDTH];
    }

    pub fn count_live(&self) -> u32 {
        self.columns.iter().map(|c| c.count_ones()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.iter().all(|&c| c == 0)
    }

    /// Column word `x` (wrapped).
    pub fn column(&self, x: i32) -> u32 {
        self.columns[wrap_x(x)]
    }

    pub fn columns(&self) -> &[u32; WIDTH] {
        &self.columns
    }

    /// Overwrite column `x` (wrapped) with `word`.
    pub fn fill_column(&mut self, x: i32, word: u32) {
        self.columns[wrap_x(x)] = word;
    }

    /// Every cell in column-major order as `(x, y, alive)`.
    pub fn cells(&self) -> impl Iterator<Item = (usize, usize, bool)> + '_ {
        self.columns.iter().enumerate().flat_map(|(x, &word)| {
            (0..HEIGHT).map(move |y| (x, y, word >> y & 1 == 1))
        })
    }

    /// Number of live cells among the 8 Moore neighbours of `(x, y)`.
    pub fn moore_count(&self, x: i32, y: i32) -> u8 {
        let (x, y) = (wrap_x(x) as i32, wrap_y(y) as i32);
        NEIGHBOR_OFFSETS
            .iter()
            .filter(|(dx, dy)| self.get(x + dx, y + dy))
            .count() as u8
    }

    /// Live cells in the 3x3 block centred on `(x, y)`, centre included.
    ///
    /// Each of the three columns contributes a rotated 3-bit window looked
    /// up in a population table.
    pub fn block_population(&self, x: i32, y: i32) -> u8 {
        let (x, y) = (wrap_x(x) as i32, wrap_y(y));
        let left = self.column(x - 1);
        let center = self.column(x);
        let right = self.column(x + 1);
        POP3[window(left, y)] + POP3[window(center, y)] + POP3[window(right, y)]
    }

    /// Same result as [`Board::block_population`] using explicit modulo
    /// indexing. Works for any grid height.
    pub fn block_population_modular(&self, x: i32, y: i32) -> u8 {
        let (x, y) = (wrap_x(x) as i32, wrap_y(y) as i32);
        let mut total = 0;
        for dy in -1..=1 {
            for dx in -1..=1 {
                if self.get(x + dx, y + dy) {
                    total += 1;
                }
            }
        }
        total
    }

    /// Populations for all `HEIGHT` rows of column `x`, reusing the three
    /// column words across the whole column.
    pub(crate) fn column_block_populations(&self, x: usize) -> [u8; HEIGHT] {
        let x = x as i32;
        let left = self.column(x - 1);
        let center = self.column(x);
        let right = self.column(x + 1);
        let mut totals = [0u8; HEIGHT];
        for (y, total) in totals.iter_mut().enumerate() {
            *total = POP3[window(left, y)] + POP3[window(center, y)] + POP3[window(right, y)];
        }
        totals
    }
}

impl CellPlane for Board {
    fn wrap(&self, x: i32, y: i32) -> (i32, i32) {
        (wrap_x(x) as i32, wrap_y(y) as i32)
    }

    fn is_alive(&self, x: i32, y: i32) -> bool {
        self.get(x, y)
    }

    fn set_alive(&mut self, x: i32, y: i32, alive: bool) {
        self.put(x, y, alive);
    }
}

/// Rows top to bottom, `#` alive and `.` dead.
impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for y in 0..HEIGHT as i32 {
            for x in 0..WIDTH as i32 {
                f.write_str(if self.get(x, y) { "#" } else { "." })?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Board")
            .field("live", &self.count_live())
            .finish()
    }
}
