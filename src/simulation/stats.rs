//! Run statistics
//!
//! Generation counter, latest population and the running maximum since the
//! board was last seeded.

/// Per-run counters.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Statistics {
    pub generation: u64,
    pub cell_count: u32,
    pub max_cell_count: u32,
}

impl Statistics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record one completed generation with its population.
    pub fn record_step(&mut self, cell_count: u32) {
        self.generation += 1;
        self.cell_count = cell_count;
        self.max_cell_count = self.max_cell_count.max(cell_count);
    }

    /// Zero everything. Called whenever the board is reseeded.
    pub fn reset(&mut self) {
        *self = Self::default();
    }
}
