//! Run termination and cycle detection
//!
//! Every generation gets a 32-bit fingerprint: starting from 5381, each
//! 8-row chunk of each column is folded in with `hash * 33 ^ chunk`. The
//! detector compares it against the previous generation and against a
//! snapshot resampled every six generations. The first terminal verdict
//! sticks until the detector is reset.

use crate::grid::Board;

pub const FINGERPRINT_SEED: u32 = 5381;
/// Generations between short snapshot resamples.
pub const SHORT_CHECK_INTERVAL: u64 = 6;
/// Generations between long snapshot resamples.
pub const LONG_CHECK_INTERVAL: u64 = 256;
/// Populations below this count as dead.
pub const DEAD_CELL_THRESHOLD: u32 = 5;

const DEAD_AFTER: u64 = 20;
const STABLE_AFTER: u64 = 10;
const REPEAT_AFTER: u64 = 20;

/// Fingerprint of a whole board.
pub fn fingerprint(board: &Board) -> u32 {
    board
        .columns()
        .iter()
        .flat_map(|column| column.to_le_bytes())
        .fold(FINGERPRINT_SEED, |hash, chunk| {
            hash.wrapping_mul(33) ^ u32::from(chunk)
        })
}

/// Classification of a run after its latest generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum RunState {
    #[default]
    Running,
    Dead,
    Stable,
    Repeating,
}

impl RunState {
    pub fn is_terminal(self) -> bool {
        self != RunState::Running
    }
}

/// Fingerprint history for one run.
#[derive(Clone, Debug)]
pub struct CycleDetector {
    game_hash: u32,
    previous_hash: u32,
    short_check_hash: u32,
    long_check_hash: u32,
    state: RunState,
}

impl CycleDetector {
    /// Start tracking a freshly seeded board.
    pub fn new(board: &Board) -> Self {
        let hash = fingerprint(board);
        Self {
            game_hash: hash,
            previous_hash: hash,
            short_check_hash: hash,
            long_check_hash: hash,
            state: RunState::Running,
        }
    }

    pub fn reset(&mut self, board: &Board) {
        *self = Self::new(board);
    }

    /// Fingerprint and classify generation `generation` of the run.
    ///
    /// Once a terminal state is returned every later call returns it too;
    /// the fingerprints keep advancing.
    pub fn observe(&mut self, board: &Board, generation: u64, cell_count: u32) -> RunState {
        let hash = fingerprint(board);
        self.game_hash = hash;

        let state = if self.state.is_terminal() {
            self.state
        } else if cell_count < DEAD_CELL_THRESHOLD && generation > DEAD_AFTER {
            RunState::Dead
        } else if hash == self.previous_hash && generation > STABLE_AFTER {
            RunState::Stable
        } else if (hash == self.short_check_hash || hash == self.previous_hash)
            && generation > REPEAT_AFTER
        {
            RunState::Repeating
        } else {
            RunState::Running
        };

        self.previous_hash = hash;
        if generation % SHORT_CHECK_INTERVAL == 0 {
            self.short_check_hash = hash;
        }
        if generation % LONG_CHECK_INTERVAL == 0 {
            self.long_check_hash = hash;
        }
        self.state = state;
        state
    }

    /// Latest classification.
    pub fn state(&self) -> RunState {
        self.state
    }

    /// Fingerprint of the latest observed generation.
    pub fn game_hash(&self) -> u32 {
        self.game_hash
    }

    /// Snapshot taken every [`LONG_CHECK_INTERVAL`] generations. Kept for
    /// inspection; no classification reads it.
    pub fn long_check_hash(&self) -> u32 {
        self.long_check_hash
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::rules::life_like::step_conway;
    use std::collections::HashSet;

    fn run(board: &mut Board, generations: u64) -> Vec<RunState> {
        let mut detector = CycleDetector::new(board);
        (1..=generations)
            .map(|generation| {
                let count = step_conway(board);
                detector.observe(board, generation, count)
            })
            .collect()
    }

    #[test]
    fn test_fingerprint_is_deterministic() {
        let board = Board::from_cells([(1, 2), (40, 30), (63, 0)]);
        assert_eq!(fingerprint(&board), fingerprint(&board.clone()));
        assert_ne!(fingerprint(&Board::new()), FINGERPRINT_SEED);
    }

    #[test]
    fn test_no_collisions_for_single_cells() {
        let mut seen = HashSet::new();
        for x in 0..64 {
            for y in 0..32 {
                assert!(seen.insert(fingerprint(&Board::from_cells([(x, y)]))));
            }
        }
        assert!(!seen.contains(&fingerprint(&Board::new())));
    }

    #[test]
    fn test_no_collisions_for_small_patterns() {
        // Every non-empty 2x2 pattern at every position.
        let mut boards = HashSet::new();
        for pattern in 1u8..16 {
            for x in 0..64 {
                for y in 0..32 {
                    let cells = (0..4)
                        .filter(|bit| pattern >> bit & 1 == 1)
                        .map(|bit| (x + bit % 2, y + bit / 2));
                    boards.insert(Board::from_cells(cells));
                }
            }
        }
        let hashes: HashSet<u32> = boards.iter().map(fingerprint).collect();
        assert_eq!(hashes.len(), boards.len());
    }

    #[test]
    fn test_empty_board_is_dead_after_twenty() {
        let states = run(&mut Board::new(), 21);
        assert_eq!(states[20], RunState::Dead);
    }

    #[test]
    fn test_block_is_stable_after_ten() {
        let mut board = Board::from_cells([(30, 15), (31, 15), (30, 16), (31, 16)]);
        let states = run(&mut board, 11);
        assert!(states[..10].iter().all(|&s| s == RunState::Running));
        assert_eq!(states[10], RunState::Stable);
        assert_eq!(board.count_live(), 4);
    }

    #[test]
    fn test_blinker_repeats_after_twenty() {
        // Blinker plus a distant block keeps the population above the dead
        // threshold.
        let cells = [(10, 10), (10, 11), (10, 12), (40, 20), (41, 20), (40, 21), (41, 21)];
        let states = run(&mut Board::from_cells(cells), 30);
        assert!(states[..20].iter().all(|&s| s == RunState::Running));
        let first = states.iter().position(|s| s.is_terminal()).unwrap();
        assert_eq!(states[first], RunState::Repeating);
        assert!(first < 26);
    }

    #[test]
    fn test_terminal_state_holds() {
        // The blinker alternates between two fingerprints, so later
        // generations only match the snapshot every other step.
        let cells = [(10, 10), (10, 11), (10, 12), (40, 20), (41, 20), (40, 21), (41, 21)];
        let states = run(&mut Board::from_cells(cells), 60);
        let first = states.iter().position(|s| s.is_terminal()).unwrap();
        assert!(states[first..].iter().all(|&s| s == RunState::Repeating));
    }

    #[test]
    fn test_reset_clears_verdict() {
        let mut board = Board::new();
        let mut detector = CycleDetector::new(&board);
        for generation in 1..=21 {
            let count = step_conway(&mut board);
            detector.observe(&board, generation, count);
        }
        assert_eq!(detector.state(), RunState::Dead);

        board = Board::from_cells([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        detector.reset(&board);
        assert_eq!(detector.state(), RunState::Running);
        let count = step_conway(&mut board);
        assert_eq!(detector.observe(&board, 1, count), RunState::Running);
    }

    #[test]
    fn test_glider_keeps_running() {
        let glider = [(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)];
        let states = run(&mut Board::from_cells(glider), 60);
        assert!(states.iter().all(|&s| s == RunState::Running));
    }

    #[test]
    fn test_long_check_hash_resamples() {
        let mut board = Board::from_cells([(1, 0), (2, 1), (0, 2), (1, 2), (2, 2)]);
        let mut detector = CycleDetector::new(&board);
        let initial = detector.long_check_hash();
        for generation in 1..LONG_CHECK_INTERVAL {
            let count = step_conway(&mut board);
            detector.observe(&board, generation, count);
        }
        assert_eq!(detector.long_check_hash(), initial);
        assert_ne!(detector.game_hash(), initial);

        let count = step_conway(&mut board);
        detector.observe(&board, LONG_CHECK_INTERVAL, count);
        assert_eq!(detector.long_check_hash(), detector.game_hash());
    }
}
