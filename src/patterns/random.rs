//! Density-controlled random fill
//!
//! Each column gets the AND of `draws` random words, so every extra draw
//! halves the expected density: one draw fills ~50%, two ~25%, three ~12%.

use crate::grid::{Board, WIDTH};
use rand::Rng;

/// Overwrite every column of `board` with `draws` ANDed random words.
/// Zero draws leaves the board empty.
pub fn random_fill<R: Rng + ?Sized>(board: &mut Board, rng: &mut R, draws: u32) {
    for x in 0..WIDTH as i32 {
        let word = if draws == 0 {
            0
        } else {
            (0..draws).fold(u32::MAX, |word, _| word & rng.random::<u32>())
        };
        board.fill_column(x, word);
    }
}
