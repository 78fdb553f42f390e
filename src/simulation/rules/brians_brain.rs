//! Brian's Brain
//!
//! Three states spread over two planes: the board holds firing cells and a
//! co-indexed `dying` plane holds refractory ones. Firing cells become
//! dying, dying cells die, and a dead cell fires when exactly two of its
//! neighbours are firing.

use crate::grid::{Board, HEIGHT, NEIGHBOR_OFFSETS, WIDTH};

/// State of a single Brian's Brain cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CellState {
    Dead,
    Alive,
    Dying,
}

/// Decode the cell at `(x, y)` from the two planes.
pub fn cell_state(board: &Board, dying: &Board, x: i32, y: i32) -> CellState {
    if dying.get(x, y) {
        CellState::Dying
    } else if board.get(x, y) {
        CellState::Alive
    } else {
        CellState::Dead
    }
}

fn firing_neighbors(board: &Board, dying: &Board, x: i32, y: i32) -> u8 {
    NEIGHBOR_OFFSETS
        .iter()
        .filter(|(dx, dy)| {
            let (nx, ny) = (x + dx, y + dy);
            board.get(nx, ny) && !dying.get(nx, ny)
        })
        .count() as u8
}

/// Advance one generation. Returns the number of firing cells.
pub fn step(board: &mut Board, dying: &mut Board) -> u32 {
    let mut next = Board::new();
    let mut next_dying = Board::new();
    for x in 0..WIDTH as i32 {
        for y in 0..HEIGHT as i32 {
            match cell_state(board, dying, x, y) {
                CellState::Alive => next_dying.set(x, y),
                CellState::Dying => {}
                CellState::Dead => {
                    if firing_neighbors(board, dying, x, y) == 2 {
                        next.set(x, y);
                    }
                }
            }
        }
    }
    *board = next;
    *dying = next_dying;
    board.count_live()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn states(board: &Board, dying: &Board) -> Vec<CellState> {
        (0..WIDTH as i32)
            .flat_map(|x| (0..HEIGHT as i32).map(move |y| (x, y)))
            .map(|(x, y)| cell_state(board, dying, x, y))
            .collect()
    }

    #[test]
    fn test_pair_fires_and_decays() {
        let mut board = Board::from_cells([(10, 10), (11, 10)]);
        let mut dying = Board::new();
        let firing = step(&mut board, &mut dying);

        assert_eq!(cell_state(&board, &dying, 10, 10), CellState::Dying);
        assert_eq!(cell_state(&board, &dying, 11, 10), CellState::Dying);
        // Cells above and below the pair see exactly two firing neighbours.
        for x in [10, 11] {
            assert_eq!(cell_state(&board, &dying, x, 9), CellState::Alive);
            assert_eq!(cell_state(&board, &dying, x, 11), CellState::Alive);
        }
        assert_eq!(firing, 4);

        step(&mut board, &mut dying);
        assert_eq!(cell_state(&board, &dying, 10, 10), CellState::Dead);
        assert_eq!(cell_state(&board, &dying, 10, 9), CellState::Dying);
    }

    #[test]
    fn test_dying_neighbors_do_not_count() {
        let mut board = Board::new();
        let mut dying = Board::from_cells([(5, 5), (6, 5)]);
        step(&mut board, &mut dying);
        assert!(board.is_empty());
        assert!(dying.is_empty());
    }

    #[test]
    fn test_dying_never_becomes_alive_directly() {
        let mut rng = StdRng::seed_from_u64(9);
        let mut board = Board::new();
        for x in 0..WIDTH as i32 {
            board.fill_column(x, rng.random::<u32>() & rng.random::<u32>());
        }
        let mut dying = Board::new();
        let mut previous = states(&board, &dying);
        for _ in 0..30 {
            step(&mut board, &mut dying);
            let current = states(&board, &dying);
            for (before, after) in previous.iter().zip(&current) {
                match before {
                    CellState::Alive => assert_eq!(*after, CellState::Dying),
                    CellState::Dying => assert_eq!(*after, CellState::Dead),
                    CellState::Dead => assert_ne!(*after, CellState::Dying),
                }
            }
            let overlap = board
                .columns()
                .iter()
                .zip(dying.columns())
                .any(|(alive, dying)| alive & dying != 0);
            assert!(!overlap);
            previous = current;
        }
    }
}
