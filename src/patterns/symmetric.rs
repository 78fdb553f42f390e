//! Symmetric random fill
//!
//! One half (or quadrant) of a centred region is randomized and copied into
//! the rest of the region by mirroring or by 4-fold rotation. The size class
//! sets both the region and the density; small seeds are topped up to a
//! minimum population so they do not die out at once.

use crate::error::EngineError;
use crate::grid::{Board, HEIGHT, WIDTH};
use rand::seq::SliceRandom;
use rand::Rng;
use std::fmt;
use std::str::FromStr;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    /// Mirror across the vertical centre line.
    Vertical,
    /// Mirror across the horizontal centre line.
    Horizontal,
    /// Quarter-turn rotation about the centre of a square region.
    Rotational,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum SizeClass {
    Small,
    Medium,
    Large,
}

impl SizeClass {
    /// Width and height of the centred region.
    pub fn extent(&self) -> (i32, i32) {
        match self {
            SizeClass::Small => (16, 12),
            SizeClass::Medium => (40, 24),
            SizeClass::Large => (WIDTH as i32, HEIGHT as i32),
        }
    }

    /// One in `n` source cells starts alive.
    pub fn density_divisor(&self) -> u32 {
        match self {
            SizeClass::Small => 3,
            SizeClass::Medium => 6,
            SizeClass::Large => 12,
        }
    }

    /// Whether the seed is topped up to a minimum population.
    pub fn has_seed_floor(&self) -> bool {
        matches!(self, SizeClass::Small)
    }
}

/// Axis-aligned rectangle of cells.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
struct Region {
    left: i32,
    top: i32,
    width: i32,
    height: i32,
}

impl Region {
    fn centred(width: i32, height: i32) -> Self {
        Self {
            left: (WIDTH as i32 - width) / 2,
            top: (HEIGHT as i32 - height) / 2,
            width,
            height,
        }
    }

    fn cells(self) -> impl Iterator<Item = (i32, i32)> {
        (self.left..self.left + self.width)
            .flat_map(move |x| (self.top..self.top + self.height).map(move |y| (x, y)))
    }
}

/// Where randomness is drawn and how it is copied.
struct Layout {
    symmetry: Symmetry,
    region: Region,
}

impl Layout {
    fn new(symmetry: Symmetry, size: SizeClass) -> Self {
        let (w, h) = size.extent();
        let region = match symmetry {
            Symmetry::Rotational => {
                let side = w.min(h);
                Region::centred(side, side)
            }
            _ => Region::centred(w, h),
        };
        Self { symmetry, region }
    }

    /// The part of the region that is randomized.
    fn source(&self) -> Region {
        let r = self.region;
        match self.symmetry {
            Symmetry::Vertical => Region { width: r.width / 2, ..r },
            Symmetry::Horizontal => Region { height: r.height / 2, ..r },
            Symmetry::Rotational => Region {
                width: r.width / 2,
                height: r.height / 2,
                ..r
            },
        }
    }

    /// All images of a source cell, itself included. Mirrors repeat their
    /// two images.
    fn images(&self, x: i32, y: i32) -> [(i32, i32); 4] {
        let r = self.region;
        match self.symmetry {
            Symmetry::Vertical => {
                let mx = 2 * r.left + r.width - 1 - x;
                [(x, y), (mx, y), (x, y), (mx, y)]
            }
            Symmetry::Horizontal => {
                let my = 2 * r.top + r.height - 1 - y;
                [(x, y), (x, my), (x, y), (x, my)]
            }
            Symmetry::Rotational => {
                let side = r.width;
                let (i, j) = (x - r.left, y - r.top);
                [
                    (i, j),
                    (side - 1 - j, i),
                    (side - 1 - i, side - 1 - j),
                    (j, side - 1 - i),
                ]
                .map(|(i, j)| (r.left + i, r.top + j))
            }
        }
    }

    fn set_images(&self, board: &mut Board, x: i32, y: i32) {
        for (ix, iy) in self.images(x, y) {
            board.set(ix, iy);
        }
    }
}

/// Clear `board` and fill it with a symmetric random seed.
///
/// For [`SizeClass::Small`] the seed is topped up until it holds at least
/// `min_seeds` live cells, or the source region is full.
pub fn symmetric_fill<R: Rng + ?Sized>(
    board: &mut Board,
    rng: &mut R,
    symmetry: Symmetry,
    size: SizeClass,
    min_seeds: u32,
) {
    board.clear_all();
    let layout = Layout::new(symmetry, size);
    let divisor = size.density_divisor();

    for (x, y) in layout.source().cells() {
        if rng.random_range(0..divisor) == 0 {
            layout.set_images(board, x, y);
        }
    }

    if size.has_seed_floor() && board.count_live() < min_seeds {
        let mut dead: Vec<(i32, i32)> = layout
            .source()
            .cells()
            .filter(|&(x, y)| !board.get(x, y))
            .collect();
        dead.shuffle(rng);
        for (x, y) in dead {
            if board.count_live() >= min_seeds {
                break;
            }
            layout.set_images(board, x, y);
        }
    }
}

impl fmt::Display for Symmetry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Symmetry::Vertical => "vertical",
            Symmetry::Horizontal => "horizontal",
            Symmetry::Rotational => "rotational",
        })
    }
}

impl FromStr for Symmetry {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "vertical" | "v" => Ok(Symmetry::Vertical),
            "horizontal" | "h" => Ok(Symmetry::Horizontal),
            "rotational" | "r" => Ok(Symmetry::Rotational),
            _ => Err(EngineError::UnknownSymmetry(s.to_string())),
        }
    }
}

impl fmt::Display for SizeClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            SizeClass::Small => "small",
            SizeClass::Medium => "medium",
            SizeClass::Large => "large",
        })
    }
}

impl FromStr for SizeClass {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "small" | "s" => Ok(SizeClass::Small),
            "medium" | "m" => Ok(SizeClass::Medium),
            "large" | "l" => Ok(SizeClass::Large),
            _ => Err(EngineError::UnknownSizeClass(s.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    const SYMMETRIES: [Symmetry; 3] = [
        Symmetry::Vertical,
        Symmetry::Horizontal,
        Symmetry::Rotational,
    ];
    const SIZES: [SizeClass; 3] = [SizeClass::Small, SizeClass::Medium, SizeClass::Large];

    fn generate(symmetry: Symmetry, size: SizeClass, seed: u64) -> Board {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(seed);
        symmetric_fill(&mut board, &mut rng, symmetry, size, 12);
        board
    }

    fn live_cells(board: &Board) -> impl Iterator<Item = (i32, i32)> + '_ {
        board
            .cells()
            .filter(|&(_, _, alive)| alive)
            .map(|(x, y, _)| (x as i32, y as i32))
    }

    #[test]
    fn test_vertical_mirror() {
        for size in SIZES {
            let board = generate(Symmetry::Vertical, size, 1);
            for (x, y) in live_cells(&board) {
                assert!(board.get(WIDTH as i32 - 1 - x, y), "{size} ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_horizontal_mirror() {
        for size in SIZES {
            let board = generate(Symmetry::Horizontal, size, 2);
            for (x, y) in live_cells(&board) {
                assert!(board.get(x, HEIGHT as i32 - 1 - y), "{size} ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_rotational_symmetry() {
        for size in SIZES {
            let board = generate(Symmetry::Rotational, size, 3);
            let (w, h) = size.extent();
            let side = w.min(h);
            let left = (WIDTH as i32 - side) / 2;
            let top = (HEIGHT as i32 - side) / 2;
            for (x, y) in live_cells(&board) {
                let (i, j) = (x - left, y - top);
                assert!(board.get(left + side - 1 - j, top + i), "{size} ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_cells_stay_inside_region() {
        for symmetry in SYMMETRIES {
            let board = generate(symmetry, SizeClass::Small, 4);
            for (x, y) in live_cells(&board) {
                assert!((24..40).contains(&x), "{symmetry} ({x}, {y})");
                assert!((10..22).contains(&y), "{symmetry} ({x}, {y})");
            }
        }
    }

    #[test]
    fn test_small_meets_seed_floor() {
        for symmetry in SYMMETRIES {
            for seed in 0..20 {
                let mut board = Board::new();
                let mut rng = StdRng::seed_from_u64(seed);
                symmetric_fill(&mut board, &mut rng, symmetry, SizeClass::Small, 60);
                assert!(board.count_live() >= 60, "{symmetry} seed {seed}");
            }
        }
    }

    #[test]
    fn test_seed_floor_is_bounded_by_region() {
        let mut board = Board::new();
        let mut rng = StdRng::seed_from_u64(0);
        symmetric_fill(&mut board, &mut rng, Symmetry::Vertical, SizeClass::Small, u32::MAX);
        assert_eq!(board.count_live(), 16 * 12);
    }

    #[test]
    fn test_larger_classes_are_sparser() {
        let density = |size: SizeClass| {
            let (w, h) = size.extent();
            let total: u32 = (0..10)
                .map(|seed| generate(Symmetry::Vertical, size, seed).count_live())
                .sum();
            total as f64 / (10 * w * h) as f64
        };
        let small = density(SizeClass::Small);
        let medium = density(SizeClass::Medium);
        let large = density(SizeClass::Large);
        assert!(small > medium && medium > large, "{small} {medium} {large}");
        assert!(large > 0.05 && large < 0.12, "{large}");
    }

    #[test]
    fn test_parse() {
        assert_eq!("Rotational".parse::<Symmetry>(), Ok(Symmetry::Rotational));
        assert_eq!("m".parse::<SizeClass>(), Ok(SizeClass::Medium));
        assert!("diagonal".parse::<Symmetry>().is_err());
    }
}
