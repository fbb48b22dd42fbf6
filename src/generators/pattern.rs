use rand::Rng;
use thiserror::Error;

use crate::maze::Point;

// Glyph "42": digit 4, a one column gap, digit 2.
const DIGIT_4: [[bool; 3]; 5] = [
    [true, false, false],
    [true, false, false],
    [true, true, true],
    [false, false, true],
    [false, false, true],
];
const DIGIT_2: [[bool; 3]; 5] = [
    [true, true, true],
    [false, false, true],
    [true, true, true],
    [true, false, false],
    [true, true, true],
];

const DIGIT_WIDTH: u16 = 3;
const GAP: u16 = 1;
pub const PATTERN_WIDTH: u16 = DIGIT_WIDTH * 2 + GAP;
pub const PATTERN_HEIGHT: u16 = 5;

/// Number of random origins tried before falling back to a full scan.
const RANDOM_ATTEMPTS: usize = 200;

/// Why the pattern could not be placed. Not fatal: generation goes on without it.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum PlacementError {
    #[error(
        "maze too small ({width}x{height}) to fit the '42' pattern (needs at least {}x{})",
        PATTERN_WIDTH + 2,
        PATTERN_HEIGHT + 2
    )]
    TooSmall { width: u16, height: u16 },
    #[error("cannot place the '42' pattern without overlapping entry/exit")]
    Overlap,
}

/// Cells covered by the pattern when its top left corner sits at `origin`.
pub fn pattern_cells(origin: Point) -> Vec<Point> {
    let (ox, oy) = origin;
    (0..PATTERN_HEIGHT)
        .flat_map(|dy| (0..DIGIT_WIDTH).map(move |dx| (dx, dy)))
        .flat_map(|(dx, dy)| {
            let row = dy as usize;
            let col = dx as usize;
            [
                DIGIT_4[row][col].then_some((ox + dx, oy + dy)),
                DIGIT_2[row][col].then_some((ox + DIGIT_WIDTH + GAP + dx, oy + dy)),
            ]
        })
        .flatten()
        .collect()
}

fn is_valid_origin(origin: Point, entry: Point, exit: Point) -> bool {
    !pattern_cells(origin)
        .into_iter()
        .any(|cell| cell == entry || cell == exit)
}

/// Picks an origin for the pattern that keeps a one cell margin to every edge of a
/// `width` x `height` maze and keeps the pattern off `entry` and `exit`.
///
/// A bounded number of random origins are tried first. If they all collide, every origin
/// is scanned in raster order, so an origin is found whenever one exists.
pub fn find_pattern_origin<R: Rng>(
    width: u16,
    height: u16,
    entry: Point,
    exit: Point,
    rng: &mut R,
) -> Result<Point, PlacementError> {
    let min_x = 1u16;
    let min_y = 1u16;
    // The pattern plus one cell of margin on both sides must fit.
    let (Some(max_x), Some(max_y)) = (
        width.checked_sub(PATTERN_WIDTH + 1),
        height.checked_sub(PATTERN_HEIGHT + 1),
    ) else {
        return Err(PlacementError::TooSmall { width, height });
    };
    if max_x < min_x || max_y < min_y {
        return Err(PlacementError::TooSmall { width, height });
    }

    for _ in 0..RANDOM_ATTEMPTS {
        let origin = (
            rng.random_range(min_x..=max_x),
            rng.random_range(min_y..=max_y),
        );
        if is_valid_origin(origin, entry, exit) {
            return Ok(origin);
        }
    }

    tracing::debug!("[pattern] Random placement failed, scanning every origin");
    (min_y..=max_y)
        .flat_map(|oy| (min_x..=max_x).map(move |ox| (ox, oy)))
        .find(|&origin| is_valid_origin(origin, entry, exit))
        .ok_or(PlacementError::Overlap)
}
