use rand::{SeedableRng, rngs::StdRng};

pub mod loops;
pub mod pattern;
mod recur_backtrack;

pub use loops::{DEFAULT_LOOP_RATIO, add_extra_passages, find_open_voids};
pub use pattern::{PlacementError, find_pattern_origin, pattern_cells};
pub use recur_backtrack::recursive_backtrack;

use crate::{
    error::{Endpoint, MazeError},
    maze::{Grid, Maze, Point},
    validate::{ValidationReport, validate_maze},
};

/// Get a random number generator, optionally seeded for reproducibility.
fn get_rng(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_os_rng(),
    }
}

/// A finished, validated maze together with what happened while building it.
#[derive(Debug, Clone)]
pub struct Generation {
    pub maze: Maze,
    /// Top left corner of the "42" pattern, if it could be placed
    pub pattern_origin: Option<Point>,
    /// Cells covered by the pattern. Empty if it was not placed.
    pub pattern_cells: Vec<Point>,
    /// Non-fatal conditions, e.g. a pattern that did not fit
    pub warnings: Vec<String>,
    /// Messages from the final validation
    pub report: ValidationReport,
}

fn check_endpoints(width: u16, height: u16, entry: Point, exit: Point) -> Result<(), MazeError> {
    if width == 0 || height == 0 {
        return Err(MazeError::InvalidDimensions { width, height });
    }
    let in_bounds = |p: Point| p.0 < width && p.1 < height;
    for (which, point) in [(Endpoint::Entry, entry), (Endpoint::Exit, exit)] {
        if !in_bounds(point) {
            return Err(MazeError::OutOfBounds {
                which,
                point,
                width,
                height,
            });
        }
    }
    if entry == exit {
        return Err(MazeError::SameEntryExit(entry));
    }
    Ok(())
}

/// Generates a `width` x `height` maze between `entry` and `exit`.
///
/// Steps, in order:
/// 1. place the "42" pattern (skipped with a warning if it does not fit)
/// 2. carve a spanning tree from `entry` around the pattern
/// 3. if `perfect` is false, add extra passages without opening 2x2 voids
/// 4. close the outer border
/// 5. wall in the pattern cells, along with the facing walls of their neighbors
/// 6. validate the result
///
/// The same arguments with the same `seed` always give the same maze. With no seed the
/// generator is seeded from the OS.
///
/// Errors:
/// * [`MazeError::InvalidDimensions`], [`MazeError::OutOfBounds`] or
///   [`MazeError::SameEntryExit`] before anything is carved
/// * [`MazeError::Validation`] if the finished maze does not pass validation
pub fn generate_maze(
    width: u16,
    height: u16,
    entry: Point,
    exit: Point,
    perfect: bool,
    seed: Option<u64>,
) -> Result<Generation, MazeError> {
    check_endpoints(width, height, entry, exit)?;
    tracing::debug!(
        "[generate] {}x{} entry={:?} exit={:?} perfect={} seed={:?}",
        width,
        height,
        entry,
        exit,
        perfect,
        seed
    );

    let mut rng = get_rng(seed);
    let mut maze = Maze::new(width, height);
    let mut warnings = Vec::new();

    let pattern_origin = match find_pattern_origin(width, height, entry, exit, &mut rng) {
        Ok(origin) => Some(origin),
        Err(err) => {
            tracing::warn!("[pattern] {}", err);
            warnings.push(err.to_string());
            None
        }
    };
    let pattern = pattern_origin.map(pattern_cells).unwrap_or_default();
    let mut blocked = Grid::new(width, height, false);
    pattern.iter().for_each(|&cell| blocked[cell] = true);

    recursive_backtrack(&mut maze, entry, &blocked, &mut rng);
    if !perfect {
        add_extra_passages(&mut maze, &blocked, &mut rng, DEFAULT_LOOP_RATIO);
    }
    maze.enforce_borders();
    pattern.iter().for_each(|&cell| maze.seal_cell(cell));

    let report = validate_maze(&maze, perfect);
    if !report.ok {
        tracing::error!("[generate] Validation failed: {:?}", report.messages);
        return Err(MazeError::Validation(report.messages));
    }
    tracing::info!(
        "[generate] Generated {}x{} maze ({})",
        width,
        height,
        if perfect { "perfect" } else { "with loops" }
    );

    Ok(Generation {
        maze,
        pattern_origin,
        pattern_cells: pattern,
        warnings,
        report,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Direction;
    use crate::validate::check_perfect;

    #[test]
    fn test_rejects_bad_endpoints() {
        assert_eq!(
            generate_maze(5, 5, (0, 0), (0, 0), true, Some(1)).unwrap_err(),
            MazeError::SameEntryExit((0, 0))
        );
        assert_eq!(
            generate_maze(5, 5, (5, 0), (0, 0), true, Some(1)).unwrap_err(),
            MazeError::OutOfBounds {
                which: Endpoint::Entry,
                point: (5, 0),
                width: 5,
                height: 5
            }
        );
        assert!(matches!(
            generate_maze(5, 5, (0, 0), (2, 9), true, Some(1)),
            Err(MazeError::OutOfBounds {
                which: Endpoint::Exit,
                ..
            })
        ));
        assert_eq!(
            generate_maze(0, 5, (0, 0), (0, 1), true, None).unwrap_err(),
            MazeError::InvalidDimensions {
                width: 0,
                height: 5
            }
        );
    }

    #[test]
    fn test_small_maze_has_no_pattern() {
        let generation = generate_maze(3, 3, (0, 0), (2, 2), true, Some(1)).unwrap();
        assert_eq!(generation.pattern_origin, None);
        assert!(generation.pattern_cells.is_empty());
        assert_eq!(generation.warnings.len(), 1);
        assert!(generation.warnings[0].contains("too small"));
        assert_eq!(check_perfect(&generation.maze), Ok(()));
    }

    #[test]
    fn test_pattern_cells_are_sealed() {
        let generation = generate_maze(20, 15, (0, 0), (19, 14), true, Some(42)).unwrap();
        assert!(generation.pattern_origin.is_some());
        assert!(generation.warnings.is_empty());
        let maze = &generation.maze;
        for &cell in &generation.pattern_cells {
            assert!(maze.is_closed(cell));
            for direction in Direction::ALL {
                if let Some(next) = maze.neighbor(cell, direction) {
                    assert!(maze.has_wall(next, direction.opposite()));
                }
            }
        }
    }

    #[test]
    fn test_seed_is_reproducible() {
        let a = generate_maze(15, 10, (0, 0), (14, 9), false, Some(7)).unwrap();
        let b = generate_maze(15, 10, (0, 0), (14, 9), false, Some(7)).unwrap();
        assert_eq!(a.maze, b.maze);
        assert_eq!(a.pattern_origin, b.pattern_origin);
    }

    #[test]
    fn test_unseeded_generation_is_valid() {
        let generation = generate_maze(10, 8, (0, 0), (9, 7), true, None).unwrap();
        assert!(generation.report.ok);
    }
}
