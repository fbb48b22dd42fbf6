mod bfs;
mod dfs;

pub use bfs::solve_bfs;
pub use dfs::find_all_paths;

use crate::maze::{Direction, Maze, Point};

/// Shortest route from `start` to `end` as a list of steps.
///
/// * `Some(vec![])` when `start == end`
/// * `None` when `end` cannot be reached or either point lies outside the maze
///
/// Works the same on perfect mazes and on mazes with loops.
pub fn solve(maze: &Maze, start: Point, end: Point) -> Option<Vec<Direction>> {
    let path = solve_bfs(maze, start, end);
    match &path {
        Some(steps) => {
            tracing::debug!("[solve] {:?} -> {:?} in {} steps", start, end, steps.len())
        }
        None => tracing::debug!("[solve] No path from {:?} to {:?}", start, end),
    }
    path
}

/// Compact route string, one letter per step, e.g. `"EESWS"`.
pub fn path_to_string(path: &[Direction]) -> String {
    path.iter().map(|d| d.letter()).collect()
}

/// A route string held something other than a direction letter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("invalid direction {letter:?} at position {index}")]
pub struct ParsePathError {
    pub index: usize,
    pub letter: char,
}

/// Reads a route string back. Letters are case-insensitive, surrounding whitespace is
/// ignored.
pub fn parse_path(path: &str) -> Result<Vec<Direction>, ParsePathError> {
    path.trim()
        .chars()
        .enumerate()
        .map(|(index, letter)| {
            Direction::from_letter(letter)
                .ok_or(ParsePathError { index, letter })
        })
        .collect()
}

/// Why a route could not be followed.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StepError {
    /// Step `index` would cross a wall or leave the maze from `at`
    #[error("step {index} is blocked at {at:?}")]
    Blocked { index: usize, at: Point },
    /// The starting point is outside the maze
    #[error("start {0:?} is outside the maze")]
    OutOfBounds(Point),
}

/// Walks `path` from `start`, one legal move per step, and returns where it ends.
pub fn follow_path(maze: &Maze, start: Point, path: &[Direction]) -> Result<Point, StepError> {
    if !maze.is_in_bounds(start) {
        return Err(StepError::OutOfBounds(start));
    }
    path.iter()
        .enumerate()
        .try_fold(start, |at, (index, &direction)| {
            maze.step(at, direction)
                .ok_or(StepError::Blocked { index, at })
        })
}
