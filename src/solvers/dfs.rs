use crate::maze::{Direction, Grid, Maze, Point};

/// Enumerates simple routes (no cell visited twice) from `start` to `goal` depth first.
///
/// Stops after `max_paths` routes; `0` means no limit. A perfect maze has exactly one
/// route between any two open cells, so this is mostly useful on mazes with loops.
pub fn find_all_paths(
    maze: &Maze,
    start: Point,
    goal: Point,
    max_paths: usize,
) -> Vec<Vec<Direction>> {
    let mut results = Vec::new();
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return results;
    }

    let mut visited = Grid::new(maze.width(), maze.height(), false);
    visited[start] = true;
    let mut route: Vec<Direction> = Vec::new();
    // Each frame: a cell on the current route and the index of the next direction to try
    let mut stack: Vec<(Point, usize)> = vec![(start, 0)];

    while let Some(&(cell, next)) = stack.last() {
        if cell == goal || next >= Direction::ALL.len() {
            if cell == goal {
                results.push(route.clone());
                if max_paths > 0 && results.len() >= max_paths {
                    break;
                }
            }
            // Backtrack
            stack.pop();
            visited[cell] = false;
            route.pop();
            continue;
        }

        let direction = Direction::ALL[next];
        if let Some(top) = stack.last_mut() {
            top.1 += 1;
        }
        if let Some(neighbor) = maze.step(cell, direction).filter(|&n| !visited[n]) {
            visited[neighbor] = true;
            route.push(direction);
            stack.push((neighbor, 0));
        }
    }

    results
}
