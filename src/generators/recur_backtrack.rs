use rand::{Rng, seq::SliceRandom};

use crate::maze::{Direction, Grid, Maze, Point};

/// Carves a spanning tree over every cell not marked in `blocked`, starting at `start`.
///
/// Iterative randomized depth-first backtracking: look at the cell on top of the stack,
/// try the four directions in a freshly shuffled order and carve into the first unvisited
/// neighbor. When there is none, backtrack. Blocked cells start out visited, so the
/// carver walks around them and leaves their walls untouched.
pub fn recursive_backtrack<R: Rng>(
    maze: &mut Maze,
    start: Point,
    blocked: &Grid<bool>,
    rng: &mut R,
) -> usize {
    let mut visited = blocked.clone();
    visited[start] = true;

    // The stack keeps only carved cells
    let mut stack = vec![start];
    let mut directions = Direction::ALL;
    let mut carved = 0;

    while let Some(&cell) = stack.last() {
        directions.shuffle(rng);
        let next = directions.iter().find_map(|&direction| {
            maze.neighbor(cell, direction)
                .filter(|&neighbor| !visited[neighbor])
                .map(|neighbor| (neighbor, direction))
        });

        match next {
            Some((neighbor, direction)) => {
                maze.remove_wall(cell, direction);
                visited[neighbor] = true;
                carved += 1;
                // Carve on from the neighbor; this cell stays below it for backtracking
                stack.push(neighbor);
            }
            None => {
                stack.pop();
            }
        }
    }

    tracing::debug!("[carve] Carved {} passages from {:?}", carved, start);
    carved
}
