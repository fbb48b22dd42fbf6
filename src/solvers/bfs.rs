use std::collections::VecDeque;

use crate::maze::{Direction, Grid, Maze, Point, get_neighbors};

/// Breadth-first search for the shortest route from `start` to `goal`.
///
/// Neighbors are expanded in [`Direction::ALL`] order, so among equally short routes the
/// result is always the same one for a given maze.
pub fn solve_bfs(maze: &Maze, start: Point, goal: Point) -> Option<Vec<Direction>> {
    if start == goal {
        return Some(Vec::new());
    }
    if !maze.is_in_bounds(start) || !maze.is_in_bounds(goal) {
        return None;
    }

    // For each discovered cell: the cell it was reached from and the step taken
    let mut parents: Grid<Option<(Point, Direction)>> =
        Grid::new(maze.width(), maze.height(), None);
    let mut visited = Grid::new(maze.width(), maze.height(), false);
    visited[start] = true;
    let mut queue = VecDeque::from([start]);

    while let Some(current) = queue.pop_front() {
        for (neighbor, direction) in get_neighbors(current, maze) {
            if visited[neighbor] {
                continue;
            }
            visited[neighbor] = true;
            parents[neighbor] = Some((current, direction));
            if neighbor == goal {
                return Some(reconstruct_path(&parents, goal));
            }
            queue.push_back(neighbor);
        }
    }

    None // No path found
}

/// Walks parent links back from `goal` and returns the steps in travel order.
fn reconstruct_path(parents: &Grid<Option<(Point, Direction)>>, goal: Point) -> Vec<Direction> {
    let mut path = Vec::new();
    let mut current = goal;
    while let Some((parent, direction)) = parents[current] {
        path.push(direction);
        current = parent;
    }
    path.reverse();
    path
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::maze::Walls;

    #[test]
    fn test_open_room_prefers_enumeration_order() {
        let mut maze = Maze::from_cells(3, 3, vec![Walls::OPEN; 9]).unwrap();
        maze.enforce_borders();
        // East is tried before South, so the route hugs the top row first.
        assert_eq!(
            solve_bfs(&maze, (0, 0), (2, 2)),
            Some(vec![
                Direction::East,
                Direction::East,
                Direction::South,
                Direction::South
            ])
        );
    }

    #[test]
    fn test_shortest_route_around_wall() {
        // The top row cells only connect through the bottom row
        let mut maze = Maze::new(3, 2);
        maze.remove_wall((0, 0), Direction::South);
        maze.remove_wall((0, 1), Direction::East);
        maze.remove_wall((1, 1), Direction::East);
        maze.remove_wall((2, 1), Direction::North);
        maze.remove_wall((1, 1), Direction::North);
        assert_eq!(
            solve_bfs(&maze, (0, 0), (2, 0)),
            Some(vec![
                Direction::South,
                Direction::East,
                Direction::East,
                Direction::North
            ])
        );
        assert_eq!(
            solve_bfs(&maze, (0, 0), (1, 0)),
            Some(vec![Direction::South, Direction::East, Direction::North])
        );
    }

    #[test]
    fn test_unreachable_and_out_of_bounds() {
        let maze = Maze::new(2, 2);
        assert_eq!(solve_bfs(&maze, (0, 0), (1, 1)), None);
        assert_eq!(solve_bfs(&maze, (0, 0), (2, 2)), None);
        assert_eq!(solve_bfs(&maze, (1, 1), (1, 1)), Some(vec![]));
    }
}
