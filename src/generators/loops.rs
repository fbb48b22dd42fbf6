use rand::{Rng, seq::SliceRandom};

use crate::maze::{Direction, Grid, Maze, Point};

/// Share of closed interior walls knocked down when an imperfect maze is requested.
pub const DEFAULT_LOOP_RATIO: f64 = 0.08;

/// An interior wall, named from its west or north side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Edge {
    cell: Point,
    /// Either `East` or `South`
    direction: Direction,
}

impl Edge {
    /// Whether moving from `cell` towards `direction` crosses this wall, from either side.
    fn matches(self, cell: Point, direction: Direction, maze: &Maze) -> bool {
        (cell == self.cell && direction == self.direction)
            || (maze.neighbor(cell, direction) == Some(self.cell)
                && direction.opposite() == self.direction)
    }
}

/// Adds passages to a perfect maze so it gets loops, without ever opening a 2x2 block of
/// cells on all four of its inner walls.
///
/// Candidates are the closed walls between two unblocked cells. About `ratio` of them are
/// removed (at least one), walking the candidates in random order and skipping any whose
/// removal would finish an open 2x2 block. Returns the number of walls removed.
pub fn add_extra_passages<R: Rng>(
    maze: &mut Maze,
    blocked: &Grid<bool>,
    rng: &mut R,
    ratio: f64,
) -> usize {
    let mut candidates = maze
        .points()
        .filter(|&cell| !blocked[cell])
        .flat_map(|cell| {
            [Direction::East, Direction::South]
                .into_iter()
                .map(move |direction| Edge { cell, direction })
        })
        .filter(|edge| {
            maze.neighbor(edge.cell, edge.direction)
                .is_some_and(|next| !blocked[next])
                && maze.has_wall(edge.cell, edge.direction)
        })
        .collect::<Vec<_>>();
    candidates.shuffle(rng);

    let target = ((candidates.len() as f64 * ratio) as usize).max(1);
    let mut removed = 0;
    for edge in candidates {
        if removed >= target {
            break;
        }
        if would_open_void(maze, edge) {
            continue;
        }
        maze.remove_wall(edge.cell, edge.direction);
        removed += 1;
    }

    tracing::debug!(
        "[loops] Removed {} extra walls (target {}, ratio {})",
        removed,
        target,
        ratio
    );
    removed
}

/// Checks every 2x2 window that contains both cells of `edge`: would it be fully open if
/// `edge` were removed?
fn would_open_void(maze: &Maze, edge: Edge) -> bool {
    let Some(next) = maze.neighbor(edge.cell, edge.direction) else {
        return false;
    };
    if maze.width() < 2 || maze.height() < 2 {
        return false;
    }
    let (x, y) = edge.cell;
    let (nx, ny) = next;
    // Window top left corners, clamped so the whole window stays inside the maze
    let min_ax = nx.max(x).saturating_sub(1);
    let max_ax = nx.min(x).min(maze.width() - 2);
    let min_ay = ny.max(y).saturating_sub(1);
    let max_ay = ny.min(y).min(maze.height() - 2);

    (min_ay..=max_ay)
        .flat_map(|ay| (min_ax..=max_ax).map(move |ax| (ax, ay)))
        .any(|corner| is_open_void(maze, corner, Some(edge)))
}

/// Whether the 2x2 block with top left cell `corner` has all four inner walls open.
/// `skip` is treated as already open.
fn is_open_void(maze: &Maze, corner: Point, skip: Option<Edge>) -> bool {
    let (ax, ay) = corner;
    [
        ((ax, ay), Direction::East),
        ((ax, ay + 1), Direction::East),
        ((ax, ay), Direction::South),
        ((ax + 1, ay), Direction::South),
    ]
    .into_iter()
    .all(|(cell, direction)| {
        skip.is_some_and(|edge| edge.matches(cell, direction, maze))
            || maze.can_move(cell, direction)
    })
}

/// Top left corners of every fully open 2x2 block.
pub fn find_open_voids(maze: &Maze) -> Vec<Point> {
    if maze.width() < 2 || maze.height() < 2 {
        return Vec::new();
    }
    maze.points()
        .filter(|&(x, y)| x + 1 < maze.width() && y + 1 < maze.height())
        .filter(|&corner| is_open_void(maze, corner, None))
        .collect()
}
