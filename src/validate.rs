use std::collections::{BTreeSet, VecDeque};

use crate::maze::{Direction, Grid, Maze, Point, get_neighbors};

/// Result of the connectivity check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connectivity {
    /// Cells that are not fully closed
    pub open_cells: usize,
    /// Open cells the flood fill could not reach, sorted by `(x, y)`
    pub unreachable: BTreeSet<Point>,
}

impl Connectivity {
    pub fn is_connected(&self) -> bool {
        self.unreachable.is_empty()
    }
}

/// Why a maze is not perfect.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Imperfection {
    #[error("Maze is not connected: {unreachable} unreachable cell(s)")]
    Disconnected { unreachable: usize },
    #[error(
        "Not a perfect maze: {edges} edges for {vertices} vertices (expected {})",
        .vertices.saturating_sub(1)
    )]
    EdgeCount { edges: usize, vertices: usize },
}

/// Outcome of [`validate_maze`]: a verdict plus every message produced along the way.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationReport {
    pub ok: bool,
    pub messages: Vec<String>,
}

/// Marks every cell reachable from `start` through legal moves.
pub fn flood_fill(maze: &Maze, start: Point) -> Grid<bool> {
    let mut reached = Grid::new(maze.width(), maze.height(), false);
    if !maze.is_in_bounds(start) {
        return reached;
    }
    reached[start] = true;
    let mut queue = VecDeque::from([start]);
    while let Some(cell) = queue.pop_front() {
        for (next, _) in get_neighbors(cell, maze) {
            if !reached[next] {
                reached[next] = true;
                queue.push_back(next);
            }
        }
    }
    reached
}

/// Flood fills from the first open cell and reports every open cell left unreached.
/// Fully closed cells are excluded cells and do not count.
pub fn check_connectivity(maze: &Maze) -> Connectivity {
    let open = maze
        .points()
        .filter(|&p| !maze.is_closed(p))
        .collect::<Vec<_>>();
    let Some(&seed) = open.first() else {
        return Connectivity {
            open_cells: 0,
            unreachable: BTreeSet::new(),
        };
    };

    let reached = flood_fill(maze, seed);
    Connectivity {
        open_cells: open.len(),
        unreachable: open.into_iter().filter(|&p| !reached[p]).collect(),
    }
}

/// Number of open passages between open cells. Only east and south moves are counted, so
/// every passage is counted once.
pub fn count_open_edges(maze: &Maze) -> usize {
    maze.points()
        .filter(|&p| !maze.is_closed(p))
        .map(|p| {
            [Direction::East, Direction::South]
                .into_iter()
                .filter(|&d| maze.can_move(p, d))
                .count()
        })
        .sum()
}

/// A perfect maze is connected and has exactly one fewer passage than open cells, i.e.
/// its open cells form a spanning tree.
pub fn check_perfect(maze: &Maze) -> Result<(), Imperfection> {
    let connectivity = check_connectivity(maze);
    if !connectivity.is_connected() {
        return Err(Imperfection::Disconnected {
            unreachable: connectivity.unreachable.len(),
        });
    }
    let vertices = connectivity.open_cells;
    let edges = count_open_edges(maze);
    if edges + 1 != vertices {
        return Err(Imperfection::EdgeCount { edges, vertices });
    }
    Ok(())
}

/// Runs the connectivity check and, when `perfect` is set, the perfect maze check.
/// Every message is kept so callers can log all of them.
pub fn validate_maze(maze: &Maze, perfect: bool) -> ValidationReport {
    let mut messages = Vec::new();

    let connectivity = check_connectivity(maze);
    if connectivity.is_connected() {
        messages.push("Connectivity: OK".to_string());
    } else {
        let cells = connectivity
            .unreachable
            .iter()
            .map(|(x, y)| format!("({},{})", x, y))
            .collect::<Vec<_>>()
            .join(", ");
        messages.push(format!(
            "Connectivity: FAIL - {} isolated cell(s): {}",
            connectivity.unreachable.len(),
            cells
        ));
    }
    let mut ok = connectivity.is_connected();

    if perfect {
        match check_perfect(maze) {
            Ok(()) => messages.push("Perfect maze: OK - Perfect maze confirmed".to_string()),
            Err(reason) => {
                messages.push(format!("Perfect maze: FAIL - {}", reason));
                ok = false;
            }
        }
    }

    for message in &messages {
        tracing::debug!("[validate] {}", message);
    }
    ValidationReport { ok, messages }
}
