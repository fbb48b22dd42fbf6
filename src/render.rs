use std::collections::HashSet;

use crossterm::style::{Color, Stylize};

use crate::maze::{Direction, Maze, Point};

/// Width of a cell body in character widths.
pub const CELL_WIDTH: usize = 2;

/// What a cell body shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Body {
    Entry,
    Exit,
    Pattern,
    Route,
    Empty,
}

impl Body {
    fn render(self, use_color: bool) -> String {
        let (symbol, color) = match self {
            Body::Entry => ("O ", Color::Cyan),
            Body::Exit => ("X ", Color::Red),
            Body::Pattern => ("##", Color::DarkYellow),
            Body::Route => ("o ", Color::Green),
            Body::Empty => ("  ", Color::Reset),
        };

        #[cfg(debug_assertions)]
        {
            use unicode_width::UnicodeWidthStr;
            assert_eq!(
                symbol.width(),
                CELL_WIDTH,
                "Each cell body must occupy exactly two character widths."
            );
        }

        if use_color && self != Body::Empty {
            symbol.with(color).to_string()
        } else {
            symbol.to_string()
        }
    }
}

/// Cells visited when walking `path` from `start`. Stops early at the first illegal step.
fn route_cells(maze: &Maze, start: Point, path: &[Direction]) -> HashSet<Point> {
    let mut cells = HashSet::from([start]);
    let mut current = start;
    for &direction in path {
        match maze.step(current, direction) {
            Some(next) => {
                cells.insert(next);
                current = next;
            }
            None => break,
        }
    }
    cells
}

/// Renders the maze as text, one `+--+` line per row of north walls followed by one line
/// of cell bodies and west/east walls.
///
/// Markers: `O` entry, `X` exit, `##` excluded cell, `o` cell on `path`.
/// With `use_color` the markers and walls are styled with fixed terminal colors.
pub fn render_maze(
    maze: &Maze,
    entry: Option<Point>,
    exit: Option<Point>,
    path: Option<&[Direction]>,
    use_color: bool,
) -> String {
    let route = match (entry, path) {
        (Some(start), Some(steps)) => route_cells(maze, start, steps),
        _ => HashSet::new(),
    };
    let wall = |s: &str| {
        if use_color {
            s.with(Color::White).to_string()
        } else {
            s.to_string()
        }
    };

    let horizontal = |y: u16, side: Direction| {
        let mut line = String::new();
        for x in 0..maze.width() {
            line.push_str(&wall("+"));
            if maze.has_wall((x, y), side) {
                line.push_str(&wall("--"));
            } else {
                line.push_str("  ");
            }
        }
        line.push_str(&wall("+"));
        line
    };

    let mut lines = Vec::with_capacity(maze.height() as usize * 2 + 1);
    for y in 0..maze.height() {
        lines.push(horizontal(y, Direction::North));

        let mut row = String::new();
        for x in 0..maze.width() {
            let point = (x, y);
            row.push_str(&if maze.has_wall(point, Direction::West) {
                wall("|")
            } else {
                " ".to_string()
            });
            let body = if Some(point) == entry {
                Body::Entry
            } else if Some(point) == exit {
                Body::Exit
            } else if maze.is_closed(point) {
                Body::Pattern
            } else if route.contains(&point) {
                Body::Route
            } else {
                Body::Empty
            };
            row.push_str(&body.render(use_color));
        }
        let last = (maze.width() - 1, y);
        row.push_str(&if maze.has_wall(last, Direction::East) {
            wall("|")
        } else {
            " ".to_string()
        });
        lines.push(row);
    }
    lines.push(horizontal(maze.height() - 1, Direction::South));

    lines.join("\n")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_plain() {
        let mut maze = Maze::new(2, 2);
        maze.remove_wall((0, 0), Direction::East);
        maze.remove_wall((1, 0), Direction::South);
        let path = [Direction::East, Direction::South];
        let text = render_maze(&maze, Some((0, 0)), Some((1, 1)), Some(&path[..]), false);
        let expected = "\
+--+--+
|O  o |
+--+  +
|##|X |
+--+--+";
        assert_eq!(text, expected);
    }

    #[test]
    fn test_route_is_marked() {
        let mut maze = Maze::new(3, 1);
        maze.remove_wall((0, 0), Direction::East);
        maze.remove_wall((1, 0), Direction::East);
        let path = [Direction::East, Direction::East];
        let text = render_maze(&maze, Some((0, 0)), Some((2, 0)), Some(&path[..]), false);
        assert_eq!(text.lines().nth(1), Some("|O  o  X |"));
    }

    #[test]
    fn test_colored_output_keeps_layout() {
        let maze = Maze::new(1, 1);
        let text = render_maze(&maze, None, None, None, true);
        // Escape codes may be disabled through NO_COLOR, the symbols are always there.
        assert_eq!(text.lines().count(), 3);
        assert!(text.contains("##"));
    }
}
