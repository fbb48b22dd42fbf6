pub mod cell;
pub mod grid;

pub use cell::{Direction, Walls};
pub use grid::Grid;

use crate::error::MazeError;

/// A cell coordinate `(x, y)`, with `(0, 0)` at the top left.
pub type Point = (u16, u16);

/// A rectangular maze. Every cell stores its own four wall bits, so each interior wall is
/// recorded twice: once on each side. All mutating operations touch both sides together.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Maze {
    grid: Grid<Walls>,
}

impl Maze {
    /// Creates a `width` x `height` maze with every wall in place.
    ///
    /// # Panics
    ///
    /// Panics if either dimension is zero. Use [`Maze::from_cells`] to get an error instead.
    pub fn new(width: u16, height: u16) -> Self {
        assert!(
            width > 0 && height > 0,
            "maze dimensions must be non-zero, got {width}x{height}"
        );
        Maze {
            grid: Grid::new(width, height, Walls::CLOSED),
        }
    }

    /// Builds a maze from row-major wall masks, e.g. one produced by another tool.
    ///
    /// The masks are taken as they are; no symmetry between neighbors is enforced.
    pub fn from_cells(width: u16, height: u16, cells: Vec<Walls>) -> Result<Self, MazeError> {
        if width == 0 || height == 0 {
            return Err(MazeError::InvalidDimensions { width, height });
        }
        let grid = Grid::from_vec(width, height, cells)
            .ok_or(MazeError::InvalidDimensions { width, height })?;
        Ok(Maze { grid })
    }

    /// Returns the height of the maze in cells.
    pub fn height(&self) -> u16 {
        self.grid.height()
    }

    /// Returns the width of the maze in cells.
    pub fn width(&self) -> u16 {
        self.grid.width()
    }

    /// Row-major wall masks.
    pub fn cells(&self) -> &[Walls] {
        self.grid.cells()
    }

    /// All coordinates in raster order.
    pub fn points(&self) -> impl Iterator<Item = Point> + use<> {
        self.grid.coords()
    }

    /// Checks if the given coordinate is within the bounds of the maze.
    pub fn is_in_bounds(&self, point: Point) -> bool {
        self.grid.is_in_bounds(point)
    }

    /// The cell one step away from `point` in `direction`, if it lies inside the maze.
    pub fn neighbor(&self, point: Point, direction: Direction) -> Option<Point> {
        let (x, y) = point;
        let candidate = match direction {
            Direction::North => (x, y.checked_sub(1)?),
            Direction::South => (x, y.checked_add(1)?),
            Direction::West => (x.checked_sub(1)?, y),
            Direction::East => (x.checked_add(1)?, y),
        };
        self.is_in_bounds(candidate).then_some(candidate)
    }

    pub fn has_wall(&self, point: Point, direction: Direction) -> bool {
        self.grid[point].has(direction)
    }

    /// Whether the cell is walled in on all four sides.
    pub fn is_closed(&self, point: Point) -> bool {
        self.grid[point].is_closed()
    }

    /// Removes the wall on the `direction` side of `point`, and the matching wall of the
    /// neighbor if there is one.
    ///
    /// # Panics
    /// If `point` is out of bounds.
    pub fn remove_wall(&mut self, point: Point, direction: Direction) {
        self.grid[point].remove(direction.flag());
        if let Some(next) = self.neighbor(point, direction) {
            self.grid[next].remove(direction.opposite().flag());
        }
    }

    /// Puts back the wall on the `direction` side of `point` and on the facing side of the
    /// neighbor, if there is one.
    ///
    /// # Panics
    /// If `point` is out of bounds.
    pub fn close_wall(&mut self, point: Point, direction: Direction) {
        self.grid[point].insert(direction.flag());
        if let Some(next) = self.neighbor(point, direction) {
            self.grid[next].insert(direction.opposite().flag());
        }
    }

    /// Walls the cell in completely. Neighbors get their facing wall set, so both sides
    /// keep agreeing.
    pub fn seal_cell(&mut self, point: Point) {
        Direction::ALL
            .into_iter()
            .for_each(|direction| self.close_wall(point, direction));
    }

    /// Closes the outward facing wall of every cell on the perimeter.
    pub fn enforce_borders(&mut self) {
        let (width, height) = (self.width(), self.height());
        (0..width).for_each(|x| {
            self.grid[(x, 0)].insert(Walls::NORTH);
            self.grid[(x, height - 1)].insert(Walls::SOUTH);
        });
        (0..height).for_each(|y| {
            self.grid[(0, y)].insert(Walls::WEST);
            self.grid[(width - 1, y)].insert(Walls::EAST);
        });
    }

    /// A move is legal only if neither the departing cell nor the arriving cell has a
    /// wall on the shared side.
    pub fn can_move(&self, point: Point, direction: Direction) -> bool {
        self.step(point, direction).is_some()
    }

    /// The cell reached by a legal move from `point` in `direction`.
    pub fn step(&self, point: Point, direction: Direction) -> Option<Point> {
        if !self.is_in_bounds(point) || self.has_wall(point, direction) {
            return None;
        }
        let next = self.neighbor(point, direction)?;
        (!self.has_wall(next, direction.opposite())).then_some(next)
    }

    /// Checks that every interior wall is recorded the same way on both of its sides.
    /// Returns the first disagreeing pair as `(cell, direction)` seen from the west/north cell.
    pub fn find_asymmetric_wall(&self) -> Option<(Point, Direction)> {
        self.points().find_map(|point| {
            [Direction::East, Direction::South]
                .into_iter()
                .find(|&direction| {
                    self.neighbor(point, direction).is_some_and(|next| {
                        self.has_wall(point, direction) != self.has_wall(next, direction.opposite())
                    })
                })
                .map(|direction| (point, direction))
        })
    }
}

impl std::ops::Index<Point> for Maze {
    type Output = Walls;

    fn index(&self, index: Point) -> &Self::Output {
        &self.grid[index]
    }
}

/// Get the legal moves out of a cell, in the fixed [`Direction::ALL`] order.
pub fn get_neighbors(point: Point, maze: &Maze) -> impl Iterator<Item = (Point, Direction)> + '_ {
    Direction::ALL
        .into_iter()
        .filter_map(move |direction| maze.step(point, direction).map(|next| (next, direction)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_maze_is_closed() {
        let maze = Maze::new(4, 3);
        assert_eq!(maze.width(), 4);
        assert_eq!(maze.height(), 3);
        assert!(maze.points().all(|p| maze.is_closed(p)));
    }

    #[test]
    #[should_panic(expected = "maze dimensions must be non-zero")]
    fn test_new_rejects_zero_height() {
        Maze::new(3, 0);
    }

    #[test]
    fn test_remove_wall_clears_both_sides() {
        let mut maze = Maze::new(5, 5);
        maze.remove_wall((1, 1), Direction::East);
        assert!(!maze.has_wall((1, 1), Direction::East));
        assert!(!maze.has_wall((2, 1), Direction::West));
        assert!(maze.can_move((1, 1), Direction::East));
        assert!(maze.can_move((2, 1), Direction::West));
        assert_eq!(maze.find_asymmetric_wall(), None);
    }

    #[test]
    fn test_close_wall_sets_both_sides() {
        let mut maze = Maze::new(3, 3);
        maze.remove_wall((1, 1), Direction::South);
        maze.close_wall((1, 2), Direction::North);
        assert!(maze.has_wall((1, 1), Direction::South));
        assert!(maze.has_wall((1, 2), Direction::North));
    }

    #[test]
    fn test_out_of_bounds() {
        let maze = Maze::new(5, 5);
        assert!(!maze.is_in_bounds((5, 5)));
        assert!(!maze.is_in_bounds((0, 5)));
        assert!(!maze.is_in_bounds((5, 0)));
        assert!(maze.is_in_bounds((4, 4)));
        assert_eq!(maze.neighbor((0, 0), Direction::North), None);
        assert_eq!(maze.neighbor((0, 0), Direction::West), None);
        assert_eq!(maze.neighbor((4, 4), Direction::East), None);
        assert_eq!(maze.neighbor((4, 3), Direction::South), Some((4, 4)));
    }

    #[test]
    fn test_move_needs_both_sides_open() {
        let mut cells = vec![Walls::CLOSED; 2];
        // Only the left cell agrees that there is a passage.
        cells[0] = Walls::CLOSED - Walls::EAST;
        let maze = Maze::from_cells(2, 1, cells).unwrap();
        assert!(!maze.can_move((0, 0), Direction::East));
        assert!(!maze.can_move((1, 0), Direction::West));
        assert_eq!(maze.find_asymmetric_wall(), Some(((0, 0), Direction::East)));
    }

    #[test]
    fn test_enforce_borders() {
        let mut maze = Maze::from_cells(3, 2, vec![Walls::OPEN; 6]).unwrap();
        maze.enforce_borders();
        assert_eq!(maze[(0, 0)], Walls::NORTH | Walls::WEST);
        assert_eq!(maze[(1, 0)], Walls::NORTH);
        assert_eq!(maze[(2, 1)], Walls::SOUTH | Walls::EAST);
    }

    #[test]
    fn test_seal_cell() {
        let mut maze = Maze::from_cells(3, 3, vec![Walls::OPEN; 9]).unwrap();
        maze.seal_cell((1, 1));
        assert!(maze.is_closed((1, 1)));
        assert!(maze.has_wall((1, 0), Direction::South));
        assert!(maze.has_wall((0, 1), Direction::East));
        assert!(maze.has_wall((2, 1), Direction::West));
        assert!(maze.has_wall((1, 2), Direction::North));
    }

    #[test]
    fn test_get_neighbors_order() {
        let maze = Maze::from_cells(3, 3, vec![Walls::OPEN; 9]).unwrap();
        let moves = get_neighbors((1, 1), &maze).collect::<Vec<_>>();
        assert_eq!(
            moves,
            vec![
                ((1, 0), Direction::North),
                ((2, 1), Direction::East),
                ((1, 2), Direction::South),
                ((0, 1), Direction::West),
            ]
        );
    }

    #[test]
    fn test_from_cells_rejects_bad_shape() {
        assert!(Maze::from_cells(0, 3, vec![]).is_err());
        assert!(Maze::from_cells(2, 2, vec![Walls::OPEN; 3]).is_err());
    }
}
