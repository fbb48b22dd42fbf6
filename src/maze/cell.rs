use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Wall mask of a single maze cell. A set bit means a wall blocks that side.
    #[derive(Default, Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct Walls: u8 {
        const NORTH = 0b0001;
        const EAST  = 0b0010;
        const SOUTH = 0b0100;
        const WEST  = 0b1000;
    }
}

impl Walls {
    /// A cell walled in on all four sides. Excluded cells carry this mask.
    pub const CLOSED: Walls = Walls::all();
    /// A cell with no walls at all.
    pub const OPEN: Walls = Walls::empty();

    /// Whether there is a wall on the `direction` side of the cell.
    pub fn has(self, direction: Direction) -> bool {
        self.contains(direction.flag())
    }

    /// Whether all four walls are present.
    pub fn is_closed(self) -> bool {
        self == Walls::CLOSED
    }
}

impl From<Direction> for Walls {
    fn from(direction: Direction) -> Self {
        direction.flag()
    }
}

/// One of the four cardinal directions. Each variant maps onto a single wall bit.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North = 1,
    East = 2,
    South = 4,
    West = 8,
}

impl Direction {
    /// Fixed enumeration order. Neighbor expansion and therefore BFS tie-breaking follow it.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// The wall bit this direction corresponds to.
    pub fn flag(self) -> Walls {
        Walls::from_bits_truncate(self as u8)
    }

    /// Unit offset `(dx, dy)`; y grows downwards.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (0, -1),
            Direction::East => (1, 0),
            Direction::South => (0, 1),
            Direction::West => (-1, 0),
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::North => Direction::South,
            Direction::South => Direction::North,
            Direction::East => Direction::West,
            Direction::West => Direction::East,
        }
    }

    /// Single upper-case letter used in compact path strings.
    pub fn letter(self) -> char {
        match self {
            Direction::North => 'N',
            Direction::East => 'E',
            Direction::South => 'S',
            Direction::West => 'W',
        }
    }

    /// Parses a direction letter, case-insensitive.
    pub fn from_letter(letter: char) -> Option<Direction> {
        match letter.to_ascii_uppercase() {
            'N' => Some(Direction::North),
            'E' => Some(Direction::East),
            'S' => Some(Direction::South),
            'W' => Some(Direction::West),
            _ => None,
        }
    }
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.letter())
    }
}
