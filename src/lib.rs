//! Seeded maze generation and solving.
//!
//! A maze is a grid of cells, each holding its own four wall bits. [`generate_maze`] carves
//! a spanning tree around a decorative "42" region, optionally adds loops, seals the border
//! and validates the result. [`solve`] finds the shortest route between two cells.

pub mod config;
pub mod error;
pub mod generators;
pub mod maze;
pub mod render;
pub mod solvers;
pub mod validate;

pub use config::MazeConfig;
pub use error::{ConfigError, MazeError};
pub use generators::{Generation, generate_maze};
pub use maze::{Direction, Maze, Point, Walls};
pub use solvers::{path_to_string, solve};
pub use validate::{ValidationReport, validate_maze};
