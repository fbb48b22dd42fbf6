use thiserror::Error;

use crate::maze::Point;

/// Which of the two designated cells an error refers to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Endpoint {
    Entry,
    Exit,
}

impl std::fmt::Display for Endpoint {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Endpoint::Entry => write!(f, "Entry"),
            Endpoint::Exit => write!(f, "Exit"),
        }
    }
}

/// Errors raised by maze construction and generation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MazeError {
    /// The requested grid has no cells, or the cell data does not match the dimensions.
    #[error("invalid maze dimensions {width}x{height}")]
    InvalidDimensions { width: u16, height: u16 },
    /// The entry or exit lies outside the grid.
    #[error("{which} {point:?} is out of bounds ({width}x{height})")]
    OutOfBounds {
        which: Endpoint,
        point: Point,
        width: u16,
        height: u16,
    },
    #[error("entry and exit must be different, both are {0:?}")]
    SameEntryExit(Point),
    /// The finished maze failed validation. Carries every validation message.
    #[error("generated maze failed validation: {}", .0.join("; "))]
    Validation(Vec<String>),
}

/// Errors raised while reading a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read config file: {0}")]
    Io(#[from] std::io::Error),
    #[error("line {line}: expected KEY=VALUE, got {content:?}")]
    Syntax { line: usize, content: String },
    #[error("line {line}: unknown key {key:?}")]
    UnknownKey { line: usize, key: String },
    #[error("line {line}: invalid value {value:?} for {key}: {reason}")]
    InvalidValue {
        line: usize,
        key: String,
        value: String,
        reason: String,
    },
}
