//! Error types for grid construction, generation and input handling.

use grid_util::Point;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GridError {
    #[error("{point} is outside the {rows}x{cols} grid")]
    OutOfBounds { point: Point, rows: usize, cols: usize },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("grid has no {0} cell")]
    MissingEndpoint(&'static str),

    #[error("no solvable grid after {attempts} wall batches")]
    NonTerminatingGeneration { attempts: usize },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GridError>;
