//! All kinds of errors in this crate.

use crate::cells::Coord;
use displaydoc::Display;
use thiserror::Error;

/// All kinds of errors in this crate.
#[derive(Clone, Debug, PartialEq, Display, Error)]
pub enum Error {
    /// Invalid grid shape: {0}
    InvalidGridShape(#[from] ShapeError),
    /// Cell at {0:?} has invalid state: {1}. Only 0 and 1 are allowed.
    InvalidState(Coord, u8),
    /// Invalid cell token {0:?}: a token must be exactly two characters.
    InvalidToken(String),
    /// Density should be between 0 and 1, got {0}.
    InvalidDensity(f64),
    /// Unable to parse pattern: {0}
    ParsePattern(String),
    /// Unknown pattern: {0:?}.
    UnknownPattern(String),
}

/// Ways in which an initial matrix fails to be a grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display, Error)]
pub enum ShapeError {
    /// the grid must have at least one row and one column.
    Empty,
    /// the grid is too large.
    TooLarge,
    /// row {row} has {len} cells, expected {width}.
    Ragged {
        /// Index of the offending row.
        row: usize,
        /// Length of the offending row.
        len: usize,
        /// Length of the first row.
        width: usize,
    },
}
