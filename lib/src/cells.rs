//! Cells in the cellular automaton.

use crate::error::Error;
use std::ops::Not;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Possible states of a cell.
///
/// Interchangeable with the `0` / `1` domain via [`State::from_bit`]
/// and [`From<State>`](#impl-From<State>-for-u8).
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum State {
    /// The Dead state, `0`.
    #[default]
    Dead,
    /// The Alive state, `1`.
    Alive,
}

/// The Dead state.
pub const DEAD: State = State::Dead;
/// The Alive state.
pub const ALIVE: State = State::Alive;

impl State {
    /// Whether the cell is alive.
    #[inline]
    pub fn is_alive(self) -> bool {
        self == State::Alive
    }

    /// Converts a `0` / `1` value at `coord` into a state.
    ///
    /// Only `0` and `1` are valid states.
    pub fn from_bit(bit: u8, coord: Coord) -> Result<Self, Error> {
        match bit {
            0 => Ok(State::Dead),
            1 => Ok(State::Alive),
            _ => Err(Error::InvalidState(coord, bit)),
        }
    }
}

/// Flips the state.
impl Not for State {
    type Output = Self;

    #[inline]
    fn not(self) -> Self::Output {
        match self {
            State::Alive => State::Dead,
            State::Dead => State::Alive,
        }
    }
}

impl From<bool> for State {
    #[inline]
    fn from(alive: bool) -> Self {
        if alive {
            State::Alive
        } else {
            State::Dead
        }
    }
}

impl From<State> for u8 {
    #[inline]
    fn from(state: State) -> Self {
        match state {
            State::Dead => 0,
            State::Alive => 1,
        }
    }
}

/// The coordinates of a cell.
///
/// `(x-coordinate, y-coordinate)`, where `x` is the column and `y` the row.
/// Both coordinates are 0-indexed.
pub type Coord = (usize, usize);

/// Relative positions of the eight cells in the neighborhood.
///
/// Left, right, top, bottom, then the four diagonals.
pub(crate) const NBHD: [(isize, isize); 8] = [
    (-1, 0),
    (1, 0),
    (0, -1),
    (0, 1),
    (-1, -1),
    (-1, 1),
    (1, 1),
    (1, -1),
];
