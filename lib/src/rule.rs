//! The B3/S23 rule.
//!
//! For the notations, please see
//! [this article on LifeWiki](https://conwaylife.com/wiki/Conway%27s_Game_of_Life).

use crate::cells::{State, ALIVE, DEAD};

/// Which branch of the rule decides the next state of a cell.
///
/// The branches are tried in the order they are listed here,
/// and the first match wins.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Transition {
    /// Fewer than 2 living neighbors: the cell dies.
    Underpopulation,
    /// More than 3 living neighbors: the cell dies.
    Overpopulation,
    /// A dead cell with exactly 3 living neighbors becomes alive.
    Reproduction,
    /// Anything else: the cell keeps its state.
    Stasis,
}

impl Transition {
    /// Finds the branch for a cell with `state` and `live` living neighbors.
    #[inline]
    pub fn of(state: State, live: u8) -> Self {
        if live < 2 {
            Transition::Underpopulation
        } else if live > 3 {
            Transition::Overpopulation
        } else if state == DEAD && live == 3 {
            Transition::Reproduction
        } else {
            Transition::Stasis
        }
    }

    /// The state of the cell in the next generation.
    #[inline]
    pub fn apply(self, state: State) -> State {
        match self {
            Transition::Underpopulation | Transition::Overpopulation => DEAD,
            Transition::Reproduction => ALIVE,
            Transition::Stasis => state,
        }
    }
}

/// The state in the next generation of a cell with `state`
/// and `live` living neighbors.
#[inline]
pub fn next_state(state: State, live: u8) -> State {
    Transition::of(state, live).apply(state)
}
