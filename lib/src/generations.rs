//! The sequence of generations.

use crate::grid::Grid;
use std::iter::FusedIterator;

/// An infinite iterator over the generations of a grid.
///
/// The first item is the initial grid, and each following item is
/// the [`step`](Grid::step) of the one before it. A generation is only
/// computed when it is asked for.
///
/// To restart, build a new iterator from the initial grid.
#[derive(Clone, Debug)]
pub struct Generations {
    /// The most recently yielded generation,
    /// or the initial grid if nothing was yielded yet.
    current: Grid,

    /// Index of the next generation to be yielded.
    generation: u64,
}

impl Generations {
    /// Creates the sequence starting from `grid`.
    pub fn new(grid: Grid) -> Self {
        Generations {
            current: grid,
            generation: 0,
        }
    }

    /// Index of the next generation to be yielded.
    ///
    /// The initial grid is generation `0`.
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

impl Iterator for Generations {
    type Item = Grid;

    fn next(&mut self) -> Option<Self::Item> {
        if self.generation > 0 {
            self.current = self.current.step();
        }
        self.generation += 1;
        Some(self.current.clone())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (usize::MAX, None)
    }
}

impl FusedIterator for Generations {}

impl Grid {
    /// The infinite sequence of generations starting from this grid.
    pub fn generations(self) -> Generations {
        Generations::new(self)
    }
}
