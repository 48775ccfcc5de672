//! The grid.

use crate::{
    cells::{Coord, State, ALIVE, DEAD, NBHD},
    error::{Error, ShapeError},
    rule::next_state,
};
use log::trace;

/// A fixed-size rectangular grid of cells.
///
/// The width and height are set once at construction and never change.
/// There is no wrap-around: cells outside the grid do not exist,
/// so cells on the border have fewer neighbors.
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct Grid {
    /// Number of columns.
    width: usize,

    /// Number of rows.
    height: usize,

    /// All cells, row by row.
    ///
    /// The cell at `(x, y)` is at index `y * width + x`.
    cells: Box<[State]>,
}

impl Grid {
    /// Creates a new grid from a matrix of states, row by row.
    ///
    /// Returns an error if the matrix is empty, or if its rows
    /// do not all have the same length.
    pub fn new(rows: Vec<Vec<State>>) -> Result<Self, Error> {
        let (width, height) = Self::check_shape(rows.iter().map(Vec::len))?;
        let cells = rows.into_iter().flatten().collect();
        Ok(Grid {
            width,
            height,
            cells,
        })
    }

    /// Creates a new grid from a matrix of `0` / `1` values, row by row.
    pub fn from_bits<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, Error> {
        let (width, height) = Self::check_shape(rows.iter().map(|row| row.as_ref().len()))?;
        let mut cells = Vec::with_capacity(width * height);
        for (y, row) in rows.iter().enumerate() {
            for (x, &bit) in row.as_ref().iter().enumerate() {
                cells.push(State::from_bit(bit, (x, y))?);
            }
        }
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }

    /// Creates a grid of the given size where every cell is dead.
    pub fn dead(width: usize, height: usize) -> Result<Self, Error> {
        if width == 0 || height == 0 {
            return Err(ShapeError::Empty.into());
        }
        Ok(Grid {
            width,
            height,
            cells: Self::alloc(width, height)?.into_boxed_slice(),
        })
    }

    /// Allocates `width * height` dead cells.
    ///
    /// Fails with [`ShapeError::TooLarge`] instead of panicking or aborting
    /// when the size overflows or the memory cannot be reserved.
    fn alloc(width: usize, height: usize) -> Result<Vec<State>, ShapeError> {
        let len = width.checked_mul(height).ok_or(ShapeError::TooLarge)?;
        let mut cells = Vec::new();
        cells.try_reserve_exact(len).map_err(|_| ShapeError::TooLarge)?;
        cells.resize(len, DEAD);
        Ok(cells)
    }

    /// Creates a grid of the given size whose living cells are at `alive`.
    ///
    /// Coordinates outside the grid are ignored.
    pub fn with_alive<I>(width: usize, height: usize, alive: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = Coord>,
    {
        let mut grid = Grid::dead(width, height)?;
        for (x, y) in alive {
            if x < width && y < height {
                grid.cells[y * width + x] = ALIVE;
            }
        }
        Ok(grid)
    }

    /// Checks that the row lengths describe a non-empty rectangle,
    /// and returns `(width, height)`.
    fn check_shape<I: Iterator<Item = usize>>(mut lens: I) -> Result<(usize, usize), ShapeError> {
        let width = lens.next().ok_or(ShapeError::Empty)?;
        if width == 0 {
            return Err(ShapeError::Empty);
        }
        let mut height = 1;
        for len in lens {
            if len != width {
                return Err(ShapeError::Ragged {
                    row: height,
                    len,
                    width,
                });
            }
            height += 1;
        }
        Ok((width, height))
    }

    /// Number of columns.
    #[inline]
    pub fn width(&self) -> usize {
        self.width
    }

    /// Number of rows.
    #[inline]
    pub fn height(&self) -> usize {
        self.height
    }

    /// Gets the state of a cell. Returns `None` if there is no such cell.
    #[inline]
    pub fn get(&self, (x, y): Coord) -> Option<State> {
        if x < self.width && y < self.height {
            Some(self.cells[y * self.width + x])
        } else {
            None
        }
    }

    /// An iterator over the rows of the grid.
    pub fn rows(&self) -> impl Iterator<Item = &[State]> + '_ {
        self.cells.chunks(self.width)
    }

    /// Number of living cells.
    pub fn population(&self) -> usize {
        self.cells.iter().filter(|state| state.is_alive()).count()
    }

    /// The coordinates of the neighbors of a cell that lie within the grid.
    ///
    /// A corner cell has at most 3 of them, an edge cell at most 5.
    pub fn neighbors(&self, (x, y): Coord) -> impl Iterator<Item = Coord> + '_ {
        NBHD.iter().filter_map(move |&(dx, dy)| {
            let nx = x.checked_add_signed(dx)?;
            let ny = y.checked_add_signed(dy)?;
            (nx < self.width && ny < self.height).then_some((nx, ny))
        })
    }

    /// Number of living neighbors of a cell.
    pub fn live_neighbors(&self, coord: Coord) -> u8 {
        self.neighbors(coord)
            .filter(|&(x, y)| self.cells[y * self.width + x].is_alive())
            .count() as u8
    }

    /// Computes the next generation.
    ///
    /// Every cell is computed from this grid alone, and the result is
    /// written to a new grid, so no new state can affect the neighbor
    /// count of another cell in the same step.
    pub fn step(&self) -> Grid {
        let mut cells = Vec::with_capacity(self.cells.len());
        for y in 0..self.height {
            for x in 0..self.width {
                let state = self.cells[y * self.width + x];
                cells.push(next_state(state, self.live_neighbors((x, y))));
            }
        }
        let next = Grid {
            width: self.width,
            height: self.height,
            cells: cells.into_boxed_slice(),
        };
        trace!(
            "step: population {} -> {}",
            self.population(),
            next.population()
        );
        next
    }

    /// Returns a copy of the grid surrounded by `margin` dead cells on every side.
    ///
    /// Returns an error if the new grid would be too large.
    pub fn with_margin(&self, margin: usize) -> Result<Grid, Error> {
        if margin == 0 {
            return Ok(self.clone());
        }
        let grow = |len: usize| {
            margin
                .checked_mul(2)
                .and_then(|m| m.checked_add(len))
                .ok_or(ShapeError::TooLarge)
        };
        let width = grow(self.width)?;
        let height = grow(self.height)?;
        let mut cells = Self::alloc(width, height)?;
        for (y, row) in self.rows().enumerate() {
            let start = (y + margin) * width + margin;
            cells[start..start + self.width].copy_from_slice(row);
        }
        Ok(Grid {
            width,
            height,
            cells: cells.into_boxed_slice(),
        })
    }
}
