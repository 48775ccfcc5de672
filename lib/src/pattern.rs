//! Initial patterns.
//!
//! Built-in presets, readers for pattern files,
//! and reproducible random soups.

use crate::{
    cells::{Coord, State},
    error::Error,
    grid::Grid,
};
use educe::Educe;
use log::debug;
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::{
    fmt::{self, Display, Formatter},
    str::FromStr,
};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Built-in patterns, each placed on a board with enough room to run.
#[derive(Clone, Copy, Debug, Educe, PartialEq, Eq, Hash)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Pattern {
    /// A period 15 oscillator on a 20x19 board.
    #[educe(Default)]
    Pentadecathlon,

    /// A period 2 oscillator on a 5x5 board.
    Blinker,

    /// A still life on a 4x4 board.
    Block,

    /// A spaceship on a 10x10 board, travelling towards the bottom right corner.
    Glider,

    /// A period 2 oscillator on a 6x6 board.
    Toad,

    /// A period 2 oscillator on a 6x6 board.
    Beacon,
}

impl Pattern {
    /// All built-in patterns.
    pub const ALL: [Pattern; 6] = [
        Pattern::Pentadecathlon,
        Pattern::Blinker,
        Pattern::Block,
        Pattern::Glider,
        Pattern::Toad,
        Pattern::Beacon,
    ];

    /// The name of the pattern, in lowercase.
    pub fn name(self) -> &'static str {
        match self {
            Pattern::Pentadecathlon => "pentadecathlon",
            Pattern::Blinker => "blinker",
            Pattern::Block => "block",
            Pattern::Glider => "glider",
            Pattern::Toad => "toad",
            Pattern::Beacon => "beacon",
        }
    }

    /// `(width, height)` of the board and the living cells on it.
    fn board(self) -> (usize, usize, &'static [Coord]) {
        match self {
            Pattern::Pentadecathlon => (
                20,
                19,
                &[
                    (7, 8),
                    (12, 8),
                    (5, 9),
                    (6, 9),
                    (8, 9),
                    (9, 9),
                    (10, 9),
                    (11, 9),
                    (13, 9),
                    (14, 9),
                    (7, 10),
                    (12, 10),
                ],
            ),
            Pattern::Blinker => (5, 5, &[(1, 2), (2, 2), (3, 2)]),
            Pattern::Block => (4, 4, &[(1, 1), (2, 1), (1, 2), (2, 2)]),
            Pattern::Glider => (10, 10, &[(2, 1), (3, 2), (1, 3), (2, 3), (3, 3)]),
            Pattern::Toad => (6, 6, &[(2, 2), (3, 2), (4, 2), (1, 3), (2, 3), (3, 3)]),
            Pattern::Beacon => (
                6,
                6,
                &[
                    (1, 1),
                    (2, 1),
                    (1, 2),
                    (2, 2),
                    (3, 3),
                    (4, 3),
                    (3, 4),
                    (4, 4),
                ],
            ),
        }
    }

    /// Builds the board of the pattern.
    pub fn grid(self) -> Grid {
        let (width, height, alive) = self.board();
        Grid::with_alive(width, height, alive.iter().copied())
            .unwrap_or_else(|_| unreachable!("built-in boards are non-empty"))
    }
}

impl Display for Pattern {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Pattern {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Pattern::ALL
            .into_iter()
            .find(|pattern| pattern.name().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| Error::UnknownPattern(s.to_string()))
    }
}

/// Reads a pattern in [Plaintext](https://conwaylife.com/wiki/Plaintext) format,
/// or as a matrix of `0` and `1`.
///
/// * Lines starting with `!` are comments;
/// * **Dead** cells are `.` or `0`;
/// * **Living** cells are `O`, `o`, `*` or `1`;
/// * Whitespace is ignored.
///
/// As in `.cells` files, trailing dead cells may be omitted:
/// short rows are padded with dead cells to the width of the longest row,
/// and a blank line is a row of dead cells. Blank lines at the end are dropped.
pub fn parse_plaintext(text: &str) -> Result<Grid, Error> {
    let mut rows: Vec<Vec<State>> = Vec::new();
    for (n, line) in text.lines().enumerate() {
        if line.starts_with('!') {
            continue;
        }
        let row = line
            .chars()
            .filter(|c| !c.is_whitespace())
            .map(|c| match c {
                '.' | '0' => Ok(State::Dead),
                'O' | 'o' | '*' | '1' => Ok(State::Alive),
                _ => Err(Error::ParsePattern(format!(
                    "unexpected character {:?} on line {}",
                    c,
                    n + 1
                ))),
            })
            .collect::<Result<Vec<_>, _>>()?;
        rows.push(row);
    }
    while rows.last().map_or(false, Vec::is_empty) {
        rows.pop();
    }
    let width = rows.iter().map(Vec::len).max().unwrap_or(0);
    for row in &mut rows {
        row.resize(width, State::Dead);
    }
    let grid = Grid::new(rows)?;
    debug!(
        "Read a {}x{} plaintext pattern with {} living cells",
        grid.width(),
        grid.height(),
        grid.population()
    );
    Ok(grid)
}

/// Reads a pattern in [RLE](https://conwaylife.com/wiki/Rle) format.
///
/// The size of the grid comes from the header line `x = .., y = ..`.
/// Without a header, the grid is the bounding box of the living cells.
/// Only two-state patterns are supported.
#[cfg(feature = "read-rle")]
pub fn parse_rle(text: &str) -> Result<Grid, Error> {
    use crate::error::ShapeError;
    use ca_formats::{rle::Rle, CellData};

    let rle = Rle::new(text).map_err(|e| Error::ParsePattern(e.to_string()))?;
    let header = match rle.header_data() {
        Some(header) => {
            let size = |len: u64| usize::try_from(len).map_err(|_| ShapeError::TooLarge);
            Some((size(header.x)?, size(header.y)?))
        }
        None => None,
    };
    let mut alive = Vec::new();
    for cell in rle {
        let CellData {
            position: (x, y),
            state,
        } = cell.map_err(|e| Error::ParsePattern(e.to_string()))?;
        match state {
            0 => continue,
            1 => {}
            _ => {
                return Err(Error::ParsePattern(format!(
                    "cell at ({}, {}) has state {}, only two-state patterns are supported",
                    x, y, state
                )))
            }
        }
        if x < 0 || y < 0 {
            return Err(Error::ParsePattern(format!(
                "cell at ({}, {}) is outside the pattern",
                x, y
            )));
        }
        alive.push((x as usize, y as usize));
    }
    let (width, height) = header.unwrap_or_else(|| {
        alive.iter().fold((0, 0), |(w, h), &(x, y)| {
            (w.max(x + 1), h.max(y + 1))
        })
    });
    if let Some(&(x, y)) = alive.iter().find(|&&(x, y)| x >= width || y >= height) {
        return Err(Error::ParsePattern(format!(
            "cell at ({}, {}) is outside the {}x{} pattern",
            x, y, width, height
        )));
    }
    let grid = Grid::with_alive(width, height, alive)?;
    debug!(
        "Read a {}x{} RLE pattern with {} living cells",
        grid.width(),
        grid.height(),
        grid.population()
    );
    Ok(grid)
}

/// A random grid.
///
/// The same seed always gives the same grid.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct RandomSoup {
    /// Width.
    #[educe(Default = 20)]
    pub width: usize,

    /// Height.
    #[educe(Default = 20)]
    pub height: usize,

    /// The probability for each cell to be alive.
    #[educe(Default = 0.5)]
    pub density: f64,

    /// Seed of the random number generator.
    pub seed: u64,
}

impl RandomSoup {
    /// Sets up a soup of the given size, with default density and seed.
    pub fn new(width: usize, height: usize) -> Self {
        RandomSoup {
            width,
            height,
            ..RandomSoup::default()
        }
    }

    /// Sets the density.
    pub fn set_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    /// Sets the seed.
    pub fn set_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Generates the grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        if !(0.0..=1.0).contains(&self.density) {
            return Err(Error::InvalidDensity(self.density));
        }
        let mut rng = StdRng::seed_from_u64(self.seed);
        let (width, density) = (self.width, self.density);
        let coords = (0..self.height).flat_map(move |y| (0..width).map(move |x| (x, y)));
        Grid::with_alive(
            self.width,
            self.height,
            coords.filter(move |_| rng.gen_bool(density)),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ShapeError;

    #[test]
    fn names() {
        for pattern in Pattern::ALL {
            assert_eq!(pattern.name().parse::<Pattern>(), Ok(pattern));
        }
        assert_eq!("Glider".parse::<Pattern>(), Ok(Pattern::Glider));
        assert_eq!(
            "gosper".parse::<Pattern>(),
            Err(Error::UnknownPattern(String::from("gosper")))
        );
        assert_eq!(Pattern::default(), Pattern::Pentadecathlon);
    }

    #[test]
    fn boards() {
        let pentadecathlon = Pattern::Pentadecathlon.grid();
        assert_eq!(pentadecathlon.width(), 20);
        assert_eq!(pentadecathlon.height(), 19);
        assert_eq!(pentadecathlon.population(), 12);
        assert_eq!(Pattern::Beacon.grid().population(), 8);
    }

    #[test]
    fn plaintext() {
        let text = "!Name: Glider\n.O.\n..O\nOOO\n";
        let grid = parse_plaintext(text).unwrap();
        assert_eq!(
            grid,
            Grid::from_bits(&[[0u8, 1, 0], [0, 0, 1], [1, 1, 1]]).unwrap()
        );
        assert_eq!(parse_plaintext(&grid.plaintext()), Ok(grid));
    }

    #[test]
    fn bit_matrix() {
        let grid = parse_plaintext("0 1 0\n0 1 0\n0 1 0\n").unwrap();
        assert_eq!(grid.width(), 3);
        assert_eq!(grid.height(), 3);
        assert_eq!(grid.population(), 3);
    }

    #[test]
    fn short_rows() {
        let beacon = parse_plaintext("!Name: Beacon\nOO\nOO\n..OO\n..OO\n").unwrap();
        assert_eq!(beacon.with_margin(1), Ok(Pattern::Beacon.grid()));

        let grid = parse_plaintext("O\n\n..O\n\n\n").unwrap();
        assert_eq!(
            grid,
            Grid::from_bits(&[[1u8, 0, 0], [0, 0, 0], [0, 0, 1]]).unwrap()
        );
    }

    #[test]
    fn bad_plaintext() {
        assert_eq!(
            parse_plaintext("..\n.x\n"),
            Err(Error::ParsePattern(String::from(
                "unexpected character 'x' on line 2"
            )))
        );
        assert_eq!(
            parse_plaintext("!only a comment\n"),
            Err(Error::InvalidGridShape(ShapeError::Empty))
        );
        assert_eq!(
            parse_plaintext("\n\n"),
            Err(Error::InvalidGridShape(ShapeError::Empty))
        );
    }

    #[cfg(feature = "read-rle")]
    #[test]
    fn rle() {
        let text = "#N Glider\nx = 5, y = 4, rule = B3/S23\nbo$2bo$3o!\n";
        let grid = parse_rle(text).unwrap();
        assert_eq!(grid.width(), 5);
        assert_eq!(grid.height(), 4);
        assert_eq!(grid.population(), 5);
        assert_eq!(grid.get((2, 1)), Some(State::Alive));
        assert_eq!(grid.get((2, 0)), Some(State::Dead));
    }

    #[cfg(feature = "read-rle")]
    #[test]
    fn rle_without_header() {
        let grid = parse_rle("#C no header\nbo$2bo$3o!\n").unwrap();
        assert_eq!(
            grid,
            Grid::from_bits(&[[0u8, 1, 0], [0, 0, 1], [1, 1, 1]]).unwrap()
        );
        assert_eq!(
            parse_rle("#C nothing alive\n3b!\n"),
            Err(Error::InvalidGridShape(ShapeError::Empty))
        );
    }

    #[cfg(feature = "read-rle")]
    #[test]
    fn bad_rle() {
        assert_eq!(
            parse_rle("x = 3, y = 1\noB!\n"),
            Err(Error::ParsePattern(String::from(
                "cell at (1, 0) has state 2, only two-state patterns are supported"
            )))
        );
        assert_eq!(
            parse_rle("x = 2, y = 2\n3o!\n"),
            Err(Error::ParsePattern(String::from(
                "cell at (2, 0) is outside the 2x2 pattern"
            )))
        );
        assert_eq!(
            parse_rle("x = 0, y = 0\n!\n"),
            Err(Error::InvalidGridShape(ShapeError::Empty))
        );
        assert_eq!(
            parse_rle("x = 4294967296, y = 4294967296\no!\n"),
            Err(Error::InvalidGridShape(ShapeError::TooLarge))
        );
    }

    #[test]
    fn soup() {
        let soup = RandomSoup::new(16, 8).set_seed(42).set_density(0.3);
        let grid = soup.grid().unwrap();
        assert_eq!(grid.width(), 16);
        assert_eq!(grid.height(), 8);
        assert_eq!(soup.grid(), Ok(grid));

        assert_eq!(RandomSoup::new(4, 4).set_density(0.0).grid().map(|g| g.population()), Ok(0));
        assert_eq!(RandomSoup::new(4, 4).set_density(1.0).grid().map(|g| g.population()), Ok(16));
        assert_eq!(
            RandomSoup::new(4, 4).set_density(1.5).grid(),
            Err(Error::InvalidDensity(1.5))
        );
        assert_eq!(
            RandomSoup::new(0, 4).grid(),
            Err(Error::InvalidGridShape(ShapeError::Empty))
        );
    }
}
