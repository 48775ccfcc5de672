//! Text rendering of a grid.

use crate::{cells::State, error::Error, grid::Grid};
use std::fmt::{self, Debug, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The two-character tokens used to draw cells.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(try_from = "RawTokens", into = "RawTokens"))]
pub struct Tokens {
    alive: String,
    dead: String,
}

impl Tokens {
    /// Creates tokens for living and dead cells.
    ///
    /// Returns an error unless each token is exactly two characters long,
    /// so that every frame of a grid has the same shape.
    pub fn new<S: Into<String>, T: Into<String>>(alive: S, dead: T) -> Result<Self, Error> {
        let alive = alive.into();
        let dead = dead.into();
        for token in [&alive, &dead] {
            if token.chars().count() != 2 {
                return Err(Error::InvalidToken(token.clone()));
            }
        }
        Ok(Tokens { alive, dead })
    }

    /// The token for living cells.
    pub fn alive(&self) -> &str {
        &self.alive
    }

    /// The token for dead cells.
    pub fn dead(&self) -> &str {
        &self.dead
    }
}

/// `"+ "` for living cells, two spaces for dead cells.
impl Default for Tokens {
    fn default() -> Self {
        Tokens {
            alive: String::from("+ "),
            dead: String::from("  "),
        }
    }
}

/// The unchecked form of [`Tokens`] as it appears in configuration files.
#[cfg(feature = "serde")]
#[derive(Serialize, Deserialize)]
struct RawTokens {
    alive: String,
    dead: String,
}

#[cfg(feature = "serde")]
impl TryFrom<RawTokens> for Tokens {
    type Error = Error;

    fn try_from(raw: RawTokens) -> Result<Self, Self::Error> {
        Tokens::new(raw.alive, raw.dead)
    }
}

#[cfg(feature = "serde")]
impl From<Tokens> for RawTokens {
    fn from(tokens: Tokens) -> Self {
        RawTokens {
            alive: tokens.alive,
            dead: tokens.dead,
        }
    }
}

impl Grid {
    /// Renders each row as a string, using the given tokens.
    pub fn render_rows<'a>(&'a self, tokens: &'a Tokens) -> impl Iterator<Item = String> + 'a {
        self.rows().map(move |row| {
            row.iter()
                .map(|&state| match state {
                    State::Alive => tokens.alive(),
                    State::Dead => tokens.dead(),
                })
                .collect()
        })
    }

    /// Renders the grid with the given tokens.
    ///
    /// One line per row, each row terminated by a line break.
    pub fn render_with(&self, tokens: &Tokens) -> String {
        let mut str = String::with_capacity((2 * self.width() + 1) * self.height());
        for row in self.render_rows(tokens) {
            str.push_str(&row);
            str.push('\n');
        }
        str
    }

    /// Renders the grid with the default tokens: `"+ "` for living cells,
    /// two spaces for dead cells.
    pub fn render(&self) -> String {
        self.render_with(&Tokens::default())
    }

    /// Displays the grid in
    /// [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// * **Dead** cells are represented by `.`;
    /// * **Living** cells are represented by `O`.
    pub fn plaintext(&self) -> String {
        let mut str = String::with_capacity((self.width() + 1) * self.height());
        for row in self.rows() {
            str.extend(row.iter().map(|&state| match state {
                State::Alive => 'O',
                State::Dead => '.',
            }));
            str.push('\n');
        }
        str
    }
}

impl Display for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render())
    }
}

impl Debug for Grid {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(f, "Grid {}x{}", self.width(), self.height())?;
        f.write_str(&self.plaintext())
    }
}
