//! Simulation configuration.

use crate::{
    error::Error,
    grid::Grid,
    pattern::{parse_plaintext, Pattern, RandomSoup},
    render::Tokens,
};
use educe::Educe;
use from_variants::FromVariants;
use log::debug;
use std::time::Duration;

#[cfg(feature = "read-rle")]
use crate::pattern::parse_rle;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Where the initial grid comes from.
#[derive(Clone, Debug, Educe, FromVariants, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum PatternSource {
    /// A built-in pattern.
    #[educe(Default)]
    Builtin(Pattern),

    /// A matrix of `0` and `1`, row by row.
    Cells(Vec<Vec<u8>>),

    /// A pattern in [Plaintext](https://conwaylife.com/wiki/Plaintext) format.
    ///
    /// See [`parse_plaintext`] for the accepted syntax.
    #[from_variants(skip)]
    Plaintext(String),

    /// A pattern in [RLE](https://conwaylife.com/wiki/Rle) format.
    ///
    /// Requires the `read-rle` feature.
    #[from_variants(skip)]
    Rle(String),

    /// A random soup.
    Random(RandomSoup),
}

impl PatternSource {
    /// Builds the grid described by the source.
    pub fn grid(&self) -> Result<Grid, Error> {
        match self {
            PatternSource::Builtin(pattern) => Ok(pattern.grid()),
            PatternSource::Cells(rows) => Grid::from_bits(rows),
            PatternSource::Plaintext(text) => parse_plaintext(text),
            #[cfg(feature = "read-rle")]
            PatternSource::Rle(text) => parse_rle(text),
            #[cfg(not(feature = "read-rle"))]
            PatternSource::Rle(_) => Err(Error::ParsePattern(String::from(
                "RLE support requires the `read-rle` feature",
            ))),
            PatternSource::Random(soup) => soup.grid(),
        }
    }
}

/// Simulation configuration.
///
/// The initial grid will be generated from this configuration,
/// and the driver paces and draws the generations according to it.
#[derive(Clone, Debug, Educe, PartialEq)]
#[educe(Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct Config {
    /// The initial pattern.
    pub pattern: PatternSource,

    /// Number of dead cells added around the initial pattern on every side.
    pub margin: usize,

    /// Delay between two generations, in milliseconds.
    #[educe(Default = 1000)]
    pub interval_ms: u64,

    /// Number of generations to show, including the initial one.
    ///
    /// `None` means that it runs until it is interrupted.
    pub generations: Option<u64>,

    /// Tokens to draw the cells with.
    pub tokens: Tokens,
}

impl Config {
    /// Sets up a new configuration with the given initial pattern.
    pub fn new<P: Into<PatternSource>>(pattern: P) -> Self {
        Config {
            pattern: pattern.into(),
            ..Config::default()
        }
    }

    /// Sets the initial pattern.
    pub fn set_pattern<P: Into<PatternSource>>(mut self, pattern: P) -> Self {
        self.pattern = pattern.into();
        self
    }

    /// Sets the margin around the initial pattern.
    pub fn set_margin(mut self, margin: usize) -> Self {
        self.margin = margin;
        self
    }

    /// Sets the delay between two generations, in milliseconds.
    pub fn set_interval_ms(mut self, interval_ms: u64) -> Self {
        self.interval_ms = interval_ms;
        self
    }

    /// Sets the number of generations to show.
    pub fn set_generations<T: Into<Option<u64>>>(mut self, generations: T) -> Self {
        self.generations = generations.into();
        self
    }

    /// Sets the tokens to draw the cells with.
    pub fn set_tokens(mut self, tokens: Tokens) -> Self {
        self.tokens = tokens;
        self
    }

    /// Delay between two generations.
    pub fn interval(&self) -> Duration {
        Duration::from_millis(self.interval_ms)
    }

    /// Creates the initial grid from the configuration.
    /// Returns an error if the pattern does not describe a valid grid.
    pub fn grid(&self) -> Result<Grid, Error> {
        let grid = self.pattern.grid()?.with_margin(self.margin)?;
        debug!(
            "Initial grid: {}x{}, {} living cells",
            grid.width(),
            grid.height(),
            grid.population()
        );
        Ok(grid)
    }
}
