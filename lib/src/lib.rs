//! __Lifeterm__ runs [Conway's Game of Life](https://conwaylife.com/wiki/Conway%27s_Game_of_Life)
//! on a fixed-size grid without wrap-around.
//!
//! This is the library. The command-line driver lives in the `lifeterm` crate.
//!
//! # Example
//!
//! ```rust
//! use lifeterm_lib::{Grid, Pattern};
//!
//! let blinker = Pattern::Blinker.grid();
//! let mut gens = blinker.clone().generations();
//! assert_eq!(gens.next(), Some(blinker.clone()));
//! assert_ne!(gens.next(), Some(blinker.clone()));
//! assert_eq!(gens.next(), Some(blinker));
//!
//! let grid = Grid::from_bits(&[[1u8, 0], [0, 1]]).unwrap();
//! assert_eq!(grid.render(), "+   \n  + \n");
//! ```

#![cfg_attr(docs_rs, feature(doc_cfg))]

mod cells;
mod config;
mod error;
mod generations;
mod grid;
mod pattern;
mod render;
pub mod rule;

pub use cells::{Coord, State, ALIVE, DEAD};
pub use config::{Config, PatternSource};
pub use error::{Error, ShapeError};
pub use generations::Generations;
pub use grid::Grid;
#[cfg(feature = "read-rle")]
#[cfg_attr(docs_rs, doc(cfg(feature = "read-rle")))]
pub use pattern::parse_rle;
pub use pattern::{parse_plaintext, Pattern, RandomSoup};
pub use render::Tokens;
