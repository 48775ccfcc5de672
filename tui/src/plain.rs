//! Plain text output.

use crossterm::{
    cursor::MoveTo,
    queue,
    style::Print,
    terminal::{Clear, ClearType},
};
use lifeterm_lib::{Config, Grid};
use log::debug;
use std::{
    io::{self, Write},
    thread,
};

/// Writes each generation to `out`, after clearing the screen and moving
/// the cursor to the top left corner, and waits for the interval between
/// two generations.
///
/// Returns after `config.generations` frames, or never if there is no limit.
pub(crate) fn run<W: Write>(config: &Config, grid: Grid, out: &mut W) -> io::Result<()> {
    let interval = config.interval();
    let mut gens = grid.generations();
    loop {
        let gen = gens.generation();
        let Some(grid) = gens.next() else { break };
        queue!(
            out,
            Clear(ClearType::All),
            MoveTo(0, 0),
            Print(grid.render_with(&config.tokens))
        )?;
        out.flush()?;
        debug!("Gen {}: {} living cells", gen, grid.population());

        if config.generations.map_or(false, |n| gens.generation() >= n) {
            break;
        }
        if !interval.is_zero() {
            thread::sleep(interval);
        }
    }
    Ok(())
}
