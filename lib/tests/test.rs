use lifeterm_lib::{
    parse_plaintext, Config, Grid, Pattern, PatternSource, RandomSoup, ShapeError, DEAD,
};
use std::error::Error;

#[test]
fn same_dimensions() -> Result<(), Box<dyn Error>> {
    for soup in [RandomSoup::new(1, 1), RandomSoup::new(7, 3), RandomSoup::new(2, 9)] {
        let grid = soup.set_seed(7).grid()?;
        let next = grid.step();
        assert_eq!(next.width(), grid.width());
        assert_eq!(next.height(), grid.height());
    }
    Ok(())
}

#[test]
fn deterministic() -> Result<(), Box<dyn Error>> {
    let grid = RandomSoup::new(24, 16).set_seed(2024).grid()?;
    assert_eq!(grid.step(), grid.clone().step());
    assert_eq!(grid.step().step(), grid.step().step());
    Ok(())
}

#[test]
fn block() -> Result<(), Box<dyn Error>> {
    let block = Grid::from_bits(&[
        [0u8, 0, 0, 0],
        [0, 1, 1, 0],
        [0, 1, 1, 0],
        [0, 0, 0, 0],
    ])?;
    assert_eq!(block.step(), block);
    assert_eq!(Pattern::Block.grid().step(), Pattern::Block.grid());
    Ok(())
}

#[test]
fn blinker() -> Result<(), Box<dyn Error>> {
    let horizontal = parse_plaintext(
        ".....\n\
         .....\n\
         .OOO.\n\
         .....\n\
         .....\n",
    )?;
    let vertical = parse_plaintext(
        ".....\n\
         ..O..\n\
         ..O..\n\
         ..O..\n\
         .....\n",
    )?;
    assert_eq!(horizontal.step(), vertical);
    assert_eq!(vertical.step(), horizontal);
    assert_eq!(Pattern::Blinker.grid(), horizontal);
    Ok(())
}

#[test]
fn lonely_cell() -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_bits(&[[0u8, 0, 0], [0, 1, 0], [0, 0, 0]])?;
    let next = grid.step();
    assert_eq!(next.get((1, 1)), Some(DEAD));
    assert_eq!(next.population(), 0);
    Ok(())
}

#[test]
fn pentadecathlon() -> Result<(), Box<dyn Error>> {
    let grid = Pattern::Pentadecathlon.grid();
    let gens: Vec<_> = grid.clone().generations().take(16).collect();
    assert_eq!(gens[15], grid);
    assert!(gens[1..15].iter().all(|g| *g != grid));
    Ok(())
}

#[test]
fn glider() -> Result<(), Box<dyn Error>> {
    let glider = Pattern::Glider.grid();
    let moved = Grid::with_alive(10, 10, [(3, 2), (4, 3), (2, 4), (3, 4), (4, 4)])?;
    assert_eq!(glider.generations().nth(4), Some(moved));
    Ok(())
}

#[test]
fn render() -> Result<(), Box<dyn Error>> {
    let grid = Grid::from_bits(&[[1u8, 0], [0, 1]])?;
    assert_eq!(grid.render(), String::from("+   \n  + \n"));
    assert_eq!(
        Pattern::Blinker.grid().step().render(),
        String::from(
            "          \n\
             \x20   +     \n\
             \x20   +     \n\
             \x20   +     \n\
             \x20         \n"
        )
    );
    Ok(())
}

#[test]
fn invalid_shape() -> Result<(), Box<dyn Error>> {
    let config = Config::new(PatternSource::Cells(vec![vec![0, 1, 0], vec![1, 1]]));
    let err = config.grid().unwrap_err();
    assert_eq!(
        err,
        lifeterm_lib::Error::InvalidGridShape(ShapeError::Ragged {
            row: 1,
            len: 2,
            width: 3
        })
    );
    assert_eq!(
        err.to_string(),
        "Invalid grid shape: row 1 has 2 cells, expected 3."
    );
    Ok(())
}

#[test]
fn too_large() -> Result<(), Box<dyn Error>> {
    let too_large = lifeterm_lib::Error::InvalidGridShape(ShapeError::TooLarge);
    let config = Config::new(Pattern::Block).set_margin(usize::MAX / 2);
    assert_eq!(config.grid(), Err(too_large.clone()));
    assert_eq!(
        Config::new(RandomSoup::new(usize::MAX, 3)).grid(),
        Err(too_large.clone())
    );
    assert_eq!(too_large.to_string(), "Invalid grid shape: the grid is too large.");
    Ok(())
}

#[cfg(feature = "read-rle")]
#[test]
fn rle_too_large() -> Result<(), Box<dyn Error>> {
    let config = Config::new(PatternSource::Rle(String::from(
        "x = 4294967296, y = 4294967296\no!\n",
    )));
    assert_eq!(
        config.grid(),
        Err(lifeterm_lib::Error::InvalidGridShape(ShapeError::TooLarge))
    );
    Ok(())
}
