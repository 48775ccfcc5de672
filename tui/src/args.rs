//! Parsing command-line arguments.

use crate::format::{self, Format};
use clap::{command, error::ErrorKind, value_parser, Arg, ArgGroup, ArgMatches, Command, Error};
use lifeterm_lib::{Config, Grid, Pattern, PatternSource, RandomSoup, Tokens};
use log::info;
use std::{
    ffi::OsString,
    fs,
    path::{Path, PathBuf},
    time::{SystemTime, UNIX_EPOCH},
};

/// Parses `WIDTHxHEIGHT`.
fn parse_size(s: &str) -> Result<(usize, usize), String> {
    let (width, height) = s
        .split_once(|c| c == 'x' || c == 'X')
        .ok_or_else(|| String::from("size must look like WIDTHxHEIGHT, e.g. 40x20"))?;
    let width = width.trim().parse::<usize>().map_err(|e| e.to_string())?;
    let height = height.trim().parse::<usize>().map_err(|e| e.to_string())?;
    if width == 0 || height == 0 {
        return Err(String::from("width and height must be positive integers"));
    }
    Ok((width, height))
}

fn invalid_value<S: ToString>(msg: S) -> Error {
    Error::raw(ErrorKind::InvalidValue, format!("{}\n", msg.to_string()))
}

/// A struct to store the parse results.
pub(crate) struct Args {
    pub(crate) config: Config,
    pub(crate) grid: Grid,
    pub(crate) print_config: Option<Format>,
}

impl Args {
    /// Parses the command-line arguments.
    pub(crate) fn parse() -> Result<Self, Error> {
        Args::parse_from(std::env::args_os())
    }

    pub(crate) fn parse_from<I, T>(args: I) -> Result<Self, Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString> + Clone,
    {
        let matches = app().try_get_matches_from(args)?;

        let config = match matches.get_one::<PathBuf>("CONFIG") {
            Some(path) => format::load(path).map_err(invalid_value)?,
            None => Config::default(),
        };
        let config = apply_overrides(config, &matches)?;
        let grid = config.grid().map_err(invalid_value)?;

        let print_config = matches
            .get_one::<String>("PRINT")
            .and_then(|name| Format::from_name(name));

        Ok(Args {
            config,
            grid,
            print_config,
        })
    }
}

/// Reads a pattern file, choosing RLE or Plaintext by its extension.
fn read_pattern_file(path: &Path) -> Result<PatternSource, Error> {
    let text = fs::read_to_string(path).map_err(|e| {
        Error::raw(
            ErrorKind::Io,
            format!("unable to read {}: {}\n", path.display(), e),
        )
    })?;
    let is_rle = path
        .extension()
        .and_then(|ext| ext.to_str())
        .map_or(false, |ext| ext.eq_ignore_ascii_case("rle"));
    Ok(if is_rle {
        PatternSource::Rle(text)
    } else {
        PatternSource::Plaintext(text)
    })
}

/// Command-line values take precedence over the config file.
fn apply_overrides(mut config: Config, matches: &ArgMatches) -> Result<Config, Error> {
    if let Some(name) = matches.get_one::<String>("PATTERN") {
        let pattern = name.parse::<Pattern>().map_err(invalid_value)?;
        config = config.set_pattern(pattern);
    }
    if let Some(path) = matches.get_one::<PathBuf>("FILE") {
        config = config.set_pattern(read_pattern_file(path)?);
    }
    if let Some(&(width, height)) = matches.get_one::<(usize, usize)>("RANDOM") {
        let seed = matches.get_one::<u64>("SEED").copied().unwrap_or_else(|| {
            SystemTime::now()
                .duration_since(UNIX_EPOCH)
                .map_or(0, |d| d.as_nanos() as u64)
        });
        info!("Random soup seed: {}", seed);
        let mut soup = RandomSoup::new(width, height).set_seed(seed);
        if let Some(&density) = matches.get_one::<f64>("DENSITY") {
            soup = soup.set_density(density);
        }
        config = config.set_pattern(soup);
    }
    if let Some(&margin) = matches.get_one::<usize>("MARGIN") {
        config = config.set_margin(margin);
    }
    if let Some(&interval) = matches.get_one::<u64>("INTERVAL") {
        config = config.set_interval_ms(interval);
    }
    if let Some(&generations) = matches.get_one::<u64>("GENERATIONS") {
        config = config.set_generations(match generations {
            0 => None,
            n => Some(n),
        });
    }
    let alive = matches.get_one::<String>("ALIVE");
    let dead = matches.get_one::<String>("DEAD");
    if alive.is_some() || dead.is_some() {
        let tokens = Tokens::new(
            alive.map_or(config.tokens.alive(), String::as_str),
            dead.map_or(config.tokens.dead(), String::as_str),
        )
        .map_err(invalid_value)?;
        config = config.set_tokens(tokens);
    }
    Ok(config)
}

fn app() -> Command {
    command!()
        .long_about(
            "Conway's Game of Life in the terminal\n\
             \n\
             The grid has a fixed size and no wrap-around: cells outside \
             the grid are always dead.\n\
             Each generation is drawn with two characters per cell, \
             `+ ` for living cells and two spaces for dead cells by default.\n\
             \n\
             Without any option, it runs the pentadecathlon forever, \
             one generation per second.\n",
        )
        .arg(
            Arg::new("CONFIG")
                .help("Reads the configuration from a file")
                .long_help(
                    "Reads the configuration from a file\n\
                     Supports TOML, YAML and JSON, chosen by the file extension. \
                     Other options override the values in the file.\n",
                )
                .short('C')
                .long("config")
                .value_name("FILE")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("PATTERN")
                .help("Built-in pattern")
                .short('p')
                .long("pattern")
                .value_parser(Pattern::ALL.map(Pattern::name)),
        )
        .arg(
            Arg::new("FILE")
                .help("Reads the initial pattern from a file")
                .long_help(
                    "Reads the initial pattern from a file\n\
                     Files ending with `.rle` are read as RLE. \
                     Other files are read as Plaintext, or as a matrix of 0 and 1.\n",
                )
                .short('f')
                .long("file")
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("RANDOM")
                .help("Starts from a random soup of the given size")
                .long("random")
                .value_name("WIDTHxHEIGHT")
                .value_parser(parse_size),
        )
        .group(ArgGroup::new("SOURCE").args(["PATTERN", "FILE", "RANDOM"]))
        .arg(
            Arg::new("DENSITY")
                .help("Probability for a cell in the random soup to be alive")
                .long("density")
                .requires("RANDOM")
                .value_parser(value_parser!(f64)),
        )
        .arg(
            Arg::new("SEED")
                .help("Seed of the random soup")
                .long_help(
                    "Seed of the random soup\n\
                     If it is not given, the seed is taken from the clock, \
                     and logged at the info level.\n",
                )
                .long("seed")
                .requires("RANDOM")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("MARGIN")
                .help("Number of dead cells added around the pattern")
                .short('m')
                .long("margin")
                .value_parser(value_parser!(usize)),
        )
        .arg(
            Arg::new("INTERVAL")
                .help("Delay between two generations, in milliseconds [default: 1000]")
                .short('i')
                .long("interval")
                .value_name("MS")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("GENERATIONS")
                .help("Stops after this many generations")
                .long_help(
                    "Stops after this many generations, including the initial one\n\
                     If this value is set to 0, it runs until it is interrupted.\n",
                )
                .short('g')
                .long("generations")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("ALIVE")
                .help("Two characters to draw living cells with")
                .long("alive")
                .value_name("TOKEN"),
        )
        .arg(
            Arg::new("DEAD")
                .help("Two characters to draw dead cells with")
                .long("dead")
                .value_name("TOKEN"),
        )
        .arg(
            Arg::new("PRINT")
                .help("Prints the configuration in the given format and exits")
                .long("print-config")
                .value_name("FORMAT")
                .value_parser(Format::NAMES),
        )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    fn parse(args: &[&str]) -> Result<Args, Error> {
        Args::parse_from(std::iter::once("lifeterm").chain(args.iter().copied()))
    }

    #[test]
    fn verify_app() {
        app().debug_assert();
    }

    #[test]
    fn defaults() {
        let args = parse(&[]).unwrap();
        assert_eq!(args.config, Config::default());
        assert_eq!(args.grid, Pattern::Pentadecathlon.grid());
        assert_eq!(args.config.interval(), Duration::from_secs(1));
        assert_eq!(args.print_config, None);
    }

    #[test]
    fn overrides() {
        let args = parse(&[
            "--pattern", "blinker", "-m", "1", "-i", "50", "-g", "7", "--alive", "<>",
        ])
        .unwrap();
        assert_eq!(args.config.pattern, PatternSource::Builtin(Pattern::Blinker));
        assert_eq!(args.config.generations, Some(7));
        assert_eq!(args.config.interval_ms, 50);
        assert_eq!(args.config.tokens, Tokens::new("<>", "  ").unwrap());
        assert_eq!((args.grid.width(), args.grid.height()), (7, 7));

        let args = parse(&["-g", "0"]).unwrap();
        assert_eq!(args.config.generations, None);
    }

    #[test]
    fn random() {
        let args = parse(&["--random", "30x10", "--seed", "9", "--density", "0.25"]).unwrap();
        assert_eq!(
            args.config.pattern,
            PatternSource::Random(RandomSoup::new(30, 10).set_seed(9).set_density(0.25))
        );
        assert_eq!((args.grid.width(), args.grid.height()), (30, 10));
    }

    #[test]
    fn errors() {
        let kind = |args: &[&str]| parse(args).err().map(|e| e.kind());
        assert_eq!(kind(&["--random", "30"]), Some(ErrorKind::ValueValidation));
        assert_eq!(kind(&["--random", "0x3"]), Some(ErrorKind::ValueValidation));
        assert_eq!(kind(&["--pattern", "gun"]), Some(ErrorKind::InvalidValue));
        assert_eq!(kind(&["--seed", "1"]), Some(ErrorKind::MissingRequiredArgument));
        assert_eq!(
            kind(&["--pattern", "block", "--random", "3x3"]),
            Some(ErrorKind::ArgumentConflict)
        );
        assert_eq!(kind(&["--dead", "..."]), Some(ErrorKind::InvalidValue));
        assert_eq!(
            kind(&["--random", "3x3", "--density", "2"]),
            Some(ErrorKind::InvalidValue)
        );
        assert_eq!(kind(&["--file", "/nonexistent/life.cells"]), Some(ErrorKind::Io));
        let max = usize::MAX.to_string();
        assert_eq!(kind(&["-m", &max]), Some(ErrorKind::InvalidValue));
    }

    #[test]
    fn pattern_files() {
        let dir = std::env::temp_dir();
        let file = |ext: &str| {
            dir.join(format!("lifeterm-{}-glider.{}", std::process::id(), ext))
        };
        let (rle, cells, upper) = (file("rle"), file("cells"), file("RLE"));
        fs::write(&rle, "#N Glider\nx = 3, y = 3, rule = B3/S23\nbo$2bo$3o!\n").unwrap();
        fs::write(&cells, "!Name: Glider\n.O\n..O\nOOO\n").unwrap();
        fs::write(&upper, "bo$2bo$3o!\n").unwrap();

        let results = [&rle, &cells, &upper].map(|path| parse(&["-f", path.to_str().unwrap()]));
        for path in [&rle, &cells, &upper] {
            let _ = fs::remove_file(path);
        }
        let [from_rle, from_cells, from_upper] = results.map(Result::unwrap);

        assert!(matches!(from_rle.config.pattern, PatternSource::Rle(_)));
        assert!(matches!(from_cells.config.pattern, PatternSource::Plaintext(_)));
        assert!(matches!(from_upper.config.pattern, PatternSource::Rle(_)));
        let glider = Grid::from_bits(&[[0u8, 1, 0], [0, 0, 1], [1, 1, 1]]).unwrap();
        assert_eq!(from_rle.grid, glider);
        assert_eq!(from_cells.grid, glider);
        assert_eq!(from_upper.grid, glider);
    }
}
