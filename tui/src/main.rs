mod args;
mod format;
mod plain;

use args::Args;
use log::error;
use std::{
    io::{self, Write},
    process,
};

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();
    let args = Args::parse().unwrap_or_else(|e| e.exit());
    if let Err(e) = run(args) {
        error!("{}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> io::Result<()> {
    if let Some(format) = args.print_config {
        let text = format
            .serialize(&args.config)
            .map_err(|e| io::Error::new(io::ErrorKind::Other, e))?;
        let mut out = io::stdout().lock();
        out.write_all(text.as_bytes())?;
        return out.flush();
    }

    plain::run(&args.config, args.grid, &mut io::stdout().lock())
}
