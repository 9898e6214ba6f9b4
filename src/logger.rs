//! Logger setup.
//! `RUST_LOG` takes precedence over the level picked from `--verbose`.

use env_logger::Builder;
use log::{Level, LevelFilter};
use std::io::Write;

/// Level used when `RUST_LOG` does not say otherwise.
pub fn default_level(verbose: bool) -> LevelFilter {
    if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    }
}

fn level_prefix(level: Level) -> &'static str {
    match level {
        Level::Error => "error: ",
        Level::Warn => "warning: ",
        Level::Info => "",
        Level::Debug | Level::Trace => "debug: ",
    }
}

/// Initializes `env_logger` with plain, prefix-only output on stderr.
pub fn init_logger(verbose: bool) {
    let mut builder = Builder::new();
    builder
        .filter_level(default_level(verbose))
        .parse_default_env()
        .format(|buf, record| writeln!(buf, "{}{}", level_prefix(record.level()), record.args()));

    if let Err(e) = builder.try_init() {
        eprintln!("Logger already initialized: {e}");
    }
}
