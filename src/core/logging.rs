//! Diagnostics logging
//!
//! Results go to stdout; everything logged here goes to stderr.

use log::LevelFilter;

/// Pick the default level from the global `--quiet`/`--verbose` flags
pub fn level_for(quiet: bool, verbose: bool) -> LevelFilter {
    match (quiet, verbose) {
        (true, _) => LevelFilter::Error,
        (false, true) => LevelFilter::Debug,
        (false, false) => LevelFilter::Warn,
    }
}

/// Install the global logger. `RUST_LOG` overrides the flag-derived level.
pub fn init(quiet: bool, verbose: bool) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(quiet, verbose))
        .format_timestamp(None)
        .format_target(false)
        .parse_default_env();

    // A second init (e.g. from tests) is harmless
    let _ = builder.try_init();
}
