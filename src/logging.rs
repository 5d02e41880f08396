//! Stderr logging for the `randpick` binary.
//!
//! `RANDPICK_LOG` wins over `RUST_LOG`; without either, `-v`/`-q` raise or
//! lower this crate's level while dependencies stay at `warn`.

use tracing::Level;
use tracing_subscriber::fmt;
use tracing_subscriber::prelude::*;
use tracing_subscriber::EnvFilter;

pub const LOG_ENV_VAR: &str = "RANDPICK_LOG";

/// Level for this crate from a repeated `-v` count and `-q`.
pub fn level_for(verbose: u8, quiet: bool) -> Level {
    match (verbose, quiet) {
        (0, true) => Level::ERROR,
        (0, false) => Level::WARN,
        (1, _) => Level::INFO,
        (2, _) => Level::DEBUG,
        _ => Level::TRACE,
    }
}

fn default_directive(level: Level) -> String {
    format!("warn,{}={}", env!("CARGO_CRATE_NAME"), level.as_str().to_lowercase())
}

/// Install the global subscriber. Call once, first thing in `main`.
pub fn init_subscriber(verbose: u8, quiet: bool) {
    let filter = [LOG_ENV_VAR, EnvFilter::DEFAULT_ENV]
        .into_iter()
        .filter_map(|var| std::env::var(var).ok())
        .find_map(|directives| EnvFilter::try_new(directives).ok())
        .unwrap_or_else(|| EnvFilter::new(default_directive(level_for(verbose, quiet))));

    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(std::io::IsTerminal::is_terminal(&std::io::stderr()))
        .without_time()
        .compact();

    tracing_subscriber::registry().with(filter).with(layer).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_level_for() {
        assert_eq!(level_for(0, true), Level::ERROR);
        assert_eq!(level_for(0, false), Level::WARN);
        assert_eq!(level_for(1, false), Level::INFO);
        assert_eq!(level_for(2, true), Level::DEBUG);
        assert_eq!(level_for(5, false), Level::TRACE);
    }

    #[test]
    fn test_default_directive_scopes_crate() {
        assert_eq!(default_directive(Level::DEBUG), "warn,randpick=debug");
        assert!(EnvFilter::try_new(default_directive(Level::TRACE)).is_ok());
    }
}
