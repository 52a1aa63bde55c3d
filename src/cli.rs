//! Shared command-line plumbing for the binaries
//!
//! Available with the `cli` feature.

use std::process;

use clap::Parser;
use tracing::Level;

/// Parse the process arguments, exiting with status 1 on usage errors
///
/// `--help` and `--version` keep clap's own exit behaviour.
pub fn parse_args<A: Parser>() -> A {
    match A::try_parse() {
        Ok(args) => args,
        Err(err) => {
            if !err.use_stderr() {
                err.exit();
            }
            // Printing can only fail if stderr is gone
            let _ = err.print();
            process::exit(1);
        }
    }
}

/// Level selected by the `--summary` and `--verbose` flags
pub fn log_level(summary: bool, verbose: u8) -> Level {
    match verbose {
        0 if summary => Level::INFO,
        0 => Level::WARN,
        1 => Level::DEBUG,
        _ => Level::TRACE,
    }
}

/// Install a stderr `tracing` subscriber
pub fn init_logging(summary: bool, verbose: u8) {
    tracing_subscriber::fmt()
        .with_max_level(log_level(summary, verbose))
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_log_level() {
        assert_eq!(log_level(false, 0), Level::WARN);
        assert_eq!(log_level(true, 0), Level::INFO);
        assert_eq!(log_level(false, 1), Level::DEBUG);
        assert_eq!(log_level(true, 2), Level::TRACE);
        assert_eq!(log_level(false, 5), Level::TRACE);
    }
}
