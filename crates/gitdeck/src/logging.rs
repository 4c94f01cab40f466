//! Logging setup on top of `tracing-subscriber`.
//!
//! Output goes to stderr. `RUST_LOG` overrides the level picked from the
//! command line.

use tracing::Level;
use tracing_subscriber::util::TryInitError;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LogConfig {
    pub level: Level,
    pub with_ansi: bool,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: Level::INFO,
            with_ansi: true,
        }
    }
}

impl LogConfig {
    /// Level from the `-v` count; `--quiet` wins and keeps only errors.
    ///
    /// - 0: info
    /// - 1 (`-v`): debug
    /// - 2+ (`-vv`): trace
    #[must_use]
    pub fn from_verbosity(verbose: u8, quiet: bool) -> Self {
        let level = if quiet {
            Level::ERROR
        } else {
            match verbose {
                0 => Level::INFO,
                1 => Level::DEBUG,
                _ => Level::TRACE,
            }
        };
        Self {
            level,
            ..Default::default()
        }
    }

    #[must_use]
    pub fn with_ansi(mut self, enable: bool) -> Self {
        self.with_ansi = enable;
        self
    }

    /// Directive used when `RUST_LOG` is unset. Other crates stay at warn.
    pub fn directive(&self) -> String {
        let level = self.level.as_str().to_lowercase();
        if self.level > Level::WARN {
            format!("warn,gitdeck={level}")
        } else {
            level
        }
    }
}

/// Install the global subscriber. Fails if one is already set.
pub fn init_logging(config: &LogConfig) -> Result<(), TryInitError> {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(config.directive()));
    let layer = fmt::layer()
        .with_writer(std::io::stderr)
        .with_ansi(config.with_ansi)
        .with_target(false)
        .without_time();
    tracing_subscriber::registry()
        .with(filter)
        .with(layer)
        .try_init()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verbosity_maps_to_levels() {
        assert_eq!(LogConfig::from_verbosity(0, false).level, Level::INFO);
        assert_eq!(LogConfig::from_verbosity(1, false).level, Level::DEBUG);
        assert_eq!(LogConfig::from_verbosity(5, false).level, Level::TRACE);
    }

    #[test]
    fn quiet_beats_verbose() {
        assert_eq!(LogConfig::from_verbosity(2, true).level, Level::ERROR);
    }

    #[test]
    fn directive_keeps_dependencies_at_warn() {
        assert_eq!(LogConfig::from_verbosity(1, false).directive(), "warn,gitdeck=debug");
        assert_eq!(LogConfig::from_verbosity(0, true).directive(), "error");
    }
}
