use tracing_log::{AsLog, LogTracer};
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::Layer;

use crate::{level_from_env, LevelFilter};

/// Stderr logger setup for the BeakDash binaries.
///
/// Every event is printed as one line, its level followed by the message, without timestamps or
/// targets. `log` records from the libraries go through the same filter.
///
/// ```
/// # use beakdash_log::{Logger, LevelFilter};
/// let logger = Logger::from_env("BEAKDASH_LOG_DOCTEST_UNSET", LevelFilter::INFO).verbose(true);
/// assert_eq!(logger.level(), LevelFilter::DEBUG);
/// ```
#[derive(Clone, Copy, Debug)]
pub struct Logger {
    level: LevelFilter,
}

impl Logger {
    pub fn new(level: LevelFilter) -> Self {
        Self { level }
    }

    /// Use the level named by `env_var`, or `default_level` if it is unset or invalid.
    pub fn from_env(env_var: &str, default_level: LevelFilter) -> Self {
        Self::new(level_from_env(env_var).unwrap_or(default_level))
    }

    /// Raise the level to at least `debug` if `verbose` is set. A `trace` level is kept.
    pub fn verbose(self, verbose: bool) -> Self {
        if verbose && self.level < LevelFilter::DEBUG {
            Self::new(LevelFilter::DEBUG)
        } else {
            self
        }
    }

    pub fn level(&self) -> LevelFilter {
        self.level
    }

    /// Install the stderr subscriber and the `log` bridge. Fails if a logger is already set.
    pub fn init(self) -> Result<(), anyhow::Error> {
        let format = tracing_subscriber::fmt::format()
            .with_level(true)
            .with_target(false)
            .without_time()
            .compact();

        let stderr = tracing_subscriber::fmt::layer()
            .event_format(format)
            .with_writer(std::io::stderr)
            .with_filter(self.level);

        tracing::subscriber::set_global_default(tracing_subscriber::registry().with(stderr))?;
        LogTracer::init_with_filter(self.level.as_log())?;

        Ok(())
    }
}
