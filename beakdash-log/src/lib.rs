//! Logging for BeakDash binaries.
//!
//! The libraries log through the `log` facade. A binary picks its level with [`Logger`] and
//! calls [`Logger::init`], which installs a `tracing` subscriber printing to stderr and forwards
//! `log` records to it.

use std::env;

pub mod builder;
pub use builder::Logger;

pub use tracing_subscriber::filter::LevelFilter;

/// Level named by `env_var`, or `None` if the variable is unset or not a level.
fn level_from_env(env_var: &str) -> Option<LevelFilter> {
    let value = env::var(env_var).ok()?;
    match parse_level(&value) {
        Some(level) => Some(level),
        None => {
            eprintln!("ignoring {env_var}={value:?}, not a log level");
            None
        }
    }
}

fn parse_level(value: &str) -> Option<LevelFilter> {
    value.trim().parse().ok()
}
