//! Tracker configuration.
//!
//! Values default to the behaviour described in the crate docs and may be
//! overridden from the environment.

use std::env;
use std::str::FromStr;
use thiserror::Error;

/// Environment variable overriding [`TrackerConfig::recent_updates_limit`].
pub const RECENT_UPDATES_LIMIT_VAR: &str = "TRACKER_RECENT_UPDATES_LIMIT";

/// Environment variable overriding [`TrackerConfig::sync_status_on_move`].
pub const SYNC_STATUS_ON_MOVE_VAR: &str = "TRACKER_SYNC_STATUS_ON_MOVE";

/// Errors raised while loading configuration.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ConfigError {
    /// A variable was set to a value that could not be parsed.
    #[error("failed to parse configuration value '{key}': {details}")]
    Parse {
        /// Variable name.
        key: String,
        /// Parser message.
        details: String,
    },
}

/// Runtime options for the tracker services.
///
/// # Examples
///
/// ```
/// use integration_tracker::config::TrackerConfig;
///
/// let config = TrackerConfig::default();
/// assert_eq!(config.recent_updates_limit, 5);
/// assert!(!config.sync_status_on_move);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TrackerConfig {
    /// Number of integrations listed under recent updates on the dashboard.
    pub recent_updates_limit: usize,
    /// Whether board moves also set the task's lifecycle status to the
    /// status implied by the destination column.
    pub sync_status_on_move: bool,
}

impl Default for TrackerConfig {
    fn default() -> Self {
        Self {
            recent_updates_limit: 5,
            sync_status_on_move: false,
        }
    }
}

impl TrackerConfig {
    /// Sets the recent updates limit.
    #[must_use]
    pub const fn with_recent_updates_limit(mut self, limit: usize) -> Self {
        self.recent_updates_limit = limit;
        self
    }

    /// Enables or disables status coupling on moves.
    #[must_use]
    pub const fn with_sync_status_on_move(mut self, enabled: bool) -> Self {
        self.sync_status_on_move = enabled;
        self
    }

    /// Loads configuration from process environment variables.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a variable holds an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Loads configuration through `lookup`, starting from the defaults.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] when a looked-up value is invalid.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let defaults = Self::default();
        Ok(Self {
            recent_updates_limit: parse_or(
                &lookup,
                RECENT_UPDATES_LIMIT_VAR,
                defaults.recent_updates_limit,
            )?,
            sync_status_on_move: parse_or(
                &lookup,
                SYNC_STATUS_ON_MOVE_VAR,
                defaults.sync_status_on_move,
            )?,
        })
    }
}

fn parse_or<T>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    lookup(key).map_or(Ok(default), |raw| {
        raw.trim().parse().map_err(|err: T::Err| ConfigError::Parse {
            key: key.to_owned(),
            details: err.to_string(),
        })
    })
}
