//! Command-line tool configuration.
//!
//! Settings come from defaults, then `TAGTREE_*` environment variables,
//! then command-line flags, each layer overriding the previous one.

use std::env;
use std::str::FromStr;

/// Environment variable holding the log level.
pub const LOG_LEVEL_ENV: &str = "TAGTREE_LOG_LEVEL";
/// Environment variable switching error locations to one-based.
pub const ONE_BASED_ENV: &str = "TAGTREE_ONE_BASED";

/// Error raised for an unusable configuration value.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid value '{value}' for {source_name}, expected {expected}")]
    InvalidValue {
        source_name: String,
        value: String,
        expected: &'static str,
    },
}

/// Log level, mapped onto `tracing` levels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogLevel {
    Trace,
    Debug,
    Info,
    #[default]
    Warn,
    Error,
}

impl FromStr for LogLevel {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "trace" => Ok(Self::Trace),
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warn" | "warning" => Ok(Self::Warn),
            "error" => Ok(Self::Error),
            _ => Err(ConfigError::InvalidValue {
                source_name: "log level".to_string(),
                value: s.to_string(),
                expected: "one of: trace, debug, info, warn, error",
            }),
        }
    }
}

impl LogLevel {
    /// Filter directive understood by `tracing_subscriber::EnvFilter`.
    #[must_use]
    pub const fn as_filter_str(self) -> &'static str {
        match self {
            Self::Trace => "trace",
            Self::Debug => "debug",
            Self::Info => "info",
            Self::Warn => "warn",
            Self::Error => "error",
        }
    }
}

/// Configuration for the `tagtree` binary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Config {
    pub log_level: LogLevel,
    /// Report error locations counting lines and columns from one.
    pub one_based: bool,
}

impl Config {
    /// Load configuration from the process environment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if a variable is set to a
    /// value that cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration through an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for unparsable values.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Some(level) = lookup(LOG_LEVEL_ENV) {
            config.log_level = level.parse().map_err(|_| ConfigError::InvalidValue {
                source_name: LOG_LEVEL_ENV.to_string(),
                value: level.clone(),
                expected: "one of: trace, debug, info, warn, error",
            })?;
        }

        if let Some(flag) = lookup(ONE_BASED_ENV) {
            config.one_based = parse_bool(ONE_BASED_ENV, &flag)?;
        }

        Ok(config)
    }

    /// Apply command-line overrides on top of the loaded values.
    #[must_use]
    pub const fn apply_overrides(mut self, log_level: Option<LogLevel>, one_based: bool) -> Self {
        if let Some(level) = log_level {
            self.log_level = level;
        }
        if one_based {
            self.one_based = true;
        }
        self
    }
}

fn parse_bool(source_name: &str, value: &str) -> Result<bool, ConfigError> {
    match value.to_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" | "" => Ok(false),
        _ => Err(ConfigError::InvalidValue {
            source_name: source_name.to_string(),
            value: value.to_string(),
            expected: "a boolean (true/false, 1/0, yes/no, on/off)",
        }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn lookup<'a>(vars: &'a [(&'a str, &'a str)]) -> impl Fn(&str) -> Option<String> + 'a {
        move |key| {
            vars.iter()
                .find(|(k, _)| *k == key)
                .map(|(_, v)| (*v).to_string())
        }
    }

    #[test]
    fn defaults_without_environment() {
        let config = Config::from_lookup(lookup(&[])).expect("config");
        assert_eq!(config, Config::default());
        assert_eq!(config.log_level, LogLevel::Warn);
        assert!(!config.one_based);
    }

    #[test]
    fn reads_environment() {
        let config = Config::from_lookup(lookup(&[
            (LOG_LEVEL_ENV, "DEBUG"),
            (ONE_BASED_ENV, "yes"),
        ]))
        .expect("config");
        assert_eq!(config.log_level, LogLevel::Debug);
        assert!(config.one_based);
    }

    #[test]
    fn invalid_log_level_names_variable() {
        let err = Config::from_lookup(lookup(&[(LOG_LEVEL_ENV, "loud")])).unwrap_err();
        let msg = err.to_string();
        assert!(msg.contains(LOG_LEVEL_ENV));
        assert!(msg.contains("loud"));
    }

    #[test]
    fn invalid_bool() {
        let err = Config::from_lookup(lookup(&[(ONE_BASED_ENV, "maybe")])).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::InvalidValue { ref source_name, .. } if source_name == ONE_BASED_ENV
        ));
    }

    #[test]
    fn overrides_win() {
        let config = Config::default().apply_overrides(Some(LogLevel::Trace), true);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(config.one_based);

        let config = config.apply_overrides(None, false);
        assert_eq!(config.log_level, LogLevel::Trace);
        assert!(config.one_based);
    }

    #[test]
    fn filter_strings() {
        assert_eq!("warning".parse::<LogLevel>(), Ok(LogLevel::Warn));
        assert_eq!(LogLevel::Info.as_filter_str(), "info");
    }
}
