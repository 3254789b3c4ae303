use std::time::Duration;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

use crate::scan::error::ConfigError;

pub const DEFAULT_PORT: u16 = 25;
pub const DEFAULT_TIMEOUT_SECS: u64 = 5;

/// How chatty the scan is about each exchange. Levels are cumulative.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub enum Verbosity {
    #[default]
    Silent,
    /// Connection attempts, banners and the commands sent.
    Info,
    /// Per-candidate verdicts and raw transport errors as well.
    Detail,
}

impl Verbosity {
    pub fn from_count(count: u8) -> Self {
        match count {
            0 => Self::Silent,
            1 => Self::Info,
            _ => Self::Detail,
        }
    }
}

/// Connection parameters for a scan. Built once, never mutated while the
/// scan runs.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanConfig {
    pub host: String,
    pub port: u16,
    /// Applied to the connect and to every blocking read. A zero timeout
    /// makes the socket non-blocking: the first connect is still pending
    /// and the scan aborts.
    pub timeout: Duration,
    /// Pause between two consecutive candidates.
    pub delay: Duration,
    pub verbosity: Verbosity,
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            host: String::new(),
            port: DEFAULT_PORT,
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
            delay: Duration::ZERO,
            verbosity: Verbosity::Silent,
        }
    }
}

impl ScanConfig {
    pub fn new(host: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            ..Self::default()
        }
    }

    pub fn with_timeout_secs(mut self, secs: u64) -> Self {
        self.timeout = Duration::from_secs(secs);
        self
    }

    pub fn with_delay_secs(mut self, secs: u64) -> Self {
        self.delay = Duration::from_secs(secs);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = port;
        self
    }

    pub fn with_verbosity(mut self, verbosity: Verbosity) -> Self {
        self.verbosity = verbosity;
        self
    }
}

/// Parse a user supplied port. Blank input means "unset" and falls back to
/// [`DEFAULT_PORT`].
pub fn parse_port(raw: &str) -> Result<u16, ConfigError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(DEFAULT_PORT);
    }
    let value = trimmed
        .parse::<u64>()
        .map_err(|_| ConfigError::InvalidPort(trimmed.to_string()))?;
    match u16::try_from(value) {
        Ok(port) if port != 0 => Ok(port),
        _ => Err(ConfigError::PortOutOfRange(value)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_port_defaults_to_25() {
        assert_eq!(parse_port("").unwrap(), 25);
        assert_eq!(parse_port(" ").unwrap(), 25);
        assert_eq!(parse_port("\t").unwrap(), 25);
    }

    #[test]
    fn explicit_port_is_parsed() {
        assert_eq!(parse_port("2525").unwrap(), 2525);
        assert_eq!(parse_port(" 587 ").unwrap(), 587);
    }

    #[test]
    fn non_numeric_port_rejected() {
        let err = parse_port("smtp").expect_err("non numeric");
        assert!(matches!(err, ConfigError::InvalidPort(ref raw) if raw == "smtp"));
        assert!(parse_port("-1").is_err());
    }

    #[test]
    fn out_of_range_port_rejected() {
        assert!(matches!(parse_port("0"), Err(ConfigError::PortOutOfRange(0))));
        assert!(matches!(
            parse_port("65536"),
            Err(ConfigError::PortOutOfRange(65536))
        ));
        assert_eq!(parse_port("65535").unwrap(), 65535);
    }

    #[test]
    fn timeout_is_kept_in_seconds() {
        let config = ScanConfig::new("mx.example").with_timeout_secs(0);
        assert_eq!(config.timeout, Duration::ZERO);
        let config = config.with_timeout_secs(3);
        assert_eq!(config.timeout, Duration::from_secs(3));
    }

    #[test]
    fn defaults_match_cli_defaults() {
        let config = ScanConfig::new("10.0.0.1");
        assert_eq!(config.port, 25);
        assert_eq!(config.timeout, Duration::from_secs(5));
        assert_eq!(config.delay, Duration::ZERO);
        assert_eq!(config.verbosity, Verbosity::Silent);
    }

    #[test]
    fn verbosity_saturates() {
        assert_eq!(Verbosity::from_count(0), Verbosity::Silent);
        assert_eq!(Verbosity::from_count(1), Verbosity::Info);
        assert_eq!(Verbosity::from_count(2), Verbosity::Detail);
        assert_eq!(Verbosity::from_count(7), Verbosity::Detail);
        assert!(Verbosity::Detail > Verbosity::Info);
    }
}
