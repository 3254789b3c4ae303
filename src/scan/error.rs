use std::io;

use thiserror::Error;

/// Rejected scan parameters. Raised before any connection is attempted.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid port '{0}': expected a number")]
    InvalidPort(String),
    #[error("port {0} out of range (1..=65535)")]
    PortOutOfRange(u64),
}

/// Per-candidate failure. Never escapes a scan; the engine turns it into a
/// [`ProbeOutcome`](crate::scan::ProbeOutcome).
#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("could not resolve {target}: {source}")]
    Resolve {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error("connection to {target} failed: {source}")]
    Connect {
        target: String,
        #[source]
        source: io::Error,
    },
    #[error("I/O error: {source}")]
    Transport {
        #[source]
        source: io::Error,
    },
}

impl ProbeError {
    pub fn connect(target: impl Into<String>, source: io::Error) -> Self {
        Self::Connect {
            target: target.into(),
            source,
        }
    }

    pub fn transport(source: io::Error) -> Self {
        Self::Transport { source }
    }

    /// A connect attempt still pending when the deadline hit. Every later
    /// candidate would hang the same way, so the scan stops.
    pub fn is_fatal(&self) -> bool {
        match self {
            Self::Connect { source, .. } => is_pending_connect(source),
            _ => false,
        }
    }
}

fn is_pending_connect(err: &io::Error) -> bool {
    if matches!(
        err.kind(),
        io::ErrorKind::TimedOut | io::ErrorKind::WouldBlock
    ) {
        return true;
    }
    let text = err.to_string().to_ascii_lowercase();
    text.contains("operation now in progress")
        || text.contains("operation in progress")
        || text.contains("timed out")
}
