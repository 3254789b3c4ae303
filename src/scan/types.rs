use std::fmt;

#[cfg(feature = "with-serde")]
use serde::{Deserialize, Serialize};

/// A username or mailbox identifier to check with `VRFY`.
pub type Candidate = String;

/// Classification of a single candidate exchange.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutcomeKind {
    /// The reply contained `252`.
    Confirmed,
    /// The reply contained `550`.
    Rejected,
    /// The reply contained `503`: the server wants authentication first.
    AuthRequired,
    /// The reply contained `500`: `VRFY` is not implemented.
    Unsupported,
    /// The TCP connection could not be established.
    ConnectionFailed,
    /// Anything else: unclassified reply or a transport error mid-exchange.
    OtherError,
}

impl OutcomeKind {
    /// Abort reason for outcomes that stop the whole scan.
    pub fn abort_reason(self) -> Option<AbortReason> {
        match self {
            Self::AuthRequired => Some(AbortReason::AuthRequired),
            Self::Unsupported => Some(AbortReason::Unsupported),
            _ => None,
        }
    }
}

impl fmt::Display for OutcomeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Confirmed => f.write_str("confirmed"),
            Self::Rejected => f.write_str("rejected"),
            Self::AuthRequired => f.write_str("authentication required"),
            Self::Unsupported => f.write_str("VRFY unsupported"),
            Self::ConnectionFailed => f.write_str("connection failed"),
            Self::OtherError => f.write_str("unclassified"),
        }
    }
}

/// Result of one connect/greet/VRFY/classify cycle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeOutcome {
    pub candidate: Candidate,
    pub kind: OutcomeKind,
    /// Raw server reply, or the error text when no reply was read.
    pub reply: String,
}

impl ProbeOutcome {
    pub fn new(
        candidate: impl Into<Candidate>,
        kind: OutcomeKind,
        reply: impl Into<String>,
    ) -> Self {
        Self {
            candidate: candidate.into(),
            kind,
            reply: reply.into(),
        }
    }
}

/// Why a scan stopped before every candidate was attempted.
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AbortReason {
    AuthRequired,
    Unsupported,
    ConnectionError,
    /// The caller raised the cancellation flag between two candidates.
    Cancelled,
}

impl fmt::Display for AbortReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::AuthRequired => f.write_str("the server requires authentication"),
            Self::Unsupported => f.write_str("the VRFY command is not supported"),
            Self::ConnectionError => f.write_str("the connection to SMTP failed"),
            Self::Cancelled => f.write_str("the scan was cancelled"),
        }
    }
}

#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanStatus {
    Completed,
    Aborted(AbortReason),
}

impl ScanStatus {
    pub fn is_completed(&self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for ScanStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Completed => f.write_str("completed"),
            Self::Aborted(reason) => write!(f, "aborted ({reason})"),
        }
    }
}

/// Final report produced by [`Scanner::run`](crate::scan::Scanner::run).
#[cfg_attr(feature = "with-serde", derive(Serialize, Deserialize))]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanResult {
    /// Confirmed candidates, in discovery order.
    pub confirmed: Vec<Candidate>,
    pub status: ScanStatus,
}

impl ScanResult {
    pub fn new(confirmed: Vec<Candidate>, status: ScanStatus) -> Self {
        Self { confirmed, status }
    }
}
