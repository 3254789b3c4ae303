//! SMTP `VRFY` username probing.
//!
//! The public entry point is [`run`], which opens one plain TCP connection
//! per candidate, reads the banner, sends `VRFY <candidate>` and classifies
//! the reply. Authentication demands (`503`), missing `VRFY` support (`500`)
//! and connect attempts that time out stop the whole scan. Every other
//! failure only skips the current candidate.
//!
//! [`Scanner`] exposes the same loop with pluggable transport, reply
//! classification and logging.

mod classify;
mod engine;
mod error;
mod observer;
mod options;
mod session;
mod types;

pub use classify::{ReplyClassifier, SubstringClassifier};
pub use engine::{Scanner, run};
pub use error::{ConfigError, ProbeError};
pub use observer::{NullObserver, ScanEvent, ScanObserver, TracingObserver};
pub use options::{DEFAULT_PORT, DEFAULT_TIMEOUT_SECS, ScanConfig, Verbosity, parse_port};
pub use session::{Dialer, READ_BUFFER_SIZE, TcpDialer, VrfySession, vrfy_command};
pub use types::{AbortReason, Candidate, OutcomeKind, ProbeOutcome, ScanResult, ScanStatus};
