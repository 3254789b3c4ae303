#![forbid(unsafe_code)]
//! vrfyscan_lib — SMTP `VRFY` username enumeration

pub mod scan;
pub use scan::{
    AbortReason, Candidate, OutcomeKind, ProbeOutcome, ScanConfig, ScanResult, ScanStatus,
    Scanner, Verbosity, parse_port, run,
};

pub mod source;
pub use source::{SourceError, resolve_candidates};
