use crate::scan::options::Verbosity;

const TARGET: &str = "vrfyscan";

/// Diagnostic events emitted while a scan runs. Observers never influence
/// the result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScanEvent<'a> {
    Connecting { host: &'a str, port: u16 },
    Banner { candidate: &'a str, banner: &'a str },
    CommandSent { candidate: &'a str, command: &'a str },
    Confirmed { candidate: &'a str },
    Rejected { candidate: &'a str },
    Unclassified { candidate: &'a str, reply: &'a str },
    AuthRequired { reply: &'a str },
    Unsupported { reply: &'a str },
    TransportError { candidate: &'a str, error: &'a str },
    FatalConnect { error: &'a str },
    Cancelled,
}

impl ScanEvent<'_> {
    /// Lowest verbosity at which the event is shown. `None` means always.
    pub fn min_verbosity(&self) -> Option<Verbosity> {
        match self {
            Self::Connecting { .. } | Self::Banner { .. } | Self::CommandSent { .. } => {
                Some(Verbosity::Info)
            }
            Self::Confirmed { .. }
            | Self::Rejected { .. }
            | Self::Unclassified { .. }
            | Self::TransportError { .. } => Some(Verbosity::Detail),
            Self::AuthRequired { .. }
            | Self::Unsupported { .. }
            | Self::FatalConnect { .. }
            | Self::Cancelled => None,
        }
    }
}

pub trait ScanObserver {
    fn on_event(&mut self, event: &ScanEvent<'_>);
}

/// Discards everything.
#[derive(Debug, Default, Clone, Copy)]
pub struct NullObserver;

impl ScanObserver for NullObserver {
    fn on_event(&mut self, _event: &ScanEvent<'_>) {}
}

/// Forwards events to `tracing`, filtered by the configured verbosity.
#[derive(Debug, Clone, Copy)]
pub struct TracingObserver {
    verbosity: Verbosity,
}

impl TracingObserver {
    pub fn new(verbosity: Verbosity) -> Self {
        Self { verbosity }
    }

    fn enabled(&self, event: &ScanEvent<'_>) -> bool {
        event
            .min_verbosity()
            .is_none_or(|level| self.verbosity >= level)
    }
}

impl ScanObserver for TracingObserver {
    fn on_event(&mut self, event: &ScanEvent<'_>) {
        if !self.enabled(event) {
            return;
        }
        match event {
            ScanEvent::Connecting { host, port } => {
                tracing::info!(target: TARGET, "connecting to {host} on port {port}");
            }
            ScanEvent::Banner { candidate, banner } => {
                tracing::info!(target: TARGET, candidate, "banner: '{}'", banner.trim_end());
            }
            ScanEvent::CommandSent { candidate, command } => {
                tracing::info!(target: TARGET, candidate, "executing: {}", command.trim_end());
            }
            ScanEvent::Confirmed { candidate } => {
                tracing::debug!(target: TARGET, "username {candidate} is valid");
            }
            ScanEvent::Rejected { candidate } => {
                tracing::debug!(target: TARGET, "550 username {candidate} doesn't exist");
            }
            ScanEvent::Unclassified { candidate, reply } => {
                tracing::debug!(
                    target: TARGET,
                    candidate,
                    "unclassified reply: '{}'",
                    reply.trim_end()
                );
            }
            ScanEvent::TransportError { candidate, error } => {
                tracing::debug!(target: TARGET, candidate, "error occurred: '{error}'");
            }
            ScanEvent::AuthRequired { reply } => {
                tracing::warn!(
                    target: TARGET,
                    reply = reply.trim_end(),
                    "the server requires authentication"
                );
            }
            ScanEvent::Unsupported { reply } => {
                tracing::warn!(
                    target: TARGET,
                    reply = reply.trim_end(),
                    "the VRFY command is not supported"
                );
            }
            ScanEvent::FatalConnect { error } => {
                tracing::warn!(target: TARGET, error, "the connection to SMTP failed");
            }
            ScanEvent::Cancelled => {
                tracing::warn!(target: TARGET, "scan cancelled");
            }
        }
    }
}

impl<O: ScanObserver + ?Sized> ScanObserver for &mut O {
    fn on_event(&mut self, event: &ScanEvent<'_>) {
        (**self).on_event(event);
    }
}
