use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;

use crate::scan::classify::{ReplyClassifier, SubstringClassifier};
use crate::scan::error::ProbeError;
use crate::scan::observer::{NullObserver, ScanEvent, ScanObserver, TracingObserver};
use crate::scan::options::ScanConfig;
use crate::scan::session::{Dialer, TcpDialer, VrfySession};
use crate::scan::types::{AbortReason, OutcomeKind, ProbeOutcome, ScanResult, ScanStatus};

/// Check every candidate against the configured server over plain TCP,
/// logging through `tracing` at the configured verbosity.
pub fn run(config: &ScanConfig, candidates: &[String]) -> ScanResult {
    Scanner::new(config.clone())
        .with_observer(TracingObserver::new(config.verbosity))
        .run(candidates)
}

/// Sequential VRFY scanner. One connection per candidate, each closed before
/// the next one is opened.
pub struct Scanner<D = TcpDialer, C = SubstringClassifier, O = NullObserver> {
    config: ScanConfig,
    dialer: D,
    classifier: C,
    observer: O,
    cancel: Option<Arc<AtomicBool>>,
}

impl Scanner {
    pub fn new(config: ScanConfig) -> Self {
        Self {
            config,
            dialer: TcpDialer,
            classifier: SubstringClassifier,
            observer: NullObserver,
            cancel: None,
        }
    }
}

impl<D, C, O> Scanner<D, C, O>
where
    D: Dialer,
    C: ReplyClassifier,
    O: ScanObserver,
{
    pub fn with_dialer<D2: Dialer>(self, dialer: D2) -> Scanner<D2, C, O> {
        Scanner {
            config: self.config,
            dialer,
            classifier: self.classifier,
            observer: self.observer,
            cancel: self.cancel,
        }
    }

    pub fn with_classifier<C2: ReplyClassifier>(self, classifier: C2) -> Scanner<D, C2, O> {
        Scanner {
            config: self.config,
            dialer: self.dialer,
            classifier,
            observer: self.observer,
            cancel: self.cancel,
        }
    }

    pub fn with_observer<O2: ScanObserver>(self, observer: O2) -> Scanner<D, C, O2> {
        Scanner {
            config: self.config,
            dialer: self.dialer,
            classifier: self.classifier,
            observer,
            cancel: self.cancel,
        }
    }

    /// Checked between candidates; once set the scan ends with
    /// [`AbortReason::Cancelled`].
    pub fn with_cancel(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn config(&self) -> &ScanConfig {
        &self.config
    }

    pub fn into_observer(self) -> O {
        self.observer
    }

    pub fn run(&mut self, candidates: &[String]) -> ScanResult {
        let mut confirmed = Vec::new();
        let mut status = ScanStatus::Completed;

        for (index, candidate) in candidates.iter().enumerate() {
            if self.cancelled() {
                self.observer.on_event(&ScanEvent::Cancelled);
                status = ScanStatus::Aborted(AbortReason::Cancelled);
                break;
            }

            let step = self.check(candidate);
            if step.outcome.kind == OutcomeKind::Confirmed {
                confirmed.push(step.outcome.candidate);
            }
            if let Some(reason) = step.abort {
                status = ScanStatus::Aborted(reason);
                break;
            }

            let has_next = index + 1 < candidates.len();
            if has_next && !self.config.delay.is_zero() {
                thread::sleep(self.config.delay);
            }
        }

        ScanResult::new(confirmed, status)
    }

    fn cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .is_some_and(|flag| flag.load(Ordering::SeqCst))
    }

    /// Full cycle for one candidate. The session is dropped, closing the
    /// connection, before this returns.
    fn check(&mut self, candidate: &str) -> Step {
        self.observer.on_event(&ScanEvent::Connecting {
            host: &self.config.host,
            port: self.config.port,
        });

        let mut session = match VrfySession::open(
            &self.dialer,
            &self.config.host,
            self.config.port,
            self.config.timeout,
        ) {
            Ok(session) => session,
            Err(err) => return self.connect_failed(candidate, err),
        };

        match self.exchange(&mut session, candidate) {
            Ok(reply) => self.verdict(candidate, reply),
            Err(err) => {
                let text = err.to_string();
                self.observer.on_event(&ScanEvent::TransportError {
                    candidate,
                    error: &text,
                });
                Step::proceed(ProbeOutcome::new(candidate, OutcomeKind::OtherError, text))
            }
        }
    }

    fn exchange(
        &mut self,
        session: &mut VrfySession<D::Conn>,
        candidate: &str,
    ) -> Result<String, ProbeError> {
        let banner = session.read_banner()?;
        self.observer.on_event(&ScanEvent::Banner {
            candidate,
            banner: &banner,
        });

        let command = session.send_vrfy(candidate)?;
        self.observer.on_event(&ScanEvent::CommandSent {
            candidate,
            command: &command,
        });

        session.read_reply()
    }

    fn verdict(&mut self, candidate: &str, reply: String) -> Step {
        let kind = self.classifier.classify(&reply);
        match kind {
            OutcomeKind::Confirmed => {
                self.observer.on_event(&ScanEvent::Confirmed { candidate })
            }
            OutcomeKind::Rejected => self.observer.on_event(&ScanEvent::Rejected { candidate }),
            OutcomeKind::AuthRequired => {
                self.observer.on_event(&ScanEvent::AuthRequired { reply: &reply })
            }
            OutcomeKind::Unsupported => {
                self.observer.on_event(&ScanEvent::Unsupported { reply: &reply })
            }
            OutcomeKind::ConnectionFailed | OutcomeKind::OtherError => {
                self.observer.on_event(&ScanEvent::Unclassified {
                    candidate,
                    reply: &reply,
                })
            }
        }
        let outcome = ProbeOutcome::new(candidate, kind, reply);
        Step {
            abort: kind.abort_reason(),
            outcome,
        }
    }

    fn connect_failed(&mut self, candidate: &str, err: ProbeError) -> Step {
        let text = err.to_string();
        self.observer.on_event(&ScanEvent::TransportError {
            candidate,
            error: &text,
        });
        let outcome = ProbeOutcome::new(candidate, OutcomeKind::ConnectionFailed, text);
        if err.is_fatal() {
            self.observer.on_event(&ScanEvent::FatalConnect {
                error: &outcome.reply,
            });
            return Step {
                outcome,
                abort: Some(AbortReason::ConnectionError),
            };
        }
        Step::proceed(outcome)
    }
}

/// Outcome of one iteration plus the loop transition it triggers.
struct Step {
    outcome: ProbeOutcome,
    abort: Option<AbortReason>,
}

impl Step {
    fn proceed(outcome: ProbeOutcome) -> Self {
        Self {
            outcome,
            abort: None,
        }
    }
}
