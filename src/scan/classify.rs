use crate::scan::types::OutcomeKind;

/// Maps a raw `VRFY` reply onto an [`OutcomeKind`].
pub trait ReplyClassifier {
    fn classify(&self, reply: &str) -> OutcomeKind;
}

/// Substring matching on status codes, first match wins:
/// `252`, then `550`, then `503`, then `500`.
///
/// The codes are searched anywhere in the reply, not only at the start of a
/// line, so `250 ok 252` counts as confirmed. Multi-line replies and other
/// codes are not interpreted.
#[derive(Debug, Clone, Copy, Default)]
pub struct SubstringClassifier;

const RULES: [(&str, OutcomeKind); 4] = [
    ("252", OutcomeKind::Confirmed),
    ("550", OutcomeKind::Rejected),
    ("503", OutcomeKind::AuthRequired),
    ("500", OutcomeKind::Unsupported),
];

impl ReplyClassifier for SubstringClassifier {
    fn classify(&self, reply: &str) -> OutcomeKind {
        RULES
            .iter()
            .find(|(code, _)| reply.contains(code))
            .map(|(_, kind)| *kind)
            .unwrap_or(OutcomeKind::OtherError)
    }
}

impl<F> ReplyClassifier for F
where
    F: Fn(&str) -> OutcomeKind,
{
    fn classify(&self, reply: &str) -> OutcomeKind {
        self(reply)
    }
}
