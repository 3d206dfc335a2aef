//! Capabilities the state machine depends on, injected so it can be driven
//! by scripted fakes instead of a network and a dialog.

use super::errors::FetchError;
use crate::fingerprint::Fingerprint;
use std::future::Future;

/// Where the current build's fingerprint is read from.
pub trait FingerprintSource {
    /// Fetch the fingerprint artifact as text.
    ///
    /// This is the only suspension point of a check.
    fn fetch(&self) -> impl Future<Output = Result<Fingerprint, FetchError>> + Send;
}

/// The user's answer to the reload prompt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Decision {
    Accept,
    Decline,
}

/// Synchronous, blocking confirmation.
pub trait DecisionPort {
    fn ask(&mut self, prompt: &str) -> Decision;
}

impl<F> DecisionPort for F
where
    F: FnMut(&str) -> Decision,
{
    fn ask(&mut self, prompt: &str) -> Decision {
        self(prompt)
    }
}
