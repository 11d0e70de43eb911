#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use crate::net::types::Teacher;

/// Where the session currently stands.
///
/// The profile lives inside [`SessionPhase::Authenticated`], so holding a
/// profile without being authenticated (or the reverse) is unrepresentable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum SessionPhase {
    /// Restoring a persisted session at startup. Never re-entered once left.
    #[default]
    Bootstrapping,
    Unauthenticated,
    Authenticated(Teacher),
}

/// Reactive session record driven by [`crate::auth::SessionManager`].
///
/// Mutations go through the transition methods below; a new operation always
/// clears the previous error before raising the pending flag.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SessionState {
    phase: SessionPhase,
    pending: bool,
    error: Option<String>,
}

impl SessionState {
    pub fn is_authenticated(&self) -> bool {
        matches!(self.phase, SessionPhase::Authenticated(_))
    }

    pub fn is_bootstrapping(&self) -> bool {
        matches!(self.phase, SessionPhase::Bootstrapping)
    }

    /// True during initial bootstrap or while an auth operation is in flight.
    pub fn is_loading(&self) -> bool {
        self.pending || self.is_bootstrapping()
    }

    pub fn teacher(&self) -> Option<&Teacher> {
        match &self.phase {
            SessionPhase::Authenticated(teacher) => Some(teacher),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Start a mutating operation.
    pub(crate) fn begin(&mut self) {
        self.error = None;
        self.pending = true;
    }

    /// The operation produced a fresh token + profile pair.
    pub(crate) fn authenticated(&mut self, teacher: Teacher) {
        self.phase = SessionPhase::Authenticated(teacher);
        self.pending = false;
        self.error = None;
    }

    /// The server rejected the operation: drop any held profile.
    pub(crate) fn rejected(&mut self, message: String) {
        self.phase = SessionPhase::Unauthenticated;
        self.pending = false;
        self.error = Some(message);
    }

    /// The operation finished without touching the authentication phase.
    pub(crate) fn settled(&mut self) {
        self.pending = false;
    }

    /// A failure that leaves the authentication phase alone
    /// (resend code, password-reset request/confirm).
    pub(crate) fn failed(&mut self, message: String) {
        self.pending = false;
        self.error = Some(message);
    }

    pub(crate) fn signed_out(&mut self) {
        self.phase = SessionPhase::Unauthenticated;
        self.pending = false;
        self.error = None;
    }

    pub(crate) fn clear_error(&mut self) {
        self.error = None;
    }
}
