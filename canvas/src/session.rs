//! Editor session lifecycle: `Loading → Ready → Disposed`.
//!
//! The host issues a [`Ticket`] to every asynchronous task it starts (the
//! initial document fetch, each save). When the task completes it must check
//! [`Session::accepts`] before touching the surface or UI state. Disposing
//! the session invalidates every outstanding ticket, so completions that
//! arrive after the editor is torn down become no-ops.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

/// Lifecycle phase of an editor session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// Surface acquired, initial document fetch in flight.
    #[default]
    Loading,
    /// Document applied; tool actions are accepted.
    Ready,
    /// Surface released; nothing may touch it.
    Disposed,
}

/// Token carried by an async task. Valid until the issuing session is disposed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    epoch: u64,
}

#[derive(Debug, Default)]
pub struct Session {
    phase: Phase,
    epoch: u64,
}

impl Session {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        self.phase
    }

    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase == Phase::Ready
    }

    /// Issue a ticket for a task starting now.
    #[must_use]
    pub fn ticket(&self) -> Ticket {
        Ticket { epoch: self.epoch }
    }

    /// Whether a completing task holding `ticket` may still act.
    #[must_use]
    pub fn accepts(&self, ticket: Ticket) -> bool {
        self.phase != Phase::Disposed && ticket.epoch == self.epoch
    }

    /// `Loading → Ready`. Returns `false` from any other phase.
    pub fn mark_ready(&mut self) -> bool {
        if self.phase != Phase::Loading {
            return false;
        }
        self.phase = Phase::Ready;
        true
    }

    /// Release the session. Every ticket issued so far stops being accepted.
    pub fn dispose(&mut self) {
        self.phase = Phase::Disposed;
        self.epoch = self.epoch.wrapping_add(1);
    }
}
