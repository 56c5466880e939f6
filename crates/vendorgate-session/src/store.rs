//! The session store: the application-wide record of who is logged in.
//!
//! # Ownership note
//!
//! `SessionStore` is a plain value, not a global and not behind a lock.
//! The application's composition root owns exactly one and lends it out
//! (`&mut`) to the login flow for the duration of a submission. That
//! makes "two overlapping submissions writing the same slot" a borrow
//! error rather than a runtime race.

use crate::{AuthState, Session};

/// Receives the session produced by a successful login.
///
/// The login flow only *requests* session creation; whoever implements
/// this trait decides where the session lives.
///
/// # Example
///
/// ```rust
/// use vendorgate_session::{Session, SessionSink};
///
/// /// Keeps only the most recent vendor's name.
/// struct LastVendorName(Option<String>);
///
/// impl SessionSink for LastVendorName {
///     fn set_session(&mut self, session: Session) {
///         self.0 = Some(session.account.name);
///     }
/// }
/// ```
pub trait SessionSink {
    /// Stores a newly established session, replacing any previous one.
    fn set_session(&mut self, session: Session);
}

/// Holds the current [`AuthState`].
///
/// ## Lifecycle
///
/// ```text
/// new() ──→ [Unauthenticated] ──set_session()──→ [Authenticated]
///                  ↑                                   │
///                  └──────────────logout()─────────────┘
/// ```
#[derive(Debug, Default)]
pub struct SessionStore {
    state: AuthState,
}

impl SessionStore {
    /// Creates an unauthenticated store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ends the current session.
    ///
    /// Returns the session that was dropped, or `None` if nobody was
    /// logged in (logging out twice is harmless).
    pub fn logout(&mut self) -> Option<Session> {
        match std::mem::take(&mut self.state) {
            AuthState::Authenticated(session) => {
                tracing::info!(vendor_id = %session.account.id, "logged out");
                Some(session)
            }
            AuthState::Unauthenticated => None,
        }
    }

    /// The current session, if any.
    pub fn current(&self) -> Option<&Session> {
        self.state.session()
    }

    /// The full authentication state.
    pub fn state(&self) -> &AuthState {
        &self.state
    }

    /// Returns `true` if a session is held.
    pub fn is_authenticated(&self) -> bool {
        self.state.is_authenticated()
    }
}

impl SessionSink for SessionStore {
    fn set_session(&mut self, session: Session) {
        if let Some(previous) = self.state.session() {
            tracing::debug!(
                previous = %previous.account.id,
                next = %session.account.id,
                "replacing existing session"
            );
        }
        self.state = AuthState::Authenticated(session);
    }
}
