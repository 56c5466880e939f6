//! The asynchronous login boundary.
//!
//! Validation is synchronous ([`attempt_login`]). What makes a login
//! *feel* like a network call is the latency in front of it, so that
//! is all this module adds:
//!
//! ```text
//! submit() ──→ sleep(latency) ──→ attempt_login() ──→ sink.set_session()
//!                  │
//!                  └── cancel fires first ──→ Err(Cancelled), sink untouched
//! ```

use std::future::Future;

use vendorgate_roster::Roster;
use vendorgate_session::{
    LoginAttempt, LoginConfig, Session, SessionSink, attempt_login,
};

use crate::LoginFlowError;

/// Runs login attempts against one roster with one configuration.
#[derive(Debug)]
pub struct LoginFlow<R: Roster> {
    roster: R,
    config: LoginConfig,
}

impl<R: Roster> LoginFlow<R> {
    pub fn new(roster: R, config: LoginConfig) -> Self {
        Self { roster, config }
    }

    pub fn roster(&self) -> &R {
        &self.roster
    }

    pub fn config(&self) -> &LoginConfig {
        &self.config
    }

    /// Waits out the configured latency, then validates the attempt.
    ///
    /// On success the sink receives the session once. On failure the
    /// sink is not touched.
    pub async fn submit<S>(
        &self,
        sink: &mut S,
        attempt: LoginAttempt,
    ) -> Result<Session, LoginFlowError>
    where
        S: SessionSink + ?Sized,
    {
        tokio::time::sleep(self.config.latency()).await;
        self.validate_now(sink, attempt)
    }

    /// Like [`submit`](Self::submit), but gives up if `cancel` completes
    /// before the latency has elapsed.
    ///
    /// Cancellation is only observed during the wait. Once validation
    /// starts it runs to completion, so a session is either fully
    /// established or never handed to the sink.
    ///
    /// # Example
    ///
    /// ```rust
    /// # async fn demo() {
    /// use vendorgate::{LoginFlow, LoginFlowError};
    /// use vendorgate_roster::StaticRoster;
    /// use vendorgate_session::{LoginAttempt, LoginConfig, SessionStore};
    ///
    /// let flow = LoginFlow::new(StaticRoster::fixture(), LoginConfig::default());
    /// let mut store = SessionStore::new();
    /// let (dismiss, dismissed) = tokio::sync::oneshot::channel::<()>();
    ///
    /// // The view goes away before the response arrives.
    /// drop(dismiss);
    ///
    /// let result = flow
    ///     .submit_cancellable(
    ///         &mut store,
    ///         LoginAttempt::new("1", "super@vendor.com", "abcdef"),
    ///         async { let _ = dismissed.await; },
    ///     )
    ///     .await;
    /// assert_eq!(result, Err(LoginFlowError::Cancelled));
    /// assert!(!store.is_authenticated());
    /// # }
    /// ```
    pub async fn submit_cancellable<S, F>(
        &self,
        sink: &mut S,
        attempt: LoginAttempt,
        cancel: F,
    ) -> Result<Session, LoginFlowError>
    where
        S: SessionSink + ?Sized,
        F: Future<Output = ()>,
    {
        tokio::select! {
            // Cancellation wins ties: a view that is already gone should
            // not log anyone in.
            biased;
            _ = cancel => {
                tracing::debug!(
                    vendor_id = %attempt.vendor_id,
                    "login cancelled before validation"
                );
                Err(LoginFlowError::Cancelled)
            }
            _ = tokio::time::sleep(self.config.latency()) => {
                self.validate_now(sink, attempt)
            }
        }
    }

    fn validate_now<S>(
        &self,
        sink: &mut S,
        attempt: LoginAttempt,
    ) -> Result<Session, LoginFlowError>
    where
        S: SessionSink + ?Sized,
    {
        attempt_login(&self.roster, sink, attempt, &self.config)
            .map_err(LoginFlowError::from)
    }
}
