//! `Portal`: the composition root for the login page.
//!
//! The portal owns the application's [`SessionStore`] and a
//! [`LoginFlow`], and speaks to the presentation layer in its terms:
//! raw form input in, a redirect or an error string out.

use std::future::Future;

use serde::Serialize;
use vendorgate_roster::{JsonRosterCodec, Roster, RosterCodec, StaticRoster, VendorId};
use vendorgate_session::{LoginAttempt, LoginConfig, Session, SessionStore};

use crate::{LoginFlow, LoginFlowError, VendorgateError};

/// Shown for failures that aren't a credential problem.
pub const GENERIC_ERROR: &str = "An error occurred";

// ---------------------------------------------------------------------------
// Presentation types
// ---------------------------------------------------------------------------

/// What the login page should do after a submission.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", content = "value")]
pub enum LoginOutcome {
    /// Navigate to this path, replacing the login page in history.
    Redirect(String),
    /// Stay on the page and show this message under the form.
    Error(String),
}

/// One entry in the role picker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RoleOption {
    pub id: VendorId,
    /// `"<name> (<level>)"`.
    pub label: String,
}

/// The login form's fields and presentation state.
///
/// `is_loading` is `true` only while a submission is in flight; `error`
/// holds the message from the last failed submission and is cleared
/// when the next one starts.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LoginForm {
    pub vendor_id: String,
    pub email: String,
    pub password: String,
    pub is_loading: bool,
    pub error: Option<String>,
}

impl LoginForm {
    pub fn new(
        vendor_id: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            vendor_id: vendor_id.into(),
            email: email.into(),
            password: password.into(),
            ..Self::default()
        }
    }

    fn begin_submit(&mut self) -> LoginAttempt {
        self.error = None;
        self.is_loading = true;
        LoginAttempt::new(
            self.vendor_id.clone(),
            self.email.clone(),
            self.password.clone(),
        )
    }

    fn finish_submit(&mut self, outcome: &LoginOutcome) {
        self.is_loading = false;
        if let LoginOutcome::Error(message) = outcome {
            self.error = Some(message.clone());
        }
    }
}

// ---------------------------------------------------------------------------
// Portal
// ---------------------------------------------------------------------------

/// Owns the authentication state and the flow that changes it.
///
/// ## Lifecycle
///
/// ```text
/// Portal::new() ──→ login() ──→ [authenticated] ──→ logout()
///                     │                                 │
///                     └── Error(msg), state unchanged   └──→ [unauthenticated]
/// ```
pub struct Portal<R: Roster> {
    flow: LoginFlow<R>,
    store: SessionStore,
}

impl<R: Roster> Portal<R> {
    /// Creates an unauthenticated portal over the given roster.
    pub fn new(roster: R, config: LoginConfig) -> Self {
        Self {
            flow: LoginFlow::new(roster, config),
            store: SessionStore::new(),
        }
    }

    /// The choices for the role picker, in roster order.
    pub fn role_options(&self) -> Vec<RoleOption> {
        self.flow
            .roster()
            .accounts()
            .iter()
            .map(|account| RoleOption {
                id: account.id.clone(),
                label: account.option_label(),
            })
            .collect()
    }

    /// Submits the form.
    ///
    /// `from` is the path the visitor was on before being sent to the
    /// login page. On success the outcome redirects there (or to the
    /// configured default). On failure the outcome carries the message
    /// to display, and the form's `error` is set to the same text.
    pub async fn login(
        &mut self,
        form: &mut LoginForm,
        from: Option<&str>,
    ) -> LoginOutcome {
        let attempt = form.begin_submit();
        let result = self.flow.submit(&mut self.store, attempt).await;
        self.conclude(form, from, result)
    }

    /// Like [`login`](Self::login), but abandons the submission if
    /// `cancel` completes first (e.g. the view was dismissed).
    pub async fn login_cancellable<F>(
        &mut self,
        form: &mut LoginForm,
        from: Option<&str>,
        cancel: F,
    ) -> LoginOutcome
    where
        F: Future<Output = ()>,
    {
        let attempt = form.begin_submit();
        let result = self
            .flow
            .submit_cancellable(&mut self.store, attempt, cancel)
            .await;
        self.conclude(form, from, result)
    }

    /// Where to send a visitor who opens the login page while already
    /// logged in. `None` means "show the form".
    pub fn redirect_if_authenticated(&self, from: Option<&str>) -> Option<String> {
        self.store
            .is_authenticated()
            .then(|| self.redirect_target(from))
    }

    /// Ends the current session, returning it.
    pub fn logout(&mut self) -> Option<Session> {
        self.store.logout()
    }

    /// The current session, if any.
    pub fn session(&self) -> Option<&Session> {
        self.store.current()
    }

    pub fn store(&self) -> &SessionStore {
        &self.store
    }

    pub fn config(&self) -> &LoginConfig {
        self.flow.config()
    }

    fn conclude(
        &self,
        form: &mut LoginForm,
        from: Option<&str>,
        result: Result<Session, LoginFlowError>,
    ) -> LoginOutcome {
        let outcome = match result {
            Ok(_) => LoginOutcome::Redirect(self.redirect_target(from)),
            Err(LoginFlowError::Rejected(e)) => LoginOutcome::Error(e.to_string()),
            Err(LoginFlowError::Cancelled) => {
                LoginOutcome::Error(GENERIC_ERROR.to_string())
            }
        };
        form.finish_submit(&outcome);
        outcome
    }

    fn redirect_target(&self, from: Option<&str>) -> String {
        match from {
            Some(path) if !path.is_empty() => path.to_string(),
            _ => self.flow.config().default_redirect.clone(),
        }
    }
}

impl Portal<StaticRoster> {
    /// Builds a portal over a roster document in JSON.
    ///
    /// # Errors
    /// Returns [`VendorgateError::Roster`] if the document can't be
    /// parsed or contains duplicate ids.
    pub fn from_json_roster(
        data: &[u8],
        config: LoginConfig,
    ) -> Result<Self, VendorgateError> {
        let roster = JsonRosterCodec.load(data)?;
        Ok(Self::new(roster, config))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn instant_portal() -> Portal<StaticRoster> {
        Portal::new(
            StaticRoster::fixture(),
            LoginConfig {
                latency_ms: 0,
                ..LoginConfig::default()
            },
        )
    }

    #[test]
    fn test_role_options_list_fixture_in_order() {
        let portal = instant_portal();

        let labels: Vec<_> =
            portal.role_options().into_iter().map(|o| o.label).collect();

        assert_eq!(
            labels,
            vec![
                "Super Vendor HQ (super)",
                "North Region Vendor (regional)",
                "City A Vendor (city)",
                "Local Vendor A (local)",
            ]
        );
    }

    #[test]
    fn test_redirect_if_authenticated_when_logged_out_is_none() {
        let portal = instant_portal();

        assert_eq!(portal.redirect_if_authenticated(Some("/orders")), None);
    }

    #[test]
    fn test_form_begin_submit_clears_error_and_sets_loading() {
        let mut form = LoginForm::new("1", "super@vendor.com", "abcdef");
        form.error = Some("Invalid password".into());

        let attempt = form.begin_submit();

        assert!(form.is_loading);
        assert_eq!(form.error, None);
        assert_eq!(attempt, LoginAttempt::new("1", "super@vendor.com", "abcdef"));
    }

    #[test]
    fn test_form_finish_submit_records_error() {
        let mut form = LoginForm::new("", "", "");
        form.begin_submit();

        form.finish_submit(&LoginOutcome::Error("Please select a vendor role".into()));

        assert!(!form.is_loading);
        assert_eq!(form.error.as_deref(), Some("Please select a vendor role"));
    }

    #[test]
    fn test_from_json_roster_rejects_garbage() {
        let result = Portal::from_json_roster(b"{", LoginConfig::default());

        assert!(matches!(result, Err(VendorgateError::Roster(_))));
    }
}
