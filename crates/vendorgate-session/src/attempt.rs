//! The login check itself.
//!
//! [`validate`] runs the three checks in a fixed order:
//!
//! ```text
//! 1. roster lookup by id     → NoAccountSelected
//! 2. exact email comparison  → EmailMismatch
//! 3. password length         → InvalidPassword
//! ```
//!
//! The first failing check decides the error. Reordering them would
//! change which message the operator sees for a doubly-wrong form.

use std::fmt;

use vendorgate_roster::{Roster, VendorAccount, VendorId};

use crate::{LoginConfig, LoginError, Session, SessionSink};

/// One form submission: the selected vendor, the typed email and password.
///
/// Created fresh for every submission and consumed by
/// [`attempt_login`]. Nothing is kept between attempts, so repeating an
/// identical failing attempt always fails the same way.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginAttempt {
    pub vendor_id: VendorId,
    pub email: String,
    pub password: String,
}

impl LoginAttempt {
    pub fn new(
        vendor_id: impl Into<String>,
        email: impl Into<String>,
        password: impl Into<String>,
    ) -> Self {
        Self {
            vendor_id: VendorId(vendor_id.into()),
            email: email.into(),
            password: password.into(),
        }
    }
}

// Hand-written so the password never reaches a log line.
impl fmt::Debug for LoginAttempt {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoginAttempt")
            .field("vendor_id", &self.vendor_id)
            .field("email", &self.email)
            .field("password", &"<redacted>")
            .finish()
    }
}

/// Checks an attempt against the roster and returns the matched account.
///
/// Pure: reads the roster, touches nothing else.
///
/// # Errors
/// - [`LoginError::NoAccountSelected`] — id not in the roster
/// - [`LoginError::EmailMismatch`] — email differs from the account's
/// - [`LoginError::InvalidPassword`] — password shorter than
///   `config.min_password_len` UTF-16 code units
pub fn validate<'r, R>(
    roster: &'r R,
    attempt: &LoginAttempt,
    config: &LoginConfig,
) -> Result<&'r VendorAccount, LoginError>
where
    R: Roster + ?Sized,
{
    let account = roster
        .find(&attempt.vendor_id)
        .ok_or(LoginError::NoAccountSelected)?;

    if attempt.email != account.email {
        return Err(LoginError::EmailMismatch);
    }

    // UTF-16 code units, the unit browser form input reports: "😀😀😀"
    // is six long, "pässwd" is six long.
    if attempt.password.encode_utf16().count() < config.min_password_len {
        return Err(LoginError::InvalidPassword);
    }

    Ok(account)
}

/// Validates an attempt and, on success, establishes a session.
///
/// The sink receives the new session exactly once. On failure the sink
/// is not called, so whatever state it held is unchanged.
///
/// Returns a copy of the session handed to the sink.
pub fn attempt_login<R, S>(
    roster: &R,
    sink: &mut S,
    attempt: LoginAttempt,
    config: &LoginConfig,
) -> Result<Session, LoginError>
where
    R: Roster + ?Sized,
    S: SessionSink + ?Sized,
{
    let account = match validate(roster, &attempt, config) {
        Ok(account) => account,
        Err(e) => {
            tracing::debug!(
                vendor_id = %attempt.vendor_id,
                kind = e.kind(),
                "login attempt rejected"
            );
            return Err(e);
        }
    };

    let session = Session::establish(account.clone());
    sink.set_session(session.clone());

    tracing::info!(
        vendor_id = %session.account.id,
        level = %session.account.level,
        "session established"
    );
    Ok(session)
}

#[cfg(test)]
mod tests {
    //! Unit tests for `validate` and `attempt_login`.
    //!
    //! Naming: `test_{function}_{scenario}_{expected}`.

    use super::*;
    use vendorgate_roster::{StaticRoster, VendorLevel};

    // -- Helpers ----------------------------------------------------------

    /// Records every session it receives, so tests can count calls.
    #[derive(Default)]
    struct RecordingSink {
        received: Vec<Session>,
    }

    impl SessionSink for RecordingSink {
        fn set_session(&mut self, session: Session) {
            self.received.push(session);
        }
    }

    fn config() -> LoginConfig {
        LoginConfig::default()
    }

    // =====================================================================
    // validate()
    // =====================================================================

    #[test]
    fn test_validate_unknown_id_returns_no_account_selected() {
        let roster = StaticRoster::fixture();

        for id in ["", "0", "5", "super", " 1"] {
            let attempt = LoginAttempt::new(id, "super@vendor.com", "abcdef");
            assert_eq!(
                validate(&roster, &attempt, &config()),
                Err(LoginError::NoAccountSelected),
                "id {id:?} is not in the roster"
            );
        }
    }

    #[test]
    fn test_validate_unknown_id_wins_over_bad_email_and_password() {
        let roster = StaticRoster::fixture();
        let attempt = LoginAttempt::new("", "", "");

        assert_eq!(
            validate(&roster, &attempt, &config()),
            Err(LoginError::NoAccountSelected)
        );
    }

    #[test]
    fn test_validate_email_is_case_sensitive() {
        let roster = StaticRoster::fixture();
        let attempt = LoginAttempt::new("1", "Super@vendor.com", "abcdef");

        assert_eq!(
            validate(&roster, &attempt, &config()),
            Err(LoginError::EmailMismatch)
        );
    }

    #[test]
    fn test_validate_email_of_other_account_is_mismatch() {
        // Right email, wrong vendor selected.
        let roster = StaticRoster::fixture();
        let attempt = LoginAttempt::new("2", "super@vendor.com", "abcdef");

        assert_eq!(
            validate(&roster, &attempt, &config()),
            Err(LoginError::EmailMismatch)
        );
    }

    #[test]
    fn test_validate_email_mismatch_wins_over_short_password() {
        let roster = StaticRoster::fixture();
        let attempt = LoginAttempt::new("2", "wrong@x.com", "1");

        assert_eq!(
            validate(&roster, &attempt, &config()),
            Err(LoginError::EmailMismatch)
        );
    }

    #[test]
    fn test_validate_password_boundary() {
        let roster = StaticRoster::fixture();
        let short = LoginAttempt::new("4", "local@vendor.com", "12345");
        let exact = LoginAttempt::new("4", "local@vendor.com", "123456");

        assert_eq!(
            validate(&roster, &short, &config()),
            Err(LoginError::InvalidPassword)
        );
        assert!(validate(&roster, &exact, &config()).is_ok());
    }

    #[test]
    fn test_validate_password_length_ignores_byte_count() {
        let roster = StaticRoster::fixture();
        // Five UTF-16 units, ten bytes.
        let attempt = LoginAttempt::new("4", "local@vendor.com", "ééééé");

        assert_eq!(
            validate(&roster, &attempt, &config()),
            Err(LoginError::InvalidPassword)
        );
    }

    #[test]
    fn test_validate_password_length_counts_utf16_units() {
        let roster = StaticRoster::fixture();
        // Each emoji is one char but two UTF-16 units.
        let three = LoginAttempt::new("1", "super@vendor.com", "😀😀😀");
        let two = LoginAttempt::new("1", "super@vendor.com", "😀😀");

        assert!(validate(&roster, &three, &config()).is_ok());
        assert_eq!(
            validate(&roster, &two, &config()),
            Err(LoginError::InvalidPassword)
        );
    }

    #[test]
    fn test_validate_respects_configured_minimum() {
        let roster = StaticRoster::fixture();
        let strict = LoginConfig {
            min_password_len: 10,
            ..LoginConfig::default()
        };
        let attempt = LoginAttempt::new("3", "citya@vendor.com", "abcdefgh");

        assert_eq!(
            validate(&roster, &attempt, &strict),
            Err(LoginError::InvalidPassword)
        );
    }

    #[test]
    fn test_validate_success_returns_matched_account() {
        let roster = StaticRoster::fixture();
        let attempt = LoginAttempt::new("3", "citya@vendor.com", "secret1");

        let account = validate(&roster, &attempt, &config()).unwrap();

        assert_eq!(account.id, VendorId::from("3"));
        assert_eq!(account.level, VendorLevel::City);
    }

    // =====================================================================
    // attempt_login()
    // =====================================================================

    #[test]
    fn test_attempt_login_success_calls_sink_once() {
        let roster = StaticRoster::fixture();
        let mut sink = RecordingSink::default();

        let session = attempt_login(
            &roster,
            &mut sink,
            LoginAttempt::new("1", "super@vendor.com", "abcdef"),
            &config(),
        )
        .unwrap();

        assert_eq!(sink.received.len(), 1);
        assert_eq!(sink.received[0], session);
        assert_eq!(session.account.level, VendorLevel::Super);
    }

    #[test]
    fn test_attempt_login_failure_never_calls_sink() {
        let roster = StaticRoster::fixture();
        let mut sink = RecordingSink::default();

        let result = attempt_login(
            &roster,
            &mut sink,
            LoginAttempt::new("3", "citya@vendor.com", "123"),
            &config(),
        );

        assert_eq!(result, Err(LoginError::InvalidPassword));
        assert!(sink.received.is_empty());
    }

    #[test]
    fn test_attempt_login_repeated_failure_is_stable() {
        let roster = StaticRoster::fixture();
        let mut sink = RecordingSink::default();

        for _ in 0..3 {
            let result = attempt_login(
                &roster,
                &mut sink,
                LoginAttempt::new("2", "wrong@x.com", "abcdef"),
                &config(),
            );
            assert_eq!(result, Err(LoginError::EmailMismatch));
        }
        assert!(sink.received.is_empty());
    }

    #[test]
    fn test_login_attempt_debug_redacts_password() {
        let attempt = LoginAttempt::new("1", "super@vendor.com", "hunter22");

        let printed = format!("{attempt:?}");

        assert!(!printed.contains("hunter22"));
        assert!(printed.contains("<redacted>"));
    }
}
