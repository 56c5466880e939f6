//! Session types: the records that say who is logged in.
//!
//! A "session" is the application's record of an authenticated vendor. It
//! tracks:
//! - WHO is logged in (the full `VendorAccount`)
//! - WHICH session this is (a random token)
//! - WHEN it was established

use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};
use vendorgate_roster::VendorAccount;

// ---------------------------------------------------------------------------
// LoginConfig
// ---------------------------------------------------------------------------

/// Configuration for the login flow.
///
/// Sensible defaults are provided; override just the fields you care
/// about with `..LoginConfig::default()`. `#[serde(default)]` lets a
/// config file do the same.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LoginConfig {
    /// Simulated network latency before validation runs, in milliseconds.
    ///
    /// Default: 1000. Set to 0 to validate immediately.
    pub latency_ms: u64,

    /// Minimum password length, counted in UTF-16 code units (what a
    /// browser reports as the input's length). An emoji counts as two.
    ///
    /// Default: 6. This is a placeholder check, not credential
    /// verification.
    pub min_password_len: usize,

    /// Where to send the operator after login when the caller didn't
    /// say where they came from.
    ///
    /// Default: `"/"`.
    pub default_redirect: String,
}

impl LoginConfig {
    /// The simulated latency as a `Duration`.
    pub fn latency(&self) -> Duration {
        Duration::from_millis(self.latency_ms)
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            min_password_len: 6,
            default_redirect: "/".to_string(),
        }
    }
}

// ---------------------------------------------------------------------------
// Session
// ---------------------------------------------------------------------------

/// An authenticated vendor.
///
/// Only [`attempt_login`](crate::attempt_login) creates these in normal
/// operation, so holding a `Session` means the account passed validation.
#[derive(Debug, Clone, PartialEq)]
pub struct Session {
    /// The roster entry this session was established for.
    pub account: VendorAccount,

    /// A 32-character hex string (128 bits of randomness) identifying
    /// this session. Two logins as the same vendor get different tokens.
    pub token: String,

    /// When the session was established.
    pub established_at: DateTime<Utc>,
}

impl Session {
    /// Wraps an account in a fresh session.
    pub fn establish(account: VendorAccount) -> Self {
        Self {
            account,
            token: generate_token(),
            established_at: Utc::now(),
        }
    }
}

// ---------------------------------------------------------------------------
// AuthState
// ---------------------------------------------------------------------------

/// Whether anyone is logged in.
///
/// ```text
///   Unauthenticated ──(successful login)──→ Authenticated
///          ↑                                     │
///          └──────────────(logout)───────────────┘
/// ```
///
/// A successful login while already `Authenticated` replaces the session.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum AuthState {
    #[default]
    Unauthenticated,
    Authenticated(Session),
}

impl AuthState {
    /// Returns `true` if a session is held.
    pub fn is_authenticated(&self) -> bool {
        matches!(self, Self::Authenticated(_))
    }

    /// The held session, if any.
    pub fn session(&self) -> Option<&Session> {
        match self {
            Self::Authenticated(session) => Some(session),
            Self::Unauthenticated => None,
        }
    }
}

/// Generates a random 32-character lowercase hex string.
fn generate_token() -> String {
    let mut rng = rand::rng();
    let bytes: [u8; 16] = rng.random();
    bytes.iter().map(|b| format!("{b:02x}")).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use vendorgate_roster::{Roster, StaticRoster, VendorId};

    fn super_account() -> VendorAccount {
        StaticRoster::fixture()
            .find(&VendorId::from("1"))
            .cloned()
            .unwrap()
    }

    #[test]
    fn test_establish_generates_hex_token() {
        let session = Session::establish(super_account());

        assert_eq!(session.token.len(), 32);
        assert!(session.token.chars().all(|c| c.is_ascii_hexdigit()));
    }

    #[test]
    fn test_establish_twice_gives_distinct_tokens() {
        let a = Session::establish(super_account());
        let b = Session::establish(super_account());

        assert_ne!(a.token, b.token, "tokens must be unique per session");
    }

    #[test]
    fn test_auth_state_default_is_unauthenticated() {
        let state = AuthState::default();

        assert!(!state.is_authenticated());
        assert!(state.session().is_none());
    }

    #[test]
    fn test_login_config_default() {
        let config = LoginConfig::default();

        assert_eq!(config.latency(), Duration::from_secs(1));
        assert_eq!(config.min_password_len, 6);
        assert_eq!(config.default_redirect, "/");
    }

    #[test]
    fn test_login_config_partial_toml_keeps_defaults() {
        let config: LoginConfig = toml::from_str("latency_ms = 0").unwrap();

        assert_eq!(config.latency_ms, 0);
        assert_eq!(config.min_password_len, 6);
        assert_eq!(config.default_redirect, "/");
    }
}
