//! Login validation and session state for Vendorgate.
//!
//! This crate handles everything between "the operator pressed Sign in"
//! and "the application knows who is logged in":
//!
//! 1. **Validation** — checking a [`LoginAttempt`] against a
//!    [`Roster`](vendorgate_roster::Roster) ([`validate`])
//! 2. **Establishment** — turning a validated account into a [`Session`]
//!    and handing it to a [`SessionSink`] ([`attempt_login`])
//! 3. **State** — holding the current [`AuthState`] until logout
//!    ([`SessionStore`])
//!
//! # How it fits in the stack
//!
//! ```text
//! Portal (above)  ← async boundary, redirects, error display
//!     ↕
//! Session Layer (this crate)  ← validation and authentication state
//!     ↕
//! Roster Layer (below)  ← provides VendorAccount lookups
//! ```
//!
//! Everything here is synchronous. The simulated network delay lives in
//! the layer above.

mod attempt;
mod error;
mod session;
mod store;

pub use attempt::{LoginAttempt, attempt_login, validate};
pub use error::LoginError;
pub use session::{AuthState, LoginConfig, Session};
pub use store::{SessionSink, SessionStore};
