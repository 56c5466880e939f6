//! # Vendorgate
//!
//! Login flow for a vendor-management portal.
//!
//! An operator picks a vendor role from a roster, enters an email and a
//! password, and on success the portal holds a session for that vendor.
//! This crate ties the layers together:
//!
//! ```text
//! Portal (this crate)  ← redirects, error display, async boundary
//!     ↕
//! vendorgate-session   ← validation, Session, SessionStore
//!     ↕
//! vendorgate-roster    ← VendorAccount, Roster, fixture, JSON codec
//! ```
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use vendorgate::prelude::*;
//!
//! # async fn run() {
//! let mut portal = Portal::new(StaticRoster::fixture(), LoginConfig::default());
//! let mut form = LoginForm::new("1", "super@vendor.com", "abcdef");
//!
//! match portal.login(&mut form, Some("/orders")).await {
//!     LoginOutcome::Redirect(path) => println!("go to {path}"),
//!     LoginOutcome::Error(message) => println!("{message}"),
//! }
//! # }
//! ```

mod error;
mod flow;
mod portal;

pub use error::{LoginFlowError, VendorgateError};
pub use flow::LoginFlow;
pub use portal::{GENERIC_ERROR, LoginForm, LoginOutcome, Portal, RoleOption};

/// Everything a presentation layer usually needs, in one import.
pub mod prelude {
    pub use crate::{
        GENERIC_ERROR, LoginFlow, LoginFlowError, LoginForm, LoginOutcome,
        Portal, RoleOption, VendorgateError,
    };
    pub use vendorgate_roster::{
        JsonRosterCodec, Permission, Roster, RosterCodec, RosterError,
        StaticRoster, VendorAccount, VendorId, VendorLevel, VendorStatus,
    };
    pub use vendorgate_session::{
        AuthState, LoginAttempt, LoginConfig, LoginError, Session,
        SessionSink, SessionStore,
    };
}
