//! Vendor roster for Vendorgate.
//!
//! This crate defines WHO can log in:
//!
//! - **Types** ([`VendorAccount`], [`VendorLevel`], [`Permission`], etc.) —
//!   the records that describe a vendor.
//! - **Roster** ([`Roster`] trait, [`StaticRoster`]) — a read-only source
//!   of vendor accounts that the login flow looks accounts up in.
//! - **Codec** ([`RosterCodec`] trait, [`JsonRosterCodec`]) — how a roster
//!   is loaded from (and written to) bytes.
//! - **Errors** ([`RosterError`]) — what can go wrong while loading.
//!
//! # Architecture
//!
//! The roster layer sits at the bottom of the stack. It knows nothing
//! about sessions or credentials checks — it only answers "which account
//! has this id?".
//!
//! ```text
//! Roster (accounts) → Session (login validation) → Portal (presentation)
//! ```

mod codec;
mod error;
mod roster;
mod types;

pub use codec::RosterCodec;
#[cfg(feature = "json")]
pub use codec::JsonRosterCodec;
pub use error::RosterError;
pub use roster::{Roster, StaticRoster};
pub use types::{Permission, VendorAccount, VendorId, VendorLevel, VendorStatus};
