//! Codecs for loading a roster from bytes.
//!
//! A roster can be compiled in ([`StaticRoster::fixture`]) or shipped as a
//! document next to the binary. The [`RosterCodec`] trait abstracts the
//! document format; [`JsonRosterCodec`] is the one provided.

use crate::{RosterError, StaticRoster, VendorAccount};

/// Converts between a list of vendor accounts and raw bytes.
///
/// - `Send + Sync + 'static` → a codec can be stored alongside the
///   roster in long-lived application state.
pub trait RosterCodec: Send + Sync + 'static {
    /// Serializes accounts into bytes.
    ///
    /// # Errors
    /// Returns `RosterError::Encode` if serialization fails.
    fn encode(&self, accounts: &[VendorAccount]) -> Result<Vec<u8>, RosterError>;

    /// Parses bytes back into accounts.
    ///
    /// # Errors
    /// Returns `RosterError::Decode` if the bytes are malformed or a
    /// record is missing a required field.
    fn decode(&self, data: &[u8]) -> Result<Vec<VendorAccount>, RosterError>;

    /// Parses bytes and builds a [`StaticRoster`], rejecting empty and
    /// duplicate ids.
    fn load(&self, data: &[u8]) -> Result<StaticRoster, RosterError> {
        StaticRoster::new(self.decode(data)?)
    }
}

// ---------------------------------------------------------------------------
// JsonRosterCodec
// ---------------------------------------------------------------------------

/// A [`RosterCodec`] for a JSON array of account records.
///
/// ## Example
///
/// ```rust
/// use vendorgate_roster::{JsonRosterCodec, Roster, RosterCodec, VendorId};
///
/// let json = br#"[{
///     "id": "7",
///     "name": "Harbor Vendor",
///     "location": "Port District",
///     "permissions": ["manage_orders", "view_reports"],
///     "level": "local",
///     "email": "harbor@vendor.com",
///     "phone": "555-0100",
///     "status": "active",
///     "createdAt": "2024-01-01T00:00:00Z"
/// }]"#;
///
/// let roster = JsonRosterCodec.load(json).unwrap();
/// let account = roster.find(&VendorId::from("7")).unwrap();
/// assert_eq!(account.email, "harbor@vendor.com");
/// ```
#[cfg(feature = "json")]
#[derive(Debug, Clone, Copy, Default)]
pub struct JsonRosterCodec;

#[cfg(feature = "json")]
impl RosterCodec for JsonRosterCodec {
    fn encode(&self, accounts: &[VendorAccount]) -> Result<Vec<u8>, RosterError> {
        serde_json::to_vec_pretty(accounts).map_err(RosterError::Encode)
    }

    fn decode(&self, data: &[u8]) -> Result<Vec<VendorAccount>, RosterError> {
        serde_json::from_slice(data).map_err(RosterError::Decode)
    }
}
