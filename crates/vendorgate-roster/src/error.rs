//! Error types for the roster layer.
//!
//! Each crate in Vendorgate defines its own error enum. When you see a
//! `RosterError`, you know the problem is in loading or encoding the
//! vendor list, not in the login flow itself.

use crate::VendorId;

/// Errors that can occur while building or (de)serializing a roster.
#[derive(Debug, thiserror::Error)]
pub enum RosterError {
    /// Serializing the roster to bytes failed.
    #[cfg(feature = "json")]
    #[error("encode failed: {0}")]
    Encode(serde_json::Error),

    /// Parsing the roster from bytes failed.
    ///
    /// Common causes: malformed JSON, a missing field, or an unknown
    /// vendor level such as `"national"`.
    #[cfg(feature = "json")]
    #[error("decode failed: {0}")]
    Decode(serde_json::Error),

    /// Two accounts share the same identifier.
    ///
    /// Lookup is by id, so a roster with duplicates would make the
    /// second account unreachable.
    #[error("duplicate vendor id {0}")]
    DuplicateId(VendorId),

    /// An account has an empty identifier.
    ///
    /// An empty id is what a role picker sends when nothing is selected,
    /// so such an account would be logged into without choosing a role.
    #[error("vendor {0:?} has an empty id")]
    EmptyId(String),
}
