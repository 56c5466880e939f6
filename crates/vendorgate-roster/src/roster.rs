//! Roster sources: where the login flow finds vendor accounts.
//!
//! The flow never owns its accounts. It asks a [`Roster`] "which account
//! has this id?" and nothing else. That keeps the flow's contract stable
//! when the compiled-in fixture is swapped for a JSON file today or a
//! credential service later.

use std::collections::HashSet;

use crate::{RosterError, VendorAccount, VendorId, VendorLevel};

/// A read-only source of vendor accounts.
///
/// # Trait bounds
///
/// - `Send + Sync` → the roster can be shared across async tasks.
/// - `'static` → it doesn't borrow temporary data; it lives as long as
///   the application composition root that owns it.
///
/// # Example
///
/// ```rust
/// use vendorgate_roster::{Roster, VendorAccount, VendorId};
///
/// /// A roster with nobody in it. Every lookup misses.
/// struct EmptyRoster;
///
/// impl Roster for EmptyRoster {
///     fn find(&self, _id: &VendorId) -> Option<&VendorAccount> {
///         None
///     }
///
///     fn accounts(&self) -> &[VendorAccount] {
///         &[]
///     }
/// }
///
/// assert!(EmptyRoster.find(&VendorId::from("1")).is_none());
/// ```
pub trait Roster: Send + Sync + 'static {
    /// Looks up an account by identifier.
    ///
    /// Returns `None` when no account has this id (including the empty
    /// id a role picker sends when nothing is selected).
    fn find(&self, id: &VendorId) -> Option<&VendorAccount>;

    /// All accounts, in the order a role picker should list them.
    fn accounts(&self) -> &[VendorAccount];
}

// ---------------------------------------------------------------------------
// StaticRoster
// ---------------------------------------------------------------------------

/// An in-memory roster built once and never changed.
///
/// Lookup is a linear scan. Rosters are a handful of entries long, and
/// a scan keeps `accounts()` in insertion order without a second index.
#[derive(Debug, Clone)]
pub struct StaticRoster {
    accounts: Vec<VendorAccount>,
}

impl StaticRoster {
    /// Builds a roster from a list of accounts.
    ///
    /// # Errors
    /// - [`RosterError::EmptyId`] if an account's id is `""`
    /// - [`RosterError::DuplicateId`] if two accounts share an id
    pub fn new(accounts: Vec<VendorAccount>) -> Result<Self, RosterError> {
        let mut seen = HashSet::new();
        for account in &accounts {
            if account.id.as_str().is_empty() {
                return Err(RosterError::EmptyId(account.name.clone()));
            }
            if !seen.insert(&account.id) {
                return Err(RosterError::DuplicateId(account.id.clone()));
            }
        }
        tracing::debug!(count = accounts.len(), "roster loaded");
        Ok(Self { accounts })
    }

    /// The built-in demo roster: one vendor per level.
    ///
    /// | id | name | level | email |
    /// |----|------|-------|-------|
    /// | 1 | Super Vendor HQ | super | super@vendor.com |
    /// | 2 | North Region Vendor | regional | north@vendor.com |
    /// | 3 | City A Vendor | city | citya@vendor.com |
    /// | 4 | Local Vendor A | local | local@vendor.com |
    pub fn fixture() -> Self {
        Self {
            accounts: vec![
                VendorAccount::new(
                    "1",
                    "Super Vendor HQ",
                    "Global HQ",
                    VendorLevel::Super,
                    "super@vendor.com",
                    "123-456-7890",
                ),
                VendorAccount::new(
                    "2",
                    "North Region Vendor",
                    "North Region",
                    VendorLevel::Regional,
                    "north@vendor.com",
                    "123-456-7891",
                ),
                VendorAccount::new(
                    "3",
                    "City A Vendor",
                    "City A",
                    VendorLevel::City,
                    "citya@vendor.com",
                    "123-456-7892",
                ),
                VendorAccount::new(
                    "4",
                    "Local Vendor A",
                    "Local Area A",
                    VendorLevel::Local,
                    "local@vendor.com",
                    "123-456-7893",
                ),
            ],
        }
    }

    /// Number of accounts in the roster.
    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    /// Returns `true` if the roster has no accounts.
    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }
}

impl Roster for StaticRoster {
    fn find(&self, id: &VendorId) -> Option<&VendorAccount> {
        self.accounts.iter().find(|account| &account.id == id)
    }

    fn accounts(&self) -> &[VendorAccount] {
        &self.accounts
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vid(id: &str) -> VendorId {
        VendorId::from(id)
    }

    #[test]
    fn test_fixture_has_one_account_per_level() {
        let roster = StaticRoster::fixture();

        let levels: Vec<_> =
            roster.accounts().iter().map(|a| a.level).collect();
        assert_eq!(
            levels,
            vec![
                VendorLevel::Super,
                VendorLevel::Regional,
                VendorLevel::City,
                VendorLevel::Local
            ]
        );
    }

    #[test]
    fn test_find_known_id_returns_account() {
        let roster = StaticRoster::fixture();

        let account = roster.find(&vid("3")).expect("id 3 is in the fixture");

        assert_eq!(account.email, "citya@vendor.com");
        assert_eq!(account.level, VendorLevel::City);
    }

    #[test]
    fn test_find_unknown_id_returns_none() {
        let roster = StaticRoster::fixture();

        assert!(roster.find(&vid("99")).is_none());
        assert!(roster.find(&vid("")).is_none());
    }

    #[test]
    fn test_new_rejects_duplicate_ids() {
        let a = VendorAccount::new(
            "1", "A", "X", VendorLevel::Local, "a@v.com", "1",
        );
        let b = VendorAccount::new(
            "1", "B", "Y", VendorLevel::City, "b@v.com", "2",
        );

        let result = StaticRoster::new(vec![a, b]);

        assert!(
            matches!(result, Err(RosterError::DuplicateId(ref id)) if id == &vid("1")),
            "should reject the second account with id 1"
        );
    }

    #[test]
    fn test_new_rejects_empty_id() {
        let blank = VendorAccount::new(
            "", "Blank", "X", VendorLevel::Super, "e@x", "1",
        );

        let result = StaticRoster::new(vec![blank]);

        assert!(
            matches!(result, Err(RosterError::EmptyId(ref name)) if name == "Blank"),
            "an empty id would match an unselected role picker"
        );
    }

    #[test]
    fn test_new_empty_roster_is_empty() {
        let roster = StaticRoster::new(Vec::new()).unwrap();

        assert!(roster.is_empty());
        assert_eq!(roster.len(), 0);
        assert!(roster.find(&vid("1")).is_none());
    }
}
