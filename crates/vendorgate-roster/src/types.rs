//! Core vendor types.
//!
//! These are the records a roster holds. They are serializable so a
//! roster can be shipped as a JSON document instead of being compiled in.

use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

// ---------------------------------------------------------------------------
// Identity
// ---------------------------------------------------------------------------

/// A unique identifier for a vendor account.
///
/// A newtype around `String` so a vendor id can't be confused with an
/// email or a name, even though all three are strings underneath.
///
/// `#[serde(transparent)]` serializes `VendorId("1")` as just `"1"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct VendorId(pub String);

impl VendorId {
    /// Returns the raw identifier as it appears in form input.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for VendorId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

/// `tracing::info!(%vendor_id, ...)` prints "V-1".
impl fmt::Display for VendorId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "V-{}", self.0)
    }
}

// ---------------------------------------------------------------------------
// Permission
// ---------------------------------------------------------------------------

/// A capability a vendor account may hold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Permission {
    /// Create, edit, and deactivate subordinate vendors.
    ManageVendors,
    /// Maintain the product catalogue.
    ManageProducts,
    /// Accept, fulfil, and cancel orders.
    ManageOrders,
    /// Read sales and inventory reports.
    ViewReports,
    /// Read aggregated analytics dashboards.
    ViewAnalytics,
    /// Change system-wide settings.
    ManageSettings,
}

impl Permission {
    /// Every permission, in declaration order.
    pub const ALL: [Permission; 6] = [
        Permission::ManageVendors,
        Permission::ManageProducts,
        Permission::ManageOrders,
        Permission::ViewReports,
        Permission::ViewAnalytics,
        Permission::ManageSettings,
    ];
}

// ---------------------------------------------------------------------------
// VendorLevel
// ---------------------------------------------------------------------------

/// Where a vendor sits in the hierarchy.
///
/// The level decides the default permission set. Higher levels hold a
/// strict superset of the permissions of the levels below them:
///
/// ```text
/// Super ⊃ Regional ⊃ City ⊃ Local
/// ```
///
/// Serialized lowercase (`"super"`, `"regional"`, ...) to match the
/// values a role picker sends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VendorLevel {
    Super,
    Regional,
    City,
    Local,
}

impl VendorLevel {
    /// The permissions an account at this level starts with.
    pub fn default_permissions(self) -> Vec<Permission> {
        match self {
            Self::Super => Permission::ALL.to_vec(),
            Self::Regional => vec![
                Permission::ManageVendors,
                Permission::ManageProducts,
                Permission::ManageOrders,
                Permission::ViewReports,
                Permission::ViewAnalytics,
            ],
            Self::City => vec![
                Permission::ManageProducts,
                Permission::ManageOrders,
                Permission::ViewReports,
                Permission::ViewAnalytics,
            ],
            Self::Local => {
                vec![Permission::ManageOrders, Permission::ViewReports]
            }
        }
    }

    /// The lowercase wire name of the level.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Super => "super",
            Self::Regional => "regional",
            Self::City => "city",
            Self::Local => "local",
        }
    }
}

impl fmt::Display for VendorLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// VendorStatus
// ---------------------------------------------------------------------------

/// Whether the account is in use.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default,
)]
#[serde(rename_all = "lowercase")]
pub enum VendorStatus {
    #[default]
    Active,
    Inactive,
}

// ---------------------------------------------------------------------------
// VendorAccount
// ---------------------------------------------------------------------------

/// One vendor the operator can log in as.
///
/// Built once when the roster is constructed and never mutated after
/// that. `#[serde(rename_all = "camelCase")]` gives `createdAt` on the
/// wire, matching the JSON the portal front-end already produces.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VendorAccount {
    /// Unique within a roster.
    pub id: VendorId,
    /// Display name shown in the role picker.
    pub name: String,
    /// Free-form location label ("Global HQ", "North Region", ...).
    pub location: String,
    /// Derived from `level` when built through [`VendorAccount::new`].
    pub permissions: Vec<Permission>,
    pub level: VendorLevel,
    /// Contact email. Also the login email; compared case-sensitively.
    pub email: String,
    pub phone: String,
    #[serde(default)]
    pub status: VendorStatus,
    pub created_at: DateTime<Utc>,
}

impl VendorAccount {
    /// Builds an active account with the level's default permissions,
    /// stamped with the current time.
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        location: impl Into<String>,
        level: VendorLevel,
        email: impl Into<String>,
        phone: impl Into<String>,
    ) -> Self {
        Self {
            id: VendorId(id.into()),
            name: name.into(),
            location: location.into(),
            permissions: level.default_permissions(),
            level,
            email: email.into(),
            phone: phone.into(),
            status: VendorStatus::Active,
            created_at: Utc::now(),
        }
    }

    /// The text a role picker shows for this account: `"<name> (<level>)"`.
    pub fn option_label(&self) -> String {
        format!("{} ({})", self.name, self.level)
    }

    /// Returns `true` if the account holds `permission`.
    pub fn has_permission(&self, permission: Permission) -> bool {
        self.permissions.contains(&permission)
    }
}
