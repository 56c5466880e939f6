//! Error types for the session layer.

/// Why a login attempt was rejected.
///
/// All three are recoverable: the operator corrects the form and submits
/// again. The `#[error]` text is the exact message shown under the form,
/// so changing it changes what users see.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum LoginError {
    /// No roster entry has the selected id. This is also what an empty
    /// role picker produces.
    #[error("Please select a vendor role")]
    NoAccountSelected,

    /// The email doesn't exactly match the selected account's email.
    /// Comparison is case-sensitive.
    #[error("Invalid email for selected vendor")]
    EmailMismatch,

    /// The password is shorter than the configured minimum.
    #[error("Invalid password")]
    InvalidPassword,
}

impl LoginError {
    /// A stable, lowercase name for logs and metrics labels.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::NoAccountSelected => "no_account_selected",
            Self::EmailMismatch => "email_mismatch",
            Self::InvalidPassword => "invalid_password",
        }
    }
}
