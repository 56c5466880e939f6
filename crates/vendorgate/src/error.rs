//! Unified error types for Vendorgate.

use vendorgate_roster::RosterError;
use vendorgate_session::LoginError;

/// Why an asynchronous login submission didn't produce a session.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LoginFlowError {
    /// The credentials were checked and rejected.
    #[error(transparent)]
    Rejected(#[from] LoginError),

    /// The caller cancelled the submission before validation ran.
    #[error("login cancelled")]
    Cancelled,
}

/// Top-level error that wraps all crate-specific errors.
///
/// When using the `vendorgate` facade, you deal with this single error
/// type. The `#[from]` attributes let `?` convert sub-crate errors.
#[derive(Debug, thiserror::Error)]
pub enum VendorgateError {
    /// Loading or encoding the roster failed.
    #[error(transparent)]
    Roster(#[from] RosterError),

    /// A login submission failed.
    #[error(transparent)]
    Login(#[from] LoginFlowError),
}

impl From<LoginError> for VendorgateError {
    fn from(err: LoginError) -> Self {
        Self::Login(LoginFlowError::Rejected(err))
    }
}
