//! Authentication internals: the credential cell and the single-flight
//! refresh coordinator.

mod credentials;
mod refresh;

pub use credentials::CredentialCell;
pub use refresh::RefreshCoordinator;
