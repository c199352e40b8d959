//! Platform-neutral session domain logic for the cliniq dashboard.
//!
//! Everything here is pure or store-trait-backed so the session
//! lifecycle can be tested natively; the browser bindings live in
//! `cliniq-frontend-common`.

pub mod session;
pub mod types;

pub use session::credentials::{CredentialRecord, CredentialStore};
pub use session::expiry::{check_expiry, format_remaining, ExpiryCheck};
pub use session::machine::{BootstrapGate, SessionMachine, SessionPhase};
pub use types::{Role, UserInfo};
