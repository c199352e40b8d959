//! Session lifecycle: browser storage, the interceptor pair, and the
//! provider that owns the authenticated-identity state.

pub mod context;
pub mod interceptors;
pub mod storage;

pub use context::{
    use_current_user, use_is_authenticated, use_session, SessionAction, SessionContext,
    SessionNotice, SessionProvider,
};
pub use storage::BrowserCredentialStore;
