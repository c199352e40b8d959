//! Shared session subsystem for the cliniq dashboards.

pub mod client;
pub mod client_wrapper;
pub mod components;
pub mod config;
pub mod services;
pub mod session;

pub use client::create_client;
pub use client_wrapper::SessionApiClient;
pub use components::{SessionNoticeToast, SessionStatus, Spinner};
pub use config::SessionConfig;
pub use session::context::{
    use_current_user, use_is_authenticated, use_session, SessionAction, SessionContext,
    SessionProvider,
};
