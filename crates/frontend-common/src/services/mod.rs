//! API services shared by the dashboards

pub mod session;

pub use session::SessionApiService;
