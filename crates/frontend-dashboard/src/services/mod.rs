//! API services for the dashboard app

pub mod account;

pub use account::AccountService;
