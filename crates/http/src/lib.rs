//! Typed HTTP client for the cliniq API.

pub mod client;
pub mod types;
