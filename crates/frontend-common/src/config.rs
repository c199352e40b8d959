//! Frontend configuration

/// Session lifecycle configuration
pub struct SessionConfig;

impl SessionConfig {
    /// Expiry monitor tick interval in milliseconds
    pub const EXPIRY_CHECK_INTERVAL_MS: u32 = 60_000; // 1 minute

    /// Warning window before expiry, in seconds
    pub const EXPIRY_WARNING_WINDOW_SECS: i64 = 5 * 60;

    /// Session status poll interval in milliseconds
    pub const STATUS_POLL_INTERVAL_MS: u32 = 60_000;
}
