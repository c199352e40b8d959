//! Expiry policy.
//!
//! Pure comparisons against a caller-supplied clock; the recurring tick
//! and the notification side live in the frontend.

/// Outcome of one expiry check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpiryCheck {
    /// Expiry is comfortably in the future.
    Ok,
    /// Inside the warning window.
    ExpiringSoon { remaining_secs: i64 },
    /// The deadline has passed; the session must end now.
    Expired,
}

/// Compare the stored deadline against `now` (both unix seconds).
///
/// The warning fires strictly inside the window: a session with exactly
/// `warning_window_secs` left is still `Ok`, and one with zero left is
/// already `Expired`.
pub fn check_expiry(expires_at: i64, now: i64, warning_window_secs: i64) -> ExpiryCheck {
    let remaining = expires_at - now;
    if remaining <= 0 {
        ExpiryCheck::Expired
    } else if remaining < warning_window_secs {
        ExpiryCheck::ExpiringSoon {
            remaining_secs: remaining,
        }
    } else {
        ExpiryCheck::Ok
    }
}

/// Render a remaining duration as floored hours and minutes.
pub fn format_remaining(remaining_secs: i64) -> String {
    let remaining = remaining_secs.max(0);
    let hours = remaining / 3600;
    let minutes = (remaining % 3600) / 60;
    format!("{hours}h {minutes:02}m")
}

#[cfg(test)]
mod tests {
    use super::*;

    const WINDOW: i64 = 5 * 60;
    const NOW: i64 = 1_700_000_000;

    #[test]
    fn far_future_deadline_is_ok() {
        assert_eq!(check_expiry(NOW + 600, NOW, WINDOW), ExpiryCheck::Ok);
    }

    #[test]
    fn warning_inside_the_window() {
        // 4m59s left: the next tick warns.
        assert_eq!(
            check_expiry(NOW + 299, NOW, WINDOW),
            ExpiryCheck::ExpiringSoon { remaining_secs: 299 }
        );
    }

    #[test]
    fn window_boundary_is_exclusive() {
        assert_eq!(check_expiry(NOW + WINDOW, NOW, WINDOW), ExpiryCheck::Ok);
    }

    #[test]
    fn past_deadline_expires() {
        assert_eq!(check_expiry(NOW - 1, NOW, WINDOW), ExpiryCheck::Expired);
        assert_eq!(check_expiry(NOW, NOW, WINDOW), ExpiryCheck::Expired);
    }

    #[test]
    fn formats_floored_hours_and_minutes() {
        assert_eq!(format_remaining(3 * 3600 + 25 * 60 + 59), "3h 25m");
        assert_eq!(format_remaining(59), "0h 00m");
        assert_eq!(format_remaining(-10), "0h 00m");
    }
}
