mod session_notice;
mod session_status;
mod spinner;

pub use session_notice::SessionNoticeToast;
pub use session_status::SessionStatus;
pub use spinner::LoadingSpinner as Spinner;
