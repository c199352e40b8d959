//! Session notice toast component

use crate::session::context::{use_session, SessionAction, SessionNotice};
use yew::prelude::*;

/// Non-blocking toast surfaced for expiry warnings and forced logout
#[function_component(SessionNoticeToast)]
pub fn session_notice_toast() -> Html {
    let session = use_session();

    let on_dismiss = {
        let session = session.clone();
        Callback::from(move |_| session.dispatch(SessionAction::ClearNotice))
    };

    let Some(notice) = session.notice.clone() else {
        return html! {};
    };

    let tone = match notice {
        SessionNotice::ExpiryWarning { .. } => {
            "bg-yellow-50 dark:bg-yellow-900/30 border-yellow-400 text-yellow-800 dark:text-yellow-200"
        }
        SessionNotice::SessionExpired => {
            "bg-red-50 dark:bg-red-900/30 border-red-400 text-red-800 dark:text-red-200"
        }
    };

    html! {
        <div class="fixed top-4 right-4 z-50">
            <div class={format!("border rounded-lg shadow-lg px-4 py-3 flex items-center gap-3 {tone}")}>
                <p class="text-sm font-medium m-0">{notice.message()}</p>
                <button
                    onclick={on_dismiss}
                    class="text-sm font-bold opacity-60 hover:opacity-100"
                    aria-label="Dismiss"
                >
                    {"×"}
                </button>
            </div>
        </div>
    }
}
