//! Read-only session status display

use crate::config::SessionConfig;
use crate::services::session::SessionApiService;
use cliniq_core::session::expiry::format_remaining;
use cliniq_http::types::SessionStatusResponse;
use gloo::timers::callback::Interval;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// Passive display of last login time and remaining session time.
///
/// Polls the status endpoint while mounted. A failed poll skips that
/// tick and keeps the previous values on screen; this component never
/// touches session state itself.
#[function_component(SessionStatus)]
pub fn session_status() -> Html {
    let status = use_state(|| Option::<SessionStatusResponse>::None);

    {
        let status = status.clone();
        use_effect_with((), move |_| {
            let fetch = move || {
                let status = status.clone();
                spawn_local(async move {
                    match SessionApiService::new().session_status().await {
                        Ok(response) => status.set(Some(response)),
                        Err(error) => {
                            tracing::debug!("session status poll failed: {error}");
                        }
                    }
                });
            };

            fetch();
            let interval = Interval::new(SessionConfig::STATUS_POLL_INTERVAL_MS, fetch);
            move || drop(interval)
        });
    }

    let Some(status) = (*status).clone() else {
        return html! {};
    };

    let now = js_sys::Date::now() as i64 / 1000;
    let remaining = format_remaining(status.session_expires_at.timestamp() - now);

    html! {
        <div class="text-sm text-gray-600 dark:text-gray-400 flex items-center gap-4">
            <span>{format!("Last login: {}", status.last_login.format("%Y-%m-%d %H:%M"))}</span>
            <span>{format!("Session time left: {remaining}")}</span>
        </div>
    }
}
