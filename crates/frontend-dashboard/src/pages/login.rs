//! Login page.
//!
//! Exchanges the form credentials for a token pair, stores the pair,
//! and only then hands the identity to the session provider.

use crate::app::{home_route, Route};
use crate::services::account::AccountService;
use cliniq_frontend_common::session::context::{use_session, SessionAction};
use web_sys::HtmlInputElement;
use yew::prelude::*;
use yew_router::prelude::*;

#[function_component(LoginPage)]
pub fn login_page() -> Html {
    let session = use_session();
    let email = use_state(String::new);
    let password = use_state(String::new);
    let error = use_state(|| Option::<String>::None);
    let is_submitting = use_state(|| false);

    // Already signed in (including right after a successful submit):
    // straight to the matching dashboard.
    if let Some(user) = session.user() {
        return html! { <Redirect<Route> to={home_route(user.role)} /> };
    }

    let on_email_input = {
        let email = email.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            email.set(input.value());
        })
    };

    let on_password_input = {
        let password = password.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            password.set(input.value());
        })
    };

    let onsubmit = {
        let session = session.clone();
        let email = email.clone();
        let password = password.clone();
        let error = error.clone();
        let is_submitting = is_submitting.clone();

        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();

            let email_value = (*email).clone();
            let password_value = (*password).clone();
            if email_value.is_empty() || password_value.is_empty() {
                return;
            }

            is_submitting.set(true);
            error.set(None);

            let session = session.clone();
            let error = error.clone();
            let is_submitting = is_submitting.clone();
            wasm_bindgen_futures::spawn_local(async move {
                match AccountService::new().login(&email_value, &password_value).await {
                    Ok(user) => {
                        session.dispatch(SessionAction::Login(user));
                    }
                    Err(message) => {
                        tracing::warn!("login failed: {message}");
                        error.set(Some(message));
                        is_submitting.set(false);
                    }
                }
            });
        })
    };

    html! {
        <div class="min-h-screen bg-gray-50 dark:bg-gray-900 flex items-center justify-center px-4">
            <div class="max-w-md w-full">
                <div class="text-center mb-8">
                    <h1 class="text-3xl font-bold text-gray-900 dark:text-white mb-2">{"cliniq"}</h1>
                    <p class="text-gray-500 dark:text-gray-400">{"Clinic queue dashboard"}</p>
                </div>
                <form
                    {onsubmit}
                    class="bg-white dark:bg-gray-800 rounded-2xl shadow p-8 space-y-4"
                >
                    if let Some(error) = (*error).clone() {
                        <div class="bg-red-50 dark:bg-red-900/30 border border-red-300 rounded-lg p-3 text-center">
                            <p class="text-red-700 dark:text-red-300 text-sm m-0">{error}</p>
                        </div>
                    }

                    <input
                        type="email"
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:border-blue-500"
                        placeholder="Email"
                        value={(*email).clone()}
                        oninput={on_email_input}
                    />
                    <input
                        type="password"
                        class="w-full px-4 py-3 border border-gray-300 dark:border-gray-600 rounded-lg bg-white dark:bg-gray-700 text-gray-900 dark:text-white focus:outline-none focus:border-blue-500"
                        placeholder="Password"
                        value={(*password).clone()}
                        oninput={on_password_input}
                    />
                    <button
                        type="submit"
                        disabled={*is_submitting}
                        class="w-full px-4 py-3 bg-blue-600 hover:bg-blue-700 disabled:bg-gray-400 text-white rounded-lg font-medium transition-colors"
                    >
                        if *is_submitting {
                            {"Signing in..."}
                        } else {
                            {"Sign in"}
                        }
                    </button>
                </form>
            </div>
        </div>
    }
}
