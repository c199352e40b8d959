//! Shared dashboard chrome

use cliniq_frontend_common::{
    components::SessionStatus,
    session::context::{use_current_user, use_session, SessionAction},
};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DashboardShellProps {
    pub title: AttrValue,
    pub children: Children,
}

/// Header plus content frame shared by the role dashboards.
#[function_component(DashboardShell)]
pub fn dashboard_shell(props: &DashboardShellProps) -> Html {
    let session = use_session();
    let user = use_current_user();

    let on_logout = {
        let session = session.clone();
        Callback::from(move |_| {
            session.dispatch(SessionAction::Logout);
        })
    };

    html! {
        <div class="h-screen flex flex-col bg-white dark:bg-gray-900">
            <header class="bg-gray-50 dark:bg-gray-800 border-b border-gray-200 dark:border-gray-700">
                <div class="p-4 flex justify-between items-center">
                    <div class="flex items-center gap-3">
                        <h1 class="text-xl font-bold text-gray-900 dark:text-white">{"cliniq"}</h1>
                        <span class="text-sm text-gray-500 dark:text-gray-400">{props.title.clone()}</span>
                    </div>
                    <div class="flex items-center gap-4">
                        <SessionStatus />
                        if let Some(user) = user {
                            <span class="text-sm text-gray-700 dark:text-gray-300">{user.name}</span>
                        }
                        <button
                            onclick={on_logout}
                            class="px-4 py-2 text-sm font-medium text-gray-700 dark:text-gray-300 bg-gray-100 dark:bg-gray-700 hover:bg-gray-200 dark:hover:bg-gray-600 rounded-lg transition-colors"
                        >
                            {"Logout"}
                        </button>
                    </div>
                </div>
            </header>
            <main class="flex-1 p-6 overflow-y-auto">
                <div class="max-w-6xl mx-auto space-y-6">
                    {props.children.clone()}
                </div>
            </main>
        </div>
    }
}
