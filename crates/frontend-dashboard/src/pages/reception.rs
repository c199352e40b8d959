use crate::components::DashboardShell;
use yew::prelude::*;

/// Receptionist view: intake and queue management live here.
#[function_component(ReceptionDashboard)]
pub fn reception_dashboard() -> Html {
    html! {
        <DashboardShell title="Reception">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">{"Check-in"}</h2>
                <p class="text-gray-500 dark:text-gray-400">{"No patients waiting."}</p>
            </div>
        </DashboardShell>
    }
}
