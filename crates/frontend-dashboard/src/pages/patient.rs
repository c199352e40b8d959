use crate::components::DashboardShell;
use yew::prelude::*;

/// Patient view: queue position and upcoming appointments live here.
#[function_component(PatientDashboard)]
pub fn patient_dashboard() -> Html {
    html! {
        <DashboardShell title="Patient">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">{"My appointments"}</h2>
                <p class="text-gray-500 dark:text-gray-400">{"No upcoming appointments."}</p>
            </div>
        </DashboardShell>
    }
}
