use crate::components::DashboardShell;
use yew::prelude::*;

/// Doctor view: the day's patient queue lives here.
#[function_component(DoctorDashboard)]
pub fn doctor_dashboard() -> Html {
    html! {
        <DashboardShell title="Doctor">
            <div class="bg-white dark:bg-gray-800 rounded-lg shadow p-6">
                <h2 class="text-xl font-semibold mb-4 text-gray-900 dark:text-white">{"Today's queue"}</h2>
                <p class="text-gray-500 dark:text-gray-400">{"The queue is empty."}</p>
            </div>
        </DashboardShell>
    }
}
