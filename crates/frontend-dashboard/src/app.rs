use crate::pages::{DoctorDashboard, LoginPage, PatientDashboard, ReceptionDashboard};
use cliniq_core::types::Role;
use cliniq_frontend_common::{
    components::Spinner,
    session::context::{use_current_user, use_session, SessionProvider},
};
use yew::prelude::*;
use yew_router::prelude::*;

/// Application routes
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[at("/login")]
    Login,
    #[at("/patient")]
    Patient,
    #[at("/doctor")]
    Doctor,
    #[at("/reception")]
    Reception,
    #[at("/")]
    Home,
    #[not_found]
    #[at("/404")]
    NotFound,
}

/// Route a user to the dashboard matching their role.
pub fn home_route(role: Role) -> Route {
    match role {
        Role::Patient => Route::Patient,
        Role::Doctor => Route::Doctor,
        Role::Receptionist => Route::Reception,
    }
}

#[function_component(DashboardApp)]
pub fn dashboard_app() -> Html {
    html! {
        <BrowserRouter>
            <SessionProvider>
                <AppContent />
            </SessionProvider>
        </BrowserRouter>
    }
}

#[function_component(AppContent)]
fn app_content() -> Html {
    let session = use_session();

    // Hold rendering until the bootstrap credential check settles.
    if session.is_loading() {
        return html! {
            <div class="min-h-screen flex items-center justify-center bg-gray-50 dark:bg-gray-900">
                <Spinner text={Some("Loading...".to_string())} />
            </div>
        };
    }

    html! {
        <Switch<Route> render={switch} />
    }
}

fn switch(route: Route) -> Html {
    match route {
        Route::Login => html! { <LoginPage /> },
        Route::Patient => html! {
            <RequireRole role={Role::Patient}><PatientDashboard /></RequireRole>
        },
        Route::Doctor => html! {
            <RequireRole role={Role::Doctor}><DoctorDashboard /></RequireRole>
        },
        Route::Reception => html! {
            <RequireRole role={Role::Receptionist}><ReceptionDashboard /></RequireRole>
        },
        Route::Home => html! { <HomeRedirect /> },
        Route::NotFound => html! { <Redirect<Route> to={Route::Home} /> },
    }
}

#[derive(Properties, PartialEq)]
pub struct RequireRoleProps {
    pub role: Role,
    pub children: Children,
}

/// Render children only for an authenticated user with the matching
/// role. Anyone logged out lands on the login entry point, which is
/// also how a forced logout navigates away from protected screens.
#[function_component(RequireRole)]
fn require_role(props: &RequireRoleProps) -> Html {
    match use_current_user() {
        Some(user) if user.role == props.role => html! { <>{props.children.clone()}</> },
        Some(user) => html! { <Redirect<Route> to={home_route(user.role)} /> },
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}

#[function_component(HomeRedirect)]
fn home_redirect() -> Html {
    match use_current_user() {
        Some(user) => html! { <Redirect<Route> to={home_route(user.role)} /> },
        None => html! { <Redirect<Route> to={Route::Login} /> },
    }
}
