//! Process-wide session context and provider

use crate::components::SessionNoticeToast;
use crate::config::SessionConfig;
use crate::services::session::SessionApiService;
use crate::session::interceptors;
use crate::session::storage::BrowserCredentialStore;
use cliniq_core::session::credentials::{clear_credentials, read_credentials, stored_expiry};
use cliniq_core::session::expiry::{check_expiry, format_remaining, ExpiryCheck};
use cliniq_core::session::machine::{BootstrapGate, SessionMachine};
use cliniq_core::types::UserInfo;
use gloo::timers::callback::Interval;
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

/// User-facing notices raised by the session lifecycle machinery.
#[derive(Clone, Debug, PartialEq)]
pub enum SessionNotice {
    /// Session close to expiry; remaining seconds at the last tick.
    ExpiryWarning { remaining_secs: i64 },
    /// Session ended by the server or by the expiry deadline.
    SessionExpired,
}

impl SessionNotice {
    pub fn message(&self) -> String {
        match self {
            Self::ExpiryWarning { remaining_secs } => {
                format!("Your session expires in {}.", format_remaining(*remaining_secs))
            }
            Self::SessionExpired => "Your session has expired. Please login again.".to_string(),
        }
    }
}

/// Session context data
#[derive(Clone, Debug, PartialEq)]
pub struct SessionContextData {
    machine: SessionMachine,
    pub notice: Option<SessionNotice>,
}

impl SessionContextData {
    /// The authenticated user, if any.
    pub fn user(&self) -> Option<&UserInfo> {
        self.machine.user()
    }

    /// True only while the startup credential check is unresolved.
    pub fn is_loading(&self) -> bool {
        self.machine.is_bootstrapping()
    }

    pub fn is_authenticated(&self) -> bool {
        self.machine.user().is_some()
    }
}

/// Session context actions
pub enum SessionAction {
    /// Bootstrap decided: the identity when stored credentials
    /// validated, `None` otherwise.
    BootstrapComplete(Option<UserInfo>),
    /// Explicit login, after the caller stored the credential pair.
    Login(UserInfo),
    /// User-initiated logout.
    Logout,
    /// Logout forced by the response guard or the expiry monitor.
    ForcedLogout,
    /// Non-blocking expiry warning from the monitor.
    Warn { remaining_secs: i64 },
    /// Dismiss the visible notice.
    ClearNotice,
}

/// Session context
pub type SessionContext = UseReducerHandle<SessionContextData>;

impl Default for SessionContextData {
    fn default() -> Self {
        Self {
            machine: SessionMachine::new(),
            notice: None,
        }
    }
}

impl Reducible for SessionContextData {
    type Action = SessionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut machine = self.machine.clone();
        match action {
            SessionAction::BootstrapComplete(user) => {
                machine.complete_bootstrap(user);
                Rc::new(Self {
                    machine,
                    notice: self.notice.clone(),
                })
            }
            SessionAction::Login(user) => {
                machine.login(user);
                Rc::new(Self {
                    machine,
                    notice: None,
                })
            }
            SessionAction::Logout => {
                begin_logout();
                machine.logout();
                Rc::new(Self {
                    machine,
                    notice: None,
                })
            }
            SessionAction::ForcedLogout => {
                begin_logout();
                machine.logout();
                Rc::new(Self {
                    machine,
                    notice: Some(SessionNotice::SessionExpired),
                })
            }
            SessionAction::Warn { remaining_secs } => Rc::new(Self {
                machine,
                notice: Some(SessionNotice::ExpiryWarning { remaining_secs }),
            }),
            SessionAction::ClearNotice => Rc::new(Self {
                machine,
                notice: None,
            }),
        }
    }
}

/// Clear local credentials and fire the best-effort remote logout.
///
/// Local teardown is authoritative and must succeed regardless of
/// network reachability, so the store is cleared first and the remote
/// call only logged on failure. A racing second logout reads an
/// already-empty store and skips the remote call.
fn begin_logout() {
    let store = BrowserCredentialStore;
    let credentials = read_credentials(&store);
    clear_credentials(&store);

    if let Some(credentials) = credentials {
        spawn_local(async move {
            if let Err(error) = SessionApiService::new().remote_logout(credentials).await {
                tracing::warn!("remote logout failed: {error}");
            }
        });
    }
}

thread_local! {
    /// At most one bootstrap identity check per page load.
    static BOOTSTRAP_GATE: BootstrapGate = BootstrapGate::default();
}

/// Session provider props
#[derive(Properties, PartialEq)]
pub struct SessionProviderProps {
    pub children: Children,
}

/// Session provider component
#[function_component(SessionProvider)]
pub fn session_provider(props: &SessionProviderProps) -> Html {
    let session = use_reducer(SessionContextData::default);

    // Interceptor pair scoped to this provider's mounted lifetime.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            let handles = interceptors::install(
                Rc::new(|| read_credentials(&BrowserCredentialStore)),
                Rc::new(move || session.dispatch(SessionAction::ForcedLogout)),
            );
            move || handles.release()
        });
    }

    // Bootstrap: validate stored credentials, once per page load.
    {
        let session = session.clone();
        use_effect_with((), move |_| {
            if BOOTSTRAP_GATE.with(|gate| gate.try_begin()) {
                match read_credentials(&BrowserCredentialStore) {
                    Some(credentials) => {
                        spawn_local(async move {
                            let user = match SessionApiService::new()
                                .validate_credentials(credentials)
                                .await
                            {
                                Ok(user) => Some(user),
                                Err(error) => {
                                    // Stale or revoked credentials: drop
                                    // them without surfacing an error.
                                    tracing::debug!("stored credentials rejected: {error}");
                                    clear_credentials(&BrowserCredentialStore);
                                    None
                                }
                            };
                            session.dispatch(SessionAction::BootstrapComplete(user));
                        });
                    }
                    None => session.dispatch(SessionAction::BootstrapComplete(None)),
                }
            }
            || ()
        });
    }

    // Expiry monitor: recurring check while a session is live.
    {
        let session = session.clone();
        let authenticated = session.is_authenticated();
        use_effect_with(authenticated, move |&authenticated| {
            let interval = authenticated.then(|| {
                Interval::new(SessionConfig::EXPIRY_CHECK_INTERVAL_MS, move || {
                    let Some(expires_at) = stored_expiry(&BrowserCredentialStore) else {
                        return;
                    };
                    let now = js_sys::Date::now() as i64 / 1000;
                    match check_expiry(expires_at, now, SessionConfig::EXPIRY_WARNING_WINDOW_SECS)
                    {
                        ExpiryCheck::Ok => {}
                        ExpiryCheck::ExpiringSoon { remaining_secs } => {
                            session.dispatch(SessionAction::Warn { remaining_secs });
                        }
                        ExpiryCheck::Expired => {
                            session.dispatch(SessionAction::ForcedLogout);
                        }
                    }
                })
            });
            // Dropping the interval cancels the recurring check.
            move || drop(interval)
        });
    }

    html! {
        <ContextProvider<SessionContext> context={session}>
            <SessionNoticeToast />
            {props.children.clone()}
        </ContextProvider<SessionContext>>
    }
}

/// Hook to use session context
#[hook]
pub fn use_session() -> SessionContext {
    use_context::<SessionContext>()
        .expect("SessionContext not found. Make sure to wrap your component with SessionProvider")
}

/// Hook to get the current user
#[hook]
pub fn use_current_user() -> Option<UserInfo> {
    let session = use_session();
    session.user().cloned()
}

/// Hook to check if authenticated
#[hook]
pub fn use_is_authenticated() -> bool {
    let session = use_session();
    session.is_authenticated()
}
