//! Process-wide session interceptor pair.
//!
//! The session provider owns exactly one request-phase hook (credential
//! lookup for outgoing calls) and one response-phase hook (forced
//! logout on server-side invalidation). The pair is installed when the
//! provider mounts and must be released before a replacement is
//! installed, so credential injection and forced logout can never
//! double-fire across provider restarts.

use cliniq_core::session::credentials::CredentialRecord;
use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    /// Request phase: yields the credentials to attach, if any.
    static REQUEST_AUTHORIZER: RefCell<Option<Rc<dyn Fn() -> Option<CredentialRecord>>>> =
        RefCell::new(None);

    /// Response phase: fired when the server invalidates the session.
    static RESPONSE_GUARD: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

/// Opaque handle for an installed interceptor pair.
#[derive(Debug)]
pub struct InterceptorHandles {
    _private: (),
}

impl InterceptorHandles {
    /// Release the pair, leaving requests unauthorized and the guard
    /// disarmed until the next install.
    pub fn release(self) {
        REQUEST_AUTHORIZER.with(|slot| *slot.borrow_mut() = None);
        RESPONSE_GUARD.with(|slot| *slot.borrow_mut() = None);
    }
}

/// Install the request-phase credential lookup and the response-phase
/// invalidation callback as a pair.
pub fn install(
    authorizer: Rc<dyn Fn() -> Option<CredentialRecord>>,
    guard: Rc<dyn Fn()>,
) -> InterceptorHandles {
    REQUEST_AUTHORIZER.with(|slot| *slot.borrow_mut() = Some(authorizer));
    RESPONSE_GUARD.with(|slot| *slot.borrow_mut() = Some(guard));
    InterceptorHandles { _private: () }
}

/// Request phase: current credentials, when an authorizer is installed
/// and the store holds a full pair.
pub(crate) fn current_credentials() -> Option<CredentialRecord> {
    let authorizer = REQUEST_AUTHORIZER.with(|slot| slot.borrow().clone());
    authorizer.and_then(|lookup| lookup())
}

/// Response phase: fire the forced-logout guard, if armed.
pub(crate) fn trigger_session_invalid() {
    let guard = RESPONSE_GUARD.with(|slot| slot.borrow().clone());
    if let Some(guard) = guard {
        guard();
    }
}
