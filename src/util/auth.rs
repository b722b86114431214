//! Shared auth routing helpers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Route components apply identical redirect behavior once the startup
//! session check has settled.

use leptos::prelude::*;
use leptos_router::NavigateOptions;

use crate::app::{DASHBOARD_PATH, LOGIN_PATH};
use crate::state::session::SessionState;

/// Redirect to the login page whenever the session check has settled
/// and no user is present.
pub fn install_unauth_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.checking && state.user.is_none() {
            navigate(LOGIN_PATH, NavigateOptions::default());
        }
    });
}

/// Redirect to the dashboard whenever the session check has settled
/// with an authenticated user. Used by the login page so a signed-in
/// visitor never sees the auth form.
pub fn install_authed_redirect<F>(session: RwSignal<SessionState>, navigate: F)
where
    F: Fn(&str, NavigateOptions) + Clone + 'static,
{
    Effect::new(move || {
        let state = session.get();
        if !state.checking && state.user.is_some() {
            navigate(DASHBOARD_PATH, NavigateOptions::default());
        }
    });
}
