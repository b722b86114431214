//! Session store: the authenticated identity and its lifecycle
//! operations.
//!
//! DESIGN
//! ======
//! One `RwSignal<SessionState>` is provided from the app root; the
//! async operations here are the only code that mutates it. Each
//! operation exposes an in-flight flag so views can disable controls,
//! and every flag is cleared on both success and failure paths.

#[cfg(test)]
#[path = "session_test.rs"]
mod session_test;

use leptos::prelude::*;

use crate::net::api;
use crate::net::types::{LoginPayload, ProfileUpdate, SignupPayload, User};
use crate::state::notify::{self, NotifyState};

/// Auth-session state for the current browser user.
///
/// `checking` is true from startup until the first `/auth/check` round
/// trip settles; `user` then distinguishes authenticated from
/// anonymous.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SessionState {
    pub user: Option<User>,
    pub checking: bool,
    pub logging_in: bool,
    pub signing_up: bool,
    pub logging_out: bool,
    pub updating_profile: bool,
}

impl Default for SessionState {
    fn default() -> Self {
        Self {
            user: None,
            checking: true,
            logging_in: false,
            signing_up: false,
            logging_out: false,
            updating_profile: false,
        }
    }
}

impl SessionState {
    /// Settle the startup session check with whatever identity it
    /// produced. Clears `checking` unconditionally.
    pub fn finish_check(&mut self, user: Option<User>) {
        self.user = user;
        self.checking = false;
    }

    /// True while any session operation is outstanding.
    pub fn busy(&self) -> bool {
        self.checking || self.logging_in || self.signing_up || self.logging_out || self.updating_profile
    }
}

/// Ask the backend who we are and settle the `checking` flag. Any
/// failure, including transport failure, resolves to anonymous.
pub async fn check_session(session: RwSignal<SessionState>) {
    let user = api::fetch_session().await;
    session.update(|state| state.finish_check(user));
}

/// Authenticate and store the returned identity. On failure the prior
/// state is left unchanged and the message is surfaced as a toast.
pub async fn login(
    session: RwSignal<SessionState>,
    notices: RwSignal<NotifyState>,
    payload: LoginPayload,
) {
    session.update(|state| state.logging_in = true);
    match api::login(&payload).await {
        Ok(user) => {
            session.update(|state| state.user = Some(user));
            notify::success(notices, "Logged in successfully");
        }
        Err(message) => notify::error(notices, message),
    }
    session.update(|state| state.logging_in = false);
}

/// Create an account and store the returned identity. On failure the
/// prior state is left unchanged and the message is surfaced as a
/// toast.
pub async fn signup(
    session: RwSignal<SessionState>,
    notices: RwSignal<NotifyState>,
    payload: SignupPayload,
) {
    session.update(|state| state.signing_up = true);
    match api::signup(&payload).await {
        Ok(user) => {
            session.update(|state| state.user = Some(user));
            notify::success(notices, "Account created successfully");
        }
        Err(message) => notify::error(notices, message),
    }
    session.update(|state| state.signing_up = false);
}

/// End the session and clear the stored identity. A failed logout
/// leaves the identity in place and surfaces the message.
pub async fn logout(session: RwSignal<SessionState>, notices: RwSignal<NotifyState>) {
    session.update(|state| state.logging_out = true);
    match api::logout().await {
        Ok(()) => {
            session.update(|state| state.user = None);
            notify::success(notices, "Logged out successfully");
        }
        Err(message) => notify::error(notices, message),
    }
    session.update(|state| state.logging_out = false);
}

/// Apply a partial identity update; on success the stored identity is
/// replaced wholesale with the backend's response.
pub async fn update_profile(
    session: RwSignal<SessionState>,
    notices: RwSignal<NotifyState>,
    update: ProfileUpdate,
) {
    session.update(|state| state.updating_profile = true);
    match api::update_profile(&update).await {
        Ok(user) => {
            session.update(|state| state.user = Some(user));
            notify::success(notices, "Profile updated successfully");
        }
        Err(message) => notify::error(notices, message),
    }
    session.update(|state| state.updating_profile = false);
}
