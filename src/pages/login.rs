//! Auth page: sign-in and create-account forms behind one toggle.
//!
//! All submissions go through the session store; validation failures
//! never reach the network.

#[cfg(test)]
#[path = "login_test.rs"]
mod login_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::{LoginPayload, SignupPayload};
use crate::state::notify::{self, NotifyState};
use crate::state::session::{self, SessionState};
use crate::util::validate::is_digits;

/// Blood groups offered by the signup select.
pub const BLOOD_GROUPS: [&str; 8] = ["A+", "A-", "B+", "B-", "AB+", "AB-", "O+", "O-"];

/// Signup form fields as typed, confirm-password included.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SignupForm {
    pub name: String,
    pub email: String,
    pub password: String,
    pub confirm_password: String,
    pub phone: String,
    pub aadhar: String,
    pub blood_group: String,
    pub dob: String,
}

impl Default for SignupForm {
    fn default() -> Self {
        Self {
            name: String::new(),
            email: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            phone: String::new(),
            aadhar: String::new(),
            blood_group: "A+".to_owned(),
            dob: String::new(),
        }
    }
}

impl SignupForm {
    /// Convert into the wire payload, dropping the confirm-password
    /// field; it never leaves the client.
    fn into_payload(self) -> SignupPayload {
        SignupPayload {
            name: self.name,
            email: self.email,
            password: self.password,
            phone: self.phone,
            aadhar: self.aadhar,
            blood_group: self.blood_group,
            dob: self.dob,
        }
    }
}

fn validate_signup(form: &SignupForm) -> Result<(), &'static str> {
    if form.name.is_empty()
        || form.email.is_empty()
        || form.password.is_empty()
        || form.confirm_password.is_empty()
        || form.phone.is_empty()
        || form.aadhar.is_empty()
        || form.dob.is_empty()
    {
        return Err("Please fill all required fields");
    }
    if form.password.len() < 6 {
        return Err("Password must be at least 6 characters");
    }
    if form.password != form.confirm_password {
        return Err("Passwords do not match");
    }
    if !is_digits(&form.aadhar, 12) {
        return Err("Invalid Aadhaar number");
    }
    if !is_digits(&form.phone, 10) {
        return Err("Invalid phone number");
    }
    Ok(())
}

fn validate_login(email: &str, password: &str) -> Result<(), &'static str> {
    if email.is_empty() || password.is_empty() {
        return Err("Please fill all required fields");
    }
    Ok(())
}

#[component]
pub fn LoginPage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    crate::util::auth::install_authed_redirect(session, navigate);

    let is_login = RwSignal::new(true);
    let login_email = RwSignal::new(String::new());
    let login_password = RwSignal::new(String::new());
    let signup_form = RwSignal::new(SignupForm::default());

    let busy = move || {
        let state = session.get();
        state.logging_in || state.signing_up
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if busy() {
            return;
        }
        if is_login.get() {
            let email = login_email.get().trim().to_owned();
            let password = login_password.get();
            if let Err(message) = validate_login(&email, &password) {
                notify::error(notices, message);
                return;
            }
            let payload = LoginPayload { email, password };
            #[cfg(feature = "web")]
            leptos::task::spawn_local(async move {
                session::login(session, notices, payload).await;
            });
            #[cfg(not(feature = "web"))]
            let _ = payload;
        } else {
            let form = signup_form.get();
            if let Err(message) = validate_signup(&form) {
                notify::error(notices, message);
                return;
            }
            let payload = form.into_payload();
            #[cfg(feature = "web")]
            leptos::task::spawn_local(async move {
                session::signup(session, notices, payload).await;
            });
            #[cfg(not(feature = "web"))]
            let _ = payload;
        }
    };

    view! {
        <div class="login-page">
            <div class="login-card">
                <h2>{move || if is_login.get() { "Sign In" } else { "Create Account" }}</h2>
                <form class="login-form" on:submit=on_submit>
                    <Show when=move || !is_login.get()>
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Full Name"
                            prop:value=move || signup_form.get().name
                            on:input=move |ev| signup_form.update(|f| f.name = event_target_value(&ev))
                        />
                    </Show>
                    <input
                        class="login-input"
                        type="email"
                        placeholder="Email"
                        prop:value=move || {
                            if is_login.get() { login_email.get() } else { signup_form.get().email }
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if is_login.get_untracked() {
                                login_email.set(value);
                            } else {
                                signup_form.update(|f| f.email = value);
                            }
                        }
                    />
                    <input
                        class="login-input"
                        type="password"
                        placeholder="Password"
                        prop:value=move || {
                            if is_login.get() { login_password.get() } else { signup_form.get().password }
                        }
                        on:input=move |ev| {
                            let value = event_target_value(&ev);
                            if is_login.get_untracked() {
                                login_password.set(value);
                            } else {
                                signup_form.update(|f| f.password = value);
                            }
                        }
                    />
                    <Show when=move || !is_login.get()>
                        <input
                            class="login-input"
                            type="password"
                            placeholder="Confirm Password"
                            prop:value=move || signup_form.get().confirm_password
                            on:input=move |ev| {
                                signup_form.update(|f| f.confirm_password = event_target_value(&ev));
                            }
                        />
                        <input
                            class="login-input"
                            type="tel"
                            placeholder="Phone Number"
                            maxlength="10"
                            prop:value=move || signup_form.get().phone
                            on:input=move |ev| signup_form.update(|f| f.phone = event_target_value(&ev))
                        />
                        <input
                            class="login-input"
                            type="text"
                            placeholder="Aadhaar Number"
                            maxlength="12"
                            prop:value=move || signup_form.get().aadhar
                            on:input=move |ev| signup_form.update(|f| f.aadhar = event_target_value(&ev))
                        />
                        <select
                            class="login-input"
                            prop:value=move || signup_form.get().blood_group
                            on:change=move |ev| {
                                signup_form.update(|f| f.blood_group = event_target_value(&ev));
                            }
                        >
                            {BLOOD_GROUPS
                                .into_iter()
                                .map(|group| view! { <option value=group>{group}</option> })
                                .collect::<Vec<_>>()}
                        </select>
                        <input
                            class="login-input"
                            type="date"
                            prop:value=move || signup_form.get().dob
                            on:input=move |ev| signup_form.update(|f| f.dob = event_target_value(&ev))
                        />
                    </Show>
                    <button class="btn btn--primary login-button" type="submit" disabled=busy>
                        {move || {
                            match (busy(), is_login.get()) {
                                (true, true) => "Signing in...",
                                (true, false) => "Signing up...",
                                (false, true) => "Sign In",
                                (false, false) => "Sign Up",
                            }
                        }}
                    </button>
                </form>
                <p class="login-toggle">
                    {move || {
                        if is_login.get() { "Don't have an account?" } else { "Already have an account?" }
                    }}
                    <button class="btn btn--link" on:click=move |_| is_login.update(|v| *v = !*v)>
                        {move || if is_login.get() { "Sign Up" } else { "Sign In" }}
                    </button>
                </p>
            </div>
        </div>
    }
}
