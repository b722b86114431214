//! Root application component with routing and context providers.
//!
//! SYSTEM CONTEXT
//! ==============
//! Provides every shared state signal, runs the startup session check
//! exactly once, and dispatches routes by path + auth state. `/` and
//! the catch-all both resolve through [`HomeRedirect`].

use leptos::prelude::*;
use leptos_meta::{Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{Redirect, Route, Router, Routes},
};

use crate::components::navbar::Navbar;
use crate::components::toast::ToastHost;
use crate::pages::dashboard::DashboardPage;
use crate::pages::login::LoginPage;
use crate::pages::profile::ProfilePage;
use crate::pages::shared::SharedViewPage;
use crate::state::documents::DocumentsState;
use crate::state::filters::FiltersState;
use crate::state::members::MembersState;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

pub const LOGIN_PATH: &str = "/login";
pub const DASHBOARD_PATH: &str = "/prescription-tracker/dashboard";

/// Root application component.
///
/// Provides all shared state contexts and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let session = RwSignal::new(SessionState::default());
    let members = RwSignal::new(MembersState::default());
    let documents = RwSignal::new(DocumentsState::default());
    let filters = RwSignal::new(FiltersState::default());
    let notices = RwSignal::new(NotifyState::default());

    provide_context(session);
    provide_context(members);
    provide_context(documents);
    provide_context(filters);
    provide_context(notices);

    // Ask the backend who we are, exactly once at startup. Until this
    // settles, auth-dependent routes show their loading state.
    let checked = RwSignal::new(false);
    Effect::new(move || {
        if checked.get() {
            return;
        }
        checked.set(true);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            crate::state::session::check_session(session).await;
        });
    });

    view! {
        <Title text="MedTrack"/>
        <Router>
            <Navbar/>
            <main class="app-main">
                <Routes fallback=|| view! { <Redirect path="/"/> }>
                    <Route path=StaticSegment("") view=HomeRedirect/>
                    <Route path=StaticSegment("login") view=LoginPage/>
                    <Route
                        path=(StaticSegment("prescription-tracker"), StaticSegment("dashboard"))
                        view=DashboardPage
                    />
                    <Route path=StaticSegment("profile") view=ProfilePage/>
                    <Route
                        path=(StaticSegment("view"), ParamSegment("kind"), ParamSegment("token"))
                        view=SharedViewPage
                    />
                </Routes>
            </main>
            <ToastHost/>
        </Router>
    }
}

/// Route `/`: wait for the session check, then land on the dashboard or
/// the login page.
#[component]
fn HomeRedirect() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();

    view! {
        <Show
            when=move || !session.get().checking
            fallback=|| view! { <div class="app-loading"><div class="spinner"></div></div> }
        >
            <Show
                when=move || session.get().user.is_some()
                fallback=|| view! { <Redirect path=LOGIN_PATH/> }
            >
                <Redirect path=DASHBOARD_PATH/>
            </Show>
        </Show>
    }
}
