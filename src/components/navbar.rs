//! Top navigation bar with auth-aware links and logout.

use leptos::prelude::*;

use crate::state::notify::NotifyState;
use crate::state::session::SessionState;

#[component]
pub fn Navbar() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();

    let on_logout = move |_| {
        #[cfg(feature = "web")]
        {
            leptos::task::spawn_local(async move {
                crate::state::session::logout(session, notices).await;
                // Only leave the page once the backend confirmed the logout.
                if session.get_untracked().user.is_none() {
                    if let Some(window) = web_sys::window() {
                        let _ = window.location().set_href(crate::app::LOGIN_PATH);
                    }
                }
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = notices;
        }
    };

    let user_name = move || {
        session.get().user.map_or_else(String::new, |user| user.name)
    };

    view! {
        <header class="navbar">
            <a class="navbar__brand" href="/">"MedTrack"</a>
            <Show when=move || session.get().user.is_some()>
                <nav class="navbar__links">
                    <a href=crate::app::DASHBOARD_PATH>"Dashboard"</a>
                    <a href="/profile">"Profile"</a>
                </nav>
                <span class="navbar__spacer"></span>
                <span class="navbar__user">{user_name}</span>
                <button
                    class="btn navbar__logout"
                    on:click=on_logout
                    disabled=move || session.get().logging_out
                >
                    "Logout"
                </button>
            </Show>
        </header>
    }
}
