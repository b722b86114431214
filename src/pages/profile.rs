//! Profile page: read-only identity fields plus profile-image
//! replacement.
//!
//! The chosen image is read client-side as a base64 data URL, rendered
//! optimistically, and submitted through the session store; a rejected
//! update leaves the stored identity untouched and surfaces the backend
//! message.

#[cfg(test)]
#[path = "profile_test.rs"]
mod profile_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::net::types::ProfileUpdate;
use crate::state::notify::NotifyState;
use crate::state::session::SessionState;
use crate::util::auth::install_unauth_redirect;
use crate::util::dates::date_only;

const DEFAULT_AVATAR: &str = "/avatar.png";

/// Avatar source precedence: optimistic preview, then the stored
/// profile image, then the bundled placeholder.
fn avatar_src(preview: Option<String>, stored: Option<String>) -> String {
    preview.or(stored).unwrap_or_else(|| DEFAULT_AVATAR.to_owned())
}

fn member_since(created_at: Option<&str>) -> String {
    created_at
        .map(date_only)
        .filter(|value| !value.is_empty())
        .map_or_else(|| "N/A".to_owned(), str::to_owned)
}

#[component]
pub fn ProfilePage() -> impl IntoView {
    let session = expect_context::<RwSignal<SessionState>>();
    let notices = expect_context::<RwSignal<NotifyState>>();
    let navigate = use_navigate();
    install_unauth_redirect(session, navigate);

    // Data URL produced by the file reader, waiting to be submitted.
    let pending_image = RwSignal::new(None::<String>);
    // Optimistic preview; survives a failed update so the user sees what
    // they picked, visibly decoupled from the stored identity.
    let preview = RwSignal::new(None::<String>);

    let on_file_change = move |ev: leptos::ev::Event| {
        #[cfg(feature = "web")]
        {
            use wasm_bindgen::JsCast;

            let input = event_target::<web_sys::HtmlInputElement>(&ev);
            let Some(picked) = input.files().and_then(|list| list.get(0)) else {
                return;
            };
            let Ok(reader) = web_sys::FileReader::new() else {
                return;
            };
            let reader_handle = reader.clone();
            let onloadend = wasm_bindgen::closure::Closure::<dyn FnMut(web_sys::ProgressEvent)>::new(
                move |_event: web_sys::ProgressEvent| {
                    if let Ok(result) = reader_handle.result() {
                        if let Some(data_url) = result.as_string() {
                            pending_image.set(Some(data_url));
                        }
                    }
                },
            );
            reader.set_onloadend(Some(onloadend.as_ref().unchecked_ref()));
            onloadend.forget();
            let _ = reader.read_as_data_url(&picked);
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = ev;
        }
    };

    // Once the reader delivers, render optimistically and submit.
    Effect::new(move || {
        if let Some(data_url) = pending_image.get() {
            pending_image.set(None);
            preview.set(Some(data_url.clone()));
            let update = ProfileUpdate { name: None, profile_pic: Some(data_url) };
            #[cfg(feature = "web")]
            leptos::task::spawn_local(async move {
                crate::state::session::update_profile(session, notices, update).await;
            });
            #[cfg(not(feature = "web"))]
            let _ = (update, notices);
        }
    });

    let avatar = move || {
        avatar_src(preview.get(), session.get().user.and_then(|user| user.profile_pic))
    };
    let display_name = move || {
        session.get().user.map_or_else(|| "Not Provided".to_owned(), |user| user.name)
    };
    let display_email = move || {
        session.get().user.map_or_else(|| "Not Provided".to_owned(), |user| user.email)
    };
    let since = move || {
        member_since(session.get().user.and_then(|user| user.created_at).as_deref())
    };
    let updating = move || session.get().updating_profile;

    view! {
        <div class="profile-page">
            <div class="profile-card">
                <header class="profile-card__header">
                    <h1>"Profile"</h1>
                    <p>"Your profile details"</p>
                </header>

                <div class="profile-avatar">
                    <img class="profile-avatar__image" src=avatar alt="Profile"/>
                    <label class="profile-avatar__upload" class:is-busy=updating>
                        "📷"
                        <input
                            class="profile-avatar__input"
                            type="file"
                            accept="image/*"
                            on:change=on_file_change
                            disabled=updating
                        />
                    </label>
                </div>
                <p class="profile-avatar__hint">
                    {move || {
                        if updating() { "Uploading photo..." } else { "Click the camera icon to update" }
                    }}
                </p>

                <div class="profile-field">
                    <span class="profile-field__label">"Full Name"</span>
                    <p class="profile-field__value">{display_name}</p>
                </div>
                <div class="profile-field">
                    <span class="profile-field__label">"Email Address"</span>
                    <p class="profile-field__value">{display_email}</p>
                </div>

                <div class="profile-account">
                    <h2>"Account Information"</h2>
                    <div class="profile-account__row">
                        <span>"Member Since"</span>
                        <span>{since}</span>
                    </div>
                    <div class="profile-account__row">
                        <span>"Account Status"</span>
                        <span class="profile-account__status">"Active"</span>
                    </div>
                </div>
            </div>
        </div>
    }
}
