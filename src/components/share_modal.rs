//! Modal for sharing one document by link, email, or WhatsApp.
//!
//! SYSTEM CONTEXT
//! ==============
//! Scoped to a single document + kind chosen on the dashboard. All
//! modal state (generated link, email field) lives in component-local
//! signals, so closing the modal discards it.

use leptos::prelude::*;

use crate::net::types::DocKind;
use crate::state::notify::{self, NotifyState};
use crate::util::validate::is_valid_email;

#[component]
pub fn ShareModal(kind: DocKind, document_id: String, on_close: Callback<()>) -> impl IntoView {
    let notices = expect_context::<RwSignal<NotifyState>>();

    let link = RwSignal::new(None::<String>);
    let email = RwSignal::new(String::new());
    let busy = RwSignal::new(false);
    let copied = RwSignal::new(false);

    let generate_id = document_id.clone();
    let on_generate = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        copied.set(false);
        #[cfg(feature = "web")]
        {
            let id = generate_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::share::generate_link(kind, &id).await {
                    Ok(url) => {
                        link.set(Some(url));
                        notify::success(notices, "Share link generated successfully!");
                    }
                    Err(message) => {
                        notify::error(notices, format!("Failed to generate share link: {message}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = &generate_id;
            busy.set(false);
        }
    };

    let on_copy = move |_| {
        #[cfg(feature = "web")]
        {
            if let Some(url) = link.get_untracked() {
                if let Some(window) = web_sys::window() {
                    let _ = window.navigator().clipboard().write_text(&url);
                    copied.set(true);
                    notify::success(notices, "Link copied to clipboard!");
                }
            }
        }
    };

    let email_id = document_id.clone();
    let on_send_email = move |_| {
        if busy.get() {
            return;
        }
        let address = email.get().trim().to_owned();
        if address.is_empty() {
            notify::error(notices, "Please enter an email address");
            return;
        }
        if !is_valid_email(&address) {
            notify::error(notices, "Please enter a valid email address");
            return;
        }
        busy.set(true);
        #[cfg(feature = "web")]
        {
            let id = email_id.clone();
            leptos::task::spawn_local(async move {
                match crate::net::share::send_share_email(&address, kind, &id).await {
                    Ok(()) => {
                        notify::success(notices, "Email sent successfully!");
                        email.set(String::new());
                    }
                    Err(message) => {
                        notify::error(notices, format!("Failed to send email: {message}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = (&email_id, address);
            busy.set(false);
        }
    };

    let whatsapp_id = document_id;
    let on_whatsapp = move |_| {
        if busy.get() {
            return;
        }
        busy.set(true);
        #[cfg(feature = "web")]
        {
            let id = whatsapp_id.clone();
            leptos::task::spawn_local(async move {
                // Reuse the generated link when one exists; mint one first
                // otherwise.
                let share_url = match link.get_untracked() {
                    Some(existing) => Ok(existing),
                    None => crate::net::share::generate_link(kind, &id)
                        .await
                        .inspect(|url| link.set(Some(url.clone()))),
                };
                match share_url {
                    Ok(url) => {
                        let message = crate::net::share::whatsapp_message(kind, &url);
                        if let Some(window) = web_sys::window() {
                            let _ = window
                                .open_with_url_and_target(&crate::net::share::whatsapp_url(&message), "_blank");
                        }
                    }
                    Err(message) => {
                        notify::error(notices, format!("Failed to share via WhatsApp: {message}"));
                    }
                }
                busy.set(false);
            });
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = &whatsapp_id;
            busy.set(false);
        }
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--share" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>{format!("Share {}", kind.label())}</h2>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </header>

                <div class="dialog__section">
                    <button class="btn btn--primary dialog__wide" on:click=on_generate disabled=move || busy.get()>
                        "Generate Share Link"
                    </button>
                    <Show when=move || link.get().is_some()>
                        <div class="share-link-row">
                            <input
                                class="dialog__input share-link-row__value"
                                type="text"
                                readonly
                                prop:value=move || link.get().unwrap_or_default()
                            />
                            <button class="btn" on:click=on_copy>
                                {move || if copied.get() { "Copied" } else { "Copy" }}
                            </button>
                        </div>
                    </Show>
                </div>

                <div class="dialog__section">
                    <label class="dialog__label" for="share-email">"Share via Email"</label>
                    <div class="share-email-row">
                        <input
                            id="share-email"
                            class="dialog__input share-email-row__value"
                            type="email"
                            placeholder="Enter email address"
                            prop:value=move || email.get()
                            on:input=move |ev| email.set(event_target_value(&ev))
                        />
                        <button
                            class="btn"
                            on:click=on_send_email
                            disabled=move || busy.get() || email.get().is_empty()
                        >
                            "Send"
                        </button>
                    </div>
                </div>

                <div class="dialog__section">
                    <button class="btn dialog__wide" on:click=on_whatsapp disabled=move || busy.get()>
                        "Share via WhatsApp"
                    </button>
                </div>
            </div>
        </div>
    }
}
