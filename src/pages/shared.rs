//! Public shared-document viewer, addressed by an opaque token.
//!
//! Four terminal states: loading, error (backend message), not-found
//! (token resolved but the document is gone), and the rendered
//! document. No authentication is required on this route.

#[cfg(test)]
#[path = "shared_test.rs"]
mod shared_test;

use leptos::prelude::*;
use leptos_router::hooks::use_params_map;

use crate::net::types::{DocKind, SharedDocument};
use crate::util::dates::date_only;
use crate::util::files::{FileKind, classify_file, pdf_preview_url};

/// Display state of the token lookup.
#[derive(Clone, Debug, PartialEq, Eq)]
enum SharedLookup {
    Loading,
    Ready(SharedDocument),
    NotFound,
    Failed(String),
}

#[cfg(any(test, feature = "web"))]
fn lookup_outcome(result: Result<Option<SharedDocument>, String>) -> SharedLookup {
    match result {
        Ok(Some(document)) => SharedLookup::Ready(document),
        Ok(None) => SharedLookup::NotFound,
        Err(message) => SharedLookup::Failed(message),
    }
}

/// Heading for the card: prescriptions are titled, reports named by
/// their type; an unrecognized route kind takes whichever is present.
fn shared_heading(kind: Option<DocKind>, document: &SharedDocument) -> String {
    match kind {
        Some(DocKind::Prescription) => document.title.clone(),
        Some(DocKind::Report) => document.doc_type.clone(),
        None => document.title.clone().or_else(|| document.doc_type.clone()),
    }
    .unwrap_or_else(|| "Shared Document".to_owned())
}

#[component]
pub fn SharedViewPage() -> impl IntoView {
    let params = use_params_map();
    let kind = Memo::new(move |_| {
        params.read().get("kind").and_then(|value| DocKind::from_route(&value))
    });
    let token = Memo::new(move |_| params.read().get("token").unwrap_or_default());

    let lookup = RwSignal::new(SharedLookup::Loading);
    Effect::new(move || {
        let token_value = token.get();
        lookup.set(SharedLookup::Loading);
        #[cfg(feature = "web")]
        leptos::task::spawn_local(async move {
            let result = crate::net::share::fetch_shared_document(&token_value).await;
            lookup.set(lookup_outcome(result));
        });
        #[cfg(not(feature = "web"))]
        let _ = token_value;
    });

    view! {
        <div class="shared-page">
            {move || match lookup.get() {
                SharedLookup::Loading => view! {
                    <div class="shared-page__card shared-page__card--center">
                        <div class="spinner"></div>
                    </div>
                }
                .into_any(),
                SharedLookup::Failed(message) => view! {
                    <div class="shared-page__card shared-page__card--center">
                        <h2 class="shared-page__error-title">"Error"</h2>
                        <p>{message}</p>
                    </div>
                }
                .into_any(),
                SharedLookup::NotFound => view! {
                    <div class="shared-page__card shared-page__card--center">
                        <h2>"Document Not Found"</h2>
                        <p>"This document may have expired or been removed."</p>
                    </div>
                }
                .into_any(),
                SharedLookup::Ready(document) => shared_document_card(kind.get(), document).into_any(),
            }}
        </div>
    }
}

fn shared_document_card(kind: Option<DocKind>, document: SharedDocument) -> impl IntoView {
    let heading = shared_heading(kind, &document);
    let kind_label = kind.map_or("document", DocKind::wire);
    let subtitle = match &document.date {
        Some(date) => format!("Shared {kind_label} • {}", date_only(date)),
        None => format!("Shared {kind_label}"),
    };
    let tags = document.tags.clone();
    let file_url = document.file_url.clone();
    let has_file = file_url.is_some();

    let preview = file_url.clone().map(|url| match classify_file(None, &url) {
        FileKind::Pdf => view! {
            <iframe class="shared-page__frame" src=pdf_preview_url(&url) title="Document preview"></iframe>
        }
        .into_any(),
        _ => view! {
            <img class="shared-page__image" src=url alt="Document preview"/>
        }
        .into_any(),
    });

    let open_url = file_url;
    let on_open = move |_| {
        #[cfg(feature = "web")]
        {
            if let Some(url) = open_url.clone() {
                if let Some(window) = web_sys::window() {
                    let _ = window.open_with_url_and_target(&url, "_blank");
                }
            }
        }
        #[cfg(not(feature = "web"))]
        {
            let _ = &open_url;
        }
    };

    view! {
        <div class="shared-page__card">
            <h1>{heading}</h1>
            <p class="shared-page__subtitle">{subtitle}</p>
            <div class="shared-page__tags">
                {tags
                    .into_iter()
                    .map(|tag| view! { <span class="badge badge--tag">{tag}</span> })
                    .collect::<Vec<_>>()}
            </div>
            {match preview {
                Some(preview) => preview,
                None => view! {
                    <div class="shared-page__no-preview">
                        <p>"No preview available"</p>
                    </div>
                }
                .into_any(),
            }}
            <Show when=move || has_file>
                <div class="shared-page__actions">
                    <button class="btn btn--primary" on:click=on_open.clone()>
                        "View Full Size"
                    </button>
                </div>
            </Show>
        </div>
    }
}
