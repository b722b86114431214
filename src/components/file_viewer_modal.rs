//! Modal that previews a document file inline.
//!
//! Images render directly, PDFs in a frame with the viewer toolbar
//! suppressed; anything else gets a download link.

use leptos::prelude::*;

use crate::util::files::{FileKind, classify_file, pdf_preview_url};

#[component]
pub fn FileViewerModal(
    url: String,
    content_type: Option<String>,
    on_close: Callback<()>,
) -> impl IntoView {
    let kind = classify_file(content_type.as_deref(), &url);
    let body = match kind {
        FileKind::Image => view! {
            <img class="file-viewer__image" src=url alt="Document preview"/>
        }
        .into_any(),
        FileKind::Pdf => view! {
            <iframe class="file-viewer__frame" src=pdf_preview_url(&url) title="Document preview"></iframe>
        }
        .into_any(),
        FileKind::Other => view! {
            <div class="file-viewer__fallback">
                <p>"This file type cannot be previewed."</p>
                <a class="btn btn--primary" href=url download>
                    "Download File"
                </a>
            </div>
        }
        .into_any(),
    };

    view! {
        <div class="dialog-backdrop" on:click=move |_| on_close.run(())>
            <div class="dialog dialog--viewer" on:click=move |ev| ev.stop_propagation()>
                <header class="dialog__header">
                    <h2>"Document Preview"</h2>
                    <button class="btn dialog__close" on:click=move |_| on_close.run(()) title="Close">
                        "✕"
                    </button>
                </header>
                {body}
            </div>
        </div>
    }
}
