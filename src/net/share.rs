//! Share-link endpoints and the public token-addressed document fetch.
//!
//! DESIGN
//! ======
//! Link generation and email delivery ride the authenticated session
//! like everything else; the token fetch is deliberately sent without
//! credentials because share tokens grant unauthenticated read access.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "share_test.rs"]
mod share_test;

use super::types::{DocKind, SharedDocument};

/// Generic message when a shared document cannot be loaded or parsed.
pub const SHARED_LOAD_ERROR: &str = "Failed to load document";

#[cfg(any(test, feature = "web"))]
const GENERATE_LINK_ENDPOINT: &str = "/api/share/generate-link";
#[cfg(any(test, feature = "web"))]
const SEND_EMAIL_ENDPOINT: &str = "/api/share/send-email";

#[cfg(not(feature = "web"))]
const OFFLINE: &str = "not available outside the browser";

#[cfg(any(test, feature = "web"))]
fn shared_endpoint(token: &str) -> String {
    format!("/api/share/{token}")
}

/// Body for `POST /api/share/generate-link`.
pub fn share_payload(kind: DocKind, id: &str) -> serde_json::Value {
    serde_json::json!({ "type": kind.wire(), "id": id })
}

/// Body for `POST /api/share/send-email`.
pub fn email_payload(email: &str, kind: DocKind, id: &str) -> serde_json::Value {
    serde_json::json!({ "email": email, "type": kind.wire(), "id": id })
}

/// Prefilled WhatsApp message for a generated link.
pub fn whatsapp_message(kind: DocKind, link: &str) -> String {
    format!("Check out this {}: {link}", kind.label())
}

/// WhatsApp deep link carrying the prefilled message.
#[cfg(feature = "web")]
pub fn whatsapp_url(message: &str) -> String {
    let encoded: String = js_sys::encode_uri_component(message).into();
    format!("https://wa.me/?text={encoded}")
}

#[cfg(feature = "web")]
#[derive(Debug, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
struct ShareLinkResponse {
    share_link: String,
}

/// Sort a share-token response into its three terminal outcomes:
/// `Ok(Some)` for a 2xx with a document body, `Ok(None)` for a 2xx with
/// an empty or null body (expired or removed), `Err` for everything
/// else.
#[cfg(any(test, feature = "web"))]
pub fn classify_shared_response(status: u16, body: &str) -> Result<Option<SharedDocument>, String> {
    if !(200..300).contains(&status) {
        return Err(super::api::extract_error_message(status, body));
    }
    if body.trim().is_empty() {
        return Ok(None);
    }
    serde_json::from_str::<Option<SharedDocument>>(body).map_err(|_| SHARED_LOAD_ERROR.to_owned())
}

/// Mint a share link for one document.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when generation fails.
pub async fn generate_link(kind: DocKind, id: &str) -> Result<String, String> {
    #[cfg(feature = "web")]
    {
        let request = super::api::post(GENERATE_LINK_ENDPOINT).json(&share_payload(kind, id));
        let response = super::api::send("POST /api/share/generate-link", request).await?;
        let body: ShareLinkResponse = super::api::read_json(response).await?;
        Ok(body.share_link)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (kind, id);
        Err(OFFLINE.to_owned())
    }
}

/// Ask the backend to email a share link for one document.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when delivery fails.
pub async fn send_share_email(email: &str, kind: DocKind, id: &str) -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        let request = super::api::post(SEND_EMAIL_ENDPOINT).json(&email_payload(email, kind, id));
        let response = super::api::send("POST /api/share/send-email", request).await?;
        super::api::read_ok(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = (email, kind, id);
        Err(OFFLINE.to_owned())
    }
}

/// Fetch a document by share token, with no credentials attached.
///
/// # Errors
///
/// Returns the backend message, or a generic one, on a non-2xx response
/// or transport failure. `Ok(None)` means the token resolved but the
/// document is gone.
pub async fn fetch_shared_document(token: &str) -> Result<Option<SharedDocument>, String> {
    #[cfg(feature = "web")]
    {
        let url = super::config::api_url(&shared_endpoint(token));
        let request = gloo_net::http::Request::get(&url).build();
        let response = super::api::send("GET /api/share/:token", request).await?;
        let status = response.status();
        let text = response.text().await.unwrap_or_default();
        classify_shared_response(status, &text)
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = token;
        Err(OFFLINE.to_owned())
    }
}
