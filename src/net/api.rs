//! HTTP adapter and auth endpoints.
//!
//! Client-side (`web`): real HTTP calls via `gloo-net` with session
//! cookies included on every request. Native builds get stubs returning
//! `None`/`Err` so the rest of the crate compiles and tests without a
//! browser.
//!
//! ERROR HANDLING
//! ==============
//! Non-2xx responses become `Err(String)` carrying the backend `message`
//! field when the body has one; transport failures and timeouts collapse
//! to [`SERVER_ERROR`]. Message extraction never panics on a bodyless or
//! malformed error response.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::{LoginPayload, ProfileUpdate, SignupPayload, User};

/// Fixed ceiling applied to every request; nothing is retried.
#[cfg(feature = "web")]
const REQUEST_TIMEOUT_MS: u32 = 10_000;

/// Generic message for transport failures and unusable responses.
pub const SERVER_ERROR: &str = "Server error. Please try again.";

#[cfg(not(feature = "web"))]
const OFFLINE: &str = "not available outside the browser";

#[cfg(any(test, feature = "web"))]
const SESSION_ENDPOINT: &str = "/auth/check";
#[cfg(any(test, feature = "web"))]
const LOGIN_ENDPOINT: &str = "/auth/login";
#[cfg(any(test, feature = "web"))]
const SIGNUP_ENDPOINT: &str = "/auth/signup";
#[cfg(any(test, feature = "web"))]
const LOGOUT_ENDPOINT: &str = "/auth/logout";
#[cfg(any(test, feature = "web"))]
const UPDATE_PROFILE_ENDPOINT: &str = "/auth/update-profile";

/// Pull the backend-provided `message` out of an error body, falling
/// back to a status-derived generic when the body is absent, malformed,
/// or has no usable message.
#[cfg(any(test, feature = "web"))]
pub(crate) fn extract_error_message(status: u16, body: &str) -> String {
    serde_json::from_str::<serde_json::Value>(body)
        .ok()
        .and_then(|value| value.get("message").and_then(|m| m.as_str()).map(str::to_owned))
        .filter(|message| !message.is_empty())
        .unwrap_or_else(|| format!("Request failed with status {status}"))
}

#[cfg(feature = "web")]
pub(crate) fn get(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::get(&super::config::api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "web")]
pub(crate) fn post(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::post(&super::config::api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "web")]
pub(crate) fn put(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::put(&super::config::api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
}

#[cfg(feature = "web")]
pub(crate) fn delete(path: &str) -> gloo_net::http::RequestBuilder {
    gloo_net::http::Request::delete(&super::config::api_url(path))
        .credentials(web_sys::RequestCredentials::Include)
}

/// Send a built request, logging it and its outcome, racing the fixed
/// timeout ceiling.
#[cfg(feature = "web")]
pub(crate) async fn send(
    label: &str,
    request: Result<gloo_net::http::Request, gloo_net::Error>,
) -> Result<gloo_net::http::Response, String> {
    use futures::future::{Either, select};

    let request = request.map_err(|error| {
        leptos::logging::warn!("api: failed to build {label}: {error}");
        SERVER_ERROR.to_owned()
    })?;
    leptos::logging::log!("api: {label} -> {}", request.url());

    let raced = select(
        Box::pin(request.send()),
        Box::pin(gloo_timers::future::TimeoutFuture::new(REQUEST_TIMEOUT_MS)),
    )
    .await;
    match raced {
        Either::Left((Ok(response), _)) => {
            leptos::logging::log!("api: {label} <- {}", response.status());
            Ok(response)
        }
        Either::Left((Err(error), _)) => {
            leptos::logging::warn!("api: {label} transport error: {error}");
            Err(SERVER_ERROR.to_owned())
        }
        Either::Right(((), _)) => {
            leptos::logging::warn!("api: {label} timed out after {REQUEST_TIMEOUT_MS}ms");
            Err(SERVER_ERROR.to_owned())
        }
    }
}

/// Parse a JSON success body, or surface the extracted error message.
#[cfg(feature = "web")]
pub(crate) async fn read_json<T: serde::de::DeserializeOwned>(
    response: gloo_net::http::Response,
) -> Result<T, String> {
    let status = response.status();
    let text = response.text().await.unwrap_or_default();
    if !(200..300).contains(&status) {
        return Err(extract_error_message(status, &text));
    }
    serde_json::from_str(&text).map_err(|error| {
        leptos::logging::warn!("api: unexpected response body: {error}");
        SERVER_ERROR.to_owned()
    })
}

/// Discard a success body, or surface the extracted error message.
#[cfg(feature = "web")]
pub(crate) async fn read_ok(response: gloo_net::http::Response) -> Result<(), String> {
    let status = response.status();
    if (200..300).contains(&status) {
        return Ok(());
    }
    let text = response.text().await.unwrap_or_default();
    Err(extract_error_message(status, &text))
}

/// Fetch the currently authenticated user from `/auth/check`.
/// Returns `None` when anonymous, on any failure, or outside the
/// browser.
pub async fn fetch_session() -> Option<User> {
    #[cfg(feature = "web")]
    {
        let response = send("GET /auth/check", get(SESSION_ENDPOINT).build()).await.ok()?;
        read_json::<User>(response).await.ok()
    }
    #[cfg(not(feature = "web"))]
    {
        None
    }
}

/// Authenticate with email + password; returns the session identity.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when authentication
/// fails.
pub async fn login(payload: &LoginPayload) -> Result<User, String> {
    #[cfg(feature = "web")]
    {
        let response = send("POST /auth/login", post(LOGIN_ENDPOINT).json(payload)).await?;
        read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = payload;
        Err(OFFLINE.to_owned())
    }
}

/// Create an account; returns the new session identity.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when signup fails.
pub async fn signup(payload: &SignupPayload) -> Result<User, String> {
    #[cfg(feature = "web")]
    {
        let response = send("POST /auth/signup", post(SIGNUP_ENDPOINT).json(payload)).await?;
        read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = payload;
        Err(OFFLINE.to_owned())
    }
}

/// End the backend session.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when logout fails.
pub async fn logout() -> Result<(), String> {
    #[cfg(feature = "web")]
    {
        let response = send("POST /auth/logout", post(LOGOUT_ENDPOINT).build()).await?;
        read_ok(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        Err(OFFLINE.to_owned())
    }
}

/// Update the profile with a partial identity document; returns the
/// replacement identity.
///
/// # Errors
///
/// Returns the backend message, or a generic one, when the update is
/// rejected.
pub async fn update_profile(update: &ProfileUpdate) -> Result<User, String> {
    #[cfg(feature = "web")]
    {
        let response =
            send("PUT /auth/update-profile", put(UPDATE_PROFILE_ENDPOINT).json(update)).await?;
        read_json(response).await
    }
    #[cfg(not(feature = "web"))]
    {
        let _ = update;
        Err(OFFLINE.to_owned())
    }
}
