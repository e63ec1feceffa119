//! REST API helpers for communicating with the server.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning `None`/an error, since these endpoints
//! are only called from the browser.
//!
//! ERROR HANDLING
//! ==============
//! Failures come back as `ApiFailure` so forms can show per-field messages and
//! pages can tell a lapsed session (401) from everything else.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use menu::{Food, FoodCategory, FoodPage, NewFood, Order, OrderRequest, SupportMessage};

use super::types::{ApiFailure, User};

#[cfg(any(test, feature = "hydrate"))]
fn foods_endpoint(page: u32, per_page: u32, category: Option<FoodCategory>) -> String {
    let mut url = format!("/api/foods?page={page}&per_page={per_page}");
    if let Some(category) = category {
        url.push_str("&category=");
        url.push_str(category.as_str());
    }
    url
}

#[cfg(not(feature = "hydrate"))]
fn server_side<T>() -> Result<T, ApiFailure> {
    Err(ApiFailure::network("not available on server"))
}

#[cfg(feature = "hydrate")]
async fn read_json<T: serde::de::DeserializeOwned>(resp: gloo_net::http::Response) -> Result<T, ApiFailure> {
    if !resp.ok() {
        let status = resp.status();
        let body = resp.text().await.unwrap_or_default();
        log::warn!("api {} failed: {status}", resp.url());
        return Err(ApiFailure::from_body(status, &body));
    }
    resp.json::<T>().await.map_err(|e| ApiFailure::network(e.to_string()))
}

#[cfg(feature = "hydrate")]
async fn get_json<T: serde::de::DeserializeOwned>(url: &str) -> Result<T, ApiFailure> {
    let resp = gloo_net::http::Request::get(url)
        .send()
        .await
        .map_err(|e| ApiFailure::network(e.to_string()))?;
    read_json(resp).await
}

#[cfg(feature = "hydrate")]
async fn post_json<B, T>(url: &str, body: &B) -> Result<T, ApiFailure>
where
    B: serde::Serialize,
    T: serde::de::DeserializeOwned,
{
    let resp = gloo_net::http::Request::post(url)
        .json(body)
        .map_err(|e| ApiFailure::network(e.to_string()))?
        .send()
        .await
        .map_err(|e| ApiFailure::network(e.to_string()))?;
    read_json(resp).await
}

/// Fetch the currently authenticated user from `/api/auth/me`.
/// Returns `None` if not authenticated, on network failure, or on the server.
pub async fn fetch_current_user() -> Option<User> {
    #[cfg(feature = "hydrate")]
    {
        get_json::<User>("/api/auth/me").await.ok()
    }
    #[cfg(not(feature = "hydrate"))]
    {
        None
    }
}

/// Log out the current user by calling `POST /api/auth/logout`.
pub async fn logout() {
    #[cfg(feature = "hydrate")]
    {
        let _ = gloo_net::http::Request::post("/api/auth/logout").send().await;
    }
}

#[cfg(feature = "hydrate")]
#[derive(Debug, serde::Deserialize)]
struct RequestEmailCodeResponse {
    code: Option<String>,
}

/// Request a 6-character email login code via `POST /api/auth/email/request-code`.
///
/// Returns the code itself when the server has no mail provider and echoes it.
///
/// # Errors
///
/// Returns the server's message on rate limiting or a malformed address.
pub async fn request_email_login_code(email: &str) -> Result<Option<String>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email });
        let body: RequestEmailCodeResponse = post_json("/api/auth/email/request-code", &payload).await?;
        Ok(body.code)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = email;
        server_side()
    }
}

/// Verify an email login code via `POST /api/auth/email/verify-code`.
///
/// The server sets the session cookie and returns the signed-in user.
///
/// # Errors
///
/// Returns an error if the code is wrong, expired, or the request fails.
pub async fn verify_email_login_code(email: &str, code: &str) -> Result<User, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let payload = serde_json::json!({ "email": email, "code": code });
        post_json("/api/auth/email/verify-code", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (email, code);
        server_side()
    }
}

/// Fetch one page of the menu.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_foods(page: u32, per_page: u32, category: Option<FoodCategory>) -> Result<FoodPage, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        get_json(&foods_endpoint(page, per_page, category)).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (page, per_page, category);
        server_side()
    }
}

/// Create a menu item (admin only).
///
/// # Errors
///
/// Returns per-field messages on 422, or 401/403 when the session lacks rights.
pub async fn create_food(food: &NewFood) -> Result<Food, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/foods", food).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = food;
        server_side()
    }
}

/// Place an order for the signed-in user.
///
/// # Errors
///
/// Returns an error if the session lapsed or an item became unavailable.
pub async fn place_order(request: &OrderRequest) -> Result<Order, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        post_json("/api/orders", request).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = request;
        server_side()
    }
}

/// The signed-in user's orders, newest first.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_orders() -> Result<Vec<Order>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/orders").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_side()
    }
}

/// The signed-in user's support thread, oldest first.
///
/// # Errors
///
/// Returns an error if the request fails.
pub async fn fetch_support_messages() -> Result<Vec<SupportMessage>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        get_json("/api/support/messages").await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        server_side()
    }
}

/// Post to the support thread and get the whole updated thread back.
///
/// # Errors
///
/// Returns an error if the message is rejected or the request fails.
pub async fn send_support_message(body: &str) -> Result<Vec<SupportMessage>, ApiFailure> {
    #[cfg(feature = "hydrate")]
    {
        let payload = menu::NewSupportMessage { body: body.to_owned() };
        post_json("/api/support/messages", &payload).await
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = body;
        server_side()
    }
}
