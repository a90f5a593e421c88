//! Registration, login, and current-user lookups.
//!
//! Register and login return an [`AuthResult`] whose token the caller keeps
//! and presents to authenticated endpoints such as [`current_user`] or
//! [`Journey::book`](crate::resources::Journey::book).

use serde_json::json;

use crate::auth::{AuthResult, BearerToken, User};
use crate::clients::{HttpClient, HttpError, HttpMethod, HttpRequest};

/// Creates a new account and returns the user with a fresh token.
///
/// Sends `POST /auth/register` with `{email, password, name}`.
///
/// # Errors
///
/// Returns [`HttpError::Status`] with the server's message when the backend
/// rejects the registration (for example, 409 `Email already registered`).
///
/// # Example
///
/// ```rust,ignore
/// use nitrous_api::auth::register;
///
/// let auth = register(&client, "rider@example.com", "hunter2222", "Rider").await?;
/// println!("welcome {}", auth.user.name);
/// ```
pub async fn register(
    client: &HttpClient,
    email: &str,
    password: &str,
    name: &str,
) -> Result<AuthResult, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Post, "/auth/register")
        .body(json!({"email": email, "password": password, "name": name}))
        .build()?;
    client.request_json(request).await
}

/// Authenticates with email and password.
///
/// Sends `POST /auth/login` with `{email, password}`.
///
/// # Errors
///
/// Returns [`HttpError::Status`] (401 `Invalid credentials`) when the
/// credentials are rejected.
pub async fn login(client: &HttpClient, email: &str, password: &str) -> Result<AuthResult, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Post, "/auth/login")
        .body(json!({"email": email, "password": password}))
        .build()?;
    client.request_json(request).await
}

/// Returns the user the token belongs to.
///
/// Sends `GET /auth/me` with `Authorization: Bearer <token>`.
///
/// # Errors
///
/// Returns [`HttpError::Status`] when the token is missing, invalid, or
/// refers to an unknown user.
pub async fn current_user(client: &HttpClient, token: &BearerToken) -> Result<User, HttpError> {
    let request = HttpRequest::builder(HttpMethod::Get, "/auth/me")
        .bearer(token)
        .build()?;
    client.request_json(request).await
}
