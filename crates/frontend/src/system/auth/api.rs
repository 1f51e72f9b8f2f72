use contracts::system::auth::{AuthResponse, LoginRequest, RegisterRequest};
use gloo_net::http::Request;

use crate::shared::api_utils::{api_url, decode_error, ApiError};

/// Login with email and password.
///
/// No bearer header here: these are the endpoints that mint the token, and a
/// 401 means wrong credentials, not an expired session.
pub async fn login(request: &LoginRequest) -> Result<AuthResponse, ApiError> {
    post_auth("/auth/login", request).await
}

/// Create an account. Answers like login on success; 409 when the email is
/// already registered.
pub async fn register(request: &RegisterRequest) -> Result<AuthResponse, ApiError> {
    post_auth("/auth/register", request).await
}

async fn post_auth<B: serde::Serialize>(path: &str, body: &B) -> Result<AuthResponse, ApiError> {
    let request = Request::post(&api_url(path))
        .json(body)
        .map_err(|e| ApiError::Decode(e.to_string()))?;
    let response = request
        .send()
        .await
        .map_err(|e| ApiError::Network(e.to_string()))?;

    if !response.ok() {
        let status = response.status();
        let body = response.text().await.unwrap_or_default();
        return Err(decode_error(status, &body));
    }

    response
        .json::<AuthResponse>()
        .await
        .map_err(|e| ApiError::Decode(e.to_string()))
}
