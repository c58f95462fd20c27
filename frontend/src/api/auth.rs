use crate::api::api_url;
use crate::api::utils::{network_error, read_json};
use gloo_net::http::Request;
use log::debug;
use shared::{LoginRequest, RegisterRequest, RegisterResponse, Result, SharedError, TokenResponse};
use validator::Validate;

pub const LOGIN_FAILED: &str = "Login failed";
pub const BACKEND_OFFLINE: &str = "Backend is offline";
pub const REGISTRATION_FAILED: &str = "Registration failed";
pub const CONNECTION_ERROR: &str = "Connection error";

/// Alert text for a failed login.
pub fn login_error_message(error: &SharedError) -> String {
    failure_message(error, LOGIN_FAILED, BACKEND_OFFLINE)
}

/// Alert text for a failed registration.
pub fn register_error_message(error: &SharedError) -> String {
    failure_message(error, REGISTRATION_FAILED, CONNECTION_ERROR)
}

fn failure_message(error: &SharedError, fallback: &str, offline: &str) -> String {
    match error {
        SharedError::Network(_) => offline.to_string(),
        SharedError::Validation(msg) => msg.clone(),
        SharedError::Unauthorized(detail)
        | SharedError::NotFound(detail)
        | SharedError::Api { detail, .. }
            if !detail.starts_with("HTTP ") =>
        {
            detail.clone()
        }
        _ => fallback.to_string(),
    }
}

pub async fn login(username: &str, password: &str) -> Result<TokenResponse> {
    debug!("Attempting login for user: {}", username);

    let login_request = LoginRequest {
        username: username.trim().to_string(),
        password: password.to_string(),
    };
    login_request.validate()?;

    let response = Request::post(&api_url("/auth/login"))
        .json(&login_request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize login request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    let token = read_json::<TokenResponse>(response).await?;
    debug!("Login successful for user: {}", token.user.username);
    Ok(token)
}

pub async fn register(request: RegisterRequest) -> Result<RegisterResponse> {
    debug!("Registering new user: {}", request.username);
    request.validate()?;

    let response = Request::post(&api_url("/auth/register"))
        .json(&request)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize register request: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;

    let registered = read_json::<RegisterResponse>(response).await?;
    debug!("Successfully registered user: {}", registered.email);
    Ok(registered)
}
