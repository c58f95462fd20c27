use gloo_net::http::{Request, RequestBuilder, Response};
use log::{debug, warn};
use serde::de::DeserializeOwned;
use shared::{ErrorResponse, Result, SharedError};

use crate::api::api_url;
use crate::session;

/// Attaches the bearer token from localStorage, if one is stored
fn with_token(req: RequestBuilder) -> RequestBuilder {
    match session::token() {
        Some(token) => req.header("Authorization", &bearer(&token)),
        None => req,
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn authenticated_get(url: &str) -> RequestBuilder {
    with_token(Request::get(url))
}

pub fn authenticated_put(url: &str) -> RequestBuilder {
    with_token(Request::put(url))
}

pub fn authenticated_delete(url: &str) -> RequestBuilder {
    with_token(Request::delete(url))
}

pub fn network_error(e: gloo_net::Error) -> SharedError {
    SharedError::Network(e.to_string())
}

/// Decodes a JSON body, turning non-OK statuses into typed errors.
///
/// A 401 clears the stored session so every caller sees the user as logged out.
pub async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T> {
    if !response.ok() {
        let status = response.status();
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.message());
        if status == 401 {
            warn!("Session rejected by the API, clearing stored token");
            session::clear();
        }
        return Err(SharedError::from_status(status, detail));
    }

    response
        .json::<T>()
        .await
        .map_err(|e| SharedError::Conversion(format!("Failed to parse response: {}", e)))
}

/// GET `endpoint` with the bearer token and decode the JSON body.
pub async fn fetch_auth<T: DeserializeOwned>(endpoint: &str) -> Result<T> {
    debug!("GET {}", endpoint);
    let response = authenticated_get(&api_url(endpoint))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}
