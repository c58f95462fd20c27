use crate::api::api_url;
use crate::api::utils::{network_error, read_json};
use gloo_net::http::Request;
use shared::{ApiStatus, Result};

/// Probe the API root; used by the footer to show whether the backend is up
pub async fn get_api_status() -> Result<ApiStatus> {
    let response = Request::get(&api_url("/"))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}
