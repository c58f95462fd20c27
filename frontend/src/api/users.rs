use crate::api::api_url;
use crate::api::utils::{authenticated_delete, authenticated_put, fetch_auth, network_error, read_json};
use log::debug;
use shared::{MessageResponse, Result, SharedError, UpdateProfileRequest, UserProfile};
use validator::Validate;

pub fn user_path(user_id: &str) -> String {
    format!("/users/{}", urlencoding::encode(user_id))
}

pub async fn get_profile(user_id: &str) -> Result<UserProfile> {
    debug!("Fetching profile {}", user_id);
    fetch_auth(&user_path(user_id)).await
}

pub async fn update_profile(user_id: &str, update: &UpdateProfileRequest) -> Result<MessageResponse> {
    if update.is_empty() {
        return Err(SharedError::Validation("No changes to save".to_string()));
    }
    update.validate()?;
    debug!("Updating profile {}", user_id);

    let response = authenticated_put(&api_url(&user_path(user_id)))
        .json(update)
        .map_err(|e| SharedError::Conversion(format!("Failed to serialize profile update: {}", e)))?
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}

/// Soft-deletes the account; the API keeps the record but disables login.
pub async fn deactivate_account(user_id: &str) -> Result<MessageResponse> {
    debug!("Deactivating account {}", user_id);
    let response = authenticated_delete(&api_url(&user_path(user_id)))
        .send()
        .await
        .map_err(network_error)?;
    read_json(response).await
}
