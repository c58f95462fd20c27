//! Session persistence in browser local storage.

use gloo_storage::{LocalStorage, Storage};
use log::error;
use shared::{SessionUser, TokenResponse};

pub const TOKEN_KEY: &str = "token";
pub const USERNAME_KEY: &str = "username";
pub const USER_ID_KEY: &str = "user_id";
pub const ROLE_KEY: &str = "role";

pub fn store(response: &TokenResponse) {
    let entries = [
        (TOKEN_KEY, &response.access_token),
        (USERNAME_KEY, &response.user.username),
        (USER_ID_KEY, &response.user.user_id),
        (ROLE_KEY, &response.user.role),
    ];
    for (key, value) in entries {
        if let Err(e) = LocalStorage::set(key, value) {
            error!("Failed to store {} in local storage: {}", key, e);
        }
    }
}

pub fn token() -> Option<String> {
    LocalStorage::get::<String>(TOKEN_KEY).ok().filter(|t| !t.is_empty())
}

pub fn username() -> Option<String> {
    LocalStorage::get::<String>(USERNAME_KEY).ok()
}

/// The stored user, if a token is present.
pub fn user() -> Option<SessionUser> {
    token()?;
    Some(SessionUser {
        user_id: LocalStorage::get(USER_ID_KEY).unwrap_or_default(),
        username: username().unwrap_or_default(),
        role: LocalStorage::get(ROLE_KEY).unwrap_or_else(|_| "user".to_string()),
    })
}

pub fn clear() {
    for key in [TOKEN_KEY, USERNAME_KEY, USER_ID_KEY, ROLE_KEY] {
        LocalStorage::delete(key);
    }
}
