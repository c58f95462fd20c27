use std::rc::Rc;

use yew::Reducible;

use crate::api::analytics::{density_rankings_path, youth_correlation_path};
use crate::api::api_url;
use crate::api::users::user_path;
use crate::api::utils::bearer;
use crate::auth::{AuthAction, AuthState, SESSION_EXPIRED};
use crate::config::Config;
use crate::Route;
use shared::SessionUser;
use yew_router::Routable;

fn signed_in() -> AuthState {
    AuthState {
        user: Some(SessionUser {
            user_id: "65a1".into(),
            username: "miracle".into(),
            role: "user".into(),
        }),
        loading: false,
        error: None,
    }
}

#[test]
fn builds_absolute_api_urls() {
    let url = api_url("/analytics/regions/roles");
    assert!(url.ends_with("/analytics/regions/roles"));
    assert!(url.starts_with(&Config::api_base_url()));
    assert!(!Config::api_base_url().ends_with('/'));
}

#[test]
fn density_path_carries_limit() {
    assert_eq!(
        density_rankings_path(Config::density_limit()),
        "/analytics/density/rankings?limit=10"
    );
}

#[test]
fn youth_path_encodes_country() {
    assert_eq!(
        youth_correlation_path(" Costa Rica "),
        "/analytics/country/Costa%20Rica/youth-correlation"
    );
    assert_eq!(
        youth_correlation_path("a/b"),
        "/analytics/country/a%2Fb/youth-correlation"
    );
}

#[test]
fn user_path_encodes_id() {
    assert_eq!(user_path("65a1f0"), "/users/65a1f0");
}

#[test]
fn bearer_header_value() {
    assert_eq!(bearer("abc"), "Bearer abc");
}

#[test]
fn login_started_clears_error() {
    let state = Rc::new(AuthState {
        error: Some("Invalid credentials".into()),
        ..Default::default()
    });
    let next = state.reduce(AuthAction::LoginStarted);
    assert!(next.loading);
    assert_eq!(next.error, None);
}

#[test]
fn login_error_drops_user() {
    let next = Rc::new(signed_in()).reduce(AuthAction::LoginError("Invalid credentials".into()));
    assert!(!next.is_authenticated());
    assert_eq!(next.error.as_deref(), Some("Invalid credentials"));
    assert!(!next.session_expired());
}

#[test]
fn set_error_keeps_user() {
    let next = Rc::new(signed_in()).reduce(AuthAction::SetError(Some("boom".into())));
    assert!(next.is_authenticated());
    assert_eq!(next.error.as_deref(), Some("boom"));
}

#[test]
fn session_expired_flag_follows_message() {
    let state = AuthState {
        error: Some(SESSION_EXPIRED.to_string()),
        ..Default::default()
    };
    assert!(state.session_expired());
}

#[test]
fn routes_resolve() {
    assert_eq!(Route::recognize("/dashboard"), Some(Route::Dashboard));
    assert_eq!(Route::recognize("/login"), Some(Route::Login));
    assert_eq!(Route::Profile.to_path(), "/profile");
}
