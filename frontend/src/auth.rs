use log::{debug, warn};
use shared::{SessionUser, TokenResponse};
use std::rc::Rc;
use wasm_bindgen_futures::spawn_local;
use yew::functional::use_reducer_eq;
use yew::prelude::*;

use crate::api::auth;
use crate::session;

pub const SESSION_EXPIRED: &str = "Session expired. Please log in again.";

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AuthState {
    pub user: Option<SessionUser>,
    pub loading: bool,
    pub error: Option<String>,
}

impl AuthState {
    pub fn is_authenticated(&self) -> bool {
        self.user.is_some()
    }

    pub fn session_expired(&self) -> bool {
        self.error.as_deref() == Some(SESSION_EXPIRED)
    }
}

#[derive(Clone, Debug)]
pub enum AuthAction {
    LoginStarted,
    LoginSuccess(TokenResponse),
    LoginError(String),
    Logout,
    SessionExpired,
    SetError(Option<String>),
}

impl Reducible for AuthState {
    type Action = AuthAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AuthAction::LoginStarted => Rc::new(Self {
                loading: true,
                error: None,
                ..(*self).clone()
            }),
            AuthAction::LoginSuccess(response) => {
                session::store(&response);
                Rc::new(Self {
                    user: Some(response.user),
                    loading: false,
                    error: None,
                })
            }
            AuthAction::LoginError(error) => Rc::new(Self {
                user: None,
                loading: false,
                error: Some(error),
            }),
            AuthAction::Logout => {
                session::clear();
                Rc::new(Self::default())
            }
            AuthAction::SessionExpired => {
                session::clear();
                Rc::new(Self {
                    user: None,
                    loading: false,
                    error: Some(SESSION_EXPIRED.to_string()),
                })
            }
            AuthAction::SetError(error) => Rc::new(Self {
                error,
                ..(*self).clone()
            }),
        }
    }
}

#[derive(Properties, Clone, PartialEq)]
pub struct AuthProviderProps {
    #[prop_or_default]
    pub children: Children,
}

#[derive(Clone, Debug, PartialEq)]
pub struct AuthContext {
    pub state: AuthState,
    pub login: Callback<(String, String)>,
    pub logout: Callback<()>,
    /// Called when the API rejects the token
    pub expire: Callback<()>,
    pub clear_error: Callback<()>,
}

#[function_component(AuthProvider)]
pub fn auth_provider(props: &AuthProviderProps) -> Html {
    // Restore a stored session, if any
    let auth = use_reducer_eq(|| AuthState {
        user: session::user(),
        ..Default::default()
    });

    let login = {
        let auth = auth.clone();
        Callback::from(move |(username, password): (String, String)| {
            let auth = auth.clone();
            spawn_local(async move {
                auth.dispatch(AuthAction::LoginStarted);
                match auth::login(&username, &password).await {
                    Ok(response) => auth.dispatch(AuthAction::LoginSuccess(response)),
                    Err(e) => {
                        debug!("Login rejected: {}", e);
                        auth.dispatch(AuthAction::LoginError(auth::login_error_message(&e)));
                    }
                }
            });
        })
    };

    let logout = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            debug!("Logging out");
            auth.dispatch(AuthAction::Logout);
        })
    };

    let expire = {
        let auth = auth.clone();
        Callback::from(move |_: ()| {
            warn!("Session expired, forcing logout");
            auth.dispatch(AuthAction::SessionExpired);
        })
    };

    let clear_error = {
        let auth = auth.clone();
        Callback::from(move |_: ()| auth.dispatch(AuthAction::SetError(None)))
    };

    let context = AuthContext {
        state: (*auth).clone(),
        login,
        logout,
        expire,
        clear_error,
    };

    html! {
        <ContextProvider<AuthContext> context={context}>
            {props.children.clone()}
        </ContextProvider<AuthContext>>
    }
}
