use yew::prelude::*;
use yew_router::prelude::*;
use log::{info, debug};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsValue;
use crate::auth::{AuthProvider, AuthContext};
use crate::components::nav::Nav;
use crate::components::footer::Footer;
use crate::components::toast::{ToastProvider, ToastContext, Toast, ToastType};

pub mod api;
pub mod auth;
pub mod chartjs;
pub mod components;
pub mod config;
pub mod js;
pub mod leaflet;
pub mod session;
pub mod pages {
    pub mod dashboard;
    pub mod login;
    pub mod not_found;
    pub mod profile;
}

use pages::{dashboard::Dashboard, login::Login, not_found::NotFound, profile::ProfilePage};

#[cfg(test)]
mod tests;

#[derive(Clone, Routable, PartialEq, Debug)]
pub enum Route {
    #[at("/")]
    Home,
    #[at("/login")]
    Login,
    #[at("/dashboard")]
    Dashboard,
    #[at("/profile")]
    Profile,
    #[not_found]
    #[at("/404")]
    NotFound,
}

#[function_component(App)]
fn app() -> Html {
    debug!("App component rendering");
    html! {
        <ToastProvider>
            <AuthProvider>
                <BrowserRouter>
                    <div class="app-container d-flex flex-column min-vh-100">
                        <Nav />
                        <main class="flex-grow-1">
                            <Switch<Route> render={switch} />
                        </main>
                        <Footer />
                    </div>
                </BrowserRouter>
            </AuthProvider>
        </ToastProvider>
    }
}

#[derive(Properties, PartialEq)]
pub struct Props {
    pub children: Children,
}

/// Renders its children only with a stored session; otherwise sends the user to the login page.
#[function_component(ProtectedRoute)]
pub fn protected_route(props: &Props) -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toast_context = use_context::<ToastContext>().expect("Toast context not found");
    let is_authenticated = auth.state.is_authenticated();
    let session_expired = auth.state.session_expired();
    let navigator = use_navigator().unwrap();

    {
        let toast_context = toast_context.clone();
        use_effect_with(session_expired, move |expired| {
            if *expired {
                let toast = Toast::new(
                    "Your session has expired. Please log in again.",
                    ToastType::Warning,
                ).with_duration(8000);
                toast_context.add_toast.emit(toast);
            }
            || ()
        });
    }

    {
        let navigator = navigator.clone();
        use_effect_with(is_authenticated, move |is_auth| {
            if !*is_auth {
                navigator.push(&Route::Login);
            }
            || ()
        });
    }

    if is_authenticated {
        html! { <>{props.children.clone()}</> }
    } else {
        html! {}
    }
}

fn switch(routes: Route) -> Html {
    debug!("Route switch: {:?}", routes);
    match routes {
        Route::Home => html! { <Redirect<Route> to={Route::Dashboard} /> },
        Route::Login => html! { <Login /> },
        Route::Dashboard => html! {
            <ProtectedRoute>
                <Dashboard />
            </ProtectedRoute>
        },
        Route::Profile => html! {
            <ProtectedRoute>
                <ProfilePage />
            </ProtectedRoute>
        },
        Route::NotFound => html! { <NotFound /> },
    }
}

#[wasm_bindgen]
pub async fn run_app() -> Result<(), JsValue> {
    wasm_logger::init(wasm_logger::Config::new(log::Level::Debug));
    console_error_panic_hook::set_once();
    info!("Logger and panic hook initialised");

    info!("Mounting dashboard");
    yew::Renderer::<App>::new().render();
    Ok(())
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    wasm_bindgen_futures::spawn_local(async {
        if let Err(e) = run_app().await {
            log::error!("Failed to run app: {:?}", e);
        }
    });
    Ok(())
}
