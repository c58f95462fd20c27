use yew::prelude::*;
use yew::events::SubmitEvent;
use yew_router::prelude::*;
use web_sys::HtmlInputElement;
use wasm_bindgen_futures::spawn_local;
use log::debug;
use shared::RegisterRequest;

use crate::api::auth::{register, register_error_message};
use crate::auth::AuthContext;
use crate::components::toast::{Toast, ToastContext, ToastType};
use crate::Route;

pub const REGISTERED: &str = "Registered! Please login.";

#[derive(Clone, Copy, PartialEq)]
enum Tab {
    Login,
    Register,
}

fn bind(state: &UseStateHandle<String>) -> Callback<InputEvent> {
    let state = state.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        state.set(input.value());
    })
}

#[function_component(Login)]
pub fn login() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let toasts = use_context::<ToastContext>().expect("Toast context not found");
    let navigator = use_navigator().unwrap();

    let tab = use_state(|| Tab::Login);
    let alert = use_state(|| None::<String>);

    let login_user = use_state(String::new);
    let login_pass = use_state(String::new);

    let reg_user = use_state(String::new);
    let reg_email = use_state(String::new);
    let reg_name = use_state(String::new);
    let reg_pass = use_state(String::new);
    let registering = use_state(|| false);

    // Go straight to the dashboard once a session exists
    {
        let navigator = navigator.clone();
        use_effect_with(auth.state.is_authenticated(), move |authenticated| {
            if *authenticated {
                debug!("Authenticated, redirecting to dashboard");
                navigator.push(&Route::Dashboard);
            }
            || ()
        });
    }

    // Surface login failures and session expiry in the alert panel
    {
        let alert = alert.clone();
        use_effect_with(auth.state.error.clone(), move |error| {
            if let Some(err) = error {
                alert.set(Some(err.clone()));
            }
            || ()
        });
    }

    let select_tab = {
        let tab = tab.clone();
        let alert = alert.clone();
        let clear_error = auth.clear_error.clone();
        Callback::from(move |next: Tab| {
            alert.set(None);
            clear_error.emit(());
            tab.set(next);
        })
    };

    let on_login = {
        let login_user = login_user.clone();
        let login_pass = login_pass.clone();
        let alert = alert.clone();
        let login = auth.login.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            alert.set(None);
            login.emit(((*login_user).clone(), (*login_pass).clone()));
        })
    };

    let on_register = {
        let reg_user = reg_user.clone();
        let reg_email = reg_email.clone();
        let reg_name = reg_name.clone();
        let reg_pass = reg_pass.clone();
        let registering = registering.clone();
        let alert = alert.clone();
        let select_tab = select_tab.clone();
        let add_toast = toasts.add_toast.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let request = RegisterRequest {
                username: reg_user.trim().to_string(),
                email: reg_email.trim().to_string(),
                full_name: reg_name.trim().to_string(),
                password: (*reg_pass).clone(),
            };
            let registering = registering.clone();
            let alert = alert.clone();
            let select_tab = select_tab.clone();
            let add_toast = add_toast.clone();
            registering.set(true);
            spawn_local(async move {
                match register(request).await {
                    Ok(_) => {
                        add_toast.emit(Toast::new(REGISTERED, ToastType::Success));
                        select_tab.emit(Tab::Login);
                    }
                    Err(e) => {
                        debug!("Registration failed: {}", e);
                        alert.set(Some(register_error_message(&e)));
                    }
                }
                registering.set(false);
            });
        })
    };

    let tab_button = |target: Tab, id: &'static str, label: &'static str| {
        let select_tab = select_tab.clone();
        html! {
            <li class="nav-item">
                <button
                    id={id}
                    type="button"
                    class={classes!("nav-link", (*tab == target).then_some("active"))}
                    onclick={Callback::from(move |_: MouseEvent| select_tab.emit(target))}
                >
                    {label}
                </button>
            </li>
        }
    };

    html! {
        <div class="auth-page d-flex align-items-center justify-content-center py-5">
            <div class="card bg-dark text-light border-secondary auth-card">
                <div class="card-body p-4">
                    <h2 class="h4 text-center mb-4">{"Pro-Scene Analytics"}</h2>
                    <ul class="nav nav-tabs mb-4">
                        {tab_button(Tab::Login, "tab-login", "Login")}
                        {tab_button(Tab::Register, "tab-register", "Register")}
                    </ul>

                    if let Some(msg) = &*alert {
                        <div id="alertMsg" class="alert alert-danger py-2">{msg.clone()}</div>
                    }

                    if *tab == Tab::Login {
                        <form onsubmit={on_login}>
                            <div class="mb-3">
                                <label for="loginUser" class="form-label">{"Username"}</label>
                                <input id="loginUser" class="form-control" required=true
                                    value={(*login_user).clone()} oninput={bind(&login_user)} />
                            </div>
                            <div class="mb-3">
                                <label for="loginPass" class="form-label">{"Password"}</label>
                                <input id="loginPass" type="password" class="form-control" required=true
                                    value={(*login_pass).clone()} oninput={bind(&login_pass)} />
                            </div>
                            <button type="submit" class="btn btn-primary w-100" disabled={auth.state.loading}>
                                { if auth.state.loading { "Signing in..." } else { "Sign in" } }
                            </button>
                        </form>
                    } else {
                        <form onsubmit={on_register}>
                            <div class="mb-3">
                                <label for="regUser" class="form-label">{"Username"}</label>
                                <input id="regUser" class="form-control" required=true
                                    value={(*reg_user).clone()} oninput={bind(&reg_user)} />
                            </div>
                            <div class="mb-3">
                                <label for="regEmail" class="form-label">{"Email"}</label>
                                <input id="regEmail" type="email" class="form-control" required=true
                                    value={(*reg_email).clone()} oninput={bind(&reg_email)} />
                            </div>
                            <div class="mb-3">
                                <label for="regName" class="form-label">{"Full name"}</label>
                                <input id="regName" class="form-control" required=true
                                    value={(*reg_name).clone()} oninput={bind(&reg_name)} />
                            </div>
                            <div class="mb-3">
                                <label for="regPass" class="form-label">{"Password"}</label>
                                <input id="regPass" type="password" class="form-control" required=true
                                    value={(*reg_pass).clone()} oninput={bind(&reg_pass)} />
                            </div>
                            <button type="submit" class="btn btn-success w-100" disabled={*registering}>
                                { if *registering { "Creating account..." } else { "Create account" } }
                            </button>
                        </form>
                    }
                </div>
            </div>
        </div>
    }
}
