use yew::prelude::*;
use yew_router::prelude::*;

use crate::auth::AuthContext;
use crate::Route;

#[function_component(Nav)]
pub fn nav() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let navigator = use_navigator();

    let on_logout = {
        let logout = auth.logout.clone();
        Callback::from(move |_: MouseEvent| {
            logout.emit(());
            if let Some(navigator) = &navigator {
                navigator.push(&Route::Login);
            }
        })
    };

    html! {
        <nav class="navbar navbar-dark bg-dark border-bottom border-secondary px-3">
            <Link<Route> to={Route::Dashboard} classes="navbar-brand fw-bold">
                {"Pro-Scene Analytics"}
            </Link<Route>>
            if let Some(user) = &auth.state.user {
                <div class="d-flex align-items-center gap-3">
                    <Link<Route> to={Route::Dashboard} classes="nav-link text-light">{"Dashboard"}</Link<Route>>
                    <Link<Route> to={Route::Profile} classes="nav-link text-light">{"Profile"}</Link<Route>>
                    <span class="text-muted small">
                        {"Signed in as "}
                        <span id="usernameDisplay" class="text-info">{user.username.clone()}</span>
                    </span>
                    if user.is_admin() {
                        <span class="badge bg-warning text-dark">{"Admin"}</span>
                    }
                    <button class="btn btn-outline-danger btn-sm" onclick={on_logout}>{"Logout"}</button>
                </div>
            }
        </nav>
    }
}
