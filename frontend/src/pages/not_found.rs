use yew::prelude::*;
use yew_router::prelude::*;

use crate::Route;

#[function_component(NotFound)]
pub fn not_found() -> Html {
    html! {
        <div class="container py-5 text-center not-found-page">
            <h1 class="display-6">{"404 - Page Not Found"}</h1>
            <p class="text-muted">{"The page you're looking for doesn't exist."}</p>
            <Link<Route> to={Route::Dashboard} classes="btn btn-outline-light">{"Back to dashboard"}</Link<Route>>
        </div>
    }
}
