use crate::api::status::get_api_status;
use shared::ApiStatus;
use yew::prelude::*;

#[function_component(Footer)]
pub fn footer() -> Html {
    let status = use_state(|| None::<ApiStatus>);
    let offline = use_state(|| false);

    {
        let status = status.clone();
        let offline = offline.clone();
        use_effect_with((), move |_| {
            wasm_bindgen_futures::spawn_local(async move {
                match get_api_status().await {
                    Ok(info) => {
                        offline.set(!info.is_online());
                        status.set(Some(info));
                    }
                    Err(e) => {
                        log::warn!("API status probe failed: {}", e);
                        offline.set(true);
                    }
                }
            });
        });
    }

    let (badge, label) = match (&*status, *offline) {
        (_, true) => ("bg-danger", "API offline".to_string()),
        (Some(info), false) => ("bg-success", format!("{} ({})", info.system, info.status)),
        (None, false) => ("bg-secondary", "Checking API...".to_string()),
    };

    html! {
        <footer class="footer border-top border-secondary py-3 mt-auto">
            <div class="container d-flex justify-content-between small text-muted">
                <span>{"Pro-Scene Analytics · country statistics for professional players"}</span>
                <span class={classes!("badge", badge)}>{label}</span>
            </div>
        </footer>
    }
}
