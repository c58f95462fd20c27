use log::debug;
use shared::YouthSummary;
use wasm_bindgen_futures::spawn_local;
use web_sys::HtmlInputElement;
use yew::prelude::*;

use crate::api::analytics::get_youth_correlation;
use crate::auth::AuthContext;

/// Country lookup of youth population vs. pro players
#[function_component(CountrySearch)]
pub fn country_search() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");
    let query = use_state(String::new);
    let result = use_state(|| None::<YouthSummary>);
    let failed = use_state(|| false);
    let searching = use_state(|| false);

    let oninput = {
        let query = query.clone();
        Callback::from(move |e: InputEvent| {
            let input: HtmlInputElement = e.target_unchecked_into();
            query.set(input.value());
        })
    };

    let onsubmit = {
        let query = query.clone();
        let result = result.clone();
        let failed = failed.clone();
        let searching = searching.clone();
        let expire = auth.expire.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let country = query.trim().to_string();
            if country.is_empty() {
                return;
            }
            let result = result.clone();
            let failed = failed.clone();
            let searching = searching.clone();
            let expire = expire.clone();
            searching.set(true);
            spawn_local(async move {
                match get_youth_correlation(&country).await {
                    Ok(data) => {
                        result.set(Some(YouthSummary::from(&data)));
                        failed.set(false);
                    }
                    Err(e) => {
                        debug!("Country lookup for {} failed: {}", country, e);
                        if e.is_unauthorized() {
                            expire.emit(());
                        }
                        result.set(None);
                        failed.set(true);
                    }
                }
                searching.set(false);
            });
        })
    };

    html! {
        <div class="country-search">
            <form class="input-group mb-3" onsubmit={onsubmit}>
                <input
                    id="countryInput"
                    type="text"
                    class="form-control"
                    placeholder="Country name, e.g. Peru"
                    value={(*query).clone()}
                    oninput={oninput}
                />
                <button class="btn btn-primary" type="submit" disabled={*searching}>
                    { if *searching { "Searching..." } else { "Search" } }
                </button>
            </form>

            <div id="countryError" class={classes!("alert", "alert-danger", (!*failed).then_some("d-none"))}>
                {"Country not found or no youth data available."}
            </div>

            <div id="countryResult" class={classes!("country-result", result.is_none().then_some("d-none"))}>
                if let Some(summary) = (*result).clone() {
                    <h5 id="resCountryName">{summary.title}</h5>
                    <div class="row">
                        <div class="col-6 col-md-3">
                            <div class="gap-stat-label">{"Population"}</div>
                            <div id="resPop" class="gap-stat-value">{summary.population}</div>
                        </div>
                        <div class="col-6 col-md-3">
                            <div class="gap-stat-label">{"Aged 15-24"}</div>
                            <div id="resYouth" class="gap-stat-value">{summary.youth}</div>
                        </div>
                        <div class="col-6 col-md-3">
                            <div class="gap-stat-label">{"Pro Players"}</div>
                            <div id="resPlayers" class="gap-stat-value">{summary.players}</div>
                        </div>
                        <div class="col-6 col-md-3">
                            <div class="gap-stat-label">{"Youth Density"}</div>
                            <div id="resDensity" class="gap-stat-value">{summary.density}</div>
                        </div>
                    </div>
                    <p id="resInsight" class="mt-3 fst-italic text-muted">{summary.insight}</p>
                }
            </div>
        </div>
    }
}
