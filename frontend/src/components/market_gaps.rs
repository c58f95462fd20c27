use shared::models::dashboard::gap_cards;
use shared::MarketGap;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct MarketGapsProps {
    pub gaps: Vec<MarketGap>,
}

/// Cards for large countries without a single pro player
#[function_component(MarketGaps)]
pub fn market_gaps(props: &MarketGapsProps) -> Html {
    html! {
        <div id="marketGapsContainer" class="gaps-grid">
            {for gap_cards(&props.gaps).into_iter().map(|gap| html! {
                <div class="gap-card" key={gap.country.clone()}>
                    <div class="d-flex justify-content-between align-items-start mb-2">
                        <h5 class="mb-0 text-white">{gap.country.clone()}</h5>
                        <span class="badge bg-success text-dark">{"HIGH POTENTIAL"}</span>
                    </div>
                    <div class="row mt-3">
                        <div class="col-6">
                            <div class="gap-stat-label">{"Market Size (Pop)"}</div>
                            <div class="gap-stat-value text-light">{gap.population.clone()}</div>
                        </div>
                        <div class="col-6 text-end">
                            <div class="gap-stat-label">{"Current Talent"}</div>
                            <div class="gap-stat-value text-danger">{"0 Active Players"}</div>
                        </div>
                    </div>
                    <div class="mt-2 pt-2 border-top border-secondary">
                        <small class="text-muted">{format!("Region: {}", gap.region)}</small>
                    </div>
                </div>
            })}
        </div>
    }
}
