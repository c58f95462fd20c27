use log::{error, info};
use shared::models::charts::{bar_config, scatter_config, scatter_points, top_subregions, ScatterMetric};
use shared::{
    DensityRanking, InternetCorrelation, MapPoint, MarketGap, Result, RoleBreakdown,
    SubregionDominance, WealthCorrelation,
};
use wasm_bindgen_futures::spawn_local;
use yew::prelude::*;

use crate::api::analytics;
use crate::auth::AuthContext;
use crate::chartjs::TooltipLabel;
use crate::components::chart_canvas::ChartCanvas;
use crate::components::country_search::CountrySearch;
use crate::components::density_table::DensityTable;
use crate::components::distribution_map::DistributionMap;
use crate::components::market_gaps::MarketGaps;
use crate::components::role_breakdown::RoleBreakdownChart;
use crate::config::Config;

#[derive(Clone)]
struct DashboardHandles {
    map: UseStateHandle<Option<Vec<MapPoint>>>,
    density: UseStateHandle<Option<Vec<DensityRanking>>>,
    wealth: UseStateHandle<Option<Vec<WealthCorrelation>>>,
    internet: UseStateHandle<Option<Vec<InternetCorrelation>>>,
    roles: UseStateHandle<Option<RoleBreakdown>>,
    dominance: UseStateHandle<Option<Vec<SubregionDominance>>>,
    gaps: UseStateHandle<Option<Vec<MarketGap>>>,
}

/// Fetches every widget's data one request at a time, publishing each
/// result before the next request goes out. Stops at the first failure.
async fn load_dashboard(h: DashboardHandles) -> Result<()> {
    info!("Loading dashboard data");

    h.map.set(Some(analytics::get_map_distribution().await?));
    h.density.set(Some(analytics::get_density_rankings(Config::density_limit()).await?));
    h.wealth.set(Some(analytics::get_wealth_correlation().await?));
    h.internet.set(Some(analytics::get_internet_correlation().await?));
    h.roles.set(Some(analytics::get_region_roles().await?));
    h.dominance.set(Some(analytics::get_region_dominance().await?));
    h.gaps.set(Some(analytics::get_market_gaps().await?));

    info!("Dashboard data loaded");
    Ok(())
}

#[derive(Properties, PartialEq)]
struct PanelProps {
    title: AttrValue,
    #[prop_or_default]
    class: Classes,
    #[prop_or_default]
    children: Children,
}

#[function_component(Panel)]
fn panel(props: &PanelProps) -> Html {
    html! {
        <div class={classes!("col-12", props.class.clone())}>
            <div class="card bg-dark text-light border-secondary h-100">
                <div class="card-header border-secondary fw-semibold">{props.title.clone()}</div>
                <div class="card-body">{props.children.clone()}</div>
            </div>
        </div>
    }
}

fn loading() -> Html {
    html! {
        <div class="text-center text-muted py-4">
            <div class="spinner-border spinner-border-sm me-2" role="status"></div>
            {"Loading..."}
        </div>
    }
}

#[function_component(Dashboard)]
pub fn dashboard() -> Html {
    let auth = use_context::<AuthContext>().expect("Auth context not found");

    let handles = DashboardHandles {
        map: use_state(|| None),
        density: use_state(|| None),
        wealth: use_state(|| None),
        internet: use_state(|| None),
        roles: use_state(|| None),
        dominance: use_state(|| None),
        gaps: use_state(|| None),
    };
    let load_error = use_state(|| None::<String>);

    {
        let handles = handles.clone();
        let load_error = load_error.clone();
        let expire = auth.expire.clone();
        use_effect_with((), move |_| {
            spawn_local(async move {
                if let Err(e) = load_dashboard(handles).await {
                    error!("Error loading dashboard: {}", e);
                    if e.is_unauthorized() {
                        expire.emit(());
                    } else {
                        load_error.set(Some(e.user_message()));
                    }
                }
            });
            || ()
        });
    }

    let wealth_chart = (*handles.wealth).as_ref().map(|rows| {
        let metric = ScatterMetric::Wealth;
        html! {
            <ChartCanvas
                canvas_id={metric.canvas_id()}
                config={scatter_config(metric, &scatter_points(rows))}
                tooltip={TooltipLabel::ScatterDensity}
            />
        }
    });
    let internet_chart = (*handles.internet).as_ref().map(|rows| {
        let metric = ScatterMetric::Internet;
        html! {
            <ChartCanvas
                canvas_id={metric.canvas_id()}
                config={scatter_config(metric, &scatter_points(rows))}
                tooltip={TooltipLabel::ScatterDensity}
            />
        }
    });
    let dominance_chart = (*handles.dominance).as_ref().map(|rows| {
        let (labels, values) = top_subregions(rows, Config::dominance_top_n());
        html! {
            <ChartCanvas canvas_id="dominanceChart" config={bar_config(&labels, &values)} class="chart-box chart-box-tall" />
        }
    });

    html! {
        <div class="container-fluid py-4 dashboard">
            if let Some(msg) = &*load_error {
                <div class="alert alert-danger" role="alert">
                    {format!("Failed to load dashboard: {}", msg)}
                </div>
            }
            <div class="row g-4">
                <Panel title="Global Pro Player Distribution">
                    if let Some(points) = &*handles.map {
                        <DistributionMap points={points.clone()} />
                    } else {
                        {loading()}
                    }
                </Panel>

                <Panel title="Pro-Gamer Density Ranking" class="col-lg-6">
                    if let Some(rankings) = &*handles.density {
                        <DensityTable rankings={rankings.clone()} />
                    } else {
                        {loading()}
                    }
                </Panel>

                <Panel title="Country Youth Lookup" class="col-lg-6">
                    <CountrySearch />
                </Panel>

                <Panel title="Wealth vs. Player Density" class="col-lg-6">
                    {wealth_chart.unwrap_or_else(loading)}
                </Panel>

                <Panel title="Internet Access vs. Player Density" class="col-lg-6">
                    {internet_chart.unwrap_or_else(loading)}
                </Panel>

                <Panel title="Role Distribution by Region" class="col-lg-6">
                    if let Some(breakdown) = &*handles.roles {
                        <RoleBreakdownChart breakdown={breakdown.clone()} />
                    } else {
                        {loading()}
                    }
                </Panel>

                <Panel title="Subregion Dominance" class="col-lg-6">
                    {dominance_chart.unwrap_or_else(loading)}
                </Panel>

                <Panel title="Untapped Markets">
                    if let Some(gaps) = &*handles.gaps {
                        if gaps.is_empty() {
                            <p class="text-muted mb-0">{"No market gaps found."}</p>
                        } else {
                            <MarketGaps gaps={gaps.clone()} />
                        }
                    } else {
                        {loading()}
                    }
                </Panel>
            </div>
        </div>
    }
}
