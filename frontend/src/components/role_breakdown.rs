use log::debug;
use shared::models::charts::doughnut_config;
use shared::models::dashboard::initial_region;
use shared::RoleBreakdown;
use web_sys::HtmlSelectElement;
use yew::prelude::*;

use crate::components::chart_canvas::ChartCanvas;
use crate::config::Config;

#[derive(Properties, PartialEq)]
pub struct RoleBreakdownProps {
    /// Cached payload; switching regions re-renders from it without refetching
    pub breakdown: RoleBreakdown,
}

/// Region selector plus a doughnut of role counts for the selected region
#[function_component(RoleBreakdownChart)]
pub fn role_breakdown_chart(props: &RoleBreakdownProps) -> Html {
    let selected = use_state(|| initial_region(&props.breakdown, Config::default_region()));

    {
        let selected = selected.clone();
        use_effect_with(props.breakdown.clone(), move |breakdown| {
            selected.set(initial_region(breakdown, Config::default_region()));
            || ()
        });
    }

    let onchange = {
        let selected = selected.clone();
        Callback::from(move |e: Event| {
            let select: HtmlSelectElement = e.target_unchecked_into();
            debug!("Role breakdown region changed to {}", select.value());
            selected.set(Some(select.value()));
        })
    };

    let region = (*selected)
        .as_ref()
        .and_then(|name| props.breakdown.get(name));

    html! {
        <div class="role-breakdown">
            <select id="regionRoleSelector" class="form-select form-select-sm mb-3" onchange={onchange}>
                {for props.breakdown.keys().map(|name| html! {
                    <option
                        key={name.clone()}
                        value={name.clone()}
                        selected={(*selected).as_deref() == Some(name.as_str())}
                    >
                        {name.clone()}
                    </option>
                })}
            </select>
            if let Some(region) = region {
                <ChartCanvas canvas_id="roleChart" config={doughnut_config(region)} />
            } else {
                <p class="text-muted">{"No role data available."}</p>
            }
        </div>
    }
}
