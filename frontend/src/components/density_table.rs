use shared::models::dashboard::density_rows;
use shared::DensityRanking;
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct DensityTableProps {
    pub rankings: Vec<DensityRanking>,
}

#[function_component(DensityTable)]
pub fn density_table(props: &DensityTableProps) -> Html {
    html! {
        <table class="table table-dark table-hover mb-0">
            <thead>
                <tr>
                    <th>{"#"}</th>
                    <th>{"Country"}</th>
                    <th>{"Players"}</th>
                    <th>{"Population"}</th>
                    <th>{"Per Million"}</th>
                </tr>
            </thead>
            <tbody id="densityTableBody">
                {for density_rows(&props.rankings).into_iter().map(|row| html! {
                    <tr key={row.rank}>
                        <td class="text-muted">{row.rank.to_string()}</td>
                        <td><span class="table-country-badge">{row.country}</span></td>
                        <td class="text-info">{row.players.to_string()}</td>
                        <td>{row.population}</td>
                        <td class="text-warning">{row.density}</td>
                    </tr>
                })}
            </tbody>
        </table>
    }
}
