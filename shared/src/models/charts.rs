//! Chart.js configuration builders.
//!
//! Every builder returns the plain configuration object handed to
//! `new Chart(canvas, config)`. Callbacks (tooltip labels) cannot live in
//! JSON and are attached by the frontend after conversion.

use serde::Serialize;
use serde_json::{json, Value};

use crate::dto::analytics::{InternetCorrelation, RegionRoles, SubregionDominance, WealthCorrelation};
use crate::models::format::fixed;

pub const ROLE_PALETTE: [&str; 5] = ["#ff6384", "#36a2eb", "#ffce56", "#4bc0c0", "#9966ff"];
pub const DOMINANCE_COLOR: &str = "#eebb00";
pub const GRID_COLOR: &str = "#30363d";
pub const TICK_COLOR: &str = "#8b949e";
pub const LABEL_COLOR: &str = "#f0f6fc";

/// Which correlation a scatter chart plots against player density
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScatterMetric {
    Wealth,
    Internet,
}

impl ScatterMetric {
    pub fn endpoint(&self) -> &'static str {
        match self {
            ScatterMetric::Wealth => "/analytics/correlation/wealth",
            ScatterMetric::Internet => "/analytics/correlation/internet",
        }
    }

    pub fn canvas_id(&self) -> &'static str {
        match self {
            ScatterMetric::Wealth => "wealthChart",
            ScatterMetric::Internet => "internetChart",
        }
    }

    pub fn x_label(&self) -> &'static str {
        match self {
            ScatterMetric::Wealth => "GDP ($)",
            ScatterMetric::Internet => "Internet Access (%)",
        }
    }

    pub fn color(&self) -> &'static str {
        match self {
            ScatterMetric::Wealth => "#ff6384",
            ScatterMetric::Internet => "#36a2eb",
        }
    }
}

/// A correlation row that can be plotted as `x` vs. players per million.
pub trait ScatterSource {
    fn x(&self) -> f64;
    fn players_per_million(&self) -> f64;
    fn country(&self) -> &str;
}

impl ScatterSource for WealthCorrelation {
    fn x(&self) -> f64 {
        self.gdp_per_capita
    }
    fn players_per_million(&self) -> f64 {
        self.players_per_million
    }
    fn country(&self) -> &str {
        &self.country
    }
}

impl ScatterSource for InternetCorrelation {
    fn x(&self) -> f64 {
        self.internet_access_percent
    }
    fn players_per_million(&self) -> f64 {
        self.players_per_million
    }
    fn country(&self) -> &str {
        &self.country
    }
}

#[derive(Debug, Clone, Serialize, PartialEq)]
pub struct ScatterPoint {
    pub x: f64,
    pub y: f64,
    pub country: String,
}

pub fn scatter_points<T: ScatterSource>(rows: &[T]) -> Vec<ScatterPoint> {
    rows.iter()
        .map(|row| ScatterPoint {
            x: row.x(),
            y: row.players_per_million(),
            country: row.country().to_string(),
        })
        .collect()
}

/// Tooltip line for a scatter point: `"Peru: 1.27 density"`.
pub fn scatter_tooltip_label(country: &str, y: f64) -> String {
    format!("{}: {} density", country, fixed(y, 2))
}

fn axis(title: Option<&str>) -> Value {
    let mut axis = json!({
        "grid": { "color": GRID_COLOR },
        "ticks": { "color": TICK_COLOR }
    });
    if let Some(text) = title {
        axis["title"] = json!({ "display": true, "text": text, "color": TICK_COLOR });
    }
    axis
}

pub fn scatter_config(metric: ScatterMetric, points: &[ScatterPoint]) -> Value {
    json!({
        "type": "scatter",
        "data": {
            "datasets": [{
                "label": "Countries",
                "data": points,
                "backgroundColor": metric.color(),
                "pointRadius": 4,
                "pointHoverRadius": 6
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "tooltip": {
                    "backgroundColor": "#161b22",
                    "titleColor": "#fff",
                    "bodyColor": "#ccc",
                    "callbacks": {}
                },
                "legend": { "display": false }
            },
            "scales": {
                "x": axis(Some(metric.x_label())),
                "y": axis(Some("Players / Million"))
            }
        }
    })
}

pub fn doughnut_config(region: &RegionRoles) -> Value {
    let labels: Vec<&String> = region.roles.keys().collect();
    let values: Vec<u64> = region.roles.values().copied().collect();
    json!({
        "type": "doughnut",
        "data": {
            "labels": labels,
            "datasets": [{
                "data": values,
                "backgroundColor": ROLE_PALETTE,
                "borderWidth": 0,
                "hoverOffset": 4
            }]
        },
        "options": {
            "responsive": true,
            "maintainAspectRatio": false,
            "plugins": {
                "legend": {
                    "position": "right",
                    "labels": { "color": LABEL_COLOR, "font": { "size": 11 } }
                },
                "title": { "display": false }
            },
            "cutout": "60%"
        }
    })
}

/// Label for a dominance row; subregion-less countries are grouped as "Unknown".
pub fn subregion_label(row: &SubregionDominance) -> String {
    row.id.clone().unwrap_or_else(|| "Unknown".to_string())
}

/// Labels and totals of the first `limit` rows, in API order.
pub fn top_subregions(rows: &[SubregionDominance], limit: usize) -> (Vec<String>, Vec<u64>) {
    rows.iter()
        .take(limit)
        .map(|row| (subregion_label(row), row.total_players))
        .unzip()
}

pub fn bar_config(labels: &[String], values: &[u64]) -> Value {
    json!({
        "type": "bar",
        "data": {
            "labels": labels,
            "datasets": [{
                "label": "Total Pro Players",
                "data": values,
                "backgroundColor": DOMINANCE_COLOR,
                "borderRadius": 3
            }]
        },
        "options": {
            "indexAxis": "y",
            "maintainAspectRatio": false,
            "plugins": { "legend": { "display": false } },
            "scales": {
                "x": axis(None),
                "y": { "grid": { "display": false }, "ticks": { "color": LABEL_COLOR } }
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use crate::dto::analytics::RoleBreakdown;
    use indexmap::IndexMap;

    fn wealth(country: &str, gdp: f64, ppm: f64) -> WealthCorrelation {
        WealthCorrelation {
            country: country.into(),
            code: String::new(),
            gdp_per_capita: gdp,
            total_players: 0,
            players_per_million: ppm,
        }
    }

    #[test]
    fn maps_wealth_rows_to_points() {
        let points = scatter_points(&[wealth("Peru", 7126.0, 1.27), wealth("Sweden", 56000.0, 4.5)]);
        assert_eq!(
            points,
            vec![
                ScatterPoint { x: 7126.0, y: 1.27, country: "Peru".into() },
                ScatterPoint { x: 56000.0, y: 4.5, country: "Sweden".into() },
            ]
        );
    }

    #[test]
    fn maps_internet_rows_to_points() {
        let rows = vec![InternetCorrelation {
            country: "Bolivia".into(),
            code: "BO".into(),
            internet_access_percent: 66.0,
            players_per_million: 2.1,
        }];
        let points = scatter_points(&rows);
        assert_eq!(points[0].x, 66.0);
        assert_eq!(points[0].y, 2.1);
    }

    #[test]
    fn scatter_config_uses_metric_style() {
        let points = scatter_points(&[wealth("Peru", 7126.0, 1.27)]);
        let config = scatter_config(ScatterMetric::Internet, &points);
        assert_eq!(config["type"], "scatter");
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], "#36a2eb");
        assert_eq!(config["data"]["datasets"][0]["data"][0]["country"], "Peru");
        assert_eq!(config["options"]["scales"]["x"]["title"]["text"], "Internet Access (%)");
        assert_eq!(config["options"]["scales"]["y"]["title"]["text"], "Players / Million");
    }

    #[test]
    fn tooltip_label_has_two_decimals() {
        assert_eq!(scatter_tooltip_label("Peru", 1.2666), "Peru: 1.27 density");
        assert_eq!(scatter_tooltip_label("Chile", 1.125), "Chile: 1.13 density");
    }

    #[test]
    fn doughnut_follows_role_order() {
        let mut roles = IndexMap::new();
        roles.insert("Position 2 (Mid)".to_string(), 6);
        roles.insert("Position 1 (Carry)".to_string(), 4);
        let region = RegionRoles { roles, total_players: 10, percentages: IndexMap::new() };

        let config = doughnut_config(&region);
        assert_eq!(config["type"], "doughnut");
        assert_eq!(config["data"]["labels"], json!(["Position 2 (Mid)", "Position 1 (Carry)"]));
        assert_eq!(config["data"]["datasets"][0]["data"], json!([6, 4]));
        assert_eq!(config["options"]["cutout"], "60%");
    }

    #[test]
    fn doughnut_keeps_payload_role_order() {
        let body = r#"{
            "Europe": {
                "roles": {"Unknown/Unspecified": 7, "Position 1 (Carry)": 4, "Position 2 (Mid)": 3},
                "total_players": 14,
                "percentages": {"Unknown/Unspecified": 50.0, "Position 1 (Carry)": 28.57, "Position 2 (Mid)": 21.43}
            }
        }"#;
        let breakdown: RoleBreakdown = serde_json::from_str(body).unwrap();
        let config = doughnut_config(&breakdown["Europe"]);
        assert_eq!(
            config["data"]["labels"],
            json!(["Unknown/Unspecified", "Position 1 (Carry)", "Position 2 (Mid)"])
        );
        assert_eq!(config["data"]["datasets"][0]["data"], json!([7, 4, 3]));
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"][0], ROLE_PALETTE[0]);
    }

    #[test]
    fn keeps_only_top_subregions() {
        let rows: Vec<SubregionDominance> = (0..12)
            .map(|i| SubregionDominance { id: Some(format!("Sub {}", i)), total_players: 100 - i })
            .chain(std::iter::once(SubregionDominance { id: None, total_players: 1 }))
            .collect();
        let (labels, values) = top_subregions(&rows, 10);
        assert_eq!(labels.len(), 10);
        assert_eq!(labels[0], "Sub 0");
        assert_eq!(values[9], 91);
    }

    #[test]
    fn null_subregion_is_labelled_unknown() {
        let (labels, _) = top_subregions(&[SubregionDominance { id: None, total_players: 3 }], 10);
        assert_eq!(labels, vec!["Unknown".to_string()]);
    }

    #[test]
    fn bar_config_is_horizontal() {
        let config = bar_config(&["Eastern Europe".to_string()], &[120]);
        assert_eq!(config["options"]["indexAxis"], "y");
        assert_eq!(config["data"]["datasets"][0]["backgroundColor"], DOMINANCE_COLOR);
        assert_eq!(config["data"]["datasets"][0]["data"], json!([120]));
    }
}
