use dashboard::api::auth::{
    login_error_message, register_error_message, BACKEND_OFFLINE, CONNECTION_ERROR, LOGIN_FAILED,
    REGISTRATION_FAILED,
};
use dashboard::config::Config;
use shared::models::charts::{doughnut_config, scatter_config, scatter_points, ScatterMetric};
use shared::models::dashboard::{density_rows, initial_region};
use shared::{DensityRanking, RoleBreakdown, SharedError, WealthCorrelation};

#[test]
fn login_shows_server_detail() {
    let err = SharedError::from_status(401, Some("Invalid credentials".into()));
    assert_eq!(login_error_message(&err), "Invalid credentials");
}

#[test]
fn login_without_detail_falls_back() {
    let err = SharedError::from_status(500, None);
    assert_eq!(login_error_message(&err), LOGIN_FAILED);
}

#[test]
fn login_network_failure_reports_offline_backend() {
    let err = SharedError::Network("TypeError: Failed to fetch".into());
    assert_eq!(login_error_message(&err), BACKEND_OFFLINE);
}

#[test]
fn register_conflict_shows_detail() {
    let err = SharedError::from_status(409, Some("User with this email or username already exists".into()));
    assert_eq!(register_error_message(&err), "User with this email or username already exists");
}

#[test]
fn register_validation_is_shown_verbatim() {
    let err = SharedError::Validation("Password must be at least 8 characters".into());
    assert_eq!(register_error_message(&err), "Password must be at least 8 characters");
}

#[test]
fn register_failures_without_detail() {
    assert_eq!(register_error_message(&SharedError::Network("down".into())), CONNECTION_ERROR);
    assert_eq!(register_error_message(&SharedError::Conversion("bad json".into())), REGISTRATION_FAILED);
}

#[test]
fn table_renders_one_row_per_ranking() {
    let body = r#"[
        {"country": "Faroe Islands", "code": "FO", "players": 3, "population": 52000, "density_per_million": 57.69},
        {"country": "Estonia", "code": "EE", "players": 12, "population": 1331000, "density_per_million": 9.01},
        {"country": "Sweden", "code": "SE", "players": 61, "population": 10350000, "density_per_million": 5.89}
    ]"#;
    let rankings: Vec<DensityRanking> = serde_json::from_str(body).unwrap();
    let rows = density_rows(&rankings);
    assert_eq!(rows.len(), 3);
    assert_eq!(rows.iter().map(|r| r.rank).collect::<Vec<_>>(), vec![1, 2, 3]);
    assert_eq!(rows[2].population, "10.35 M");
}

#[test]
fn default_region_comes_from_config() {
    let body = r#"{
        "Americas": {"roles": {"Position 1 (Carry)": 2}, "total_players": 2, "percentages": {}},
        "Europe": {"roles": {"Position 3 (Offlane)": 5}, "total_players": 5, "percentages": {}}
    }"#;
    let breakdown: RoleBreakdown = serde_json::from_str(body).unwrap();
    let region = initial_region(&breakdown, Config::default_region()).unwrap();
    assert_eq!(region, "Europe");

    let config = doughnut_config(&breakdown[&region]);
    assert_eq!(config["data"]["labels"][0], "Position 3 (Offlane)");
}

#[test]
fn wealth_payload_feeds_scatter_chart() {
    let body = r#"[
        {"country": "Peru", "code": "PE", "gdp_per_capita": 7126.0, "total_players": 42, "players_per_million": 1.27}
    ]"#;
    let rows: Vec<WealthCorrelation> = serde_json::from_str(body).unwrap();
    let config = scatter_config(ScatterMetric::Wealth, &scatter_points(&rows));
    let point = &config["data"]["datasets"][0]["data"][0];
    assert_eq!(point["x"], 7126.0);
    assert_eq!(point["y"], 1.27);
    assert_eq!(point["country"], "Peru");
    assert!(config["options"]["plugins"]["tooltip"]["callbacks"].is_object());
}
