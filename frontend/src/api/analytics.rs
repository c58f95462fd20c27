use log::debug;
use shared::models::charts::ScatterMetric;
use shared::{
    DensityRanking, InternetCorrelation, MapPoint, MarketGap, Result, RoleBreakdown,
    SharedError, SubregionDominance, WealthCorrelation, YouthCorrelation,
};

use crate::api::utils::fetch_auth;

pub fn density_rankings_path(limit: usize) -> String {
    format!("/analytics/density/rankings?limit={}", limit)
}

pub fn youth_correlation_path(country: &str) -> String {
    format!(
        "/analytics/country/{}/youth-correlation",
        urlencoding::encode(country.trim())
    )
}

pub async fn get_map_distribution() -> Result<Vec<MapPoint>> {
    fetch_auth("/analytics/map/distribution").await
}

pub async fn get_density_rankings(limit: usize) -> Result<Vec<DensityRanking>> {
    fetch_auth(&density_rankings_path(limit)).await
}

pub async fn get_wealth_correlation() -> Result<Vec<WealthCorrelation>> {
    fetch_auth(ScatterMetric::Wealth.endpoint()).await
}

pub async fn get_internet_correlation() -> Result<Vec<InternetCorrelation>> {
    fetch_auth(ScatterMetric::Internet.endpoint()).await
}

pub async fn get_region_roles() -> Result<RoleBreakdown> {
    fetch_auth("/analytics/regions/roles").await
}

pub async fn get_region_dominance() -> Result<Vec<SubregionDominance>> {
    fetch_auth("/analytics/regions/dominance").await
}

pub async fn get_market_gaps() -> Result<Vec<MarketGap>> {
    fetch_auth("/analytics/insights/market-gaps").await
}

pub async fn get_youth_correlation(country: &str) -> Result<YouthCorrelation> {
    if country.trim().is_empty() {
        return Err(SharedError::MissingField("Country".to_string()));
    }
    debug!("Looking up youth correlation for {}", country);
    fetch_auth(&youth_correlation_path(country)).await
}
