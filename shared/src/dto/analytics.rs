use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A single pro player located at their country's coordinates
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MapPoint {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub country: String,
    /// `[lat, lng]`; anything else is skipped when drawing markers
    #[serde(default)]
    pub coordinates: Vec<f64>,
}

/// Row of the pro-gamer density ranking
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DensityRanking {
    pub country: String,
    #[serde(default)]
    pub code: String,
    pub players: u64,
    pub population: f64,
    pub density_per_million: f64,
}

/// Wealth correlation row (GDP per capita vs. player density)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct WealthCorrelation {
    pub country: String,
    #[serde(default)]
    pub code: String,
    pub gdp_per_capita: f64,
    #[serde(default)]
    pub total_players: u64,
    pub players_per_million: f64,
}

/// Infrastructure correlation row (internet access vs. player density)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct InternetCorrelation {
    pub country: String,
    #[serde(default)]
    pub code: String,
    pub internet_access_percent: f64,
    pub players_per_million: f64,
}

/// Role distribution of one region, roles in the order the API sent them
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct RegionRoles {
    pub roles: IndexMap<String, u64>,
    #[serde(default)]
    pub total_players: u64,
    #[serde(default)]
    pub percentages: IndexMap<String, f64>,
}

/// Region name to role distribution, in payload order
pub type RoleBreakdown = IndexMap<String, RegionRoles>;

/// Player totals per subregion, sorted descending by the API
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SubregionDominance {
    /// Subregion name; null for countries without one
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    pub total_players: u64,
}

/// Large country with no pro players
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct MarketGap {
    pub country: String,
    #[serde(default)]
    pub code: String,
    pub population: f64,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub message: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct Demographics {
    #[serde(default)]
    pub total_population: f64,
    #[serde(default)]
    pub young_population_15_24: u64,
    #[serde(default)]
    pub young_population_15_19: u64,
    #[serde(default)]
    pub young_population_20_24: u64,
    #[serde(default)]
    pub young_population_percent: Option<f64>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct ProPlayers {
    #[serde(default)]
    pub total_count: u64,
    #[serde(default)]
    pub players_per_million_population: f64,
    #[serde(default)]
    pub players_per_100k_youth: f64,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct CorrelationInsight {
    #[serde(default)]
    pub youth_ratio: String,
    #[serde(default)]
    pub player_youth_ratio: String,
    #[serde(default)]
    pub interpretation: String,
}

/// Youth population vs. pro players for a single country
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct YouthCorrelation {
    pub country: String,
    pub country_code: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub demographics: Demographics,
    #[serde(default)]
    pub pro_players: ProPlayers,
    #[serde(default)]
    pub correlation_insight: CorrelationInsight,
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_role_breakdown() {
        let body = r#"{
            "Asia": {
                "roles": {"Position 1 (Carry)": 4, "Position 2 (Mid)": 6},
                "total_players": 10,
                "percentages": {"Position 1 (Carry)": 40.0, "Position 2 (Mid)": 60.0}
            },
            "Europe": {
                "roles": {"Unknown/Unspecified": 3},
                "total_players": 3,
                "percentages": {"Unknown/Unspecified": 100.0}
            }
        }"#;
        let breakdown: RoleBreakdown = serde_json::from_str(body).unwrap();
        assert_eq!(breakdown.keys().collect::<Vec<_>>(), vec!["Asia", "Europe"]);
        assert_eq!(breakdown["Asia"].roles["Position 2 (Mid)"], 6);
        assert_eq!(breakdown["Europe"].total_players, 3);
    }

    #[test]
    fn dominance_tolerates_null_subregion() {
        let rows: Vec<SubregionDominance> =
            serde_json::from_str(r#"[{"_id": "Eastern Europe", "total_players": 120}, {"_id": null, "total_players": 2}]"#)
                .unwrap();
        assert_eq!(rows[0].id.as_deref(), Some("Eastern Europe"));
        assert_eq!(rows[1].id, None);
    }

    #[test]
    fn parses_youth_correlation() {
        let body = r#"{
            "country": "Peru",
            "country_code": "PE",
            "region": "Americas",
            "demographics": {
                "total_population": 32971846,
                "young_population_15_24": 5100000,
                "young_population_15_19": 2500000,
                "young_population_20_24": 2600000,
                "young_population_percent": 15.47
            },
            "pro_players": {
                "total_count": 42,
                "players_per_million_population": 1.27,
                "players_per_100k_youth": 0.82
            },
            "correlation_insight": {
                "youth_ratio": "15.47% of population is aged 15-24",
                "player_youth_ratio": "42 pro players for 5,100,000 young adults (15-24 years)",
                "interpretation": "Low pro player density among youth population"
            }
        }"#;
        let data: YouthCorrelation = serde_json::from_str(body).unwrap();
        assert_eq!(data.country_code, "PE");
        assert_eq!(data.pro_players.total_count, 42);
        assert_eq!(data.demographics.young_population_percent, Some(15.47));
    }

    #[test]
    fn map_point_without_coordinates() {
        let point: MapPoint = serde_json::from_str(r#"{"name": "N0tail", "country": "Denmark"}"#).unwrap();
        assert!(point.coordinates.is_empty());
    }
}
