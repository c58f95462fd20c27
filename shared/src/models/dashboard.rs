use crate::dto::analytics::{DensityRanking, MarketGap, RoleBreakdown, YouthCorrelation};
use crate::models::format::{fixed, millions, percent};

/// A rendered row of the density ranking table
#[derive(Debug, Clone, PartialEq)]
pub struct DensityRow {
    pub rank: usize,
    pub country: String,
    pub players: u64,
    pub population: String,
    pub density: String,
}

pub fn density_rows(rankings: &[DensityRanking]) -> Vec<DensityRow> {
    rankings
        .iter()
        .enumerate()
        .map(|(index, row)| DensityRow {
            rank: index + 1,
            country: row.country.clone(),
            players: row.players,
            population: millions(row.population, 2),
            density: fixed(row.density_per_million, 2),
        })
        .collect()
}

/// An untapped-market card
#[derive(Debug, Clone, PartialEq)]
pub struct GapCard {
    pub country: String,
    pub population: String,
    pub region: String,
}

pub fn gap_cards(gaps: &[MarketGap]) -> Vec<GapCard> {
    gaps.iter()
        .map(|gap| GapCard {
            country: gap.country.clone(),
            population: millions(gap.population, 1),
            region: gap.region.clone(),
        })
        .collect()
}

/// Region selected when the role breakdown first loads: `preferred` if the
/// payload has it, otherwise the first region. `None` for an empty payload.
pub fn initial_region(breakdown: &RoleBreakdown, preferred: &str) -> Option<String> {
    if breakdown.contains_key(preferred) {
        Some(preferred.to_string())
    } else {
        breakdown.keys().next().cloned()
    }
}

/// Field values shown after a successful country search
#[derive(Debug, Clone, PartialEq)]
pub struct YouthSummary {
    pub title: String,
    pub population: String,
    pub youth: String,
    pub players: String,
    pub density: String,
    pub insight: String,
}

impl From<&YouthCorrelation> for YouthSummary {
    fn from(data: &YouthCorrelation) -> Self {
        Self {
            title: format!("{} ({})", data.country, data.country_code),
            population: millions(data.demographics.total_population, 2),
            youth: percent(data.demographics.young_population_percent),
            players: data.pro_players.total_count.to_string(),
            density: density_label(&data.correlation_insight.interpretation),
            insight: format!("\"{}\"", data.correlation_insight.player_youth_ratio),
        }
    }
}

/// Short density label from the first word of an interpretation sentence:
/// "Very high pro player density among youth population" -> "Very Density".
pub fn density_label(interpretation: &str) -> String {
    let qualifier = interpretation.split_whitespace().next().unwrap_or("Unknown");
    format!("{} Density", qualifier)
}
