use serde::{Deserialize, Serialize};
use crate::core::filters::PriceRange;
use crate::models::domain::{CriterionId, FactorDelta, ScoredItem, Smartphone, WeightConfig};

/// Response for the rankings endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RankingsResponse {
    pub rankings: Vec<ScoredItem>,
    pub weights: WeightConfig,
    pub total_candidates: usize,
    pub filtered_candidates: usize,
}

/// Response for the comparisons endpoint
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonResponse {
    pub from_id: Option<String>,
    pub to_id: String,
    pub factors: Vec<FactorDelta>,
    pub decisive_factor: Option<FactorDelta>,
    pub net_difference: f64,
    /// Total scores of both phones, present when there is a baseline
    pub scores: Option<ComparisonScores>,
}

/// Total scores of the compared phones, ranked across the whole catalog
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ComparisonScores {
    pub from: f64,
    pub to: f64,
    /// The target scores strictly higher than the baseline
    pub outperforms: bool,
}

impl ComparisonScores {
    pub fn new(from: f64, to: f64) -> Self {
        Self {
            from,
            to,
            outperforms: to > from,
        }
    }
}

/// A weight with the text a slider shows next to it
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CriterionDetail {
    pub id: CriterionId,
    pub name: String,
    pub description: String,
    pub weight: u8,
}

/// Weight configuration together with its current total
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeightsResponse {
    pub weights: WeightConfig,
    pub criteria: Vec<CriterionDetail>,
    pub total: u32,
}

impl From<WeightConfig> for WeightsResponse {
    fn from(weights: WeightConfig) -> Self {
        let criteria = weights
            .iter()
            .map(|w| CriterionDetail {
                id: w.id,
                name: w.id.label().to_string(),
                description: w.id.description().to_string(),
                weight: w.weight,
            })
            .collect();
        let total = weights.total();
        Self { weights, criteria, total }
    }
}

/// Catalog listing with the options a filter UI needs
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogResponse {
    pub smartphones: Vec<Smartphone>,
    pub brands: Vec<String>,
    pub price_range: Option<PriceRange>,
}

/// Health check response
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthResponse {
    pub status: String,
    pub version: String,
    pub timestamp: chrono::DateTime<chrono::Utc>,
    pub catalog_size: usize,
}

/// Error response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
    pub status_code: u16,
}
