use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};
use crate::core::filters::PriceRange;
use crate::models::domain::{CriterionId, WeightConfig};

/// Request to rank the catalog
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RankRequest {
    /// Falls back to the configured default weights when absent
    #[validate(custom(function = "validate_weights"))]
    #[serde(default)]
    pub weights: Option<WeightConfig>,
    #[validate(custom(function = "validate_price_range"))]
    #[serde(default)]
    pub price_range: Option<PriceRange>,
    #[serde(default)]
    pub brands: Vec<String>,
    #[validate(range(min = 1))]
    #[serde(default)]
    pub limit: Option<u16>,
}

/// Request to explain the difference between two catalog items
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct CompareRequest {
    /// Baseline item. Without one the explanation is empty.
    #[serde(default)]
    pub from_id: Option<String>,
    #[validate(length(min = 1))]
    pub to_id: String,
    #[validate(custom(function = "validate_weights"))]
    #[serde(default)]
    pub weights: Option<WeightConfig>,
}

/// Request to set one criterion's weight and rebalance the rest
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct RedistributeRequest {
    #[validate(custom(function = "validate_weights"))]
    #[serde(default)]
    pub weights: WeightConfig,
    pub criterion: CriterionId,
    #[validate(range(max = 100))]
    pub value: u8,
}

fn validate_weights(weights: &WeightConfig) -> Result<(), ValidationError> {
    if weights.iter().any(|w| w.weight > 100) {
        return Err(ValidationError::new("weight_out_of_range"));
    }
    if weights.duplicate().is_some() {
        return Err(ValidationError::new("duplicate_criterion"));
    }
    Ok(())
}

fn validate_price_range(range: &PriceRange) -> Result<(), ValidationError> {
    if !range.min.is_finite() || !range.max.is_finite() || range.min > range.max {
        return Err(ValidationError::new("invalid_price_range"));
    }
    Ok(())
}
