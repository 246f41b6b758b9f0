// Model exports
pub mod domain;
pub mod requests;
pub mod responses;

pub use domain::{
    CriterionId, CriterionScores, CriterionWeight, FactorDelta, Features, Preference, ScoredItem,
    Smartphone, WeightConfig, DEFAULT_WEIGHT_FRACTION,
};
pub use requests::{CompareRequest, RankRequest, RedistributeRequest};
pub use responses::{
    CatalogResponse, ComparisonResponse, ComparisonScores, CriterionDetail, ErrorResponse,
    HealthResponse, RankingsResponse, WeightsResponse,
};
