// Core algorithm exports
pub mod explain;
pub mod filters;
pub mod invariants;
pub mod normalize;
pub mod ranker;
pub mod scoring;
pub mod weights;

pub use explain::{explain, Comparison, PERFORMANCE_DELTA_DIVISOR, PRICE_DELTA_DIVISOR};
pub use filters::{available_brands, matches_brands, matches_price_range, CatalogFilter, PriceRange};
pub use invariants::{check_item, check_ranking, check_weights, InvariantViolation};
pub use normalize::{AttributeRange, Normalizer};
pub use ranker::{RankResult, Ranker};
pub use scoring::score;
pub use weights::redistribute;
