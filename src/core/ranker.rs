use crate::core::{filters::CatalogFilter, scoring::score};
use crate::models::{ScoredItem, Smartphone, WeightConfig};

/// Result of the ranking process
#[derive(Debug)]
pub struct RankResult {
    pub rankings: Vec<ScoredItem>,
    pub weights: WeightConfig,
    pub total_candidates: usize,
    pub filtered_candidates: usize,
}

/// Ranking orchestrator
///
/// # Pipeline Stages
/// 1. Catalog filtering (price range, brands)
/// 2. Normalization and weighted scoring over the filtered set
/// 3. Ordering and truncation
///
/// Normalization ranges come from the filtered set, so the same phone can
/// score differently under different filters.
#[derive(Debug, Clone)]
pub struct Ranker {
    default_weights: WeightConfig,
}

impl Ranker {
    pub fn new(default_weights: WeightConfig) -> Self {
        Self { default_weights }
    }

    pub fn with_default_weights() -> Self {
        Self {
            default_weights: WeightConfig::default(),
        }
    }

    pub fn default_weights(&self) -> &WeightConfig {
        &self.default_weights
    }

    /// Rank a catalog
    ///
    /// # Arguments
    /// * `catalog` - Every candidate phone
    /// * `filter` - Predicates applied before scoring
    /// * `weights` - Weight configuration, or `None` for the ranker's defaults
    /// * `limit` - Maximum number of rankings to return
    pub fn rank(
        &self,
        catalog: &[Smartphone],
        filter: &CatalogFilter,
        weights: Option<&WeightConfig>,
        limit: usize,
    ) -> RankResult {
        let total_candidates = catalog.len();
        let weights = weights.unwrap_or(&self.default_weights).clone();

        // Stage 1: filter
        let filtered = filter.apply(catalog);
        let filtered_candidates = filtered.len();

        // Stage 2 & 3: score and order
        let mut rankings = score(&filtered, &weights);
        rankings.truncate(limit);

        RankResult {
            rankings,
            weights,
            total_candidates,
            filtered_candidates,
        }
    }
}

impl Default for Ranker {
    fn default() -> Self {
        Self::with_default_weights()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::filters::PriceRange;
    use crate::models::{CriterionId, CriterionWeight, Features};

    fn create_candidate(id: &str, brand: &str, camera: f64, price: f64) -> Smartphone {
        Smartphone {
            id: id.to_string(),
            name: format!("Phone {}", id),
            brand: brand.to_string(),
            image: String::new(),
            price,
            features: Features {
                camera,
                display: 9.0,
                ram: 12,
                processor: "Test SoC".to_string(),
                battery: 5000,
                storage: 256,
            },
            launch_year: 2024,
            additional_info: None,
        }
    }

    fn create_catalog() -> Vec<Smartphone> {
        vec![
            create_candidate("1", "Samsung", 9.5, 1299.0),
            create_candidate("2", "Apple", 9.7, 1199.0),
            create_candidate("3", "Google", 9.8, 999.0),
            create_candidate("4", "Nothing", 7.8, 599.0),
        ]
    }

    #[test]
    fn test_rank_basic() {
        let ranker = Ranker::with_default_weights();

        let result = ranker.rank(&create_catalog(), &CatalogFilter::default(), None, 10);

        assert_eq!(result.total_candidates, 4);
        assert_eq!(result.filtered_candidates, 4);
        assert_eq!(result.rankings.len(), 4);
        assert_eq!(result.weights, WeightConfig::default());
    }

    #[test]
    fn test_rankings_sorted_by_score() {
        let ranker = Ranker::default();

        let result = ranker.rank(&create_catalog(), &CatalogFilter::default(), None, 10);

        for pair in result.rankings.windows(2) {
            assert!(pair[0].total_score >= pair[1].total_score);
        }
    }

    #[test]
    fn test_filter_applies_before_scoring() {
        let ranker = Ranker::default();
        let filter = CatalogFilter::new(Some(PriceRange::new(0.0, 1200.0)), vec![]);

        let result = ranker.rank(&create_catalog(), &filter, None, 10);

        assert_eq!(result.filtered_candidates, 3);
        assert!(result.rankings.iter().all(|s| s.item.price <= 1200.0));
    }

    #[test]
    fn test_respects_limit() {
        let ranker = Ranker::default();

        let result = ranker.rank(&create_catalog(), &CatalogFilter::default(), None, 2);

        assert_eq!(result.rankings.len(), 2);
        assert_eq!(result.filtered_candidates, 4);
    }

    #[test]
    fn test_explicit_weights_override_defaults() {
        let ranker = Ranker::default();
        let camera_only = WeightConfig::new(vec![
            CriterionWeight::new(CriterionId::Camera, 100),
            CriterionWeight::new(CriterionId::Display, 0),
            CriterionWeight::new(CriterionId::Ram, 0),
            CriterionWeight::new(CriterionId::Price, 0),
        ]);

        let result = ranker.rank(&create_catalog(), &CatalogFilter::default(), Some(&camera_only), 10);

        assert_eq!(result.rankings[0].item.id, "3");
        assert_eq!(result.rankings[0].total_score, 10.0);
    }
}
