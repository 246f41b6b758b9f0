use crate::core::normalize::Normalizer;
use crate::models::{CriterionId, CriterionScores, ScoredItem, Smartphone, WeightConfig};

/// Score and rank a collection of smartphones
///
/// Each criterion is normalized to 0-10 across `items` (price inverted so
/// cheaper is better), multiplied by its weight fraction, and summed:
///
/// score = (
///     camera_score  * camera_weight  +
///     display_score * display_weight +
///     ram_score     * ram_weight     +
///     (10 - price_score) * price_weight
/// )
///
/// Results are sorted by descending total score. Items with equal totals
/// keep their input order.
pub fn score(items: &[Smartphone], weights: &WeightConfig) -> Vec<ScoredItem> {
    let Some(normalizer) = Normalizer::fit(items) else {
        return Vec::new();
    };

    let mut scored: Vec<ScoredItem> = items
        .iter()
        .map(|phone| score_item(&normalizer, phone, weights))
        .collect();

    // sort_by is stable, which gives the input-order tie-break
    scored.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));

    scored
}

/// Weighted score of a single item against an already fitted normalizer
#[inline]
pub fn score_item(normalizer: &Normalizer, phone: &Smartphone, weights: &WeightConfig) -> ScoredItem {
    let mut criterion_scores = CriterionScores::default();
    for criterion in CriterionId::ALL {
        let weighted = normalizer.score(criterion, phone) * weights.fraction(criterion);
        criterion_scores.set(criterion, weighted);
    }

    ScoredItem {
        item: phone.clone(),
        total_score: criterion_scores.sum(),
        criterion_scores,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CriterionWeight, Features};

    fn create_test_phone(id: &str, camera: f64, display: f64, ram: u32, price: f64) -> Smartphone {
        Smartphone {
            id: id.to_string(),
            name: format!("Phone {}", id),
            brand: "Test".to_string(),
            image: String::new(),
            price,
            features: Features {
                camera,
                display,
                ram,
                processor: "Test SoC".to_string(),
                battery: 5000,
                storage: 256,
            },
            launch_year: 2024,
            additional_info: None,
        }
    }

    #[test]
    fn test_empty_collection() {
        assert!(score(&[], &WeightConfig::default()).is_empty());
    }

    #[test]
    fn test_two_item_example() {
        let phones = vec![
            create_test_phone("a", 9.5, 9.8, 12, 1299.0),
            create_test_phone("b", 9.7, 9.6, 8, 1199.0),
        ];

        let ranked = score(&phones, &WeightConfig::default());

        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].item.id, "b");
        assert!((ranked[0].total_score - 5.5).abs() < 1e-9);
        assert_eq!(ranked[1].item.id, "a");
        assert!((ranked[1].total_score - 4.5).abs() < 1e-9);

        // a is the most expensive, so its inverted price score is zero
        assert_eq!(ranked[1].criterion_scores.price, 0.0);
        assert!((ranked[1].criterion_scores.display - 2.5).abs() < 1e-9);
        assert!((ranked[1].criterion_scores.ram - 2.0).abs() < 1e-9);
    }

    #[test]
    fn test_single_item_scores_midpoint() {
        let phones = vec![create_test_phone("solo", 8.0, 8.0, 8, 500.0)];

        let ranked = score(&phones, &WeightConfig::default());

        // Every criterion sits at 5, and the default weights sum to 1
        assert!((ranked[0].total_score - 5.0).abs() < 1e-9);
    }

    #[test]
    fn test_cheaper_wins_when_only_price_matters() {
        let phones = vec![
            create_test_phone("pricey", 9.0, 9.0, 16, 1200.0),
            create_test_phone("cheap", 7.0, 7.0, 8, 400.0),
        ];
        let weights = WeightConfig::new(vec![
            CriterionWeight::new(CriterionId::Camera, 0),
            CriterionWeight::new(CriterionId::Display, 0),
            CriterionWeight::new(CriterionId::Ram, 0),
            CriterionWeight::new(CriterionId::Price, 100),
        ]);

        let ranked = score(&phones, &weights);

        assert_eq!(ranked[0].item.id, "cheap");
        assert_eq!(ranked[0].total_score, 10.0);
        assert_eq!(ranked[1].total_score, 0.0);
    }

    #[test]
    fn test_ties_keep_input_order() {
        let phones = vec![
            create_test_phone("first", 8.0, 8.0, 8, 500.0),
            create_test_phone("second", 8.0, 8.0, 8, 500.0),
            create_test_phone("third", 8.0, 8.0, 8, 500.0),
        ];

        let ranked = score(&phones, &WeightConfig::default());
        let ids: Vec<&str> = ranked.iter().map(|s| s.item.id.as_str()).collect();

        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn test_missing_weights_use_default_fraction() {
        let phones = vec![
            create_test_phone("a", 6.0, 6.0, 6, 600.0),
            create_test_phone("b", 9.0, 9.0, 12, 900.0),
        ];

        let ranked = score(&phones, &WeightConfig::new(vec![]));
        let b = ranked.iter().find(|s| s.item.id == "b").unwrap();

        // camera, display, ram all at 10, price inverted to 0, each * 0.25
        assert!((b.total_score - 7.5).abs() < 1e-9);
    }
}
