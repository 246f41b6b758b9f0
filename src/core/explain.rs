use crate::models::{CriterionId, FactorDelta, Smartphone, WeightConfig};

/// RAM is measured in GB, a wider raw range than the 0-10 ratings, so its
/// delta is halved. Recalibrate if the RAM domain changes.
pub const PERFORMANCE_DELTA_DIVISOR: f64 = 2.0;

/// Prices are in whole currency units, two orders of magnitude above the
/// ratings. Recalibrate if the price domain changes.
pub const PRICE_DELTA_DIVISOR: f64 = 100.0;

/// Explain how `to` differs from `from`, most decisive factor first
///
/// Each criterion contributes a weighted signed difference; positive means
/// `to` is better on that criterion. Price is compared the other way round
/// so that a cheaper `to` comes out positive. Without a baseline there is
/// nothing to compare and the result is empty.
pub fn explain(
    from: Option<&Smartphone>,
    to: &Smartphone,
    weights: &WeightConfig,
) -> Vec<FactorDelta> {
    let Some(from) = from else {
        return Vec::new();
    };

    let mut factors: Vec<FactorDelta> = CriterionId::ALL
        .into_iter()
        .map(|criterion| FactorDelta {
            criterion,
            label: criterion.label().to_string(),
            difference: weighted_difference(criterion, from, to, weights),
        })
        .collect();

    // Stable, so equal magnitudes stay in criterion order
    factors.sort_by(|a, b| b.difference.abs().total_cmp(&a.difference.abs()));

    factors
}

#[inline]
fn weighted_difference(
    criterion: CriterionId,
    from: &Smartphone,
    to: &Smartphone,
    weights: &WeightConfig,
) -> f64 {
    let fraction = weights.fraction(criterion);
    match criterion {
        CriterionId::Camera | CriterionId::Display => {
            (criterion.value(to) - criterion.value(from)) * fraction
        }
        CriterionId::Ram => {
            (criterion.value(to) - criterion.value(from)) * fraction / PERFORMANCE_DELTA_DIVISOR
        }
        CriterionId::Price => (from.price - to.price) * fraction / PRICE_DELTA_DIVISOR,
    }
}

/// Explanation of one pairwise comparison
#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub factors: Vec<FactorDelta>,
}

impl Comparison {
    pub fn between(from: Option<&Smartphone>, to: &Smartphone, weights: &WeightConfig) -> Self {
        Self {
            factors: explain(from, to, weights),
        }
    }

    /// The most significant criterion that actually differs
    pub fn decisive_factor(&self) -> Option<&FactorDelta> {
        self.factors.iter().find(|f| f.difference != 0.0)
    }

    /// Sum of all weighted differences; positive favors the target
    pub fn net_difference(&self) -> f64 {
        self.factors.iter().map(|f| f.difference).sum()
    }

    pub fn into_factors(self) -> Vec<FactorDelta> {
        self.factors
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Features;

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
                battery: 4500,
                storage: 128,
            },
            launch_year: 2023,
            additional_info: None,
        }
    }

    #[test]
    fn test_no_baseline_is_empty() {
        let to = create_test_phone("to", 9.0, 9.0, 12, 999.0);
        assert!(explain(None, &to, &WeightConfig::default()).is_empty());
    }

    #[test]
    fn test_differences_and_order() {
        // Galaxy S24 Ultra vs iPhone 15 Pro Max
        let from = create_test_phone("1", 9.5, 9.8, 12, 1299.0);
        let to = create_test_phone("2", 9.7, 9.6, 8, 1199.0);

        let factors = explain(Some(&from), &to, &WeightConfig::default());

        assert_eq!(factors.len(), 4);
        // ram: -4 * 0.2 / 2 = -0.4, price: 100 * 0.25 / 100 = 0.25,
        // camera: 0.2 * 0.3 = 0.06, display: -0.2 * 0.25 = -0.05
        assert_eq!(factors[0].criterion, CriterionId::Ram);
        assert_eq!(factors[0].label, "Performance");
        assert!((factors[0].difference + 0.4).abs() < 1e-9);
        assert_eq!(factors[1].criterion, CriterionId::Price);
        assert!((factors[1].difference - 0.25).abs() < 1e-9);
        assert_eq!(factors[2].criterion, CriterionId::Camera);
        assert!((factors[2].difference - 0.06).abs() < 1e-9);
        assert_eq!(factors[3].criterion, CriterionId::Display);
        assert!((factors[3].difference + 0.05).abs() < 1e-9);
    }

    #[test]
    fn test_identical_items_keep_criterion_order() {
        let phone = create_test_phone("same", 8.0, 8.0, 8, 700.0);

        let factors = explain(Some(&phone), &phone, &WeightConfig::default());
        let order: Vec<CriterionId> = factors.iter().map(|f| f.criterion).collect();

        assert_eq!(order, CriterionId::ALL.to_vec());
        assert!(factors.iter().all(|f| f.difference == 0.0));
    }

    #[test]
    fn test_comparison_summary() {
        let from = create_test_phone("from", 8.0, 8.0, 8, 700.0);
        let to = create_test_phone("to", 8.0, 8.0, 8, 500.0);

        let comparison = Comparison::between(Some(&from), &to, &WeightConfig::default());

        let decisive = comparison.decisive_factor().unwrap();
        assert_eq!(decisive.criterion, CriterionId::Price);
        assert!((comparison.net_difference() - 0.5).abs() < 1e-9);
    }

    #[test]
    fn test_parity_has_no_decisive_factor() {
        let phone = create_test_phone("same", 8.0, 8.0, 8, 700.0);
        let comparison = Comparison::between(Some(&phone), &phone, &WeightConfig::default());
        assert!(comparison.decisive_factor().is_none());
    }
}
