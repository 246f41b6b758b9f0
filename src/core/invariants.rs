use thiserror::Error;
use crate::core::normalize::SCALE_MAX;
use crate::models::{CriterionId, ScoredItem, Smartphone, WeightConfig};

/// Upstream data or caller bugs the engine itself never produces
#[derive(Debug, Error, PartialEq)]
pub enum InvariantViolation {
    #[error("weight for {criterion} is {weight}, expected 0-100")]
    WeightOutOfRange { criterion: CriterionId, weight: u8 },

    #[error("criterion {0} appears more than once")]
    DuplicateCriterion(CriterionId),

    #[error("{attribute} of item {item} is {value}, outside its domain")]
    AttributeOutOfDomain {
        item: String,
        attribute: CriterionId,
        value: f64,
    },

    #[error("{attribute} of item {item} is not a finite number")]
    NonFiniteAttribute { item: String, attribute: CriterionId },

    #[error("ranking is not in descending score order at position {0}")]
    UnsortedRanking(usize),
}

/// Every weight lies in 0-100 and no criterion is listed twice
pub fn check_weights(weights: &WeightConfig) -> Result<(), InvariantViolation> {
    if let Some(criterion) = weights.duplicate() {
        return Err(InvariantViolation::DuplicateCriterion(criterion));
    }

    for w in weights.iter() {
        if w.weight > 100 {
            return Err(InvariantViolation::WeightOutOfRange {
                criterion: w.id,
                weight: w.weight,
            });
        }
    }
    Ok(())
}

/// Ratings lie in 0-10 and RAM and price are non-negative
pub fn check_item(phone: &Smartphone) -> Result<(), InvariantViolation> {
    for attribute in CriterionId::ALL {
        let value = attribute.value(phone);
        if !value.is_finite() {
            return Err(InvariantViolation::NonFiniteAttribute {
                item: phone.id.clone(),
                attribute,
            });
        }

        let in_domain = match attribute {
            CriterionId::Camera | CriterionId::Display => (0.0..=SCALE_MAX).contains(&value),
            CriterionId::Ram | CriterionId::Price => value >= 0.0,
        };
        if !in_domain {
            return Err(InvariantViolation::AttributeOutOfDomain {
                item: phone.id.clone(),
                attribute,
                value,
            });
        }
    }
    Ok(())
}

/// Scores never increase along the ranking
pub fn check_ranking(rankings: &[ScoredItem]) -> Result<(), InvariantViolation> {
    match rankings
        .windows(2)
        .position(|pair| pair[0].total_score < pair[1].total_score)
    {
        Some(i) => Err(InvariantViolation::UnsortedRanking(i + 1)),
        None => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{CriterionScores, CriterionWeight, Features};

    fn create_test_phone(camera: f64, price: f64) -> Smartphone {
        Smartphone {
            id: "x".to_string(),
            name: "Phone X".to_string(),
            brand: "Test".to_string(),
            image: String::new(),
            price,
            features: Features {
                camera,
                display: 9.0,
                ram: 8,
                processor: "Test SoC".to_string(),
                battery: 4000,
                storage: 128,
            },
            launch_year: 2022,
            additional_info: None,
        }
    }

    #[test]
    fn test_weight_out_of_range() {
        let weights = WeightConfig::new(vec![CriterionWeight::new(CriterionId::Display, 120)]);
        assert_eq!(
            check_weights(&weights),
            Err(InvariantViolation::WeightOutOfRange {
                criterion: CriterionId::Display,
                weight: 120
            })
        );
        assert!(check_weights(&WeightConfig::default()).is_ok());
    }

    #[test]
    fn test_duplicate_criterion() {
        let weights = WeightConfig::new(vec![
            CriterionWeight::new(CriterionId::Ram, 50),
            CriterionWeight::new(CriterionId::Ram, 50),
        ]);
        assert_eq!(
            check_weights(&weights),
            Err(InvariantViolation::DuplicateCriterion(CriterionId::Ram))
        );
    }

    #[test]
    fn test_item_domains() {
        assert!(check_item(&create_test_phone(9.5, 999.0)).is_ok());
        assert!(matches!(
            check_item(&create_test_phone(11.0, 999.0)),
            Err(InvariantViolation::AttributeOutOfDomain { attribute: CriterionId::Camera, .. })
        ));
        assert!(matches!(
            check_item(&create_test_phone(9.0, -1.0)),
            Err(InvariantViolation::AttributeOutOfDomain { attribute: CriterionId::Price, .. })
        ));
        assert!(matches!(
            check_item(&create_test_phone(f64::NAN, 999.0)),
            Err(InvariantViolation::NonFiniteAttribute { .. })
        ));
    }

    #[test]
    fn test_unsorted_ranking() {
        let scored = |total_score: f64| ScoredItem {
            item: create_test_phone(9.0, 500.0),
            total_score,
            criterion_scores: CriterionScores::default(),
        };

        assert!(check_ranking(&[scored(7.0), scored(7.0), scored(3.0)]).is_ok());
        assert_eq!(
            check_ranking(&[scored(7.0), scored(3.0), scored(4.0)]),
            Err(InvariantViolation::UnsortedRanking(2))
        );
    }
}
