use crate::models::{CriterionId, CriterionWeight, WeightConfig};

/// Full weight budget shared by all criteria
pub const WEIGHT_TOTAL: u8 = 100;

/// Set `criterion` to `value` and rebalance the others to fill what is left
///
/// `value` is clamped to 0-100. The other criteria keep their relative
/// proportions, rounded to whole numbers, so the result may drift from 100
/// by up to one point per other criterion. When every other weight is zero
/// the remainder is split evenly with floor division and any leftover is
/// dropped. A criterion missing from `config` is appended.
///
/// The result keeps the order of `config`.
pub fn redistribute(config: &WeightConfig, criterion: CriterionId, value: u8) -> WeightConfig {
    let value = value.min(WEIGHT_TOTAL);

    let others: Vec<&CriterionWeight> = config.iter().filter(|w| w.id != criterion).collect();
    let others_total: u32 = others.iter().map(|w| w.weight as u32).sum();
    let remaining = (WEIGHT_TOTAL - value) as u32;

    let rebalance = |old: u8| -> u8 {
        if value == WEIGHT_TOTAL {
            0
        } else if others_total == 0 {
            // others is non-empty whenever this closure runs
            (remaining / others.len() as u32) as u8
        } else {
            ((old as f64 / others_total as f64) * remaining as f64).round() as u8
        }
    };

    let mut seen = false;
    let mut weights: Vec<CriterionWeight> = config
        .iter()
        .map(|w| {
            if w.id == criterion {
                seen = true;
                CriterionWeight::new(w.id, value)
            } else {
                CriterionWeight::new(w.id, rebalance(w.weight))
            }
        })
        .collect();

    if !seen {
        weights.push(CriterionWeight::new(criterion, value));
    }

    WeightConfig::new(weights)
}
