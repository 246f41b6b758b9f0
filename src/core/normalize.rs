use crate::models::{CriterionId, Preference, Smartphone};

/// Upper end of the normalized scale
pub const SCALE_MAX: f64 = 10.0;

/// Value assigned when every item shares the same attribute value
pub const DEGENERATE_SCORE: f64 = SCALE_MAX / 2.0;

/// Observed min and max of one attribute across a collection
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AttributeRange {
    pub min: f64,
    pub max: f64,
}

impl AttributeRange {
    /// Single pass over `values`. Returns `None` for an empty iterator.
    pub fn from_values<I>(values: I) -> Option<Self>
    where
        I: IntoIterator<Item = f64>,
    {
        values.into_iter().fold(None, |acc, v| match acc {
            None => Some(Self { min: v, max: v }),
            Some(r) => Some(Self {
                min: r.min.min(v),
                max: r.max.max(v),
            }),
        })
    }

    /// Range of `criterion` across `items`
    pub fn of(criterion: CriterionId, items: &[Smartphone]) -> Option<Self> {
        Self::from_values(items.iter().map(|p| criterion.value(p)))
    }

    #[inline]
    pub fn is_degenerate(&self) -> bool {
        self.max == self.min
    }

    /// Linear rescale of `value` onto 0-10
    #[inline]
    pub fn normalize(&self, value: f64) -> f64 {
        if self.is_degenerate() {
            return DEGENERATE_SCORE;
        }
        ((value - self.min) / (self.max - self.min)) * SCALE_MAX
    }
}

/// Flip a normalized score for lower-is-better attributes
#[inline]
pub fn invert(score: f64) -> f64 {
    SCALE_MAX - score
}

/// Per-criterion ranges for a collection, used to place any of its items
/// on the shared 0-10 scale.
#[derive(Debug, Clone, Copy)]
pub struct Normalizer {
    ranges: [AttributeRange; 4],
}

impl Normalizer {
    /// `None` when `items` is empty since no range can be observed
    pub fn fit(items: &[Smartphone]) -> Option<Self> {
        Some(Self {
            ranges: [
                AttributeRange::of(CriterionId::Camera, items)?,
                AttributeRange::of(CriterionId::Display, items)?,
                AttributeRange::of(CriterionId::Ram, items)?,
                AttributeRange::of(CriterionId::Price, items)?,
            ],
        })
    }

    pub fn range(&self, criterion: CriterionId) -> AttributeRange {
        self.ranges[Self::slot(criterion)]
    }

    /// Normalized score of `phone` for `criterion`, already inverted where
    /// lower raw values are better
    #[inline]
    pub fn score(&self, criterion: CriterionId, phone: &Smartphone) -> f64 {
        let normalized = self.range(criterion).normalize(criterion.value(phone));
        match criterion.preference() {
            Preference::HigherIsBetter => normalized,
            Preference::LowerIsBetter => invert(normalized),
        }
    }

    fn slot(criterion: CriterionId) -> usize {
        match criterion {
            CriterionId::Camera => 0,
            CriterionId::Display => 1,
            CriterionId::Ram => 2,
            CriterionId::Price => 3,
        }
    }
}
