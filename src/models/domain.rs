use serde::{Deserialize, Serialize};

/// Hardware attributes of a smartphone
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Features {
    /// Rating out of 10
    pub camera: f64,
    /// Rating out of 10
    pub display: f64,
    /// GB
    pub ram: u32,
    pub processor: String,
    /// mAh
    pub battery: u32,
    /// GB
    pub storage: u32,
}

/// Catalog item. Only `features` and `price` take part in scoring, the
/// rest is display metadata.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Smartphone {
    pub id: String,
    pub name: String,
    pub brand: String,
    #[serde(default)]
    pub image: String,
    pub price: f64,
    pub features: Features,
    #[serde(rename = "launchYear")]
    pub launch_year: u16,
    #[serde(rename = "additionalInfo", default, skip_serializing_if = "Option::is_none")]
    pub additional_info: Option<String>,
}

/// Whether a larger raw value is preferable
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preference {
    HigherIsBetter,
    LowerIsBetter,
}

/// The closed set of scoring criteria
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CriterionId {
    Camera,
    Display,
    Ram,
    Price,
}

impl CriterionId {
    /// Every criterion, in the fixed order used for reporting and tie-breaks
    pub const ALL: [CriterionId; 4] = [
        CriterionId::Camera,
        CriterionId::Display,
        CriterionId::Ram,
        CriterionId::Price,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            CriterionId::Camera => "camera",
            CriterionId::Display => "display",
            CriterionId::Ram => "ram",
            CriterionId::Price => "price",
        }
    }

    /// Human-facing label. RAM is presented as overall performance.
    pub fn label(self) -> &'static str {
        match self {
            CriterionId::Camera => "Camera",
            CriterionId::Display => "Display",
            CriterionId::Ram => "Performance",
            CriterionId::Price => "Price",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            CriterionId::Camera => "Photo and video quality, features, and versatility",
            CriterionId::Display => "Screen quality, brightness, refresh rate, and resolution",
            CriterionId::Ram => "Processing power, RAM, and overall speed",
            CriterionId::Price => "Value for money and affordability",
        }
    }

    pub fn preference(self) -> Preference {
        match self {
            CriterionId::Price => Preference::LowerIsBetter,
            _ => Preference::HigherIsBetter,
        }
    }

    /// Raw attribute value this criterion reads from an item
    #[inline]
    pub fn value(self, phone: &Smartphone) -> f64 {
        match self {
            CriterionId::Camera => phone.features.camera,
            CriterionId::Display => phone.features.display,
            CriterionId::Ram => phone.features.ram as f64,
            CriterionId::Price => phone.price,
        }
    }
}

impl std::fmt::Display for CriterionId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single criterion's share of the total weight, 0-100
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct CriterionWeight {
    pub id: CriterionId,
    pub weight: u8,
}

impl CriterionWeight {
    pub fn new(id: CriterionId, weight: u8) -> Self {
        Self { id, weight }
    }
}

/// Fraction used for any criterion the configuration does not mention
pub const DEFAULT_WEIGHT_FRACTION: f64 = 0.25;

/// Immutable weight configuration.
///
/// Weights are expected to add up to 100 but nothing here enforces it;
/// [`crate::core::weights::redistribute`] is what restores the total after
/// an edit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WeightConfig {
    weights: Vec<CriterionWeight>,
}

impl WeightConfig {
    pub fn new(weights: Vec<CriterionWeight>) -> Self {
        Self { weights }
    }

    /// Raw weight for `id`, if present
    pub fn get(&self, id: CriterionId) -> Option<u8> {
        self.weights.iter().find(|w| w.id == id).map(|w| w.weight)
    }

    /// Weight of `id` as a 0-1 multiplier, falling back to
    /// [`DEFAULT_WEIGHT_FRACTION`] for an absent criterion.
    #[inline]
    pub fn fraction(&self, id: CriterionId) -> f64 {
        self.get(id)
            .map(|w| w as f64 / 100.0)
            .unwrap_or(DEFAULT_WEIGHT_FRACTION)
    }

    /// First criterion that appears more than once, if any
    pub fn duplicate(&self) -> Option<CriterionId> {
        self.weights
            .iter()
            .enumerate()
            .find(|(i, w)| self.weights[..*i].iter().any(|prev| prev.id == w.id))
            .map(|(_, w)| w.id)
    }

    pub fn total(&self) -> u32 {
        self.weights.iter().map(|w| w.weight as u32).sum()
    }

    pub fn iter(&self) -> impl Iterator<Item = &CriterionWeight> {
        self.weights.iter()
    }

    pub fn len(&self) -> usize {
        self.weights.len()
    }

    pub fn is_empty(&self) -> bool {
        self.weights.is_empty()
    }

    pub fn into_inner(self) -> Vec<CriterionWeight> {
        self.weights
    }
}

impl Default for WeightConfig {
    fn default() -> Self {
        Self::new(vec![
            CriterionWeight::new(CriterionId::Camera, 30),
            CriterionWeight::new(CriterionId::Display, 25),
            CriterionWeight::new(CriterionId::Ram, 20),
            CriterionWeight::new(CriterionId::Price, 25),
        ])
    }
}

impl FromIterator<CriterionWeight> for WeightConfig {
    fn from_iter<I: IntoIterator<Item = CriterionWeight>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

/// One value per criterion
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct CriterionScores {
    pub camera: f64,
    pub display: f64,
    pub ram: f64,
    pub price: f64,
}

impl CriterionScores {
    pub fn get(&self, id: CriterionId) -> f64 {
        match id {
            CriterionId::Camera => self.camera,
            CriterionId::Display => self.display,
            CriterionId::Ram => self.ram,
            CriterionId::Price => self.price,
        }
    }

    pub fn set(&mut self, id: CriterionId, value: f64) {
        match id {
            CriterionId::Camera => self.camera = value,
            CriterionId::Display => self.display = value,
            CriterionId::Ram => self.ram = value,
            CriterionId::Price => self.price = value,
        }
    }

    pub fn sum(&self) -> f64 {
        self.camera + self.display + self.ram + self.price
    }
}

/// Ranked result for one item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoredItem {
    #[serde(rename = "smartphone")]
    pub item: Smartphone,
    #[serde(rename = "totalScore")]
    pub total_score: f64,
    /// Weighted score per criterion; these add up to `total_score`
    #[serde(rename = "criterionScores")]
    pub criterion_scores: CriterionScores,
}

/// How much of the gap between two items one criterion accounts for.
///
/// Positive means the target item is better on this criterion, negative
/// means the baseline is, zero is parity.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FactorDelta {
    pub criterion: CriterionId,
    pub label: String,
    pub difference: f64,
}
