use serde::{Deserialize, Serialize};
use crate::models::Smartphone;

/// Inclusive price bounds
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PriceRange {
    pub min: f64,
    pub max: f64,
}

impl PriceRange {
    pub fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    /// Tightest range covering every item, `None` for an empty catalog
    pub fn covering(items: &[Smartphone]) -> Option<Self> {
        let mut prices = items.iter().map(|p| p.price);
        let first = prices.next()?;
        Some(prices.fold(Self::new(first, first), |r, p| {
            Self::new(r.min.min(p), r.max.max(p))
        }))
    }
}

/// Check if a phone's price lies within the range
#[inline]
pub fn matches_price_range(phone: &Smartphone, range: &PriceRange) -> bool {
    phone.price >= range.min && phone.price <= range.max
}

/// Check if a phone belongs to one of the selected brands
///
/// An empty selection means every brand is allowed.
#[inline]
pub fn matches_brands(phone: &Smartphone, brands: &[String]) -> bool {
    brands.is_empty() || brands.iter().any(|b| b == &phone.brand)
}

/// Catalog predicates applied before scoring
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CatalogFilter {
    pub price_range: Option<PriceRange>,
    pub brands: Vec<String>,
}

impl CatalogFilter {
    pub fn new(price_range: Option<PriceRange>, brands: Vec<String>) -> Self {
        Self { price_range, brands }
    }

    #[inline]
    pub fn matches(&self, phone: &Smartphone) -> bool {
        if let Some(range) = &self.price_range {
            if !matches_price_range(phone, range) {
                return false;
            }
        }

        matches_brands(phone, &self.brands)
    }

    pub fn apply(&self, items: &[Smartphone]) -> Vec<Smartphone> {
        items.iter().filter(|p| self.matches(p)).cloned().collect()
    }
}

/// Sorted, de-duplicated brands present in the catalog
pub fn available_brands(items: &[Smartphone]) -> Vec<String> {
    let mut brands: Vec<String> = items.iter().map(|p| p.brand.clone()).collect();
    brands.sort();
    brands.dedup();
    brands
}
