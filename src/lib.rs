//! Phone Ranker - multi-criteria smartphone ranking and comparison
//!
//! This library provides the decision engine behind the phone advisor: it
//! normalizes heterogeneous attributes onto a shared 0-10 scale, ranks a
//! catalog by user-weighted scores, rebalances weights after an edit, and
//! explains which criteria separate two phones.

pub mod config;
pub mod core;
pub mod models;
pub mod routes;
pub mod services;

// Re-export commonly used types
pub use core::{explain, redistribute, score, Comparison, Ranker};
pub use models::{CriterionId, CriterionWeight, FactorDelta, ScoredItem, Smartphone, WeightConfig};
