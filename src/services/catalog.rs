use crate::core::invariants::{check_item, InvariantViolation};
use crate::models::Smartphone;
use std::collections::HashSet;
use std::path::Path;
use thiserror::Error;

/// Seed catalog bundled with the binary
const BUILTIN_CATALOG: &str = include_str!("../../data/smartphones.json");

/// Errors that can occur while loading the catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read catalog file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Invalid catalog JSON: {0}")]
    ParseError(#[from] serde_json::Error),

    #[error("Invalid catalog item: {0}")]
    InvalidItem(#[from] InvariantViolation),

    #[error("Duplicate item id: {0}")]
    DuplicateId(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

/// Read-only smartphone catalog
///
/// Every item is validated on load, after which the catalog never changes.
#[derive(Debug, Clone)]
pub struct Catalog {
    items: Vec<Smartphone>,
}

impl Catalog {
    /// Validate and wrap a list of items
    pub fn from_items(items: Vec<Smartphone>) -> Result<Self, CatalogError> {
        {
            let mut ids = HashSet::with_capacity(items.len());
            for item in &items {
                check_item(item)?;
                if !ids.insert(item.id.as_str()) {
                    return Err(CatalogError::DuplicateId(item.id.clone()));
                }
            }
        }

        Ok(Self { items })
    }

    /// Parse a JSON array of smartphones
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let items: Vec<Smartphone> = serde_json::from_str(json)?;
        Self::from_items(items)
    }

    /// The bundled seed catalog
    pub fn builtin() -> Result<Self, CatalogError> {
        Self::from_json(BUILTIN_CATALOG)
    }

    /// Load a catalog file from disk
    pub async fn from_path<P: AsRef<Path>>(path: P) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        tracing::debug!("Reading catalog from {}", path.display());
        let json = tokio::fs::read_to_string(path).await?;
        Self::from_json(&json)
    }

    /// Load from `path` when given, otherwise fall back to the bundled seed
    pub async fn load(path: Option<&str>) -> Result<Self, CatalogError> {
        match path {
            Some(path) => Self::from_path(path).await,
            None => Self::builtin(),
        }
    }

    pub fn get(&self, id: &str) -> Result<&Smartphone, CatalogError> {
        self.items
            .iter()
            .find(|p| p.id == id)
            .ok_or_else(|| CatalogError::NotFound(id.to_string()))
    }

    pub fn items(&self) -> &[Smartphone] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
