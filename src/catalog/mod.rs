//! MBS schedule reference data.
//!
//! The catalog is loaded once (seeding the schedule file on first run) and is
//! immutable afterwards. Engines hold it behind an `Arc` and only read it.

pub mod loader;
pub mod seed;
pub mod types;

use std::path::Path;

pub use types::{BandKind, CatalogError, CatalogItem, DurationBand};

/// Immutable, ordered set of schedule items.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<CatalogItem>,
}

impl Catalog {
    /// Load the schedule at `path`, seeding it when absent.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        loader::load_or_seed(path).map(Self::from_items)
    }

    /// Load the schedule from the configured data directory.
    pub fn load_default() -> Result<Self, CatalogError> {
        Self::load(&crate::config::catalog_path())
    }

    /// Build a catalog from items already in memory. Insertion order is kept.
    pub fn from_items(items: Vec<CatalogItem>) -> Self {
        Self { items }
    }

    /// The seed schedule without touching the filesystem.
    pub fn seeded() -> Self {
        Self::from_items(seed::seed_items())
    }

    pub fn items(&self) -> &[CatalogItem] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Look up an item by code. `None` means the item is not configured.
    pub fn lookup(&self, code: &str) -> Option<&CatalogItem> {
        self.items.iter().find(|i| i.code == code)
    }

    /// Filter by exact category and by case-insensitive text over
    /// description and code.
    pub fn search(&self, category: Option<&str>, text: Option<&str>) -> Vec<&CatalogItem> {
        let needle = text.map(str::to_lowercase);
        self.items
            .iter()
            .filter(|i| category.map_or(true, |c| i.category == c))
            .filter(|i| match &needle {
                Some(n) => {
                    i.description.to_lowercase().contains(n.as_str())
                        || i.code.to_lowercase().contains(n.as_str())
                }
                None => true,
            })
            .collect()
    }
}
