//! Catalog builder
//!
//! Fills the registry templates for one target identifier. Any string is
//! accepted; building never touches the network and never fails.

use tracing::{debug, warn};

use crate::{CategoryEntries, CategoryTemplate, SourceEntry, SourceTemplate, CATEGORIES};

/// Result of building one category
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryOutcome {
    /// Every configured source produced an entry
    Built(CategoryEntries),
    /// Nothing could be produced; the category is kept as an empty mapping
    Empty { category: String, cause: String },
}

impl CategoryOutcome {
    /// Collapse into the entries to store, logging the cause of an empty category
    pub fn into_entries(self) -> CategoryEntries {
        match self {
            CategoryOutcome::Built(entries) => entries,
            CategoryOutcome::Empty { category, cause } => {
                warn!("Category '{}' produced no entries: {}", category, cause);
                CategoryEntries::new(&category)
            }
        }
    }
}

/// Builds lookup entries for a target
#[derive(Debug, Clone)]
pub struct CatalogBuilder {
    target: String,
    categories: &'static [CategoryTemplate],
}

impl CatalogBuilder {
    /// Builder over the default registry
    pub fn new(target: &str) -> Self {
        Self::with_categories(target, CATEGORIES)
    }

    /// Builder over a custom category table
    pub fn with_categories(target: &str, categories: &'static [CategoryTemplate]) -> Self {
        Self {
            target: target.to_string(),
            categories,
        }
    }

    pub fn categories(&self) -> &'static [CategoryTemplate] {
        self.categories
    }

    /// Build a single entry
    pub fn build_entry(&self, source: &SourceTemplate) -> SourceEntry {
        SourceEntry {
            name: source.name.to_string(),
            url: source.build_url(&self.target),
            description: source.describe(&self.target),
        }
    }

    /// Build every entry of a category, in declared order
    pub fn build_category(&self, category: &CategoryTemplate) -> CategoryOutcome {
        if category.sources.is_empty() {
            return CategoryOutcome::Empty {
                category: category.name.to_string(),
                cause: "no sources configured".to_string(),
            };
        }

        let mut entries = CategoryEntries::new(category.name);
        for source in category.sources {
            entries.insert(self.build_entry(source));
        }

        debug!("Built {} entries for '{}'", entries.len(), category.name);
        CategoryOutcome::Built(entries)
    }
}
