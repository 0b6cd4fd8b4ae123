//! Catalog of generated lookup links
//!
//! A catalog groups [`SourceEntry`] values by category. Both levels keep
//! insertion order, which is also the order they serialize in:
//!
//! ```json
//! { "Social Media": { "LinkedIn": { "url": "...", "description": "..." } } }
//! ```

use std::fmt;

use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// One lookup link within a category
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceEntry {
    pub name: String,
    pub url: String,
    pub description: String,
}

/// Serialized body of an entry; the name is the map key
#[derive(Serialize)]
struct EntryRef<'a> {
    url: &'a str,
    description: &'a str,
}

#[derive(Deserialize)]
struct EntryBody {
    url: String,
    description: String,
}

/// Ordered entries of one category
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CategoryEntries {
    name: String,
    entries: Vec<SourceEntry>,
}

impl CategoryEntries {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            entries: Vec::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Add an entry, replacing any existing entry with the same name in place
    pub fn insert(&mut self, entry: SourceEntry) {
        match self.entries.iter_mut().find(|e| e.name == entry.name) {
            Some(existing) => *existing = entry,
            None => self.entries.push(entry),
        }
    }

    pub fn get(&self, source: &str) -> Option<&SourceEntry> {
        self.entries.iter().find(|e| e.name == source)
    }

    pub fn iter(&self) -> impl Iterator<Item = &SourceEntry> {
        self.entries.iter()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Serialize for CategoryEntries {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for entry in &self.entries {
            map.serialize_entry(
                &entry.name,
                &EntryRef {
                    url: &entry.url,
                    description: &entry.description,
                },
            )?;
        }
        map.end()
    }
}

/// Entries of a category as read back from a file, before the name is attached
struct EntryList(Vec<SourceEntry>);

impl<'de> Deserialize<'de> for EntryList {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntryListVisitor;

        impl<'de> Visitor<'de> for EntryListVisitor {
            type Value = EntryList;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of source name to {url, description}")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some((name, body)) = access.next_entry::<String, EntryBody>()? {
                    entries.push(SourceEntry {
                        name,
                        url: body.url,
                        description: body.description,
                    });
                }
                Ok(EntryList(entries))
            }
        }

        deserializer.deserialize_map(EntryListVisitor)
    }
}

/// All categories generated for one target
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Catalog {
    target: String,
    categories: Vec<CategoryEntries>,
}

impl Catalog {
    /// Create an empty catalog for a target
    pub fn new(target: &str) -> Self {
        Self {
            target: target.to_string(),
            categories: Vec::new(),
        }
    }

    /// The identifier this catalog was built for
    pub fn target(&self) -> &str {
        &self.target
    }

    /// Insert a category, replacing any existing one with the same name in place
    pub fn insert(&mut self, category: CategoryEntries) {
        match self.categories.iter_mut().find(|c| c.name == category.name) {
            Some(existing) => *existing = category,
            None => self.categories.push(category),
        }
    }

    pub fn category(&self, name: &str) -> Option<&CategoryEntries> {
        self.categories.iter().find(|c| c.name == name)
    }

    pub fn entry(&self, category: &str, source: &str) -> Option<&SourceEntry> {
        self.category(category).and_then(|c| c.get(source))
    }

    /// Categories in insertion order
    pub fn categories(&self) -> impl Iterator<Item = &CategoryEntries> {
        self.categories.iter()
    }

    /// Number of categories
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Number of entries across all categories
    pub fn entry_count(&self) -> usize {
        self.categories.iter().map(|c| c.len()).sum()
    }

    /// Read a serialized catalog back, attaching the target it was built for
    pub fn from_json(target: &str, json: &str) -> Result<Self, serde_json::Error> {
        let raw: RawCatalog = serde_json::from_str(json)?;
        let mut catalog = Catalog::new(target);
        for (name, EntryList(entries)) in raw.0 {
            catalog.insert(CategoryEntries { name, entries });
        }
        Ok(catalog)
    }
}

impl Serialize for Catalog {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.categories.len()))?;
        for category in &self.categories {
            map.serialize_entry(&category.name, category)?;
        }
        map.end()
    }
}

/// Ordered (category, entries) pairs as they appear in a file
struct RawCatalog(Vec<(String, EntryList)>);

impl<'de> Deserialize<'de> for RawCatalog {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct RawCatalogVisitor;

        impl<'de> Visitor<'de> for RawCatalogVisitor {
            type Value = RawCatalog;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a map of category name to source entries")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut categories = Vec::new();
                while let Some(pair) = access.next_entry::<String, EntryList>()? {
                    categories.push(pair);
                }
                Ok(RawCatalog(categories))
            }
        }

        deserializer.deserialize_map(RawCatalogVisitor)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn entry(name: &str, url: &str) -> SourceEntry {
        SourceEntry {
            name: name.to_string(),
            url: url.to_string(),
            description: format!("about {}", name),
        }
    }

    fn sample() -> Catalog {
        let mut social = CategoryEntries::new("Social Media");
        social.insert(entry("Twitter/X", "https://twitter.com/search?q=x"));
        social.insert(entry("GitHub", "https://github.com/search?q=x"));
        let mut web = CategoryEntries::new("Web Presence");
        web.insert(entry("Google", "https://www.google.com/search?q=x"));

        let mut catalog = Catalog::new("x");
        catalog.insert(social);
        catalog.insert(web);
        catalog
    }

    #[test]
    fn test_serialize_keeps_insertion_order() {
        let json = serde_json::to_string(&sample()).unwrap();
        let social = json.find("Social Media").unwrap();
        let web = json.find("Web Presence").unwrap();
        assert!(social < web);
        // Not alphabetical: Twitter/X was inserted first
        assert!(json.find("Twitter/X").unwrap() < json.find("GitHub").unwrap());
        assert!(json.contains(r#""url":"https://github.com/search?q=x""#));
        assert!(!json.contains("\"name\""));
    }

    #[test]
    fn test_from_json_restores_order() {
        let catalog = sample();
        let json = serde_json::to_string(&catalog).unwrap();
        let restored = Catalog::from_json("x", &json).unwrap();
        assert_eq!(restored, catalog);
    }

    #[test]
    fn test_insert_replaces_in_place() {
        let mut category = CategoryEntries::new("Social Media");
        category.insert(entry("Twitter/X", "https://a.example/"));
        category.insert(entry("GitHub", "https://b.example/"));
        category.insert(entry("Twitter/X", "https://c.example/"));

        let names: Vec<_> = category.iter().map(|e| e.name.as_str()).collect();
        assert_eq!(names, vec!["Twitter/X", "GitHub"]);
        assert_eq!(category.get("Twitter/X").unwrap().url, "https://c.example/");
    }

    #[test]
    fn test_counts() {
        let catalog = sample();
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.entry_count(), 3);
        assert!(catalog.entry("Web Presence", "Google").is_some());
        assert!(catalog.entry("Web Presence", "Bing").is_none());
    }

    #[test]
    fn test_from_json_rejects_wrong_shape() {
        assert!(Catalog::from_json("x", r#"{"Social Media": ["not", "a", "map"]}"#).is_err());
        assert!(Catalog::from_json("x", r#"{"Social Media": {"X": {"url": "u"}}}"#).is_err());
    }
}
