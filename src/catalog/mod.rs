//! Item catalog the storefront page is built from
//!
//! A catalog is an ordered list of [`Item`]s. It is either read from a TOML
//! file made of repeated `[[item]]` tables:
//!
//! ```toml
//! [[item]]
//! id = "tent"
//! title = "Two-person tent"
//! category = "camping"
//! stock = 4
//! description = "Dome tent with rain fly"
//! ```
//!
//! or taken from [`Catalog::sample`] when no file is given.

pub mod errors;

pub use errors::CatalogError;

use serde::Deserialize;
use std::fmt;
use std::fs;
use std::path::Path;

/// Category name reserved for the "show everything" filter selection
pub const ALL_CATEGORIES: &str = "all";

/// Identifier of a purchasable item
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Deserialize)]
#[serde(transparent)]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> Self {
        ItemId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ItemId {
    fn from(id: &str) -> Self {
        ItemId::new(id)
    }
}

/// One purchasable item
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Item {
    pub id: ItemId,
    pub title: String,
    pub category: String,
    /// Maximum quantity that can be put in the bag
    pub stock: u32,
    #[serde(default)]
    pub description: String,
}

impl Item {
    pub fn new(id: &str, title: &str, category: &str, stock: u32, description: &str) -> Self {
        Item {
            id: ItemId::new(id),
            title: title.to_string(),
            category: category.to_string(),
            stock,
            description: description.to_string(),
        }
    }
}

#[derive(Deserialize)]
struct CatalogFile {
    #[serde(default, rename = "item")]
    items: Vec<Item>,
}

/// Validated, ordered list of items
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    items: Vec<Item>,
}

impl Catalog {
    /// Build a catalog from items, rejecting duplicates and blank fields
    pub fn new(items: Vec<Item>) -> Result<Self, CatalogError> {
        if items.is_empty() {
            return Err(CatalogError::Empty);
        }

        let mut seen = rustc_hash::FxHashSet::default();
        for (index, item) in items.iter().enumerate() {
            if item.id.as_str().trim().is_empty() {
                return Err(CatalogError::EmptyField { index, field: "id" });
            }
            if item.category.trim().is_empty() {
                return Err(CatalogError::EmptyField {
                    index,
                    field: "category",
                });
            }
            if item.category == ALL_CATEGORIES {
                return Err(CatalogError::ReservedCategory(item.id.to_string()));
            }
            if !seen.insert(item.id.as_str()) {
                return Err(CatalogError::DuplicateId(item.id.to_string()));
            }
        }

        Ok(Catalog { items })
    }

    /// Parse catalog TOML
    pub fn from_toml_str(text: &str) -> Result<Self, CatalogError> {
        let file: CatalogFile = toml::from_str(text)?;
        Catalog::new(file.items)
    }

    /// Read and parse a catalog file
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let text = fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let catalog = Catalog::from_toml_str(&text)?;
        tracing::info!(path = %path.display(), items = catalog.len(), "loaded catalog");
        Ok(catalog)
    }

    /// Built-in catalog used when no file is supplied
    pub fn sample() -> Self {
        Catalog {
            items: vec![
                Item::new("tent", "Two-person tent", "camping", 4, "Dome tent with rain fly"),
                Item::new("sleeping-bag", "Sleeping bag", "camping", 6, "Rated down to -5 C"),
                Item::new("lantern", "LED lantern", "camping", 10, "Rechargeable, 300 lumen"),
                Item::new("kettle", "Camp kettle", "kitchen", 3, "1.2 litre steel kettle"),
                Item::new("cooler", "Cooler box", "kitchen", 2, "45 litre, keeps ice two days"),
                Item::new("lemonade", "Lemonade crate", "beverages", 8, "Twelve bottles"),
                Item::new("cola", "Cola crate", "beverages", 5, "Twelve bottles"),
            ],
        }
    }

    pub fn items(&self) -> &[Item] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Distinct categories, in order of first appearance
    pub fn categories(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for item in &self.items {
            if !categories.contains(&item.category) {
                categories.push(item.category.clone());
            }
        }
        categories
    }

    pub fn into_items(self) -> Vec<Item> {
        self.items
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_catalog() {
        let catalog = Catalog::from_toml_str(
            r#"
            [[item]]
            id = "tent"
            title = "Tent"
            category = "camping"
            stock = 4

            [[item]]
            id = "cola"
            title = "Cola"
            category = "beverages"
            stock = 5
            description = "Twelve bottles"
            "#,
        )
        .unwrap();

        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.items()[0].id, ItemId::from("tent"));
        assert_eq!(catalog.items()[0].description, "");
        assert_eq!(catalog.items()[1].stock, 5);
    }

    #[test]
    fn test_empty_catalog_rejected() {
        assert!(matches!(
            Catalog::from_toml_str(""),
            Err(CatalogError::Empty)
        ));
    }

    #[test]
    fn test_duplicate_id_rejected() {
        let result = Catalog::new(vec![
            Item::new("tent", "Tent", "camping", 1, ""),
            Item::new("tent", "Other tent", "camping", 2, ""),
        ]);
        assert!(matches!(result, Err(CatalogError::DuplicateId(ref id)) if id == "tent"));
    }

    #[test]
    fn test_reserved_category_rejected() {
        let result = Catalog::new(vec![Item::new("x", "X", "all", 1, "")]);
        assert!(matches!(result, Err(CatalogError::ReservedCategory(_))));
    }

    #[test]
    fn test_blank_category_rejected() {
        let result = Catalog::new(vec![Item::new("x", "X", "  ", 1, "")]);
        assert!(matches!(
            result,
            Err(CatalogError::EmptyField {
                index: 0,
                field: "category"
            })
        ));
    }

    #[test]
    fn test_bad_toml_is_parse_error() {
        let result = Catalog::from_toml_str("[[item]]\nid = 3");
        assert!(matches!(result, Err(CatalogError::Parse(_))));
    }

    #[test]
    fn test_categories_in_first_appearance_order() {
        let catalog = Catalog::sample();
        assert_eq!(catalog.categories(), vec!["camping", "kitchen", "beverages"]);
    }

    #[test]
    fn test_sample_is_valid() {
        let sample = Catalog::sample();
        assert!(Catalog::new(sample.items().to_vec()).is_ok());
    }
}
