//! Category filter selection

use crate::catalog::ALL_CATEGORIES;
use std::fmt;

/// Current value of the category selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum CategoryFilter {
    /// Show every item wrapper
    #[default]
    All,
    /// Show only wrappers tagged with this category
    Category(String),
}

impl CategoryFilter {
    /// Selector value as written on the page; `"all"` selects [`CategoryFilter::All`]
    pub fn from_value(value: &str) -> Self {
        if value == ALL_CATEGORIES {
            CategoryFilter::All
        } else {
            CategoryFilter::Category(value.to_string())
        }
    }

    pub fn as_value(&self) -> &str {
        match self {
            CategoryFilter::All => ALL_CATEGORIES,
            CategoryFilter::Category(name) => name,
        }
    }

    /// Whether a wrapper tagged `category` is shown under this selection
    pub fn matches(&self, category: &str) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Category(name) => name == category,
        }
    }
}

impl fmt::Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_value())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_matches_everything() {
        let filter = CategoryFilter::from_value("all");
        assert_eq!(filter, CategoryFilter::All);
        assert!(filter.matches("beverages"));
        assert!(filter.matches(""));
    }

    #[test]
    fn test_category_matches_exactly() {
        let filter = CategoryFilter::from_value("beverages");
        assert!(filter.matches("beverages"));
        assert!(!filter.matches("Beverages"));
        assert!(!filter.matches("kitchen"));
        assert_eq!(filter.to_string(), "beverages");
    }
}
