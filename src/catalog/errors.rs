//! Errors raised while loading a catalog file

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Everything that can go wrong between a catalog path and a validated [`Catalog`].
///
/// [`Catalog`]: super::Catalog
#[derive(Debug, Error)]
pub enum CatalogError {
    /// The catalog file could not be read
    #[error("cannot read catalog {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The file is not valid catalog TOML
    #[error("invalid catalog: {0}")]
    Parse(#[from] toml::de::Error),

    /// The catalog has no `[[item]]` entries
    #[error("catalog contains no items")]
    Empty,

    /// Two items share the same identifier
    #[error("duplicate item id '{0}'")]
    DuplicateId(String),

    /// A required text field is blank
    #[error("item #{index} has an empty {field}")]
    EmptyField { index: usize, field: &'static str },

    /// An item uses the category name reserved for the "show everything" filter
    #[error("item '{0}' uses the reserved category 'all'")]
    ReservedCategory(String),
}
