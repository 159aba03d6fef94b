//! Exact-text policy catalog.
//!
//! An alternative to the keyword rules in [`crate::policy_mapping`]: a
//! dictionary from complete policy descriptions to [`CatalogCategory`]
//! labels. It only recognizes the descriptions it lists, and its vocabulary
//! is kept apart from [`PolicyCategory`](seoul_dust_taxonomy_models::PolicyCategory).
//!
//! Catalogs are loaded from TOML:
//!
//! ```toml
//! [[entries]]
//! text = "벽면녹화, 친환경보일러 교체"
//! category = "Green Wall & Boiler"
//! ```

use std::collections::BTreeMap;

use seoul_dust_taxonomy_models::CatalogCategory;
use serde::Deserialize;

use crate::NormalizeError;

/// On-disk catalog layout.
#[derive(Debug, Deserialize)]
struct CatalogFile {
    #[serde(default)]
    entries: Vec<CatalogEntry>,
}

#[derive(Debug, Deserialize)]
struct CatalogEntry {
    text: String,
    category: CatalogCategory,
}

/// Exact-match dictionary of policy descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PolicyCatalog {
    entries: BTreeMap<String, CatalogCategory>,
}

impl PolicyCatalog {
    /// Builds a catalog from `(description, category)` pairs.
    ///
    /// Descriptions are trimmed. Listing the same description twice is
    /// allowed only if both entries agree on the category.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Catalog`] on an empty description or on
    /// conflicting entries.
    pub fn from_entries(
        entries: impl IntoIterator<Item = (String, CatalogCategory)>,
    ) -> Result<Self, NormalizeError> {
        let mut map = BTreeMap::new();

        for (text, category) in entries {
            let key = text.trim();
            if key.is_empty() {
                return Err(NormalizeError::Catalog(
                    "catalog entry has an empty description".to_owned(),
                ));
            }
            if let Some(existing) = map.insert(key.to_owned(), category)
                && existing != category
            {
                return Err(NormalizeError::Catalog(format!(
                    "{key:?} is listed as both {existing} and {category}"
                )));
            }
        }

        Ok(Self { entries: map })
    }

    /// Parses a catalog from TOML.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::Catalog`] if the TOML is malformed, names
    /// an unknown category, or has conflicting entries.
    pub fn from_toml(toml_str: &str) -> Result<Self, NormalizeError> {
        let file: CatalogFile =
            toml::de::from_str(toml_str).map_err(|e| NormalizeError::Catalog(e.to_string()))?;

        log::debug!("Loaded policy catalog with {} entries", file.entries.len());

        Self::from_entries(
            file.entries
                .into_iter()
                .map(|entry| (entry.text, entry.category)),
        )
    }

    /// Looks up a description. Only surrounding whitespace is ignored.
    #[must_use]
    pub fn classify(&self, text: &str) -> Option<CatalogCategory> {
        self.entries.get(text.trim()).copied()
    }

    /// Number of listed descriptions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the catalog lists nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
