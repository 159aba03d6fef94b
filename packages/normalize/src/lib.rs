#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Normalization of the Seoul traffic and re-suspended dust datasets.
//!
//! Every function here is pure: raw rows go in, normalized records come
//! out, and nothing is read from or written to disk. Rows arrive as
//! [`serde_json::Value`] objects keyed by column name, which is the shape
//! any CSV or JSON reader can hand over.
//!
//! The individual transformations live in their own modules:
//!
//! * [`hour`]: hour labels like `"14시"` to numeric hours
//! * [`district`]: Korean district names to English labels
//! * [`status`]: boiler policy status phrases to [`PolicyStatus`]
//! * [`policy_mapping`]: free-text policy lists to [`PolicyCategory`]
//! * [`catalog`]: the exact-text policy catalog
//!
//! [`dataset::normalize_dataset`] ties them together per [`DatasetKind`].
//!
//! [`PolicyStatus`]: seoul_dust_taxonomy_models::PolicyStatus
//! [`PolicyCategory`]: seoul_dust_taxonomy_models::PolicyCategory
//! [`DatasetKind`]: seoul_dust_taxonomy_models::DatasetKind

pub mod catalog;
pub mod dataset;
pub mod display;
pub mod district;
pub mod hour;
pub mod policy_mapping;
pub mod row;
pub mod status;
pub mod summary;

pub use catalog::PolicyCatalog;
pub use dataset::normalize_dataset;

/// Errors that can occur while normalizing records.
#[derive(Debug, thiserror::Error)]
pub enum NormalizeError {
    /// A required field is missing or has the wrong shape.
    #[error("Invalid record: `{field}` {reason}")]
    InvalidRecord {
        /// Column the problem was found in.
        field: String,
        /// What was wrong with it.
        reason: String,
    },

    /// An invalid record, annotated with its position in the dataset.
    #[error("Row {index}: {source}")]
    InvalidRow {
        /// Zero-based row position.
        index: usize,
        /// The underlying record error.
        source: Box<Self>,
    },

    /// The policy catalog could not be loaded.
    #[error("Catalog error: {0}")]
    Catalog(String),
}

impl NormalizeError {
    /// Shorthand for [`NormalizeError::InvalidRecord`].
    pub(crate) fn invalid(field: &str, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            field: field.to_owned(),
            reason: reason.into(),
        }
    }
}

/// What to do with a row that fails to normalize.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum InvalidRowPolicy {
    /// Stop and return the first row error.
    #[default]
    Abort,
    /// Drop the row, log it and record it in the report.
    Skip,
}

/// Options for [`normalize_dataset`].
#[derive(Debug, Clone, Default)]
pub struct NormalizeOptions {
    /// Handling of rows that fail to normalize.
    pub on_invalid: InvalidRowPolicy,
    /// Exact-text catalog applied to policy descriptions, if any.
    pub catalog: Option<PolicyCatalog>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn row_error_mentions_index_and_field() {
        let err = NormalizeError::InvalidRow {
            index: 3,
            source: Box::new(NormalizeError::invalid("avg_dust", "is missing")),
        };
        assert_eq!(
            err.to_string(),
            "Row 3: Invalid record: `avg_dust` is missing"
        );
    }

    #[test]
    fn default_options_abort_without_catalog() {
        let options = NormalizeOptions::default();
        assert_eq!(options.on_invalid, InvalidRowPolicy::Abort);
        assert!(options.catalog.is_none());
    }
}
