#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Raw dataset rows and their normalized counterparts.
//!
//! Raw records hold the source values exactly as read. Normalized records
//! keep that raw text next to each derived label, so nothing from the
//! source is lost when a name or description gets relabeled.

use seoul_dust_taxonomy_models::{
    CatalogCategory, DatasetKind, DistrictName, PolicyCategory, PolicyStatus,
};
use serde::{Deserialize, Serialize};

// ── Raw records ──────────────────────────────────────────────────────────

/// Average traffic for one hour-of-day bucket.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TrafficHourRecord {
    /// Hour label such as `"14시"`.
    pub hour_label: String,
    pub avg_traffic: f64,
}

/// Heavy-vehicle traffic and dust for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DistrictDustRecord {
    /// Korean district name as it appears in the source.
    pub district_name_raw: String,
    pub avg_heavy_traffic: f64,
    pub avg_dust: f64,
}

/// A [`DistrictDustRecord`] with the district's free-text policy list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyRecord {
    #[serde(flatten)]
    pub dust: DistrictDustRecord,
    /// Comma- or space-separated Korean policy names, e.g.
    /// `"벽면녹화, 친환경보일러 교체"`.
    pub policy_types_raw: String,
    /// Catalog category carried by a row that was already normalized once.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_category_raw: Option<String>,
}

/// Dust, land use and boiler-policy status for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyStatusRecord {
    pub district_name_raw: String,
    pub avg_dust: f64,
    pub road_area: f64,
    pub garage_area: f64,
    pub policy_status_raw: String,
}

/// Population and dust for one district.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PopulationRecord {
    pub district_name_raw: String,
    pub population: f64,
    pub avg_dust: f64,
}

// ── Normalized records ───────────────────────────────────────────────────

/// A [`TrafficHourRecord`] with its numeric hour.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedTrafficHour {
    pub hour_label: String,
    /// Hour of day in `0..=23`, taken from the label's first digit run.
    pub hour_index: u8,
    pub avg_traffic: f64,
}

/// A [`DistrictDustRecord`] with its mapped district label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedDistrictDust {
    pub district_name_raw: String,
    pub district_name: DistrictName,
    pub avg_heavy_traffic: f64,
    pub avg_dust: f64,
}

/// A [`PolicyRecord`] with its district label and policy category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPolicy {
    #[serde(flatten)]
    pub dust: NormalizedDistrictDust,
    pub policy_types_raw: String,
    /// Result of the ordered keyword rules.
    pub policy_category: PolicyCategory,
    /// Result of the exact-text catalog, when one was supplied and the
    /// description is listed in it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub catalog_category: Option<CatalogCategory>,
}

/// A [`PolicyStatusRecord`] with its district label and status.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPolicyStatus {
    pub district_name_raw: String,
    pub district_name: DistrictName,
    pub avg_dust: f64,
    pub road_area: f64,
    pub garage_area: f64,
    pub policy_status_raw: String,
    pub policy_status: PolicyStatus,
}

/// A [`PopulationRecord`] with its district label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NormalizedPopulation {
    pub district_name_raw: String,
    pub district_name: DistrictName,
    pub population: f64,
    pub avg_dust: f64,
}

// ── Dataset results ──────────────────────────────────────────────────────

/// A row that was dropped during dataset normalization.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SkippedRow {
    /// Zero-based position of the row in the input.
    pub index: usize,
    /// Why the row was rejected.
    pub reason: String,
}

/// Normalized rows of one dataset plus the rows that were skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DatasetReport<T> {
    pub records: Vec<T>,
    #[serde(default)]
    pub skipped: Vec<SkippedRow>,
}

impl<T> DatasetReport<T> {
    /// Number of rows that made it through normalization.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether no row made it through normalization.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// The normalized form of one dataset, one variant per [`DatasetKind`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "report", rename_all = "kebab-case")]
pub enum NormalizedDataset {
    TrafficByHour(DatasetReport<NormalizedTrafficHour>),
    HeavyTrafficVsDust(DatasetReport<NormalizedDistrictDust>),
    DustTrafficPolicy(DatasetReport<NormalizedPolicy>),
    PolicyVsDust(DatasetReport<NormalizedPolicyStatus>),
    PopulationVsDust(DatasetReport<NormalizedPopulation>),
}

impl NormalizedDataset {
    /// Returns which dataset this is.
    #[must_use]
    pub const fn kind(&self) -> DatasetKind {
        match self {
            Self::TrafficByHour(_) => DatasetKind::TrafficByHour,
            Self::HeavyTrafficVsDust(_) => DatasetKind::HeavyTrafficVsDust,
            Self::DustTrafficPolicy(_) => DatasetKind::DustTrafficPolicy,
            Self::PolicyVsDust(_) => DatasetKind::PolicyVsDust,
            Self::PopulationVsDust(_) => DatasetKind::PopulationVsDust,
        }
    }

    /// Number of normalized rows.
    #[must_use]
    pub fn len(&self) -> usize {
        match self {
            Self::TrafficByHour(report) => report.len(),
            Self::HeavyTrafficVsDust(report) => report.len(),
            Self::DustTrafficPolicy(report) => report.len(),
            Self::PolicyVsDust(report) => report.len(),
            Self::PopulationVsDust(report) => report.len(),
        }
    }

    /// Whether the dataset has no normalized rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Rows that were skipped while normalizing.
    #[must_use]
    pub fn skipped(&self) -> &[SkippedRow] {
        match self {
            Self::TrafficByHour(report) => &report.skipped,
            Self::HeavyTrafficVsDust(report) => &report.skipped,
            Self::DustTrafficPolicy(report) => &report.skipped,
            Self::PolicyVsDust(report) => &report.skipped,
            Self::PopulationVsDust(report) => &report.skipped,
        }
    }
}

/// Mean of one measurement over the rows sharing a label.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GroupSummary {
    pub label: String,
    pub count: usize,
    pub mean: f64,
}

#[cfg(test)]
mod tests {
    use seoul_dust_taxonomy_models::District;

    use super::*;

    #[test]
    fn policy_record_flattens_dust_fields() {
        let record = NormalizedPolicy {
            dust: NormalizedDistrictDust {
                district_name_raw: "강남구".to_string(),
                district_name: DistrictName::Known(District::Gangnam),
                avg_heavy_traffic: 1200.0,
                avg_dust: 45.5,
            },
            policy_types_raw: "벽면녹화".to_string(),
            policy_category: PolicyCategory::GreenWallBoiler,
            catalog_category: None,
        };

        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["districtName"], "Gangnam");
        assert_eq!(value["districtNameRaw"], "강남구");
        assert_eq!(value["policyCategory"], "Green Wall & Boiler");
        assert!(value.get("catalogCategory").is_none());

        let back: NormalizedPolicy = serde_json::from_value(value).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn dataset_reports_kind_and_counts() {
        let dataset = NormalizedDataset::TrafficByHour(DatasetReport {
            records: vec![NormalizedTrafficHour {
                hour_label: "1시".to_string(),
                hour_index: 1,
                avg_traffic: 10.0,
            }],
            skipped: vec![SkippedRow {
                index: 1,
                reason: "missing hour".to_string(),
            }],
        });

        assert_eq!(dataset.kind(), DatasetKind::TrafficByHour);
        assert_eq!(dataset.len(), 1);
        assert!(!dataset.is_empty());
        assert_eq!(dataset.skipped().len(), 1);

        let value = serde_json::to_value(&dataset).unwrap();
        assert_eq!(value["kind"], "traffic-by-hour");
        assert_eq!(value["report"]["records"][0]["hourIndex"], 1);
    }
}
