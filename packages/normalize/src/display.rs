//! Relabeled rows in the source column layout.
//!
//! The dashboard tables show each dataset with its original columns, but
//! with district names, policy descriptions and statuses replaced by their
//! canonical labels. [`display_rows`] produces exactly those rows. They are
//! valid input for [`crate::normalize_dataset`] again, and normalizing them
//! a second time leaves every label unchanged.

use seoul_dust_normalize_models::NormalizedDataset;
use serde_json::{Map, Value, json};

use crate::hour::HOUR_FIELD;
use crate::row::{
    AVG_DUST_FIELD, AVG_HEAVY_TRAFFIC_FIELD, AVG_TRAFFIC_FIELD, CATALOG_CATEGORY_FIELD,
    DISTRICT_NAME_FIELD, GARAGE_AREA_FIELD, POLICY_STATUS_FIELD, POLICY_TYPES_FIELD,
    POPULATION_FIELD, ROAD_AREA_FIELD,
};

/// Converts a normalized dataset back into rows keyed by source column,
/// carrying canonical labels.
#[must_use]
pub fn display_rows(dataset: &NormalizedDataset) -> Vec<Value> {
    match dataset {
        NormalizedDataset::TrafficByHour(report) => report
            .records
            .iter()
            .map(|r| {
                json!({
                    HOUR_FIELD: r.hour_label,
                    AVG_TRAFFIC_FIELD: r.avg_traffic,
                })
            })
            .collect(),
        NormalizedDataset::HeavyTrafficVsDust(report) => report
            .records
            .iter()
            .map(|r| {
                json!({
                    DISTRICT_NAME_FIELD: r.district_name.label(),
                    AVG_HEAVY_TRAFFIC_FIELD: r.avg_heavy_traffic,
                    AVG_DUST_FIELD: r.avg_dust,
                })
            })
            .collect(),
        NormalizedDataset::DustTrafficPolicy(report) => report
            .records
            .iter()
            .map(|r| {
                let mut row = Map::new();
                row.insert(
                    DISTRICT_NAME_FIELD.to_owned(),
                    json!(r.dust.district_name.label()),
                );
                row.insert(
                    AVG_HEAVY_TRAFFIC_FIELD.to_owned(),
                    json!(r.dust.avg_heavy_traffic),
                );
                row.insert(AVG_DUST_FIELD.to_owned(), json!(r.dust.avg_dust));
                row.insert(
                    POLICY_TYPES_FIELD.to_owned(),
                    json!(r.policy_category.as_ref()),
                );
                if let Some(category) = r.catalog_category {
                    row.insert(CATALOG_CATEGORY_FIELD.to_owned(), json!(category.as_ref()));
                }
                Value::Object(row)
            })
            .collect(),
        NormalizedDataset::PolicyVsDust(report) => report
            .records
            .iter()
            .map(|r| {
                json!({
                    DISTRICT_NAME_FIELD: r.district_name.label(),
                    AVG_DUST_FIELD: r.avg_dust,
                    ROAD_AREA_FIELD: r.road_area,
                    GARAGE_AREA_FIELD: r.garage_area,
                    POLICY_STATUS_FIELD: r.policy_status.as_ref(),
                })
            })
            .collect(),
        NormalizedDataset::PopulationVsDust(report) => report
            .records
            .iter()
            .map(|r| {
                json!({
                    DISTRICT_NAME_FIELD: r.district_name.label(),
                    POPULATION_FIELD: r.population,
                    AVG_DUST_FIELD: r.avg_dust,
                })
            })
            .collect(),
    }
}
