//! Per-dataset normalization.
//!
//! Reads every raw row of one dataset, applies the transformations that
//! dataset needs and collects the results into a [`NormalizedDataset`].
//! Rows that fail are either fatal or skipped, depending on
//! [`NormalizeOptions::on_invalid`].

use seoul_dust_normalize_models::{
    DatasetReport, DistrictDustRecord, NormalizedDataset, PolicyRecord, PolicyStatusRecord,
    PopulationRecord, SkippedRow, TrafficHourRecord,
};
use seoul_dust_taxonomy_models::DatasetKind;
use serde_json::Value;

use crate::district::{normalize_district_dust, normalize_population};
use crate::hour::{normalize_traffic_hour, sort_by_hour};
use crate::policy_mapping::normalize_policy;
use crate::row::FromRow;
use crate::status::normalize_policy_status;
use crate::{InvalidRowPolicy, NormalizeError, NormalizeOptions};

/// Normalizes every row of a dataset.
///
/// Hourly traffic is returned sorted by hour. All other datasets keep the
/// input row order.
///
/// # Errors
///
/// With [`InvalidRowPolicy::Abort`], returns [`NormalizeError::InvalidRow`]
/// for the first row that fails. With [`InvalidRowPolicy::Skip`] this never
/// fails.
pub fn normalize_dataset(
    kind: DatasetKind,
    rows: &[Value],
    options: &NormalizeOptions,
) -> Result<NormalizedDataset, NormalizeError> {
    log::debug!("Normalizing {} rows of {kind}", rows.len());

    let policy = options.on_invalid;
    let dataset = match kind {
        DatasetKind::TrafficByHour => {
            let mut report = normalize_rows(kind, rows, policy, |row| {
                normalize_traffic_hour(&TrafficHourRecord::from_row(row)?)
            })?;
            sort_by_hour(&mut report.records);
            NormalizedDataset::TrafficByHour(report)
        }
        DatasetKind::HeavyTrafficVsDust => {
            NormalizedDataset::HeavyTrafficVsDust(normalize_rows(kind, rows, policy, |row| {
                Ok(normalize_district_dust(&DistrictDustRecord::from_row(row)?))
            })?)
        }
        DatasetKind::DustTrafficPolicy => {
            let catalog = options.catalog.as_ref();
            NormalizedDataset::DustTrafficPolicy(normalize_rows(kind, rows, policy, |row| {
                Ok(normalize_policy(&PolicyRecord::from_row(row)?, catalog))
            })?)
        }
        DatasetKind::PolicyVsDust => {
            NormalizedDataset::PolicyVsDust(normalize_rows(kind, rows, policy, |row| {
                Ok(normalize_policy_status(&PolicyStatusRecord::from_row(row)?))
            })?)
        }
        DatasetKind::PopulationVsDust => {
            NormalizedDataset::PopulationVsDust(normalize_rows(kind, rows, policy, |row| {
                Ok(normalize_population(&PopulationRecord::from_row(row)?))
            })?)
        }
    };

    if !dataset.skipped().is_empty() {
        log::warn!(
            "{kind}: skipped {} of {} rows",
            dataset.skipped().len(),
            rows.len()
        );
    }

    Ok(dataset)
}

fn normalize_rows<T>(
    kind: DatasetKind,
    rows: &[Value],
    policy: InvalidRowPolicy,
    normalize: impl Fn(&Value) -> Result<T, NormalizeError>,
) -> Result<DatasetReport<T>, NormalizeError> {
    let mut records = Vec::with_capacity(rows.len());
    let mut skipped = Vec::new();

    for (index, row) in rows.iter().enumerate() {
        match normalize(row) {
            Ok(record) => records.push(record),
            Err(e) => match policy {
                InvalidRowPolicy::Abort => {
                    return Err(NormalizeError::InvalidRow {
                        index,
                        source: Box::new(e),
                    });
                }
                InvalidRowPolicy::Skip => {
                    log::warn!("{kind}: skipping row {index}: {e}");
                    skipped.push(SkippedRow {
                        index,
                        reason: e.to_string(),
                    });
                }
            },
        }
    }

    Ok(DatasetReport { records, skipped })
}
