//! Grouped means over normalized datasets.
//!
//! The dashboard charts color points and bars by a derived label: policy
//! category, policy status or district. These helpers compute the mean of
//! the plotted measurement per label. Groups are listed in order of first
//! appearance.

use std::collections::HashMap;

use seoul_dust_normalize_models::{
    GroupSummary, NormalizedDataset, NormalizedPolicy, NormalizedPolicyStatus,
};

/// Mean `avg_dust` per keyword policy category.
#[must_use]
pub fn mean_dust_by_policy_category(records: &[NormalizedPolicy]) -> Vec<GroupSummary> {
    group_means(
        records
            .iter()
            .map(|r| (r.policy_category.as_ref(), r.dust.avg_dust)),
    )
}

/// Mean `avg_dust` per policy status.
#[must_use]
pub fn mean_dust_by_policy_status(records: &[NormalizedPolicyStatus]) -> Vec<GroupSummary> {
    group_means(
        records
            .iter()
            .map(|r| (r.policy_status.as_ref(), r.avg_dust)),
    )
}

/// The grouping each chart uses for its dataset.
///
/// Hourly traffic is grouped by hour label (mean traffic), the policy
/// datasets by category or status, and the rest by district.
#[must_use]
pub fn summarize(dataset: &NormalizedDataset) -> Vec<GroupSummary> {
    match dataset {
        NormalizedDataset::TrafficByHour(report) => group_means(
            report
                .records
                .iter()
                .map(|r| (r.hour_label.as_str(), r.avg_traffic)),
        ),
        NormalizedDataset::HeavyTrafficVsDust(report) => group_means(
            report
                .records
                .iter()
                .map(|r| (r.district_name.label(), r.avg_dust)),
        ),
        NormalizedDataset::DustTrafficPolicy(report) => {
            mean_dust_by_policy_category(&report.records)
        }
        NormalizedDataset::PolicyVsDust(report) => mean_dust_by_policy_status(&report.records),
        NormalizedDataset::PopulationVsDust(report) => group_means(
            report
                .records
                .iter()
                .map(|r| (r.district_name.label(), r.avg_dust)),
        ),
    }
}

#[allow(clippy::cast_precision_loss)]
fn group_means<'a>(values: impl IntoIterator<Item = (&'a str, f64)>) -> Vec<GroupSummary> {
    let mut positions: HashMap<&str, usize> = HashMap::new();
    let mut groups: Vec<(&str, usize, f64)> = Vec::new();

    for (label, value) in values {
        if let Some(&pos) = positions.get(label) {
            groups[pos].1 += 1;
            groups[pos].2 += value;
        } else {
            positions.insert(label, groups.len());
            groups.push((label, 1, value));
        }
    }

    groups
        .into_iter()
        .map(|(label, count, sum)| GroupSummary {
            label: label.to_owned(),
            count,
            mean: sum / count as f64,
        })
        .collect()
}
