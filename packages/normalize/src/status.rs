//! Boiler policy status mapping.

use seoul_dust_normalize_models::{NormalizedPolicyStatus, PolicyStatusRecord};
use seoul_dust_taxonomy_models::PolicyStatus;

use crate::district::map_district_name;

/// Source phrase for districts that replaced boilers.
pub const IMPLEMENTED_PHRASE: &str = "친환경보일러 교체 시행";
/// Source phrase for districts that did not.
pub const NOT_IMPLEMENTED_PHRASE: &str = "미시행";

/// Maps a raw status phrase to a [`PolicyStatus`].
///
/// The lookup is exact apart from surrounding whitespace, which is trimmed
/// first. Only the two known phrases (and the canonical labels themselves)
/// are recognized; everything else is [`PolicyStatus::Unknown`], so
/// untranslated text never ends up next to translated labels. Inner
/// spacing must match, so `"친환경보일러  교체 시행"` is unknown.
#[must_use]
pub fn map_policy_status(raw: &str) -> PolicyStatus {
    match raw.trim() {
        IMPLEMENTED_PHRASE => PolicyStatus::Implemented,
        NOT_IMPLEMENTED_PHRASE => PolicyStatus::NotImplemented,
        other => other.parse().unwrap_or(PolicyStatus::Unknown),
    }
}

/// Adds the district label and status to a policy status record.
#[must_use]
pub fn normalize_policy_status(record: &PolicyStatusRecord) -> NormalizedPolicyStatus {
    NormalizedPolicyStatus {
        district_name_raw: record.district_name_raw.clone(),
        district_name: map_district_name(&record.district_name_raw),
        avg_dust: record.avg_dust,
        road_area: record.road_area,
        garage_area: record.garage_area,
        policy_status_raw: record.policy_status_raw.clone(),
        policy_status: map_policy_status(&record.policy_status_raw),
    }
}
