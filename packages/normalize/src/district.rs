//! District name mapping.
//!
//! Korean district names are translated to their English labels through the
//! fixed [`District`] table. Names outside the table are passed through
//! unchanged as [`DistrictName::Unlisted`], and English labels are accepted
//! as input so that mapping already-normalized data is a no-op.

use seoul_dust_normalize_models::{
    DistrictDustRecord, NormalizedDistrictDust, NormalizedPopulation, PopulationRecord,
};
use seoul_dust_taxonomy_models::{District, DistrictName};

/// Maps a raw district name to its normalized label.
#[must_use]
pub fn map_district_name(raw: &str) -> DistrictName {
    let name = raw.trim();
    District::from_korean(name)
        .or_else(|| name.parse::<District>().ok())
        .map_or_else(|| DistrictName::Unlisted(raw.to_owned()), DistrictName::Known)
}

/// Adds the district label to a heavy-traffic/dust record.
#[must_use]
pub fn normalize_district_dust(record: &DistrictDustRecord) -> NormalizedDistrictDust {
    NormalizedDistrictDust {
        district_name_raw: record.district_name_raw.clone(),
        district_name: map_district_name(&record.district_name_raw),
        avg_heavy_traffic: record.avg_heavy_traffic,
        avg_dust: record.avg_dust,
    }
}

/// Adds the district label to a population/dust record.
#[must_use]
pub fn normalize_population(record: &PopulationRecord) -> NormalizedPopulation {
    NormalizedPopulation {
        district_name_raw: record.district_name_raw.clone(),
        district_name: map_district_name(&record.district_name_raw),
        population: record.population,
        avg_dust: record.avg_dust,
    }
}
