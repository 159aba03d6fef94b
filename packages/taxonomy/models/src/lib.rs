#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Canonical vocabularies for the Seoul re-suspended dust datasets.
//!
//! Every dataset row is normalized into these shared labels so that tables
//! and chart legends group consistently: districts get their English names,
//! free-text policy descriptions collapse into a [`PolicyCategory`], and the
//! implementation status becomes a [`PolicyStatus`].

use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumString};

/// Seoul districts (자치구) that appear in the aggregated datasets.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum District {
    /// 영등포구
    Yeongdeungpo,
    /// 강남구
    Gangnam,
    /// 강서구
    Gangseo,
    /// 동작구
    Dongjak,
    /// 마포구
    Mapo,
    /// 송파구
    Songpa,
}

impl District {
    /// Returns the Korean administrative name as it appears in the source
    /// files.
    #[must_use]
    pub const fn korean_name(self) -> &'static str {
        match self {
            Self::Yeongdeungpo => "영등포구",
            Self::Gangnam => "강남구",
            Self::Gangseo => "강서구",
            Self::Dongjak => "동작구",
            Self::Mapo => "마포구",
            Self::Songpa => "송파구",
        }
    }

    /// Looks up a district by its exact Korean name.
    #[must_use]
    pub fn from_korean(name: &str) -> Option<Self> {
        Self::all()
            .iter()
            .copied()
            .find(|district| district.korean_name() == name)
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::Yeongdeungpo,
            Self::Gangnam,
            Self::Gangseo,
            Self::Dongjak,
            Self::Mapo,
            Self::Songpa,
        ]
    }
}

/// A district label after normalization.
///
/// Names outside the fixed lookup are kept verbatim rather than dropped, so
/// an unlisted district still shows up in tables under its source name.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DistrictName {
    /// One of the six mapped districts.
    Known(District),
    /// Any other name, carried through unchanged.
    Unlisted(String),
}

impl DistrictName {
    /// Returns the display label: the English name for known districts,
    /// the original text otherwise.
    #[must_use]
    pub fn label(&self) -> &str {
        match self {
            Self::Known(district) => district.as_ref(),
            Self::Unlisted(name) => name,
        }
    }

    /// Returns the mapped district, if any.
    #[must_use]
    pub const fn district(&self) -> Option<District> {
        match self {
            Self::Known(district) => Some(*district),
            Self::Unlisted(_) => None,
        }
    }
}

impl std::fmt::Display for DistrictName {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Whether a district implemented the eco-friendly boiler replacement policy.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum PolicyStatus {
    /// 친환경보일러 교체 시행
    Implemented,
    /// 미시행
    #[serde(rename = "Not Implemented")]
    #[strum(serialize = "Not Implemented")]
    NotImplemented,
    /// Any status text that is not one of the two known phrases
    Unknown,
}

impl PolicyStatus {
    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[Self::Implemented, Self::NotImplemented, Self::Unknown]
    }
}

/// Coarse policy grouping derived from free-text policy descriptions.
///
/// Variant order is the order in which the keyword rules are evaluated.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum PolicyCategory {
    /// Green walls (벽면녹화) and eco-friendly boilers (보일러)
    #[serde(rename = "Green Wall & Boiler")]
    #[strum(serialize = "Green Wall & Boiler")]
    GreenWallBoiler,
    /// Dust barriers (방진시설) and warning signs (경고표지)
    #[serde(rename = "Dust Barrier & Sign")]
    #[strum(serialize = "Dust Barrier & Sign")]
    DustBarrierSign,
    /// Cooling fog (쿨링포그) and green space (녹지)
    #[serde(rename = "Etc (CoolingFog, GreenSpace)")]
    #[strum(serialize = "Etc (CoolingFog, GreenSpace)")]
    MixedMisc,
    /// Vehicle entry limits (차량진입), reduction gear (저감) and filters (필터)
    #[serde(rename = "Vehicle Limit & Sprayers")]
    #[strum(serialize = "Vehicle Limit & Sprayers")]
    VehicleLimitSprayer,
    /// Descriptions that match none of the keyword rules
    Other,
}

impl PolicyCategory {
    /// Returns all variants of this enum, in rule order.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::GreenWallBoiler,
            Self::DustBarrierSign,
            Self::MixedMisc,
            Self::VehicleLimitSprayer,
            Self::Other,
        ]
    }
}

/// Categories of the exact-text policy catalog.
///
/// This vocabulary is deliberately separate from [`PolicyCategory`]: the
/// catalog only recognizes the exact descriptions it lists, and its labels
/// do not line up one-to-one with the keyword categories.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
pub enum CatalogCategory {
    #[serde(rename = "Green Wall & Boiler")]
    #[strum(serialize = "Green Wall & Boiler")]
    GreenWallBoiler,
    #[serde(rename = "Dust Barrier & Warning")]
    #[strum(serialize = "Dust Barrier & Warning")]
    DustBarrierWarning,
    #[serde(rename = "Mixed Policies")]
    #[strum(serialize = "Mixed Policies")]
    MixedPolicies,
    #[serde(rename = "Advanced Multiple")]
    #[strum(serialize = "Advanced Multiple")]
    AdvancedMultiple,
}

/// The pre-aggregated datasets, in dashboard order.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    AsRefStr,
)]
#[serde(rename_all = "kebab-case")]
#[strum(serialize_all = "kebab-case")]
pub enum DatasetKind {
    /// Average traffic volume per hour of day
    TrafficByHour,
    /// Heavy-vehicle traffic against dust per district
    HeavyTrafficVsDust,
    /// Heavy-vehicle traffic, dust and policy descriptions per district
    DustTrafficPolicy,
    /// Boiler policy status, dust and land use per district
    PolicyVsDust,
    /// Population against dust per district
    PopulationVsDust,
}

impl DatasetKind {
    /// File name of the dataset inside the data directory.
    #[must_use]
    pub const fn default_file_name(self) -> &'static str {
        match self {
            Self::TrafficByHour => "pattern1_avg_traffic_by_hour.csv",
            Self::HeavyTrafficVsDust => "pattern2_traffic_vs_dust.csv",
            Self::DustTrafficPolicy => "pattern3_dust_traffic_policy.csv",
            Self::PolicyVsDust => "pattern5_policy_vs_dust.csv",
            Self::PopulationVsDust => "pattern6_population_vs_dust.csv",
        }
    }

    /// Columns every row of this dataset must carry.
    #[must_use]
    pub const fn columns(self) -> &'static [&'static str] {
        match self {
            Self::TrafficByHour => &["hour", "avg_traffic"],
            Self::HeavyTrafficVsDust => &["district_name", "avg_heavy_traffic", "avg_dust"],
            Self::DustTrafficPolicy => &[
                "district_name",
                "avg_heavy_traffic",
                "avg_dust",
                "policy_types",
            ],
            Self::PolicyVsDust => &[
                "district_name",
                "avg_dust",
                "road_area",
                "garage_area",
                "policy_status",
            ],
            Self::PopulationVsDust => &["district_name", "population", "avg_dust"],
        }
    }

    /// Human-readable title.
    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::TrafficByHour => "Average traffic volume by hour",
            Self::HeavyTrafficVsDust => "Heavy traffic vs dust",
            Self::DustTrafficPolicy => "Traffic, dust and policy types",
            Self::PolicyVsDust => "Dust and land use by policy status",
            Self::PopulationVsDust => "Population vs dust",
        }
    }

    /// Returns all variants of this enum.
    #[must_use]
    pub const fn all() -> &'static [Self] {
        &[
            Self::TrafficByHour,
            Self::HeavyTrafficVsDust,
            Self::DustTrafficPolicy,
            Self::PolicyVsDust,
            Self::PopulationVsDust,
        ]
    }
}
