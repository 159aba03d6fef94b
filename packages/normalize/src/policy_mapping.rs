//! Policy description categorization.
//!
//! Maps free-text policy lists such as `"벽면녹화, 친환경보일러 교체"` to the
//! coarse [`PolicyCategory`] groups. Descriptions often name several
//! initiatives at once, so the rules are an ordered decision list: the first
//! rule with a matching keyword wins, even when a later rule would match too.

use seoul_dust_normalize_models::{NormalizedPolicy, PolicyRecord};
use seoul_dust_taxonomy_models::{CatalogCategory, PolicyCategory};

use crate::catalog::PolicyCatalog;
use crate::district::normalize_district_dust;

/// Keyword rules in evaluation order. A rule matches when the description
/// contains any of its keywords.
pub const POLICY_RULES: &[(&[&str], PolicyCategory)] = &[
    (&["벽면녹화", "보일러"], PolicyCategory::GreenWallBoiler),
    (&["방진시설", "경고표지"], PolicyCategory::DustBarrierSign),
    (&["쿨링포그", "녹지"], PolicyCategory::MixedMisc),
    (
        &["차량진입", "저감", "필터"],
        PolicyCategory::VehicleLimitSprayer,
    ),
];

/// Categorizes a raw policy description.
///
/// Returns [`PolicyCategory::Other`] when no rule matches. A description
/// that is already a category label maps to that category.
#[must_use]
pub fn categorize_policy(text: &str) -> PolicyCategory {
    if let Ok(category) = text.trim().parse::<PolicyCategory>() {
        return category;
    }

    POLICY_RULES
        .iter()
        .find(|(keywords, _)| contains_any(text, keywords))
        .map_or(PolicyCategory::Other, |(_, category)| *category)
}

/// Adds the district label and policy category to a policy record.
///
/// When a `catalog` is given, the description is also looked up in it and
/// the result stored separately in `catalog_category`. A row that already
/// carries a catalog label keeps it when the lookup finds nothing, so
/// normalizing relabeled rows again does not drop it.
#[must_use]
pub fn normalize_policy(record: &PolicyRecord, catalog: Option<&PolicyCatalog>) -> NormalizedPolicy {
    let catalog_category = catalog
        .and_then(|catalog| catalog.classify(&record.policy_types_raw))
        .or_else(|| {
            record
                .catalog_category_raw
                .as_deref()
                .and_then(|label| label.trim().parse::<CatalogCategory>().ok())
        });

    NormalizedPolicy {
        dust: normalize_district_dust(&record.dust),
        policy_types_raw: record.policy_types_raw.clone(),
        policy_category: categorize_policy(&record.policy_types_raw),
        catalog_category,
    }
}

/// Checks if `haystack` contains any of the given `needles`.
fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|needle| haystack.contains(needle))
}
