//! Field extraction from raw dataset rows.
//!
//! A row is a JSON object keyed by column name. CSV readers produce every
//! cell as a string, so numeric columns accept either JSON numbers or
//! decimal strings. Missing, blank and ill-shaped fields are rejected with
//! [`NormalizeError::InvalidRecord`] instead of being defaulted.

use seoul_dust_normalize_models::{
    DistrictDustRecord, PolicyRecord, PolicyStatusRecord, PopulationRecord, TrafficHourRecord,
};
use serde_json::Value;

use crate::NormalizeError;
use crate::hour::HOUR_FIELD;

pub const AVG_TRAFFIC_FIELD: &str = "avg_traffic";
pub const DISTRICT_NAME_FIELD: &str = "district_name";
pub const AVG_HEAVY_TRAFFIC_FIELD: &str = "avg_heavy_traffic";
pub const AVG_DUST_FIELD: &str = "avg_dust";
pub const POLICY_TYPES_FIELD: &str = "policy_types";
pub const ROAD_AREA_FIELD: &str = "road_area";
pub const GARAGE_AREA_FIELD: &str = "garage_area";
pub const POLICY_STATUS_FIELD: &str = "policy_status";
pub const POPULATION_FIELD: &str = "population";
/// Optional column holding the exact-text catalog category.
pub const CATALOG_CATEGORY_FIELD: &str = "catalog_category";

/// A raw record that can be read from a dataset row.
pub trait FromRow: Sized {
    /// Extracts the record's fields from `row`.
    ///
    /// # Errors
    ///
    /// Returns [`NormalizeError::InvalidRecord`] for the first missing or
    /// ill-shaped field.
    fn from_row(row: &Value) -> Result<Self, NormalizeError>;
}

fn get_field<'a>(row: &'a Value, field: &str) -> Result<&'a Value, NormalizeError> {
    let object = row
        .as_object()
        .ok_or_else(|| NormalizeError::invalid(field, "cannot be read: row is not an object"))?;

    match object.get(field) {
        None | Some(Value::Null) => Err(NormalizeError::invalid(field, "is missing")),
        Some(value) => Ok(value),
    }
}

/// Reads a required text field.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidRecord`] if the field is missing, blank
/// or not a string.
pub fn get_str<'a>(row: &'a Value, field: &str) -> Result<&'a str, NormalizeError> {
    let text = get_field(row, field)?
        .as_str()
        .ok_or_else(|| NormalizeError::invalid(field, "must be text"))?;

    if text.trim().is_empty() {
        return Err(NormalizeError::invalid(field, "is empty"));
    }
    Ok(text)
}

/// Reads an optional text field. Missing, null and blank values are `None`.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidRecord`] if the field is present but not
/// a string.
pub fn get_opt_str<'a>(row: &'a Value, field: &str) -> Result<Option<&'a str>, NormalizeError> {
    match row.get(field) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(text)) if text.trim().is_empty() => Ok(None),
        Some(Value::String(text)) => Ok(Some(text)),
        Some(_) => Err(NormalizeError::invalid(field, "must be text")),
    }
}

/// Reads a required numeric field from a JSON number or a decimal string.
///
/// # Errors
///
/// Returns [`NormalizeError::InvalidRecord`] if the field is missing, blank,
/// not a number, or not finite.
pub fn get_f64(row: &Value, field: &str) -> Result<f64, NormalizeError> {
    let number = match get_field(row, field)? {
        Value::Number(number) => number
            .as_f64()
            .ok_or_else(|| NormalizeError::invalid(field, "is not representable as f64"))?,
        Value::String(text) => {
            let text = text.trim();
            if text.is_empty() {
                return Err(NormalizeError::invalid(field, "is empty"));
            }
            text.parse::<f64>()
                .map_err(|_| NormalizeError::invalid(field, format!("{text:?} is not a number")))?
        }
        _ => return Err(NormalizeError::invalid(field, "must be a number")),
    };

    if !number.is_finite() {
        return Err(NormalizeError::invalid(field, "must be finite"));
    }
    Ok(number)
}

impl FromRow for TrafficHourRecord {
    fn from_row(row: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            hour_label: get_str(row, HOUR_FIELD)?.to_owned(),
            avg_traffic: get_f64(row, AVG_TRAFFIC_FIELD)?,
        })
    }
}

impl FromRow for DistrictDustRecord {
    fn from_row(row: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            district_name_raw: get_str(row, DISTRICT_NAME_FIELD)?.to_owned(),
            avg_heavy_traffic: get_f64(row, AVG_HEAVY_TRAFFIC_FIELD)?,
            avg_dust: get_f64(row, AVG_DUST_FIELD)?,
        })
    }
}

impl FromRow for PolicyRecord {
    fn from_row(row: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            dust: DistrictDustRecord::from_row(row)?,
            policy_types_raw: get_str(row, POLICY_TYPES_FIELD)?.to_owned(),
            catalog_category_raw: get_opt_str(row, CATALOG_CATEGORY_FIELD)?.map(str::to_owned),
        })
    }
}

impl FromRow for PolicyStatusRecord {
    fn from_row(row: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            district_name_raw: get_str(row, DISTRICT_NAME_FIELD)?.to_owned(),
            avg_dust: get_f64(row, AVG_DUST_FIELD)?,
            road_area: get_f64(row, ROAD_AREA_FIELD)?,
            garage_area: get_f64(row, GARAGE_AREA_FIELD)?,
            policy_status_raw: get_str(row, POLICY_STATUS_FIELD)?.to_owned(),
        })
    }
}

impl FromRow for PopulationRecord {
    fn from_row(row: &Value) -> Result<Self, NormalizeError> {
        Ok(Self {
            district_name_raw: get_str(row, DISTRICT_NAME_FIELD)?.to_owned(),
            population: get_f64(row, POPULATION_FIELD)?,
            avg_dust: get_f64(row, AVG_DUST_FIELD)?,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn field_of(err: &NormalizeError) -> &str {
        match err {
            NormalizeError::InvalidRecord { field, .. } => field.as_str(),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn reads_numbers_from_strings_and_numbers() {
        let row = serde_json::json!({"a": "12.5", "b": 7, "c": " 3 "});
        assert!((get_f64(&row, "a").unwrap() - 12.5).abs() < f64::EPSILON);
        assert!((get_f64(&row, "b").unwrap() - 7.0).abs() < f64::EPSILON);
        assert!((get_f64(&row, "c").unwrap() - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn rejects_non_numeric_measurements() {
        let row = serde_json::json!({"a": "n/a", "b": "", "c": true, "d": "NaN", "e": null});
        for field in ["a", "b", "c", "d", "e", "missing"] {
            let err = get_f64(&row, field).unwrap_err();
            assert_eq!(field_of(&err), field);
        }
    }

    #[test]
    fn rejects_non_text_and_blank_text() {
        let row = serde_json::json!({"a": 3, "b": "   ", "c": "강남구"});
        assert!(get_str(&row, "a").is_err());
        assert!(get_str(&row, "b").is_err());
        assert!(get_str(&row, "missing").is_err());
        assert_eq!(get_str(&row, "c").unwrap(), "강남구");
    }

    #[test]
    fn rejects_rows_that_are_not_objects() {
        let row = serde_json::json!(["강남구", 1.0]);
        assert!(DistrictDustRecord::from_row(&row).is_err());
    }

    #[test]
    fn reads_policy_record() {
        let row = serde_json::json!({
            "district_name": "강남구",
            "avg_heavy_traffic": "1523.4",
            "avg_dust": "47.1",
            "policy_types": "벽면녹화, 친환경보일러 교체",
        });
        let record = PolicyRecord::from_row(&row).unwrap();
        assert_eq!(record.dust.district_name_raw, "강남구");
        assert!((record.dust.avg_heavy_traffic - 1523.4).abs() < f64::EPSILON);
        assert_eq!(record.policy_types_raw, "벽면녹화, 친환경보일러 교체");
        assert_eq!(record.catalog_category_raw, None);
    }

    #[test]
    fn reads_optional_catalog_column() {
        let row = serde_json::json!({
            "district_name": "영등포구",
            "avg_heavy_traffic": 2100,
            "avg_dust": 55.2,
            "policy_types": "Dust Barrier & Sign",
            "catalog_category": "Dust Barrier & Warning",
        });
        let record = PolicyRecord::from_row(&row).unwrap();
        assert_eq!(
            record.catalog_category_raw.as_deref(),
            Some("Dust Barrier & Warning")
        );

        let row = serde_json::json!({"catalog_category": 4});
        let err = get_opt_str(&row, CATALOG_CATEGORY_FIELD).unwrap_err();
        assert_eq!(field_of(&err), CATALOG_CATEGORY_FIELD);

        let row = serde_json::json!({"catalog_category": " "});
        assert_eq!(get_opt_str(&row, CATALOG_CATEGORY_FIELD).unwrap(), None);
    }

    #[test]
    fn reports_first_missing_field() {
        let row = serde_json::json!({"district_name": "마포구", "avg_dust": "30"});
        let err = PolicyStatusRecord::from_row(&row).unwrap_err();
        assert_eq!(field_of(&err), ROAD_AREA_FIELD);
    }

    #[test]
    fn reads_traffic_and_population_records() {
        let traffic =
            TrafficHourRecord::from_row(&serde_json::json!({"hour": "8시", "avg_traffic": "5120"}))
                .unwrap();
        assert_eq!(traffic.hour_label, "8시");

        let population = PopulationRecord::from_row(&serde_json::json!({
            "district_name": "송파구",
            "population": 656_000,
            "avg_dust": 44.0,
        }))
        .unwrap();
        assert!((population.population - 656_000.0).abs() < f64::EPSILON);
    }
}
