#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CSV reading for the `seoul_dust` command-line tool.
//!
//! Turns the pre-aggregated dataset files into the JSON rows that
//! [`seoul_dust_normalize`] works on. Every cell is kept as a trimmed
//! string; numeric parsing happens in the normalizer.

use std::io::Read;
use std::path::{Path, PathBuf};

use seoul_dust_normalize::{NormalizeError, NormalizeOptions, PolicyCatalog, normalize_dataset};
use seoul_dust_normalize_models::NormalizedDataset;
use seoul_dust_taxonomy_models::DatasetKind;

/// Directory the dataset files are read from when none is given.
pub const DEFAULT_DATA_DIR: &str = "streamlit_data";

/// Errors that can occur in the command-line tool.
#[derive(Debug, thiserror::Error)]
pub enum CliError {
    /// An I/O operation failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV parsing failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Normalization or catalog loading failed.
    #[error(transparent)]
    Normalize(#[from] NormalizeError),

    /// JSON output could not be written.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The CSV file lacks columns the dataset needs.
    #[error("{}: missing column(s) {columns:?}", path.display())]
    MissingColumns {
        /// File that was read.
        path: PathBuf,
        /// Required columns not present in the header row.
        columns: Vec<String>,
    },
}

/// Reads CSV data into one JSON object per record, keyed by header.
///
/// A leading UTF-8 byte order mark is dropped from the first header, and
/// headers and cells are trimmed.
///
/// # Errors
///
/// Returns [`CliError::Csv`] if the data is not valid CSV.
pub fn read_csv_rows(reader: impl Read) -> Result<Vec<serde_json::Value>, CliError> {
    let mut reader = csv::ReaderBuilder::new().flexible(true).from_reader(reader);

    let headers: Vec<String> = reader
        .headers()?
        .iter()
        .map(|h| h.trim_start_matches('\u{feff}').trim().to_owned())
        .collect();

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result?;

        let mut map = serde_json::Map::new();
        for (i, header) in headers.iter().enumerate() {
            let value = record.get(i).unwrap_or("").trim().to_owned();
            map.insert(header.clone(), serde_json::Value::String(value));
        }
        rows.push(serde_json::Value::Object(map));
    }

    Ok(rows)
}

/// Reads a dataset file and checks that it has the columns `kind` needs.
///
/// # Errors
///
/// Returns [`CliError`] if the file cannot be read, is not valid CSV, or
/// lacks a required column.
pub fn read_dataset_file(kind: DatasetKind, path: &Path) -> Result<Vec<serde_json::Value>, CliError> {
    log::info!("Reading {kind} from {}", path.display());

    let file = std::fs::File::open(path)?;
    let rows = read_csv_rows(file)?;

    if let Some(first) = rows.first().and_then(serde_json::Value::as_object) {
        let missing: Vec<String> = kind
            .columns()
            .iter()
            .filter(|column| !first.contains_key(**column))
            .map(|column| (*column).to_owned())
            .collect();
        if !missing.is_empty() {
            return Err(CliError::MissingColumns {
                path: path.to_path_buf(),
                columns: missing,
            });
        }
    }

    log::debug!("Read {} rows from {}", rows.len(), path.display());
    Ok(rows)
}

/// Loads a policy catalog from a TOML file.
///
/// # Errors
///
/// Returns [`CliError`] if the file cannot be read or is not a valid
/// catalog.
pub fn load_catalog(path: &Path) -> Result<PolicyCatalog, CliError> {
    let toml_str = std::fs::read_to_string(path)?;
    let catalog = PolicyCatalog::from_toml(&toml_str)?;
    log::info!(
        "Loaded {} catalog entries from {}",
        catalog.len(),
        path.display()
    );
    Ok(catalog)
}

/// Reads and normalizes one dataset file.
///
/// # Errors
///
/// Returns [`CliError`] if reading fails, or if normalization aborts on an
/// invalid row.
pub fn normalize_file(
    kind: DatasetKind,
    path: &Path,
    options: &NormalizeOptions,
) -> Result<NormalizedDataset, CliError> {
    let rows = read_dataset_file(kind, path)?;
    let dataset = normalize_dataset(kind, &rows, options)?;
    log::info!(
        "{kind}: {} rows normalized, {} skipped",
        dataset.len(),
        dataset.skipped().len()
    );
    Ok(dataset)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_bom_and_trims_cells() {
        let data = "\u{feff}hour,avg_traffic\n 1시 , 2900 \n2시,3100\n";
        let rows = read_csv_rows(data.as_bytes()).unwrap();

        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0]["hour"], "1시");
        assert_eq!(rows[0]["avg_traffic"], "2900");
        assert_eq!(rows[1]["hour"], "2시");
    }

    #[test]
    fn short_records_get_empty_cells() {
        let data = "district_name,avg_heavy_traffic,avg_dust\n강남구,1500\n";
        let rows = read_csv_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0]["avg_dust"], "");
    }

    #[test]
    fn quoted_policy_lists_stay_whole() {
        let data = "district_name,avg_heavy_traffic,avg_dust,policy_types\n\
                    강남구,1500,48,\"벽면녹화, 친환경보일러 교체\"\n";
        let rows = read_csv_rows(data.as_bytes()).unwrap();
        assert_eq!(rows[0]["policy_types"], "벽면녹화, 친환경보일러 교체");

        let dataset =
            normalize_dataset(DatasetKind::DustTrafficPolicy, &rows, &NormalizeOptions::default())
                .unwrap();
        assert_eq!(dataset.len(), 1);
    }

    fn scratch_dir(name: &str) -> PathBuf {
        let tmp = std::env::temp_dir().join(name);
        let _ = std::fs::remove_dir_all(&tmp);
        std::fs::create_dir_all(&tmp).unwrap();
        tmp
    }

    #[test]
    fn missing_columns_are_reported() {
        let tmp = scratch_dir("seoul_dust_cli_missing_columns");
        let path = tmp.join("heavy.csv");
        std::fs::write(&path, "district_name,avg_heavy_traffic\n강남구,1500\n").unwrap();

        let err = read_dataset_file(DatasetKind::HeavyTrafficVsDust, &path).unwrap_err();
        match &err {
            CliError::MissingColumns { path: reported, columns } => {
                assert_eq!(reported, &path);
                assert_eq!(columns, &["avg_dust".to_string()]);
            }
            other => panic!("unexpected error: {other}"),
        }
        assert!(err.to_string().contains("heavy.csv"));
        assert!(err.to_string().contains("avg_dust"));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn missing_file_is_io_error() {
        let tmp = scratch_dir("seoul_dust_cli_missing_file");
        let err = read_dataset_file(DatasetKind::TrafficByHour, &tmp.join("nope.csv")).unwrap_err();
        assert!(matches!(err, CliError::Io(_)));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn loads_catalog_file() {
        let tmp = scratch_dir("seoul_dust_cli_catalog");
        let path = tmp.join("catalog.toml");
        std::fs::write(
            &path,
            "[[entries]]\n\
             text = \"방진시설, 경고표지\"\n\
             category = \"Dust Barrier & Warning\"\n",
        )
        .unwrap();

        let catalog = load_catalog(&path).unwrap();
        assert_eq!(catalog.len(), 1);
        assert_eq!(
            catalog.classify("방진시설, 경고표지"),
            Some(seoul_dust_taxonomy_models::CatalogCategory::DustBarrierWarning)
        );

        std::fs::write(&path, "[[entries]]\ntext = \"x\"\ncategory = \"Nope\"\n").unwrap();
        assert!(matches!(
            load_catalog(&path).unwrap_err(),
            CliError::Normalize(NormalizeError::Catalog(_))
        ));

        let _ = std::fs::remove_dir_all(&tmp);
    }

    #[test]
    fn normalizes_file_with_skip_and_abort() {
        let tmp = scratch_dir("seoul_dust_cli_normalize_file");
        let path = tmp.join("traffic.csv");
        std::fs::write(
            &path,
            "\u{feff}hour,avg_traffic\n10시,8800\n새벽,100\n2시,3100\n",
        )
        .unwrap();

        let skip = NormalizeOptions {
            on_invalid: seoul_dust_normalize::InvalidRowPolicy::Skip,
            catalog: None,
        };
        let dataset = normalize_file(DatasetKind::TrafficByHour, &path, &skip).unwrap();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.skipped().len(), 1);
        assert_eq!(dataset.skipped()[0].index, 1);

        let err =
            normalize_file(DatasetKind::TrafficByHour, &path, &NormalizeOptions::default())
                .unwrap_err();
        assert!(matches!(
            err,
            CliError::Normalize(NormalizeError::InvalidRow { index: 1, .. })
        ));

        let _ = std::fs::remove_dir_all(&tmp);
    }
}
