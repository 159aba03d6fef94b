#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! CLI entry point for normalizing the Seoul dust datasets.

use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand};
use seoul_dust_cli::{CliError, DEFAULT_DATA_DIR, load_catalog, normalize_file};
use seoul_dust_normalize::display::display_rows;
use seoul_dust_normalize::policy_mapping::categorize_policy;
use seoul_dust_normalize::summary::summarize;
use seoul_dust_normalize::{InvalidRowPolicy, NormalizeOptions};
use seoul_dust_taxonomy_models::DatasetKind;

#[derive(Parser)]
#[command(name = "seoul_dust", about = "Seoul re-suspended dust dataset normalizer")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Args)]
struct InputArgs {
    /// Directory holding the dataset CSV files
    #[arg(long, default_value = DEFAULT_DATA_DIR)]
    data_dir: PathBuf,
    /// Abort on the first invalid row instead of skipping it
    #[arg(long)]
    strict: bool,
    /// TOML policy catalog for exact-text classification
    #[arg(long)]
    catalog: Option<PathBuf>,
}

impl InputArgs {
    fn options(&self) -> Result<NormalizeOptions, CliError> {
        Ok(NormalizeOptions {
            on_invalid: if self.strict {
                InvalidRowPolicy::Abort
            } else {
                InvalidRowPolicy::Skip
            },
            catalog: self.catalog.as_deref().map(load_catalog).transpose()?,
        })
    }

    fn path_for(&self, kind: DatasetKind, file: Option<&Path>) -> PathBuf {
        file.map_or_else(
            || self.data_dir.join(kind.default_file_name()),
            Path::to_path_buf,
        )
    }
}

#[derive(Subcommand)]
enum Commands {
    /// List the datasets and their default file names
    Datasets,
    /// Normalize one dataset and print it as JSON
    Normalize {
        /// Dataset kind (e.g., "traffic-by-hour")
        kind: DatasetKind,
        /// Read this file instead of the default one in the data directory
        #[arg(long)]
        file: Option<PathBuf>,
        /// Print relabeled rows in the source column layout
        #[arg(long)]
        display: bool,
        #[command(flatten)]
        input: InputArgs,
    },
    /// Normalize every dataset in dashboard order
    All {
        #[command(flatten)]
        input: InputArgs,
    },
    /// Print the keyword category of a policy description
    Categorize {
        /// Policy description, e.g. "벽면녹화, 친환경보일러 교체"
        text: String,
    },
    /// Print the grouped means a dataset's chart is drawn from
    Summary {
        /// Dataset kind (e.g., "dust-traffic-policy")
        kind: DatasetKind,
        /// Read this file instead of the default one in the data directory
        #[arg(long)]
        file: Option<PathBuf>,
        #[command(flatten)]
        input: InputArgs,
    },
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    pretty_env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Commands::Datasets => {
            println!("{:<24} {:<36} TITLE", "KIND", "FILE");
            println!("{}", "-".repeat(90));
            for kind in DatasetKind::all() {
                println!(
                    "{:<24} {:<36} {}",
                    kind.as_ref(),
                    kind.default_file_name(),
                    kind.title()
                );
            }
        }
        Commands::Normalize {
            kind,
            file,
            display,
            input,
        } => {
            let dataset = normalize_file(kind, &input.path_for(kind, file.as_deref()), &input.options()?)?;
            let json = if display {
                serde_json::to_string_pretty(&display_rows(&dataset))?
            } else {
                serde_json::to_string_pretty(&dataset)?
            };
            println!("{json}");
        }
        Commands::All { input } => {
            let options = input.options()?;
            let mut datasets = Vec::with_capacity(DatasetKind::all().len());
            for kind in DatasetKind::all() {
                datasets.push(normalize_file(*kind, &input.path_for(*kind, None), &options)?);
            }
            println!("{}", serde_json::to_string_pretty(&datasets)?);
        }
        Commands::Categorize { text } => {
            println!("{}", categorize_policy(&text));
        }
        Commands::Summary { kind, file, input } => {
            let dataset = normalize_file(kind, &input.path_for(kind, file.as_deref()), &input.options()?)?;
            println!("{}", serde_json::to_string_pretty(&summarize(&dataset))?);
        }
    }

    Ok(())
}
