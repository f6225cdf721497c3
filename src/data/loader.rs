//! CSV Data Loader Module
//! Loads the launch records CSV into a typed dataset using Polars.

use polars::prelude::*;
use thiserror::Error;

use super::dataset::{LaunchDataset, LaunchRecord, Outcome};

/// Required CSV columns.
pub const COL_SITE: &str = "Launch Site";
pub const COL_PAYLOAD: &str = "Payload Mass (kg)";
pub const COL_BOOSTER: &str = "Booster Version Category";
pub const COL_CLASS: &str = "class";

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("Failed to load CSV: {0}")]
    Csv(#[from] PolarsError),
    #[error("Missing required column '{0}'")]
    MissingColumn(String),
}

/// Loads launch records from CSV with Polars.
pub struct LaunchDataLoader;

impl LaunchDataLoader {
    /// Load a launch records CSV into a [`LaunchDataset`].
    pub fn load_csv(file_path: &str) -> Result<LaunchDataset, LoaderError> {
        // Use lazy evaluation for memory efficiency, then collect
        let df = LazyCsvReader::new(file_path)
            .with_infer_schema_length(Some(10000))
            .with_ignore_errors(true)
            .finish()?
            .collect()?;

        let records = Self::extract_records(&df)?;
        log::info!(
            "Loaded {} launch records from {} ({} CSV rows)",
            records.len(),
            file_path,
            df.height()
        );

        Ok(LaunchDataset::from_records(records))
    }

    /// Extract typed launch records from a loaded DataFrame.
    ///
    /// Rows with null cells, a negative payload, or a `class` value outside
    /// {0, 1} are skipped with a warning rather than failing the load.
    pub fn extract_records(df: &DataFrame) -> Result<Vec<LaunchRecord>, LoaderError> {
        let site_col = Self::require_column(df, COL_SITE)?;
        let booster_col = Self::require_column(df, COL_BOOSTER)?;

        let payload_f64 = Self::require_column(df, COL_PAYLOAD)?.cast(&DataType::Float64)?;
        let payload_ca = payload_f64.f64()?;
        let class_i64 = Self::require_column(df, COL_CLASS)?.cast(&DataType::Int64)?;
        let class_ca = class_i64.i64()?;

        let mut records = Vec::with_capacity(df.height());
        let mut skipped = 0usize;

        for i in 0..df.height() {
            let row = (
                site_col.get(i),
                booster_col.get(i),
                payload_ca.get(i),
                class_ca.get(i),
            );
            let (Ok(site), Ok(booster), Some(payload), Some(class)) = row else {
                skipped += 1;
                continue;
            };
            if site.is_null() || booster.is_null() || payload.is_nan() || payload < 0.0 {
                skipped += 1;
                continue;
            }
            let Some(outcome) = Outcome::from_class(class) else {
                skipped += 1;
                continue;
            };

            records.push(LaunchRecord {
                site: site.to_string().trim_matches('"').to_string(),
                payload_mass_kg: payload,
                booster_category: booster.to_string().trim_matches('"').to_string(),
                outcome,
            });
        }

        if skipped > 0 {
            log::warn!("Skipped {} malformed launch record rows", skipped);
        }

        Ok(records)
    }

    fn require_column<'a>(df: &'a DataFrame, name: &str) -> Result<&'a Column, LoaderError> {
        df.column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))
    }
}
