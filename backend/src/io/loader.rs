use polars::prelude::*;
use std::path::{Path, PathBuf};
use tracing::{debug, info};

use crate::models::{LaunchDataset, LaunchRecord, Outcome};

/// Dataset location relative to the process working directory.
pub const DEFAULT_DATASET_PATH: &str = "spacex_launch_dash.csv";

/// Column headers of the launch records file.
pub mod columns {
    pub const FLIGHT_NUMBER: &str = "Flight Number";
    pub const LAUNCH_SITE: &str = "Launch Site";
    pub const CLASS: &str = "class";
    pub const PAYLOAD_MASS: &str = "Payload Mass (kg)";
    pub const BOOSTER_VERSION: &str = "Booster Version";
    pub const BOOSTER_VERSION_CATEGORY: &str = "Booster Version Category";

    /// Columns without which the dashboard cannot be built.
    pub const REQUIRED: [&str; 4] = [LAUNCH_SITE, CLASS, PAYLOAD_MASS, BOOSTER_VERSION_CATEGORY];
}

/// Start-up failure while reading the launch dataset. Always fatal.
#[derive(Debug, thiserror::Error)]
pub enum DataLoadError {
    #[error("Dataset file not found: {}", .path.display())]
    NotFound { path: PathBuf },

    #[error("Failed to parse dataset {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: PolarsError,
    },

    #[error("Dataset is missing required column '{column}'")]
    MissingColumn { column: String },

    #[error("Malformed value in column '{column}' at row {row}: {reason}")]
    Malformed {
        column: String,
        row: usize,
        reason: String,
    },

    #[error("Dataset {} contains no launch records", .path.display())]
    Empty { path: PathBuf },
}

impl DataLoadError {
    fn malformed(column: &str, index: usize, reason: impl Into<String>) -> Self {
        // Rows are reported 1-based, header excluded.
        DataLoadError::Malformed {
            column: column.to_string(),
            row: index + 1,
            reason: reason.into(),
        }
    }
}

/// Loads launch records from CSV.
pub struct LaunchLoader;

impl LaunchLoader {
    /// Load the dataset and compute its derived values.
    pub fn load_from_csv(csv_path: &Path) -> Result<LaunchDataset, DataLoadError> {
        let df = Self::parse_launch_csv(csv_path)?;
        let records = Self::dataframe_to_records(&df).map_err(|e| match e {
            DataLoadError::Parse { source, .. } => DataLoadError::Parse {
                path: csv_path.to_path_buf(),
                source,
            },
            other => other,
        })?;

        let dataset = LaunchDataset::from_records(records).ok_or_else(|| DataLoadError::Empty {
            path: csv_path.to_path_buf(),
        })?;

        let domain = dataset.payload_domain();
        info!(
            path = %csv_path.display(),
            records = dataset.len(),
            sites = dataset.sites().len(),
            payload_min = domain.min,
            payload_max = domain.max,
            "Launch dataset loaded"
        );

        Ok(dataset)
    }

    /// Parse the CSV file into a Polars DataFrame and check required headers.
    pub fn parse_launch_csv(csv_path: &Path) -> Result<DataFrame, DataLoadError> {
        if !csv_path.is_file() {
            return Err(DataLoadError::NotFound {
                path: csv_path.to_path_buf(),
            });
        }

        let parse_err = |source: PolarsError| DataLoadError::Parse {
            path: csv_path.to_path_buf(),
            source,
        };

        // Infer over every row: a decimal payload after the first rows
        // must not fail an integer-typed column.
        let df = CsvReadOptions::default()
            .with_has_header(true)
            .with_infer_schema_length(None)
            .try_into_reader_with_file_path(Some(csv_path.into()))
            .map_err(parse_err)?
            .finish()
            .map_err(parse_err)?;

        let column_names: Vec<String> = df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect();

        for required in columns::REQUIRED {
            if !column_names.iter().any(|c| c == required) {
                return Err(DataLoadError::MissingColumn {
                    column: required.to_string(),
                });
            }
        }

        debug!(rows = df.height(), columns = ?column_names, "Parsed launch CSV");
        Ok(df)
    }

    /// Convert a DataFrame into launch records.
    ///
    /// Columns are cast to their expected types first since the CSV reader
    /// infers integers when no payload carries a decimal point. Values that
    /// fail the cast become null and are reported as malformed.
    pub fn dataframe_to_records(df: &DataFrame) -> Result<Vec<LaunchRecord>, DataLoadError> {
        let sites_col = cast_column(df, columns::LAUNCH_SITE, &DataType::String)?;
        let payload_col = cast_column(df, columns::PAYLOAD_MASS, &DataType::Float64)?;
        let class_col = cast_column(df, columns::CLASS, &DataType::Float64)?;
        let category_col = cast_column(df, columns::BOOSTER_VERSION_CATEGORY, &DataType::String)?;
        let flight_col = optional_column(df, columns::FLIGHT_NUMBER, &DataType::Int64)?;
        let booster_col = optional_column(df, columns::BOOSTER_VERSION, &DataType::String)?;

        let sites = sites_col.str().map_err(polars_err)?;
        let payloads = payload_col.f64().map_err(polars_err)?;
        let classes = class_col.f64().map_err(polars_err)?;
        let categories = category_col.str().map_err(polars_err)?;
        let flights = match &flight_col {
            Some(c) => Some(c.i64().map_err(polars_err)?),
            None => None,
        };
        let boosters = match &booster_col {
            Some(c) => Some(c.str().map_err(polars_err)?),
            None => None,
        };

        let mut records = Vec::with_capacity(df.height());
        for i in 0..df.height() {
            let launch_site = sites.get(i).ok_or_else(|| {
                DataLoadError::malformed(columns::LAUNCH_SITE, i, "missing value")
            })?;

            let payload_mass_kg = payloads.get(i).ok_or_else(|| {
                DataLoadError::malformed(columns::PAYLOAD_MASS, i, "missing or non-numeric value")
            })?;
            if !payload_mass_kg.is_finite() {
                return Err(DataLoadError::malformed(
                    columns::PAYLOAD_MASS,
                    i,
                    format!("non-finite value {}", payload_mass_kg),
                ));
            }

            let class = classes.get(i).ok_or_else(|| {
                DataLoadError::malformed(columns::CLASS, i, "missing or non-numeric value")
            })?;
            let outcome = decode_class(class).ok_or_else(|| {
                DataLoadError::malformed(columns::CLASS, i, format!("expected 0 or 1, got {}", class))
            })?;

            let booster_version_category = categories.get(i).ok_or_else(|| {
                DataLoadError::malformed(columns::BOOSTER_VERSION_CATEGORY, i, "missing value")
            })?;

            records.push(LaunchRecord {
                flight_number: flights.and_then(|c| c.get(i)),
                launch_site: launch_site.to_string(),
                payload_mass_kg,
                outcome,
                booster_version: boosters.and_then(|c| c.get(i)).map(str::to_string),
                booster_version_category: booster_version_category.to_string(),
            });
        }

        Ok(records)
    }
}

fn decode_class(class: f64) -> Option<Outcome> {
    if class.fract() != 0.0 {
        return None;
    }
    Outcome::from_class(class as i64)
}

fn polars_err(source: PolarsError) -> DataLoadError {
    // The path is filled in by `load_from_csv`.
    DataLoadError::Parse {
        path: PathBuf::new(),
        source,
    }
}

fn cast_column(df: &DataFrame, name: &str, dtype: &DataType) -> Result<Column, DataLoadError> {
    let column = df.column(name).map_err(|_| DataLoadError::MissingColumn {
        column: name.to_string(),
    })?;
    column.cast(dtype).map_err(polars_err)
}

fn optional_column(
    df: &DataFrame,
    name: &str,
    dtype: &DataType,
) -> Result<Option<Column>, DataLoadError> {
    match df.column(name) {
        Ok(column) => column.cast(dtype).map(Some).map_err(polars_err),
        Err(_) => Ok(None),
    }
}
