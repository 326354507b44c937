//! Dataset loading.
//!
//! Reads the launch records CSV through Polars and converts the frame into
//! an immutable [`LaunchDataset`](crate::models::LaunchDataset). The loader
//! runs exactly once at process start.
//!
//! # Example
//!
//! ```no_run
//! use launch_dash::io::LaunchLoader;
//! use std::path::Path;
//!
//! let dataset = LaunchLoader::load_from_csv(Path::new("spacex_launch_dash.csv"))
//!     .expect("Failed to load");
//! println!("Loaded {} launches", dataset.len());
//! ```

pub mod loader;


pub use loader::{columns, DataLoadError, LaunchLoader, DEFAULT_DATASET_PATH};
