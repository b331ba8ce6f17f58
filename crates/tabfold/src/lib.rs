//! # tabfold
//!
//! Preparation and cross-validation partitioning of heterogeneous tabular
//! datasets: rows mixing categorical and numeric columns.
//!
//! ## Modules
//!
//! - **core** — `Value`, `Record`, `ColumnKind`, `DatasetError`
//! - **data** — `Dataset`: conversion, z-score normalization, heterogeneous
//!   distance, partition, k-fold validation folds, sampling, `DatasetRecipe`
//! - **io** — delimited-text load/save, recipe JSON, fold export
//! - **datasets** — builtin recipes: Abalone, Car, Forest Fires, Machine,
//!   Segmentation, Wine Quality

/// Values, records and errors.
pub use tabfold_core as core;

/// The dataset and its operations.
pub use tabfold_data as data;

/// File I/O.
pub use tabfold_io as io;

/// Builtin recipes.
pub use tabfold_datasets as datasets;

pub use tabfold_core::{ColumnKind, DatasetError, DatasetResult, Record, Value};
pub use tabfold_data::{Dataset, DatasetRecipe, Fold, PrepareOptions, ValueMap, ZScore};
