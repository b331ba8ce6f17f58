use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use tabfold_core::error::DatasetResult;
use tabfold_core::{Record, Value};
use tracing::info;

use crate::dataset::Dataset;

/// Discrete-value-to-code mapping for one column.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ValueMap {
    pub column: usize,
    pub map: HashMap<String, Value>,
}

impl ValueMap {
    pub fn new(column: usize, pairs: &[(&str, f64)]) -> Self {
        ValueMap {
            column,
            map: pairs
                .iter()
                .map(|&(k, v)| (k.to_string(), Value::Number(v)))
                .collect(),
        }
    }
}

fn default_delimiter() -> char {
    ','
}

/// Fixed preprocessing steps for one kind of raw dataset file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DatasetRecipe {
    pub name: String,
    pub class_column: usize,
    pub attribute_columns: Vec<usize>,
    /// Leading lines that are header or metadata, not observations.
    #[serde(default)]
    pub header_length: usize,
    #[serde(default)]
    pub value_maps: Vec<ValueMap>,
    /// Columns parsed as numbers. May include a regression label.
    #[serde(default)]
    pub numeric_columns: Vec<usize>,
    /// Columns rescaled to z-scores. Regression labels are left out.
    #[serde(default)]
    pub normalize_columns: Vec<usize>,
    #[serde(default = "default_delimiter")]
    pub delimiter: char,
}

/// Switches for [`DatasetRecipe::prepare`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PrepareOptions {
    pub normalize: bool,
    pub shuffle: bool,
    pub seed: Option<u64>,
}

impl Default for PrepareOptions {
    fn default() -> Self {
        PrepareOptions {
            normalize: true,
            shuffle: true,
            seed: None,
        }
    }
}

impl DatasetRecipe {
    /// Turn raw rows into a prepared dataset: drop the header, apply the
    /// value maps, parse numeric columns, then optionally normalize and
    /// shuffle.
    pub fn prepare(&self, rows: Vec<Record>, options: &PrepareOptions) -> DatasetResult<Dataset> {
        let mut ds = Dataset::new(rows, self.class_column, self.attribute_columns.clone());
        ds.remove_header(self.header_length);
        for vm in &self.value_maps {
            ds.convert_attribute(vm.column, &vm.map)?;
        }
        ds.convert_to_float(&self.numeric_columns)?;
        if options.normalize {
            ds.normalize_z_score(&self.normalize_columns)?;
        }
        if options.shuffle {
            ds.shuffle(options.seed);
        }
        info!(
            recipe = %self.name,
            rows = ds.len(),
            categorical = ?ds.categorical_columns(),
            "prepared dataset"
        );
        Ok(ds)
    }
}
