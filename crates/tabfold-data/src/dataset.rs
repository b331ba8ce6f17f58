use std::collections::HashMap;
use std::fmt;

use tabfold_core::error::{DatasetError, DatasetResult};
use tabfold_core::{ColumnKind, Record, Value};
use tracing::{debug, warn};

/// An ordered collection of fixed-width records with column roles.
///
/// Rows keep every column of the source, including columns that are
/// neither attribute nor class. Work through `attribute_columns()` and
/// `class_column()` rather than assuming a layout.
///
/// Each column carries a [`ColumnKind`] tag. Tags start out from the first
/// record's values and change only through the conversion operations.
/// Clones share records but own their row container, so structural changes
/// to one dataset never show up in another.
#[derive(Debug, Clone, PartialEq)]
pub struct Dataset {
    rows: Vec<Record>,
    class_column: usize,
    attribute_columns: Vec<usize>,
    kinds: Vec<ColumnKind>,
    source: String,
}

impl Dataset {
    /// Build a dataset. Column indices are not checked here; a bad index
    /// surfaces as [`DatasetError::ColumnOutOfRange`] when first used.
    pub fn new(rows: Vec<Record>, class_column: usize, attribute_columns: Vec<usize>) -> Self {
        let kinds = infer_kinds(&rows);
        Dataset {
            rows,
            class_column,
            attribute_columns,
            kinds,
            source: String::new(),
        }
    }

    /// Tag the dataset with where it came from (usually a file path).
    pub fn with_source(mut self, source: impl Into<String>) -> Self {
        self.source = source.into();
        self
    }

    /// Same columns and metadata, different rows.
    pub(crate) fn derive(&self, rows: Vec<Record>) -> Dataset {
        Dataset {
            rows,
            class_column: self.class_column,
            attribute_columns: self.attribute_columns.clone(),
            kinds: self.kinds.clone(),
            source: self.source.clone(),
        }
    }

    /// Independent copy: new row container, shared records.
    pub fn copy(&self) -> Dataset {
        self.derive(self.rows.clone())
    }

    pub fn rows(&self) -> &[Record] {
        &self.rows
    }

    pub fn row(&self, idx: usize) -> Option<&Record> {
        self.rows.get(idx)
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Width of the stored records, 0 for an empty dataset.
    pub fn width(&self) -> usize {
        self.rows.first().map_or(0, Record::width)
    }

    pub fn class_column(&self) -> usize {
        self.class_column
    }

    pub fn attribute_columns(&self) -> &[usize] {
        &self.attribute_columns
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    pub fn kind(&self, column: usize) -> DatasetResult<ColumnKind> {
        self.kinds
            .get(column)
            .copied()
            .ok_or(DatasetError::ColumnOutOfRange {
                column,
                width: self.kinds.len(),
            })
    }

    /// Attribute columns currently tagged categorical, in attribute order.
    pub fn categorical_columns(&self) -> Vec<usize> {
        self.attribute_columns
            .iter()
            .copied()
            .filter(|&c| self.kinds.get(c) == Some(&ColumnKind::Categorical))
            .collect()
    }

    /// The class value of every record, in row order.
    pub fn class_values(&self) -> DatasetResult<Vec<&Value>> {
        self.rows.iter().map(|r| r.get(self.class_column)).collect()
    }

    /// Drop the first `length` records (embedded header lines).
    ///
    /// Column kinds are re-derived from the new first record. Removing more
    /// rows than exist leaves an empty dataset.
    pub fn remove_header(&mut self, length: usize) {
        if length > self.rows.len() {
            warn!(
                length,
                rows = self.rows.len(),
                source = %self.source,
                "header length exceeds row count, dataset is now empty"
            );
            self.rows.clear();
            return;
        }
        self.rows.drain(..length);
        if !self.rows.is_empty() {
            self.kinds = infer_kinds(&self.rows);
        }
        debug!(length, rows = self.rows.len(), "removed header rows");
    }

    /// Rewrite text values at `column` through `value_map`.
    ///
    /// Values missing from the map, and values that are already numbers,
    /// stay as they are. The column is tagged numeric once every record
    /// holds a number there. Returns how many values were rewritten.
    pub fn convert_attribute(
        &mut self,
        column: usize,
        value_map: &HashMap<String, Value>,
    ) -> DatasetResult<usize> {
        let mut rewritten = 0;
        let rows = self
            .rows
            .iter()
            .map(|record| -> DatasetResult<Record> {
                let mapped = match record.get(column)? {
                    Value::Text(s) => value_map.get(s),
                    Value::Number(_) => None,
                };
                match mapped {
                    Some(v) => {
                        rewritten += 1;
                        record.with_value(column, v.clone())
                    }
                    None => Ok(record.clone()),
                }
            })
            .collect::<DatasetResult<Vec<_>>>()?;
        self.rows = rows;

        let all_numeric = self.rows.iter().all(|r| r[column].is_number());
        if let Some(kind) = self.kinds.get_mut(column) {
            *kind = if all_numeric {
                ColumnKind::Numeric
            } else {
                ColumnKind::Categorical
            };
        }
        debug!(column, rewritten, "converted attribute values");
        Ok(rewritten)
    }

    /// Parse every value in `columns` as `f64`.
    ///
    /// Either every record is converted or, on the first unparseable value,
    /// none is.
    pub fn convert_to_float(&mut self, columns: &[usize]) -> DatasetResult<()> {
        let rows = self
            .rows
            .iter()
            .enumerate()
            .map(|(row, record)| -> DatasetResult<Record> {
                let mut values = record.to_vec();
                for &column in columns {
                    let parsed = parse_number(record.get(column)?, row, column)?;
                    values[column] = Value::Number(parsed);
                }
                Ok(Record::new(values))
            })
            .collect::<DatasetResult<Vec<_>>>()?;
        self.rows = rows;

        for &column in columns {
            if let Some(kind) = self.kinds.get_mut(column) {
                *kind = ColumnKind::Numeric;
            }
        }
        debug!(?columns, rows = self.rows.len(), "converted columns to float");
        Ok(())
    }

    pub(crate) fn rows_mut(&mut self) -> &mut Vec<Record> {
        &mut self.rows
    }
}

fn infer_kinds(rows: &[Record]) -> Vec<ColumnKind> {
    rows.first()
        .map(|r| r.iter().map(Value::kind).collect())
        .unwrap_or_default()
}

fn parse_number(value: &Value, row: usize, column: usize) -> DatasetResult<f64> {
    match value {
        Value::Number(v) => Ok(*v),
        Value::Text(s) => s.trim().parse().map_err(|_| DatasetError::Format {
            row,
            column,
            value: s.clone(),
        }),
    }
}

impl fmt::Display for Dataset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for record in &self.rows {
            writeln!(f, "{}", record)?;
        }
        Ok(())
    }
}
