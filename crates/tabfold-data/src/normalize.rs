use rayon::prelude::*;
use tabfold_core::error::{DatasetError, DatasetResult};
use tabfold_core::{ColumnKind, Record, Value};
use tracing::debug;

use crate::dataset::Dataset;

/// Column statistics used by z-score normalization.
///
/// `dispersion` is the square root of the summed squared deviations,
/// not divided by the row count.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZScore {
    pub column: usize,
    pub mean: f64,
    pub dispersion: f64,
}

impl ZScore {
    /// Compute mean and dispersion of `column` over `rows`.
    ///
    /// A column whose values are all equal gets a dispersion of exactly 0,
    /// whatever rounding the mean picked up.
    pub fn fit(rows: &[Record], column: usize) -> DatasetResult<ZScore> {
        let values = rows
            .iter()
            .map(|r| r.number(column))
            .collect::<DatasetResult<Vec<f64>>>()?;
        let mean = values.iter().sum::<f64>() / values.len() as f64;

        let constant = values.windows(2).all(|w| w[0] == w[1]);
        let dispersion = if constant {
            0.0
        } else {
            values
                .iter()
                .map(|v| (v - mean) * (v - mean))
                .sum::<f64>()
                .sqrt()
        };

        Ok(ZScore {
            column,
            mean,
            dispersion,
        })
    }

    /// Zero when the column had no spread.
    pub fn apply(&self, value: f64) -> f64 {
        if self.dispersion == 0.0 {
            0.0
        } else {
            (value - self.mean) / self.dispersion
        }
    }

    /// Apply to the matching cell of an external point.
    pub fn apply_to(&self, record: &Record) -> DatasetResult<Record> {
        let v = record.number(self.column)?;
        record.with_value(self.column, Value::Number(self.apply(v)))
    }
}

impl Dataset {
    /// Replace each value in `columns` by its z-score.
    ///
    /// Statistics for every column come from the data as it was before the
    /// call. Returns them so query points can be transformed the same way.
    pub fn normalize_z_score(&mut self, columns: &[usize]) -> DatasetResult<Vec<ZScore>> {
        if self.is_empty() {
            debug!("normalize on empty dataset, nothing to do");
            return Ok(Vec::new());
        }

        let mut unique: Vec<usize> = Vec::with_capacity(columns.len());
        for &c in columns {
            if !unique.contains(&c) {
                unique.push(c);
            }
        }
        for &c in &unique {
            if self.kind(c)? != ColumnKind::Numeric {
                return Err(DatasetError::NonNumeric { column: c });
            }
        }

        let rows = self.rows();
        let stats = unique
            .par_iter()
            .map(|&c| ZScore::fit(rows, c))
            .collect::<DatasetResult<Vec<_>>>()?;

        let rewritten = self
            .rows()
            .iter()
            .map(|record| -> DatasetResult<Record> {
                let mut values = record.to_vec();
                for z in &stats {
                    values[z.column] = Value::Number(z.apply(record.number(z.column)?));
                }
                Ok(Record::new(values))
            })
            .collect::<DatasetResult<Vec<_>>>()?;
        *self.rows_mut() = rewritten;

        debug!(columns = ?unique, "normalized columns to z-scores");
        Ok(stats)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_abs_diff_eq;
    use tabfold_core::record;

    fn column_mean(ds: &Dataset, c: usize) -> f64 {
        ds.rows().iter().map(|r| r.number(c).unwrap()).sum::<f64>() / ds.len() as f64
    }

    #[test]
    fn test_one_to_five() {
        let mut ds = Dataset::new(
            (1..=5).map(|i| record![f64::from(i), "x"]).collect(),
            1,
            vec![0],
        );
        let stats = ds.normalize_z_score(&[0]).unwrap();
        assert_abs_diff_eq!(stats[0].mean, 3.0);
        assert_abs_diff_eq!(stats[0].dispersion, 10.0_f64.sqrt());
        assert_abs_diff_eq!(column_mean(&ds, 0), 0.0, epsilon = 1e-12);
        assert_abs_diff_eq!(ds.rows()[2].number(0).unwrap(), 0.0);
        assert_abs_diff_eq!(ds.rows()[4].number(0).unwrap(), 2.0 / 10.0_f64.sqrt());
    }

    #[test]
    fn test_zero_variance() {
        let mut ds = Dataset::new(vec![record![4.0], record![4.0], record![4.0]], 0, vec![0]);
        ds.normalize_z_score(&[0]).unwrap();
        for r in ds.rows() {
            assert_eq!(r.number(0).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_zero_variance_inexact_value() {
        let mut ds = Dataset::new(vec![record![0.1], record![0.1], record![0.1]], 0, vec![0]);
        let stats = ds.normalize_z_score(&[0]).unwrap();
        assert_eq!(stats[0].dispersion, 0.0);
        for r in ds.rows() {
            assert_eq!(r.number(0).unwrap(), 0.0);
        }
    }

    #[test]
    fn test_columns_are_independent() {
        let mut ds = Dataset::new(
            vec![record![1.0, 10.0], record![3.0, 30.0]],
            0,
            vec![0, 1],
        );
        // duplicate index is normalized once
        let stats = ds.normalize_z_score(&[1, 0, 1]).unwrap();
        assert_eq!(stats.len(), 2);
        assert_abs_diff_eq!(stats[0].mean, 20.0);
        assert_abs_diff_eq!(stats[1].mean, 2.0);
        assert_abs_diff_eq!(column_mean(&ds, 0), 0.0);
        assert_abs_diff_eq!(column_mean(&ds, 1), 0.0);
        assert_abs_diff_eq!(ds.rows()[0].number(1).unwrap(), -10.0 / 200.0_f64.sqrt());
    }

    #[test]
    fn test_rejects_categorical_column() {
        let mut ds = Dataset::new(vec![record!["a", 1.0]], 1, vec![0]);
        assert_eq!(
            ds.normalize_z_score(&[0]),
            Err(DatasetError::NonNumeric { column: 0 })
        );
    }

    #[test]
    fn test_apply_to_query_point() {
        let mut ds = Dataset::new(vec![record![1.0, "a"], record![3.0, "b"]], 1, vec![0]);
        let stats = ds.normalize_z_score(&[0]).unwrap();
        let q = stats[0].apply_to(&record![2.0, "c"]).unwrap();
        assert_eq!(q.number(0).unwrap(), 0.0);
        assert_eq!(q[1], Value::from("c"));
    }

    #[test]
    fn test_empty_is_noop() {
        let mut ds = Dataset::new(Vec::new(), 0, vec![0]);
        assert!(ds.normalize_z_score(&[0]).unwrap().is_empty());
    }
}
