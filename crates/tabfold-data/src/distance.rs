use tabfold_core::error::{DatasetError, DatasetResult};
use tabfold_core::{ColumnKind, Value};

use crate::dataset::Dataset;

fn cell(point: &[Value], column: usize) -> DatasetResult<&Value> {
    point.get(column).ok_or(DatasetError::ColumnOutOfRange {
        column,
        width: point.len(),
    })
}

impl Dataset {
    /// Heterogeneous distance between two points laid out like this
    /// dataset's records.
    ///
    /// Only attribute columns count. A categorical column adds 1 when the
    /// values differ; a numeric column adds its squared difference. The
    /// result is the square root of the sum. No scaling is applied, so
    /// normalize numeric columns first if their magnitudes should be
    /// comparable.
    pub fn distance(&self, a: &[Value], b: &[Value]) -> DatasetResult<f64> {
        let mut sum = 0.0;
        for &column in self.attribute_columns() {
            let (x, y) = (cell(a, column)?, cell(b, column)?);
            match self.kind(column)? {
                ColumnKind::Categorical => {
                    if x != y {
                        sum += 1.0;
                    }
                }
                ColumnKind::Numeric => {
                    let (x, y) = match (x.as_number(), y.as_number()) {
                        (Some(x), Some(y)) => (x, y),
                        _ => return Err(DatasetError::NonNumeric { column }),
                    };
                    let diff = x - y;
                    sum += diff * diff;
                }
            }
        }
        Ok(sum.sqrt())
    }
}
