use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use crate::error::{DatasetError, DatasetResult};
use crate::value::Value;

/// One fixed-width row of a dataset.
///
/// Records are immutable and cheap to clone: clones share the same
/// allocation. Changing a cell means building a new record and storing
/// it in place of the old one.
#[derive(Debug, Clone, PartialEq)]
pub struct Record(Arc<[Value]>);

impl Record {
    pub fn new(values: Vec<Value>) -> Self {
        Record(values.into())
    }

    pub fn width(&self) -> usize {
        self.0.len()
    }

    pub fn values(&self) -> &[Value] {
        &self.0
    }

    /// Value at `column`, or a range error if the record is too narrow.
    pub fn get(&self, column: usize) -> DatasetResult<&Value> {
        self.0.get(column).ok_or(DatasetError::ColumnOutOfRange {
            column,
            width: self.0.len(),
        })
    }

    /// Numeric value at `column`; text there is a [`DatasetError::NonNumeric`].
    pub fn number(&self, column: usize) -> DatasetResult<f64> {
        self.get(column)?
            .as_number()
            .ok_or(DatasetError::NonNumeric { column })
    }

    /// A new record equal to this one except at `column`.
    pub fn with_value(&self, column: usize, value: Value) -> DatasetResult<Record> {
        self.get(column)?;
        let mut values = self.0.to_vec();
        values[column] = value;
        Ok(Record::new(values))
    }

    /// True when both records share the same allocation.
    pub fn ptr_eq(&self, other: &Record) -> bool {
        Arc::ptr_eq(&self.0, &other.0)
    }
}

impl Deref for Record {
    type Target = [Value];

    fn deref(&self) -> &[Value] {
        &self.0
    }
}

impl From<Vec<Value>> for Record {
    fn from(values: Vec<Value>) -> Self {
        Record::new(values)
    }
}

impl FromIterator<Value> for Record {
    fn from_iter<I: IntoIterator<Item = Value>>(iter: I) -> Self {
        Record(iter.into_iter().collect())
    }
}

impl fmt::Display for Record {
    /// Comma-joined scalar forms, the persisted row format.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, v) in self.0.iter().enumerate() {
            if i > 0 {
                f.write_str(",")?;
            }
            write!(f, "{}", v)?;
        }
        Ok(())
    }
}

/// Build a [`Record`] from a list of scalars.
///
/// ```
/// use tabfold_core::record;
/// let r = record![1.0, "a", 0];
/// assert_eq!(r.width(), 3);
/// ```
#[macro_export]
macro_rules! record {
    ($($v:expr),* $(,)?) => {
        $crate::Record::new(vec![$($crate::Value::from($v)),*])
    };
}
