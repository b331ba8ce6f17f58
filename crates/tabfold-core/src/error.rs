use thiserror::Error;

/// Core error type for all dataset operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DatasetError {
    #[error("Cannot parse {value:?} as a number at row {row}, column {column}")]
    Format {
        row: usize,
        column: usize,
        value: String,
    },

    #[error("Column {column} is categorical, expected a numeric column")]
    NonNumeric { column: usize },

    #[error("Cannot sample {requested} rows from a dataset of {available}")]
    Size { requested: usize, available: usize },

    #[error("Cannot build {folds} folds from {rows} rows")]
    InvalidFoldCount { folds: usize, rows: usize },

    #[error("Partition fraction {0} is outside [0, 1]")]
    FractionOutOfRange(f64),

    #[error("Column index {column} out of bounds for records of width {width}")]
    ColumnOutOfRange { column: usize, width: usize },
}

pub type DatasetResult<T> = Result<T, DatasetError>;
