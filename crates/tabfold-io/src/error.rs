use tabfold_core::DatasetError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum IoError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),
    #[error("Recipe JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Dataset error: {0}")]
    Dataset(#[from] DatasetError),
    #[error("Delimiter {0:?} is not a single ASCII character")]
    Delimiter(char),
}
