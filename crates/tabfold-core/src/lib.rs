pub mod error;
pub mod record;
pub mod value;

pub use error::{DatasetError, DatasetResult};
pub use record::Record;
pub use value::{ColumnKind, Value};
