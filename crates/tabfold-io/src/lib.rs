pub mod csv_io;
pub mod error;
pub mod export;
pub mod recipe_io;

pub use csv_io::{load_dataset, read_rows, save_dataset};
pub use error::IoError;
pub use export::export_folds;
pub use recipe_io::{load_recipe, save_recipe};
