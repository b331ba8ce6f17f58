use std::fs;
use std::path::Path;

use tabfold_data::DatasetRecipe;

use crate::error::IoError;

/// Save a recipe as pretty-printed JSON.
pub fn save_recipe<P: AsRef<Path>>(recipe: &DatasetRecipe, path: P) -> Result<(), IoError> {
    let json = serde_json::to_string_pretty(recipe)?;
    fs::write(path.as_ref(), json)?;
    Ok(())
}

/// Load a recipe from a JSON file.
pub fn load_recipe<P: AsRef<Path>>(path: P) -> Result<DatasetRecipe, IoError> {
    let json = fs::read_to_string(path.as_ref())?;
    let recipe: DatasetRecipe = serde_json::from_str(&json)?;
    Ok(recipe)
}
