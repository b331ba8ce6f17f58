use std::error::Error;
use std::path::PathBuf;

use clap::Parser;
use tabfold_data::{DatasetRecipe, PrepareOptions};
use tabfold_datasets::{builtin, BUILTIN_NAMES};
use tabfold_io::load_recipe;

/// Prepare a delimited dataset with a recipe and write its cross-validation folds.
#[derive(Parser, Debug)]
#[command(name = "tabfold", version)]
pub struct Args {
    /// Raw dataset file
    #[arg(short, long)]
    pub input: PathBuf,
    /// Builtin recipe name
    #[arg(short, long, required_unless_present = "recipe_file", conflicts_with = "recipe_file")]
    pub recipe: Option<String>,
    /// Recipe JSON file
    #[arg(long)]
    pub recipe_file: Option<PathBuf>,
    /// Number of cross-validation folds
    #[arg(short, long, default_value_t = 10)]
    pub folds: usize,
    /// Seed for shuffling and sampling
    #[arg(short, long)]
    pub seed: Option<u64>,
    /// Skip z-score normalization
    #[arg(long)]
    pub no_normalize: bool,
    /// Keep the file's row order
    #[arg(long)]
    pub no_shuffle: bool,
    /// Keep only this many randomly chosen rows
    #[arg(long)]
    pub sample: Option<usize>,
    /// Directory for the fold files
    #[arg(short, long, default_value = "folds")]
    pub out_dir: PathBuf,
}

impl Args {
    pub fn prepare_options(&self) -> PrepareOptions {
        PrepareOptions {
            normalize: !self.no_normalize,
            shuffle: !self.no_shuffle,
            seed: self.seed,
        }
    }

    pub fn load_recipe(&self) -> Result<DatasetRecipe, Box<dyn Error>> {
        if let Some(path) = &self.recipe_file {
            return Ok(load_recipe(path)?);
        }
        let name = self.recipe.as_deref().unwrap_or_default();
        builtin(name).ok_or_else(|| {
            format!(
                "unknown recipe {:?}, expected one of: {}",
                name,
                BUILTIN_NAMES.join(", ")
            )
            .into()
        })
    }
}
