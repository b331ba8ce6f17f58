mod args;
mod logging;

use std::error::Error;

use clap::Parser;
use tabfold_io::{export_folds, load_dataset};
use tracing::{debug, info};

use crate::args::Args;

fn main() -> Result<(), Box<dyn Error>> {
    logging::setup_tracing()?;
    let args = Args::parse();

    let recipe = args.load_recipe()?;
    let mut dataset = load_dataset(&args.input, &recipe, &args.prepare_options())?;
    if let Some(k) = args.sample {
        dataset.sample(k, args.seed)?;
        info!(rows = dataset.len(), "sampled dataset");
    }

    let folds = dataset.validation_folds(args.folds)?;
    for (i, fold) in folds.iter().enumerate() {
        debug!(fold = i, train = fold.train.len(), test = fold.test.len(), "fold");
    }
    let written = export_folds(&folds, &args.out_dir, &recipe.name)?;

    info!(
        source = %dataset.source(),
        rows = dataset.len(),
        attributes = dataset.attribute_columns().len(),
        categorical = ?dataset.categorical_columns(),
        folds = folds.len(),
        files = written.len(),
        "done"
    );
    Ok(())
}
