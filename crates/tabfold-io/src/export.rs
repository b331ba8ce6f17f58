use std::fs;
use std::path::{Path, PathBuf};

use tabfold_data::Fold;
use tracing::info;

use crate::csv_io::save_dataset;
use crate::error::IoError;

/// Write every fold as `<stem>-fold-<i>-train.txt` and
/// `<stem>-fold-<i>-test.txt` under `dir`, creating it if needed.
///
/// Returns the written paths, train before test for each fold.
pub fn export_folds<P: AsRef<Path>>(
    folds: &[Fold],
    dir: P,
    stem: &str,
) -> Result<Vec<PathBuf>, IoError> {
    let dir = dir.as_ref();
    fs::create_dir_all(dir)?;

    let mut written = Vec::with_capacity(folds.len() * 2);
    for (i, fold) in folds.iter().enumerate() {
        let train = dir.join(format!("{}-fold-{}-train.txt", stem, i));
        let test = dir.join(format!("{}-fold-{}-test.txt", stem, i));
        save_dataset(&fold.train, &train)?;
        save_dataset(&fold.test, &test)?;
        written.push(train);
        written.push(test);
    }

    info!(dir = %dir.display(), folds = folds.len(), "exported folds");
    Ok(written)
}
