use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use tabfold_core::error::{DatasetError, DatasetResult};
use tracing::debug;

use crate::dataset::Dataset;

/// One cross-validation split.
#[derive(Debug, Clone, PartialEq)]
pub struct Fold {
    pub train: Dataset,
    pub test: Dataset,
}

fn rng_from(seed: Option<u64>) -> StdRng {
    match seed {
        Some(s) => StdRng::seed_from_u64(s),
        None => StdRng::from_entropy(),
    }
}

impl Dataset {
    /// Shuffle rows in place. Pass a seed for a reproducible order.
    pub fn shuffle(&mut self, seed: Option<u64>) {
        let mut rng = rng_from(seed);
        self.shuffle_with(&mut rng);
    }

    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        self.rows_mut().shuffle(rng);
    }

    /// Split into the first `floor(fraction * len)` rows and the rest,
    /// keeping row order.
    pub fn partition(&self, fraction: f64) -> DatasetResult<(Dataset, Dataset)> {
        if !(0.0..=1.0).contains(&fraction) {
            return Err(DatasetError::FractionOutOfRange(fraction));
        }
        let cutoff = ((fraction * self.len() as f64).floor() as usize).min(self.len());
        let (first, second) = self.rows().split_at(cutoff);
        Ok((self.derive(first.to_vec()), self.derive(second.to_vec())))
    }

    /// Build `n` folds for cross-validation.
    ///
    /// Rows are cut into `n` contiguous sections of `len / n` rows; the last
    /// section also takes the remainder. Fold `i` tests on section `i` and
    /// trains on the other sections in order.
    pub fn validation_folds(&self, n: usize) -> DatasetResult<Vec<Fold>> {
        if n == 0 || n > self.len() {
            return Err(DatasetError::InvalidFoldCount {
                folds: n,
                rows: self.len(),
            });
        }

        let size = self.len() / n;
        let rows = self.rows();
        let sections: Vec<_> = (0..n)
            .map(|i| {
                let end = if i == n - 1 { rows.len() } else { (i + 1) * size };
                &rows[i * size..end]
            })
            .collect();

        let folds = (0..n)
            .map(|i| {
                let train = sections
                    .iter()
                    .enumerate()
                    .filter(|&(j, _)| j != i)
                    .flat_map(|(_, s)| s.iter().cloned())
                    .collect();
                Fold {
                    train: self.derive(train),
                    test: self.derive(sections[i].to_vec()),
                }
            })
            .collect();

        debug!(folds = n, rows = self.len(), section = size, "built validation folds");
        Ok(folds)
    }

    /// Keep a uniformly random subset of `k` rows, without replacement.
    pub fn sample(&mut self, k: usize, seed: Option<u64>) -> DatasetResult<()> {
        let mut rng = rng_from(seed);
        self.sample_with(k, &mut rng)
    }

    pub fn sample_with<R: Rng + ?Sized>(&mut self, k: usize, rng: &mut R) -> DatasetResult<()> {
        if k > self.len() {
            return Err(DatasetError::Size {
                requested: k,
                available: self.len(),
            });
        }
        let picked = self.rows().choose_multiple(rng, k).cloned().collect();
        *self.rows_mut() = picked;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tabfold_core::{record, Record};

    fn numbered(n: usize) -> Dataset {
        Dataset::new(
            (0..n).map(|i| record![i as f64, "c"]).collect(),
            1,
            vec![0],
        )
    }

    fn ids(ds: &Dataset) -> Vec<usize> {
        ds.rows()
            .iter()
            .map(|r| r.number(0).unwrap() as usize)
            .collect()
    }

    #[test]
    fn test_partition_sizes_and_order() {
        let ds = numbered(8);
        let (first, second) = ds.partition(0.75).unwrap();
        assert_eq!(ids(&first), vec![0, 1, 2, 3, 4, 5]);
        assert_eq!(ids(&second), vec![6, 7]);

        let (first, second) = numbered(10).partition(0.8).unwrap();
        assert_eq!((first.len(), second.len()), (8, 2));
        let (first, second) = numbered(7).partition(0.5).unwrap();
        assert_eq!((first.len(), second.len()), (3, 4));
    }

    #[test]
    fn test_partition_edges() {
        let ds = numbered(4);
        let (first, second) = ds.partition(0.0).unwrap();
        assert_eq!((first.len(), second.len()), (0, 4));
        let (first, second) = ds.partition(1.0).unwrap();
        assert_eq!((first.len(), second.len()), (4, 0));
        assert_eq!(
            ds.partition(1.5),
            Err(DatasetError::FractionOutOfRange(1.5))
        );
        assert!(ds.partition(-0.1).is_err());
        assert!(ds.partition(f64::NAN).is_err());
    }

    #[test]
    fn test_partition_keeps_metadata() {
        let ds = numbered(4).with_source("abalone.data");
        let (first, _) = ds.partition(0.5).unwrap();
        assert_eq!(first.class_column(), 1);
        assert_eq!(first.attribute_columns(), &[0]);
        assert_eq!(first.source(), "abalone.data");
    }

    #[test]
    fn test_eight_rows_four_folds() {
        let ds = numbered(8);
        let folds = ds.validation_folds(4).unwrap();
        assert_eq!(folds.len(), 4);
        for (i, fold) in folds.iter().enumerate() {
            assert_eq!(ids(&fold.test), vec![2 * i, 2 * i + 1]);
            assert_eq!(fold.train.len(), 6);
            let test = ids(&fold.test);
            assert!(ids(&fold.train).iter().all(|id| !test.contains(id)));
        }
        assert_eq!(ids(&folds[1].train), vec![0, 1, 4, 5, 6, 7]);
    }

    #[test]
    fn test_folds_cover_every_row_once() {
        let ds = numbered(23);
        for n in 1..=23 {
            let folds = ds.validation_folds(n).unwrap();
            let mut tested: Vec<usize> = folds.iter().flat_map(|f| ids(&f.test)).collect();
            tested.sort_unstable();
            assert_eq!(tested, (0..23).collect::<Vec<_>>());

            let mut train_counts = vec![0; 23];
            for f in &folds {
                for id in ids(&f.train) {
                    train_counts[id] += 1;
                }
            }
            assert!(train_counts.iter().all(|&c| c == n - 1));
        }
    }

    #[test]
    fn test_last_section_takes_remainder() {
        let folds = numbered(10).validation_folds(3).unwrap();
        let sizes: Vec<usize> = folds.iter().map(|f| f.test.len()).collect();
        assert_eq!(sizes, vec![3, 3, 4]);
    }

    #[test]
    fn test_invalid_fold_counts() {
        let ds = numbered(3);
        assert_eq!(
            ds.validation_folds(0),
            Err(DatasetError::InvalidFoldCount { folds: 0, rows: 3 })
        );
        assert!(ds.validation_folds(4).is_err());
    }

    #[test]
    fn test_folds_do_not_touch_source() {
        let ds = numbered(6);
        let before = ds.clone();
        let mut folds = ds.validation_folds(3).unwrap();
        folds[0].train.shuffle(Some(1));
        assert_eq!(ds, before);
    }

    #[test]
    fn test_shuffle_is_seeded_permutation() {
        let mut a = numbered(20);
        let mut b = numbered(20);
        a.shuffle(Some(7));
        b.shuffle(Some(7));
        assert_eq!(ids(&a), ids(&b));
        let mut sorted = ids(&a);
        sorted.sort_unstable();
        assert_eq!(sorted, (0..20).collect::<Vec<_>>());
    }

    #[test]
    fn test_sample() {
        let mut ds = numbered(10);
        ds.sample(4, Some(3)).unwrap();
        assert_eq!(ds.len(), 4);
        let mut picked = ids(&ds);
        picked.sort_unstable();
        picked.dedup();
        assert_eq!(picked.len(), 4);

        let mut all = numbered(5);
        all.sample(5, Some(3)).unwrap();
        assert_eq!(all.len(), 5);
    }

    #[test]
    fn test_sample_too_many() {
        let mut ds = numbered(3);
        assert_eq!(
            ds.sample(4, Some(0)),
            Err(DatasetError::Size {
                requested: 4,
                available: 3
            })
        );
        assert_eq!(ds.len(), 3);
    }

    #[test]
    fn test_fold_records_are_shared() {
        let ds = numbered(4);
        let folds = ds.validation_folds(2).unwrap();
        let first: &Record = &folds[0].test.rows()[0];
        assert!(first.ptr_eq(&ds.rows()[0]));
    }
}
