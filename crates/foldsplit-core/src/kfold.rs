//! Shuffled K-fold partitioning.
//!
//! Indices `0..n` are shuffled with a seeded `ChaCha8Rng`, then cut into
//! `n_splits` contiguous folds. The first `n % n_splits` folds hold one extra
//! item. Only fold 0 is ever materialized: it becomes the validation set and
//! everything else the training set.

use crate::error::{FoldError, FoldResult};
use rand::SeedableRng;
use rand::seq::SliceRandom;
use rand_chacha::ChaCha8Rng;

pub const MIN_SPLITS: usize = 2;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct KFold {
    n_splits: usize,
    seed: u64,
}

/// Train/validation index sets for one fold, each sorted ascending.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldAssignment {
    pub train: Vec<usize>,
    pub val: Vec<usize>,
}

impl KFold {
    pub fn new(n_splits: usize, seed: u64) -> FoldResult<Self> {
        if n_splits < MIN_SPLITS {
            return Err(FoldError::InvalidArgument(format!(
                "folds must be at least {MIN_SPLITS}, got {n_splits}"
            )));
        }
        Ok(Self { n_splits, seed })
    }

    #[must_use]
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Size of every fold for `n_samples` items.
    #[must_use]
    pub fn fold_sizes(&self, n_samples: usize) -> Vec<usize> {
        let base = n_samples / self.n_splits;
        let extra = n_samples % self.n_splits;
        (0..self.n_splits).map(|i| base + usize::from(i < extra)).collect()
    }

    /// Partition `0..n_samples` and return the first fold.
    pub fn split(&self, n_samples: usize) -> FoldResult<FoldAssignment> {
        if n_samples < self.n_splits {
            return Err(FoldError::InvalidArgument(format!(
                "cannot split {n_samples} samples into {} folds",
                self.n_splits
            )));
        }

        let mut indices: Vec<usize> = (0..n_samples).collect();
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        indices.shuffle(&mut rng);

        let mut train = indices.split_off(self.fold_sizes(n_samples)[0]);
        let mut val = indices;
        train.sort_unstable();
        val.sort_unstable();

        tracing::debug!(
            samples = n_samples,
            folds = self.n_splits,
            train = train.len(),
            val = val.len(),
            "computed first fold"
        );

        Ok(FoldAssignment { train, val })
    }
}

impl FoldAssignment {
    /// Pick the items named by each index set, keeping original order.
    #[must_use]
    pub fn select<'a, T>(&self, items: &'a [T]) -> (Vec<&'a T>, Vec<&'a T>) {
        let pick = |idx: &[usize]| -> Vec<&'a T> { idx.iter().map(|&i| &items[i]).collect() };
        (pick(&self.train), pick(&self.val))
    }
}
