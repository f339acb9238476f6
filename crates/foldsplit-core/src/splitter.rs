use crate::config::{DEFAULT_FOLDS, DEFAULT_SEED};
use crate::descriptor::DatasetDescriptor;
use crate::error::FoldResult;
use crate::kfold::KFold;
use crate::layout::FoldLayout;
use crate::manifest::{read_manifest, write_atomic, write_manifest};
use serde::Serialize;
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FoldOptions {
    pub folds: usize,
    pub seed: u64,
    /// Also write `<descriptor_stem>_fold<folds>.yaml` pointing at the new manifests.
    pub write_descriptor: bool,
}

impl Default for FoldOptions {
    fn default() -> Self {
        Self { folds: DEFAULT_FOLDS, seed: DEFAULT_SEED, write_descriptor: false }
    }
}

/// What a split run wrote.
#[derive(Debug, Clone, Serialize)]
pub struct FoldOutputs {
    pub train_path: PathBuf,
    pub val_path: PathBuf,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub descriptor_path: Option<PathBuf>,
    pub train_count: usize,
    pub val_count: usize,
    pub total: usize,
}

/// Materializes the first fold of a shuffled K-fold split of a descriptor's
/// training manifest.
#[derive(Debug, Clone)]
pub struct FoldSplitter {
    kfold: KFold,
    write_descriptor: bool,
}

impl FoldSplitter {
    pub fn new(options: &FoldOptions) -> FoldResult<Self> {
        Ok(Self {
            kfold: KFold::new(options.folds, options.seed)?,
            write_descriptor: options.write_descriptor,
        })
    }

    pub fn run(&self, descriptor_path: &Path) -> FoldResult<FoldOutputs> {
        let descriptor = DatasetDescriptor::load(descriptor_path)?;
        let manifest_path = descriptor.train_manifest_path();
        let lines = read_manifest(&manifest_path)?;
        tracing::debug!(manifest = %manifest_path.display(), lines = lines.len(), "read training manifest");

        let fold = self.kfold.split(lines.len())?;
        let (train, val) = fold.select(&lines);

        let layout = FoldLayout::new(descriptor.base_dir().to_path_buf(), self.kfold.n_splits());
        let train_name = layout.manifest_name(&descriptor.train_stem()?);
        let val_name = layout.manifest_name(&descriptor.val_stem()?);
        let train_path = layout.base().join(&train_name);
        let val_path = layout.base().join(&val_name);

        // Render the descriptor before touching disk so a bad document can't
        // leave manifests behind without it.
        let rendered = if self.write_descriptor {
            Some(descriptor.render_fold(Path::new(&train_name), Path::new(&val_name))?)
        } else {
            None
        };

        write_manifest(&train_path, &train)?;
        tracing::info!(path = %train_path.display(), count = train.len(), "wrote train split");
        write_manifest(&val_path, &val)?;
        tracing::info!(path = %val_path.display(), count = val.len(), "wrote val split");

        let descriptor_out = match rendered {
            Some(doc) => {
                let path = layout.descriptor_path(descriptor_path);
                write_atomic(&path, &doc)?;
                tracing::info!(path = %path.display(), "wrote fold descriptor");
                Some(path)
            }
            None => None,
        };

        Ok(FoldOutputs {
            train_path,
            val_path,
            descriptor_path: descriptor_out,
            train_count: train.len(),
            val_count: val.len(),
            total: lines.len(),
        })
    }
}

/// Split `descriptor_path`'s training manifest into fold 0 of `folds` and
/// write both halves. Returns the train output path; the val output is its
/// sibling named after `val[0]`.
pub fn make_fold(descriptor_path: &Path, folds: usize, seed: u64) -> FoldResult<PathBuf> {
    let options = FoldOptions { folds, seed, ..FoldOptions::default() };
    Ok(FoldSplitter::new(&options)?.run(descriptor_path)?.train_path)
}
