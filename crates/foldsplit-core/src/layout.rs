use std::path::{Path, PathBuf};

/// Output naming for a `<folds>`-way split.
///
/// Manifests land next to the originals as `<stem>_fold<folds>.txt`; the
/// optional fold descriptor lands next to the base descriptor as
/// `<descriptor_stem>_fold<folds>.yaml`.
#[derive(Debug, Clone)]
pub struct FoldLayout {
    base: PathBuf,
    folds: usize,
}

impl FoldLayout {
    #[must_use]
    pub fn new(base: PathBuf, folds: usize) -> Self {
        Self { base, folds }
    }

    #[must_use]
    pub fn base(&self) -> &Path {
        &self.base
    }

    /// Bare file name for a fold manifest derived from `stem`.
    #[must_use]
    pub fn manifest_name(&self, stem: &str) -> String {
        format!("{stem}_fold{}.txt", self.folds)
    }

    #[must_use]
    pub fn manifest_path(&self, stem: &str) -> PathBuf {
        self.base.join(self.manifest_name(stem))
    }

    #[must_use]
    pub fn descriptor_path(&self, base_descriptor: &Path) -> PathBuf {
        let stem = base_descriptor
            .file_stem()
            .map_or_else(|| "data".to_string(), |s| s.to_string_lossy().into_owned());
        let name = format!("{stem}_fold{}.yaml", self.folds);
        match base_descriptor.parent() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_paths() {
        let layout = FoldLayout::new(PathBuf::from("data/kaist"), 5);
        assert_eq!(layout.manifest_name("train-all-04"), "train-all-04_fold5.txt");
        assert_eq!(layout.manifest_path("test-all-20"), PathBuf::from("data/kaist/test-all-20_fold5.txt"));
        assert_eq!(
            layout.descriptor_path(Path::new("cfg/kaist-rgbt.yaml")),
            PathBuf::from("cfg/kaist-rgbt_fold5.yaml")
        );
        assert_eq!(layout.descriptor_path(Path::new("kaist.yaml")), PathBuf::from("kaist_fold5.yaml"));
    }
}
