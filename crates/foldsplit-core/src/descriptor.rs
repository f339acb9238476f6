//! Dataset descriptor loading.
//!
//! A descriptor is a YAML mapping with a base directory and the manifest
//! files it contains:
//!
//! ```yaml
//! path: data/kaist-rgbt
//! train: [train-all-04.txt]
//! val: [test-all-20.txt]
//! nc: 4
//! names: [person, cyclist, people, person?]
//! ```
//!
//! Only the first `train` and `val` entries are used. Keys other than
//! `path`, `train` and `val` are carried through untouched when a fold
//! descriptor is rendered.

use crate::error::{FoldError, FoldResult};
use serde::{Deserialize, Deserializer};
use serde_yaml::{Mapping, Value};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize)]
pub struct DatasetDescriptor {
    /// Base directory holding the manifests and receiving the fold outputs.
    pub path: PathBuf,
    #[serde(deserialize_with = "one_or_many")]
    pub train: Vec<PathBuf>,
    #[serde(deserialize_with = "one_or_many")]
    pub val: Vec<PathBuf>,
    #[serde(skip)]
    raw: Mapping,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum OneOrMany {
    One(PathBuf),
    Many(Vec<PathBuf>),
}

fn one_or_many<'de, D>(deserializer: D) -> Result<Vec<PathBuf>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match OneOrMany::deserialize(deserializer)? {
        OneOrMany::One(path) => vec![path],
        OneOrMany::Many(paths) => paths,
    })
}

impl DatasetDescriptor {
    /// Load and validate a descriptor file.
    pub fn load(path: &Path) -> FoldResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| FoldError::DescriptorLoad { path: path.to_path_buf(), source: e })?;
        Self::parse(&content, path)
    }

    /// Parse descriptor content. `origin` is only used for error messages.
    pub fn parse(content: &str, origin: &Path) -> FoldResult<Self> {
        let parse_err = |e| FoldError::DescriptorParse { path: origin.to_path_buf(), source: e };

        let mut descriptor: Self = serde_yaml::from_str(content).map_err(parse_err)?;
        descriptor.raw = serde_yaml::from_str(content).map_err(parse_err)?;
        if descriptor.path.as_os_str().is_empty() {
            descriptor.path = PathBuf::from(".");
        }
        descriptor.validate()?;
        Ok(descriptor)
    }

    pub fn validate(&self) -> FoldResult<()> {
        if self.train.is_empty() {
            return Err(FoldError::Config("`train` must name at least one manifest".to_string()));
        }
        if self.val.is_empty() {
            return Err(FoldError::Config("`val` must name at least one manifest".to_string()));
        }
        Ok(())
    }

    #[must_use]
    pub fn base_dir(&self) -> &Path {
        &self.path
    }

    /// Full path of the training manifest (`path / train[0]`).
    #[must_use]
    pub fn train_manifest_path(&self) -> PathBuf {
        self.path.join(&self.train[0])
    }

    pub fn train_stem(&self) -> FoldResult<String> {
        stem_of(&self.train[0], "train")
    }

    pub fn val_stem(&self) -> FoldResult<String> {
        stem_of(&self.val[0], "val")
    }

    /// Render a copy of this descriptor whose `train` and `val` point at the
    /// given manifests. Every other key is preserved in its original order.
    pub fn render_fold(&self, train: &Path, val: &Path) -> FoldResult<String> {
        let mut doc = self.raw.clone();
        doc.insert(Value::from("train"), path_list(train));
        doc.insert(Value::from("val"), path_list(val));
        Ok(serde_yaml::to_string(&doc)?)
    }
}

fn stem_of(path: &Path, key: &str) -> FoldResult<String> {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .filter(|s| !s.is_empty())
        .ok_or_else(|| FoldError::Config(format!("`{key}` entry has no file name: {}", path.display())))
}

fn path_list(path: &Path) -> Value {
    Value::Sequence(vec![Value::from(path.to_string_lossy().into_owned())])
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ErrorKind;

    const KAIST: &str = r"
path: data/kaist-rgbt
train: [train-all-04.txt, extra.txt]
val:
  - test-all-20.txt
nc: 4
names: [person, cyclist]
";

    #[test]
    fn test_parse_descriptor() {
        let d = DatasetDescriptor::parse(KAIST, Path::new("kaist.yaml")).unwrap();
        assert_eq!(d.base_dir(), Path::new("data/kaist-rgbt"));
        assert_eq!(d.train_manifest_path(), PathBuf::from("data/kaist-rgbt/train-all-04.txt"));
        assert_eq!(d.train_stem().unwrap(), "train-all-04");
        assert_eq!(d.val_stem().unwrap(), "test-all-20");
    }

    #[test]
    fn test_single_string_entries() {
        let d = DatasetDescriptor::parse("path: base\ntrain: a/list.txt\nval: b.txt\n", Path::new("d.yaml")).unwrap();
        assert_eq!(d.train, vec![PathBuf::from("a/list.txt")]);
        assert_eq!(d.train_stem().unwrap(), "list");
    }

    #[test]
    fn test_missing_train_is_config_error() {
        let err = DatasetDescriptor::parse("path: base\nval: [v.txt]\n", Path::new("d.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
        assert!(err.to_string().contains("train"));
    }

    #[test]
    fn test_empty_sequences_rejected() {
        let err = DatasetDescriptor::parse("path: base\ntrain: []\nval: [v.txt]\n", Path::new("d.yaml")).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_empty_path_means_current_dir() {
        let d = DatasetDescriptor::parse("path: ''\ntrain: [t.txt]\nval: [v.txt]\n", Path::new("d.yaml")).unwrap();
        assert_eq!(d.base_dir(), Path::new("."));
        assert_eq!(d.train_manifest_path(), PathBuf::from("./t.txt"));
    }

    #[test]
    fn test_malformed_yaml() {
        let err = DatasetDescriptor::parse("path: [unclosed", Path::new("d.yaml")).unwrap_err();
        assert!(matches!(err, FoldError::DescriptorParse { .. }));
    }

    #[test]
    fn test_missing_file() {
        let err = DatasetDescriptor::load(Path::new("/definitely/not/here.yaml")).unwrap_err();
        assert!(matches!(err, FoldError::DescriptorLoad { .. }));
        assert_eq!(err.kind(), ErrorKind::Config);
    }

    #[test]
    fn test_render_fold_preserves_extra_keys() {
        let d = DatasetDescriptor::parse(KAIST, Path::new("kaist.yaml")).unwrap();
        let rendered = d
            .render_fold(Path::new("train-all-04_fold5.txt"), Path::new("test-all-20_fold5.txt"))
            .unwrap();

        let reparsed = DatasetDescriptor::parse(&rendered, Path::new("fold.yaml")).unwrap();
        assert_eq!(reparsed.path, d.path);
        assert_eq!(reparsed.train, vec![PathBuf::from("train-all-04_fold5.txt")]);
        assert_eq!(reparsed.val, vec![PathBuf::from("test-all-20_fold5.txt")]);
        assert!(rendered.contains("nc: 4"));
        assert!(rendered.contains("cyclist"));
    }
}
