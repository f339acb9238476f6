//! Foldsplit Core
//!
//! Single-fold cross-validation splits for dataset manifests:
//! - Loading dataset descriptors (`DatasetDescriptor`)
//! - Seeded, shuffled K-fold partitioning (`KFold`)
//! - Reading and atomically writing manifest files
//! - Producing the train/val manifests for fold 0 (`FoldSplitter`, `make_fold`)

pub mod config;
pub mod descriptor;
pub mod error;
pub mod kfold;
pub mod layout;
pub mod manifest;
pub mod splitter;

pub use config::CliConfig;
pub use descriptor::DatasetDescriptor;
pub use error::{ErrorKind, FoldError, FoldResult};
pub use kfold::{FoldAssignment, KFold};
pub use layout::FoldLayout;
pub use manifest::{read_manifest, render_manifest, write_manifest};
pub use splitter::{make_fold, FoldOptions, FoldOutputs, FoldSplitter};
