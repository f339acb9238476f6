use std::path::PathBuf;
use thiserror::Error;

pub type FoldResult<T> = std::result::Result<T, FoldError>;

/// Broad classification of a [`FoldError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// Descriptor missing, malformed, or lacking a required field.
    Config,
    /// Manifest unreadable or output destination unwritable.
    Io,
    /// Caller-supplied value outside its valid range.
    InvalidArgument,
}

#[derive(Debug, Error)]
pub enum FoldError {
    #[error("failed to load descriptor at {path}: {source}")]
    DescriptorLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse descriptor at {path}: {source}")]
    DescriptorParse {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid descriptor: {0}")]
    Config(String),

    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("failed to read manifest {path}: {source}")]
    ManifestRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write {path}: {source}")]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to render descriptor: {0}")]
    Render(#[from] serde_yaml::Error),
}

impl FoldError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::DescriptorLoad { .. } | Self::DescriptorParse { .. } | Self::Config(_) | Self::Render(_) => {
                ErrorKind::Config
            }
            Self::ManifestRead { .. } | Self::Write { .. } => ErrorKind::Io,
            Self::InvalidArgument(_) => ErrorKind::InvalidArgument,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_classification() {
        let io = std::io::Error::new(std::io::ErrorKind::NotFound, "gone");
        let err = FoldError::ManifestRead { path: PathBuf::from("train.txt"), source: io };
        assert_eq!(err.kind(), ErrorKind::Io);
        assert!(err.to_string().contains("train.txt"));

        assert_eq!(FoldError::Config("missing `train`".to_string()).kind(), ErrorKind::Config);
        assert_eq!(FoldError::InvalidArgument("folds".to_string()).kind(), ErrorKind::InvalidArgument);
    }
}
