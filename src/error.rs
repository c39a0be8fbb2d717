use std::path::PathBuf;

/// Errors from loading [`DiffOptions`](crate::options::DiffOptions).
///
/// Diffing itself cannot fail.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to read options file {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid options: {0}")]
    Parse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
