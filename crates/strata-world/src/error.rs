use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum WorldError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse worldgen config: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid worldgen config: {0}")]
    InvalidConfig(String),

    #[error("expected {expected} column heights, got {actual}")]
    HeightCount { expected: usize, actual: usize },
}
