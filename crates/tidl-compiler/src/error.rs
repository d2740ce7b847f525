//! Driver error types.

use std::io;
use std::path::PathBuf;

use thiserror::Error;
use tidl_codegen::CodegenError;

/// Errors that can occur while setting up or running a generation.
#[derive(Debug, Error)]
pub enum GenerateError {
    /// No generator is registered under the requested id.
    #[error("unknown generator `{0}`")]
    UnknownGenerator(String),

    /// The generator rejected the program, or writing its output failed.
    #[error(transparent)]
    Codegen(#[from] CodegenError),

    /// Creating, opening or reading back an output path failed.
    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    /// The configuration file is not valid JSON for [`crate::Config`].
    #[error("invalid configuration: {0}")]
    Config(#[from] serde_json::Error),
}

impl GenerateError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        GenerateError::Io {
            path: path.into(),
            source,
        }
    }
}
