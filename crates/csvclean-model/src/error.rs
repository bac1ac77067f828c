use std::path::PathBuf;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum EngineError {
    #[error("cannot read file '{path}': {source}")]
    UnreadableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("no supported delimiter parses '{path}' into a rectangular table")]
    UnparseableFile { path: PathBuf },
    #[error("column '{column}' does not exist in table '{table}'")]
    MissingKeyColumn { table: String, column: String },
    #[error("cannot write file '{path}': {source}")]
    UnwritableFile {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("not a directory: '{path}'")]
    DirectoryNotFound { path: PathBuf },
    #[error("cannot read directory '{path}': {source}")]
    DirectoryRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, EngineError>;
