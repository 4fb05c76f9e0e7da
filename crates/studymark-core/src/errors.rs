use std::path::PathBuf;

use thiserror::Error;

/// Result type alias using StudymarkError
pub type Result<T> = std::result::Result<T, StudymarkError>;

/// Error taxonomy for studymark operations
///
/// Only genuinely fatal conditions live here: I/O on the corpus root,
/// unparseable configuration, and engine spawn failures. Structural lint
/// findings and snippet mismatches are reported as [`crate::Diagnostic`]
/// values instead, because one bad document must never abort the run.
#[derive(Error, Debug)]
pub enum StudymarkError {
    /// Corpus root directory was not found or is not a directory
    #[error("Corpus root not found: {path}")]
    CorpusRootNotFound { path: PathBuf },

    /// I/O failure reading or writing a file
    #[error("I/O error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Lint configuration file could not be parsed
    #[error("Invalid configuration in {path}: {message}")]
    ConfigParse { path: PathBuf, message: String },

    /// The external JavaScript engine could not be spawned at all
    #[error("Failed to spawn JavaScript engine '{engine}': {message}")]
    EngineSpawn { engine: String, message: String },

    /// Serialization error (JSON encoding/decoding)
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl StudymarkError {
    /// Wrap an I/O error with the path it occurred on
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        StudymarkError::Io {
            path: path.into(),
            source,
        }
    }
}

/// Conversion from serde_json::Error to StudymarkError
impl From<serde_json::Error> for StudymarkError {
    fn from(err: serde_json::Error) -> Self {
        StudymarkError::Serialization {
            message: err.to_string(),
        }
    }
}
