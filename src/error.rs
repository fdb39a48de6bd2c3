use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Main error type for fmedit operations
#[derive(Error, Diagnostic, Debug)]
pub enum FmError {
    #[error("IO error with {path}: {message}")]
    #[diagnostic(code(fmedit::io))]
    Io { path: PathBuf, message: String },

    #[error("Malformed document: {message}")]
    #[diagnostic(code(fmedit::malformed))]
    Malformed {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Header parse error: {message}")]
    #[diagnostic(code(fmedit::header))]
    HeaderParse {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Serialize error: {message}")]
    #[diagnostic(code(fmedit::serialize))]
    Serialize { message: String },

    #[error("Config error: {message}")]
    #[diagnostic(code(fmedit::config))]
    Config {
        message: String,
        #[help]
        help: Option<String>,
    },

    #[error("Batch stopped at {path}")]
    #[diagnostic(code(fmedit::batch))]
    Batch {
        path: PathBuf,
        /// Documents rewritten before the failure.
        completed: Vec<PathBuf>,
        #[source]
        source: Box<FmError>,
        #[help]
        help: Option<String>,
    },
}

impl FmError {
    /// Attach a path to errors raised while reading or writing a document.
    pub fn io(path: impl Into<PathBuf>, err: std::io::Error) -> Self {
        FmError::Io {
            path: path.into(),
            message: err.to_string(),
        }
    }

    /// Wrap the first failure of a batch run.
    pub fn batch(path: PathBuf, completed: Vec<PathBuf>, source: FmError) -> Self {
        let help = if completed.is_empty() {
            Some("No documents were rewritten before the failure".to_string())
        } else {
            let names: Vec<String> = completed.iter().map(|p| p.display().to_string()).collect();
            Some(format!(
                "{} document(s) were already rewritten: {}",
                completed.len(),
                names.join(", ")
            ))
        };

        FmError::Batch {
            path,
            completed,
            source: Box::new(source),
            help,
        }
    }
}

pub type Result<T> = std::result::Result<T, FmError>;
