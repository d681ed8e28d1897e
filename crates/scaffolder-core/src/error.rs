//! Error type shared by every scaffolding stage

use std::io;
use std::path::PathBuf;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ScaffoldError {
    /// The user cancelled at a prompt or chose not to overwrite
    #[error("Operation cancelled")]
    UserCancelled,

    #[error("\"{0}\" isn't a valid template")]
    InvalidTemplate(String),

    #[error("Unexpected answer for {step}: {value}")]
    InvalidAnswer { step: &'static str, value: String },

    #[error("Template directory not found: {}", .0.display())]
    TemplateNotFound(PathBuf),

    #[error("Template manifest not found: {}", .0.display())]
    ManifestMissing(PathBuf),

    #[error("Invalid template manifest: {0}")]
    InvalidManifest(String),

    #[error("Failed to parse template manifest: {0}")]
    Manifest(#[from] serde_json::Error),

    #[error("{}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },

    #[error("Prompt failed: {0}")]
    Prompt(io::Error),

    #[error("Failed to run {program}: {source}")]
    Spawn {
        program: String,
        #[source]
        source: io::Error,
    },
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

impl ScaffoldError {
    /// Prompt backends report Esc / Ctrl-C as an interrupted read
    pub fn from_prompt(err: io::Error) -> Self {
        if err.kind() == io::ErrorKind::Interrupted {
            ScaffoldError::UserCancelled
        } else {
            ScaffoldError::Prompt(err)
        }
    }

    pub fn io(path: impl Into<PathBuf>, source: io::Error) -> Self {
        ScaffoldError::Io {
            path: path.into(),
            source,
        }
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, ScaffoldError::UserCancelled)
    }
}
