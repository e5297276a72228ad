use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CommitplotError>;

/// Everything that can abort a run. The tool is a one-shot batch job, so every
/// variant is fatal: no retries, no partial output.
#[derive(Error, Debug)]
pub enum CommitplotError {
    #[error("configuration error: {0}")]
    Config(String),
    #[error("unsupported repository URL `{0}`")]
    UnsupportedUrl(String),
    #[error("SSH key file `{}` does not exist", .0.display())]
    SshKeyMissing(PathBuf),
    #[error("clone failed: {0}")]
    Clone(String),
    #[error("history extraction failed: {0}")]
    Extraction(String),
    #[error("could not parse commit date: {0}")]
    Parse(String),
    #[error("chart rendering failed: {0}")]
    Render(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
