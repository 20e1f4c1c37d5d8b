use dsspfmt::io::document::DocumentError;
use dsspfmt::io::dssp::DsspError;
use dsspfmt::records::conformation::CifError;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, CliError>;

#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Document(#[from] DocumentError),

    #[error(transparent)]
    Report(#[from] DsspError),

    #[error(transparent)]
    Annotation(#[from] CifError),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}
