use thiserror::Error;

// Custom Application Error
#[derive(Error, Debug)]
pub enum AppError {
    #[error("File I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Dictionary error: {0}")]
    Dictionary(#[from] crate::dictionary::DictionaryError),
    #[error("{0}")]
    Ladder(#[from] crate::ladder::LadderError),
    #[error("Invalid file path: {0}")]
    InvalidPath(String),
    #[error("General error: {0}")]
    General(String),
}
