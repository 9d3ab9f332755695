use thiserror::Error;

#[derive(Error, Debug)]
pub enum MethodError {
    #[error("Unsupported language: {0:?}")]
    UnsupportedLanguage(String),
    #[error("Collaborator error: {0}")]
    Collaborator(String),
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, MethodError>;
