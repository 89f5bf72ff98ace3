use thiserror::Error;

#[derive(Error, Debug)]
pub enum NavigatorError {
    #[error("Model invocation failed: {0}")]
    ModelInvocation(String),

    #[error("Ingestion error: {0}")]
    Ingestion(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, NavigatorError>;
