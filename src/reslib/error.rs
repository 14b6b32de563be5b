use thiserror::Error;

#[derive(Error, Debug)]
pub enum ReslibError {
    #[error("Duplicate resource id: {0}")]
    DuplicateId(String),

    #[error("Resource not found: {0}")]
    ResourceNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ReslibError>;
