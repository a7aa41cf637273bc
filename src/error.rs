use thiserror::Error;

#[derive(Error, Debug)]
pub enum MinnowError {
    #[error("{0}")]
    Validation(String),

    #[error("Storage error: {0}")]
    Persistence(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("Unknown pond: {0}")]
    UnknownPond(String),

    #[error("Unknown customer: {0}")]
    UnknownCustomer(String),

    #[error("No such record: {0}")]
    NotFound(String),

    #[error("Settings error: {0}")]
    Settings(String),

    #[error("{0}")]
    Other(String),
}

pub type Result<T> = std::result::Result<T, MinnowError>;
