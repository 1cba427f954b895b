use thiserror::Error;

#[derive(Debug, Error)]
pub enum DomainError {
    #[error("Database error: {0}")]
    Database(String),
}

pub type DomainResult<T> = Result<T, DomainError>;
