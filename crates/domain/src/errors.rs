use thiserror::Error;

#[derive(Error, Debug, Clone)]
pub enum DomainError {
    #[error("Invalid domain name: {0}")]
    InvalidDomainName(String),

    #[error("Host not found: {0}")]
    HostNotFound(String),

    #[error("Database error: {0}")]
    DatabaseError(String),
}
