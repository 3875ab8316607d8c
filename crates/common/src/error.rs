use thiserror::Error;

#[derive(Debug, Error)]
pub enum RolodexError {
    #[error("configuration error: {0}")]
    Config(String),

    #[error("validation error: {0}")]
    Validation(String),

    #[error("upstream error: {0}")]
    Upstream(String),

    #[error("internal error: {0}")]
    Internal(String),
}

pub type RolodexResult<T> = Result<T, RolodexError>;
