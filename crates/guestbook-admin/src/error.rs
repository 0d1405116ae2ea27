use thiserror::Error;

/// Terminal failure conditions for one operator invocation. Declining a
/// confirmation prompt is not among them; a decline is a normal outcome and
/// exits with success.
#[derive(Debug, Error)]
pub enum OpError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("{0}")]
    NotFound(String),

    #[error("storage failure: {0:#}")]
    Storage(anyhow::Error),

    #[error("hashing failure: {0}")]
    Hashing(#[from] bcrypt::BcryptError),
}

impl From<anyhow::Error> for OpError {
    fn from(err: anyhow::Error) -> Self {
        Self::Storage(err)
    }
}
