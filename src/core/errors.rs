use thiserror::Error;

#[derive(Error, Debug)]
pub enum CardForgeError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    EmptyResult(String),

    #[error("Card generation failed: {0}")]
    Generation(String),

    #[error("I/O error: {0}")]
    Io(Box<std::io::Error>),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Reqwest error: {0}")]
    Reqwest(Box<reqwest::Error>),
}

impl CardForgeError {
    /// Fold a failure coming out of the remote call into a `Generation`
    /// error with a readable message. `Generation` passes through as-is.
    pub fn into_generation(self) -> Self {
        match self {
            CardForgeError::Generation(_) => self,
            CardForgeError::Reqwest(e) => CardForgeError::Generation(e.to_string()),
            other => CardForgeError::Generation(other.to_string()),
        }
    }
}

impl From<std::io::Error> for CardForgeError {
    fn from(error: std::io::Error) -> Self {
        CardForgeError::Io(Box::new(error))
    }
}

impl From<reqwest::Error> for CardForgeError {
    fn from(error: reqwest::Error) -> Self {
        CardForgeError::Reqwest(Box::new(error))
    }
}
