use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("Source directory not found: {0}")]
    SourceNotFound(String),

    #[error("Target directory not found: {0}")]
    TargetNotFound(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn code(&self) -> &'static str {
        match self {
            Error::SourceNotFound(_) => "SOURCE_NOT_FOUND",
            Error::TargetNotFound(_) => "TARGET_NOT_FOUND",
            Error::Io(_) => "IO_ERROR",
            Error::Json(_) => "JSON_ERROR",
        }
    }
}
