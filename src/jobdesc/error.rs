use thiserror::Error;

#[derive(Debug, Error)]
pub enum JobDescriptionError {
    #[error("invalid job description URL {url:?}: {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("request to {url} failed: {reason}")]
    Request { url: String, reason: String },

    #[error("{url} returned HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("no job description text found at {url}")]
    NoContent { url: String },
}

pub type JobDescriptionResult<T> = Result<T, JobDescriptionError>;
