use thiserror::Error;

pub type ChartResult<T> = Result<T, ChartError>;

#[derive(Debug, Error)]
pub enum ChartError {
    #[error("no target surface registered under id `{id}`")]
    SurfaceNotFound { id: String },

    #[error("malformed dataset: {0}")]
    MalformedDataset(String),

    #[error("invalid options: {0}")]
    InvalidOptions(String),

    #[error("backend draw failed: {0}")]
    Backend(String),
}
