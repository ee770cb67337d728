use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    // Transport failures are passed through untouched
    #[error(transparent)]
    Transport(#[from] anyhow::Error),

    // Request building
    #[error(transparent)]
    Url(#[from] url::ParseError),
    #[error("base url cannot carry path segments: {0}")]
    CannotBeABase(String),
    #[error("base url must not carry a query or fragment: {0}")]
    BaseUrlQuery(String),
    #[error("invalid query params: {0}")]
    InvalidParams(&'static str),

    // Body encoding and response decoding
    #[error(transparent)]
    Serialization(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
