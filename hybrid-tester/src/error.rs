use thiserror::Error;

#[derive(Debug, Error)]
pub enum ProbeError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),
    #[error("malformed response body: {0}")]
    Decode(#[from] serde_json::Error),
    #[error("fixture generation failed: {0}")]
    Fixture(#[from] fixture::FixtureError),
    #[error("response is missing `{0}`")]
    MissingField(&'static str),
}

/// Convenience result type used throughout this crate.
pub type Result<T> = std::result::Result<T, ProbeError>;
