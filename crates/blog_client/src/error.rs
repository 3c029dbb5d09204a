use thiserror::Error;

/// Failures a controller can observe. Transport failures and server-reported
/// HTTP errors share one variant; call sites treat any rejected request the
/// same way, so the distinction never leaves the API layer.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("blog API request failed: {0}")]
    Api(#[from] reqwest::Error),

    #[error("invalid API base url: {0}")]
    BaseUrl(#[from] url::ParseError),
}

pub type Result<T> = std::result::Result<T, ClientError>;
