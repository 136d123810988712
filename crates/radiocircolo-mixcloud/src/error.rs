//! Mixcloud client error types.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum MixcloudError {
    #[error("mixcloud request timed out")]
    Timeout,

    #[error("mixcloud request failed: {0}")]
    Http(#[source] reqwest::Error),

    #[error("mixcloud returned status {0}")]
    Status(reqwest::StatusCode),

    #[error("invalid mixcloud response: {0}")]
    Decode(#[source] reqwest::Error),
}

impl From<reqwest::Error> for MixcloudError {
    fn from(e: reqwest::Error) -> Self {
        if e.is_timeout() {
            MixcloudError::Timeout
        } else if e.is_decode() {
            MixcloudError::Decode(e)
        } else {
            MixcloudError::Http(e)
        }
    }
}
