use thiserror::Error;

/// Failure from the data source. The loader treats every kind the same;
/// the variants exist so catalog implementations can report what actually
/// went wrong.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("HTTP error: {0}")]
    Http(String),

    #[error("API error: {0}")]
    Api(String),

    #[error("decode error: {0}")]
    Decode(String),
}

impl From<reqwest::Error> for FetchError {
    fn from(err: reqwest::Error) -> Self {
        if err.is_decode() {
            FetchError::Decode(err.to_string())
        } else {
            FetchError::Http(err.to_string())
        }
    }
}

pub type Result<T> = std::result::Result<T, FetchError>;
