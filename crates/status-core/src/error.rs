//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StatusError {
    #[error("CONTEXT/{0}")]
    Context(String),

    #[error("SINK/{0}")]
    Sink(String),

    #[error("CONFIG/{0}")]
    Config(String),

    #[error("DELIVERY/{0}")]
    Delivery(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),
}

pub type Result<T> = std::result::Result<T, StatusError>;

impl From<serde_json::Error> for StatusError {
    fn from(err: serde_json::Error) -> Self {
        StatusError::Serialize(err.to_string())
    }
}
