use reqwest::StatusCode;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("connection error: {0}")]
    Connection(#[source] reqwest::Error),

    #[error("protocol error: {status}: {body}")]
    Status { status: StatusCode, body: String },

    #[error("could not decode response: {0}")]
    Decode(#[from] serde_json::Error),

    #[error("invalid price {input:?}: expected an integer")]
    InvalidPrice { input: String },

    #[error("invalid base url {input:?}: {reason}")]
    Url { input: String, reason: String },

    #[error("no row with id {0}")]
    RowNotFound(i64),

    #[error("could not build http client: {0}")]
    Client(#[source] reqwest::Error),

    #[error("export failed: {0}")]
    Export(#[from] csv::Error),
}
