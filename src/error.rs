use thiserror::Error;

/// Closed set of failure kinds; every one is fatal to the run.
#[derive(Debug, Error)]
pub enum Error {
    /// Bad invocation input, detected before any network call.
    #[error("{0}")]
    Input(String),

    /// Connection, DNS, TLS or request-construction failure.
    #[error(transparent)]
    Transport(#[from] reqwest::Error),

    /// Request body could not be serialized.
    #[error(transparent)]
    Serialize(#[from] serde_json::Error),

    /// Non-2xx response; the raw body text is the message, verbatim.
    #[error("{body}")]
    Api { status: u16, body: String },

    /// A user in the add or remove list did not resolve.
    #[error("failed to get user {user:?}: {source}")]
    Validation { user: String, source: Box<Error> },
}

pub type Result<T> = std::result::Result<T, Error>;
