// Errors surfaced by the dashboard use cases
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// The backend could not be reached or answered with something that is
/// not a JSON document of the expected shape.
#[derive(Debug, thiserror::Error)]
pub enum TransportError {
    #[error("request to {url} failed")]
    Request {
        url: String,
        #[source]
        source: BoxError,
    },
    #[error("response from {url} could not be decoded")]
    Decode {
        url: String,
        #[source]
        source: BoxError,
    },
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("no date selected")]
    Validation,
    #[error("server reported: {0}")]
    ServerReported(String),
    #[error(transparent)]
    Transport(#[from] TransportError),
    #[error("failed to draw chart")]
    Surface(#[source] BoxError),
}
