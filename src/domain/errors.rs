use thiserror::Error;

/// Errors raised while pulling a market snapshot from the upstream API.
///
/// Both variants collapse into the same fixed user-facing banner; the typed
/// distinction only feeds the diagnostic log.
#[derive(Debug, Error)]
pub enum FeedError {
    /// The endpoint answered, but with a non-success HTTP status.
    #[error("Respuesta no válida de la API: {status}")]
    UpstreamStatus { status: u16 },

    /// The request never completed or the body was not readable JSON.
    #[error("Fallo de red o de lectura: {0}")]
    Transport(#[from] reqwest::Error),
}
