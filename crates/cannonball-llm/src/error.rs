use reqwest::StatusCode;
use thiserror::Error;

/// Longest response body kept in a [`TransportError::Status`].
pub const SNIPPET_LEN: usize = 200;

/// Why a completion produced no text.
#[derive(Debug, Error)]
pub enum CompletionError {
    /// Settings make a request impossible; nothing was sent.
    #[error("completion is not configured: {0}")]
    Config(String),

    /// The API answered with no choices.
    #[error("the model returned no choices")]
    EmptyResponse,

    #[error(transparent)]
    Transport(#[from] TransportError),
}

#[derive(Debug, Error)]
pub enum TransportError {
    #[error("request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("HTTP {status}: {snippet}")]
    Status { status: StatusCode, snippet: String },

    #[error("could not decode response: {0}")]
    Decode(String),
}

/// First [`SNIPPET_LEN`] characters of a response body, trimmed, for error
/// messages.
pub fn make_snippet(body: &str) -> String {
    let body = body.trim();
    match body.char_indices().nth(SNIPPET_LEN) {
        Some((cut, _)) => format!("{}…", &body[..cut]),
        None => body.to_string(),
    }
}
