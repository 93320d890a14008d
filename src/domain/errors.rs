use thiserror::Error;

// Failure talking to Twitch, independent of the HTTP client in use.
#[derive(Debug, Error)]
pub enum UpstreamError {
    #[error("invalid upstream url: {0}")]
    InvalidUrl(String),
    #[error("transport error: {0}")]
    Transport(String),
    #[error("upstream answered {status}{}", message_suffix(.message))]
    Status { status: u16, message: Option<String> },
    #[error("response decode error: {0}")]
    Decode(String),
}

fn message_suffix(message: &Option<String>) -> String {
    message
        .as_deref()
        .map(|message| format!(": {message}"))
        .unwrap_or_default()
}

impl UpstreamError {
    pub fn is_unauthorized(&self) -> bool {
        matches!(self, UpstreamError::Status { status: 401, .. })
    }
}

// Errors surfaced while resolving the channel status.
#[derive(Debug, Error)]
pub enum StatusError {
    #[error("failed to authenticate with twitch: {0}")]
    Auth(UpstreamError),
    #[error("failed to query twitch streams: {0}")]
    Query(UpstreamError),
}
