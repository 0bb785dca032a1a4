/// Errors that can occur while talking to the tracker server.
///
/// Every variant is transient from the dashboard's point of view: callers
/// log it (or show a toast for explicit user actions) and keep going.
#[derive(Debug, thiserror::Error)]
pub enum NetworkError {
    /// The server answered with a non-2xx status.
    #[error("request failed with status {status}")]
    Status { status: u16 },
    /// The response body was not the expected JSON shape.
    #[error("failed to decode response: {0}")]
    Decode(String),
    /// The request never produced a response (connection refused, timeout,
    /// DNS failure, ...).
    #[error("transport error: {0}")]
    Transport(String),
}

impl NetworkError {
    /// The HTTP status carried by this error, when there was a response.
    pub fn status(&self) -> Option<u16> {
        match self {
            NetworkError::Status { status } => Some(*status),
            _ => None,
        }
    }
}

impl From<reqwest::Error> for NetworkError {
    fn from(error: reqwest::Error) -> Self {
        if let Some(status) = error.status() {
            return NetworkError::Status {
                status: status.as_u16(),
            };
        }
        let is_decode = error.is_decode();
        // strip the URL so tokens in query strings never reach the logs
        let message = error.without_url().to_string();
        if is_decode {
            NetworkError::Decode(message)
        } else {
            NetworkError::Transport(message)
        }
    }
}
