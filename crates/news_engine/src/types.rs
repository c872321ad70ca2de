use std::fmt;

use news_core::{Article, FetchFailure, FetchTicket};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EngineEvent {
    FetchCompleted {
        ticket: FetchTicket,
        result: Result<Vec<Article>, FetchError>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{kind}: {message}")]
pub struct FetchError {
    pub kind: FailureKind,
    pub message: String,
}

impl FetchError {
    pub(crate) fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FailureKind {
    InvalidUrl,
    HttpStatus(u16),
    Decode,
    Timeout,
    TooLarge { max_bytes: u64, actual: Option<u64> },
    Network,
}

impl fmt::Display for FailureKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FailureKind::InvalidUrl => write!(f, "invalid url"),
            FailureKind::HttpStatus(code) => write!(f, "http status {code}"),
            FailureKind::Decode => write!(f, "decode error"),
            FailureKind::Timeout => write!(f, "timeout"),
            FailureKind::TooLarge { max_bytes, actual } => {
                write!(f, "response too large (max {max_bytes}, actual {actual:?})")
            }
            FailureKind::Network => write!(f, "network error"),
        }
    }
}

impl From<FetchError> for FetchFailure {
    fn from(err: FetchError) -> Self {
        match err.kind {
            FailureKind::HttpStatus(code) => FetchFailure::Http(code),
            FailureKind::Decode => FetchFailure::Decode(err.message),
            _ => FetchFailure::Transport(err.to_string()),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error(transparent)]
    Fetch(#[from] FetchError),
    #[error("failed to start engine runtime: {0}")]
    Runtime(#[from] std::io::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn failures_map_onto_controller_taxonomy() {
        let http = FetchError::new(FailureKind::HttpStatus(502), "502 Bad Gateway");
        assert_eq!(FetchFailure::from(http), FetchFailure::Http(502));

        let decode = FetchError::new(FailureKind::Decode, "expected value at line 1");
        assert_eq!(
            FetchFailure::from(decode),
            FetchFailure::Decode("expected value at line 1".into())
        );

        let timeout = FetchError::new(FailureKind::Timeout, "operation timed out");
        assert_eq!(
            FetchFailure::from(timeout),
            FetchFailure::Transport("timeout: operation timed out".into())
        );
    }
}
