//! Lifecycle of an asynchronous fetch

use serde::Serialize;

use crate::error::Error;

/// Category of a failed request, as surfaced to the user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum FailureKind {
    /// Request could not be sent or timed out at the transport level
    Network,
    /// Service answered with a non-success status code
    HttpStatus,
    /// Body missing required fields or violating the grid shape
    MalformedResponse,
}

/// A failed request, reduced to what the UI needs to show.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RequestFailure {
    pub kind: FailureKind,
    /// Human-readable, never empty.
    pub message: String,
}

impl RequestFailure {
    pub fn new(kind: FailureKind, message: impl Into<String>) -> Self {
        let message = message.into();
        let message = if message.trim().is_empty() {
            "Unknown error".to_string()
        } else {
            message
        };
        Self { kind, message }
    }
}

impl From<&Error> for RequestFailure {
    fn from(err: &Error) -> Self {
        let kind = match err {
            Error::HttpStatus { .. } => FailureKind::HttpStatus,
            Error::MalformedResponse { .. } => FailureKind::MalformedResponse,
            _ => FailureKind::Network,
        };
        Self::new(kind, err.to_string())
    }
}

impl From<Error> for RequestFailure {
    fn from(err: Error) -> Self {
        Self::from(&err)
    }
}

impl std::fmt::Display for RequestFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.message)
    }
}

/// `{Idle, Pending, Succeeded, Failed}` lifecycle shared by catalog and solve
/// requests.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum RequestState<T> {
    #[default]
    Idle,
    Pending,
    Succeeded(T),
    Failed(RequestFailure),
}

impl<T> RequestState<T> {
    pub fn is_idle(&self) -> bool {
        matches!(self, RequestState::Idle)
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, RequestState::Pending)
    }

    pub fn is_succeeded(&self) -> bool {
        matches!(self, RequestState::Succeeded(_))
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, RequestState::Failed(_))
    }

    /// Resolved value, if the request succeeded.
    pub fn value(&self) -> Option<&T> {
        match self {
            RequestState::Succeeded(value) => Some(value),
            _ => None,
        }
    }

    pub fn failure(&self) -> Option<&RequestFailure> {
        match self {
            RequestState::Failed(failure) => Some(failure),
            _ => None,
        }
    }

    /// Short label for logs and headless output.
    pub fn label(&self) -> &'static str {
        match self {
            RequestState::Idle => "idle",
            RequestState::Pending => "pending",
            RequestState::Succeeded(_) => "succeeded",
            RequestState::Failed(_) => "failed",
        }
    }
}

impl<T> From<crate::error::Result<T>> for RequestState<T> {
    fn from(result: crate::error::Result<T>) -> Self {
        match result {
            Ok(value) => RequestState::Succeeded(value),
            Err(err) => RequestState::Failed(RequestFailure::from(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let state: RequestState<u32> = RequestState::default();
        assert!(state.is_idle());
        assert_eq!(state.label(), "idle");
    }

    #[test]
    fn test_from_result() {
        let ok: RequestState<u32> = Ok(7).into();
        assert_eq!(ok.value(), Some(&7));

        let err: RequestState<u32> = Err(Error::http_status(500, "Solve failed: 500")).into();
        let failure = err.failure().unwrap();
        assert_eq!(failure.kind, FailureKind::HttpStatus);
        assert_eq!(failure.message, "Solve failed: 500");
    }

    #[test]
    fn test_failure_kind_mapping() {
        assert_eq!(
            RequestFailure::from(Error::network("refused")).kind,
            FailureKind::Network
        );
        assert_eq!(
            RequestFailure::from(Error::malformed("bad")).kind,
            FailureKind::MalformedResponse
        );
    }

    #[test]
    fn test_failure_message_never_empty() {
        let failure = RequestFailure::new(FailureKind::Network, "  ");
        assert_eq!(failure.message, "Unknown error");
    }
}
