use shared::error::ValidationError;
use thiserror::Error;

/// Every way an analysis or save action can fail.
///
/// All variants end up in the same error area of the UI; the split exists so
/// callers and tests can tell a rejected input from a failed request.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ClientError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("HTTP error! status: {status}")]
    Http { status: u16 },
    #[error("{0}")]
    Network(String),
    #[error("malformed response body: {0}")]
    Decode(String),
}

impl ClientError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ClientError::Http { status } => Some(*status),
            _ => None,
        }
    }

    pub fn is_validation(&self) -> bool {
        matches!(self, ClientError::Validation(_))
    }
}

impl From<reqwest::Error> for ClientError {
    fn from(err: reqwest::Error) -> Self {
        if let Some(status) = err.status() {
            ClientError::Http {
                status: status.as_u16(),
            }
        } else if err.is_decode() {
            ClientError::Decode(err.to_string())
        } else {
            ClientError::Network(err.to_string())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn http_error_message_carries_status() {
        let err = ClientError::Http { status: 503 };
        assert_eq!(err.to_string(), "HTTP error! status: 503");
        assert_eq!(err.status(), Some(503));
    }

    #[test]
    fn validation_error_is_shown_verbatim() {
        let err = ClientError::from(ValidationError::NothingToSave);
        assert_eq!(err.to_string(), "No results to save");
        assert!(err.is_validation());
    }
}
