use mongodb::error::ErrorKind;
use thiserror::Error;

/// Single error kind for the prober, carrying the underlying cause
///
/// Causes are classified from the driver's error kinds so callers and reports
/// can tell a timeout from an authentication rejection without string
/// matching.
#[derive(Debug, Error)]
pub enum ConnectionError {
    #[error("invalid connection target: {0}")]
    InvalidTarget(String),

    #[error("authentication rejected: {0}")]
    Authentication(String),

    #[error("server selection timed out: {0}")]
    Timeout(String),

    #[error("network unreachable: {0}")]
    Network(String),

    #[error("protocol mismatch: {0}")]
    Protocol(String),

    #[error("{0}")]
    Other(String),
}

impl ConnectionError {
    /// Stable label used in JSON probe reports
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::InvalidTarget(_) => "invalid",
            Self::Authentication(_) => "authentication",
            Self::Timeout(_) => "timeout",
            Self::Network(_) => "connection",
            Self::Protocol(_) => "protocol",
            Self::Other(_) => "other",
        }
    }
}

impl From<mongodb::error::Error> for ConnectionError {
    fn from(err: mongodb::error::Error) -> Self {
        match err.kind.as_ref() {
            ErrorKind::Authentication { message, .. } => Self::Authentication(message.clone()),
            // Auth failures surface as command errors when the handshake got
            // far enough to run saslStart
            ErrorKind::Command(cmd) if cmd.code == 18 || cmd.code_name == "AuthenticationFailed" => {
                Self::Authentication(cmd.message.clone())
            }
            ErrorKind::ServerSelection { message, .. } => Self::Timeout(message.clone()),
            ErrorKind::DnsResolve { message, .. } => Self::Network(message.clone()),
            ErrorKind::Io(io_err) => Self::Network(io_err.to_string()),
            ErrorKind::InvalidArgument { message, .. } => Self::InvalidTarget(message.clone()),
            ErrorKind::IncompatibleServer { message, .. } => Self::Protocol(message.clone()),
            ErrorKind::InvalidResponse { message, .. } => Self::Protocol(message.clone()),
            _ => Self::Other(err.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_labels() {
        assert_eq!(
            ConnectionError::InvalidTarget("x".into()).category(),
            "invalid"
        );
        assert_eq!(
            ConnectionError::Authentication("x".into()).category(),
            "authentication"
        );
        assert_eq!(ConnectionError::Timeout("x".into()).category(), "timeout");
        assert_eq!(ConnectionError::Network("x".into()).category(), "connection");
        assert_eq!(ConnectionError::Protocol("x".into()).category(), "protocol");
        assert_eq!(ConnectionError::Other("x".into()).category(), "other");
    }

    #[test]
    fn test_display_carries_cause() {
        let err = ConnectionError::Timeout("no server available within 5000ms".into());
        assert_eq!(
            err.to_string(),
            "server selection timed out: no server available within 5000ms"
        );

        let err = ConnectionError::Authentication("SCRAM failure".into());
        assert_eq!(err.to_string(), "authentication rejected: SCRAM failure");
    }

    #[test]
    fn test_other_passes_message_through() {
        let err = ConnectionError::Other("something odd".into());
        assert_eq!(err.to_string(), "something odd");
    }
}
