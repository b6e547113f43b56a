use thiserror::Error;

use crate::engine::MatchStatus;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum MatchError {
    #[error("Invalid player position: {0}")]
    InvalidPosition(String),

    #[error("Invalid parameter `{name}`: {reason}")]
    InvalidParameter { name: &'static str, reason: String },

    #[error("Cannot {operation} while match is {status}")]
    InvalidTransition { operation: &'static str, status: MatchStatus },

    #[error("Unknown team side: {0} (expected \"home\" or \"away\")")]
    UnknownTeamSide(String),

    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl MatchError {
    pub(crate) fn invalid_parameter(name: &'static str, reason: impl Into<String>) -> Self {
        MatchError::InvalidParameter { name, reason: reason.into() }
    }
}

impl From<serde_json::Error> for MatchError {
    fn from(err: serde_json::Error) -> Self {
        MatchError::Serialization(err.to_string())
    }
}

/// Failure reported by a single observer during delivery.
///
/// Delivery to the remaining observers continues regardless.
#[derive(Error, Debug)]
pub enum ObserverError {
    #[error("output error: {0}")]
    Output(#[from] std::io::Error),

    #[error("event rejected: {0}")]
    Rejected(String),

    #[error("observer is already borrowed")]
    Busy,
}

pub type Result<T> = std::result::Result<T, MatchError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_messages() {
        let err = MatchError::InvalidPosition("libero".to_string());
        assert_eq!(err.to_string(), "Invalid player position: libero");

        let err = MatchError::InvalidTransition {
            operation: "record a goal",
            status: MatchStatus::NotStarted,
        };
        assert_eq!(err.to_string(), "Cannot record a goal while match is not started");
    }

    #[test]
    fn test_serde_error_conversion() {
        let parse = serde_json::from_str::<u8>("not json").unwrap_err();
        let err: MatchError = parse.into();
        assert!(matches!(err, MatchError::Serialization(_)));
    }
}
