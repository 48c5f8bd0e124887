//! Push delivery result types.

/// Why the push API rejected a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PushErrorKind {
    /// Token is no longer registered with the push service.
    Unregistered,
    /// Token was rejected as malformed or invalid.
    InvalidToken,
    /// Anything else (transport, auth, quota).
    Other,
}

/// Error for a single token's delivery attempt.
#[derive(Debug, Clone)]
pub struct PushError {
    /// Classified error kind.
    pub kind: PushErrorKind,
    /// Raw error description from the API or transport.
    pub message: String,
}

impl PushError {
    /// Create a new push error.
    pub fn new(kind: PushErrorKind, message: impl Into<String>) -> Self {
        Self {
            kind,
            message: message.into(),
        }
    }

    /// True when the token should be pruned from the user record.
    pub fn is_invalid_token(&self) -> bool {
        matches!(
            self.kind,
            PushErrorKind::Unregistered | PushErrorKind::InvalidToken
        )
    }
}

/// Result of one token's delivery attempt.
#[derive(Debug, Clone)]
pub struct PushResult {
    /// Token the attempt addressed.
    pub token: String,
    /// Message name returned by the API (if successful).
    pub message_id: Option<String>,
    /// Error (if failed).
    pub error: Option<PushError>,
}

impl PushResult {
    /// Create a successful push result.
    pub fn success(token: String, message_id: String) -> Self {
        Self {
            token,
            message_id: Some(message_id),
            error: None,
        }
    }

    /// Create a failed push result.
    pub fn failure(token: String, error: PushError) -> Self {
        Self {
            token,
            message_id: None,
            error: Some(error),
        }
    }

    /// Check if the push was accepted.
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }
}

/// Aggregate outcome of one multicast dispatch.
#[derive(Debug, Clone, Default)]
pub struct SendReport {
    /// Tokens the API accepted.
    pub success_count: usize,
    /// Tokens that failed for any reason.
    pub failure_count: usize,
    /// Failed tokens classified as permanently invalid.
    pub invalid_tokens: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_result_success() {
        let result = PushResult::success("tok-1".into(), "projects/p/messages/1".into());
        assert!(result.is_success());
        assert!(result.error.is_none());
    }

    #[test]
    fn test_push_result_failure() {
        let result = PushResult::failure(
            "tok-1".into(),
            PushError::new(PushErrorKind::Unregistered, "UNREGISTERED"),
        );
        assert!(!result.is_success());
        assert!(result.error.unwrap().is_invalid_token());
    }

    #[test]
    fn test_invalid_token_classification() {
        assert!(PushError::new(PushErrorKind::Unregistered, "").is_invalid_token());
        assert!(PushError::new(PushErrorKind::InvalidToken, "").is_invalid_token());
        assert!(!PushError::new(PushErrorKind::Other, "quota").is_invalid_token());
    }
}
