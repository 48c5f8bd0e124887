//! Store traits.

/// User record lookups.
#[trait_variant::make(Send)]
pub trait UserStore: Send + Sync {
    /// Fetch the registered push tokens for a user.
    ///
    /// An absent user record and a record without a token field both yield
    /// an empty list; only transport failures are errors.
    async fn fcm_tokens(&self, user_id: &str) -> color_eyre::eyre::Result<Vec<String>>;
}

/// Removal of tokens the push API reported as permanently invalid.
#[trait_variant::make(Send)]
pub trait TokenCleanup: Send + Sync {
    /// Drop the given tokens from wherever they are registered.
    async fn remove_tokens(&self, tokens: &[String]) -> color_eyre::eyre::Result<()>;
}

/// Cleanup that only records the finding.
///
/// Pruning invalid tokens from user records is a known follow-up; until an
/// implementation wires this to a record update, invalid tokens are only
/// counted and logged.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopCleanup;

impl TokenCleanup for NoopCleanup {
    async fn remove_tokens(&self, tokens: &[String]) -> color_eyre::eyre::Result<()> {
        tracing::debug!(count = tokens.len(), "token cleanup not wired, dropping");
        Ok(())
    }
}
