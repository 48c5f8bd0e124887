//! Multicast dispatch bookkeeping.

use adopta_core::{NotificationPayload, SendReport};
use adopta_store::TokenCleanup;

use crate::Pusher;

/// Sends one payload to a set of tokens and accounts for the results.
#[derive(Clone)]
pub struct Dispatcher<P, C> {
    pusher: P,
    cleanup: C,
}

impl<P, C> Dispatcher<P, C>
where
    P: Pusher,
    C: TokenCleanup,
{
    /// Create a new dispatcher.
    pub fn new(pusher: P, cleanup: C) -> Self {
        Self { pusher, cleanup }
    }

    /// Deliver `payload` to every token.
    ///
    /// Never fails: delivery problems end up in the report and the log, and
    /// the triggering event is considered handled either way.
    pub async fn dispatch(&self, tokens: &[String], payload: &NotificationPayload) -> SendReport {
        if tokens.is_empty() {
            tracing::info!("no tokens to send notifications to");
            return SendReport::default();
        }

        let results = self.pusher.push(tokens, payload).await;

        let mut report = SendReport::default();
        for result in &results {
            match &result.error {
                None => report.success_count += 1,
                Some(error) => {
                    report.failure_count += 1;
                    if error.is_invalid_token() {
                        report.invalid_tokens.push(result.token.clone());
                    }
                }
            }
        }

        tracing::info!(
            successes = report.success_count,
            failures = report.failure_count,
            "notifications sent"
        );

        if !report.invalid_tokens.is_empty() {
            tracing::info!(count = report.invalid_tokens.len(), "invalid tokens found");

            if let Err(e) = self.cleanup.remove_tokens(&report.invalid_tokens).await {
                tracing::warn!(error = %e, "token cleanup failed");
            }
        }

        report
    }
}
