//! Push notification traits.

use adopta_core::{NotificationPayload, PushResult};

/// Low-level push notification sender.
#[trait_variant::make(Send)]
pub trait Pusher: Send + Sync {
    /// Deliver one payload to every token, returning one result per token.
    ///
    /// Transport failures surface as per-token failed results, never as a
    /// panic or early return.
    async fn push(&self, tokens: &[String], payload: &NotificationPayload) -> Vec<PushResult>;
}
