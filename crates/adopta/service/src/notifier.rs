//! Core notification service implementation.

use adopta_core::{NotificationPayload, RequestCreated, RequestStatus, RequestUpdated};
use adopta_push::{Dispatcher, Pusher};
use adopta_store::{TokenCleanup, UserStore};

use crate::RequestEvents;

/// Turns adoption-request document events into push notifications.
#[derive(Clone)]
pub struct Notifier<S, P, C> {
    users: S,
    dispatcher: Dispatcher<P, C>,
}

impl<S, P, C> Notifier<S, P, C>
where
    S: UserStore,
    P: Pusher,
    C: TokenCleanup,
{
    /// Create a new notifier.
    pub fn new(users: S, dispatcher: Dispatcher<P, C>) -> Self {
        Self { users, dispatcher }
    }

    /// Resolve a user's tokens, treating lookup failure as zero recipients.
    ///
    /// The event is acked either way; a failed lookup only costs the
    /// notification.
    async fn resolve_tokens(&self, user_id: &str) -> Vec<String> {
        match self.users.fcm_tokens(user_id).await {
            Ok(tokens) => tokens,
            Err(e) => {
                tracing::error!(user_id = %user_id, error = %e, "token lookup failed");
                Vec::new()
            }
        }
    }
}

impl<S, P, C> RequestEvents for Notifier<S, P, C>
where
    S: UserStore,
    P: Pusher,
    C: TokenCleanup,
{
    async fn request_created(&self, event: &RequestCreated) -> color_eyre::eyre::Result<()> {
        let Some(doc) = &event.doc else {
            tracing::warn!(request_id = %event.request_id, "create event carried no snapshot");
            return Ok(());
        };

        tracing::info!(request_id = %event.request_id, "new adoption request");

        let payload = NotificationPayload::new_request(&event.request_id, doc);
        let tokens = self.resolve_tokens(&doc.owner_id).await;

        self.dispatcher.dispatch(&tokens, &payload).await;

        Ok(())
    }

    async fn request_updated(&self, event: &RequestUpdated) -> color_eyre::eyre::Result<()> {
        let (Some(before), Some(after)) = (&event.before, &event.after) else {
            tracing::warn!(request_id = %event.request_id, "update event missing a snapshot");
            return Ok(());
        };

        // Only status transitions notify.
        if before.status == after.status {
            return Ok(());
        }

        tracing::info!(
            request_id = %event.request_id,
            status = %after.status,
            "request status changed"
        );

        let (target_user, payload) = match RequestStatus::parse(&after.status) {
            Some(RequestStatus::Accepted) => (
                after.requester_id.as_str(),
                NotificationPayload::request_accepted(&event.request_id, after),
            ),
            Some(RequestStatus::Rejected) => (
                after.requester_id.as_str(),
                NotificationPayload::request_rejected(&event.request_id, after),
            ),
            Some(RequestStatus::Completed) => (
                after.requester_id.as_str(),
                NotificationPayload::adoption_completed(&event.request_id, after),
            ),
            Some(RequestStatus::Pending) | None => {
                tracing::info!(status = %after.status, "status does not notify");
                return Ok(());
            }
        };

        let tokens = self.resolve_tokens(target_user).await;
        self.dispatcher.dispatch(&tokens, &payload).await;

        Ok(())
    }
}
