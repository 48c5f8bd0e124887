//! Adopta HTTP Layer
//!
//! Axum handlers for the inbound document-event webhooks.

mod handlers;

pub use handlers::*;

use axum::Router;

/// Create the event webhook router.
pub fn event_router<S>(service: S) -> Router
where
    S: adopta_service::RequestEvents + Clone + 'static,
{
    use axum::routing::post;

    Router::new()
        .route(
            "/v1/events/adoption-requests/created",
            post(handlers::created_handler::<S>),
        )
        .route(
            "/v1/events/adoption-requests/updated",
            post(handlers::updated_handler::<S>),
        )
        .with_state(service)
}
