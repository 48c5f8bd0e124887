//! Webhook handlers.
//!
//! A 200 acks the event whether or not any notification went out; delivery
//! problems only surface in the logs.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::IntoResponse;

use adopta_core::{RequestCreated, RequestUpdated};
use adopta_service::RequestEvents;

/// Handle a created adoption-request document event.
pub async fn created_handler<S>(
    State(service): State<S>,
    Json(event): Json<RequestCreated>,
) -> impl IntoResponse
where
    S: RequestEvents,
{
    match service.request_created(&event).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(
                error = %e,
                request_id = %event.request_id,
                "created handler error"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}

/// Handle an updated adoption-request document event.
pub async fn updated_handler<S>(
    State(service): State<S>,
    Json(event): Json<RequestUpdated>,
) -> impl IntoResponse
where
    S: RequestEvents,
{
    match service.request_updated(&event).await {
        Ok(()) => StatusCode::OK,
        Err(e) => {
            tracing::error!(
                error = %e,
                request_id = %event.request_id,
                "updated handler error"
            );
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
