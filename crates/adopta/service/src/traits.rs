//! Service traits.

use adopta_core::{RequestCreated, RequestUpdated};

/// Adoption-request event handling.
#[trait_variant::make(Send)]
pub trait RequestEvents: Send + Sync {
    /// Handle a created adoption-request document.
    async fn request_created(&self, event: &RequestCreated) -> color_eyre::eyre::Result<()>;

    /// Handle an updated adoption-request document.
    async fn request_updated(&self, event: &RequestUpdated) -> color_eyre::eyre::Result<()>;
}
