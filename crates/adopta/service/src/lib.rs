//! Adopta Notification Service
//!
//! Business logic turning adoption-request document events into pushes.

mod notifier;
mod traits;

pub use notifier::Notifier;
pub use traits::*;
