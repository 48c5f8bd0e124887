//! Adopta Record Store
//!
//! Read-only access to user records in the hosted document store, plus the
//! token-cleanup port.

mod firestore;
mod traits;

pub use firestore::*;
pub use traits::*;
