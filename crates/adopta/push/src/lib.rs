//! Adopta Push Delivery
//!
//! FCM delivery and dispatch bookkeeping.

mod dispatch;
mod fcm;
mod traits;

pub use dispatch::*;
pub use fcm::*;
pub use traits::*;
