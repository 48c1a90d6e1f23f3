//! The passkey access grant protocol.

pub mod error;
pub mod passkey;
pub mod service;

pub use error::AccessError;
pub use service::{AccessGrantService, AccessGrantTicket};
