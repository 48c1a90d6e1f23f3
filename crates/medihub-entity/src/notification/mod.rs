//! Patient notification entities.

pub mod model;

pub use model::{Notification, TYPE_PASSKEY_REQUEST};
