//! Passkey access request entities.

pub mod model;
pub mod status;

pub use model::AccessRequest;
pub use status::AccessStatus;
