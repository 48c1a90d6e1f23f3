//! The patient-facing notification inbox.

pub mod service;

pub use service::{NotificationFeed, NotificationService};
