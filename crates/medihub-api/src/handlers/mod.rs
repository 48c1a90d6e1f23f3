//! HTTP handlers, grouped by domain.

pub mod access;
pub mod health;
pub mod notification;
