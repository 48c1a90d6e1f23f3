//! # medihub-entity
//!
//! Domain entities for MediHub. Plain data structures with serde and
//! sqlx derives; no business logic beyond small state helpers.

pub mod access;
pub mod notification;
pub mod record;
pub mod user;
