//! # medihub-api
//!
//! HTTP API layer for MediHub. Routes are grouped per domain in
//! [`router`]; every handler receives [`state::AppState`] via Axum's
//! `State` extractor and maps domain errors through [`error::ApiError`].

pub mod dto;
pub mod error;
pub mod handlers;
pub mod router;
pub mod state;
