//! # medihub-database
//!
//! Persistence layer for MediHub. The [`store`] module defines the
//! async store traits the services depend on; [`repositories`] implements
//! them over PostgreSQL and [`memory`] over concurrent in-process maps
//! for tests and development.

pub mod connection;
pub mod memory;
pub mod migration;
pub mod repositories;
pub mod store;
