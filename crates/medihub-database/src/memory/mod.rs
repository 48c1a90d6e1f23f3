//! In-memory store implementations.
//!
//! Concurrent `DashMap`-backed stores conforming to the same traits as
//! the PostgreSQL repositories. Used by tests and local development; no
//! durability, same semantics.

pub mod access_request;
pub mod notification;
pub mod records;
pub mod user;

pub use access_request::MemoryAccessRequestStore;
pub use notification::MemoryNotificationStore;
pub use records::{
    MemoryAppointmentStore, MemoryLabResultStore, MemoryMedicalRecordStore,
    MemoryPrescriptionStore,
};
pub use user::MemoryUserStore;
