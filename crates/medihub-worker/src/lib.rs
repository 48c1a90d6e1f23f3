//! # medihub-worker
//!
//! Background maintenance for MediHub. The only job is the expiry
//! sweeper, which deletes lapsed ledger rows and notifications. Protocol
//! correctness never depends on it: expiry is enforced lazily at
//! verification time.

pub mod sweep;

pub use sweep::ExpirySweeper;
