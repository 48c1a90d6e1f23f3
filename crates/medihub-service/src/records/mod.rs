//! Patient record aggregation.

pub mod aggregator;

pub use aggregator::PatientRecordAggregator;
