//! Delivery records: domain types, the record service and its renderers.

pub mod domain;
pub mod service;
pub mod csv;
pub mod message;

pub use domain::{Attendance, Collection, Customer, DateRange, MessagePair, NewRecord, Record, RecordPatch, Shift, Stats};
pub use service::RecordService;
