//! Storage abstractions for service layer
//!
//! `RecordStore` is the seam the record service persists through;
//! `JsonFileStore` is the file-backed implementation used in production.

pub mod record_store;
pub mod json_file_store;

pub use json_file_store::JsonFileStore;
pub use record_store::RecordStore;
