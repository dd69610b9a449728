//! Service layer for the milk ledger.
//! - `storage`: persistence of the record collection as one unit.
//! - `records`: CRUD, statistics, attendance, CSV export and notification text.
//! - Errors are reported through `errors::ServiceError`.

pub mod errors;
pub mod runtime;
#[cfg(test)]
pub mod test_support;
pub mod storage;
pub mod records;
