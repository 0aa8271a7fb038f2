//! Functional core for fintrack.
//!
//! Pure data types and functions for personal finance records, plus the
//! trait seams (`Cache`, `Repository`, `Notifier`, `OwnerProvider`) the
//! shell crate implements. Nothing in here performs I/O.

pub mod access;
pub mod alert;
pub mod cache;
pub mod finance;
pub mod notify;
pub mod session;
pub mod storage;
