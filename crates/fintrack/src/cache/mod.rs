//! Cache backend implementations.
//!
//! Concrete implementations of the `Cache` trait defined in
//! `fintrack_core::cache`.

pub mod memory;

pub use memory::MemoryCache;
