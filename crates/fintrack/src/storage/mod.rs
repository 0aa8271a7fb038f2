//! Storage backend implementations.
//!
//! Concrete implementations of the `Repository` trait defined in
//! `fintrack_core::storage`.

pub mod inmemory;

pub use inmemory::InMemoryRepository;
