//! fintrack: personal finance tracking with a read-through cache.
//!
//! The imperative shell around `fintrack_core`: an in-memory cache and
//! store, resource accessors with write-through local state, toast
//! notifications, the session handle, the confirmation gate and default
//! category seeding.

pub mod accessor;
pub mod alert;
pub mod cache;
pub mod config;
pub mod notify;
pub mod seed;
pub mod session;
pub mod state;
pub mod storage;
pub mod watcher;

pub use state::{AppState, Dashboard};
