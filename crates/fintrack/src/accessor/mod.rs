//! Resource accessors.
//!
//! One generic [`ResourceAccessor`] serves both record kinds; the
//! kind-specific derived views live in `transactions` and `categories`.

mod categories;
mod resource;
mod transactions;

use fintrack_core::finance::{Category, Transaction};

pub use resource::{AccessorState, ResourceAccessor};

#[cfg(test)]
pub(crate) use resource::testing;

/// Accessor for the signed-in user's transactions.
pub type TransactionAccessor = ResourceAccessor<Transaction>;

/// Accessor for the signed-in user's categories.
pub type CategoryAccessor = ResourceAccessor<Category>;
