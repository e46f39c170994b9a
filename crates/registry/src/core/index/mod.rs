//! Centralized registry index infrastructure.
//!
//! # Mental Model
//!
//! 1. **Registration Phase:** [`RegistryBuilder`] ingests `(id, entry, source)` triples in
//!    contribution order and rejects any id that is already present.
//! 2. **Sealing:** [`RegistryBuilder::build`] consumes the builder and produces an immutable
//!    [`RegistryIndex`]. The index has no mutating methods, so registration after sealing is
//!    unrepresentable rather than merely discouraged.
//! 3. **Consumption:** Readers perform O(1) lookups by `&str` and receive the shared
//!    `Arc` stored at registration time.
//!
//! # Invariants
//!
//! - Must have exactly one entry per id; the first registration wins and every later one
//!   fails with [`crate::RegistryError::DuplicateId`] naming both sources.
//!   - Enforced in: [`RegistryBuilder::insert`].
//!   - Tested by: `tests::duplicate_is_rejected_in_either_order`.
//!
//! - Must return the identical `Arc` for repeated lookups of one id.
//!   - Enforced in: [`RegistryIndex::get`] (entries are never re-created).
//!   - Tested by: `tests::lookups_share_one_allocation`.
//!
//! - Must iterate in registration order.
//!   - Enforced in: [`RegistryIndex::iter`] (backed by the ingest order list).
//!   - Tested by: `tests::iteration_follows_registration_order`.
//!
//! # Concurrency
//!
//! A sealed index is `Send + Sync` whenever its entries are; reads take no locks.

mod build;
mod types;

pub use build::RegistryBuilder;
pub use types::{RegistryIndex, Slot};

#[cfg(test)]
mod tests;
