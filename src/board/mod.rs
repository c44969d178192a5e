//! Task board state management.
//!
//! This module owns the task records displayed on the board. It follows
//! hexagonal architecture:
//!
//! - Domain types in [`domain`]
//! - Port contracts in [`ports`]
//! - The observable store in [`store`]
//!
//! The store is the single source of truth: every record is created,
//! mutated, and owned exclusively by [`store::TaskStore`], and every other
//! component only ever sees cloned snapshots.

pub mod domain;
pub mod ports;
pub mod store;

#[cfg(test)]
mod tests;
