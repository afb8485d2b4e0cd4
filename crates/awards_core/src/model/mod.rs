//! Domain model for award categories and nominations.
//!
//! # Responsibility
//! - Define the records owned by the awards store.
//! - Define caller-side input/patch shapes, so store-owned fields (ids,
//!   timestamps, reference ids) can never be supplied by callers.
//!
//! # Invariants
//! - Category and nomination ids are opaque strings, unique per collection.
//! - A nomination's `category_name` is a snapshot taken at creation time.
//! - Timestamps are Unix epoch milliseconds.

pub mod category;
pub mod nomination;
pub mod reference_id;
pub mod session;
