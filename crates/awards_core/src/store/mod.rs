//! In-memory awards store.
//!
//! # Responsibility
//! - Hold the category/nomination collections and the session identity.
//! - Expose the typed mutation/query set and a command entry point.
//!
//! # Invariants
//! - No code outside this module mutates the collections.
//! - Single-threaded: exclusive access is `&mut AwardsStore`.

mod awards_store;
pub mod clock;
mod command;
pub mod policy;
mod sample;

pub use awards_store::{AwardsStore, DeletedCategory, StoreError, StoreResult, StoreSnapshot};
pub use command::{StoreCommand, StoreEvent};
