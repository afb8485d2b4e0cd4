//! Use-case services built on the awards store.
//!
//! # Responsibility
//! - Drive multi-step nomination entry (`wizard`).
//! - Project store state into dashboard read models (`dashboard`).
//!
//! # Invariants
//! - Services never bypass the store's mutation operations.
//! - Services hold no presentation state.

pub mod dashboard;
pub mod wizard;
