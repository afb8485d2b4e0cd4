//! Collection layer behind the awards store.
//!
//! # Responsibility
//! - Define storage contracts for categories and nominations.
//! - Provide the in-memory implementations used by the store.
//!
//! # Invariants
//! - Listing preserves insertion order.
//! - Inserts reject duplicate ids instead of overwriting.
//! - Missing ids surface as `RepoError::NotFound`, never as silent no-ops.

use std::error::Error;
use std::fmt::{Display, Formatter};

pub mod category_repo;
pub mod nomination_repo;

pub type RepoResult<T> = Result<T, RepoError>;

/// Collection-level error for category and nomination storage.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RepoError {
    /// An entity with the same id is already stored.
    DuplicateId(String),
    /// A nomination with the same reference id is already stored.
    DuplicateReferenceId(String),
    /// No entity matches the id.
    NotFound(String),
}

impl Display for RepoError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateId(id) => write!(f, "id already stored: {id}"),
            Self::DuplicateReferenceId(id) => write!(f, "reference id already issued: {id}"),
            Self::NotFound(id) => write!(f, "entity not found: {id}"),
        }
    }
}

impl Error for RepoError {}
