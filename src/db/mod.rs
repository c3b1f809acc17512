//! Row store access layer.
//!
//! Each store borrows the shared `PgPool` and issues exactly one query per
//! method. No session, cursor, or transaction spans calls.

pub mod owners;
pub mod pets;
pub mod pool;

pub use owners::{OwnerRow, OwnerStore};
pub use pets::{NewPet, PetRow, PetStore};
pub use pool::{create_pool, create_pool_with_options};

/// Store error type
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),
}

/// Result type alias for store operations
pub type StoreResult<T> = Result<T, StoreError>;
