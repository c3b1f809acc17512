//! Owner store - single-table lookups plus the pets→owners join.
//!
//! Query patterns:
//! - find: SELECT with filter, first match or none
//! - insert: INSERT ... RETURNING (ids are store-assigned)
//! - delete: DELETE with filter, affected count returned to the caller

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::StoreResult;

/// Owner record from the owners table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct OwnerRow {
    pub id: i32,
    pub name: String,
    pub age: i32,
}

/// Owner repository
pub struct OwnerStore<'a> {
    pool: &'a PgPool,
}

impl<'a> OwnerStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up an owner by id. A missing id yields `None`, not an error.
    pub async fn find(&self, id: i32) -> StoreResult<Option<OwnerRow>> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "SELECT id, name, age FROM owners WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// Insert an owner, returning the stored row with its assigned id.
    pub async fn insert(&self, name: &str, age: i32) -> StoreResult<OwnerRow> {
        let row = sqlx::query_as::<_, OwnerRow>(
            "INSERT INTO owners (name, age) VALUES ($1, $2) RETURNING id, name, age",
        )
        .bind(name)
        .bind(age)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Delete an owner by id.
    ///
    /// Returns the number of rows affected. Deleting a nonexistent id
    /// affects zero rows and is not an error. Pets referencing the owner
    /// are left in place; their `owner` traversal resolves to none.
    pub async fn delete(&self, id: i32) -> StoreResult<u64> {
        let result = sqlx::query("DELETE FROM owners WHERE id = $1")
            .bind(id)
            .execute(self.pool)
            .await?;

        Ok(result.rows_affected())
    }

    /// Resolve the owner referenced by a pet's `owner_id`.
    ///
    /// Joins pets to owners and filters to the given owner id, first row or
    /// none. A dangling `owner_id` simply matches nothing.
    pub async fn for_pet(&self, owner_id: i32) -> StoreResult<Option<OwnerRow>> {
        let row = sqlx::query_as::<_, OwnerRow>(
            r#"
            SELECT o.id, o.name, o.age
            FROM pets p
            JOIN owners o ON p.owner_id = o.id
            WHERE o.id = $1
            LIMIT 1
            "#,
        )
        .bind(owner_id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }
}
