//! Root query operations: pet, pets, owner.
//!
//! Lookups for nonexistent ids return null, never an error.

use async_graphql::{Context, Object, Result, ID};
use sqlx::PgPool;

use super::types::{decode_id, Owner, Pet};
use crate::db::{OwnerStore, PetStore};

pub struct QueryRoot;

#[Object]
impl QueryRoot {
    /// A single pet by id, or null.
    async fn pet(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Pet>> {
        let Some(id) = decode_id(&id) else {
            return Ok(None);
        };
        let pool = ctx.data::<PgPool>()?;
        let row = PetStore::new(pool).find(id).await?;
        Ok(row.map(Pet::from))
    }

    /// Every pet, unfiltered and unpaginated.
    async fn pets(&self, ctx: &Context<'_>) -> Result<Vec<Pet>> {
        let pool = ctx.data::<PgPool>()?;
        let rows = PetStore::new(pool).all().await?;
        Ok(rows.into_iter().map(Pet::from).collect())
    }

    /// A single owner by id, or null.
    async fn owner(&self, ctx: &Context<'_>, id: ID) -> Result<Option<Owner>> {
        let Some(id) = decode_id(&id) else {
            return Ok(None);
        };
        let pool = ctx.data::<PgPool>()?;
        let row = OwnerStore::new(pool).find(id).await?;
        Ok(row.map(Owner::from))
    }
}
