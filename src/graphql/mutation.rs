//! Root mutation operations: addOwner, deleteOwner, addPet.
//!
//! Required arguments are enforced by GraphQL validation before any resolver
//! runs, so a malformed mutation never reaches the store. Each resolver
//! performs exactly one store write, with no transaction or retry.

use async_graphql::{Context, Error, Object, Result, ID};
use sqlx::PgPool;

use super::types::{decode_id, Owner, Pet};
use crate::db::{NewPet, OwnerStore, PetStore};

/// Fixed status string returned by `deleteOwner`, whether or not a row
/// matched. The affected-row count is deliberately not surfaced.
pub const OWNER_DELETED: &str = "owner deleted";

pub struct MutationRoot;

#[Object]
impl MutationRoot {
    /// Insert an owner. The id is store-assigned.
    async fn add_owner(&self, ctx: &Context<'_>, name: String, age: i32) -> Result<Owner> {
        let pool = ctx.data::<PgPool>()?;
        let row = OwnerStore::new(pool).insert(&name, age).await?;
        tracing::debug!(id = row.id, "owner created");
        Ok(Owner(row))
    }

    /// Delete an owner by id.
    ///
    /// Always returns the fixed success string, even when no row matched.
    /// Does not cascade to the owner's pets.
    async fn delete_owner(&self, ctx: &Context<'_>, id: ID) -> Result<String> {
        // A non-numeric id matches no row; same soft success as a missing one.
        if let Some(id) = decode_id(&id) {
            let pool = ctx.data::<PgPool>()?;
            let affected = OwnerStore::new(pool).delete(id).await?;
            tracing::debug!(id, affected, "owner delete issued");
        }
        Ok(OWNER_DELETED.to_string())
    }

    /// Insert a pet. The id is store-assigned; `owner_id` is not checked
    /// for existence.
    #[allow(clippy::too_many_arguments)]
    async fn add_pet(
        &self,
        ctx: &Context<'_>,
        name: String,
        #[graphql(name = "animal_type")] animal_type: String,
        age: i32,
        breed: String,
        #[graphql(name = "favorite_treat")] favorite_treat: String,
        #[graphql(name = "owner_id")] owner_id: ID,
    ) -> Result<Pet> {
        let owner_id = decode_id(&owner_id)
            .ok_or_else(|| Error::new(format!("invalid owner_id: '{}'", *owner_id)))?;
        let pool = ctx.data::<PgPool>()?;
        let row = PetStore::new(pool)
            .insert(&NewPet {
                name,
                animal_type,
                breed,
                age,
                favorite_treat,
                owner_id,
            })
            .await?;
        tracing::debug!(id = row.id, owner_id, "pet created");
        Ok(Pet(row))
    }
}
