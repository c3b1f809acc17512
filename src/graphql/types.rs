//! Owner and Pet object types.
//!
//! Each type wraps its database row; relationship fields issue one store
//! query per traversal through the pool carried in the request context.
//! Field names stay snake_case on the wire to match the stored column names.

use async_graphql::{Context, Object, Result, ID};
use sqlx::PgPool;

use crate::db::{OwnerRow, OwnerStore, PetRow, PetStore};

/// Decode a GraphQL `ID` into a store key.
///
/// Ids are numeric in the store; a non-numeric id cannot match any row, so
/// lookups treat it the same as a missing one.
pub(crate) fn decode_id(id: &ID) -> Option<i32> {
    id.parse::<i32>().ok()
}

/// An owner and, by traversal, the pets that reference it.
pub struct Owner(pub(crate) OwnerRow);

#[Object]
impl Owner {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    async fn age(&self) -> i32 {
        self.0.age
    }

    /// Pets whose `owner_id` references this owner. One query per call,
    /// arbitrary order.
    async fn pets(&self, ctx: &Context<'_>) -> Result<Vec<Pet>> {
        let pool = ctx.data::<PgPool>()?;
        let rows = PetStore::new(pool).for_owner(self.0.id).await?;
        Ok(rows.into_iter().map(Pet).collect())
    }
}

impl From<OwnerRow> for Owner {
    fn from(row: OwnerRow) -> Self {
        Self(row)
    }
}

/// A pet and, by traversal, the owner its foreign key references.
pub struct Pet(pub(crate) PetRow);

#[Object]
impl Pet {
    async fn id(&self) -> ID {
        ID(self.0.id.to_string())
    }

    async fn name(&self) -> &str {
        &self.0.name
    }

    #[graphql(name = "animal_type")]
    async fn animal_type(&self) -> &str {
        &self.0.animal_type
    }

    async fn breed(&self) -> &str {
        &self.0.breed
    }

    async fn age(&self) -> i32 {
        self.0.age
    }

    #[graphql(name = "favorite_treat")]
    async fn favorite_treat(&self) -> &str {
        &self.0.favorite_treat
    }

    /// The owner referenced by this pet's `owner_id`. A dangling reference
    /// resolves to null, not an error.
    async fn owner(&self, ctx: &Context<'_>) -> Result<Option<Owner>> {
        let pool = ctx.data::<PgPool>()?;
        let row = OwnerStore::new(pool).for_pet(self.0.owner_id).await?;
        Ok(row.map(Owner))
    }
}

impl From<PetRow> for Pet {
    fn from(row: PetRow) -> Self {
        Self(row)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decode_numeric_id() {
        assert_eq!(decode_id(&ID("42".into())), Some(42));
    }

    #[test]
    fn decode_garbage_id_is_none() {
        assert_eq!(decode_id(&ID("fluffy".into())), None);
        assert_eq!(decode_id(&ID("".into())), None);
    }
}
