//! Pet store - single-table lookups plus the owners→pets join.

use serde::Serialize;
use sqlx::{FromRow, PgPool};

use super::StoreResult;

/// Pet record from the pets table
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct PetRow {
    pub id: i32,
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub age: i32,
    pub favorite_treat: String,
    pub owner_id: i32,
}

/// Field set for a pet insert. Ids are store-assigned, never supplied.
#[derive(Debug, Clone)]
pub struct NewPet {
    pub name: String,
    pub animal_type: String,
    pub breed: String,
    pub age: i32,
    pub favorite_treat: String,
    pub owner_id: i32,
}

const PET_COLUMNS: &str = "id, name, animal_type, breed, age, favorite_treat, owner_id";

/// Pet repository
pub struct PetStore<'a> {
    pool: &'a PgPool,
}

impl<'a> PetStore<'a> {
    pub fn new(pool: &'a PgPool) -> Self {
        Self { pool }
    }

    /// Look up a pet by id. A missing id yields `None`, not an error.
    pub async fn find(&self, id: i32) -> StoreResult<Option<PetRow>> {
        let row = sqlx::query_as::<_, PetRow>(&format!(
            "SELECT {PET_COLUMNS} FROM pets WHERE id = $1"
        ))
        .bind(id)
        .fetch_optional(self.pool)
        .await?;

        Ok(row)
    }

    /// All pets, unfiltered and unpaginated, arbitrary order.
    pub async fn all(&self) -> StoreResult<Vec<PetRow>> {
        let rows = sqlx::query_as::<_, PetRow>(&format!("SELECT {PET_COLUMNS} FROM pets"))
            .fetch_all(self.pool)
            .await?;

        Ok(rows)
    }

    /// Insert a pet, returning the stored row with its assigned id.
    ///
    /// `owner_id` is not checked for existence; referential integrity is the
    /// store's concern, not this layer's.
    pub async fn insert(&self, pet: &NewPet) -> StoreResult<PetRow> {
        let row = sqlx::query_as::<_, PetRow>(&format!(
            r#"
            INSERT INTO pets (name, animal_type, breed, age, favorite_treat, owner_id)
            VALUES ($1, $2, $3, $4, $5, $6)
            RETURNING {PET_COLUMNS}
            "#
        ))
        .bind(&pet.name)
        .bind(&pet.animal_type)
        .bind(&pet.breed)
        .bind(pet.age)
        .bind(&pet.favorite_treat)
        .bind(pet.owner_id)
        .fetch_one(self.pool)
        .await?;

        Ok(row)
    }

    /// Resolve the pets belonging to an owner.
    ///
    /// Joins owners to pets and filters to the given owner id. Returns all
    /// matching rows with no explicit sort.
    pub async fn for_owner(&self, owner_id: i32) -> StoreResult<Vec<PetRow>> {
        let rows = sqlx::query_as::<_, PetRow>(
            r#"
            SELECT p.id, p.name, p.animal_type, p.breed, p.age, p.favorite_treat, p.owner_id
            FROM owners o
            JOIN pets p ON o.id = p.owner_id
            WHERE p.owner_id = $1
            "#,
        )
        .bind(owner_id)
        .fetch_all(self.pool)
        .await?;

        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::OwnerStore;

    #[tokio::test]
    #[ignore = "requires database"]
    async fn for_owner_returns_only_that_owners_pets() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        let owners = OwnerStore::new(&pool);
        let pets = PetStore::new(&pool);

        let alice = owners.insert("Alice", 30).await.expect("insert owner");
        let bob = owners.insert("Bob", 41).await.expect("insert owner");

        for name in ["Rex", "Milo"] {
            pets.insert(&NewPet {
                name: name.into(),
                animal_type: "dog".into(),
                breed: "mixed".into(),
                age: 3,
                favorite_treat: "jerky".into(),
                owner_id: alice.id,
            })
            .await
            .expect("insert pet");
        }
        pets.insert(&NewPet {
            name: "Whiskers".into(),
            animal_type: "cat".into(),
            breed: "tabby".into(),
            age: 5,
            favorite_treat: "tuna".into(),
            owner_id: bob.id,
        })
        .await
        .expect("insert pet");

        let found = pets.for_owner(alice.id).await.expect("join");
        assert_eq!(found.len(), 2);
        assert!(found.iter().all(|p| p.owner_id == alice.id));
    }

    #[tokio::test]
    #[ignore = "requires database"]
    async fn dangling_owner_id_is_allowed() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let pool = crate::db::create_pool(&url).await.expect("pool");
        let owners = OwnerStore::new(&pool);
        let pets = PetStore::new(&pool);

        let pet = pets
            .insert(&NewPet {
                name: "Ghost".into(),
                animal_type: "dog".into(),
                breed: "husky".into(),
                age: 2,
                favorite_treat: "bacon".into(),
                owner_id: -42,
            })
            .await
            .expect("insert pet");

        // Traversal to the nonexistent owner resolves to nothing, silently.
        let owner = owners.for_pet(pet.owner_id).await.expect("join");
        assert!(owner.is_none());
    }
}
