//! Schema-shape and validation tests.
//!
//! These run without a database: the pool is created lazily and never
//! connects, which also proves that validation failures and id coercion
//! short-circuit before any store access.

use async_graphql::Response;
use pawhub::db::pool::create_lazy_pool;
use pawhub::graphql::{build_schema, PawhubSchema, OWNER_DELETED};

fn schema() -> PawhubSchema {
    let pool = create_lazy_pool("postgres://localhost/pawhub_never_connects")
        .expect("lazy pool creation is infallible without I/O");
    build_schema(pool)
}

fn data_json(response: &Response) -> serde_json::Value {
    serde_json::to_value(&response.data).expect("response data serializes")
}

#[tokio::test]
async fn sdl_exposes_the_full_surface() {
    let sdl = schema().sdl();

    // Entity field shapes
    assert!(sdl.contains("type Owner"));
    assert!(sdl.contains("pets: [Pet!]!"));
    assert!(sdl.contains("type Pet"));
    assert!(sdl.contains("animal_type: String!"));
    assert!(sdl.contains("favorite_treat: String!"));
    assert!(sdl.contains("owner: Owner"));

    // Root operations
    assert!(sdl.contains("pet(id: ID!): Pet"));
    assert!(sdl.contains("pets: [Pet!]!"));
    assert!(sdl.contains("owner(id: ID!): Owner"));
    assert!(sdl.contains("addOwner(name: String!, age: Int!): Owner!"));
    assert!(sdl.contains("deleteOwner(id: ID!): String!"));
    assert!(sdl.contains("addPet("));
    assert!(sdl.contains("owner_id: ID!"));

    // No update mutation and no pet deletion exist
    assert!(!sdl.contains("updateOwner"));
    assert!(!sdl.contains("updatePet"));
    assert!(!sdl.contains("deletePet"));
}

#[tokio::test]
async fn add_pet_missing_argument_fails_validation() {
    let response = schema()
        .execute(r#"mutation { addPet(name: "Rex", animal_type: "dog", age: 3, favorite_treat: "jerky", owner_id: "1") { id } }"#)
        .await;

    // breed is missing: validation rejects the request before any resolver
    // (and thus any store query) runs - the lazy pool never connects.
    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("breed"));
}

#[tokio::test]
async fn add_owner_wrongly_typed_argument_fails_validation() {
    let response = schema()
        .execute(r#"mutation { addOwner(name: "Ada", age: "not a number") { id } }"#)
        .await;

    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn non_numeric_pet_id_is_not_found_not_error() {
    let response = schema().execute(r#"{ pet(id: "fluffy") { id } }"#).await;

    assert!(response.errors.is_empty());
    assert_eq!(data_json(&response), serde_json::json!({ "pet": null }));
}

#[tokio::test]
async fn non_numeric_owner_id_is_not_found_not_error() {
    let response = schema().execute(r#"{ owner(id: "nobody") { id } }"#).await;

    assert!(response.errors.is_empty());
    assert_eq!(data_json(&response), serde_json::json!({ "owner": null }));
}

#[tokio::test]
async fn delete_owner_soft_succeeds_on_unmatchable_id() {
    // A non-numeric id can match no row; deleteOwner still reports the
    // fixed success string without touching the store.
    let response = schema()
        .execute(r#"mutation { deleteOwner(id: "nobody") }"#)
        .await;

    assert!(response.errors.is_empty());
    assert_eq!(
        data_json(&response),
        serde_json::json!({ "deleteOwner": OWNER_DELETED })
    );
}

#[tokio::test]
async fn add_pet_rejects_non_numeric_owner_id() {
    let response = schema()
        .execute(r#"mutation { addPet(name: "Rex", animal_type: "dog", age: 3, breed: "mixed", favorite_treat: "jerky", owner_id: "nobody") { id } }"#)
        .await;

    assert!(!response.errors.is_empty());
    assert!(response.errors[0].message.contains("owner_id"));
}
