//! GraphQL schema assembly.
//!
//! The pool is injected as schema context data rather than held in a global,
//! so tests can substitute any pool (including one that never connects).

pub mod mutation;
pub mod query;
pub mod types;

use async_graphql::{EmptySubscription, Schema};
use sqlx::PgPool;

pub use mutation::{MutationRoot, OWNER_DELETED};
pub use query::QueryRoot;
pub use types::{Owner, Pet};

/// Schema over the pet registry: queries, mutations, no subscriptions.
pub type PawhubSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

/// Build the schema with the given pool as resolver context.
pub fn build_schema(pool: PgPool) -> PawhubSchema {
    Schema::build(QueryRoot, MutationRoot, EmptySubscription)
        .data(pool)
        .finish()
}
