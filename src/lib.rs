//! pawhub: a GraphQL API over a Postgres registry of owners and their pets.
//!
//! Two entity types, Owner and Pet, related one-to-many through
//! `pets.owner_id`. Queries resolve graph-shaped selections via one
//! relational query per traversal; mutations insert or delete single rows.
//! The schema (tables assumed already provisioned) is documented in
//! `schema.sql`.

pub mod config;
pub mod db;
pub mod error;
pub mod graphql;
pub mod http;

use sqlx::PgPool;

pub use config::{Profile, ServerConfig};
pub use error::{Error, Result};
pub use graphql::{build_schema, PawhubSchema};

/// Connect to the store selected by the given profile.
pub async fn connect(profile: Profile) -> Result<PgPool> {
    let url = profile.database_url();
    let pool = db::create_pool(&url).await?;
    Ok(pool)
}

/// Start the server: build the schema over the pool and serve it.
pub async fn serve(pool: PgPool, config: ServerConfig) -> Result<()> {
    let schema = build_schema(pool);
    http::run_server(schema, config).await
}
