//! Database layer - connection pool, schema migrations and repositories
//!
//! # Design Principles
//!
//! - Connection pool passed explicitly - no global session state
//! - Relation-crossing reads are explicit JOINs - no lazy loading
//! - Rely on DB constraints, handle conflicts - no check-then-insert
//! - Transactions for multi-step operations

pub mod migrations;
pub mod pool;
pub mod repos;

pub use pool::{create_memory_pool, create_pool, create_pool_with_options};
pub use repos::*;

#[cfg(test)]
pub(crate) async fn test_pool() -> sqlx::SqlitePool {
    let pool = create_memory_pool().await.expect("in-memory pool");
    migrations::run(&pool).await.expect("migrations");
    pool
}
