//! Persistence for categories and products.
//!
//! Handlers only see [`Repository`]; `PgStore` runs each call as a single
//! statement against PostgreSQL and `MemoryStore` keeps rows in process.

use crate::models;
use async_trait::async_trait;
use std::sync::Arc;

pub mod category;
pub mod memory;
pub mod postgres;
pub mod product;

pub use memory::MemoryStore;
pub use postgres::PgStore;

#[async_trait]
pub trait Repository<T>: Send + Sync {
    async fn list(&self) -> Result<Vec<T>, String>;

    async fn fetch(&self, id: i32) -> Result<Option<T>, String>;

    /// Stores a new row. The id on `item` is ignored and replaced.
    async fn insert(&self, item: T) -> Result<T, String>;

    /// Overwrites every mutable field of the row with `item.id`.
    /// `None` when no such row exists.
    async fn update(&self, item: T) -> Result<Option<T>, String>;

    /// `false` when no such row exists.
    async fn delete(&self, id: i32) -> Result<bool, String>;
}

/// The stores handed to the HTTP layer.
#[derive(Clone)]
pub struct Store {
    pub categories: Arc<dyn Repository<models::Category>>,
    pub products: Arc<dyn Repository<models::Product>>,
}

impl Store {
    pub fn postgres(pool: sqlx::PgPool) -> Self {
        let store = Arc::new(PgStore::new(pool));
        Self {
            categories: store.clone(),
            products: store,
        }
    }

    pub fn memory() -> Self {
        Self {
            categories: Arc::new(MemoryStore::<models::Category>::new()),
            products: Arc::new(MemoryStore::<models::Product>::new()),
        }
    }
}
