use super::{category, product, Repository};
use crate::models;
use async_trait::async_trait;
use sqlx::PgPool;

#[derive(Clone, Debug)]
pub struct PgStore {
    pool: PgPool,
}

impl PgStore {
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl Repository<models::Category> for PgStore {
    async fn list(&self) -> Result<Vec<models::Category>, String> {
        category::fetch_all(&self.pool).await
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Category>, String> {
        category::fetch(&self.pool, id).await
    }

    async fn insert(&self, item: models::Category) -> Result<models::Category, String> {
        category::insert(&self.pool, item).await
    }

    async fn update(&self, item: models::Category) -> Result<Option<models::Category>, String> {
        category::update(&self.pool, item).await
    }

    async fn delete(&self, id: i32) -> Result<bool, String> {
        category::delete(&self.pool, id).await
    }
}

#[async_trait]
impl Repository<models::Product> for PgStore {
    async fn list(&self) -> Result<Vec<models::Product>, String> {
        product::fetch_all(&self.pool).await
    }

    async fn fetch(&self, id: i32) -> Result<Option<models::Product>, String> {
        product::fetch(&self.pool, id).await
    }

    async fn insert(&self, item: models::Product) -> Result<models::Product, String> {
        product::insert(&self.pool, item).await
    }

    async fn update(&self, item: models::Product) -> Result<Option<models::Product>, String> {
        product::update(&self.pool, item).await
    }

    async fn delete(&self, id: i32) -> Result<bool, String> {
        product::delete(&self.pool, id).await
    }
}
