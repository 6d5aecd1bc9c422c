use super::Repository;
use crate::models::Record;
use async_trait::async_trait;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

/// Rows kept in process, keyed by id. Ids start at 1 and are never reused.
pub struct MemoryStore<T> {
    inner: RwLock<Inner<T>>,
}

struct Inner<T> {
    next_id: i32,
    rows: BTreeMap<i32, T>,
}

impl<T> MemoryStore<T> {
    pub fn new() -> Self {
        Self {
            inner: RwLock::new(Inner {
                next_id: 1,
                rows: BTreeMap::new(),
            }),
        }
    }
}

impl<T> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Record> Repository<T> for MemoryStore<T> {
    async fn list(&self) -> Result<Vec<T>, String> {
        Ok(self.inner.read().await.rows.values().cloned().collect())
    }

    async fn fetch(&self, id: i32) -> Result<Option<T>, String> {
        Ok(self.inner.read().await.rows.get(&id).cloned())
    }

    async fn insert(&self, mut item: T) -> Result<T, String> {
        let mut inner = self.inner.write().await;
        let id = inner.next_id;
        inner.next_id = id
            .checked_add(1)
            .ok_or_else(|| format!("{} id space exhausted", T::LABEL))?;
        item.set_id(id);
        inner.rows.insert(id, item.clone());
        Ok(item)
    }

    async fn update(&self, item: T) -> Result<Option<T>, String> {
        let mut inner = self.inner.write().await;
        match inner.rows.get_mut(&item.id()) {
            Some(row) => {
                *row = item.clone();
                Ok(Some(item))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i32) -> Result<bool, String> {
        Ok(self.inner.write().await.rows.remove(&id).is_some())
    }
}
