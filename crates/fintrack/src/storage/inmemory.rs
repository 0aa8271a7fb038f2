//! In-memory repository implementation.
//!
//! Stands in for the remote relational store in tests and the demo binary.
//!
//! ```rust,ignore
//! use fintrack::storage::InMemoryRepository;
//! use fintrack_core::finance::Transaction;
//!
//! let repo = InMemoryRepository::<Transaction>::new();
//! ```

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use uuid::Uuid;

use fintrack_core::storage::{ListFilter, Record, Repository, RepositoryError, Result};

/// In-memory storage backend for one record kind.
///
/// Uses a HashMap wrapped in `Arc<RwLock<_>>` for thread-safe access. Clones
/// share the same rows. Data is lost when the last clone is dropped.
#[derive(Debug)]
pub struct InMemoryRepository<R: Record> {
    rows: Arc<RwLock<HashMap<Uuid, R>>>,
}

impl<R: Record> Clone for InMemoryRepository<R> {
    fn clone(&self) -> Self {
        Self {
            rows: Arc::clone(&self.rows),
        }
    }
}

impl<R: Record> Default for InMemoryRepository<R> {
    fn default() -> Self {
        Self::new()
    }
}

impl<R: Record> InMemoryRepository<R> {
    /// Creates a new empty repository.
    pub fn new() -> Self {
        Self {
            rows: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Number of stored rows across all owners.
    pub async fn len(&self) -> usize {
        self.rows.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.rows.read().await.is_empty()
    }

    fn insert_row(rows: &mut HashMap<Uuid, R>, new: &R::New) -> R {
        let mut id = Uuid::new_v4();
        while rows.contains_key(&id) {
            id = Uuid::new_v4();
        }
        let record = R::materialize(new.clone(), id);
        rows.insert(id, record.clone());
        record
    }

    fn not_found(id: Uuid) -> RepositoryError {
        RepositoryError::NotFound {
            entity_type: R::ENTITY,
            id: id.to_string(),
        }
    }
}

#[async_trait]
impl<R: Record> Repository<R> for InMemoryRepository<R> {
    async fn list_by_owner(&self, owner_id: &str, filter: &ListFilter) -> Result<Vec<R>> {
        let rows = self.rows.read().await;
        let mut records: Vec<R> = rows
            .values()
            .filter(|r| r.owner_id() == owner_id && r.matches(filter))
            .cloned()
            .collect();
        records.sort_by(R::list_order);
        if let Some(limit) = filter.limit {
            records.truncate(limit);
        }
        Ok(records)
    }

    async fn get_by_id(&self, id: Uuid) -> Result<Option<R>> {
        let rows = self.rows.read().await;
        Ok(rows.get(&id).cloned())
    }

    async fn create(&self, new: &R::New) -> Result<R> {
        let mut rows = self.rows.write().await;
        Ok(Self::insert_row(&mut rows, new))
    }

    async fn create_batch(&self, news: &[R::New]) -> Result<Vec<R>> {
        let mut rows = self.rows.write().await;
        Ok(news
            .iter()
            .map(|new| Self::insert_row(&mut rows, new))
            .collect())
    }

    async fn update(&self, id: Uuid, patch: &R::Patch) -> Result<R> {
        let mut rows = self.rows.write().await;
        let record = rows.get_mut(&id).ok_or_else(|| Self::not_found(id))?;
        record.apply(patch.clone());
        Ok(record.clone())
    }

    async fn delete(&self, id: Uuid) -> Result<bool> {
        let mut rows = self.rows.write().await;
        Ok(rows.remove(&id).is_some())
    }
}
