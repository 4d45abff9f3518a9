use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use tokio::sync::RwLock;

use crate::modules::shorts::domain::{ShortId, Tag, TagId};
use crate::modules::shorts::ports::{RepositoryError, TagRepository};

#[derive(Default)]
struct TagStore {
    tags: HashMap<TagId, Tag>,
    links: HashSet<(ShortId, TagId)>,
}

/// 内存标签仓储
///
/// 标签实体与 (short, tag) 关联放在同一把锁下，
/// 保证关联操作相对标签删除的原子性。
pub struct InMemoryTagRepository {
    store: RwLock<TagStore>,
}

impl InMemoryTagRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(TagStore::default()),
        }
    }
}

impl Default for InMemoryTagRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl TagRepository for InMemoryTagRepository {
    async fn get(&self, id: TagId) -> Result<Option<Tag>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.tags.get(&id).cloned())
    }

    async fn find_by_text(&self, text: &str) -> Result<Option<Tag>, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.tags.values().find(|t| t.text() == text).cloned())
    }

    async fn find_all(&self) -> Result<Vec<Tag>, RepositoryError> {
        let store = self.store.read().await;

        let mut tags: Vec<Tag> = store.tags.values().cloned().collect();
        tags.sort_by(|a, b| a.text().cmp(b.text()));

        Ok(tags)
    }

    async fn find_by_short(&self, short_id: ShortId) -> Result<Vec<Tag>, RepositoryError> {
        let store = self.store.read().await;

        let mut tags: Vec<Tag> = store
            .links
            .iter()
            .filter(|(sid, _)| *sid == short_id)
            .filter_map(|(_, tid)| store.tags.get(tid).cloned())
            .collect();
        tags.sort_by(|a, b| a.text().cmp(b.text()));

        Ok(tags)
    }

    async fn find_shorts_by_tag(&self, tag_id: TagId) -> Result<Vec<ShortId>, RepositoryError> {
        let store = self.store.read().await;

        Ok(store
            .links
            .iter()
            .filter(|(_, tid)| *tid == tag_id)
            .map(|(sid, _)| *sid)
            .collect())
    }

    async fn save(&self, tag: &Tag) -> Result<(), RepositoryError> {
        let mut store = self.store.write().await;
        store.tags.insert(tag.id(), tag.clone());
        Ok(())
    }

    async fn attach(&self, short_id: ShortId, tag_id: TagId) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;

        if !store.tags.contains_key(&tag_id) {
            return Err(RepositoryError::NotFound(format!("Tag: {}", tag_id)));
        }

        Ok(store.links.insert((short_id, tag_id)))
    }

    async fn detach(&self, short_id: ShortId, tag_id: TagId) -> Result<bool, RepositoryError> {
        let mut store = self.store.write().await;
        Ok(store.links.remove(&(short_id, tag_id)))
    }

    async fn detach_all(&self, short_id: ShortId) -> Result<usize, RepositoryError> {
        let mut store = self.store.write().await;

        let before = store.links.len();
        store.links.retain(|(sid, _)| *sid != short_id);

        Ok(before - store.links.len())
    }

    async fn is_attached(
        &self,
        short_id: ShortId,
        tag_id: TagId,
    ) -> Result<bool, RepositoryError> {
        let store = self.store.read().await;
        Ok(store.links.contains(&(short_id, tag_id)))
    }

    async fn delete(&self, tag_id: TagId) -> Result<usize, RepositoryError> {
        let mut store = self.store.write().await;

        store.tags.remove(&tag_id);
        let before = store.links.len();
        store.links.retain(|(_, tid)| *tid != tag_id);

        Ok(before - store.links.len())
    }
}
