//! In-memory post repository - used when no database is configured, and in tests.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use blog_core::domain::Post;
use blog_core::error::RepoError;
use blog_core::ports::{BaseRepository, PostRepository};

struct Store {
    posts: BTreeMap<i32, Post>,
    next_id: i32,
}

/// In-memory post store using an ordered map behind an async RwLock.
///
/// Ids are assigned sequentially from 1 and never reused, like a database
/// sequence. Data is lost on process restart.
pub struct InMemoryPostRepository {
    store: RwLock<Store>,
}

impl InMemoryPostRepository {
    pub fn new() -> Self {
        Self {
            store: RwLock::new(Store {
                posts: BTreeMap::new(),
                next_id: 1,
            }),
        }
    }
}

impl Default for InMemoryPostRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl BaseRepository<Post, i32> for InMemoryPostRepository {
    async fn find_by_id(&self, id: i32) -> Result<Option<Post>, RepoError> {
        let store = self.store.read().await;
        Ok(store.posts.get(&id).cloned())
    }

    async fn save(&self, mut post: Post) -> Result<Post, RepoError> {
        let mut store = self.store.write().await;

        let id = match post.id {
            Some(id) if store.posts.contains_key(&id) => id,
            Some(_) => return Err(RepoError::NotFound),
            None => {
                let id = store.next_id;
                store.next_id += 1;
                post.id = Some(id);
                id
            }
        };

        store.posts.insert(id, post.clone());
        Ok(post)
    }

    async fn delete(&self, id: i32) -> Result<(), RepoError> {
        let mut store = self.store.write().await;
        store
            .posts
            .remove(&id)
            .map(|_| ())
            .ok_or(RepoError::NotFound)
    }
}

#[async_trait]
impl PostRepository for InMemoryPostRepository {
    async fn find_all_limited(&self, limit: u64, offset: u64) -> Result<Vec<Post>, RepoError> {
        let store = self.store.read().await;
        let skip = usize::try_from(offset).unwrap_or(usize::MAX);
        let take = usize::try_from(limit).unwrap_or(usize::MAX);

        Ok(store.posts.values().skip(skip).take(take).cloned().collect())
    }
}
