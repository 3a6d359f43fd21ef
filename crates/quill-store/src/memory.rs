//! In-memory store backend.

use std::collections::BTreeMap;
use std::sync::atomic::{AtomicI64, Ordering};

use async_trait::async_trait;
use parking_lot::RwLock;
use time::{Duration, OffsetDateTime};
use tracing::{debug, info};

use quill_core::{Post, PostId, UserId, UserPublic};

use crate::error::StoreError;
use crate::traits::{NewPost, NewUser, PostStore, PostUpdate, UserAuth, UserStore};

#[derive(Debug, Clone)]
struct UserRecord {
    id: UserId,
    name: String,
    email: String,
    password_hash: String,
}

#[derive(Debug, Clone)]
struct PostRecord {
    id: PostId,
    title: String,
    content: String,
    user_id: UserId,
    created_at: OffsetDateTime,
    updated_at: OffsetDateTime,
}

/// In-process source of truth.
///
/// Stands in for the relational database: rows live in two tables keyed
/// by id, identifiers are assigned from monotonic counters, and every
/// post read joins the owner's public fields into the payload. Each
/// service constructs one backend at startup and passes it around as a
/// trait handle; there is no global instance.
pub struct MemoryBackend {
    users: RwLock<BTreeMap<UserId, UserRecord>>,
    posts: RwLock<BTreeMap<PostId, PostRecord>>,
    next_user_id: AtomicI64,
    next_post_id: AtomicI64,
}

impl MemoryBackend {
    /// Creates an empty backend.
    pub fn new() -> Self {
        Self {
            users: RwLock::new(BTreeMap::new()),
            posts: RwLock::new(BTreeMap::new()),
            next_user_id: AtomicI64::new(1),
            next_post_id: AtomicI64::new(1),
        }
    }

    /// Loads a small fixed dataset: two authors and three posts.
    ///
    /// Used by the mirror service (which has no write surface of its
    /// own) and by tests. Seeded users carry an unusable password hash.
    pub fn seed_demo(&self) {
        let now = OffsetDateTime::now_utc();

        {
            let mut users = self.users.write();
            users.insert(
                UserId::new(1),
                UserRecord {
                    id: UserId::new(1),
                    name: "Ada Wright".to_string(),
                    email: "ada@example.com".to_string(),
                    password_hash: String::new(),
                },
            );
            users.insert(
                UserId::new(2),
                UserRecord {
                    id: UserId::new(2),
                    name: "Ben Ortega".to_string(),
                    email: "ben@example.com".to_string(),
                    password_hash: String::new(),
                },
            );
        }
        self.next_user_id.store(3, Ordering::SeqCst);

        {
            let mut posts = self.posts.write();
            for (id, title, content, user_id, age_minutes) in [
                (1, "Hello, Quill", "First post on the demo dataset.", 1, 30),
                (2, "Cache-aside in practice", "Read through, write around.", 1, 20),
                (3, "Mirror service notes", "Same keys, separate cache.", 2, 10),
            ] {
                let at = now - Duration::minutes(age_minutes);
                posts.insert(
                    PostId::new(id),
                    PostRecord {
                        id: PostId::new(id),
                        title: title.to_string(),
                        content: content.to_string(),
                        user_id: UserId::new(user_id),
                        created_at: at,
                        updated_at: at,
                    },
                );
            }
        }
        self.next_post_id.store(4, Ordering::SeqCst);

        info!("Demo dataset seeded: 2 users, 3 posts");
    }

    /// Joins the owner's public fields into a post payload.
    fn hydrate(&self, record: &PostRecord) -> Result<Post, StoreError> {
        let users = self.users.read();
        let owner = users
            .get(&record.user_id)
            .ok_or_else(|| StoreError::unavailable(format!("owner missing for post {}", record.id)))?;

        Ok(Post {
            id: record.id,
            title: record.title.clone(),
            content: record.content.clone(),
            user_id: record.user_id,
            created_at: record.created_at,
            updated_at: record.updated_at,
            user: UserPublic::new(owner.id, owner.name.clone(), owner.email.clone()),
        })
    }
}

impl Default for MemoryBackend {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl PostStore for MemoryBackend {
    async fn get_all(&self) -> Result<Vec<Post>, StoreError> {
        let records: Vec<PostRecord> = self.posts.read().values().cloned().collect();

        let mut posts = records
            .iter()
            .map(|record| self.hydrate(record))
            .collect::<Result<Vec<_>, _>>()?;

        // Newest first, id as tie-breaker for same-instant writes
        posts.sort_by(|a, b| {
            b.created_at
                .cmp(&a.created_at)
                .then_with(|| b.id.cmp(&a.id))
        });

        debug!(count = posts.len(), "Posts loaded from store");
        Ok(posts)
    }

    async fn get(&self, id: PostId) -> Result<Post, StoreError> {
        let record = self
            .posts
            .read()
            .get(&id)
            .cloned()
            .ok_or(StoreError::PostNotFound(id))?;

        self.hydrate(&record)
    }

    async fn create(&self, new: NewPost) -> Result<Post, StoreError> {
        // The owner must exist before the row is written
        if !self.users.read().contains_key(&new.user_id) {
            return Err(StoreError::UserNotFound(new.user_id));
        }

        let id = PostId::new(self.next_post_id.fetch_add(1, Ordering::SeqCst));
        let now = OffsetDateTime::now_utc();

        let record = PostRecord {
            id,
            title: new.title,
            content: new.content,
            user_id: new.user_id,
            created_at: now,
            updated_at: now,
        };

        self.posts.write().insert(id, record.clone());
        debug!(post_id = %id, user_id = %new.user_id, "Post created");

        self.hydrate(&record)
    }

    async fn update(&self, id: PostId, update: PostUpdate) -> Result<Post, StoreError> {
        let record = {
            let mut posts = self.posts.write();
            let record = posts.get_mut(&id).ok_or(StoreError::PostNotFound(id))?;

            if !update.is_empty() {
                if let Some(title) = update.title {
                    record.title = title;
                }
                if let Some(content) = update.content {
                    record.content = content;
                }
                record.updated_at = OffsetDateTime::now_utc();
            }

            record.clone()
        };

        debug!(post_id = %id, "Post updated");
        self.hydrate(&record)
    }

    async fn delete(&self, id: PostId) -> Result<(), StoreError> {
        self.posts
            .write()
            .remove(&id)
            .map(|_| debug!(post_id = %id, "Post deleted"))
            .ok_or(StoreError::PostNotFound(id))
    }

    async fn is_owned_by(&self, id: PostId, user: UserId) -> Result<bool, StoreError> {
        self.posts
            .read()
            .get(&id)
            .map(|record| record.user_id == user)
            .ok_or(StoreError::PostNotFound(id))
    }

    fn name(&self) -> &str {
        "memory"
    }
}

#[async_trait]
impl UserStore for MemoryBackend {
    async fn create_user(&self, new: NewUser) -> Result<UserPublic, StoreError> {
        let mut users = self.users.write();

        let taken = users
            .values()
            .any(|user| user.email.eq_ignore_ascii_case(&new.email));
        if taken {
            return Err(StoreError::EmailTaken(new.email));
        }

        let id = UserId::new(self.next_user_id.fetch_add(1, Ordering::SeqCst));
        let record = UserRecord {
            id,
            name: new.name,
            email: new.email,
            password_hash: new.password_hash,
        };
        let public = UserPublic::new(id, record.name.clone(), record.email.clone());

        users.insert(id, record);
        debug!(user_id = %id, "User created");

        Ok(public)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<UserAuth>, StoreError> {
        let users = self.users.read();

        Ok(users
            .values()
            .find(|user| user.email.eq_ignore_ascii_case(email))
            .map(|user| UserAuth {
                user: UserPublic::new(user.id, user.name.clone(), user.email.clone()),
                password_hash: user.password_hash.clone(),
            }))
    }

    async fn get_user(&self, id: UserId) -> Result<UserPublic, StoreError> {
        self.users
            .read()
            .get(&id)
            .map(|user| UserPublic::new(user.id, user.name.clone(), user.email.clone()))
            .ok_or(StoreError::UserNotFound(id))
    }
}
