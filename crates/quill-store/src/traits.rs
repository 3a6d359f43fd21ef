//! Store trait definitions.

use async_trait::async_trait;

use quill_core::{Post, PostId, UserId, UserPublic};

use crate::error::StoreError;

/// Fields accepted when creating a post.
#[derive(Debug, Clone)]
pub struct NewPost {
    pub title: String,
    pub content: String,
    pub user_id: UserId,
}

impl NewPost {
    pub fn new(title: impl Into<String>, content: impl Into<String>, user_id: UserId) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
            user_id,
        }
    }
}

/// Partial update for a post. Absent fields keep their current value.
#[derive(Debug, Clone, Default)]
pub struct PostUpdate {
    pub title: Option<String>,
    pub content: Option<String>,
}

impl PostUpdate {
    /// True when the update would change nothing.
    pub fn is_empty(&self) -> bool {
        self.title.is_none() && self.content.is_none()
    }
}

/// Fields accepted when registering a user. The password is hashed
/// before it reaches the store; backends never see plaintext.
#[derive(Debug, Clone)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    pub password_hash: String,
}

impl NewUser {
    pub fn new(
        name: impl Into<String>,
        email: impl Into<String>,
        password_hash: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            password_hash: password_hash.into(),
        }
    }
}

/// Credential-check view of a user: the public fields plus the stored
/// password hash for verification.
#[derive(Debug, Clone)]
pub struct UserAuth {
    pub user: UserPublic,
    pub password_hash: String,
}

/// A source of truth for posts.
///
/// This trait abstracts over storage backends so the services can fetch
/// and mutate posts without knowing the underlying engine. Every read
/// returns posts with the owner's public fields already denormalized.
///
/// # Implementors
///
/// - `MemoryBackend` - In-process storage for both services
#[async_trait]
pub trait PostStore: Send + Sync {
    /// Returns every post, newest first.
    async fn get_all(&self) -> Result<Vec<Post>, StoreError>;

    /// Returns a single post.
    ///
    /// # Errors
    ///
    /// - `StoreError::PostNotFound` if the identifier has no record
    async fn get(&self, id: PostId) -> Result<Post, StoreError>;

    /// Creates a post, assigning its identifier and timestamps.
    async fn create(&self, new: NewPost) -> Result<Post, StoreError>;

    /// Applies a partial update and refreshes `updated_at`.
    ///
    /// # Errors
    ///
    /// - `StoreError::PostNotFound` if the identifier has no record
    async fn update(&self, id: PostId, update: PostUpdate) -> Result<Post, StoreError>;

    /// Deletes a post.
    ///
    /// # Errors
    ///
    /// - `StoreError::PostNotFound` if the identifier has no record
    async fn delete(&self, id: PostId) -> Result<(), StoreError>;

    /// Returns whether the post belongs to the given user.
    ///
    /// # Errors
    ///
    /// - `StoreError::PostNotFound` if the identifier has no record
    async fn is_owned_by(&self, id: PostId, user: UserId) -> Result<bool, StoreError>;

    /// Verifies that the backend is reachable.
    async fn health_check(&self) -> Result<(), StoreError> {
        Ok(())
    }

    /// Returns the name of this backend, for logging.
    fn name(&self) -> &str;
}

/// User persistence for the auth endpoints.
#[async_trait]
pub trait UserStore: Send + Sync {
    /// Registers a user.
    ///
    /// # Errors
    ///
    /// - `StoreError::EmailTaken` if the email is already registered
    async fn create_user(&self, new: NewUser) -> Result<UserPublic, StoreError>;

    /// Looks a user up by email for credential verification.
    async fn find_by_email(&self, email: &str) -> Result<Option<UserAuth>, StoreError>;

    /// Returns a user's public fields.
    ///
    /// # Errors
    ///
    /// - `StoreError::UserNotFound` if the identifier has no record
    async fn get_user(&self, id: UserId) -> Result<UserPublic, StoreError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    struct EmptyStore;

    #[async_trait]
    impl PostStore for EmptyStore {
        async fn get_all(&self) -> Result<Vec<Post>, StoreError> {
            Ok(Vec::new())
        }

        async fn get(&self, id: PostId) -> Result<Post, StoreError> {
            Err(StoreError::PostNotFound(id))
        }

        async fn create(&self, _new: NewPost) -> Result<Post, StoreError> {
            Err(StoreError::unavailable("read-only"))
        }

        async fn update(&self, id: PostId, _update: PostUpdate) -> Result<Post, StoreError> {
            Err(StoreError::PostNotFound(id))
        }

        async fn delete(&self, id: PostId) -> Result<(), StoreError> {
            Err(StoreError::PostNotFound(id))
        }

        async fn is_owned_by(&self, id: PostId, _user: UserId) -> Result<bool, StoreError> {
            Err(StoreError::PostNotFound(id))
        }

        fn name(&self) -> &str {
            "empty"
        }
    }

    #[tokio::test]
    async fn stores_are_usable_as_trait_objects() {
        let store: Arc<dyn PostStore> = Arc::new(EmptyStore);

        assert!(store.get_all().await.unwrap().is_empty());
        assert!(store.get(PostId::new(1)).await.unwrap_err().is_not_found());
        assert_eq!(store.name(), "empty");
    }

    #[tokio::test]
    async fn default_health_check_passes() {
        assert!(EmptyStore.health_check().await.is_ok());
    }

    #[test]
    fn empty_update_is_detectable() {
        assert!(PostUpdate::default().is_empty());
        assert!(
            !PostUpdate {
                title: Some("T".into()),
                content: None,
            }
            .is_empty()
        );
    }
}
