//! Shared fixtures for quill-core tests.

#![allow(dead_code)]

use quill_core::{Post, PostId, UserId, UserPublic};
use time::macros::datetime;

pub fn sample_user() -> UserPublic {
    UserPublic::new(1, "Test User", "test@example.com")
}

pub fn sample_post() -> Post {
    Post {
        id: PostId::new(1),
        title: "Test Post".to_string(),
        content: "This is test post content".to_string(),
        user_id: UserId::new(1),
        created_at: datetime!(2024-05-01 10:00:00 UTC),
        updated_at: datetime!(2024-05-02 09:30:00 UTC),
        user: sample_user(),
    }
}
