//! Test helpers para quill-mirror.

#![allow(dead_code)]

pub mod client;

pub use client::{TestClient, TestResponse};

use quill_cache::CacheConfig;
use quill_mirror::MirrorState;
use quill_store::MemoryBackend;

/// Crea un TestClient sobre un store vacio.
pub fn client() -> TestClient {
    client_with(MemoryBackend::new())
}

/// Crea un TestClient sobre el dataset de demo.
pub fn seeded_client() -> TestClient {
    let backend = MemoryBackend::new();
    backend.seed_demo();
    client_with(backend)
}

fn client_with(backend: MemoryBackend) -> TestClient {
    let state = MirrorState::from_memory_backend(backend, &CacheConfig::default());
    TestClient::new(quill_mirror::create_router_with_state(state))
}
