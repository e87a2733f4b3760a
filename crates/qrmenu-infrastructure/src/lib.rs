//! # QR Menu Infrastructure
//!
//! Store adapters: PostgreSQL repositories and an in-memory store.

pub mod database;
pub mod memory;
pub mod store;

pub use database::{create_pool, run_migrations};
pub use memory::MemoryStore;
pub use store::{build_repositories, memory_repositories, StoreError};
