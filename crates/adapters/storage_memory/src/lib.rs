//! # guidepost-adapter-storage-memory
//!
//! In-memory implementation of the storage ports.
//!
//! ## Responsibilities
//! - Hold each collection as a `tokio::sync::RwLock`-protected list of
//!   `(id, record)` pairs, preserving insertion order
//! - Generate short random ids on insert, retrying while the key is taken
//! - Merge partial updates under the write lock so read-modify-write is
//!   atomic against concurrent handlers
//! - Load the one-time JSON seed snapshot at startup
//!
//! There is deliberately no write-back: mutations live and die with the
//! process.

pub mod business_repo;
pub mod event_repo;
pub mod seed;

pub use business_repo::MemoryBusinessRepository;
pub use event_repo::MemoryEventRepository;
pub use seed::SeedError;
