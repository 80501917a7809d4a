//! # guidepost-app
//!
//! Application layer — use-cases and **port definitions** (traits).
//!
//! ## Responsibilities
//! - Define **port traits** that adapters must implement (driven/outbound):
//!   - `BusinessRepository` — lookup, snapshot, insert, merge-update
//!   - `EventRepository` — same contract for events
//! - Define **driving/inbound ports** as use-case structs:
//!   - `BusinessService` — list/filter, get, create, partial update
//!   - `EventService` — same operations for events
//! - Orchestrate domain objects without knowing *how* storage works
//!
//! ## Dependency rule
//! Depends on `guidepost-domain` only. Never imports adapter crates.
//! Adapters depend on *this* crate, not the reverse.

pub mod ports;
pub mod services;
