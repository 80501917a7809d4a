//! # guidepost-adapter-http-axum
//!
//! HTTP adapter built on [axum](https://docs.rs/axum).
//!
//! ## Responsibilities
//! - Serve a **JSON API** for programmatic access
//!   (`/api/businesses`, `/api/events`, …) that passes stored field
//!   mappings through verbatim — including the mixed-case `URL` key
//! - Serve a **server-side-rendered HTML directory** that works with
//!   **zero JavaScript** — pure HTML forms, search via GET parameters
//! - Map HTTP requests into application service calls (driving adapter)
//! - Map application results into HTTP responses (JSON or HTML)
//!
//! ## No-JS dashboard approach
//! - Every page is rendered server-side as complete HTML (askama).
//! - Create/edit controls are `<form>` elements that POST back to the
//!   server and redirect (PRG pattern).
//! - Filtering and sorting are plain `GET` query parameters.
//!
//! ## Dependency rule
//! Depends on `guidepost-app` (for port traits and services) and
//! `guidepost-domain` (for domain types used in request/response mapping).
//! Never leaks axum types into the domain.

pub mod api;
pub mod dashboard;
pub mod error;
pub mod router;
pub mod state;
