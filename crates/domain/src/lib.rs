//! # guidepost-domain
//!
//! Pure domain model for the guidepost city-guide directory.
//!
//! ## Responsibilities
//! - Foundational types: typed identifiers, error conventions
//! - Define **Businesses** (directory listings with a fixed category)
//! - Define **Events** (dated happenings with a venue)
//! - Define **Patches** (partial updates that preserve omitted fields)
//! - Provide the **query engine** (substring filter + stable descending sort)
//! - Contain all invariant enforcement and domain logic
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod business;
pub mod category;
pub mod error;
pub mod event;
pub mod id;
pub mod query;
