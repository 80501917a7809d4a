//! Application services — one use-case struct per collection.

pub mod business_service;
pub mod event_service;

pub use business_service::BusinessService;
pub use event_service::EventService;
