//! One-time JSON seed loading.
//!
//! Seed files are JSON objects mapping string ids to records:
//!
//! ```json
//! { "a1": { "name": "Joe's Bar", "location": "...", "description": "..." } }
//! ```
//!
//! File order is preserved (`serde_json` with `preserve_order`) so the
//! repositories' insertion order matches the snapshot on disk. A missing or
//! malformed file is an error the caller should treat as fatal; there is no
//! partial recovery.

use std::path::Path;
use std::str::FromStr;

use serde::de::DeserializeOwned;

use guidepost_domain::business::Business;
use guidepost_domain::error::ValidationError;
use guidepost_domain::event::Event;
use guidepost_domain::id::{BusinessId, EventId};

/// Seed loading failures.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    /// The seed file could not be read.
    #[error("failed to read seed file")]
    Io(#[from] std::io::Error),

    /// The seed file is not the expected JSON shape.
    #[error("failed to parse seed file")]
    Parse(#[from] serde_json::Error),

    /// A top-level key is not a usable id.
    #[error("invalid seed key {key:?}")]
    InvalidKey {
        key: String,
        source: ValidationError,
    },
}

fn parse<I, T>(json: &str) -> Result<Vec<(I, T)>, SeedError>
where
    I: FromStr<Err = ValidationError>,
    T: DeserializeOwned,
{
    let map: serde_json::Map<String, serde_json::Value> = serde_json::from_str(json)?;
    map.into_iter()
        .map(|(key, value)| {
            let id = I::from_str(&key).map_err(|source| SeedError::InvalidKey {
                key: key.clone(),
                source,
            })?;
            let record = serde_json::from_value(value)?;
            Ok((id, record))
        })
        .collect()
}

/// Parse a business seed document.
///
/// # Errors
///
/// Returns [`SeedError`] when the document is malformed or a key is empty.
pub fn parse_businesses(json: &str) -> Result<Vec<(BusinessId, Business)>, SeedError> {
    parse(json)
}

/// Parse an event seed document.
///
/// # Errors
///
/// Returns [`SeedError`] when the document is malformed or a key is empty.
pub fn parse_events(json: &str) -> Result<Vec<(EventId, Event)>, SeedError> {
    parse(json)
}

/// Read and parse the business seed file.
///
/// # Errors
///
/// Returns [`SeedError`] when the file is absent, unreadable, or malformed.
pub fn load_businesses(path: impl AsRef<Path>) -> Result<Vec<(BusinessId, Business)>, SeedError> {
    parse_businesses(&std::fs::read_to_string(path)?)
}

/// Read and parse the event seed file.
///
/// # Errors
///
/// Returns [`SeedError`] when the file is absent, unreadable, or malformed.
pub fn load_events(path: impl AsRef<Path>) -> Result<Vec<(EventId, Event)>, SeedError> {
    parse_events(&std::fs::read_to_string(path)?)
}
