//! Common error types used across the workspace.
//!
//! Each layer converts into [`GuidepostError`] via `#[from]`; no `String`
//! variants. The HTTP adapter maps the variants onto status codes
//! (validation → 400, not-found → 404).

/// Top-level domain error.
#[derive(Debug, thiserror::Error)]
pub enum GuidepostError {
    /// A request payload failed an invariant check.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// A record was requested under an unknown id.
    #[error(transparent)]
    NotFound(#[from] NotFoundError),
}

/// Invariant violations on incoming data.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    /// A required field was missing or empty.
    #[error("'{0}' is a required value")]
    EmptyField(&'static str),

    /// A category value matched neither an index nor a known name.
    #[error("unknown category: {0}")]
    UnknownCategory(String),

    /// An identifier was empty.
    #[error("identifier must not be empty")]
    EmptyId,
}

/// A collection does not hold the requested id.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{resource} {id} doesn't exist")]
pub struct NotFoundError {
    /// Kind of record that was looked up ("Business", "Event").
    pub resource: &'static str,
    /// The id that missed.
    pub id: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_name_missing_id_in_not_found_message() {
        let err = NotFoundError {
            resource: "Business",
            id: "x7k2p9".to_string(),
        };
        assert_eq!(err.to_string(), "Business x7k2p9 doesn't exist");
    }

    #[test]
    fn should_name_field_in_validation_message() {
        let err = ValidationError::EmptyField("name");
        assert_eq!(err.to_string(), "'name' is a required value");
    }

    #[test]
    fn should_convert_into_top_level_error() {
        let err: GuidepostError = ValidationError::EmptyField("location").into();
        assert!(matches!(err, GuidepostError::Validation(_)));
    }
}
