//! Typed identifier newtypes over short random keys.
//!
//! Generated ids are 6 characters drawn uniformly from lowercase ASCII
//! letters and digits. The space is small (36^6), so the store retries
//! generation on collision rather than assuming uniqueness.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::ValidationError;

/// Alphabet generated keys are drawn from.
const ALPHABET: &[u8] = b"abcdefghijklmnopqrstuvwxyz0123456789";

/// Length of generated keys.
const KEY_LEN: usize = 6;

fn random_key() -> String {
    let mut rng = rand::thread_rng();
    (0..KEY_LEN)
        .map(|_| char::from(ALPHABET[rng.gen_range(0..ALPHABET.len())]))
        .collect()
}

macro_rules! define_id {
    ($(#[doc = $doc:expr])* $name:ident) => {
        $(#[doc = $doc])*
        #[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(try_from = "String", into = "String")]
        pub struct $name(String);

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(random_key())
            }

            /// View the identifier as a string slice.
            #[must_use]
            pub fn as_str(&self) -> &str {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl TryFrom<String> for $name {
            type Error = ValidationError;

            fn try_from(value: String) -> Result<Self, Self::Error> {
                if value.is_empty() {
                    return Err(ValidationError::EmptyId);
                }
                Ok(Self(value))
            }
        }

        impl From<$name> for String {
            fn from(id: $name) -> Self {
                id.0
            }
        }

        impl FromStr for $name {
            type Err = ValidationError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                Self::try_from(s.to_string())
            }
        }
    };
}

define_id!(
    /// Unique key for a [`Business`](crate::business::Business) within the
    /// business collection.
    BusinessId
);

define_id!(
    /// Unique key for an [`Event`](crate::event::Event) within the event
    /// collection.
    EventId
);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_generate_six_char_keys_from_the_alphabet() {
        let id = BusinessId::random();
        assert_eq!(id.as_str().len(), 6);
        assert!(
            id.as_str()
                .bytes()
                .all(|b| b.is_ascii_lowercase() || b.is_ascii_digit())
        );
    }

    #[test]
    fn should_generate_distinct_keys_across_calls() {
        // 36^6 keys; a hundred draws colliding would be astronomically odd.
        let keys: std::collections::HashSet<String> = (0..100)
            .map(|_| BusinessId::random().as_str().to_string())
            .collect();
        assert!(keys.len() > 90);
    }

    #[test]
    fn should_accept_arbitrary_non_empty_keys_when_parsing() {
        // Seed files may carry hand-written keys of any length.
        let id: EventId = "a1".parse().unwrap();
        assert_eq!(id.as_str(), "a1");
    }

    #[test]
    fn should_reject_empty_key_when_parsing() {
        let result = BusinessId::from_str("");
        assert!(matches!(result, Err(ValidationError::EmptyId)));
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let id = BusinessId::random();
        let json = serde_json::to_string(&id).unwrap();
        let parsed: BusinessId = serde_json::from_str(&json).unwrap();
        assert_eq!(id, parsed);
    }

    #[test]
    fn should_serialize_as_plain_string() {
        let id: BusinessId = "x7k2p9".parse().unwrap();
        assert_eq!(serde_json::to_string(&id).unwrap(), "\"x7k2p9\"");
    }
}
