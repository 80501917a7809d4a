//! The fixed business category enumeration.

use std::fmt;

use serde::de::{self, Visitor};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ValidationError;

/// Business category, serialized as its index.
///
/// The order is fixed — `shop=0, restaurant=1, bar=2, club=3` — and the
/// derived `Ord` follows it, so sorting by category sorts by index.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Category {
    #[default]
    Shop = 0,
    Restaurant = 1,
    Bar = 2,
    Club = 3,
}

impl Category {
    /// Every category, in index order. Used by templates to build menus.
    pub const ALL: [Self; 4] = [Self::Shop, Self::Restaurant, Self::Bar, Self::Club];

    /// The wire representation.
    #[must_use]
    pub fn index(self) -> u8 {
        self as u8
    }

    /// Look a category up by index.
    #[must_use]
    pub fn from_index(index: u64) -> Option<Self> {
        match index {
            0 => Some(Self::Shop),
            1 => Some(Self::Restaurant),
            2 => Some(Self::Bar),
            3 => Some(Self::Club),
            _ => None,
        }
    }

    /// The lowercase symbolic name.
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Shop => "shop",
            Self::Restaurant => "restaurant",
            Self::Bar => "bar",
            Self::Club => "club",
        }
    }

    /// Parse a boundary value: an index, a numeric string, or a
    /// case-insensitive name. This is the single place loose inputs are
    /// normalized to the internal representation.
    ///
    /// # Errors
    ///
    /// Returns [`ValidationError::UnknownCategory`] for anything else.
    pub fn parse(value: &str) -> Result<Self, ValidationError> {
        if let Ok(index) = value.parse::<u64>() {
            return Self::from_index(index)
                .ok_or_else(|| ValidationError::UnknownCategory(value.to_string()));
        }
        match value.to_ascii_lowercase().as_str() {
            "shop" => Ok(Self::Shop),
            "restaurant" => Ok(Self::Restaurant),
            "bar" => Ok(Self::Bar),
            "club" => Ok(Self::Club),
            _ => Err(ValidationError::UnknownCategory(value.to_string())),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_u8(self.index())
    }
}

impl<'de> Deserialize<'de> for Category {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_any(CategoryVisitor)
    }
}

struct CategoryVisitor;

impl Visitor<'_> for CategoryVisitor {
    type Value = Category;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a category index (0-3) or name")
    }

    fn visit_u64<E: de::Error>(self, value: u64) -> Result<Self::Value, E> {
        Category::from_index(value)
            .ok_or_else(|| E::custom(ValidationError::UnknownCategory(value.to_string())))
    }

    fn visit_i64<E: de::Error>(self, value: i64) -> Result<Self::Value, E> {
        let index = u64::try_from(value)
            .map_err(|_| E::custom(ValidationError::UnknownCategory(value.to_string())))?;
        self.visit_u64(index)
    }

    fn visit_str<E: de::Error>(self, value: &str) -> Result<Self::Value, E> {
        Category::parse(value).map_err(E::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_shop() {
        assert_eq!(Category::default(), Category::Shop);
    }

    #[test]
    fn should_order_by_index() {
        assert!(Category::Club > Category::Bar);
        assert!(Category::Restaurant > Category::Shop);
    }

    #[test]
    fn should_parse_names_case_insensitively() {
        assert_eq!(Category::parse("Bar").unwrap(), Category::Bar);
        assert_eq!(Category::parse("CLUB").unwrap(), Category::Club);
    }

    #[test]
    fn should_parse_numeric_strings_as_indices() {
        assert_eq!(Category::parse("2").unwrap(), Category::Bar);
    }

    #[test]
    fn should_reject_out_of_range_index() {
        assert!(matches!(
            Category::parse("7"),
            Err(ValidationError::UnknownCategory(_))
        ));
    }

    #[test]
    fn should_reject_unknown_name() {
        assert!(Category::parse("arcade").is_err());
    }

    #[test]
    fn should_serialize_as_bare_index() {
        assert_eq!(serde_json::to_string(&Category::Club).unwrap(), "3");
    }

    #[test]
    fn should_deserialize_from_index_or_name() {
        let by_index: Category = serde_json::from_str("1").unwrap();
        assert_eq!(by_index, Category::Restaurant);
        let by_name: Category = serde_json::from_str("\"restaurant\"").unwrap();
        assert_eq!(by_name, Category::Restaurant);
    }

    #[test]
    fn should_reject_out_of_range_index_when_deserializing() {
        let result: Result<Category, _> = serde_json::from_str("9");
        assert!(result.is_err());
    }
}
