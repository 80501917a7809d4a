//! Business — a directory listing with a fixed category.

use serde::{Deserialize, Serialize};

use crate::category::Category;
use crate::error::{GuidepostError, ValidationError};
use crate::query::Searchable;

/// A single business listing.
///
/// Wire field names are preserved verbatim, including the mixed-case `URL`
/// key carried over from the seed data, so JSON endpoints round-trip the
/// stored mapping exactly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Business {
    pub name: String,
    pub location: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(default)]
    pub phone: String,
    #[serde(default)]
    pub hours: String,
    #[serde(default)]
    pub rating: String,
    pub description: String,
    #[serde(default)]
    pub category: Category,
}

impl Business {
    /// Create a builder for constructing a [`Business`].
    #[must_use]
    pub fn builder() -> BusinessBuilder {
        BusinessBuilder::default()
    }

    /// Check domain invariants.
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::Validation`] when `name`, `location`, or
    /// `description` is empty.
    pub fn validate(&self) -> Result<(), GuidepostError> {
        for (field, value) in [
            ("name", &self.name),
            ("location", &self.location),
            ("description", &self.description),
        ] {
            if value.is_empty() {
                return Err(ValidationError::EmptyField(field).into());
            }
        }
        Ok(())
    }

    /// Merge a partial update into this record. A supplied field fully
    /// overwrites the stored value; an omitted field is preserved.
    pub fn apply(&mut self, patch: BusinessPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(phone) = patch.phone {
            self.phone = phone;
        }
        if let Some(hours) = patch.hours {
            self.hours = hours;
        }
        if let Some(rating) = patch.rating {
            self.rating = rating;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
        if let Some(category) = patch.category {
            self.category = category;
        }
    }
}

impl Searchable for Business {
    fn haystack(&self) -> String {
        format!("{}{}", self.name, self.description)
    }
}

/// Partial update for a [`Business`]; `None` fields keep their value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct BusinessPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub phone: Option<String>,
    pub hours: Option<String>,
    pub rating: Option<String>,
    pub description: Option<String>,
    pub category: Option<Category>,
}

/// Step-by-step builder for [`Business`].
#[derive(Debug, Default)]
pub struct BusinessBuilder {
    name: Option<String>,
    location: Option<String>,
    url: Option<String>,
    phone: Option<String>,
    hours: Option<String>,
    rating: Option<String>,
    description: Option<String>,
    category: Option<Category>,
}

impl BusinessBuilder {
    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn phone(mut self, phone: impl Into<String>) -> Self {
        self.phone = Some(phone.into());
        self
    }

    #[must_use]
    pub fn hours(mut self, hours: impl Into<String>) -> Self {
        self.hours = Some(hours.into());
        self
    }

    #[must_use]
    pub fn rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = Some(rating.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    #[must_use]
    pub fn category(mut self, category: Category) -> Self {
        self.category = Some(category);
        self
    }

    /// Consume the builder, validate, and return a [`Business`].
    ///
    /// Unset string fields default to empty; an unset category defaults to
    /// [`Category::Shop`].
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::Validation`] if a required field is
    /// missing or empty.
    pub fn build(self) -> Result<Business, GuidepostError> {
        let business = Business {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            phone: self.phone.unwrap_or_default(),
            hours: self.hours.unwrap_or_default(),
            rating: self.rating.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
            category: self.category.unwrap_or_default(),
        };
        business.validate()?;
        Ok(business)
    }
}
