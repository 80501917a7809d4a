//! Event — a dated happening at a venue.

use serde::{Deserialize, Serialize};

use crate::error::{GuidepostError, ValidationError};
use crate::query::Searchable;

/// A single event listing.
///
/// `date` and `time` are opaque strings preserved verbatim: the service
/// never does calendar arithmetic on them, and the JSON endpoints must
/// round-trip the stored mapping exactly (including the `URL` key).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Event {
    pub name: String,
    pub location: String,
    #[serde(default)]
    pub venue: String,
    #[serde(rename = "URL", default)]
    pub url: String,
    #[serde(default)]
    pub date: String,
    #[serde(default)]
    pub time: String,
    pub description: String,
}

impl Event {
    /// Create a builder for constructing an [`Event`].
    #[must_use]
    pub fn builder() -> EventBuilder {
        EventBuilder::default()
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
    pub fn apply(&mut self, patch: EventPatch) {
        if let Some(name) = patch.name {
            self.name = name;
        }
        if let Some(location) = patch.location {
            self.location = location;
        }
        if let Some(venue) = patch.venue {
            self.venue = venue;
        }
        if let Some(url) = patch.url {
            self.url = url;
        }
        if let Some(date) = patch.date {
            self.date = date;
        }
        if let Some(time) = patch.time {
            self.time = time;
        }
        if let Some(description) = patch.description {
            self.description = description;
        }
    }
}

impl Searchable for Event {
    fn haystack(&self) -> String {
        format!("{}{}", self.name, self.description)
    }
}

/// Partial update for an [`Event`]; `None` fields keep their value.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct EventPatch {
    pub name: Option<String>,
    pub location: Option<String>,
    pub venue: Option<String>,
    #[serde(rename = "URL")]
    pub url: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub description: Option<String>,
}

/// Step-by-step builder for [`Event`].
#[derive(Debug, Default)]
pub struct EventBuilder {
    name: Option<String>,
    location: Option<String>,
    venue: Option<String>,
    url: Option<String>,
    date: Option<String>,
    time: Option<String>,
    description: Option<String>,
}

impl EventBuilder {
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
    pub fn venue(mut self, venue: impl Into<String>) -> Self {
        self.venue = Some(venue.into());
        self
    }

    #[must_use]
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.url = Some(url.into());
        self
    }

    #[must_use]
    pub fn date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }

    #[must_use]
    pub fn time(mut self, time: impl Into<String>) -> Self {
        self.time = Some(time.into());
        self
    }

    #[must_use]
    pub fn description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Consume the builder, validate, and return an [`Event`].
    ///
    /// # Errors
    ///
    /// Returns [`GuidepostError::Validation`] if a required field is
    /// missing or empty.
    pub fn build(self) -> Result<Event, GuidepostError> {
        let event = Event {
            name: self.name.unwrap_or_default(),
            location: self.location.unwrap_or_default(),
            venue: self.venue.unwrap_or_default(),
            url: self.url.unwrap_or_default(),
            date: self.date.unwrap_or_default(),
            time: self.time.unwrap_or_default(),
            description: self.description.unwrap_or_default(),
        };
        event.validate()?;
        Ok(event)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Event {
        Event::builder()
            .name("Harbor Jazz Night")
            .location("Pier 4")
            .venue("The Boathouse")
            .date("2026-09-12")
            .time("20:00")
            .description("live quartet")
            .build()
            .unwrap()
    }

    #[test]
    fn should_reject_build_when_description_missing() {
        let result = Event::builder().name("Untitled").location("Pier 4").build();
        assert!(matches!(
            result,
            Err(GuidepostError::Validation(ValidationError::EmptyField(
                "description"
            )))
        ));
    }

    #[test]
    fn should_change_only_supplied_fields_when_applying_patch() {
        let mut event = sample();
        event.apply(EventPatch {
            time: Some("21:30".to_string()),
            ..EventPatch::default()
        });

        assert_eq!(event.time, "21:30");
        assert_eq!(event.date, "2026-09-12");
        assert_eq!(event.venue, "The Boathouse");
    }

    #[test]
    fn should_serialize_url_field_with_verbatim_key() {
        let mut event = sample();
        event.url = "http://jazz.example".to_string();
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["URL"], "http://jazz.example");
    }

    #[test]
    fn should_roundtrip_through_serde_json() {
        let event = sample();
        let json = serde_json::to_string(&event).unwrap();
        let parsed: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, event);
    }
}
