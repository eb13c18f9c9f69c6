use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

use saga_http::error::ApiError;

/// A persisted story, projected for API responses.
#[derive(Debug, Clone, Serialize, FromRow)]
pub struct Story {
    /// Surrogate identifier generated by the database
    pub id: Uuid,
    /// Unique URL slug, `<title>-<creation epoch millis>`
    pub slug: String,
    /// Title of the story
    pub title: String,
    /// Cover image URL
    pub image: String,
    /// Category of the story
    pub category: String,
    /// Short synopsis
    pub synopsis: String,
    /// Author name
    pub author: String,
    /// Full story text
    pub content: String,
    /// Maintained by the database on write
    #[serde(rename = "updatedAt")]
    pub updated_at: DateTime<Utc>,
}

/// Client-supplied fields for a new story.
///
/// Absent fields deserialize as empty strings so that a missing field and an
/// empty one fail validation the same way.
#[derive(Debug, Clone, Deserialize)]
pub struct StoryDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub image: String,
    #[serde(default)]
    pub category: String,
    #[serde(default)]
    pub synopsis: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub content: String,
}

impl StoryDraft {
    /// Required-field check in declaration order; the first empty field wins
    /// and later fields are not inspected.
    pub fn validate(&self) -> Result<(), ApiError> {
        let checks = [
            (&self.title, "Please enter story title!"),
            (&self.image, "Please enter story image!"),
            (&self.category, "Please enter story category!"),
            (&self.synopsis, "Please enter story synopsis!"),
            (&self.author, "Please enter author name!"),
            (&self.content, "Please enter story content!"),
        ];

        for (value, message) in checks {
            if value.is_empty() {
                return Err(ApiError::validation(message));
            }
        }

        Ok(())
    }

    /// Derive the unique slug for this draft.
    ///
    /// Computed once at creation time and never recomputed. Two creations of
    /// the same title within one millisecond collide on the unique index and
    /// surface as a persistence fault.
    pub fn slug(&self) -> String {
        format!("{}-{}", self.title, crate::utils::epoch_millis())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn full_draft() -> StoryDraft {
        StoryDraft {
            title: "The Long Rain".to_string(),
            image: "https://example.com/rain.jpg".to_string(),
            category: "sci-fi".to_string(),
            synopsis: "Four men search for a sun dome on Venus.".to_string(),
            author: "Ray".to_string(),
            content: "The rain continued.".to_string(),
        }
    }

    #[test]
    fn complete_draft_passes_validation() {
        assert!(full_draft().validate().is_ok());
    }

    #[test]
    fn missing_fields_deserialize_as_empty() {
        let draft: StoryDraft = serde_json::from_value(json!({})).unwrap();
        assert!(draft.title.is_empty());
        assert!(draft.content.is_empty());
    }

    #[test]
    fn first_empty_field_wins() {
        let draft: StoryDraft = serde_json::from_value(json!({})).unwrap();
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Please enter story title!");
    }

    #[test]
    fn validation_follows_declaration_order() {
        // Title present, image absent: image must be reported even though
        // category and the rest are empty too.
        let draft: StoryDraft = serde_json::from_value(json!({
            "title": "The Long Rain"
        }))
        .unwrap();
        let error = draft.validate().unwrap_err();
        assert_eq!(error.to_string(), "Please enter story image!");
    }

    #[test]
    fn every_field_reports_its_own_message() {
        let cases = [
            ("title", "Please enter story title!"),
            ("image", "Please enter story image!"),
            ("category", "Please enter story category!"),
            ("synopsis", "Please enter story synopsis!"),
            ("author", "Please enter author name!"),
            ("content", "Please enter story content!"),
        ];

        for (field, expected) in cases {
            let mut draft = full_draft();
            match field {
                "title" => draft.title.clear(),
                "image" => draft.image.clear(),
                "category" => draft.category.clear(),
                "synopsis" => draft.synopsis.clear(),
                "author" => draft.author.clear(),
                "content" => draft.content.clear(),
                _ => unreachable!(),
            }
            let error = draft.validate().unwrap_err();
            assert_eq!(error.to_string(), expected, "field: {field}");
        }
    }

    #[test]
    fn slug_is_title_plus_epoch_millis() {
        let draft = full_draft();

        let before = crate::utils::epoch_millis();
        let slug = draft.slug();
        let after = crate::utils::epoch_millis();

        let suffix = slug
            .strip_prefix("The Long Rain-")
            .expect("slug starts with the title");
        let ms: i64 = suffix.parse().expect("slug ends with epoch millis");
        assert!(ms >= before && ms <= after);
    }

    #[test]
    fn story_serializes_with_camel_case_timestamp() {
        let story = Story {
            id: Uuid::new_v4(),
            slug: "The Long Rain-1700000000000".to_string(),
            title: "The Long Rain".to_string(),
            image: "https://example.com/rain.jpg".to_string(),
            category: "sci-fi".to_string(),
            synopsis: "Four men search for a sun dome on Venus.".to_string(),
            author: "Ray".to_string(),
            content: "The rain continued.".to_string(),
            updated_at: Utc::now(),
        };

        let value = serde_json::to_value(&story).unwrap();
        let keys: Vec<&str> = value.as_object().unwrap().keys().map(|k| k.as_str()).collect();

        assert!(keys.contains(&"updatedAt"));
        assert!(!keys.contains(&"updated_at"));
        assert_eq!(keys.len(), 9, "response carries exactly the projected fields");
    }
}
