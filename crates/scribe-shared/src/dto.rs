//! Data Transfer Objects - request/response types for the API.

use serde::{Deserialize, Serialize};

use scribe_core::domain::GeneratedContent;

/// Generated blog post together with the id it was stored under.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateContentResponse {
    #[serde(flatten)]
    pub content: GeneratedContent,
    pub id: i32,
}

/// Request for topic ideas.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TopicSuggestionsRequest {
    #[serde(default)]
    pub theme: Option<String>,
}

/// Topic ideas returned by the generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TopicSuggestionsResponse {
    pub suggestions: Vec<String>,
}

/// Query string of the recent posts listing. The limit is kept raw so the
/// handler can apply its fallback rules to unparseable values.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RecentPostsQuery {
    pub limit: Option<String>,
}

/// Plain confirmation message.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_response_is_flat() {
        let response = GenerateContentResponse {
            content: GeneratedContent {
                title: "T".to_string(),
                content: "<p>C</p>".to_string(),
                featured_image_description: "Image".to_string(),
                seo_score: 70,
                word_count: 400,
                reading_time: 2,
                seo_suggestions: vec![],
            },
            id: 5,
        };

        let json = serde_json::to_value(response).unwrap();
        assert_eq!(json["id"], 5);
        assert_eq!(json["title"], "T");
        assert_eq!(json["readingTime"], 2);
        assert!(json.get("content").unwrap().is_string());
    }
}
