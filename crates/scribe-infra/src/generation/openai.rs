//! OpenAI chat-completions content generator.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use scribe_core::domain::{
    GeneratedContent, GeneratedSocialPost, GenerationRequest, SocialPostRequest,
    reading_time_minutes, seo_score,
};
use scribe_core::ports::{ContentGenerator, GenerationError};

use super::prompt;

const DEFAULT_BASE_URL: &str = "https://api.openai.com/v1";
const DEFAULT_MODEL: &str = "gpt-4o";

/// OpenAI client configuration.
#[derive(Debug, Clone)]
pub struct OpenAiConfig {
    /// API key. Calls fail with [`GenerationError::NotConfigured`] when absent.
    pub api_key: Option<String>,
    pub base_url: String,
    pub model: String,
    pub timeout: Duration,
}

impl Default for OpenAiConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            model: DEFAULT_MODEL.to_string(),
            timeout: Duration::from_secs(120),
        }
    }
}

impl OpenAiConfig {
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            api_key: std::env::var("OPENAI_API_KEY")
                .or_else(|_| std::env::var("OPENAI_API_KEY_ENV_VAR"))
                .ok()
                .filter(|k| !k.trim().is_empty()),
            base_url: std::env::var("OPENAI_BASE_URL").unwrap_or(defaults.base_url),
            model: std::env::var("OPENAI_MODEL").unwrap_or(defaults.model),
            timeout: std::env::var("OPENAI_TIMEOUT_SECS")
                .ok()
                .and_then(|s| s.parse().ok())
                .map(Duration::from_secs)
                .unwrap_or(defaults.timeout),
        }
    }
}

#[derive(Debug, Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage>,
    response_format: ResponseFormat,
    temperature: f32,
    max_tokens: u32,
}

#[derive(Debug, Serialize)]
struct ResponseFormat {
    #[serde(rename = "type")]
    kind: &'static str,
}

#[derive(Debug, Serialize)]
struct ChatMessage {
    role: &'static str,
    content: MessageContent,
}

impl ChatMessage {
    fn system(text: &str) -> Self {
        Self {
            role: "system",
            content: MessageContent::Text(text.to_string()),
        }
    }

    fn user(text: String) -> Self {
        Self {
            role: "user",
            content: MessageContent::Text(text),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(untagged)]
enum MessageContent {
    Text(String),
    Parts(Vec<ContentPart>),
}

#[derive(Debug, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum ContentPart {
    Text { text: String },
    ImageUrl { image_url: ImageUrl },
}

#[derive(Debug, Serialize)]
struct ImageUrl {
    url: String,
}

#[derive(Debug, Deserialize)]
struct ChatResponse {
    choices: Vec<Choice>,
}

#[derive(Debug, Deserialize)]
struct Choice {
    message: ResponseMessage,
}

#[derive(Debug, Deserialize)]
struct ResponseMessage {
    content: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BlogPayload {
    title: Option<String>,
    content: Option<String>,
    featured_image_description: Option<String>,
    seo_suggestions: Option<Vec<String>>,
    word_count: Option<Value>,
}

#[derive(Debug, Default, Deserialize)]
struct TopicsPayload {
    topics: Option<Vec<String>>,
}

#[derive(Debug, Default, Deserialize)]
struct SocialPayload {
    caption: Option<String>,
    hashtags: Option<Vec<String>>,
    engagement_tips: Option<Vec<String>>,
}

/// Content generator backed by an OpenAI-compatible chat-completions API.
#[derive(Clone)]
pub struct OpenAiContentGenerator {
    client: Client,
    config: OpenAiConfig,
}

impl OpenAiContentGenerator {
    pub fn new(config: OpenAiConfig) -> Result<Self, GenerationError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        Ok(Self { client, config })
    }

    /// Run a chat completion in JSON mode and decode the message body as `T`.
    async fn complete_json<T: DeserializeOwned + Default>(
        &self,
        messages: Vec<ChatMessage>,
        temperature: f32,
        max_tokens: u32,
    ) -> Result<T, GenerationError> {
        let api_key = self.config.api_key.as_deref().ok_or_else(|| {
            GenerationError::NotConfigured("OPENAI_API_KEY is not set".to_string())
        })?;

        let body = ChatRequest {
            model: &self.config.model,
            messages,
            response_format: ResponseFormat {
                kind: "json_object",
            },
            temperature,
            max_tokens,
        };

        let url = format!("{}/chat/completions", self.config.base_url.trim_end_matches('/'));
        let response = self
            .client
            .post(&url)
            .bearer_auth(api_key)
            .json(&body)
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let body = response.text().await.unwrap_or_default();
            tracing::error!(status, "Content provider request failed");
            return Err(GenerationError::Provider { status, body });
        }

        let chat: ChatResponse = response
            .json()
            .await
            .map_err(|e| GenerationError::InvalidResponse(e.to_string()))?;

        let content = chat
            .choices
            .into_iter()
            .next()
            .and_then(|c| c.message.content)
            .unwrap_or_default();

        decode_payload(&content)
    }
}

/// Decode a model's JSON answer. An empty answer decodes as the payload's default.
fn decode_payload<T: DeserializeOwned + Default>(content: &str) -> Result<T, GenerationError> {
    if content.trim().is_empty() {
        return Ok(T::default());
    }
    serde_json::from_str(content).map_err(|e| GenerationError::InvalidResponse(e.to_string()))
}

/// Models report the word count as a number or as a numeric string.
fn parse_word_count(value: Option<&Value>) -> u32 {
    match value {
        Some(Value::Number(n)) => n
            .as_u64()
            .or_else(|| n.as_f64().filter(|f| *f >= 0.0).map(|f| f.round() as u64))
            .map(|n| u32::try_from(n).unwrap_or(u32::MAX))
            .unwrap_or(0),
        Some(Value::String(s)) => {
            let digits: String = s
                .trim()
                .chars()
                .skip_while(|c| !c.is_ascii_digit())
                .take_while(|c| c.is_ascii_digit() || *c == ',')
                .filter(char::is_ascii_digit)
                .collect();
            digits.parse().unwrap_or(0)
        }
        _ => 0,
    }
}

fn into_generated_content(payload: BlogPayload, request: &GenerationRequest) -> GeneratedContent {
    let title = payload
        .title
        .filter(|t| !t.trim().is_empty())
        .unwrap_or_else(|| "Generated Blog Post".to_string());
    let content = payload.content.unwrap_or_default();
    let word_count = parse_word_count(payload.word_count.as_ref());

    GeneratedContent {
        seo_score: seo_score(&title, &content, request.keywords()),
        reading_time: reading_time_minutes(word_count),
        featured_image_description: payload
            .featured_image_description
            .filter(|d| !d.trim().is_empty())
            .unwrap_or_else(|| "Professional blog post illustration".to_string()),
        seo_suggestions: payload.seo_suggestions.unwrap_or_default(),
        title,
        content,
        word_count,
    }
}

#[async_trait]
impl ContentGenerator for OpenAiContentGenerator {
    async fn generate_blog_post(
        &self,
        request: &GenerationRequest,
    ) -> Result<GeneratedContent, GenerationError> {
        tracing::info!(
            topic = %request.topic,
            length = %request.content_length,
            "Generating blog post"
        );

        let payload: BlogPayload = self
            .complete_json(
                vec![
                    ChatMessage::system(prompt::BLOG_SYSTEM_PROMPT),
                    ChatMessage::user(prompt::blog_post(request)),
                ],
                0.7,
                3000,
            )
            .await?;

        Ok(into_generated_content(payload, request))
    }

    async fn suggest_topics(&self, theme: Option<&str>) -> Result<Vec<String>, GenerationError> {
        let payload: TopicsPayload = self
            .complete_json(
                vec![
                    ChatMessage::system(prompt::TOPICS_SYSTEM_PROMPT),
                    ChatMessage::user(prompt::topic_suggestions(theme)),
                ],
                0.8,
                500,
            )
            .await?;

        Ok(payload.topics.unwrap_or_default())
    }

    async fn generate_social_post(
        &self,
        request: &SocialPostRequest,
    ) -> Result<GeneratedSocialPost, GenerationError> {
        tracing::info!(platform = %request.platform, "Generating social media post");

        let user = ChatMessage {
            role: "user",
            content: MessageContent::Parts(vec![
                ContentPart::Text {
                    text: prompt::social_post(request),
                },
                ContentPart::ImageUrl {
                    image_url: ImageUrl {
                        url: format!("data:image/jpeg;base64,{}", request.image_base64.trim()),
                    },
                },
            ]),
        };

        let payload: SocialPayload = self
            .complete_json(
                vec![ChatMessage::system(prompt::SOCIAL_SYSTEM_PROMPT), user],
                0.8,
                800,
            )
            .await?;

        let hashtags = if request.include_hashtags {
            payload
                .hashtags
                .unwrap_or_default()
                .into_iter()
                .map(|tag| tag.trim().trim_start_matches('#').to_string())
                .filter(|tag| !tag.is_empty())
                .collect()
        } else {
            Vec::new()
        };

        Ok(GeneratedSocialPost {
            caption: payload.caption.unwrap_or_default(),
            hashtags,
            platform: request.platform,
            engagement_tips: payload.engagement_tips.unwrap_or_default(),
        })
    }
}

#[cfg(test)]
mod tests {
    use scribe_core::domain::{ContentLength, TargetAudience, WritingTone};
    use serde_json::json;

    use super::*;

    fn request() -> GenerationRequest {
        GenerationRequest {
            topic: "Rust".to_string(),
            keywords: Some("rust".to_string()),
            content_length: ContentLength::Short,
            writing_tone: WritingTone::Professional,
            target_audience: TargetAudience::Technical,
        }
    }

    #[test]
    fn test_word_count_accepts_numbers_and_strings() {
        assert_eq!(parse_word_count(Some(&json!(850))), 850);
        assert_eq!(parse_word_count(Some(&json!(849.6))), 850);
        assert_eq!(parse_word_count(Some(&json!("1,200"))), 1200);
        assert_eq!(parse_word_count(Some(&json!("about 640 words"))), 640);
        assert_eq!(parse_word_count(Some(&json!("many"))), 0);
        assert_eq!(parse_word_count(Some(&json!(-3))), 0);
        assert_eq!(parse_word_count(None), 0);
    }

    #[test]
    fn test_missing_fields_fall_back_to_defaults() {
        let payload: BlogPayload = decode_payload("{}").unwrap();
        let content = into_generated_content(payload, &request());

        assert_eq!(content.title, "Generated Blog Post");
        assert_eq!(content.content, "");
        assert_eq!(content.featured_image_description, "Professional blog post illustration");
        assert!(content.seo_suggestions.is_empty());
        assert_eq!(content.word_count, 0);
        assert_eq!(content.reading_time, 0);
    }

    #[test]
    fn test_blank_title_and_image_description_use_defaults() {
        let raw = json!({"title": "  ", "featuredImageDescription": "", "content": "<p>x</p>"});
        let payload: BlogPayload = decode_payload(&raw.to_string()).unwrap();
        let content = into_generated_content(payload, &request());

        assert_eq!(content.title, "Generated Blog Post");
        assert_eq!(content.featured_image_description, "Professional blog post illustration");
        assert_eq!(content.content, "<p>x</p>");
    }

    #[test]
    fn test_payload_is_scored() {
        let raw = json!({
            "title": "Rust in production",
            "content": "<h2>Why</h2><p>Because.</p>",
            "featuredImageDescription": "A crab at a desk",
            "seoSuggestions": ["Add alt text"],
            "wordCount": "450"
        })
        .to_string();

        let payload: BlogPayload = decode_payload(&raw).unwrap();
        let content = into_generated_content(payload, &request());

        assert_eq!(content.word_count, 450);
        assert_eq!(content.reading_time, 3);
        // base 60 + keyword in title 10 + headings 10
        assert_eq!(content.seo_score, 80);
        assert_eq!(content.seo_suggestions, vec!["Add alt text".to_string()]);
    }

    #[test]
    fn test_unparseable_output_is_an_error() {
        let result: Result<TopicsPayload, _> = decode_payload("not json");
        assert!(matches!(result, Err(GenerationError::InvalidResponse(_))));

        let empty: TopicsPayload = decode_payload("").unwrap();
        assert!(empty.topics.is_none());
    }

    #[test]
    fn test_image_part_wire_format() {
        let part = ContentPart::ImageUrl {
            image_url: ImageUrl {
                url: "data:image/jpeg;base64,aGk=".to_string(),
            },
        };
        assert_eq!(
            serde_json::to_value(part).unwrap(),
            json!({"type": "image_url", "image_url": {"url": "data:image/jpeg;base64,aGk="}})
        );
    }

    #[tokio::test]
    async fn test_missing_api_key_fails_without_network() {
        let generator = OpenAiContentGenerator::new(OpenAiConfig::default()).unwrap();

        let err = generator.suggest_topics(None).await.unwrap_err();
        assert!(matches!(err, GenerationError::NotConfigured(_)));
    }
}
