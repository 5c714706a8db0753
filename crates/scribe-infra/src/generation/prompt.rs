//! Prompt text sent to the chat model.

use scribe_core::domain::{GenerationRequest, SocialPostRequest};

pub const BLOG_SYSTEM_PROMPT: &str = "You are an expert content writer and SEO specialist. \
Create high-quality, engaging blog posts that are optimized for search engines and provide real value to readers.";

pub const TOPICS_SYSTEM_PROMPT: &str = "You are a content marketing expert who creates \
compelling blog post topics that drive engagement and traffic.";

pub const SOCIAL_SYSTEM_PROMPT: &str = "You are a social media manager who writes captions \
that fit each platform's conventions and drive engagement.";

pub fn blog_post(request: &GenerationRequest) -> String {
    let keywords = request.keywords();
    let tone = request.writing_tone;
    let audience = request.target_audience;

    format!(
        r#"Create a comprehensive blog post with the following specifications:

Topic: {topic}
Keywords: {listed_keywords}
Target word count: {target} words
Writing tone: {tone}
Target audience: {audience}

Please provide a response in JSON format with the following structure:
{{
  "title": "An engaging, SEO-optimized title",
  "content": "Full blog post content in HTML format with proper headings (h2, h3), paragraphs, and formatting. Include engaging introduction, well-structured body with subheadings, and compelling conclusion.",
  "featuredImageDescription": "Detailed description for a featured image that would complement this blog post",
  "seoSuggestions": ["Array of 3-5 specific SEO improvement suggestions"],
  "wordCount": "Estimated word count as a number"
}}

Requirements:
- Use proper HTML formatting for the content
- Include relevant subheadings (h2, h3 tags)
- Write in {tone} tone for {audience} audience
- Naturally incorporate keywords: {inline_keywords}
- Make content engaging and informative
- Ensure content is original and valuable
- Include a compelling introduction and conclusion
- Add relevant examples or case studies if applicable"#,
        topic = request.topic.trim(),
        listed_keywords = keywords.unwrap_or("None specified"),
        target = request.content_length.word_target(),
        inline_keywords = keywords.unwrap_or(""),
    )
}

pub fn topic_suggestions(theme: Option<&str>) -> String {
    let scope = match theme.map(str::trim).filter(|t| !t.is_empty()) {
        Some(theme) => format!(" related to: {theme}"),
        None => " for various industries and interests".to_string(),
    };

    format!(
        r#"Generate 10 engaging blog post topic suggestions{scope}.

Please provide a response in JSON format:
{{
  "topics": ["Topic 1", "Topic 2", "Topic 3", ...]
}}

Make sure topics are:
- Specific and actionable
- SEO-friendly
- Engaging for readers
- Relevant to current trends"#
    )
}

pub fn social_post(request: &SocialPostRequest) -> String {
    let hashtags = if request.include_hashtags {
        "Include 5-10 relevant hashtags without the leading '#'."
    } else {
        "Do not include any hashtags; return an empty list."
    };

    format!(
        r#"Write a {platform} post caption for the attached image in a {tone} tone.
{hashtags}

Please provide a response in JSON format:
{{
  "caption": "The caption text",
  "hashtags": ["hashtag1", "hashtag2"],
  "engagement_tips": ["2-4 tips to increase engagement on {platform}"]
}}"#,
        platform = request.platform,
        tone = request.tone,
    )
}
